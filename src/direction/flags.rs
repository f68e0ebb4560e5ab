//! Feature flags gating direction-resolution behavior.

use bitflags::bitflags;

bitflags! {
    /// Runtime feature flags consumed at anchor construction.
    ///
    /// Mirrors the host framework's feature-flag service: flags are read
    /// once when the container is built and select which strategies it
    /// carries for its lifetime.
    ///
    /// # Example
    /// ```
    /// use rtl_anchor::FeatureFlags;
    /// let flags = FeatureFlags::LIVE_DIRECTION;
    /// assert!(flags.contains(FeatureFlags::LIVE_DIRECTION));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FeatureFlags: u8 {
        /// Resolve layout direction live on every pass instead of freezing
        /// the value captured at construction.
        const LIVE_DIRECTION = 0b0000_0001;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_default_empty() {
        assert!(FeatureFlags::default().is_empty());
        assert!(!FeatureFlags::default().contains(FeatureFlags::LIVE_DIRECTION));
    }
}
