//! Direction module: Layout-direction detection and resolution.
//!
//! Whether a container is mirrored for RTL is decided elsewhere (locale
//! service, i18n switches) - this crate only consumes the resulting signal.
//! The pieces here are the seam to that decision: a [`DirectionSource`] to
//! query, a [`DirectionPolicy`] deciding *when* to query (once at
//! construction vs. live on every pass), and the feature flag selecting
//! between the two.

mod flags;
mod locale;
mod policy;

pub use flags::FeatureFlags;
pub use locale::LocaleDirection;
pub use policy::{policy_for, DirectionPolicy, FrozenPolicy, LivePolicy};

/// Horizontal layout direction of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutDirection {
    /// Left-to-right. The default when detection is inconclusive.
    #[default]
    Ltr,
    /// Right-to-left.
    Rtl,
}

impl LayoutDirection {
    /// Check if this is the right-to-left direction.
    #[inline]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}

/// A source of layout-direction information (locale service, platform query).
///
/// Returning `None` means the service cannot determine RTL-ness; resolution
/// falls back to LTR in that case.
pub trait DirectionSource {
    /// Query the current direction, if determinable.
    fn detect(&self) -> Option<LayoutDirection>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_default_is_ltr() {
        assert_eq!(LayoutDirection::default(), LayoutDirection::Ltr);
    }

    #[test]
    fn test_is_rtl() {
        assert!(LayoutDirection::Rtl.is_rtl());
        assert!(!LayoutDirection::Ltr.is_rtl());
    }
}
