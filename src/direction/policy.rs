//! Direction-resolution policies: frozen-at-construction vs. live.

use std::rc::Rc;

use super::{DirectionSource, FeatureFlags, LayoutDirection};

/// Decides when the direction signal is sampled.
///
/// The anchor resolves through this on every pass; whether that resolution
/// re-queries the platform or returns a captured value is the policy's call.
pub trait DirectionPolicy {
    /// Resolve the effective direction for the current pass.
    fn resolve(&self) -> LayoutDirection;
}

/// Policy that captures the direction once and never re-queries.
///
/// The legacy mode: stable for the container's lifetime, immune to
/// mid-session locale flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrozenPolicy {
    direction: LayoutDirection,
}

impl FrozenPolicy {
    /// Freeze an explicit direction.
    pub const fn new(direction: LayoutDirection) -> Self {
        Self { direction }
    }

    /// Freeze whatever the source reports right now (LTR if unknown).
    pub fn capture(source: &dyn DirectionSource) -> Self {
        Self {
            direction: source.detect().unwrap_or_default(),
        }
    }
}

impl DirectionPolicy for FrozenPolicy {
    fn resolve(&self) -> LayoutDirection {
        self.direction
    }
}

/// Policy that re-queries the platform source on every resolution.
///
/// Reacts to runtime locale changes. Gated behind
/// [`FeatureFlags::LIVE_DIRECTION`] so callers can migrate without breaking
/// frozen-mode behavior.
pub struct LivePolicy {
    source: Rc<dyn DirectionSource>,
}

impl LivePolicy {
    /// Create a live policy over a shared direction source.
    pub fn new(source: Rc<dyn DirectionSource>) -> Self {
        Self { source }
    }
}

impl DirectionPolicy for LivePolicy {
    fn resolve(&self) -> LayoutDirection {
        self.source.detect().unwrap_or_default()
    }
}

impl std::fmt::Debug for LivePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("LivePolicy")
    }
}

/// Build the policy selected by the feature flags.
///
/// [`FeatureFlags::LIVE_DIRECTION`] set - live resolution over `source`;
/// otherwise the direction is captured from `source` now and frozen.
pub fn policy_for(
    flags: FeatureFlags,
    source: &Rc<dyn DirectionSource>,
) -> Box<dyn DirectionPolicy> {
    if flags.contains(FeatureFlags::LIVE_DIRECTION) {
        Box::new(LivePolicy::new(Rc::clone(source)))
    } else {
        Box::new(FrozenPolicy::capture(source.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::LocaleDirection;

    struct UnknownSource;

    impl DirectionSource for UnknownSource {
        fn detect(&self) -> Option<LayoutDirection> {
            None
        }
    }

    #[test]
    fn test_frozen_ignores_source_changes() {
        let source = LocaleDirection::new();
        let policy = FrozenPolicy::capture(&source);
        source.set_force_rtl(true);
        assert_eq!(policy.resolve(), LayoutDirection::Ltr);
    }

    #[test]
    fn test_live_follows_source_changes() {
        let source = Rc::new(LocaleDirection::new());
        let policy = LivePolicy::new(source.clone());
        assert_eq!(policy.resolve(), LayoutDirection::Ltr);
        source.set_force_rtl(true);
        assert_eq!(policy.resolve(), LayoutDirection::Rtl);
    }

    #[test]
    fn test_unknown_defaults_to_ltr() {
        assert_eq!(FrozenPolicy::capture(&UnknownSource).resolve(), LayoutDirection::Ltr);
        let live = LivePolicy::new(Rc::new(UnknownSource));
        assert_eq!(live.resolve(), LayoutDirection::Ltr);
    }

    #[test]
    fn test_policy_for_selects_by_flag() {
        let locale = Rc::new(LocaleDirection::new());
        let source: Rc<dyn DirectionSource> = locale.clone();

        let frozen = policy_for(FeatureFlags::empty(), &source);
        let live = policy_for(FeatureFlags::LIVE_DIRECTION, &source);

        // Flip the source after construction: only the live policy follows.
        locale.set_force_rtl(true);
        assert_eq!(frozen.resolve(), LayoutDirection::Ltr);
        assert_eq!(live.resolve(), LayoutDirection::Rtl);
    }
}
