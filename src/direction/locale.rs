//! `LocaleDirection`: Locale-backed direction source with i18n switches.

use std::cell::Cell;

use super::{DirectionSource, LayoutDirection};

/// Direction source driven by the locale plus two i18n switches.
///
/// `force_rtl` wins unconditionally; otherwise RTL requires both an RTL
/// locale and the `allow_rtl` switch. All three knobs may change at runtime,
/// which only matters to anchors resolving through the live policy.
#[derive(Debug)]
pub struct LocaleDirection {
    locale_is_rtl: Cell<bool>,
    allow_rtl: Cell<bool>,
    force_rtl: Cell<bool>,
}

impl LocaleDirection {
    /// Create a source for an LTR locale with RTL allowed but not forced.
    pub const fn new() -> Self {
        Self {
            locale_is_rtl: Cell::new(false),
            allow_rtl: Cell::new(true),
            force_rtl: Cell::new(false),
        }
    }

    /// Record whether the current locale reads right-to-left.
    pub fn set_locale_rtl(&self, rtl: bool) {
        self.locale_is_rtl.set(rtl);
    }

    /// Allow or disallow RTL layout for RTL locales.
    pub fn set_allow_rtl(&self, allow: bool) {
        self.allow_rtl.set(allow);
    }

    /// Force RTL layout regardless of locale. Development switch.
    pub fn set_force_rtl(&self, force: bool) {
        self.force_rtl.set(force);
    }
}

impl Default for LocaleDirection {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectionSource for LocaleDirection {
    fn detect(&self) -> Option<LayoutDirection> {
        if self.force_rtl.get() {
            return Some(LayoutDirection::Rtl);
        }
        if self.locale_is_rtl.get() && self.allow_rtl.get() {
            return Some(LayoutDirection::Rtl);
        }
        Some(LayoutDirection::Ltr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_ltr() {
        let source = LocaleDirection::new();
        assert_eq!(source.detect(), Some(LayoutDirection::Ltr));
    }

    #[test]
    fn test_rtl_locale_with_allow() {
        let source = LocaleDirection::new();
        source.set_locale_rtl(true);
        assert_eq!(source.detect(), Some(LayoutDirection::Rtl));
    }

    #[test]
    fn test_rtl_locale_without_allow() {
        let source = LocaleDirection::new();
        source.set_locale_rtl(true);
        source.set_allow_rtl(false);
        assert_eq!(source.detect(), Some(LayoutDirection::Ltr));
    }

    #[test]
    fn test_force_rtl_wins() {
        let source = LocaleDirection::new();
        source.set_allow_rtl(false);
        source.set_force_rtl(true);
        assert_eq!(source.detect(), Some(LayoutDirection::Rtl));
    }
}
