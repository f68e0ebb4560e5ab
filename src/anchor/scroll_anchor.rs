//! `RtlScrollAnchor`: The per-container correction state machine.

use std::rc::{Rc, Weak};

use crate::direction::{policy_for, DirectionPolicy, DirectionSource, FeatureFlags, LayoutDirection};
use crate::layout::LayoutBox;
use crate::viewport::ScrollViewport;

use super::host::ScrollHost;
use super::listener::ListenerSlot;
use super::CorrectionListener;

/// Result of one layout pass through the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOutcome {
    /// Box the rendering pipeline should use.
    pub corrected: LayoutBox,
    /// Horizontal offset written to the viewport, if a correction ran.
    pub scroll_delta: Option<i32>,
    /// Whether the listener was notified this pass.
    pub notified: bool,
}

impl LayoutOutcome {
    /// Outcome of an LTR pass: the box goes through untouched.
    const fn pass_through(corrected: LayoutBox) -> Self {
        Self {
            corrected,
            scroll_delta: None,
            notified: false,
        }
    }
}

/// Corrects box geometry and scroll offsets for an RTL container.
///
/// One anchor per container; all state dies with it. See the
/// [module docs](crate::anchor) for the correction itself.
pub struct RtlScrollAnchor {
    policy: Box<dyn DirectionPolicy>,
    /// Measured width as of the most recent corrected pass. 0 means no
    /// prior layout observed.
    last_width: i32,
    listener: ListenerSlot,
}

impl RtlScrollAnchor {
    /// Create an anchor with the given direction-resolution policy.
    pub fn new(policy: Box<dyn DirectionPolicy>) -> Self {
        Self {
            policy,
            last_width: 0,
            listener: ListenerSlot::default(),
        }
    }

    /// Create an anchor whose policy is selected by the feature flags:
    /// live resolution when [`FeatureFlags::LIVE_DIRECTION`] is set,
    /// otherwise the direction is captured from `source` now and frozen.
    pub fn from_flags(flags: FeatureFlags, source: &Rc<dyn DirectionSource>) -> Self {
        Self::new(policy_for(flags, source))
    }

    /// Resolve the effective direction for the current pass.
    pub fn direction(&self) -> LayoutDirection {
        self.policy.resolve()
    }

    /// Measured width as of the most recent corrected pass (0 before the
    /// first RTL layout). Diagnostics accessor.
    pub const fn last_width(&self) -> i32 {
        self.last_width
    }

    /// Register, replace, or clear the correction listener.
    ///
    /// Single slot: a new listener replaces the previous one, which is
    /// dropped without notification.
    pub fn set_listener(&mut self, listener: Option<Weak<dyn CorrectionListener>>) {
        self.listener.set(listener);
    }

    /// Request the offscreen-child culling optimization on the host.
    ///
    /// Culling interacts badly with the negative-offset geometry of RTL
    /// passes (focused input-like children can flicker or blur), so under
    /// RTL the request is overridden and culling stays off. LTR applies the
    /// request verbatim.
    pub fn set_culling_enabled(&self, requested: bool, host: &mut dyn ScrollHost) {
        if self.direction().is_rtl() {
            host.set_culling(false);
            return;
        }
        host.set_culling(requested);
    }

    /// Run one layout pass over the solver-produced box.
    ///
    /// `changed` mirrors the solver's "geometry changed" hint but never
    /// skips the RTL correction: content-width growth with unchanged outer
    /// coordinates still has to move the scroll offset.
    ///
    /// LTR passes return the box untouched and leave all anchor state
    /// alone. RTL passes re-anchor the box at the origin, write the
    /// compensated offset to the viewport, update the width bookkeeping,
    /// then notify the listener.
    ///
    /// Known first-pass quirk: with no prior layout observed the delta is
    /// the full measured width plus the current offset, which jumps the
    /// viewport to the visual-right end of the content. Downstream
    /// consumers compensate for this; do not special-case it here.
    pub fn on_layout(
        &mut self,
        changed: bool,
        proposed: LayoutBox,
        host: &mut dyn ScrollHost,
        viewport: &mut dyn ScrollViewport,
    ) -> LayoutOutcome {
        // Overflowing (scaled) children get cropped by stale clip state, so
        // both toggles are cleared on every pass, LTR included.
        viewport.set_clip_children(false);
        host.set_clip_children(false);

        if !self.direction().is_rtl() {
            tracing::trace!(?proposed, changed, "ltr pass, no correction");
            return LayoutOutcome::pass_through(proposed);
        }

        // The solver laid the content out extending left of the origin;
        // re-anchor at 0 and keep its width authoritative.
        let corrected = proposed.anchored_to_origin();

        // Compensate the offset for width gained since the last pass, so
        // content already on screen stays put when items arrive at the
        // visual-left end.
        let measured = host.measured_width();
        let delta = measured - self.last_width + viewport.scroll_x();
        viewport.scroll_to(delta, viewport.scroll_y());
        self.last_width = measured;

        let notified = self.listener.notify();
        tracing::debug!(measured, delta, notified, "applied rtl correction");

        LayoutOutcome {
            corrected,
            scroll_delta: Some(delta),
            notified,
        }
    }
}

impl std::fmt::Debug for RtlScrollAnchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RtlScrollAnchor")
            .field("direction", &self.direction())
            .field("last_width", &self.last_width)
            .finish_non_exhaustive()
    }
}
