//! Anchor module: Layout correction for RTL horizontal scrolling.
//!
//! The flow solver upstream computes positions as if every container were
//! LTR; under RTL mirroring it hands over a box extending off-screen to the
//! left. [`RtlScrollAnchor`] corrects that on every pass:
//!
//! 1. **Re-anchor** the box at the origin, size preserved
//! 2. **Compensate** the viewport's horizontal offset for width gained since
//!    the previous pass, so content already on screen stays put
//! 3. **Notify** the single registered listener that a correction ran
//!
//! LTR passes go through untouched.

mod host;
mod listener;
mod scroll_anchor;

pub use host::ScrollHost;
pub use listener::CorrectionListener;
pub use scroll_anchor::{LayoutOutcome, RtlScrollAnchor};
