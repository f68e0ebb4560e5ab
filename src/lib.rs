//! # RTL Anchor
//!
//! RTL-aware horizontal scroll anchoring for flow-based layout engines.
//!
//! Flow-based constraint solvers compute child positions in a left-to-right
//! coordinate space. When a horizontally scrollable container is mirrored for
//! right-to-left content, the solver hands that container a box whose left
//! edge is negative, so the content extends off-screen to the left.
//!
//! [`RtlScrollAnchor`] sits between the solver and the scrollable viewport.
//! On every layout pass it re-anchors the box back into visible coordinates
//! without changing its size, re-applies the viewport's horizontal offset so
//! content already on screen stays put when the content width grows between
//! passes (items prepended asynchronously), and notifies a listener that a
//! correction happened.
//!
//! ## Core Concepts
//!
//! - **Re-anchoring**: translate the solver's box so its left edge lands at
//!   0, keeping the solver's width computation authoritative
//! - **Scroll preservation**: `delta = measured - last_width + scroll_x`
//!   keeps previously visible content at the same screen position
//! - **Direction policies**: frozen-at-construction or live resolution,
//!   selected by a feature flag
//!
//! ## Example
//!
//! ```rust
//! use rtl_anchor::{
//!     ContentStrip, FrozenPolicy, LayoutBox, LayoutDirection, ModelViewport,
//!     RtlScrollAnchor, ScrollViewport,
//! };
//!
//! let mut anchor = RtlScrollAnchor::new(Box::new(FrozenPolicy::new(LayoutDirection::Rtl)));
//! let mut strip = ContentStrip::new(2);
//! strip.append("שלום");
//! strip.append("עולם");
//!
//! let mut viewport = ModelViewport::new(40);
//! let width = strip.measured();
//!
//! // The solver, unaware of mirroring, placed the content left of origin.
//! let outcome = anchor.on_layout(
//!     true,
//!     LayoutBox::new(-width, 0, 0, 1),
//!     &mut strip,
//!     &mut viewport,
//! );
//! assert_eq!(outcome.corrected.left, 0);
//! assert_eq!(outcome.corrected.width(), width);
//! assert_eq!(viewport.scroll_x(), width);
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod anchor;
pub mod content;
pub mod direction;
pub mod layout;
pub mod viewport;

// Re-exports for convenience
pub use anchor::{CorrectionListener, LayoutOutcome, RtlScrollAnchor, ScrollHost};
pub use content::{display_width, ContentStrip, StripItem};
pub use direction::{
    DirectionPolicy, DirectionSource, FeatureFlags, FrozenPolicy, LayoutDirection, LivePolicy,
    LocaleDirection,
};
pub use layout::LayoutBox;
pub use viewport::{ModelViewport, ScrollViewport, TerminalViewport};
