//! Layout module: Geometry handed over by the external constraint solver.
//!
//! The solver runs in a left-to-right coordinate space and produces a fresh
//! box for the container on every pass. This module only defines that box
//! type - the correction itself lives in [`crate::anchor`].

mod layout_box;

pub use layout_box::LayoutBox;
