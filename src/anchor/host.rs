//! Scroll host: The container whose layout the anchor corrects.

/// The hosting container, as seen by the anchor.
///
/// Supplies the authoritative measured width - which may diverge from the
/// solver's box width, e.g. through padding - and the two clipping toggles
/// the anchor drives.
pub trait ScrollHost {
    /// Width the container actually occupies after layout. This is the
    /// extent the viewport scrolls within.
    fn measured_width(&self) -> i32;

    /// Enable or disable clipping of the container's own children.
    fn set_clip_children(&mut self, clip: bool);

    /// Enable or disable the offscreen-child culling optimization.
    fn set_culling(&mut self, cull: bool);
}
