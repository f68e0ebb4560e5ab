//! Viewport module: The downstream scrollable collaborator.
//!
//! The anchor never scrolls pixels itself - it reads and writes the offsets
//! of whatever viewport encloses the container. [`ScrollViewport`] is that
//! seam; [`ModelViewport`] is the in-memory implementation used by tests and
//! demos, [`TerminalViewport`] a demo-grade terminal renderer on top of it.

mod model;
mod terminal;

pub use model::ModelViewport;
pub use terminal::TerminalViewport;

/// The enclosing scrollable viewport, as seen by the anchor.
///
/// The horizontal offset is read and written during a correction; the
/// vertical offset is only ever read back and passed through unchanged.
pub trait ScrollViewport {
    /// Current horizontal scroll offset.
    fn scroll_x(&self) -> i32;

    /// Current vertical scroll offset.
    fn scroll_y(&self) -> i32;

    /// Scroll to an absolute offset. The viewport clamps as it sees fit.
    fn scroll_to(&mut self, x: i32, y: i32);

    /// Enable or disable clipping of children to the viewport bounds.
    fn set_clip_children(&mut self, clip: bool);
}
