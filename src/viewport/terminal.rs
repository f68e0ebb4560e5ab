//! `TerminalViewport`: Demo-grade terminal rendering of a content strip.

use std::io::{self, Write};

use crossterm::cursor::MoveToColumn;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};

use crate::content::ContentStrip;

use super::{ModelViewport, ScrollViewport};

/// Terminal-backed scroll viewport.
///
/// Wraps a [`ModelViewport`] for offset bookkeeping and draws the visible
/// slice of a [`ContentStrip`] on the current terminal line with crossterm.
/// One row of content; the vertical offset is carried but never rendered.
#[derive(Debug, Clone)]
pub struct TerminalViewport {
    model: ModelViewport,
}

impl TerminalViewport {
    /// Create a viewport with the given visible width in columns.
    pub const fn new(width: i32) -> Self {
        Self {
            model: ModelViewport::new(width),
        }
    }

    /// Create a viewport sized to the current terminal width.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal size cannot be queried.
    pub fn from_terminal() -> io::Result<Self> {
        let (cols, _rows) = terminal::size()?;
        Ok(Self::new(i32::from(cols)))
    }

    /// Offset bookkeeping model.
    pub const fn model(&self) -> &ModelViewport {
        &self.model
    }

    /// Mutable offset bookkeeping model (content extent updates).
    pub fn model_mut(&mut self) -> &mut ModelViewport {
        &mut self.model
    }

    /// Draw the visible slice of `strip` on the current line of `out`.
    ///
    /// Content left of the scroll offset is skipped and content beyond the
    /// visible width is cropped - the physical window, independent of the
    /// clip-children toggle (which governs child overflow, not the crop).
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn render<W: Write>(&self, strip: &ContentStrip, out: &mut W) -> io::Result<()> {
        let visible = strip.slice(self.model.scroll_x(), self.model.width());

        queue!(
            out,
            Clear(ClearType::CurrentLine),
            MoveToColumn(0),
            Print(visible)
        )?;
        out.flush()
    }
}

impl ScrollViewport for TerminalViewport {
    fn scroll_x(&self) -> i32 {
        self.model.scroll_x()
    }

    fn scroll_y(&self) -> i32 {
        self.model.scroll_y()
    }

    fn scroll_to(&mut self, x: i32, y: i32) {
        self.model.scroll_to(x, y);
    }

    fn set_clip_children(&mut self, clip: bool) {
        self.model.set_clip_children(clip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip() -> ContentStrip {
        let mut strip = ContentStrip::new(1);
        strip.append("abc");
        strip.append("def");
        strip
    }

    #[test]
    fn test_render_clipped_window() {
        let mut vp = TerminalViewport::new(3);
        vp.scroll_to(4, 0);

        let mut out = Vec::new();
        vp.render(&strip(), &mut out).unwrap();

        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.ends_with("def"));
    }

    #[test]
    fn test_render_crops_independent_of_clip_toggle() {
        let mut vp = TerminalViewport::new(3);
        vp.set_clip_children(false);

        let mut out = Vec::new();
        vp.render(&strip(), &mut out).unwrap();

        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.ends_with("abc"));
        assert!(!rendered.contains("def"));
    }

    #[test]
    fn test_delegates_offsets_to_model() {
        let mut vp = TerminalViewport::new(10);
        vp.scroll_to(5, 2);
        assert_eq!(vp.scroll_x(), 5);
        assert_eq!(vp.scroll_y(), 2);
        assert_eq!(vp.model().width(), 10);
    }
}
