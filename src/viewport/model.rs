//! `ModelViewport`: In-memory viewport with offset clamping.

use super::ScrollViewport;

/// A plain in-memory scroll viewport.
///
/// Tracks offsets, the clip-children toggle, and an optional content extent.
/// With a known extent, horizontal offsets clamp into `0..=max_scroll_x` the
/// way a platform scroll widget would; without one (extent 0), only the
/// lower bound applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelViewport {
    width: i32,
    content_width: i32,
    scroll_x: i32,
    scroll_y: i32,
    clip_children: bool,
}

impl ModelViewport {
    /// Create a viewport with the given visible width and no content extent.
    pub const fn new(width: i32) -> Self {
        Self {
            width,
            content_width: 0,
            scroll_x: 0,
            scroll_y: 0,
            clip_children: true,
        }
    }

    /// Visible width.
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Scrollable content extent (0 means unknown).
    pub const fn content_width(&self) -> i32 {
        self.content_width
    }

    /// Set the scrollable content extent, re-clamping the current offset.
    pub fn set_content_width(&mut self, content_width: i32) {
        self.content_width = content_width;
        self.scroll_x = self.clamp_x(self.scroll_x);
    }

    /// Maximum horizontal offset given the current content extent.
    pub const fn max_scroll_x(&self) -> i32 {
        let max = self.content_width - self.width;
        if max > 0 {
            max
        } else {
            0
        }
    }

    /// Whether children are clipped to the viewport bounds.
    pub const fn clips_children(&self) -> bool {
        self.clip_children
    }

    const fn clamp_x(&self, x: i32) -> i32 {
        if self.content_width == 0 {
            if x > 0 {
                x
            } else {
                0
            }
        } else {
            let max = self.max_scroll_x();
            if x < 0 {
                0
            } else if x > max {
                max
            } else {
                x
            }
        }
    }
}

impl ScrollViewport for ModelViewport {
    fn scroll_x(&self) -> i32 {
        self.scroll_x
    }

    fn scroll_y(&self) -> i32 {
        self.scroll_y
    }

    fn scroll_to(&mut self, x: i32, y: i32) {
        self.scroll_x = self.clamp_x(x);
        self.scroll_y = if y > 0 { y } else { 0 };
    }

    fn set_clip_children(&mut self, clip: bool) {
        self.clip_children = clip;
    }
}
