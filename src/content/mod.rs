//! Content module: A measurable horizontal strip of items.
//!
//! Stands in for the hosting container: it owns the ordered items, knows
//! the width they occupy on screen, and exposes the clipping toggles the
//! anchor drives. Widths are display columns - grapheme clusters measured
//! with `unicode-width` - so Hebrew and Arabic labels, CJK, and emoji all
//! measure the way a terminal renders them.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::anchor::ScrollHost;

/// Display width of a string in terminal columns.
///
/// Measured per grapheme cluster so multi-codepoint clusters (emoji ZWJ
/// sequences, combining marks) don't double-count.
pub fn display_width(s: &str) -> i32 {
    s.graphemes(true)
        .map(|g| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let w = UnicodeWidthStr::width(g) as i32;
            w
        })
        .sum()
}

/// A single item in the strip, measured at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripItem {
    label: String,
    width: i32,
}

impl StripItem {
    /// Create an item, measuring the label's display width.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let width = display_width(&label);
        Self { label, width }
    }

    /// The item's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Display width in columns.
    pub const fn width(&self) -> i32 {
        self.width
    }
}

/// Ordered horizontal strip of items with fixed inter-item spacing.
///
/// Items are stored in visual order, left to right. Under RTL the logical
/// start of the data sits at the visual right, so "more data arrived" means
/// [`prepend`](Self::prepend) - the exact case the anchor's scroll
/// compensation exists for.
#[derive(Debug, Clone)]
pub struct ContentStrip {
    items: Vec<StripItem>,
    spacing: i32,
    clip_children: bool,
    culls_offscreen: bool,
}

impl ContentStrip {
    /// Create an empty strip with the given inter-item spacing in columns.
    pub const fn new(spacing: i32) -> Self {
        Self {
            items: Vec::new(),
            spacing,
            clip_children: true,
            culls_offscreen: false,
        }
    }

    /// Add an item at the visual-right end.
    pub fn append(&mut self, label: impl Into<String>) {
        self.items.push(StripItem::new(label));
    }

    /// Add an item at the visual-left end. In RTL this is the logical end
    /// of the data, where asynchronously fetched items land.
    pub fn prepend(&mut self, label: impl Into<String>) {
        self.items.insert(0, StripItem::new(label));
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the strip has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in visual order, left to right.
    pub fn items(&self) -> &[StripItem] {
        &self.items
    }

    /// Whether children are currently clipped to the container bounds.
    pub const fn clips_children(&self) -> bool {
        self.clip_children
    }

    /// Whether the offscreen-child culling optimization is enabled.
    pub const fn culls_offscreen(&self) -> bool {
        self.culls_offscreen
    }

    /// Total width the strip occupies: item widths plus spacing between
    /// adjacent items.
    pub fn measured(&self) -> i32 {
        let items: i32 = self.items.iter().map(StripItem::width).sum();
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let gaps = self.items.len().saturating_sub(1) as i32;
        items + self.spacing * gaps
    }

    /// The strip's text within the column window `[offset, offset + width)`.
    ///
    /// Pass `i32::MAX` as `width` for "no right clip". Columns left of the
    /// offset are skipped; a wide grapheme straddling either window edge is
    /// dropped rather than rendered half-cut.
    pub fn slice(&self, offset: i32, width: i32) -> String {
        let end = offset.saturating_add(width);
        let mut out = String::new();
        let mut col = 0i32;

        for (i, item) in self.items.iter().enumerate() {
            let gap = if i == 0 { 0 } else { self.spacing };
            for _ in 0..gap {
                if col >= offset && col < end {
                    out.push(' ');
                }
                col += 1;
            }
            for g in item.label().graphemes(true) {
                let w = display_width(g);
                if col >= offset && col + w <= end {
                    out.push_str(g);
                }
                col += w;
            }
        }

        out
    }
}

impl ScrollHost for ContentStrip {
    fn measured_width(&self) -> i32 {
        self.measured()
    }

    fn set_clip_children(&mut self, clip: bool) {
        self.clip_children = clip;
    }

    fn set_culling(&mut self, cull: bool) {
        self.culls_offscreen = cull;
    }
}
