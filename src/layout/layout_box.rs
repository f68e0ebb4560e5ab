//! `LayoutBox`: The solver-produced bounding box for a container.

/// A bounding box in container-local coordinates.
///
/// Produced fresh by the layout solver on every pass. Under RTL mirroring
/// the solver may legitimately hand out a negative `left` that extends the
/// content off-screen - exactly the geometry this crate corrects.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LayoutBox {
    /// Left edge.
    pub left: i32,
    /// Top edge.
    pub top: i32,
    /// Right edge (exclusive).
    pub right: i32,
    /// Bottom edge (exclusive).
    pub bottom: i32,
}

impl LayoutBox {
    /// Create a new box from its four edges.
    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Zero-sized box at the origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Width of the box.
    #[inline]
    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Height of the box.
    #[inline]
    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Check if the box has no area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    /// Check if a point is inside the box.
    #[inline]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Translate the box by (dx, dy).
    #[inline]
    #[must_use]
    pub const fn translated(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.left + dx, self.top + dy, self.right + dx, self.bottom + dy)
    }

    /// Translate the box horizontally so its left edge lands at 0.
    ///
    /// Width and height are preserved exactly; only the horizontal position
    /// changes. Vertical edges go through untouched.
    #[inline]
    #[must_use]
    pub const fn anchored_to_origin(&self) -> Self {
        Self::new(0, self.top, self.width(), self.bottom)
    }
}

impl std::fmt::Debug for LayoutBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LayoutBox({}, {} {}x{})",
            self.left,
            self.top,
            self.width(),
            self.height()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_dimensions() {
        let b = LayoutBox::new(-100, 0, 0, 50);
        assert_eq!(b.width(), 100);
        assert_eq!(b.height(), 50);
        assert!(!b.is_empty());
    }

    #[test]
    fn test_anchored_to_origin_preserves_size() {
        let b = LayoutBox::new(-100, 10, 0, 60);
        let anchored = b.anchored_to_origin();
        assert_eq!(anchored, LayoutBox::new(0, 10, 100, 60));
        assert_eq!(anchored.width(), b.width());
        assert_eq!(anchored.height(), b.height());
    }

    #[test]
    fn test_anchored_to_origin_is_idempotent_at_origin() {
        let b = LayoutBox::new(0, 0, 150, 40);
        assert_eq!(b.anchored_to_origin(), b);
    }

    #[test]
    fn test_translated() {
        let b = LayoutBox::new(0, 0, 10, 10);
        assert_eq!(b.translated(-5, 3), LayoutBox::new(-5, 3, 5, 13));
    }

    #[test]
    fn test_contains() {
        let b = LayoutBox::new(-10, 0, 10, 5);
        assert!(b.contains(-10, 0));
        assert!(b.contains(9, 4));
        assert!(!b.contains(10, 0));
        assert!(!b.contains(0, 5));
    }

    #[test]
    fn test_empty_box() {
        assert!(LayoutBox::ZERO.is_empty());
        assert!(LayoutBox::new(5, 0, 5, 10).is_empty());
    }
}
