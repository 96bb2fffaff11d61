//! Cell-grid geometry.

/// A rectangular area of terminal cells.
///
/// `x`/`y` is the top-left corner; `right()`/`bottom()` are exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    pub const EMPTY: Region = Region { x: 0, y: 0, width: 0, height: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub const fn right(self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y + self.height
    }

    /// Whether the region covers no cells.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Whether the cell (x, y) lies inside this region.
    #[inline]
    pub const fn contains(self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// The overlapping area, or an empty region at the clamped origin.
    pub fn intersection(self, other: Region) -> Region {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Region::new(x, y, (right - x).max(0), (bottom - y).max(0))
    }

    /// Shrink by `dx` cells on the left and right and `dy` on top and bottom.
    pub fn inset(self, dx: i32, dy: i32) -> Region {
        Region::new(
            self.x + dx,
            self.y + dy,
            (self.width - 2 * dx).max(0),
            (self.height - 2 * dy).max(0),
        )
    }

    /// The single row `row` (relative to the top), if it lies inside.
    pub fn line(self, row: i32) -> Option<Region> {
        (row >= 0 && row < self.height).then(|| Region::new(self.x, self.y + row, self.width, 1))
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges() {
        let r = Region::new(2, 3, 10, 4);
        assert_eq!(r.right(), 12);
        assert_eq!(r.bottom(), 7);
        assert!(r.contains(2, 3));
        assert!(!r.contains(12, 3));
    }

    #[test]
    fn intersection_overlap_and_disjoint() {
        let a = Region::new(0, 0, 10, 10);
        let b = Region::new(5, 5, 10, 10);
        assert_eq!(a.intersection(b), Region::new(5, 5, 5, 5));
        assert!(a.intersection(Region::new(20, 20, 2, 2)).is_empty());
    }

    #[test]
    fn inset_clamps() {
        assert_eq!(Region::new(0, 0, 10, 6).inset(1, 1), Region::new(1, 1, 8, 4));
        assert!(Region::new(0, 0, 1, 1).inset(1, 1).is_empty());
    }

    #[test]
    fn line_bounds() {
        let r = Region::new(4, 2, 8, 3);
        assert_eq!(r.line(1), Some(Region::new(4, 3, 8, 1)));
        assert_eq!(r.line(3), None);
        assert_eq!(r.line(-1), None);
    }
}
