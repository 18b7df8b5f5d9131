//! Grid coordinates and axis-aligned boxes used to describe regions.

use std::fmt;

/// A cell coordinate within a grid.
///
/// # Examples
/// ```
/// use ccl_core::Point;
///
/// let point = Point::new(3, 1);
/// assert_eq!((point.x, point.y), (3, 1));
/// assert_eq!(point.to_string(), "(3, 1)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Column index.
    pub x: usize,
    /// Row index.
    pub y: usize,
}

impl Point {
    /// Creates a point from its column and row.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self { Self { x, y } }

    /// Applies a signed offset, returning `None` when either axis underflows.
    pub(crate) fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned rectangle in cell units.
///
/// A box built around cell centres covers whole cells, so a single cell has
/// a width and height of one.
///
/// # Examples
/// ```
/// use ccl_core::{BoundingBox, Point};
///
/// let bbox = BoundingBox::new(1, 2, 2, 1);
/// assert!(bbox.contains(Point::new(2, 2)));
/// assert!(!bbox.contains(Point::new(3, 2)));
/// assert_eq!(bbox.area(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    /// Left-most column.
    pub x: usize,
    /// Top-most row.
    pub y: usize,
    /// Number of columns covered.
    pub width: usize,
    /// Number of rows covered.
    pub height: usize,
}

impl BoundingBox {
    /// Creates a box from its origin and extent.
    #[must_use]
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a zero-sized box anchored at `point`.
    #[must_use]
    pub const fn at(point: Point) -> Self {
        Self::new(point.x, point.y, 0, 0)
    }

    /// Returns the smallest box covering both `self` and `point`.
    ///
    /// The box is treated as spanning `x..=x + width`, matching how
    /// aggregation grows a zero-sized origin box point by point before the
    /// final one-cell widening.
    ///
    /// # Examples
    /// ```
    /// use ccl_core::{BoundingBox, Point};
    ///
    /// let grown = BoundingBox::at(Point::new(2, 2)).expanded_to_contain(Point::new(0, 3));
    /// assert_eq!(grown, BoundingBox::new(0, 2, 2, 1));
    /// ```
    #[must_use]
    pub fn expanded_to_contain(self, point: Point) -> Self {
        let min_x = self.x.min(point.x);
        let min_y = self.y.min(point.y);
        let max_x = (self.x + self.width).max(point.x);
        let max_y = (self.y + self.height).max(point.y);
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Returns whether the cell at `point` lies inside the box.
    #[must_use]
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x - self.x < self.width
            && point.y - self.y < self.height
    }

    /// Number of cells covered by the box.
    #[must_use]
    pub const fn area(&self) -> usize {
        self.width * self.height
    }
}
