//! Grid abstractions consumed by the labeller.
//!
//! Pixel values are row-major `i64`s where `0` marks background and any other
//! value names the group a foreground pixel belongs to.

use crate::{Result, error::LabelError, geometry::Point};

/// Pixel value reserved for background cells.
pub const BACKGROUND: i64 = 0;

/// Abstraction over a rectangular grid of pixel values.
///
/// # Examples
/// ```
/// use ccl_core::{GridSource, Point};
///
/// struct Checkerboard;
///
/// impl GridSource for Checkerboard {
///     fn width(&self) -> usize { 2 }
///     fn height(&self) -> usize { 2 }
///     fn name(&self) -> &str { "checkerboard" }
///     fn value_at(&self, point: Point) -> Option<i64> {
///         (point.x < 2 && point.y < 2).then(|| ((point.x + point.y) % 2) as i64)
///     }
/// }
///
/// let grid = Checkerboard;
/// assert_eq!(grid.cell_count(), 4);
/// assert_eq!(grid.value_at(Point::new(1, 0)), Some(1));
/// assert_eq!(grid.value_at(Point::new(2, 0)), None);
/// ```
pub trait GridSource {
    /// Number of columns.
    fn width(&self) -> usize;

    /// Number of rows.
    fn height(&self) -> usize;

    /// Returns a human-readable name.
    fn name(&self) -> &str;

    /// Returns the value at `point`, or `None` when it lies outside the grid.
    ///
    /// Implementations must bound-check both axes independently so that a
    /// column past the right edge never wraps onto the next row.
    fn value_at(&self, point: Point) -> Option<i64>;

    /// Returns the number of cells in the grid.
    #[must_use]
    fn cell_count(&self) -> usize {
        self.width().saturating_mul(self.height())
    }

    /// Returns whether the grid has no cells.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }
}

fn validate_dimensions(width: usize, height: usize, actual: usize) -> Result<()> {
    let expected = width
        .checked_mul(height)
        .ok_or(LabelError::DimensionOverflow { width, height })?;
    if expected != actual {
        return Err(LabelError::DimensionMismatch {
            width,
            height,
            expected,
            actual,
        });
    }
    Ok(())
}

fn lookup(values: &[i64], width: usize, height: usize, point: Point) -> Option<i64> {
    if point.x >= width || point.y >= height {
        return None;
    }
    values.get(point.y * width + point.x).copied()
}

/// A grid borrowing its row-major values from the caller.
///
/// # Examples
/// ```
/// use ccl_core::{Grid, GridSource, Point};
///
/// let values = [1, 1, 0, 0, 0, 2];
/// let grid = Grid::new(&values, 3, 2)?;
/// assert_eq!(grid.value_at(Point::new(2, 1)), Some(2));
/// assert_eq!(grid.value_at(Point::new(3, 0)), None);
/// # Ok::<(), ccl_core::LabelError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Grid<'a> {
    values: &'a [i64],
    width: usize,
    height: usize,
    name: &'a str,
}

impl<'a> Grid<'a> {
    /// Wraps `values` as a `width` by `height` grid named `"grid"`.
    ///
    /// # Errors
    /// Returns [`LabelError::DimensionMismatch`] when `values.len()` differs
    /// from `width * height`, and [`LabelError::DimensionOverflow`] when that
    /// product does not fit in `usize`.
    pub fn new(values: &'a [i64], width: usize, height: usize) -> Result<Self> {
        Self::with_name("grid", values, width, height)
    }

    /// Wraps `values` under a caller-supplied name.
    ///
    /// # Errors
    /// Same as [`Grid::new`].
    pub fn with_name(name: &'a str, values: &'a [i64], width: usize, height: usize) -> Result<Self> {
        validate_dimensions(width, height, values.len())?;
        Ok(Self {
            values,
            width,
            height,
            name,
        })
    }

    /// Returns the underlying row-major values.
    #[must_use]
    pub fn values(&self) -> &'a [i64] {
        self.values
    }
}

impl GridSource for Grid<'_> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn name(&self) -> &str {
        self.name
    }

    fn value_at(&self, point: Point) -> Option<i64> {
        lookup(self.values, self.width, self.height, point)
    }
}

/// A grid that owns its row-major values.
///
/// # Examples
/// ```
/// use ccl_core::{GridSource, OwnedGrid, Point};
///
/// let grid = OwnedGrid::new("rows", vec![0, 7, 7, 0], 2, 2)?;
/// assert_eq!(grid.name(), "rows");
/// assert_eq!(grid.value_at(Point::new(0, 1)), Some(7));
/// # Ok::<(), ccl_core::LabelError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedGrid {
    values: Vec<i64>,
    width: usize,
    height: usize,
    name: String,
}

impl OwnedGrid {
    /// Takes ownership of `values` as a `width` by `height` grid.
    ///
    /// # Errors
    /// Same as [`Grid::new`].
    pub fn new(
        name: impl Into<String>,
        values: Vec<i64>,
        width: usize,
        height: usize,
    ) -> Result<Self> {
        validate_dimensions(width, height, values.len())?;
        Ok(Self {
            values,
            width,
            height,
            name: name.into(),
        })
    }

    /// Borrows this grid as a [`Grid`].
    #[must_use]
    pub fn as_grid(&self) -> Grid<'_> {
        Grid {
            values: &self.values,
            width: self.width,
            height: self.height,
            name: &self.name,
        }
    }

    /// Returns the underlying row-major values.
    #[must_use]
    pub fn values(&self) -> &[i64] {
        &self.values
    }
}

impl GridSource for OwnedGrid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn value_at(&self, point: Point) -> Option<i64> {
        lookup(&self.values, self.width, self.height, point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(3, 3, 8)]
    #[case(3, 3, 10)]
    #[case(0, 4, 1)]
    fn rejects_mismatched_lengths(#[case] width: usize, #[case] height: usize, #[case] len: usize) {
        let values = vec![0; len];
        let err = Grid::new(&values, width, height).expect_err("length must match dimensions");
        assert_eq!(
            err,
            LabelError::DimensionMismatch {
                width,
                height,
                expected: width * height,
                actual: len,
            }
        );
    }

    #[test]
    fn rejects_overflowing_dimensions() {
        let err = Grid::new(&[], usize::MAX, 2).expect_err("product overflows");
        assert_eq!(
            err,
            LabelError::DimensionOverflow {
                width: usize::MAX,
                height: 2,
            }
        );
    }

    #[test]
    fn accepts_zero_area_grids() {
        let grid = Grid::new(&[], 0, 0).expect("empty grid is valid");
        assert!(grid.is_empty());
        assert_eq!(grid.value_at(Point::new(0, 0)), None);
    }

    #[test]
    fn lookups_do_not_wrap_between_rows() {
        let values = [1, 2, 3, 4, 5, 6];
        let grid = Grid::new(&values, 3, 2).expect("dimensions match");
        assert_eq!(grid.value_at(Point::new(2, 0)), Some(3));
        assert_eq!(grid.value_at(Point::new(3, 0)), None);
        assert_eq!(grid.value_at(Point::new(0, 1)), Some(4));
        assert_eq!(grid.value_at(Point::new(0, 2)), None);
    }

    #[test]
    fn owned_grid_borrows_as_grid() {
        let owned = OwnedGrid::new("owned", vec![0, 1, 2, 3], 2, 2).expect("dimensions match");
        let grid = owned.as_grid();
        assert_eq!(grid.name(), "owned");
        assert_eq!(grid.values(), owned.values());
        assert_eq!(grid.value_at(Point::new(1, 1)), Some(3));
    }
}
