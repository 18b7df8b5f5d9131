//! Oracle checks for connected-components results.
//!
//! Regions are matched to the grid point by point, never by label value or
//! position in the result, so any correct labelling passes regardless of the
//! order it emits regions in.

use std::collections::{HashMap, HashSet, VecDeque};

use thiserror::Error;

/// A grid cell as `(x, y)`.
pub type Cell = (usize, usize);

/// A way in which a set of regions fails to partition a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartitionViolation {
    /// A foreground cell is not covered by any region.
    #[error("foreground cell {cell:?} is not covered by any region")]
    Uncovered {
        /// The uncovered cell.
        cell: Cell,
    },
    /// A cell appears in more than one region.
    #[error("cell {cell:?} appears in regions {first} and {second}")]
    Overlap {
        /// The duplicated cell.
        cell: Cell,
        /// Index of the first region holding the cell.
        first: usize,
        /// Index of the second region holding the cell.
        second: usize,
    },
    /// A region holds a background or out-of-bounds cell.
    #[error("region {region} holds non-foreground cell {cell:?}")]
    Background {
        /// Offending region index.
        region: usize,
        /// The background cell.
        cell: Cell,
    },
    /// A region mixes pixel values.
    #[error("region {region} mixes values {expected} and {found} at {cell:?}")]
    MixedValues {
        /// Offending region index.
        region: usize,
        /// Value of the region's first cell.
        expected: i64,
        /// Value found at `cell`.
        found: i64,
        /// Cell holding the stray value.
        cell: Cell,
    },
    /// A region is not connected under the requested adjacency.
    #[error("region {region} is not connected")]
    Disconnected {
        /// Offending region index.
        region: usize,
    },
    /// Two regions touch and share a value, so they should have been one.
    #[error("regions {first} and {second} touch at {cell:?} and share a value")]
    NotMaximal {
        /// Index of the first region.
        first: usize,
        /// Index of the second region.
        second: usize,
        /// A cell of `first` adjacent to `second`.
        cell: Cell,
    },
    /// A region holds no cells.
    #[error("region {region} is empty")]
    Empty {
        /// Offending region index.
        region: usize,
    },
}

/// Row-major grid view used by the oracle.
#[derive(Debug, Clone, Copy)]
pub struct GridView<'a> {
    values: &'a [i64],
    width: usize,
    height: usize,
}

impl<'a> GridView<'a> {
    /// Wraps `values` as a `width` by `height` grid.
    ///
    /// # Panics
    /// Panics when `values.len() != width * height`; this is test tooling.
    #[must_use]
    pub fn new(values: &'a [i64], width: usize, height: usize) -> Self {
        assert_eq!(values.len(), width * height, "grid length must match dimensions");
        Self {
            values,
            width,
            height,
        }
    }

    /// Returns the value at `cell`, or `None` outside the grid.
    #[must_use]
    pub fn value(&self, (x, y): Cell) -> Option<i64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.values.get(y * self.width + x).copied()
    }

    fn foreground(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .filter(|&cell| self.value(cell).is_some_and(|value| value != 0))
    }

    fn neighbours(&self, (x, y): Cell, diagonal: bool) -> Vec<Cell> {
        let mut offsets = vec![(-1, 0), (1, 0), (0, -1), (0, 1)];
        if diagonal {
            offsets.extend([(-1, -1), (1, -1), (1, 1), (-1, 1)]);
        }
        offsets
            .into_iter()
            .filter_map(|(dx, dy)| Some((x.checked_add_signed(dx)?, y.checked_add_signed(dy)?)))
            .filter(|&cell| self.value(cell).is_some())
            .collect()
    }
}

/// Checks that `regions` is exactly the set of maximal connected same-valued
/// components of `grid`.
///
/// `diagonal` selects eight-way adjacency; otherwise four-way is used.
///
/// # Errors
/// Returns the first [`PartitionViolation`] found.
///
/// # Examples
/// ```
/// use std::collections::HashSet;
/// use ccl_test_support::partition::{GridView, PartitionViolation, verify_partition};
///
/// let values = [1, 1, 0, 2];
/// let grid = GridView::new(&values, 2, 2);
/// let good: Vec<HashSet<_>> = vec![[(0, 0), (1, 0)].into(), [(1, 1)].into()];
/// assert_eq!(verify_partition(grid, &good, false), Ok(()));
///
/// let split: Vec<HashSet<_>> = vec![[(0, 0)].into(), [(1, 0)].into(), [(1, 1)].into()];
/// assert!(matches!(
///     verify_partition(grid, &split, false),
///     Err(PartitionViolation::NotMaximal { .. })
/// ));
/// ```
pub fn verify_partition(
    grid: GridView<'_>,
    regions: &[HashSet<Cell>],
    diagonal: bool,
) -> Result<(), PartitionViolation> {
    let mut owner: HashMap<Cell, usize> = HashMap::new();

    for (region, cells) in regions.iter().enumerate() {
        if cells.is_empty() {
            return Err(PartitionViolation::Empty { region });
        }
        let mut expected = None;
        for &cell in cells {
            let value = grid
                .value(cell)
                .filter(|&value| value != 0)
                .ok_or(PartitionViolation::Background { region, cell })?;
            let expected = *expected.get_or_insert(value);
            if value != expected {
                return Err(PartitionViolation::MixedValues {
                    region,
                    expected,
                    found: value,
                    cell,
                });
            }
            if let Some(first) = owner.insert(cell, region) {
                return Err(PartitionViolation::Overlap {
                    cell,
                    first,
                    second: region,
                });
            }
        }
    }

    if let Some(cell) = grid.foreground().find(|cell| !owner.contains_key(cell)) {
        return Err(PartitionViolation::Uncovered { cell });
    }

    for (region, cells) in regions.iter().enumerate() {
        if !is_connected(grid, cells, diagonal) {
            return Err(PartitionViolation::Disconnected { region });
        }
        for &cell in cells {
            for neighbour in grid.neighbours(cell, diagonal) {
                let Some(&other) = owner.get(&neighbour) else {
                    continue;
                };
                if other != region && grid.value(neighbour) == grid.value(cell) {
                    return Err(PartitionViolation::NotMaximal {
                        first: region,
                        second: other,
                        cell,
                    });
                }
            }
        }
    }

    Ok(())
}

fn is_connected(grid: GridView<'_>, cells: &HashSet<Cell>, diagonal: bool) -> bool {
    let Some(&start) = cells.iter().next() else {
        return false;
    };
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(cell) = queue.pop_front() {
        for neighbour in grid.neighbours(cell, diagonal) {
            if cells.contains(&neighbour) && seen.insert(neighbour) {
                queue.push_back(neighbour);
            }
        }
    }
    seen.len() == cells.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn regions(sets: &[&[Cell]]) -> Vec<HashSet<Cell>> {
        sets.iter().map(|cells| cells.iter().copied().collect()).collect()
    }

    const DIAGONAL: [i64; 4] = [3, 0, 0, 3];

    #[rstest]
    #[case::four_way_split(false, regions(&[&[(0, 0)], &[(1, 1)]]))]
    #[case::eight_way_joined(true, regions(&[&[(0, 0), (1, 1)]]))]
    fn accepts_correct_partitions(#[case] diagonal: bool, #[case] found: Vec<HashSet<Cell>>) {
        let grid = GridView::new(&DIAGONAL, 2, 2);
        assert_eq!(verify_partition(grid, &found, diagonal), Ok(()));
    }

    #[test]
    fn rejects_disconnected_regions() {
        let grid = GridView::new(&DIAGONAL, 2, 2);
        let found = regions(&[&[(0, 0), (1, 1)]]);
        assert_eq!(
            verify_partition(grid, &found, false),
            Err(PartitionViolation::Disconnected { region: 0 })
        );
    }

    #[test]
    fn rejects_uncovered_cells() {
        let grid = GridView::new(&DIAGONAL, 2, 2);
        let found = regions(&[&[(0, 0)]]);
        assert_eq!(
            verify_partition(grid, &found, false),
            Err(PartitionViolation::Uncovered { cell: (1, 1) })
        );
    }

    #[test]
    fn rejects_background_cells() {
        let grid = GridView::new(&DIAGONAL, 2, 2);
        let found = regions(&[&[(0, 0), (1, 0)], &[(1, 1)]]);
        assert_eq!(
            verify_partition(grid, &found, false),
            Err(PartitionViolation::Background {
                region: 0,
                cell: (1, 0)
            })
        );
    }

    #[test]
    fn rejects_mixed_values() {
        let values = [1, 2];
        let grid = GridView::new(&values, 2, 1);
        let found = regions(&[&[(0, 0), (1, 0)]]);
        assert!(matches!(
            verify_partition(grid, &found, false),
            Err(PartitionViolation::MixedValues { region: 0, .. })
        ));
    }

    #[test]
    fn rejects_overlapping_regions() {
        let values = [1, 1];
        let grid = GridView::new(&values, 2, 1);
        let found = regions(&[&[(0, 0), (1, 0)], &[(1, 0)]]);
        assert_eq!(
            verify_partition(grid, &found, false),
            Err(PartitionViolation::Overlap {
                cell: (1, 0),
                first: 0,
                second: 1
            })
        );
    }
}
