//! Value-aware connected-components labelling.
//!
//! Two foreground pixels belong to the same region when they hold the same
//! value and are linked by a chain of same-valued neighbours under the chosen
//! [`Connectivity`]. Adjacent pixels with different nonzero values never
//! merge, so the labeller segments by value and by connectivity at once.
//!
//! The algorithm is the classic two-pass union-find scan:
//!
//! - Pass 1 assigns each foreground pixel the smallest provisional label among
//!   its already-visited same-valued neighbours (or a fresh label when there
//!   are none) and unions the pixel with every such neighbour.
//! - Pass 2 replaces each label with the label recorded at the root of the
//!   pixel's equivalence class.
//! - Aggregation groups pixels by resolved label and computes bounding boxes.

mod aggregate;
mod scan;

use tracing::{debug, instrument};

use crate::{
    Result,
    connectivity::Connectivity,
    grid::{Grid, GridSource},
    region::Region,
};

use self::scan::ScanState;

/// Finds the connected regions of a grid under a fixed connectivity.
///
/// Each call to [`ConnectedComponents::find_connected_components`] runs on
/// fresh scan state, so one instance may be queried repeatedly.
///
/// # Examples
/// ```
/// use ccl_core::{ConnectedComponents, Connectivity, Grid};
///
/// let values = [
///     1, 0, 0,
///     0, 1, 1,
///     0, 1, 1,
/// ];
/// let grid = Grid::new(&values, 3, 3)?;
///
/// let four = ConnectedComponents::new(&grid, Connectivity::FourWay);
/// assert_eq!(four.find_connected_components()?.len(), 2);
///
/// let eight = ConnectedComponents::new(&grid, Connectivity::EightWay);
/// assert_eq!(eight.find_connected_components()?.len(), 1);
/// # Ok::<(), ccl_core::LabelError>(())
/// ```
#[derive(Debug)]
pub struct ConnectedComponents<'a, G: ?Sized> {
    grid: &'a G,
    connectivity: Connectivity,
}

impl<'a, G: GridSource + ?Sized> ConnectedComponents<'a, G> {
    /// Prepares a labeller over `grid`.
    #[must_use]
    pub fn new(grid: &'a G, connectivity: Connectivity) -> Self {
        Self { grid, connectivity }
    }

    /// Returns the connectivity used to decide adjacency.
    #[must_use]
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Partitions the grid's foreground pixels into regions.
    ///
    /// Regions are returned in ascending order of their resolved provisional
    /// label. Callers should not rely on that order beyond reproducibility.
    ///
    /// # Errors
    /// Returns [`crate::LabelError::Forest`] or
    /// [`crate::LabelError::InvariantViolation`] if label resolution finds a
    /// pixel outside the forest. Neither occurs for a well-behaved
    /// [`GridSource`].
    #[instrument(
        name = "core.label",
        err,
        skip(self),
        fields(
            source = %self.grid.name(),
            width = self.grid.width(),
            height = self.grid.height(),
            connectivity = %self.connectivity,
        ),
    )]
    pub fn find_connected_components(&self) -> Result<Vec<Region>> {
        let mut state = ScanState::new(self.grid.width(), self.grid.height());

        state.first_pass(self.grid, self.connectivity);
        debug!(
            provisional_labels = state.provisional_labels(),
            classes = state.class_count(),
            "first pass completed"
        );

        state.second_pass(self.grid)?;
        let regions = aggregate::collect_regions(self.grid, &state);
        debug!(regions = regions.len(), "regions aggregated");

        Ok(regions)
    }
}

/// Labels a row-major value buffer in one call.
///
/// # Errors
/// Returns [`crate::LabelError::DimensionMismatch`] when `values.len()` is not
/// `width * height`, and [`crate::LabelError::DimensionOverflow`] when that
/// product overflows.
///
/// # Examples
/// ```
/// use ccl_core::{BoundingBox, Connectivity, Point, find_connected_components};
///
/// let values = [
///     1, 1, 0,
///     0, 0, 0,
///     0, 2, 2,
/// ];
/// let regions = find_connected_components(&values, 3, 3, Connectivity::FourWay)?;
/// assert_eq!(regions.len(), 2);
///
/// let bottom = regions
///     .iter()
///     .find(|region| region.contains(Point::new(1, 2)))
///     .expect("bottom region exists");
/// assert_eq!(bottom.bounding_box(), BoundingBox::new(1, 2, 2, 1));
/// # Ok::<(), ccl_core::LabelError>(())
/// ```
pub fn find_connected_components(
    values: &[i64],
    width: usize,
    height: usize,
    connectivity: Connectivity,
) -> Result<Vec<Region>> {
    let grid = Grid::new(values, width, height)?;
    ConnectedComponents::new(&grid, connectivity).find_connected_components()
}

#[cfg(test)]
mod tests;
