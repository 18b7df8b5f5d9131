//! Labelling entry point for grid sources.
//!
//! Provides the [`Labeller`] runtime, which holds configuration and runs the
//! connected-components scan against any [`GridSource`].

use tracing::{info, instrument};

use crate::{
    Result,
    components::ConnectedComponents,
    connectivity::Connectivity,
    grid::{Grid, GridSource},
    region::Region,
};

/// Runs connected-components labelling with a fixed configuration.
///
/// # Examples
/// ```
/// use ccl_core::{Connectivity, LabellerBuilder, OwnedGrid};
///
/// let grid = OwnedGrid::new("demo", vec![1, 0, 0, 1], 2, 2)?;
/// let labeller = LabellerBuilder::new()
///     .with_connectivity(Connectivity::EightWay)
///     .build();
/// let regions = labeller.run(&grid)?;
/// assert_eq!(regions.len(), 1);
/// assert_eq!(regions[0].len(), 2);
/// # Ok::<(), ccl_core::LabelError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Labeller {
    connectivity: Connectivity,
}

impl Labeller {
    pub(crate) fn new(connectivity: Connectivity) -> Self {
        Self { connectivity }
    }

    /// Returns the neighbour topology used by this instance.
    #[must_use]
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Labels every foreground pixel of `grid`.
    ///
    /// # Errors
    /// Propagates [`ConnectedComponents::find_connected_components`] errors.
    #[instrument(
        name = "core.run",
        err,
        skip(self, grid),
        fields(source = %grid.name(), cells = grid.cell_count()),
    )]
    pub fn run<G: GridSource + ?Sized>(&self, grid: &G) -> Result<Vec<Region>> {
        let regions = ConnectedComponents::new(grid, self.connectivity).find_connected_components()?;
        info!(regions = regions.len(), "labelling completed");
        Ok(regions)
    }

    /// Labels a row-major buffer of `width * height` values.
    ///
    /// # Errors
    /// Returns [`crate::LabelError::DimensionMismatch`] or
    /// [`crate::LabelError::DimensionOverflow`] for inconsistent dimensions.
    ///
    /// # Examples
    /// ```
    /// use ccl_core::{LabelError, LabellerBuilder};
    ///
    /// let labeller = LabellerBuilder::new().build();
    /// let err = labeller.run_values(&[1, 2, 3], 2, 2).expect_err("three values cannot fill 2x2");
    /// assert!(matches!(err, LabelError::DimensionMismatch { expected: 4, actual: 3, .. }));
    /// ```
    pub fn run_values(&self, values: &[i64], width: usize, height: usize) -> Result<Vec<Region>> {
        let grid = Grid::new(values, width, height)?;
        self.run(&grid)
    }
}
