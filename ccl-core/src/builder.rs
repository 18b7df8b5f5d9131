//! Builder utilities for configuring a [`Labeller`].

use crate::{connectivity::Connectivity, labeller::Labeller};

/// Configures and constructs [`Labeller`] instances.
///
/// # Examples
/// ```
/// use ccl_core::{Connectivity, LabellerBuilder};
///
/// let labeller = LabellerBuilder::new()
///     .with_connectivity(Connectivity::EightWay)
///     .build();
/// assert_eq!(labeller.connectivity(), Connectivity::EightWay);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LabellerBuilder {
    connectivity: Connectivity,
}

impl LabellerBuilder {
    /// Creates a builder using four-way connectivity.
    ///
    /// # Examples
    /// ```
    /// use ccl_core::{Connectivity, LabellerBuilder};
    ///
    /// assert_eq!(LabellerBuilder::new().connectivity(), Connectivity::FourWay);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the neighbour topology.
    #[must_use]
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Returns the configured neighbour topology.
    #[must_use]
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Constructs the configured [`Labeller`].
    #[must_use]
    pub fn build(self) -> Labeller {
        Labeller::new(self.connectivity)
    }
}
