//! ccl core library.
//!
//! Value-aware connected-components labelling over integer grids using a
//! two-pass union-find scan. Pixels with value `0` are background; every other
//! value names a group, and only equal-valued neighbours join a region.
//!
//! # Examples
//! ```
//! use ccl_core::{Connectivity, Point, find_connected_components};
//!
//! let values = [
//!     1, 0, 0,
//!     0, 1, 1,
//!     0, 1, 1,
//! ];
//! let regions = find_connected_components(&values, 3, 3, Connectivity::FourWay)?;
//! assert_eq!(regions.len(), 2);
//! assert!(regions.iter().any(|region| region.len() == 1 && region.contains(Point::new(0, 0))));
//! # Ok::<(), ccl_core::LabelError>(())
//! ```

mod builder;
mod components;
mod connectivity;
mod disjoint_set;
mod error;
mod geometry;
mod grid;
mod labeller;
mod region;

pub use crate::{
    builder::LabellerBuilder,
    components::{ConnectedComponents, find_connected_components},
    connectivity::{Connectivity, ParseConnectivityError},
    disjoint_set::DisjointSet,
    error::{DisjointSetError, DisjointSetErrorCode, LabelError, LabelErrorCode, Result},
    geometry::{BoundingBox, Point},
    grid::{BACKGROUND, Grid, GridSource, OwnedGrid},
    labeller::Labeller,
    region::Region,
};
