//! Region descriptors produced by connected-components labelling.

use std::collections::HashSet;

use crate::geometry::{BoundingBox, Point};

/// A maximal set of connected, equal-valued pixels.
///
/// # Examples
/// ```
/// use ccl_core::{Connectivity, Point, find_connected_components};
///
/// let regions = find_connected_components(&[4, 4, 0, 4], 2, 2, Connectivity::FourWay)?;
/// let region = &regions[0];
/// assert_eq!(region.value(), 4);
/// assert_eq!(region.len(), 3);
/// assert!(region.contains(Point::new(1, 1)));
/// assert!(!region.contains(Point::new(0, 1)));
/// assert_eq!(region.activation_ratio(), 0.75);
/// # Ok::<(), ccl_core::LabelError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    bounding_box: BoundingBox,
    points: HashSet<Point>,
    value: i64,
}

impl Region {
    pub(crate) fn new(bounding_box: BoundingBox, points: HashSet<Point>, value: i64) -> Self {
        Self {
            bounding_box,
            points,
            value,
        }
    }

    /// Smallest box covering every pixel of the region.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    /// Pixels belonging to the region.
    #[must_use]
    pub fn points(&self) -> &HashSet<Point> {
        &self.points
    }

    /// Consumes the region, returning its pixels.
    #[must_use]
    pub fn into_points(self) -> HashSet<Point> {
        self.points
    }

    /// Pixel value shared by every member of the region.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Number of pixels in the region.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Regions produced by the labeller always hold at least one pixel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns whether `point` belongs to the region.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.bounding_box.contains(point) && self.points.contains(&point)
    }

    /// Fraction of the bounding box occupied by region pixels, in `0.0..=1.0`.
    #[must_use]
    pub fn activation_ratio(&self) -> f64 {
        let area = self.bounding_box.area();
        if area == 0 {
            return 0.0;
        }
        self.points.len() as f64 / area as f64
    }
}
