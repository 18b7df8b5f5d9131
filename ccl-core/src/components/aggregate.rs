//! Groups resolved pixel labels into region descriptors.

use std::collections::{BTreeMap, HashSet};

use crate::{
    geometry::{BoundingBox, Point},
    grid::GridSource,
    region::Region,
};

use super::scan::{Label, ScanState};

struct RegionAccumulator {
    bounds: BoundingBox,
    points: HashSet<Point>,
    value: i64,
}

impl RegionAccumulator {
    fn new(point: Point, value: i64) -> Self {
        Self {
            bounds: BoundingBox::at(point),
            points: HashSet::new(),
            value,
        }
    }

    fn push(&mut self, point: Point) {
        self.bounds = self.bounds.expanded_to_contain(point);
        self.points.insert(point);
    }

    fn finish(self) -> Region {
        // The accumulated box spans cell centres; widen it to cover whole cells.
        let bounding_box = BoundingBox::new(
            self.bounds.x,
            self.bounds.y,
            self.bounds.width + 1,
            self.bounds.height + 1,
        );
        Region::new(bounding_box, self.points, self.value)
    }
}

/// Collects every labelled pixel into one [`Region`] per resolved label,
/// ordered by label.
pub(super) fn collect_regions<G: GridSource + ?Sized>(grid: &G, state: &ScanState) -> Vec<Region> {
    let mut groups: BTreeMap<Label, RegionAccumulator> = BTreeMap::new();

    for (point, label) in state.labelled() {
        let Some(value) = grid.value_at(point) else {
            continue;
        };
        groups
            .entry(label)
            .or_insert_with(|| RegionAccumulator::new(point, value))
            .push(point);
    }

    groups.into_values().map(RegionAccumulator::finish).collect()
}
