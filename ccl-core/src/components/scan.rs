//! Two-pass scan state for connected-components labelling.
//!
//! Pass 1 hands out provisional labels and records which labels touch. Pass 2
//! rewrites every foreground pixel with the label stored at the root of its
//! equivalence class. Both passes visit columns in the outer loop and rows in
//! the inner loop so provisional labels are reproducible.

use crate::{
    Result,
    connectivity::Connectivity,
    disjoint_set::DisjointSet,
    error::LabelError,
    geometry::Point,
    grid::{BACKGROUND, GridSource},
};

/// Provisional label assigned during the first pass.
pub(super) type Label = u64;

/// Mutable state threaded through both passes and aggregation.
pub(super) struct ScanState {
    width: usize,
    height: usize,
    labels: Vec<Option<Label>>,
    forest: DisjointSet<Point>,
    next_label: Label,
}

impl ScanState {
    pub(super) fn new(width: usize, height: usize) -> Self {
        let cells = width.saturating_mul(height);
        Self {
            width,
            height,
            labels: vec![None; cells],
            forest: DisjointSet::new(),
            next_label: 0,
        }
    }

    /// Number of provisional labels handed out by the first pass.
    pub(super) fn provisional_labels(&self) -> Label {
        self.next_label
    }

    /// Number of equivalence classes left in the forest.
    pub(super) fn class_count(&self) -> usize {
        self.forest.set_count()
    }

    pub(super) fn label(&self, point: Point) -> Option<Label> {
        self.index(point)
            .and_then(|index| self.labels.get(index).copied().flatten())
    }

    /// Iterates labelled pixels in row-major order.
    pub(super) fn labelled(&self) -> impl Iterator<Item = (Point, Label)> + '_ {
        self.labels.iter().enumerate().filter_map(|(index, label)| {
            let label = (*label)?;
            let point = Point::new(index % self.width, index / self.width);
            Some((point, label))
        })
    }

    pub(super) fn first_pass<G: GridSource + ?Sized>(
        &mut self,
        grid: &G,
        connectivity: Connectivity,
    ) {
        let mut neighbours: Vec<(Point, Label)> = Vec::with_capacity(8);

        for x in 0..self.width {
            for y in 0..self.height {
                let point = Point::new(x, y);
                let Some(value) = foreground_value(grid, point) else {
                    continue;
                };

                neighbours.clear();
                neighbours.extend(
                    connectivity
                        .offsets()
                        .iter()
                        .filter_map(|&(dx, dy)| point.offset(dx, dy))
                        .filter(|&neighbour| grid.value_at(neighbour) == Some(value))
                        .filter_map(|neighbour| Some((neighbour, self.label(neighbour)?))),
                );

                let Some(min_label) = neighbours.iter().map(|&(_, label)| label).min() else {
                    self.forest.make_set(point);
                    self.set_label(point, self.next_label);
                    self.next_label += 1;
                    continue;
                };

                self.set_label(point, min_label);
                for &(neighbour, _) in &neighbours {
                    self.forest.union(point, neighbour);
                }
            }
        }
    }

    pub(super) fn second_pass<G: GridSource + ?Sized>(&mut self, grid: &G) -> Result<()> {
        for x in 0..self.width {
            for y in 0..self.height {
                let point = Point::new(x, y);
                if foreground_value(grid, point).is_none() {
                    continue;
                }

                let root = self
                    .forest
                    .find(point)
                    .map_err(|error| LabelError::Forest { point, error })?;
                let resolved = self.label(root).ok_or(LabelError::InvariantViolation {
                    invariant: "every equivalence-class root carries a provisional label",
                    point: root,
                })?;
                self.set_label(point, resolved);
            }
        }
        Ok(())
    }

    fn set_label(&mut self, point: Point, label: Label) {
        if let Some(slot) = self
            .index(point)
            .and_then(|index| self.labels.get_mut(index))
        {
            *slot = Some(label);
        }
    }

    fn index(&self, point: Point) -> Option<usize> {
        (point.x < self.width && point.y < self.height).then(|| point.y * self.width + point.x)
    }
}

fn foreground_value<G: GridSource + ?Sized>(grid: &G, point: Point) -> Option<i64> {
    grid.value_at(point).filter(|&value| value != BACKGROUND)
}
