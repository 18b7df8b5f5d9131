//! Unit tests for the two-pass connected-components scan.

use std::collections::HashSet;

use ccl_test_support::partition::{Cell, GridView, verify_partition};
use rstest::rstest;

use super::scan::ScanState;
use crate::{BoundingBox, Connectivity, Grid, Point, Region, find_connected_components};

fn cells(region: &Region) -> HashSet<Cell> {
    region.points().iter().map(|point| (point.x, point.y)).collect()
}

fn label(values: &[i64], width: usize, connectivity: Connectivity) -> Vec<Region> {
    let height = values.len() / width;
    find_connected_components(values, width, height, connectivity).expect("dimensions match")
}

fn region_containing(regions: &[Region], point: Point) -> &Region {
    regions
        .iter()
        .find(|region| region.contains(point))
        .expect("a region must contain the point")
}

#[test]
fn empty_grid_has_no_regions() {
    let values = [0; 25];
    assert!(label(&values, 5, Connectivity::FourWay).is_empty());
}

#[test]
fn zero_area_grid_has_no_regions() {
    let regions = find_connected_components(&[], 0, 3, Connectivity::EightWay)
        .expect("zero-width grid is valid");
    assert!(regions.is_empty());
}

#[test]
fn isolated_pixel_forms_unit_region() {
    let values = [0, 0, 0, 0, 9, 0, 0, 0, 0];
    let regions = label(&values, 3, Connectivity::EightWay);
    assert_eq!(regions.len(), 1);
    let region = &regions[0];
    assert_eq!(region.value(), 9);
    assert_eq!(region.bounding_box(), BoundingBox::new(1, 1, 1, 1));
    assert_eq!(cells(region), HashSet::from([(1, 1)]));
}

#[test]
fn separates_regions_by_value() {
    #[rustfmt::skip]
    let values = [
        1, 1, 0,
        0, 0, 0,
        0, 2, 2,
    ];
    let regions = label(&values, 3, Connectivity::FourWay);
    assert_eq!(regions.len(), 2);

    let top = region_containing(&regions, Point::new(0, 0));
    assert_eq!(cells(top), HashSet::from([(0, 0), (1, 0)]));
    assert_eq!(top.bounding_box(), BoundingBox::new(0, 0, 2, 1));

    let bottom = region_containing(&regions, Point::new(1, 2));
    assert_eq!(cells(bottom), HashSet::from([(1, 2), (2, 2)]));
    assert_eq!(bottom.bounding_box(), BoundingBox::new(1, 2, 2, 1));
}

#[rstest]
#[case::four_way(Connectivity::FourWay, 2)]
#[case::eight_way(Connectivity::EightWay, 1)]
fn diagonal_contact_depends_on_connectivity(
    #[case] connectivity: Connectivity,
    #[case] expected: usize,
) {
    #[rustfmt::skip]
    let values = [
        1, 0, 0,
        0, 1, 1,
        0, 1, 1,
    ];
    let regions = label(&values, 3, connectivity);
    assert_eq!(regions.len(), expected);

    let block = region_containing(&regions, Point::new(2, 2));
    let mut expected_cells = HashSet::from([(1, 1), (2, 1), (1, 2), (2, 2)]);
    if connectivity == Connectivity::EightWay {
        expected_cells.insert((0, 0));
        assert_eq!(block.bounding_box(), BoundingBox::new(0, 0, 3, 3));
    } else {
        assert_eq!(block.bounding_box(), BoundingBox::new(1, 1, 2, 2));
        let corner = region_containing(&regions, Point::new(0, 0));
        assert_eq!(cells(corner), HashSet::from([(0, 0)]));
    }
    assert_eq!(cells(block), expected_cells);
}

#[test]
fn adjacent_values_never_merge() {
    #[rustfmt::skip]
    let values = [
        1, 1, 4, 0, 0,
        1, 1, 4, 2, 0,
        1, 1, 4, 2, 0,
        0, 0, 5, 5, 0,
        0, 0, 3, 3, 3,
    ];
    let regions = label(&values, 5, Connectivity::EightWay);
    assert_eq!(regions.len(), 5);
    for region in &regions {
        let seen: HashSet<i64> = region
            .points()
            .iter()
            .map(|point| values[point.y * 5 + point.x])
            .collect();
        assert_eq!(seen, HashSet::from([region.value()]));
    }
}

#[rstest]
#[case::four_way(Connectivity::FourWay)]
#[case::eight_way(Connectivity::EightWay)]
fn rows_do_not_wrap_at_the_edges(#[case] connectivity: Connectivity) {
    #[rustfmt::skip]
    let values = [
        0, 0, 1,
        1, 0, 0,
    ];
    let regions = label(&values, 3, connectivity);
    assert_eq!(regions.len(), 2);
}

#[rstest]
#[case::empty(&[0; 25], 5, false)]
#[case::pairs(&[1, 1, 0, 0, 0, 0, 0, 2, 2], 3, false)]
#[case::diagonal_join(&[1, 0, 0, 0, 1, 1, 0, 1, 1], 3, true)]
#[case::diagonal_split(&[2, 0, 0, 0, 1, 1, 0, 1, 1], 3, false)]
#[case::bars(&[1, 1, 1, 0, 0, 0, 2, 2, 2], 3, false)]
#[case::hourglass(&[1, 1, 1, 0, 1, 0, 1, 1, 1], 3, true)]
#[case::blocks_four(&[
    1, 1, 0, 0, 0,
    1, 1, 0, 2, 0,
    1, 1, 0, 2, 0,
    0, 0, 0, 0, 0,
    0, 0, 3, 3, 3,
], 5, false)]
#[case::blocks_eight(&[
    1, 1, 0, 0, 0,
    1, 1, 0, 2, 0,
    1, 1, 0, 2, 0,
    0, 0, 0, 0, 0,
    0, 0, 3, 3, 3,
], 5, true)]
#[case::corner_four(&[
    1, 1, 0, 0, 4,
    1, 1, 0, 2, 0,
    1, 1, 0, 2, 0,
    0, 0, 0, 0, 0,
    0, 0, 3, 3, 3,
], 5, false)]
#[case::corner_eight(&[
    1, 1, 0, 0, 2,
    1, 1, 0, 2, 0,
    1, 1, 0, 2, 0,
    0, 0, 0, 0, 0,
    0, 0, 3, 3, 3,
], 5, true)]
#[case::checkerboard(&[
    1, 0, 2, 0, 3,
    0, 4, 0, 5, 0,
    6, 0, 7, 0, 8,
    0, 9, 0, 10, 0,
    11, 0, 12, 0, 13,
], 5, false)]
#[case::abutting(&[
    1, 1, 4, 0, 0,
    1, 1, 4, 2, 0,
    1, 1, 4, 2, 0,
    0, 0, 5, 5, 0,
    0, 0, 3, 3, 3,
], 5, false)]
#[case::wide(&[
    1, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 4, 0, 0, 0, 5, 5, 5, 0, 0, 0, 3,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 5, 0, 0, 0, 3,
    0, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 0, 5, 0, 5, 0, 0, 0, 3,
    0, 6, 6, 6, 6, 6, 6, 6, 6, 6, 0, 6, 0, 5, 5, 5, 5, 5, 0, 3,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 7, 0, 0, 0, 0, 0, 0, 0, 0, 3,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3,
], 20, false)]
fn regions_partition_the_foreground(
    #[case] values: &[i64],
    #[case] width: usize,
    #[case] diagonal: bool,
) {
    let connectivity = if diagonal {
        Connectivity::EightWay
    } else {
        Connectivity::FourWay
    };
    let regions = label(values, width, connectivity);
    let found: Vec<HashSet<Cell>> = regions.iter().map(cells).collect();
    let grid = GridView::new(values, width, values.len() / width);
    assert_eq!(verify_partition(grid, &found, diagonal), Ok(()));
}

#[test]
fn merges_labels_that_meet_late_in_the_scan() {
    #[rustfmt::skip]
    let values = [
        1, 0, 1,
        1, 1, 1,
    ];
    let grid = Grid::new(&values, 3, 2).expect("dimensions match");
    let mut state = ScanState::new(3, 2);

    state.first_pass(&grid, Connectivity::FourWay);
    assert_eq!(state.provisional_labels(), 2);
    assert_eq!(state.class_count(), 1);
    assert_eq!(state.label(Point::new(2, 0)), Some(1));
    assert_eq!(state.label(Point::new(2, 1)), Some(0));

    state.second_pass(&grid).expect("every pixel resolves");
    let labels: HashSet<_> = state.labelled().map(|(_, label)| label).collect();
    assert_eq!(labels.len(), 1);
    assert_eq!(state.labelled().count(), 5);
}

#[test]
fn first_pass_takes_the_minimum_neighbour_label() {
    // Columns are scanned first, so (0, 1) and (2, 0) receive labels 0 and 1
    // before (2, 1) sees both of them.
    #[rustfmt::skip]
    let values = [
        0, 0, 7,
        7, 7, 7,
    ];
    let grid = Grid::new(&values, 3, 2).expect("dimensions match");
    let mut state = ScanState::new(3, 2);

    state.first_pass(&grid, Connectivity::FourWay);
    assert_eq!(state.label(Point::new(0, 1)), Some(0));
    assert_eq!(state.label(Point::new(1, 1)), Some(0));
    assert_eq!(state.label(Point::new(2, 0)), Some(1));
    assert_eq!(state.label(Point::new(2, 1)), Some(0));
    assert_eq!(state.label(Point::new(0, 0)), None);
}

#[test]
fn repeated_runs_yield_the_same_regions() {
    #[rustfmt::skip]
    let values = [
        1, 1, 0, 2,
        0, 1, 0, 2,
        3, 0, 0, 2,
    ];
    let grid = Grid::new(&values, 4, 3).expect("dimensions match");
    let labeller = super::ConnectedComponents::new(&grid, Connectivity::FourWay);
    let first = labeller.find_connected_components().expect("first run");
    let second = labeller.find_connected_components().expect("second run");
    assert_eq!(first, second);
}
