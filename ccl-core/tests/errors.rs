use ccl_core::{
    Connectivity, DisjointSetError, DisjointSetErrorCode, LabelError, LabelErrorCode, Point,
    find_connected_components,
};
use rstest::rstest;

#[test]
fn returns_expected_disjoint_set_code() {
    let error = DisjointSetError::UnknownElement;
    assert_eq!(error.code(), DisjointSetErrorCode::UnknownElement);
    assert_eq!(error.code().as_str(), "DISJOINT_SET_UNKNOWN_ELEMENT");
}

#[rstest]
#[case(
    LabelError::DimensionMismatch { width: 2, height: 2, expected: 4, actual: 3 },
    LabelErrorCode::DimensionMismatch,
    "CCL_DIMENSION_MISMATCH",
    None,
)]
#[case(
    LabelError::DimensionOverflow { width: usize::MAX, height: 2 },
    LabelErrorCode::DimensionOverflow,
    "CCL_DIMENSION_OVERFLOW",
    None,
)]
#[case(
    LabelError::InvariantViolation { invariant: "root carries a label", point: Point::new(1, 1) },
    LabelErrorCode::InvariantViolation,
    "CCL_INVARIANT_VIOLATION",
    None,
)]
#[case(
    LabelError::Forest { point: Point::new(0, 2), error: DisjointSetError::UnknownElement },
    LabelErrorCode::ForestFailure,
    "CCL_FOREST_FAILURE",
    Some(DisjointSetErrorCode::UnknownElement),
)]
fn returns_expected_label_code(
    #[case] error: LabelError,
    #[case] expected: LabelErrorCode,
    #[case] raw: &str,
    #[case] forest_code: Option<DisjointSetErrorCode>,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), raw);
    assert_eq!(error.code().to_string(), raw);
    assert_eq!(error.forest_code(), forest_code);
}

#[test]
fn dimension_mismatch_message_names_both_counts() {
    let err = find_connected_components(&[1, 1, 1], 2, 2, Connectivity::FourWay)
        .expect_err("three values cannot fill a 2x2 grid");
    assert_eq!(
        err.to_string(),
        "grid of 2x2 requires 4 values but 3 were given"
    );
}

#[test]
fn forest_errors_expose_their_source() {
    use std::error::Error as _;

    let err = LabelError::Forest {
        point: Point::new(3, 4),
        error: DisjointSetError::UnknownElement,
    };
    assert_eq!(
        err.to_string(),
        "label resolution failed at (3, 4): element is not registered in the disjoint-set forest"
    );
    assert!(err.source().is_some());
}
