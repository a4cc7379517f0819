use brg_core::{BrgError, BrgErrorCode};
use rstest::rstest;

#[rstest]
#[case(
    BrgError::InvalidArgument { parameter: "vertex_count", got: 0 },
    BrgErrorCode::InvalidArgument,
    "BRG_INVALID_ARGUMENT",
)]
#[case(
    BrgError::NodeCountOverflow { vertex_count: usize::MAX, block_size: 2 },
    BrgErrorCode::NodeCountOverflow,
    "BRG_NODE_COUNT_OVERFLOW",
)]
fn returns_expected_code(
    #[case] error: BrgError,
    #[case] expected: BrgErrorCode,
    #[case] rendered: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), rendered);
    assert_eq!(error.code().to_string(), rendered);
}

#[test]
fn invalid_argument_names_the_parameter() {
    let error = BrgError::InvalidArgument {
        parameter: "block_size",
        got: 0,
    };
    assert_eq!(error.to_string(), "block_size must be at least 1 (got 0)");
}
