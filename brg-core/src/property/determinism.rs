//! Determinism property: the same arguments give the same edge vector.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::generate;

use super::types::GeneratorFixture;

pub(super) fn run_determinism_property(fixture: GeneratorFixture) -> TestCaseResult {
    let run = || {
        generate(fixture.vertex_count, fixture.block_size, fixture.seed)
            .map_err(|err| TestCaseError::fail(format!("{fixture:?}: generate failed: {err}")))
    };
    let first = run()?;
    let second = run()?;

    if first.len() != second.len() {
        return Err(TestCaseError::fail(format!(
            "{fixture:?}: edge count mismatch: {} vs {}",
            first.len(),
            second.len()
        )));
    }
    for (index, (left, right)) in first.iter().zip(&second).enumerate() {
        if left != right {
            return Err(TestCaseError::fail(format!(
                "{fixture:?}: edge {index} differs: {left:?} vs {right:?}"
            )));
        }
    }
    Ok(())
}
