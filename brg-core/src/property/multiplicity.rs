//! Cross-block multiplicity property.
//!
//! Contraction pushes forward references and mirrors them onto later blocks,
//! then materialization keeps only `k >= i`. Rather than trusting the two
//! filters to cancel, this compares the emitted multiset against the block
//! pairs of the raw attachment events.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    attachment::build_attachment,
    stream::UniformStream,
    test_utils::{block_pair_multiset, edge_multiset},
};

use super::types::GeneratorFixture;

pub(super) fn run_multiplicity_property(fixture: GeneratorFixture) -> TestCaseResult {
    let brg = fixture.brg();
    let edges = brg.generate();
    let attachment = build_attachment(brg.node_count(), &mut UniformStream::new(fixture.seed));

    let emitted = edge_multiset(&edges);
    let expected = block_pair_multiset(attachment.adjacency(), fixture.block_size);
    if emitted == expected {
        return Ok(());
    }

    let mismatch = expected
        .iter()
        .find(|(pair, count)| emitted.get(*pair) != Some(*count))
        .map(|(pair, count)| (*pair, *count, emitted.get(pair).copied().unwrap_or(0)))
        .or_else(|| {
            emitted
                .iter()
                .find(|(pair, _)| !expected.contains_key(*pair))
                .map(|(pair, count)| (*pair, 0, *count))
        });
    Err(TestCaseError::fail(format!(
        "{fixture:?}: block multiplicity mismatch (pair, expected, emitted) = {mismatch:?}"
    )))
}
