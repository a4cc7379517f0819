//! Structural checks on a single generated edge list.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use super::types::GeneratorFixture;

/// Checks edge count, canonical endpoints, bounds, and source ordering.
pub(super) fn run_structural_property(fixture: GeneratorFixture) -> TestCaseResult {
    let brg = fixture.brg();
    let report = brg.generate_with_report();
    let node_count = brg.node_count().get();

    if report.edges.len() > node_count {
        return Err(TestCaseError::fail(format!(
            "{fixture:?}: {} edges exceed node count {node_count}",
            report.edges.len()
        )));
    }
    if report.edges.len() != report.attachment.attachment_events {
        return Err(TestCaseError::fail(format!(
            "{fixture:?}: {} edges for {} attachment events",
            report.edges.len(),
            report.attachment.attachment_events
        )));
    }
    if report.attachment.rank_sum != 2 * node_count {
        return Err(TestCaseError::fail(format!(
            "{fixture:?}: rank sum {} != {}",
            report.attachment.rank_sum,
            2 * node_count
        )));
    }

    for (index, edge) in report.edges.iter().enumerate() {
        if edge.v0() > edge.v1() || edge.v1() >= fixture.vertex_count {
            return Err(TestCaseError::fail(format!(
                "{fixture:?}: edge {index} ({edge}) is out of bounds"
            )));
        }
    }
    if report.edges.windows(2).any(|pair| pair[0].v0() > pair[1].v0()) {
        return Err(TestCaseError::fail(format!(
            "{fixture:?}: edges are not grouped by ascending source"
        )));
    }

    let loops = report.edges.iter().filter(|edge| edge.is_self_loop()).count();
    if loops != report.self_loops {
        return Err(TestCaseError::fail(format!(
            "{fixture:?}: {loops} self-loop edges but contraction reported {}",
            report.self_loops
        )));
    }
    Ok(())
}
