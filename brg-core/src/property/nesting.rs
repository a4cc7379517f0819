//! Nested-block monotonicity.
//!
//! One draw is consumed per attachment node and a node's decision depends
//! only on earlier nodes, so the run with block size `2M` replays the run
//! with block size `M` as a prefix. Blocks of size `M` nest inside blocks of
//! size `2M`, so every self-loop of the smaller run is still a self-loop.
//!
//! Growing `M` by an arbitrary step carries no such guarantee. When `M` does
//! not divide the larger block size the boundaries move, and an edge that
//! stayed inside one block can end up joining two. For `N = 2` and seed 24
//! the run with `M = 2` keeps four self-loops while `M = 3` keeps three, so
//! only the doubling relation is checked here.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use super::types::GeneratorFixture;

pub(super) fn run_nesting_property(fixture: GeneratorFixture) -> TestCaseResult {
    let doubled = GeneratorFixture::new(fixture.vertex_count, fixture.block_size * 2, fixture.seed);
    let small = fixture.brg().generate_with_report().self_loops;
    let large = doubled.brg().generate_with_report().self_loops;
    if large < small {
        return Err(TestCaseError::fail(format!(
            "{fixture:?}: doubling the block size dropped self-loops from {small} to {large}"
        )));
    }
    Ok(())
}
