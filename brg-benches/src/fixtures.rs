//! Pre-built graphs for benchmarks that only measure analysis.

use brg_analysis::Graph;
use brg_core::BrgBuilder;

use crate::{error::BenchSetupError, params::GraphBenchParams};

/// Seed shared by every fixture.
pub const FIXTURE_SEED: u64 = 42;

/// Builds the analysis graph of a rank graph with the given shape.
///
/// # Errors
/// Returns [`BenchSetupError`] when the shape is rejected by the generator.
pub fn rank_graph(params: GraphBenchParams) -> Result<Graph, BenchSetupError> {
    let edges = BrgBuilder::new()
        .with_vertex_count(params.vertex_count)
        .with_block_size(params.block_size)
        .with_seed(FIXTURE_SEED)
        .build()?
        .generate();
    Ok(Graph::from_edges(params.vertex_count, &edges)?)
}

/// Builds the analysis graph of a Kronecker graph with the given shape.
///
/// # Errors
/// Returns [`BenchSetupError`] when the vertex count is not a power of two.
pub fn kronecker_graph(params: GraphBenchParams) -> Result<Graph, BenchSetupError> {
    let edges = brg_kronecker::generate_for_vertices(
        params.vertex_count,
        params.block_size,
        (FIXTURE_SEED, FIXTURE_SEED + 1),
    )?;
    Ok(Graph::from_edges(params.vertex_count, &edges)?)
}
