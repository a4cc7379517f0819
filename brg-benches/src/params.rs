//! Benchmark parameter types.

use std::fmt;

/// Graph shape for one benchmark input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphBenchParams {
    /// Vertices in the generated graph.
    pub vertex_count: usize,
    /// Block size for the rank graph, edge factor for Kronecker graphs.
    pub block_size: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.vertex_count, self.block_size)
    }
}
