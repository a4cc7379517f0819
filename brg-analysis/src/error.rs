//! Error types for graph analysis.

use thiserror::Error;

/// Errors produced while building analysis inputs.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnalysisError {
    /// An edge endpoint lies outside `0..vertex_count`.
    #[error("edge {edge_index} references vertex {vertex} outside 0..{vertex_count}")]
    VertexOutOfRange {
        /// Position of the offending edge in the input.
        edge_index: usize,
        /// Offending endpoint.
        vertex: usize,
        /// Declared vertex count.
        vertex_count: usize,
    },
}

/// Convenient result alias for analysis operations.
pub type Result<T> = core::result::Result<T, AnalysisError>;
