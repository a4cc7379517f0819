//! Error types for the Kronecker generator.

use thiserror::Error;

/// Errors produced by the Kronecker generator.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum KroneckerError {
    /// The scale cannot address a vertex range that fits in `usize`, or is
    /// zero.
    #[error("scale must be between 1 and {max} (got {scale})")]
    InvalidScale {
        /// Requested scale.
        scale: u32,
        /// Largest accepted scale on this target.
        max: u32,
    },
    /// The vertex count is not a power of two, so no scale addresses it
    /// exactly.
    #[error("vertex count must be a power of two (got {vertex_count})")]
    NotPowerOfTwo {
        /// Requested vertex count.
        vertex_count: usize,
    },
    /// `vertex_count * edge_factor` does not fit in `usize`.
    #[error("edge count overflows for {vertex_count} vertices with edge factor {edge_factor}")]
    EdgeCountOverflow {
        /// Requested vertex count.
        vertex_count: usize,
        /// Requested edges per vertex.
        edge_factor: usize,
    },
}

/// Convenient result alias for Kronecker operations.
pub type Result<T> = core::result::Result<T, KroneckerError>;
