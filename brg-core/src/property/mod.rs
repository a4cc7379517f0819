//! Property-based tests for the generation pipeline.
//!
//! Verifies the output contract of [`crate::generate`] on randomly sampled
//! `(vertex_count, block_size, seed)` triples:
//!
//! - **Determinism**: identical arguments give identical edge vectors.
//! - **Structure**: edge count, endpoint bounds, and ordering.
//! - **Multiplicity**: every attachment event survives contraction exactly
//!   once, including links spanning several blocks.
//! - **Nesting**: doubling the block size never loses self-loops.

mod determinism;
mod multiplicity;
mod nesting;
mod strategies;
mod structural;
mod types;
