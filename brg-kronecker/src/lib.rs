//! Stochastic Kronecker comparison generator.
//!
//! Produces Graph500-style R-MAT edge lists so benchmark runs can compare the
//! block-contracted generator against a well-known heavy-tailed baseline.
//! Output shares [`brg_core::Edge`] so downstream analysis is agnostic of the
//! generator.

mod error;
mod generator;
mod initiator;

pub use crate::{
    error::{KroneckerError, Result},
    generator::{generate, generate_for_vertices, scale_for_vertices, validate_for_vertices},
    initiator::{GRAPH500_INITIATOR, Initiator},
};
