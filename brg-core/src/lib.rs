//! Block-contracted rank graph generator.
//!
//! Grows a multigraph on `N * M` nodes by weighted preferential attachment,
//! then folds each run of `M` consecutive nodes into one vertex, yielding an
//! `N`-vertex edge list with a tunable heavy-tailed degree profile.
//! Self-loops and parallel edges are part of the output.
//!
//! Generation is a pure function of `(N, M, seed)`; see [`UniformStream`] for
//! the pinned random stream.

mod attachment;
mod builder;
mod contraction;
mod edge;
mod error;
mod generator;
mod materialize;
mod stream;

#[cfg(test)]
mod property;
#[cfg(test)]
mod test_utils;

pub use crate::{
    attachment::{AttachmentGraph, AttachmentStats, IntermediateAdjacency, build_attachment},
    builder::BrgBuilder,
    contraction::{SuperAdjacency, contract},
    edge::Edge,
    error::{BrgError, BrgErrorCode, Result},
    generator::{Brg, GenerationReport, generate},
    materialize::materialize,
    stream::UniformStream,
};
