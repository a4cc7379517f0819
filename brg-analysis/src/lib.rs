//! Graph statistics used to evaluate generated benchmark inputs.
//!
//! Builds an undirected unit-weight multigraph from an edge list and computes
//! all-pairs distances, small-world statistics, connected components and
//! degree histograms. Disconnected graphs are valid inputs throughout.

mod components;
mod distance;
mod error;
mod graph;
mod histogram;
mod small_world;

pub use crate::{
    components::{Components, connected_components},
    distance::DistanceMatrix,
    error::{AnalysisError, Result},
    graph::Graph,
    histogram::{DegreeFraction, DegreeHistogram},
    small_world::SmallWorld,
};
