//! Benchmark support crate for brg.
//!
//! Provides parameter types and graph fixtures for the Criterion benchmarks
//! covering generation (both generators) and the analysis stages.

pub mod error;
pub mod fixtures;
pub mod params;
