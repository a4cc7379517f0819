//! Shared test utilities used across brg crates.

pub mod ci;
pub mod recording;
