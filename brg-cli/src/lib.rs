//! Support library for the `brg` binary.
//!
//! Exposes the command pipeline and logging setup so tests can drive them
//! without spawning a subprocess.

pub mod cli;
pub mod logging;
