//! Benchmark setup error type.
//!
//! Lets fixture builders propagate failures with `?` instead of panicking
//! inside benchmark bodies.

use brg_analysis::AnalysisError;
use brg_core::BrgError;
use brg_kronecker::KroneckerError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Generator configuration was rejected.
    #[error("graph generation failed: {0}")]
    Generate(#[from] BrgError),
    /// Kronecker configuration was rejected.
    #[error("kronecker generation failed: {0}")]
    Kronecker(#[from] KroneckerError),
    /// Building the analysis graph failed.
    #[error("graph construction failed: {0}")]
    Analysis(#[from] AnalysisError),
}
