//! Command-line interface orchestration for the `brg` binary.
//!
//! `generate` writes one edge list; `bench` repeats generation over seeded
//! trials, analyses each graph and appends the statistics to CSV files.

mod commands;
mod report;

pub use commands::{
    Algorithm, BenchCommand, BenchSummary, Cli, CliError, Command, ExecutionSummary,
    GenerateCommand, GenerateSummary, TrialSummary, render_summary, run_cli,
};
pub use report::{ResultFiles, write_edges};

#[cfg(test)]
mod test_helpers;
