//! Command implementations and argument parsing for the `brg` binary.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use brg_analysis::{
    AnalysisError, DegreeHistogram, DistanceMatrix, Graph, SmallWorld, connected_components,
};
use brg_core::{BrgBuilder, BrgError, Edge};
use brg_kronecker::KroneckerError;
use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::report::{ResultFiles, write_edges};

const DEFAULT_VERTICES: usize = 4096;
const DEFAULT_BLOCK_SIZE: usize = 16;
const DEFAULT_TRIALS: u32 = 16;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "brg",
    about = "Generate and evaluate block-contracted rank graphs."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Write one generated edge list.
    Generate(GenerateCommand),
    /// Run seeded trials and record graph statistics as CSV.
    Bench(BenchCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Number of vertices in the generated graph.
    #[arg(long)]
    pub vertices: usize,

    /// Attachment nodes folded into each vertex.
    #[arg(long = "block-size")]
    pub block_size: usize,

    /// Seed of the uniform stream.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// File to write instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Options accepted by the `bench` command.
#[derive(Debug, Args, Clone)]
pub struct BenchCommand {
    /// Generator under evaluation.
    #[arg(long, value_enum)]
    pub algorithm: Algorithm,

    /// Number of vertices per trial.
    #[arg(long, default_value_t = DEFAULT_VERTICES)]
    pub vertices: usize,

    /// Block size for `brg`, edge factor for `skg`.
    #[arg(long = "block-size", default_value_t = DEFAULT_BLOCK_SIZE)]
    pub block_size: usize,

    /// Number of trials.
    #[arg(
        long,
        default_value_t = DEFAULT_TRIALS,
        value_parser = clap::value_parser!(u32).range(1..),
    )]
    pub trials: u32,

    /// Seed of the first trial; derived from the system clock when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory receiving the CSV files.
    #[arg(long = "output-dir", default_value = ".")]
    pub output_dir: PathBuf,
}

/// Generators the `bench` command can evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Block-contracted rank graph.
    Brg,
    /// Stochastic Kronecker graph.
    Skg,
}

impl Algorithm {
    /// Prefix of the result file names.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Brg => "brg",
            Self::Skg => "skg",
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed.
    #[error("failed to write `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Generator configuration was rejected.
    #[error(transparent)]
    Core(#[from] BrgError),
    /// Kronecker configuration was rejected.
    #[error(transparent)]
    Kronecker(#[from] KroneckerError),
    /// A generated edge fell outside the vertex range.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

/// Outcome of a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// Result of `generate`.
    Generate(GenerateSummary),
    /// Result of `bench`.
    Bench(BenchSummary),
}

/// Edges produced by `generate`.
#[derive(Debug, Clone)]
pub struct GenerateSummary {
    /// Generated edges, in output order.
    pub edges: Vec<Edge>,
    /// File the edges were written to, if any.
    pub output: Option<PathBuf>,
}

/// Statistics gathered by `bench`.
#[derive(Debug, Clone)]
pub struct BenchSummary {
    /// Generator under evaluation.
    pub algorithm: Algorithm,
    /// Seed of the first trial.
    pub seed: u64,
    /// Per-trial statistics, in trial order.
    pub trials: Vec<TrialSummary>,
    /// Files the statistics were written to.
    pub files: ResultFiles,
}

/// Statistics of one trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialSummary {
    /// Zero-based trial index.
    pub index: u32,
    /// Seed the trial's graph was generated from.
    pub seed: u64,
    /// Edges in the generated graph.
    pub edges: usize,
    /// Diameter and mean distance.
    pub small_world: SmallWorld,
    /// Number of connected components.
    pub components: usize,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when configuration is invalid or a result file cannot
/// be written.
///
/// # Examples
/// ```
/// # use brg_cli::cli::{Cli, Command, ExecutionSummary, GenerateCommand, run_cli};
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand {
///         vertices: 8,
///         block_size: 2,
///         seed: 1,
///         output: None,
///     }),
/// };
/// let ExecutionSummary::Generate(summary) = run_cli(cli)? else {
///     unreachable!("generate yields a generate summary");
/// };
/// assert_eq!(summary.edges.len(), 16);
/// # Ok::<(), brg_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Generate(command) => {
            span.record("command", field::display("generate"));
            run_generate(command).map(ExecutionSummary::Generate)
        }
        Command::Bench(command) => {
            span.record("command", field::display("bench"));
            run_bench(command).map(ExecutionSummary::Bench)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(vertices = command.vertices, block_size = command.block_size, seed = command.seed),
)]
pub(super) fn run_generate(command: GenerateCommand) -> Result<GenerateSummary, CliError> {
    let edges = BrgBuilder::new()
        .with_vertex_count(command.vertices)
        .with_block_size(command.block_size)
        .with_seed(command.seed)
        .build()?
        .generate();

    if let Some(path) = &command.output {
        let io_error = |source| CliError::Io {
            path: path.clone(),
            source,
        };
        let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
        write_edges(&edges, &mut writer).map_err(io_error)?;
        writer.flush().map_err(io_error)?;
        info!(edges = edges.len(), path = %path.display(), "edge list written");
    }

    Ok(GenerateSummary {
        edges,
        output: command.output,
    })
}

#[instrument(
    name = "cli.bench",
    err,
    skip(command),
    fields(
        algorithm = command.algorithm.label(),
        vertices = command.vertices,
        block_size = command.block_size,
        trials = command.trials,
        seed = field::Empty,
    ),
)]
pub(super) fn run_bench(command: BenchCommand) -> Result<BenchSummary, CliError> {
    let seed = command.seed.unwrap_or_else(clock_seed);
    Span::current().record("seed", seed);
    if command.seed.is_none() {
        info!(seed, "derived seed from the system clock");
    }

    let builder = BrgBuilder::new()
        .with_vertex_count(command.vertices)
        .with_block_size(command.block_size);
    match command.algorithm {
        Algorithm::Brg => {
            builder.clone().build()?;
        }
        Algorithm::Skg => {
            brg_kronecker::validate_for_vertices(command.vertices, command.block_size)?;
        }
    }

    let files = ResultFiles::create(&command.output_dir, command.algorithm.label())?;
    let mut histogram = DegreeHistogram::new();
    let mut trials = Vec::new();
    for index in 0..command.trials {
        let trial_seed = seed.wrapping_add(u64::from(index));
        let edges = match command.algorithm {
            Algorithm::Brg => builder.clone().with_seed(trial_seed).build()?.generate(),
            Algorithm::Skg => brg_kronecker::generate_for_vertices(
                command.vertices,
                command.block_size,
                (trial_seed, trial_seed.wrapping_add(1)),
            )?,
        };
        let trial = run_trial(index, trial_seed, command.vertices, &edges, &mut histogram)?;
        files.append_small_world(&trial.small_world)?;
        files.append_components(trial.components)?;
        trials.push(trial);
    }
    files.write_rank_histogram(&histogram.normalised())?;

    info!(trials = trials.len(), "bench completed");
    Ok(BenchSummary {
        algorithm: command.algorithm,
        seed,
        trials,
        files,
    })
}

#[instrument(
    name = "cli.trial",
    err,
    skip(edges, histogram),
    fields(edge_count = edges.len()),
)]
fn run_trial(
    index: u32,
    seed: u64,
    vertices: usize,
    edges: &[Edge],
    histogram: &mut DegreeHistogram,
) -> Result<TrialSummary, CliError> {
    let graph = Graph::from_edges(vertices, edges)?;
    histogram.record(&graph);
    let small_world = SmallWorld::from_matrix(&DistanceMatrix::compute(&graph));
    let components = connected_components(&graph).count;
    info!(
        diameter = small_world.diameter,
        mean_distance = small_world.mean_distance,
        components,
        "trial completed"
    );
    Ok(TrialSummary {
        index,
        seed,
        edges: edges.len(),
        small_world,
        components,
    })
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| {
            let nanos = elapsed.as_nanos();
            // Fold the high bits in so the seed changes every nanosecond.
            (nanos as u64) ^ ((nanos >> 64) as u64)
        })
}

/// Renders `summary` to `writer`.
///
/// `generate` without an output file renders the edge list itself, one
/// `v0\tv1` pair per line.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Generate(GenerateSummary { edges, output: None }) => {
            write_edges(edges, writer)
        }
        ExecutionSummary::Generate(GenerateSummary {
            edges,
            output: Some(path),
        }) => writeln!(writer, "wrote {} edges to {}", edges.len(), path.display()),
        ExecutionSummary::Bench(bench) => {
            writeln!(writer, "algorithm: {}", bench.algorithm.label())?;
            writeln!(writer, "seed: {}", bench.seed)?;
            writeln!(writer, "trial\tseed\tdiameter\tmean_distance\tcomponents")?;
            for trial in &bench.trials {
                writeln!(
                    writer,
                    "{}\t{}\t{}\t{}\t{}",
                    trial.index,
                    trial.seed,
                    trial.small_world.diameter,
                    trial.small_world.mean_distance,
                    trial.components,
                )?;
            }
            writeln!(writer, "results: {}", bench.files.small_world().display())?;
            writeln!(writer, "results: {}", bench.files.components().display())?;
            writeln!(writer, "results: {}", bench.files.rank_histogram().display())
        }
    }
}
