//! Result files written by the `bench` command and edge-list rendering.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use brg_analysis::{DegreeFraction, SmallWorld};
use brg_core::Edge;

use super::commands::CliError;

/// Writes one `v0\tv1` line per edge.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
///
/// # Examples
/// ```
/// use brg_cli::cli::write_edges;
/// use brg_core::Edge;
///
/// let mut buffer = Vec::new();
/// write_edges(&[Edge::new(0, 0), Edge::new(2, 1)], &mut buffer)?;
/// assert_eq!(String::from_utf8_lossy(&buffer), "0\t0\n1\t2\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn write_edges(edges: &[Edge], mut writer: impl Write) -> io::Result<()> {
    for edge in edges {
        writeln!(writer, "{edge}")?;
    }
    Ok(())
}

/// Locations of the three per-algorithm result files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultFiles {
    small_world: PathBuf,
    components: PathBuf,
    rank_histogram: PathBuf,
}

impl ResultFiles {
    /// Names the files for `label` inside `directory`, creating the directory
    /// when missing.
    ///
    /// # Errors
    /// Returns [`CliError::Io`] when the directory cannot be created.
    pub fn create(directory: &Path, label: &str) -> Result<Self, CliError> {
        fs::create_dir_all(directory).map_err(|source| CliError::Io {
            path: directory.to_path_buf(),
            source,
        })?;
        Ok(Self {
            small_world: directory.join(format!("{label}_small_world.csv")),
            components: directory.join(format!("{label}_num_comps.csv")),
            rank_histogram: directory.join(format!("{label}_rank_hist.csv")),
        })
    }

    /// `{label}_small_world.csv`.
    #[must_use]
    pub fn small_world(&self) -> &Path {
        &self.small_world
    }

    /// `{label}_num_comps.csv`.
    #[must_use]
    pub fn components(&self) -> &Path {
        &self.components
    }

    /// `{label}_rank_hist.csv`.
    #[must_use]
    pub fn rank_histogram(&self) -> &Path {
        &self.rank_histogram
    }

    /// Appends a `diameter,mean_distance` line.
    ///
    /// # Errors
    /// Returns [`CliError::Io`] when the file cannot be opened or written.
    pub fn append_small_world(&self, summary: &SmallWorld) -> Result<(), CliError> {
        append_line(
            &self.small_world,
            &format!("{},{}", summary.diameter, summary.mean_distance),
        )
    }

    /// Appends a component-count line.
    ///
    /// # Errors
    /// Returns [`CliError::Io`] when the file cannot be opened or written.
    pub fn append_components(&self, count: usize) -> Result<(), CliError> {
        append_line(&self.components, &count.to_string())
    }

    /// Replaces the rank histogram with `degree,fraction` lines.
    ///
    /// # Errors
    /// Returns [`CliError::Io`] when the file cannot be created or written.
    pub fn write_rank_histogram(&self, buckets: &[DegreeFraction]) -> Result<(), CliError> {
        let path = &self.rank_histogram;
        let io_error = |source| CliError::Io {
            path: path.clone(),
            source,
        };
        let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
        for bucket in buckets {
            writeln!(writer, "{},{}", bucket.degree, bucket.fraction).map_err(io_error)?;
        }
        writer.flush().map_err(io_error)
    }
}

fn append_line(path: &Path, line: &str) -> Result<(), CliError> {
    let io_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_error)?;
    writeln!(file, "{line}").map_err(io_error)
}
