//! Small helpers shared across CLI tests.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use super::{Cli, CliError, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn read_lines(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(contents) => contents.lines().map(ToOwned::to_owned).collect(),
        Err(err) => panic!("failed to read {}: {err}", path.display()),
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
