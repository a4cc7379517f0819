//! Logging initialisation for the `brg` binary.
//!
//! Installs a global `tracing` subscriber writing to `stderr` and bridges the
//! `log` facade, so edge lists and summaries on `stdout` stay parseable.

use std::{env, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

const LOG_FORMAT_ENV: &str = "BRG_LOG_FORMAT";
const DEFAULT_DIRECTIVE: &str = "info";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Output format of the diagnostic stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    Human,
    /// Newline-delimited JSON objects with span context.
    Json,
}

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `BRG_LOG_FORMAT` held bytes that are not UTF-8.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending variable.
        name: &'static str,
        /// Underlying failure.
        #[source]
        source: env::VarError,
    },
    /// `BRG_LOG_FORMAT` named an unknown format.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Value supplied by the user.
        provided: String,
    },
    /// The global subscriber could not be installed.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        /// Error raised by `tracing_subscriber`.
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Installs global structured logging once per process.
///
/// `BRG_LOG_FORMAT` selects `human` (default) or `json`; `RUST_LOG` sets the
/// filter and defaults to `info`. A subscriber installed elsewhere is left in
/// place.
///
/// # Errors
/// Returns [`LoggingError`] when `BRG_LOG_FORMAT` is not valid Unicode or
/// names an unsupported format.
pub fn init_logging() -> Result<(), LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    match install_subscriber() {
        Ok(()) | Err(LoggingError::InstallFailed { .. }) => {}
        Err(err) => return Err(err),
    }
    let _ = INITIALISED.set(());
    Ok(())
}

fn install_subscriber() -> Result<(), LoggingError> {
    let format = match env::var(LOG_FORMAT_ENV) {
        Ok(raw) => parse_log_format(&raw)?,
        Err(env::VarError::NotPresent) => LogFormat::Human,
        Err(source @ env::VarError::NotUnicode(_)) => {
            return Err(LoggingError::InvalidUnicode {
                name: LOG_FORMAT_ENV,
                source,
            });
        }
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);
    let fmt_layer = match format {
        LogFormat::Human => fmt_layer.boxed(),
        LogFormat::Json => fmt_layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    };

    // Another logger may already own the `log` slot; keep it if so.
    let _ = LogTracer::init();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|source| LoggingError::InstallFailed { source })
}

/// Parses a `BRG_LOG_FORMAT` value, ignoring case and surrounding spaces.
///
/// # Errors
/// Returns [`LoggingError::UnsupportedFormat`] for anything but `human` or
/// `json`.
pub fn parse_log_format(raw: &str) -> Result<LogFormat, LoggingError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "human" => Ok(LogFormat::Human),
        "json" => Ok(LogFormat::Json),
        other => Err(LoggingError::UnsupportedFormat {
            provided: other.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("human", LogFormat::Human)]
    #[case("HUMAN", LogFormat::Human)]
    #[case(" json ", LogFormat::Json)]
    #[case("Json", LogFormat::Json)]
    fn parse_log_format_accepts_supported_values(#[case] raw: &str, #[case] expected: LogFormat) {
        let format = parse_log_format(raw).expect("format must parse");
        assert_eq!(format, expected);
    }

    #[rstest]
    #[case("xml")]
    #[case("")]
    fn parse_log_format_rejects_unknown_values(#[case] raw: &str) {
        let err = parse_log_format(raw).expect_err("format must be rejected");
        assert!(matches!(err, LoggingError::UnsupportedFormat { provided } if provided == raw));
    }

    #[test]
    fn init_logging_is_idempotent() {
        init_logging().expect("logging must initialise");
        init_logging().expect("subsequent calls must be no-ops");
    }
}
