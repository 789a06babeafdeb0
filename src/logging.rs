//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! Logs always go to stderr so that stdout stays clean for list output and
//! `--json` event streams.
//!
//! # Log Levels
//!
//! - `warn`: partial cleanups, ignored manifest keys, unreadable config
//! - `info`: outcomes with warning or error severity
//! - `debug`: successful outcomes, rebuild counts, skipped objects
//!
//! `LINKVIEW_LOG` overrides the level chosen from `-v` flags.

use std::io;

use tracing::{debug, info, Level};
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::domain::value_objects::{Outcome, Severity};

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV_VAR: &str = "LINKVIEW_LOG";

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level filter
    pub level: Level,
    /// Whether to include target (module path) in log output.
    pub with_target: bool,
    /// Whether to use ANSI colors in output.
    pub with_ansi: bool,
    pub format: LogFormat,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact single-line format.
    #[default]
    Compact,
    /// JSON format for machine parsing.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            with_target: false,
            with_ansi: true,
            format: LogFormat::default(),
        }
    }
}

impl LogConfig {
    /// Create a `LogConfig` from CLI verbosity count.
    ///
    /// - 0: warn
    /// - 1 (`-v`): info
    /// - 2 (`-vv`): debug
    /// - 3+: trace
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }
}

/// Initialize the global tracing subscriber writing to stderr.
///
/// Returns `false` when a subscriber was already installed.
pub fn init_logging(config: &LogConfig) -> bool {
    init_logging_with_writer(config, io::stderr)
}

/// Initialize logging with a custom writer (useful for testing).
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W) -> bool
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = build_env_filter(config.level);

    match config.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_target(config.with_target);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
                .is_ok()
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target)
                .without_time();
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
                .is_ok()
        }
    }
}

/// Build an `EnvFilter` from the given level, respecting `LINKVIEW_LOG`.
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| {
        // External crates stay at warn level
        let level = level.as_str().to_lowercase();
        EnvFilter::new(format!("warn,linkview={level}"))
    })
}

/// Log an operation outcome one level below what the user sees.
///
/// The printer already reports outcomes; these show up with `-v`.
pub fn log_outcome(operation: &str, outcome: &Outcome) {
    match outcome.severity {
        Severity::Info => debug!(
            operation,
            code = ?outcome.code,
            count = outcome.count,
            "{}",
            outcome.message
        ),
        Severity::Warning | Severity::Error => info!(
            operation,
            severity = ?outcome.severity,
            code = ?outcome.code,
            "{}",
            outcome.message
        ),
    }
}
