//! Logging setup for the CLI.
//!
//! Pipeline stages run inside `info_span!` scopes, so progress, counts, and
//! per-stage warnings all flow through one subscriber. Logs default to
//! stderr; the summary tables print to stdout and stay machine-separable.
//!
//! # Log Levels
//!
//! - `error`: fatal conversion problems
//! - `warn`: findings and recoverable oddities
//! - `info`: stage progress and summary counts
//! - `debug`: per-file and per-record details
//! - `trace`: row-level data

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

/// How log events reach the user.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level cap applied to this workspace's crates.
    pub level_filter: LevelFilter,
    /// Honor `RUST_LOG` when no explicit level flag was given.
    pub use_env_filter: bool,
    /// Event rendering.
    pub format: LogFormat,
    /// Log destination; stderr when unset.
    pub log_file: Option<PathBuf>,
    /// ANSI colors on or off.
    pub with_ansi: bool,
    /// Attach the emitting module path to each event.
    pub with_target: bool,
    /// Attach timestamps to each event.
    pub with_timestamps: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            format: LogFormat::default(),
            log_file: None,
            with_ansi: true,
            with_target: false,
            with_timestamps: false,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable, colored.
    #[default]
    Pretty,
    /// One event per line.
    Compact,
    /// Newline-delimited JSON.
    Json,
}

/// Install the global subscriber; call once at startup, a second call
/// panics inside `tracing`.
///
/// # Errors
///
/// Returns an error when the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            install(config, Mutex::new(file));
        }
        None => install(config, io::stderr),
    }
    Ok(())
}

fn install<W>(config: &LogConfig, writer: W)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| workspace_filter(config.level_filter))
    } else {
        workspace_filter(config.level_filter)
    };

    let events: Box<dyn Layer<Registry> + Send + Sync> = match config.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(writer)
            .with_target(config.with_target)
            .with_span_events(FmtSpan::CLOSE)
            .boxed(),
        LogFormat::Compact => {
            let events = fmt::layer()
                .compact()
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target);
            if config.with_timestamps {
                events.boxed()
            } else {
                events.without_time().boxed()
            }
        }
        LogFormat::Pretty => {
            let events = fmt::layer()
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target);
            if config.with_timestamps {
                events.boxed()
            } else {
                events.without_time().boxed()
            }
        }
    };
    tracing_subscriber::registry()
        .with(events.with_filter(filter))
        .init();
}

/// Level directives for the workspace crates, external crates capped at the
/// same level through the bare default.
fn workspace_filter(level: LevelFilter) -> EnvFilter {
    let level = level.to_string().to_lowercase();
    EnvFilter::new(format!(
        "{level},tlf_cli={level},tlf_ingest={level},tlf_model={level},\
         tlf_report={level},tlf_roster={level},tlf_transform={level},\
         tlf_validate={level}"
    ))
}
