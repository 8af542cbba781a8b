//! CLI argument definitions for the TLF index toolchain.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tlf_cli::logging::LogFormat;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "tlf-index",
    version,
    about = "TLF index toolchain - Build review sheets from TLF metadata exports",
    long_about = "Convert the flat attribute export emitted by the TLF rendering\n\
                  pipeline into the fixed-column index sheet, and derive batch XML\n\
                  manifests, SAS run scripts, and roster merges from it."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a raw export into the index sheet plus findings report.
    Convert(ConvertArgs),

    /// Generate the batch list XML manifest from an index sheet.
    BatchXml(BatchXmlArgs),

    /// Generate the SAS run script from an index sheet.
    Programs(ProgramsArgs),

    /// Fill a programmer roster from index records.
    RosterFill(RosterFillArgs),

    /// Merge QC comparison statuses into a roster.
    StatusFill(StatusFillArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Path to the raw export CSV (sect_num, sect_ttl, program, suffix, parm, value).
    #[arg(long = "export", value_name = "CSV")]
    pub export: PathBuf,

    /// Directory the index sheet, export copy, and findings report are written to.
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: PathBuf,

    /// Target encoding the index values must fit.
    #[arg(long = "encoding", value_enum, default_value = "latin1")]
    pub encoding: EncodingArg,

    /// Additional placeholder literal cleared from footnote slots (repeatable).
    #[arg(long = "placeholder", value_name = "LITERAL")]
    pub placeholder: Vec<String>,

    /// Run every stage and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct BatchXmlArgs {
    /// Path to a previously written index sheet.
    #[arg(long = "index", value_name = "CSV")]
    pub index: PathBuf,

    /// Path of the manifest to write.
    #[arg(long = "out", value_name = "XML")]
    pub out: PathBuf,

    /// Directory the PDF builder reads the RTF outputs from.
    #[arg(long = "file-location", value_name = "DIR")]
    pub file_location: String,

    /// Basename of the merged PDF pair; names with spaces are rejected.
    #[arg(long = "name", value_name = "NAME")]
    pub name: String,

    /// Header text repeated on every page and in the document heading.
    #[arg(long = "heading", value_name = "TEXT", default_value = "")]
    pub heading: String,

    /// startNumber attribute of the page header.
    #[arg(long = "start-number", value_name = "N", default_value_t = 2)]
    pub start_number: u32,

    /// Abort on encoding findings instead of warning.
    #[arg(long = "fail-on-encoding")]
    pub fail_on_encoding: bool,
}

#[derive(Parser)]
pub struct ProgramsArgs {
    /// Path to a previously written index sheet.
    #[arg(long = "index", value_name = "CSV")]
    pub index: PathBuf,

    /// Path of the SAS run script to write.
    #[arg(long = "out", value_name = "SAS")]
    pub out: PathBuf,
}

#[derive(Parser)]
pub struct RosterFillArgs {
    /// Path to a previously written index sheet.
    #[arg(long = "index", value_name = "CSV")]
    pub index: PathBuf,

    /// Roster CSV with programmer assignments keyed by output or program name.
    #[arg(long = "roster", value_name = "CSV")]
    pub roster: PathBuf,

    /// Path of the filled roster to write.
    #[arg(long = "out", value_name = "CSV")]
    pub out: PathBuf,
}

#[derive(Parser)]
pub struct StatusFillArgs {
    /// Roster CSV whose QC status column is refreshed.
    #[arg(long = "roster", value_name = "CSV")]
    pub roster: PathBuf,

    /// QC comparison export (Dataset, Comparison Status).
    #[arg(long = "status", value_name = "CSV")]
    pub status: PathBuf,

    /// Path of the updated roster to write.
    #[arg(long = "out", value_name = "CSV")]
    pub out: PathBuf,
}

/// Target encoding choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum EncodingArg {
    Latin1,
    Ascii,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
