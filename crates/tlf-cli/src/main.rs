//! TLF index toolchain CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tlf_cli::logging::{LogConfig, init_logging};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod pipeline;
mod summary;
mod types;

use crate::cli::{Cli, Command};
use crate::commands::{run_batch_xml, run_convert, run_programs, run_roster_fill, run_status_fill};
use crate::summary::{
    print_batch_xml_summary, print_convert_summary, print_programs_summary,
    print_roster_fill_summary, print_status_fill_summary,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&log_config_from_cli(&cli)) {
        eprintln!("error: logging setup failed: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Convert(args) => match run_convert(&args) {
            Ok(result) => {
                print_convert_summary(&result);
                if result.report.has_errors() { 1 } else { 0 }
            }
            Err(error) => {
                eprintln!("error: {error}");
                1
            }
        },
        Command::BatchXml(args) => match run_batch_xml(&args) {
            Ok(result) => {
                print_batch_xml_summary(&result);
                0
            }
            Err(error) => {
                eprintln!("error: {error}");
                1
            }
        },
        Command::Programs(args) => match run_programs(&args) {
            Ok(result) => {
                print_programs_summary(&result);
                0
            }
            Err(error) => {
                eprintln!("error: {error}");
                1
            }
        },
        Command::RosterFill(args) => match run_roster_fill(&args) {
            Ok(result) => {
                print_roster_fill_summary(&result);
                0
            }
            Err(error) => {
                eprintln!("error: {error}");
                1
            }
        },
        Command::StatusFill(args) => match run_status_fill(&args) {
            Ok(result) => {
                print_status_fill_summary(&result);
                0
            }
            Err(error) => {
                eprintln!("error: {error}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Resolve the logging configuration. An explicit `--log-level` beats the
/// `-v` count, and `RUST_LOG` applies only when neither flag was given.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = cli
        .log_level
        .map_or_else(|| cli.verbosity.tracing_level_filter(), LevelFilter::from);
    LogConfig {
        level_filter,
        use_env_filter: cli.log_level.is_none() && !cli.verbosity.is_present(),
        format: cli.log_format.into(),
        log_file: cli.log_file.clone(),
        with_ansi: match cli.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
        },
        ..LogConfig::default()
    }
}
