// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `coresched`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "coresched",
    version,
    about = "Generates a task schedule based on a task list and the compute resources available.",
    long_about = None
)]
pub struct CliArgs {
    /// Task description file (YAML or TOML).
    #[arg(value_name = "TASKS")]
    pub tasks: PathBuf,

    /// Resource description file (YAML or TOML).
    #[arg(value_name = "RESOURCES")]
    pub resources: PathBuf,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Only print the priority order and makespan, not every placement.
    #[arg(long, short)]
    pub quiet: bool,

    /// Validate the input and print the priority order without simulating.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `CORESCHED_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
