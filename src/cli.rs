// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `epilaunch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "epilaunch",
    version,
    about = "Launch the epitope-prediction Nextflow pipeline on a managed execution platform.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the pipeline parameters file (TOML).
    ///
    /// Default: `Epilaunch.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Epilaunch.toml")]
    pub params: String,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `EPILAUNCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve parameters and print the engine invocation, but don't
    /// provision storage or execute anything.
    #[arg(long)]
    pub dry_run: bool,
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

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
