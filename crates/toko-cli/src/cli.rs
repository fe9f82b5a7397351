//! CLI argument definitions for toko-migrate.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "toko-migrate",
    version,
    about = "Migrate legacy bookstore ERP exports into a document-store bundle",
    long_about = "One-shot migration of legacy bookstore ERP CSV exports.\n\n\
                  Reconciles up to eleven flat-file exports into a normalized\n\
                  entity graph ready for a bulk document-store write, plus a\n\
                  reject report for rows the approval workflow refused."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Migrate an export folder and write the store bundle.
    Migrate(MigrateArgs),

    /// List the supported legacy tables and their column layouts.
    Tables,
}

#[derive(Parser)]
pub struct MigrateArgs {
    /// Path to the folder containing the legacy CSV exports.
    #[arg(value_name = "EXPORT_FOLDER")]
    pub export_folder: PathBuf,

    /// Output directory for generated files (default: <EXPORT_FOLDER>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Run the pipeline and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
