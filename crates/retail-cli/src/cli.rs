//! CLI argument definitions for the retail pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "retail-pipeline",
    version,
    about = "Retail data pipeline - clean raw tables and derive analytics",
    long_about = "Clean the raw customer, product, and transaction tables and\n\
                  derive revenue analytics.\n\n\
                  Reads customers.csv, products.csv, and transactions.csv from the\n\
                  data directory, repairs malformed values with deterministic\n\
                  per-column rules, and writes cleaned tables plus five analytics\n\
                  tables and a KPI summary."
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
    /// Clean the raw tables and generate analytics outputs.
    Run(RunArgs),

    /// Show the expected input tables and their columns.
    Schema,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Directory containing customers.csv, products.csv, and transactions.csv.
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,

    /// Output directory for generated files (default: <DATA_DIR>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Clean and aggregate without writing any output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Write a machine-readable run summary (JSON) to this path.
    #[arg(long = "summary-json", value_name = "PATH")]
    pub summary_json: Option<PathBuf>,
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
