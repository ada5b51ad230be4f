//! CLI argument definitions for covid-db.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "covid-db",
    version,
    about = "Build the COVID-19 dashboard database from raw CSV exports",
    long_about = "Reshape the public COVID-19 CSV exports (confirmed, deaths, vaccine time \n\
                  series plus the daily snapshot report) into the normalized time_series \n\
                  and daily_report tables consumed by the dashboard."
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
    /// Run the full pipeline: read sources, transform, replace both tables.
    Build(BuildArgs),

    /// Read the destination tables back and print a preview of each.
    Tables(TablesArgs),
}

#[derive(Parser)]
pub struct BuildArgs {
    /// Directory holding the raw CSV exports.
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,

    /// Destination database file (default: <DATA_DIR>/covid_19.db).
    #[arg(long = "db", value_name = "PATH")]
    pub db_path: Option<PathBuf>,

    /// Explicit snapshot report file (default: newest MM-DD-YYYY.csv in DATA_DIR).
    #[arg(long = "report", value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Transform without writing the database.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct TablesArgs {
    /// Database file to inspect.
    #[arg(long = "db", value_name = "PATH")]
    pub db_path: PathBuf,

    /// Rows to preview per table.
    #[arg(long = "limit", value_name = "N", default_value_t = 5)]
    pub limit: usize,
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
