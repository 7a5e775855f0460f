//! CLI argument definitions for the manifest extractor.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "metrc-lab-extract",
    version,
    about = "Extract required lab-test batches from Metrc transfer manifests",
    long_about = "Extract required lab-test batches from Metrc transfer manifest PDFs.\n\n\
                  Enriches extracted records against license and product reference\n\
                  tables and writes a fixed-layout spreadsheet row table."
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
    /// Process manifest PDFs and write the lab-test row table.
    Extract(ExtractArgs),

    /// List the known service categories in match-precedence order.
    Services,
}

#[derive(Parser)]
pub struct ExtractArgs {
    /// Manifest PDF files to process, in order.
    #[arg(value_name = "MANIFEST")]
    pub manifests: Vec<PathBuf>,

    /// Also process every PDF in this folder (sorted by filename).
    #[arg(long = "input-dir", value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// License reference table CSV (License Number, Company Name).
    ///
    /// When supplied, customer names are resolved by license lookup instead
    /// of the originating-entity text printed on the manifest.
    #[arg(long = "license-table", value_name = "CSV")]
    pub license_table: Option<PathBuf>,

    /// Product reference table CSV (Product Name, Standardized Name,
    /// Description).
    ///
    /// When supplied, service names are standardized through the table and
    /// the output gains a description column.
    #[arg(long = "product-table", value_name = "CSV")]
    pub product_table: Option<PathBuf>,

    /// Row-table destination.
    #[arg(long = "output", value_name = "PATH", default_value = "lab_test_data.csv")]
    pub output: PathBuf,

    /// Write a JSON run report to this path.
    #[arg(long = "report-json", value_name = "PATH")]
    pub report_json: Option<PathBuf>,

    /// Extract and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Discard service mentions that match neither the product table nor the
    /// known-service vocabulary.
    ///
    /// By default unmatched mentions pass through as their own service name
    /// so no lab-test data is silently lost.
    #[arg(long = "drop-unmatched")]
    pub drop_unmatched: bool,
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
