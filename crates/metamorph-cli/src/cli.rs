use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Metamorphosis metrics over firm financial datasets.
#[derive(Debug, Parser)]
#[command(
    name = "metamorph",
    author,
    version,
    about = "Firm metamorphosis metrics over the 2017-2021 window"
)]
pub struct Cli {
    /// Path to the firm dataset (CSV with name,year,profit,sales,market_value).
    ///
    /// Falls back to the METAMORPH_DATA environment variable.
    #[arg(long, global = true, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings and errors as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table format for terminal display.
    Table,
    /// Single JSON object output.
    Json,
    /// Newline-delimited JSON (one object per line).
    Ndjson,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the firm catalog in order.
    Firms,

    /// Derive the metamorphosis metric sequence for one firm.
    Analyze(AnalyzeArgs),

    /// Rank analyzable firms by latest market value.
    Rank,

    /// Search firm names by case-insensitive substring.
    Search(SearchArgs),
}

/// Arguments for the `analyze` command.
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Exact firm name as it appears in the dataset.
    pub firm: String,
}

/// Arguments for the `search` command.
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Substring to match against firm names.
    pub query: String,
}
