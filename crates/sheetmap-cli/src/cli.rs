//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sheetmap",
    version,
    about = "Suggest mappings from spreadsheet exports to a relational schema",
    long_about = "Match source sheets to target tables and source columns to target\n\
                  columns, with confidence scores and proposals for schema that does\n\
                  not exist yet. Inputs are CSV sheets and a JSON schema catalog."
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

    /// Emit JSON log lines instead of the human-readable format.
    #[arg(long = "log-json", global = true)]
    pub log_json: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Suggest table and column mappings for one or more sheets.
    Suggest(SuggestArgs),

    /// Emit schema proposals for sheets that match no catalog table.
    Propose(ProposeArgs),

    /// Show inferred column types and profile statistics for a sheet.
    Infer(InferArgs),
}

#[derive(Parser)]
pub struct SuggestArgs {
    /// CSV sheet files to map.
    #[arg(value_name = "SHEET", required = true)]
    pub sheets: Vec<PathBuf>,

    /// JSON schema catalog describing the target tables.
    #[arg(long = "schema", value_name = "CATALOG")]
    pub schema: PathBuf,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct ProposeArgs {
    /// CSV sheet files to examine.
    #[arg(value_name = "SHEET", required = true)]
    pub sheets: Vec<PathBuf>,

    /// JSON schema catalog describing the target tables.
    #[arg(long = "schema", value_name = "CATALOG")]
    pub schema: PathBuf,
}

#[derive(Parser)]
pub struct InferArgs {
    /// CSV sheet file to profile.
    #[arg(value_name = "SHEET")]
    pub sheet: PathBuf,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
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
