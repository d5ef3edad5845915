//! Flags accepted before or after any subcommand.

use clap::Args;
use std::path::PathBuf;

const HEADING: &str = "Global options";

/// Flags shared by every `payroll` subcommand.
#[derive(Debug, Clone, Args)]
#[command(next_help_heading = HEADING)]
pub struct GlobalArgs {
    /// More diagnostics on stderr: -v hires and removals, -vv storage
    /// writes, -vvv everything
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors and requested data
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never colour output (also set by a non-empty NO_COLOR)
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Read settings from FILE instead of the platform config dir
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// JSON file holding the employee records [default: storage.data_file]
    #[arg(
        short = 'f',
        long,
        global = true,
        value_name = "FILE",
        env = "PAYROLL_DATA_FILE"
    )]
    pub data_file: Option<PathBuf>,

    /// Decoration of messages; `plain` also drops colour
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Auto,
        env = "PAYROLL_OUTPUT_FORMAT"
    )]
    pub output_format: OutputFormat,
}

/// Message decoration for the `payroll` binary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain when piped
    #[default]
    Auto,
    /// Symbols and colour
    Human,
    /// Bare text
    Plain,
}
