//! Command line argument parsing for the linequery CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// linequery - line-indexed word lookup over text files
#[derive(Parser, Debug, Clone)]
#[command(name = "linequery")]
#[command(about = "Line-indexed word lookup over text files")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LineQueryArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LineQueryArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Look up words in a text file
    Query(QueryArgs),

    /// Interactive lookup loop
    Repl(ReplArgs),

    /// Show index statistics
    Stats(StatsArgs),

    /// Validate index integrity
    Validate(ValidateArgs),
}

/// Arguments for one-shot queries
#[derive(Parser, Debug, Clone)]
pub struct QueryArgs {
    /// Path to the text file to index
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Words to look up
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Regex pattern for token extraction (default: whitespace splitting)
    #[arg(long, value_name = "REGEX")]
    pub token_pattern: Option<String>,

    /// Lines to pre-allocate in the line store
    #[arg(long, default_value = "0")]
    pub initial_capacity: usize,
}

/// Arguments for the interactive loop
#[derive(Parser, Debug, Clone)]
pub struct ReplArgs {
    /// Path to the text file to index
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Regex pattern for token extraction (default: whitespace splitting)
    #[arg(long, value_name = "REGEX")]
    pub token_pattern: Option<String>,

    /// Word that terminates the loop
    #[arg(long, default_value = "q")]
    pub sentinel: String,
}

/// Arguments for index statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the text file to index
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Regex pattern for token extraction (default: whitespace splitting)
    #[arg(long, value_name = "REGEX")]
    pub token_pattern: Option<String>,
}

/// Arguments for index validation
#[derive(Parser, Debug, Clone)]
pub struct ValidateArgs {
    /// Path to the text file to index
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Regex pattern for token extraction (default: whitespace splitting)
    #[arg(long, value_name = "REGEX")]
    pub token_pattern: Option<String>,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
