//! Command line argument parsing for the Bhasha CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::language::Selector;

/// Bhasha - multilingual text normalization
#[derive(Parser, Debug, Clone)]
#[command(name = "bhasha")]
#[command(about = "Normalize English, Telugu, Hindi, Tamil and Urdu text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct BhashaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Resource configuration file (JSON)
    #[arg(short, long, value_name = "FILE", env = "BHASHA_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl BhashaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n.saturating_add(1),
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Normalize a single text
    Normalize(NormalizeArgs),

    /// Normalize a file, one text per line, in parallel
    Batch(BatchArgs),

    /// List supported languages
    Languages,
}

/// Arguments for normalizing one text
#[derive(Parser, Debug, Clone)]
pub struct NormalizeArgs {
    /// Language index (1-5) or name
    #[arg(short, long, value_name = "SELECTOR")]
    pub language: Selector,

    /// Text to normalize (read from stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,
}

/// Arguments for batch normalization
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// Language index (1-5) or name
    #[arg(short, long, value_name = "SELECTOR")]
    pub language: Selector,

    /// Input file, one text per line
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Skip blank lines
    #[arg(long)]
    pub skip_empty: bool,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
