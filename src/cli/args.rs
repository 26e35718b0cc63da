//! Command-line argument definitions for the deck processor
//!
//! Defines the CLI interface using the clap derive API.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the deck processor
///
/// Parses Eclipse-style simulation deck files and extracts Carter-Tracy
/// analytical aquifer parameters.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "deck_processor",
    version,
    about = "Parse Eclipse-style simulation decks and extract aquifer parameters",
    arg_required_else_help = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug-level logging (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a deck and report its keyword record sets
    Parse(ParseArgs),
    /// Extract Carter-Tracy aquifer parameters from a deck
    Aquifer(AquiferArgs),
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// Path to the deck file
    #[arg(value_name = "DECK")]
    pub deck: PathBuf,

    /// Output format for the keyword summary
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the aquifer command
#[derive(Debug, Clone, Parser)]
pub struct AquiferArgs {
    /// Path to the deck file
    #[arg(value_name = "DECK")]
    pub deck: PathBuf,

    /// Output format for the extracted model
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Terminal or machine-readable output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output
    Text,
    /// JSON for downstream tooling
    Json,
}
