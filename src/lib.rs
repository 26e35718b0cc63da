//! Deck Processor Library
//!
//! A Rust library for parsing Eclipse-style simulation deck files into an
//! ordered, queryable collection of keyword record sets.
//!
//! This library provides tools for:
//! - Classifying deck lines (keyword headers, data lines, comments)
//! - Tokenizing data lines with quoting and inline-comment handling
//! - Assembling records under their owning keyword in a single forward pass
//! - Querying the parsed deck by keyword name
//! - Extracting Carter-Tracy analytical aquifer parameters (AQUCT, AQUANCON)
//!   with built-in fallback influence tables (AQUTAB)

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aquifer;
        pub mod deck_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Deck, DeckRecord, KeywordRecordSet};
pub use app::services::deck_parser::DeckParser;

use std::path::PathBuf;

/// Result type alias for the deck processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for deck parsing and aquifer extraction
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Deck file missing or unreadable; raised before any line is parsed
    #[error("cannot access deck file '{}': {message}", .path.display())]
    FileAccess {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// A line matches neither the keyword nor the data-line shape, or a
    /// quoted token is unterminated
    #[error("grammar error at {}:{line_number}: {reason}: '{line}'", .path.display())]
    Grammar {
        path: PathBuf,
        line_number: usize,
        line: String,
        reason: String,
    },

    /// A data line appeared before any keyword header opened a block
    #[error("data line before any keyword at {}:{line_number}: '{line}'", .path.display())]
    OrphanData {
        path: PathBuf,
        line_number: usize,
        line: String,
    },

    /// A required keyword is absent from the parsed deck
    #[error("required keyword '{keyword}' is missing from the deck")]
    MissingKeyword { keyword: String },

    /// A record lacks a required positional item
    #[error("keyword '{keyword}' record {record}: missing item '{item}'")]
    MissingItem {
        keyword: String,
        record: usize,
        item: &'static str,
    },

    /// A record item failed type conversion or validation
    #[error("keyword '{keyword}' record {record}: invalid value '{value}' for item '{item}': {reason}")]
    InvalidItem {
        keyword: String,
        record: usize,
        item: &'static str,
        value: String,
        reason: String,
    },

    /// A referenced influence table id is not defined and not covered by
    /// the built-in fallback rule
    #[error("influence table {table_id} is not defined by any AQUTAB entry")]
    TableLookup { table_id: i64 },
}

impl Error {
    /// Create a file access error with an I/O source
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Create a file access error from a precondition check
    pub fn file_precondition(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::FileAccess {
            path: path.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a grammar error at a specific deck line
    pub fn grammar(
        path: impl Into<PathBuf>,
        line_number: usize,
        line: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Grammar {
            path: path.into(),
            line_number,
            line: line.into(),
            reason: reason.into(),
        }
    }

    /// Create an orphan data error at a specific deck line
    pub fn orphan_data(
        path: impl Into<PathBuf>,
        line_number: usize,
        line: impl Into<String>,
    ) -> Self {
        Self::OrphanData {
            path: path.into(),
            line_number,
            line: line.into(),
        }
    }

    /// Create a missing keyword error
    pub fn missing_keyword(keyword: impl Into<String>) -> Self {
        Self::MissingKeyword {
            keyword: keyword.into(),
        }
    }

    /// Create a missing item error
    pub fn missing_item(keyword: impl Into<String>, record: usize, item: &'static str) -> Self {
        Self::MissingItem {
            keyword: keyword.into(),
            record,
            item,
        }
    }

    /// Create an invalid item error
    pub fn invalid_item(
        keyword: impl Into<String>,
        record: usize,
        item: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidItem {
            keyword: keyword.into(),
            record,
            item,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a table lookup error
    pub fn table_lookup(table_id: i64) -> Self {
        Self::TableLookup { table_id }
    }
}
