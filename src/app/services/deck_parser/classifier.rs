//! Line classification for deck files
//!
//! Decides whether a raw deck line is a keyword header, a data line, a
//! comment/blank line to skip, or malformed noise the grammar rejects.

use crate::constants::{COMMENT_MARKER, MAX_KEYWORD_LENGTH, QUOTE_CHAR, RECORD_TERMINATOR};
use regex::Regex;
use std::sync::LazyLock;

/// Keyword token grammar: uppercase start, uppercase/digit/underscore body,
/// bounded length, anchored at column 0 by the caller
static KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^[A-Z][A-Z0-9_]{{0,{}}}$",
        MAX_KEYWORD_LENGTH - 1
    ))
    .expect("keyword regex is valid")
});

/// Classification of one raw deck line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Blank line or full-line comment; carries no information
    Skip,
    /// Keyword header opening a new block
    Keyword(String),
    /// Data line belonging to the open keyword block
    Data,
    /// Non-blank, non-comment line that matches neither shape
    Malformed,
}

/// Classify a raw deck line
///
/// Leading/trailing whitespace is trimmed for classification only; keyword
/// headers must start at column 0 of the untrimmed line.
pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER) {
        return LineKind::Skip;
    }

    if let Some(name) = keyword_name(line) {
        return LineKind::Keyword(name);
    }

    if looks_like_data(trimmed) {
        return LineKind::Data;
    }

    LineKind::Malformed
}

/// Extract the keyword name if the line is a keyword header
///
/// The header token must start at column 0 and may be followed only by
/// whitespace or an inline comment.
fn keyword_name(line: &str) -> Option<String> {
    if line.starts_with(char::is_whitespace) {
        return None;
    }

    let body = line
        .find(COMMENT_MARKER)
        .map_or(line, |pos| &line[..pos])
        .trim_end();

    // A header line carries exactly one token
    if body.contains(char::is_whitespace) {
        return None;
    }

    if KEYWORD_RE.is_match(body) {
        Some(body.to_string())
    } else {
        None
    }
}

/// Whether a trimmed, non-blank, non-comment line has the generic data shape
///
/// A data line must contain at least one parseable character: alphanumeric
/// content, a quoted span, or a record terminator. Pure punctuation noise
/// fails both shapes and is malformed.
fn looks_like_data(trimmed: &str) -> bool {
    trimmed
        .chars()
        .any(|c| c.is_ascii_alphanumeric() || c == QUOTE_CHAR || c == RECORD_TERMINATOR)
}
