//! Data-line tokenization
//!
//! Splits a data line into ordered raw tokens, honoring quoted spans,
//! inline comments, and the record terminator.

use crate::constants::{QUOTE_CHAR, RECORD_TERMINATOR};
use std::fmt;

/// Tokenization failure inside a single data line
///
/// Carries no position context; the assembler wraps it into a grammar
/// error with the offending line number and text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizeError {
    /// A quoted span was opened but never closed before end of line
    UnterminatedQuote,
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedQuote => write!(f, "unterminated quoted token"),
        }
    }
}

/// Tokenize one data line into ordered raw token strings
///
/// Rules:
/// - The line is truncated at the first unquoted `--` comment marker.
/// - Runs of whitespace separate tokens.
/// - A span quoted with `'` is one token verbatim, internal whitespace
///   preserved, delimiters stripped.
/// - An unquoted `/` ends the record; the slash and the remainder of the
///   line are dropped. Whether a record must be slash-terminated is the
///   consumer's concern, not the tokenizer's.
/// - The result may be empty (entirely-comment or terminator-only line).
pub fn tokenize_data_line(line: &str) -> Result<Vec<String>, TokenizeError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quote = false;

    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quote {
            if c == QUOTE_CHAR {
                in_quote = false;
                tokens.push(std::mem::take(&mut current));
            } else {
                current.push(c);
            }
            continue;
        }

        if c == QUOTE_CHAR {
            flush(&mut tokens, &mut current);
            in_quote = true;
        } else if c == '-' && chars.peek() == Some(&'-') {
            // Inline comment: drop the rest of the line
            flush(&mut tokens, &mut current);
            return Ok(tokens);
        } else if c == RECORD_TERMINATOR {
            // Record terminator: tokens end here
            flush(&mut tokens, &mut current);
            return Ok(tokens);
        } else if c.is_whitespace() {
            flush(&mut tokens, &mut current);
        } else {
            current.push(c);
        }
    }

    if in_quote {
        return Err(TokenizeError::UnterminatedQuote);
    }

    flush(&mut tokens, &mut current);
    Ok(tokens)
}

fn flush(tokens: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        tokens.push(std::mem::take(current));
    }
}
