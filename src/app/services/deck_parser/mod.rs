//! Deck parsing service
//!
//! This module provides the record-set assembler: a single forward pass
//! over a deck file that classifies each line, tokenizes data lines, and
//! groups records under their owning keyword.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{Span, debug, info};

use crate::app::models::{Deck, DeckRecord, KeywordRecordSet};
use crate::{Error, Result};

pub mod classifier;
pub mod tokenizer;

#[cfg(test)]
mod tests;

pub use classifier::{LineKind, classify_line};
pub use tokenizer::tokenize_data_line;

/// Deck parser assembling keyword record sets in one forward pass
///
/// The parser exclusively owns the in-progress record set during assembly;
/// ownership transfers to the output deck when the next keyword header or
/// end of input finalizes the block. Independent parser instances share no
/// mutable state and may run concurrently on different files.
#[derive(Debug)]
pub struct DeckParser {
    /// Span all parse events are recorded under, owned by the caller's
    /// subscriber lifecycle so parses are independently observable
    span: Span,
}

impl DeckParser {
    /// Create a parser with its own parse span
    pub fn new() -> Self {
        Self::with_span(tracing::info_span!("deck_parse"))
    }

    /// Create a parser recording under a caller-supplied span
    pub fn with_span(span: Span) -> Self {
        Self { span }
    }

    /// Parse a deck file into an ordered sequence of keyword record sets
    ///
    /// Fails with [`Error::FileAccess`] before any line is read if the
    /// path is not an existing readable file. Grammar violations and
    /// orphan data lines abort the parse with 1-based line context; no
    /// partial deck is returned. The file handle is scoped to this call
    /// and released on every exit path.
    pub fn parse(&self, path: &Path) -> Result<Deck> {
        let _guard = self.span.enter();

        self.check_input_file(path)?;
        let file = File::open(path).map_err(|e| Error::file_access(path, e))?;
        let reader = BufReader::new(file);

        info!("Parsing deck file: {}", path.display());
        let deck = self.assemble(path, reader)?;
        info!(
            "Parsed {} keyword record sets from {}",
            deck.count(),
            path.display()
        );

        Ok(deck)
    }

    /// Verify the parse precondition: path exists and is a regular file
    fn check_input_file(&self, path: &Path) -> Result<()> {
        let metadata =
            std::fs::metadata(path).map_err(|e| Error::file_access(path, e))?;
        if !metadata.is_file() {
            return Err(Error::file_precondition(path, "not a regular file"));
        }
        Ok(())
    }

    /// Drive the state machine over the input lines
    ///
    /// States: no open keyword (between blocks) and an open keyword
    /// accumulating records. Reaching end of input in either state is a
    /// valid completion.
    fn assemble(&self, path: &Path, reader: impl BufRead) -> Result<Deck> {
        let mut keyword_sets: Vec<KeywordRecordSet> = Vec::new();
        let mut current: Option<KeywordRecordSet> = None;

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line.map_err(|e| Error::file_access(path, e))?;

            match classify_line(&line) {
                LineKind::Skip => {}
                LineKind::Keyword(name) => {
                    if let Some(finished) = current.take() {
                        debug!(
                            "Finalized keyword '{}' with {} records",
                            finished.name(),
                            finished.len()
                        );
                        keyword_sets.push(finished);
                    }
                    current = Some(KeywordRecordSet::new(name));
                }
                LineKind::Data => {
                    let Some(set) = current.as_mut() else {
                        return Err(Error::orphan_data(path, line_number, line.trim()));
                    };
                    let tokens = tokenize_data_line(&line).map_err(|e| {
                        Error::grammar(path, line_number, line.trim(), e.to_string())
                    })?;
                    set.push_record(DeckRecord::new(tokens));
                }
                LineKind::Malformed => {
                    return Err(Error::grammar(
                        path,
                        line_number,
                        line.trim(),
                        "line matches neither keyword nor data shape",
                    ));
                }
            }
        }

        if let Some(finished) = current.take() {
            debug!(
                "Finalized keyword '{}' with {} records at end of input",
                finished.name(),
                finished.len()
            );
            keyword_sets.push(finished);
        }

        Ok(Deck::new(keyword_sets))
    }
}

impl Default for DeckParser {
    fn default() -> Self {
        Self::new()
    }
}
