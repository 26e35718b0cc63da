//! Data models for parsed simulation decks
//!
//! This module contains the core data structures produced by the deck
//! parser: raw token records, keyword record sets, and the queryable `Deck`
//! collection handed to downstream field extractors.

use serde::Serialize;

// =============================================================================
// Record
// =============================================================================

/// One row of raw tokens belonging to a keyword block
///
/// Tokens are kept verbatim as parsed from the deck; numeric and semantic
/// interpretation is the responsibility of downstream field extractors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckRecord {
    tokens: Vec<String>,
}

impl DeckRecord {
    /// Create a record from an ordered token sequence
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// Positional token access
    pub fn token(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Number of tokens in the record
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the record carries no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over the tokens in order
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

// =============================================================================
// Keyword Record Set
// =============================================================================

/// A keyword name plus its ordered data records
///
/// A set is assembled by the parser while its keyword block is open and
/// becomes immutable once the next keyword header or end of input is
/// reached. A keyword followed by no data lines is legal and yields an
/// empty record list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordRecordSet {
    name: String,
    records: Vec<DeckRecord>,
}

impl KeywordRecordSet {
    /// Open a new, empty record set for a keyword
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
        }
    }

    /// The keyword name owning this block
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a record; only the assembler calls this while the block is open
    pub(crate) fn push_record(&mut self, record: DeckRecord) {
        self.records.push(record);
    }

    /// The records in file order
    pub fn records(&self) -> &[DeckRecord] {
        &self.records
    }

    /// Record access by index
    pub fn record(&self, index: usize) -> Option<&DeckRecord> {
        self.records.get(index)
    }

    /// Number of records under this keyword
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the keyword has no data records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// =============================================================================
// Deck
// =============================================================================

/// The finalized, ordered sequence of keyword record sets for one deck
///
/// Duplicate keyword names are preserved in file order; each occurrence is
/// a distinct [`KeywordRecordSet`]. The deck is read-only once returned by
/// the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deck {
    keyword_sets: Vec<KeywordRecordSet>,
}

impl Deck {
    /// Create a deck from finalized record sets
    pub fn new(keyword_sets: Vec<KeywordRecordSet>) -> Self {
        Self { keyword_sets }
    }

    /// Number of finalized keyword record sets
    pub fn count(&self) -> usize {
        self.keyword_sets.len()
    }

    /// Keyword names in file order, duplicates preserved
    ///
    /// The iterator is lazy and restartable: each call produces a fresh
    /// pass over the deck.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.keyword_sets.iter().map(KeywordRecordSet::name)
    }

    /// All record sets whose name matches exactly (case-sensitive)
    ///
    /// An empty result is not an error; callers that require the keyword
    /// decide whether absence is fatal via [`Deck::require_keyword`].
    pub fn lookup(&self, name: &str) -> Vec<&KeywordRecordSet> {
        self.keyword_sets
            .iter()
            .filter(|set| set.name() == name)
            .collect()
    }

    /// Whether at least one record set carries the given keyword name
    pub fn has_keyword(&self, name: &str) -> bool {
        self.keyword_sets.iter().any(|set| set.name() == name)
    }

    /// Look up a keyword that must be present
    ///
    /// Absence is a hard [`Error::MissingKeyword`](crate::Error) failure
    /// surfaced to the caller, never a logged warning.
    pub fn require_keyword(&self, name: &str) -> crate::Result<Vec<&KeywordRecordSet>> {
        let sets = self.lookup(name);
        if sets.is_empty() {
            return Err(crate::Error::missing_keyword(name));
        }
        Ok(sets)
    }

    /// All record sets in file order
    pub fn keyword_sets(&self) -> &[KeywordRecordSet] {
        &self.keyword_sets
    }
}
