//! Declarative positional item mapping for keyword records
//!
//! Each extracted field is described by an [`ItemSpec`] naming its deck
//! item, its position, and an optional default. Conversion and the
//! missing-item policy are applied uniformly here instead of being spread
//! over ad hoc per-field indexing.

use crate::app::models::DeckRecord;
use crate::{Error, Result};

/// One positional item of a keyword record
pub(crate) struct ItemSpec<T: Copy> {
    /// Deck item name used in error context
    pub name: &'static str,
    /// Zero-based token position within the record
    pub index: usize,
    /// Value substituted when the record is too short; `None` makes the
    /// item required
    pub default: Option<T>,
}

/// A record together with the context needed for precise item errors
pub(crate) struct RecordItems<'a> {
    keyword: &'static str,
    record_index: usize,
    record: &'a DeckRecord,
}

impl<'a> RecordItems<'a> {
    pub fn new(keyword: &'static str, record_index: usize, record: &'a DeckRecord) -> Self {
        Self {
            keyword,
            record_index,
            record,
        }
    }

    /// Read an integer item
    pub fn int(&self, spec: &ItemSpec<i64>) -> Result<i64> {
        match self.record.token(spec.index) {
            Some(token) => token.parse().map_err(|_| {
                Error::invalid_item(
                    self.keyword,
                    self.record_index,
                    spec.name,
                    token,
                    "not an integer",
                )
            }),
            None => self.defaulted(spec),
        }
    }

    /// Read a floating point item
    pub fn double(&self, spec: &ItemSpec<f64>) -> Result<f64> {
        match self.record.token(spec.index) {
            Some(token) => token.parse().map_err(|_| {
                Error::invalid_item(
                    self.keyword,
                    self.record_index,
                    spec.name,
                    token,
                    "not a floating point number",
                )
            }),
            None => self.defaulted(spec),
        }
    }

    fn defaulted<T: Copy>(&self, spec: &ItemSpec<T>) -> Result<T> {
        spec.default
            .ok_or_else(|| Error::missing_item(self.keyword, self.record_index, spec.name))
    }
}
