//! Influence function tables for the Carter-Tracy model
//!
//! Provides the frozen built-in dimensionless influence curve, the provider
//! and source seams used to resolve a table id, and the deck-backed AQUTAB
//! table registry.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::app::models::{Deck, DeckRecord};
use crate::constants::{FIRST_AQUTAB_TABLE_ID, KEYWORD_AQUTAB};
use crate::{Error, Result};

/// A dimensionless influence function: parallel time and pressure-response
/// sequences of equal length
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfluenceTable {
    /// Dimensionless time values
    pub td: Vec<f64>,
    /// Dimensionless pressure-response values
    pub pi: Vec<f64>,
}

/// Dimensionless time sequence of the built-in influence curve
///
/// Frozen constant; table id 1 (and any lower id) always resolves to this
/// curve instead of a table lookup.
pub const DEFAULT_INFLUENCE_TD: [f64; 47] = [
    0.01, 0.05, 0.1, 0.15, 0.2, 0.25, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.5, 2.0, 2.5, 3.0,
    4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 15.0, 20.0, 25.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0,
    90.0, 100.0, 150.0, 200.0, 250.0, 300.0, 400.0, 500.0, 600.0, 700.0, 800.0, 900.0, 1000.0,
];

/// Dimensionless pressure-response sequence of the built-in influence curve
pub const DEFAULT_INFLUENCE_PI: [f64; 47] = [
    0.112, 0.229, 0.315, 0.376, 0.424, 0.469, 0.503, 0.564, 0.616, 0.659, 0.702, 0.735, 0.772,
    0.802, 0.927, 1.02, 1.101, 1.169, 1.275, 1.362, 1.436, 1.5, 1.556, 1.604, 1.651, 1.829, 1.96,
    2.067, 2.147, 2.282, 2.388, 2.476, 2.55, 2.615, 2.672, 2.723, 2.921, 3.064, 3.173, 3.263,
    3.406, 3.516, 3.608, 3.684, 3.75, 3.809, 3.86,
];

/// Provider of the default influence curve used when a record references
/// table id 1 or lower
///
/// A trait seam so tests can substitute a curve and verify the fallback
/// rule in isolation from table lookups.
pub trait DefaultInfluenceProvider {
    fn default_table(&self) -> InfluenceTable;
}

/// Built-in provider returning the frozen default curve
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinInfluence;

impl DefaultInfluenceProvider for BuiltinInfluence {
    fn default_table(&self) -> InfluenceTable {
        InfluenceTable {
            td: DEFAULT_INFLUENCE_TD.to_vec(),
            pi: DEFAULT_INFLUENCE_PI.to_vec(),
        }
    }
}

/// External registry of influence tables keyed by integer id
pub trait InfluenceTableSource {
    fn influence_table(&self, table_id: i64) -> Option<&InfluenceTable>;
}

/// Influence tables read from a deck's AQUTAB keyword
///
/// Each AQUTAB record defines one table as alternating `td pi` pairs.
/// Tables are numbered from 2 in file order; id 1 is reserved for the
/// built-in curve and never stored here.
#[derive(Debug, Clone, Default)]
pub struct AqutabTables {
    tables: HashMap<i64, InfluenceTable>,
}

impl AqutabTables {
    /// Read all AQUTAB tables from a parsed deck
    ///
    /// AQUTAB is optional; an absent keyword yields an empty registry.
    pub fn from_deck(deck: &Deck) -> Result<Self> {
        let mut tables = HashMap::new();
        let mut next_id = FIRST_AQUTAB_TABLE_ID;

        for set in deck.lookup(KEYWORD_AQUTAB) {
            for (record_index, record) in set.records().iter().enumerate() {
                if record.is_empty() {
                    continue;
                }
                let table = parse_table_record(record, record_index)?;
                debug!(
                    "Loaded AQUTAB influence table {} with {} points",
                    next_id,
                    table.td.len()
                );
                tables.insert(next_id, table);
                next_id += 1;
            }
        }

        Ok(Self { tables })
    }

    /// Number of user-supplied tables in the registry
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether the deck supplied no tables
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl InfluenceTableSource for AqutabTables {
    fn influence_table(&self, table_id: i64) -> Option<&InfluenceTable> {
        self.tables.get(&table_id)
    }
}

/// Resolve an influence table id to a concrete curve
///
/// Ids at or below 1 substitute the provider's default curve without
/// querying the source. Higher ids must be present in the source; absence
/// is a hard [`Error::TableLookup`] failure rather than a silent default.
pub fn resolve_influence_table(
    table_id: i64,
    source: &dyn InfluenceTableSource,
    provider: &dyn DefaultInfluenceProvider,
) -> Result<InfluenceTable> {
    if table_id <= 1 {
        return Ok(provider.default_table());
    }
    source
        .influence_table(table_id)
        .cloned()
        .ok_or_else(|| Error::table_lookup(table_id))
}

/// Parse one AQUTAB record of alternating td/pi values
fn parse_table_record(record: &DeckRecord, record_index: usize) -> Result<InfluenceTable> {
    if record.len() % 2 != 0 {
        return Err(Error::invalid_item(
            KEYWORD_AQUTAB,
            record_index,
            "TABLE_VALUES",
            record.len().to_string(),
            "expected an even number of alternating td/pi values",
        ));
    }

    let mut values = Vec::with_capacity(record.len());
    for token in record.tokens() {
        let value: f64 = token.parse().map_err(|_| {
            Error::invalid_item(
                KEYWORD_AQUTAB,
                record_index,
                "TABLE_VALUES",
                token,
                "not a floating point number",
            )
        })?;
        values.push(value);
    }

    let (td, pi) = values
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .unzip();

    Ok(InfluenceTable { td, pi })
}
