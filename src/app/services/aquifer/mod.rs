//! Carter-Tracy analytical aquifer extraction
//!
//! Maps the AQUCT and AQUANCON keywords of a parsed deck into typed
//! aquifer parameters and grid connections, resolving each aquifer's
//! influence function table (built-in curve for table ids at or below 1,
//! AQUTAB lookup otherwise).

use serde::Serialize;
use tracing::debug;

use crate::app::models::Deck;
use crate::constants::{
    CARTER_TRACY_C1_METRIC, CARTER_TRACY_C2_METRIC, DEFAULT_INFLUENCE_ANGLE, DEFAULT_INFLUX_MULT,
    KEYWORD_AQUANCON, KEYWORD_AQUCT,
};
use crate::Result;

pub mod influence;
mod mapping;

#[cfg(test)]
mod tests;

pub use influence::{
    AqutabTables, BuiltinInfluence, DefaultInfluenceProvider, InfluenceTable, InfluenceTableSource,
    resolve_influence_table,
};

use mapping::{ItemSpec, RecordItems};

/// AQUCT positional item layout
mod aquct_items {
    use super::ItemSpec;

    pub const AQUIFER_ID: ItemSpec<i64> = ItemSpec {
        name: "AQUIFER_ID",
        index: 0,
        default: None,
    };
    pub const DAT_DEPTH: ItemSpec<f64> = ItemSpec {
        name: "DAT_DEPTH",
        index: 1,
        default: None,
    };
    pub const PORO_AQ: ItemSpec<f64> = ItemSpec {
        name: "PORO_AQ",
        index: 2,
        default: None,
    };
    pub const C_T: ItemSpec<f64> = ItemSpec {
        name: "C_T",
        index: 3,
        default: None,
    };
    pub const RAD: ItemSpec<f64> = ItemSpec {
        name: "RAD",
        index: 4,
        default: None,
    };
    pub const PERM_AQ: ItemSpec<f64> = ItemSpec {
        name: "PERM_AQ",
        index: 5,
        default: None,
    };
    pub const THICKNESS_AQ: ItemSpec<f64> = ItemSpec {
        name: "THICKNESS_AQ",
        index: 6,
        default: None,
    };
    pub const TABLE_NUM_WATER_PRESS: ItemSpec<i64> = ItemSpec {
        name: "TABLE_NUM_WATER_PRESS",
        index: 7,
        default: None,
    };
    pub const TABLE_NUM_INFLUENCE_FN: ItemSpec<i64> = ItemSpec {
        name: "TABLE_NUM_INFLUENCE_FN",
        index: 8,
        default: None,
    };
    pub const INFLUENCE_ANGLE: ItemSpec<f64> = ItemSpec {
        name: "INFLUENCE_ANGLE",
        index: 9,
        default: Some(super::DEFAULT_INFLUENCE_ANGLE),
    };
}

/// AQUANCON positional item layout
mod aquancon_items {
    use super::ItemSpec;

    pub const AQUIFER_ID: ItemSpec<i64> = ItemSpec {
        name: "AQUIFER_ID",
        index: 0,
        default: None,
    };
    pub const I1: ItemSpec<i64> = ItemSpec {
        name: "I1",
        index: 1,
        default: None,
    };
    pub const I2: ItemSpec<i64> = ItemSpec {
        name: "I2",
        index: 2,
        default: None,
    };
    pub const J1: ItemSpec<i64> = ItemSpec {
        name: "J1",
        index: 3,
        default: None,
    };
    pub const J2: ItemSpec<i64> = ItemSpec {
        name: "J2",
        index: 4,
        default: None,
    };
    pub const K1: ItemSpec<i64> = ItemSpec {
        name: "K1",
        index: 5,
        default: None,
    };
    pub const K2: ItemSpec<i64> = ItemSpec {
        name: "K2",
        index: 6,
        default: None,
    };
    pub const INFLUX_COEFF: ItemSpec<f64> = ItemSpec {
        name: "INFLUX_COEFF",
        index: 7,
        default: None,
    };
    pub const INFLUX_MULT: ItemSpec<f64> = ItemSpec {
        name: "INFLUX_MULT",
        index: 8,
        default: Some(super::DEFAULT_INFLUX_MULT),
    };
}

/// Typed Carter-Tracy aquifer parameters from one AQUCT record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarterTracyAquifer {
    /// Aquifer identifier
    pub aquifer_id: i64,
    /// Aquifer datum depth
    pub datum_depth: f64,
    /// Aquifer porosity
    pub porosity: f64,
    /// Total (rock + water) compressibility
    pub total_compressibility: f64,
    /// Inner (reservoir boundary) radius
    pub inner_radius: f64,
    /// Aquifer permeability
    pub permeability: f64,
    /// Aquifer thickness
    pub thickness: f64,
    /// Angle subtended by the aquifer boundary, degrees
    pub influence_angle: f64,
    /// Water pressure (PVT) table id
    pub water_press_table: i64,
    /// Influence function table id as written in the deck
    pub influence_table_id: i64,
    /// Time conversion constant for the active unit system
    pub time_constant: f64,
    /// Influx conversion constant for the active unit system
    pub influx_constant: f64,
    /// Resolved dimensionless time sequence
    pub td: Vec<f64>,
    /// Resolved dimensionless pressure-response sequence
    pub pi: Vec<f64>,
}

/// Aquifer-to-grid connection from one AQUANCON record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AquiferConnection {
    /// Aquifer identifier this box connects to
    pub aquifer_id: i64,
    /// Grid cell box bounds
    pub i1: i64,
    pub i2: i64,
    pub j1: i64,
    pub j2: i64,
    pub k1: i64,
    pub k2: i64,
    /// Aquifer influx coefficient
    pub influx_coeff: f64,
    /// Influx coefficient multiplier
    pub influx_mult: f64,
}

/// The complete Carter-Tracy model read from a deck
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarterTracyModel {
    pub aquifers: Vec<CarterTracyAquifer>,
    pub connections: Vec<AquiferConnection>,
}

impl CarterTracyModel {
    /// Extract the model from a parsed deck
    ///
    /// Influence tables come from the deck's own AQUTAB keyword; the
    /// built-in curve covers table ids at or below 1. AQUCT and AQUANCON
    /// are required; their absence is a hard failure.
    pub fn from_deck(deck: &Deck) -> Result<Self> {
        let tables = AqutabTables::from_deck(deck)?;
        Self::from_deck_with(deck, &tables, &BuiltinInfluence)
    }

    /// Extract the model with caller-supplied table source and default
    /// curve provider
    pub fn from_deck_with(
        deck: &Deck,
        source: &dyn InfluenceTableSource,
        provider: &dyn DefaultInfluenceProvider,
    ) -> Result<Self> {
        let aquifers = extract_aquifers(deck, source, provider)?;
        let connections = extract_connections(deck)?;
        Ok(Self {
            aquifers,
            connections,
        })
    }
}

/// Read every AQUCT record into typed aquifer parameters
fn extract_aquifers(
    deck: &Deck,
    source: &dyn InfluenceTableSource,
    provider: &dyn DefaultInfluenceProvider,
) -> Result<Vec<CarterTracyAquifer>> {
    let sets = deck.require_keyword(KEYWORD_AQUCT)?;

    let mut aquifers = Vec::new();
    let mut record_index = 0;
    for set in sets {
        for record in set.records() {
            if record.is_empty() {
                continue;
            }
            let items = RecordItems::new(KEYWORD_AQUCT, record_index, record);

            let influence_table_id = items.int(&aquct_items::TABLE_NUM_INFLUENCE_FN)?;
            let table = resolve_influence_table(influence_table_id, source, provider)?;

            let aquifer = CarterTracyAquifer {
                aquifer_id: items.int(&aquct_items::AQUIFER_ID)?,
                datum_depth: items.double(&aquct_items::DAT_DEPTH)?,
                porosity: items.double(&aquct_items::PORO_AQ)?,
                total_compressibility: items.double(&aquct_items::C_T)?,
                inner_radius: items.double(&aquct_items::RAD)?,
                permeability: items.double(&aquct_items::PERM_AQ)?,
                thickness: items.double(&aquct_items::THICKNESS_AQ)?,
                influence_angle: items.double(&aquct_items::INFLUENCE_ANGLE)?,
                water_press_table: items.int(&aquct_items::TABLE_NUM_WATER_PRESS)?,
                influence_table_id,
                time_constant: CARTER_TRACY_C1_METRIC,
                influx_constant: CARTER_TRACY_C2_METRIC,
                td: table.td,
                pi: table.pi,
            };
            debug!(
                "Extracted aquifer {} (influence table {})",
                aquifer.aquifer_id, influence_table_id
            );
            aquifers.push(aquifer);
            record_index += 1;
        }
    }

    Ok(aquifers)
}

/// Read every AQUANCON record into typed grid connections
fn extract_connections(deck: &Deck) -> Result<Vec<AquiferConnection>> {
    let sets = deck.require_keyword(KEYWORD_AQUANCON)?;

    let mut connections = Vec::new();
    let mut record_index = 0;
    for set in sets {
        for record in set.records() {
            if record.is_empty() {
                continue;
            }
            let items = RecordItems::new(KEYWORD_AQUANCON, record_index, record);

            connections.push(AquiferConnection {
                aquifer_id: items.int(&aquancon_items::AQUIFER_ID)?,
                i1: items.int(&aquancon_items::I1)?,
                i2: items.int(&aquancon_items::I2)?,
                j1: items.int(&aquancon_items::J1)?,
                j2: items.int(&aquancon_items::J2)?,
                k1: items.int(&aquancon_items::K1)?,
                k2: items.int(&aquancon_items::K2)?,
                influx_coeff: items.double(&aquancon_items::INFLUX_COEFF)?,
                influx_mult: items.double(&aquancon_items::INFLUX_MULT)?,
            });
            record_index += 1;
        }
    }

    Ok(connections)
}
