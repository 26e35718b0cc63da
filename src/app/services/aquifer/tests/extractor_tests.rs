//! Tests for AQUCT/AQUANCON field extraction

use crate::Error;
use crate::app::models::Deck;
use crate::app::services::aquifer::{
    AqutabTables, CarterTracyModel, DefaultInfluenceProvider, InfluenceTable,
};
use crate::app::services::deck_parser::DeckParser;
use crate::constants::{CARTER_TRACY_C1_METRIC, CARTER_TRACY_C2_METRIC};
use std::io::Write;

fn parse_deck(content: &str) -> Deck {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    DeckParser::new().parse(file.path()).unwrap()
}

const BASIC_DECK: &str = "AQUCT\n \
     1 2000.0 0.3 1.0e-5 500.0 100.0 45.0 1 1 /\n\
     AQUANCON\n \
     1 1 1 1 1 1 1 0.5 /\n";

#[test]
fn test_extract_basic_model() {
    let deck = parse_deck(BASIC_DECK);
    let model = CarterTracyModel::from_deck(&deck).unwrap();

    assert_eq!(model.aquifers.len(), 1);
    let aq = &model.aquifers[0];
    assert_eq!(aq.aquifer_id, 1);
    assert_eq!(aq.datum_depth, 2000.0);
    assert_eq!(aq.porosity, 0.3);
    assert_eq!(aq.total_compressibility, 1.0e-5);
    assert_eq!(aq.inner_radius, 500.0);
    assert_eq!(aq.permeability, 100.0);
    assert_eq!(aq.thickness, 45.0);
    assert_eq!(aq.water_press_table, 1);
    assert_eq!(aq.influence_table_id, 1);
    // Ninth-token record leaves the angle defaulted
    assert_eq!(aq.influence_angle, 360.0);
    assert_eq!(aq.time_constant, CARTER_TRACY_C1_METRIC);
    assert_eq!(aq.influx_constant, CARTER_TRACY_C2_METRIC);

    assert_eq!(model.connections.len(), 1);
    let conn = &model.connections[0];
    assert_eq!(conn.aquifer_id, 1);
    assert_eq!((conn.i1, conn.i2, conn.j1, conn.j2), (1, 1, 1, 1));
    assert_eq!((conn.k1, conn.k2), (1, 1));
    assert_eq!(conn.influx_coeff, 0.5);
    // Defaulted influx multiplier
    assert_eq!(conn.influx_mult, 1.0);
}

#[test]
fn test_table_id_one_substitutes_builtin_curve() {
    let deck = parse_deck(BASIC_DECK);
    let model = CarterTracyModel::from_deck(&deck).unwrap();

    let aq = &model.aquifers[0];
    assert_eq!(aq.td.len(), 47);
    assert_eq!(aq.pi.len(), 47);
    assert_eq!(aq.td[0], 0.01);
    assert_eq!(aq.pi[46], 3.86);
}

#[test]
fn test_table_id_two_triggers_aqutab_lookup() {
    let deck = parse_deck(
        "AQUTAB\n \
         0.1 0.2 0.5 0.6 /\n\
         AQUCT\n \
         1 2000.0 0.3 1.0e-5 500.0 100.0 45.0 1 2 90.0 /\n\
         AQUANCON\n \
         1 1 1 1 1 1 1 0.5 2.0 /\n",
    );
    let model = CarterTracyModel::from_deck(&deck).unwrap();

    let aq = &model.aquifers[0];
    assert_eq!(aq.influence_table_id, 2);
    assert_eq!(aq.td, vec![0.1, 0.5]);
    assert_eq!(aq.pi, vec![0.2, 0.6]);
    assert_eq!(aq.influence_angle, 90.0);
    assert_eq!(model.connections[0].influx_mult, 2.0);
}

#[test]
fn test_undefined_table_id_is_hard_failure() {
    let deck = parse_deck(
        "AQUCT\n \
         1 2000.0 0.3 1.0e-5 500.0 100.0 45.0 1 5 /\n\
         AQUANCON\n \
         1 1 1 1 1 1 1 0.5 /\n",
    );
    let err = CarterTracyModel::from_deck(&deck).unwrap_err();
    assert!(matches!(err, Error::TableLookup { table_id: 5 }));
}

#[test]
fn test_missing_aquct_is_hard_failure() {
    let deck = parse_deck("AQUANCON\n 1 1 1 1 1 1 1 0.5 /\n");
    let err = CarterTracyModel::from_deck(&deck).unwrap_err();
    assert!(matches!(err, Error::MissingKeyword { keyword } if keyword == "AQUCT"));
}

#[test]
fn test_missing_aquancon_is_hard_failure() {
    let deck = parse_deck("AQUCT\n 1 2000.0 0.3 1.0e-5 500.0 100.0 45.0 1 1 /\n");
    let err = CarterTracyModel::from_deck(&deck).unwrap_err();
    assert!(matches!(err, Error::MissingKeyword { keyword } if keyword == "AQUANCON"));
}

#[test]
fn test_short_record_reports_missing_item() {
    let deck = parse_deck(
        "AQUCT\n \
         1 2000.0 0.3 /\n\
         AQUANCON\n \
         1 1 1 1 1 1 1 0.5 /\n",
    );
    let err = CarterTracyModel::from_deck(&deck).unwrap_err();
    assert!(matches!(
        err,
        Error::MissingItem {
            item: "TABLE_NUM_INFLUENCE_FN",
            ..
        }
    ));
}

#[test]
fn test_non_numeric_item_reports_invalid_item() {
    let deck = parse_deck(
        "AQUCT\n \
         1 deep 0.3 1.0e-5 500.0 100.0 45.0 1 1 /\n\
         AQUANCON\n \
         1 1 1 1 1 1 1 0.5 /\n",
    );
    let err = CarterTracyModel::from_deck(&deck).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidItem {
            item: "DAT_DEPTH",
            ..
        }
    ));
}

#[test]
fn test_multiple_aquct_records_across_duplicate_keywords() {
    let deck = parse_deck(
        "AQUCT\n \
         1 2000.0 0.3 1.0e-5 500.0 100.0 45.0 1 1 /\n\
         AQUCT\n \
         2 2100.0 0.25 2.0e-5 600.0 80.0 30.0 1 1 180.0 /\n\
         AQUANCON\n \
         1 1 1 1 1 1 1 0.5 /\n \
         2 2 2 1 1 1 1 0.4 /\n",
    );
    let model = CarterTracyModel::from_deck(&deck).unwrap();

    assert_eq!(model.aquifers.len(), 2);
    assert_eq!(model.aquifers[1].aquifer_id, 2);
    assert_eq!(model.aquifers[1].influence_angle, 180.0);
    assert_eq!(model.connections.len(), 2);
}

#[test]
fn test_provider_substitution_for_default_curve() {
    struct FlatCurve;
    impl DefaultInfluenceProvider for FlatCurve {
        fn default_table(&self) -> InfluenceTable {
            InfluenceTable {
                td: vec![1.0],
                pi: vec![1.0],
            }
        }
    }

    let deck = parse_deck(BASIC_DECK);
    let tables = AqutabTables::from_deck(&deck).unwrap();
    let model = CarterTracyModel::from_deck_with(&deck, &tables, &FlatCurve).unwrap();

    assert_eq!(model.aquifers[0].td, vec![1.0]);
    assert_eq!(model.aquifers[0].pi, vec![1.0]);
}

#[test]
fn test_terminator_only_records_are_ignored() {
    // A lone "/" line is an empty record, not an extraction candidate
    let deck = parse_deck(
        "AQUCT\n \
         1 2000.0 0.3 1.0e-5 500.0 100.0 45.0 1 1 /\n \
         /\n\
         AQUANCON\n \
         1 1 1 1 1 1 1 0.5 /\n \
         /\n",
    );
    let model = CarterTracyModel::from_deck(&deck).unwrap();
    assert_eq!(model.aquifers.len(), 1);
    assert_eq!(model.connections.len(), 1);
}
