//! Command implementations for the deck processor CLI

use anyhow::Context;
use colored::Colorize;
use tracing::info;

use crate::app::services::aquifer::CarterTracyModel;
use crate::app::services::deck_parser::DeckParser;
use crate::cli::args::{Args, AquiferArgs, Commands, OutputFormat, ParseArgs};

/// Dispatch the selected subcommand
pub fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Commands::Parse(parse_args) => run_parse(&parse_args),
        Commands::Aquifer(aquifer_args) => run_aquifer(&aquifer_args),
    }
}

/// Parse a deck and report its keyword record sets
fn run_parse(args: &ParseArgs) -> anyhow::Result<()> {
    let deck = DeckParser::new()
        .parse(&args.deck)
        .with_context(|| format!("failed to parse deck '{}'", args.deck.display()))?;

    info!("Parsed {} keyword record sets", deck.count());

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&deck)?);
        }
        OutputFormat::Text => {
            println!("{}", format!("Deck: {}", args.deck.display()).bold());
            println!("{} keyword record sets", deck.count());
            println!();
            for set in deck.keyword_sets() {
                println!(
                    "  {:<10} {} record(s)",
                    set.name().cyan(),
                    set.len()
                );
            }
        }
    }

    Ok(())
}

/// Extract the Carter-Tracy aquifer model from a deck
fn run_aquifer(args: &AquiferArgs) -> anyhow::Result<()> {
    let deck = DeckParser::new()
        .parse(&args.deck)
        .with_context(|| format!("failed to parse deck '{}'", args.deck.display()))?;

    let model = CarterTracyModel::from_deck(&deck).with_context(|| {
        format!(
            "failed to extract aquifer parameters from '{}'",
            args.deck.display()
        )
    })?;

    info!(
        "Extracted {} aquifer(s) and {} connection(s)",
        model.aquifers.len(),
        model.connections.len()
    );

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&model)?);
        }
        OutputFormat::Text => {
            println!("{}", "Carter-Tracy aquifer model".bold());
            for aq in &model.aquifers {
                println!(
                    "  aquifer {}: datum depth {}, porosity {}, thickness {}, influence table {} ({} points)",
                    aq.aquifer_id.to_string().cyan(),
                    aq.datum_depth,
                    aq.porosity,
                    aq.thickness,
                    aq.influence_table_id,
                    aq.td.len()
                );
            }
            for conn in &model.connections {
                println!(
                    "  connection to aquifer {}: box ({}-{}, {}-{}, {}-{}), influx coeff {}",
                    conn.aquifer_id.to_string().cyan(),
                    conn.i1,
                    conn.i2,
                    conn.j1,
                    conn.j2,
                    conn.k1,
                    conn.k2,
                    conn.influx_coeff
                );
            }
        }
    }

    Ok(())
}
