use clap::Parser;
use deck_processor::cli::{args::Args, commands};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();

    init_logging(args.verbose);

    if let Err(error) = commands::run(args) {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

/// Set up the tracing subscriber; RUST_LOG takes precedence over --verbose
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
