use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use crate::cli::Args;

mod analyzer;
mod cli;
mod csv_reader;
mod dataset;

fn main() {
    let args = Args::parse();
    init_logging(&args);

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(args: &Args) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

fn run(args: &Args) -> Result<()> {
    let table = csv_reader::read_data(&args.data)
        .with_context(|| format!("Failed to load {}", args.data.display()))?;
    let report = analyzer::compute(&table, args.print_data())?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize results")?;
        println!("{}", json);
    }
    info!("Done");
    Ok(())
}
