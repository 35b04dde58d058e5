// crates/topsis-cli/src/main.rs
//
// CLI entrypoint for the TOPSIS ranking tool.
//
// Reads a CSV decision table, ranks the alternatives with the TOPSIS
// pipeline, and writes the table back with appended score and rank
// columns. All errors terminate the run with a diagnostic and a non-zero
// exit status; the output file is only written after the full pipeline
// succeeds.

mod output;
mod table;

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use topsis_core::{parse_impacts, parse_weights, rank_alternatives};

/// Rank alternatives in a CSV decision table with TOPSIS.
#[derive(Parser, Debug)]
#[command(
    name = "topsis",
    version = "0.1.0",
    about = "TOPSIS multi-criteria decision ranking over a CSV decision table"
)]
struct Cli {
    /// Input CSV: header row, identifier column, then numeric criterion columns.
    input: PathBuf,

    /// Comma-separated criterion weights, e.g. "1,1,2".
    weights: String,

    /// Comma-separated impact directions: "maximize"/"minimize" (or "+"/"-").
    impacts: String,

    /// Output CSV path; the input columns plus "Topsis Score" and "Rank".
    output: PathBuf,

    /// Print the ranked table to stdout.
    #[arg(long)]
    show: bool,

    /// Print the ranking as JSON to stdout.
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let weights = parse_weights(&cli.weights)?;
    let impacts = parse_impacts(&cli.impacts)?;

    let table = table::read_table(&cli.input)?;
    let ranking = rank_alternatives(&table.matrix, &weights, &impacts)?;
    table::write_table(&cli.output, &table, &ranking)?;

    let rows = output::ranked_rows(&table.identifiers, &ranking);
    if cli.json {
        println!("{}", output::format_json(&rows));
    } else if cli.show {
        println!("{}", output::format_table(&rows));
    }
    println!("Result saved successfully in {}", cli.output.display());

    Ok(())
}
