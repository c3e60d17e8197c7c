//! Wealth Projection CLI
//!
//! Reads savings scenarios from CSV and writes one projection summary per
//! scenario to stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- scenarios.csv > summary.csv
//! cargo run -- scenarios.csv series.csv > summary.csv
//! ```
//!
//! The optional second path receives every scenario's year-end balances.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use std::env;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::process;
use wealth_projection::{ProjectionEngine, ProjectionError, Result};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(ProjectionError::MissingArgument);
    }

    let input_path = &args[1];
    let file = File::open(input_path)?;
    let reader = BufReader::new(file);

    let mut engine = ProjectionEngine::default();
    engine.process_csv(reader)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    engine.write_summary(handle)?;

    if let Some(series_path) = args.get(2) {
        let series = File::create(series_path)?;
        engine.write_series(BufWriter::new(series))?;
    }

    Ok(())
}
