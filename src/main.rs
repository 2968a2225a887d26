//! Meshwise - DC circuit solver based on mesh (loop) analysis
//!
//! Prompts for the circuit description on stdin, solves `R * I = V` for
//! the mesh currents and prints the per-component report.
//!
//! # Usage
//!
//! ```bash
//! meshwise            # interactive session, 4 decimal places
//! meshwise -p 6       # more precision in the tables
//! ```

use clap::Parser;
use meshwise::{console, DEFAULT_PRECISION};

/// DC circuit solver using mesh analysis (Kirchhoff's Voltage Law)
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Decimal places in the rendered tables
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = console::run(args.precision) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
