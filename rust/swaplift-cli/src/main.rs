//! Swaplift CLI — runs the swap-variant benchmark matrix.
//!
//! With no arguments this runs the full matrix: ten repetitions over
//! sizes 10^6 through 10^9, ranked report on stderr.

use std::io;

use clap::Parser as ClapParser;
use strum::IntoEnumIterator;
use swaplift_core::{run_matrix, MatrixConfig, Swapper};

#[derive(ClapParser)]
#[command(
    name = "swaplift",
    version,
    about = "Ranks adjacent-pair swap techniques by wall-clock time"
)]
struct Cli {
    /// Number of full passes over the size ladder
    #[arg(long, default_value_t = 10)]
    reps: u32,

    /// Smallest size exponent (size = 10^DIGITS)
    #[arg(long, default_value_t = 6)]
    min_digits: u32,

    /// Largest size exponent, inclusive
    #[arg(long, default_value_t = 9)]
    max_digits: u32,

    /// Print the registered variants in enumeration order and exit
    #[arg(long)]
    list: bool,

    /// Dump every collected timing as JSON on stdout after the run
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.list {
        for swapper in Swapper::iter() {
            println!("{swapper}");
        }
        return;
    }

    let cfg = MatrixConfig {
        reps: cli.reps,
        min_digits: cli.min_digits,
        max_digits: cli.max_digits,
    };

    let stderr = io::stderr();
    match run_matrix(&cfg, &mut stderr.lock()) {
        Ok(timings) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&timings).unwrap());
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
