//! Times heapsort, quicksort and mergesort on random, sorted and
//! reverse-sorted inputs and prints a table to stdout.
//!
//! ```bash
//! cargo run --release --bin compare_sorts
//! cargo run --release --bin compare_sorts -- --seed 7 --sizes 100,1000
//! ```
//!
//! Set `RUST_LOG=debug` to log every measurement as it completes.

use std::io::{self, Write};

use clap::Parser;
use rust_binary_heaps::compare::{
    compare_sorts, render, CompareConfig, DEFAULT_MAX_VALUE, DEFAULT_SIZES,
};

#[derive(Debug, Parser)]
#[command(about = "Compare heapsort against quicksort and mergesort")]
struct Args {
    /// Seed for input generation and pivot choice (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Comma-separated array sizes
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES)]
    sizes: Vec<usize>,

    /// Inclusive upper bound for random values
    #[arg(long, default_value_t = DEFAULT_MAX_VALUE)]
    max_value: u32,
}

impl From<Args> for CompareConfig {
    fn from(args: Args) -> Self {
        CompareConfig {
            sizes: args.sizes,
            max_value: args.max_value,
            seed: args.seed,
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = CompareConfig::from(Args::parse());
    log::debug!("running comparison with {config:?}");

    let results = compare_sorts(&config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&results, &mut out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_gives_default_config() {
        let args = Args::try_parse_from(["compare_sorts"]).unwrap();
        assert_eq!(CompareConfig::from(args), CompareConfig::default());
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "compare_sorts",
            "--seed",
            "7",
            "--sizes",
            "10,20",
            "--max-value",
            "99",
        ])
        .unwrap();
        let config = CompareConfig::from(args);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.sizes, vec![10, 20]);
        assert_eq!(config.max_value, 99);
    }
}
