//! Wall-clock comparison of heapsort, quicksort and mergesort
//!
//! For each input [`Distribution`] and each configured size, one input array is
//! generated and every [`Algorithm`] sorts its own copy of it. Each run is timed
//! and its output is checked against the standard library sort of the same
//! input.
//!
//! # Example
//!
//! ```rust
//! use rust_binary_heaps::compare::{compare_sorts, render, CompareConfig};
//!
//! let config = CompareConfig {
//!     sizes: vec![100],
//!     seed: Some(42),
//!     ..CompareConfig::default()
//! };
//! let results = compare_sorts(&config);
//! assert_eq!(results.len(), 9);
//! assert!(results.iter().all(|m| m.verified));
//!
//! let mut out = Vec::new();
//! render(&results, &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("Input Distribution: Random"));
//! ```

use std::fmt;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::heapsort::heapsort;
use crate::sorting::{mergesort, quicksort};

/// Default array sizes, smallest first
pub const DEFAULT_SIZES: [usize; 3] = [1000, 5000, 10000];

/// Default inclusive upper bound for [`Distribution::Random`]
pub const DEFAULT_MAX_VALUE: u32 = 10000;

/// Shape of a generated input array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distribution {
    /// Uniform values in `0..=max_value`
    Random,
    /// `0, 1, ..., n - 1`
    Sorted,
    /// `n, n - 1, ..., 1`
    Reverse,
}

impl Distribution {
    /// All distributions, in report order
    pub const ALL: [Distribution; 3] = [
        Distribution::Random,
        Distribution::Sorted,
        Distribution::Reverse,
    ];

    /// Generates an array of `n` values
    ///
    /// Values are `u64` so that every index of a `usize`-sized array has a
    /// distinct value in the sorted and reverse shapes.
    pub fn generate<R: Rng>(self, n: usize, max_value: u32, rng: &mut R) -> Vec<u64> {
        match self {
            Distribution::Random => (0..n)
                .map(|_| rng.gen_range(0..=u64::from(max_value)))
                .collect(),
            Distribution::Sorted => (0u64..).take(n).collect(),
            Distribution::Reverse => {
                let mut values: Vec<u64> = (1u64..).take(n).collect();
                values.reverse();
                values
            }
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Distribution::Random => "Random",
            Distribution::Sorted => "Sorted",
            Distribution::Reverse => "Reverse",
        };
        f.write_str(name)
    }
}

/// A sorting algorithm under comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Heapsort,
    Quicksort,
    MergeSort,
}

impl Algorithm {
    /// All algorithms, in report order
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Heapsort,
        Algorithm::Quicksort,
        Algorithm::MergeSort,
    ];

    /// Sorts a copy of `data`, leaving the input untouched
    ///
    /// `rng` is only consulted by quicksort for pivot selection.
    pub fn run<T, R>(self, data: &[T], rng: &mut R) -> Vec<T>
    where
        T: Ord + Clone,
        R: Rng + ?Sized,
    {
        match self {
            Algorithm::Heapsort => {
                let mut copy = data.to_vec();
                heapsort(&mut copy);
                copy
            }
            Algorithm::Quicksort => quicksort(data, rng),
            Algorithm::MergeSort => mergesort(data),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Heapsort => "Heapsort",
            Algorithm::Quicksort => "Quicksort",
            Algorithm::MergeSort => "Merge Sort",
        };
        // Pad through the formatter so `{:<10}` works.
        f.pad(name)
    }
}

/// Parameters of a comparison run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareConfig {
    /// Array sizes to generate for every distribution
    pub sizes: Vec<usize>,
    /// Inclusive upper bound for random values
    pub max_value: u32,
    /// Seed for input generation and pivot choice; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            max_value: DEFAULT_MAX_VALUE,
            seed: None,
        }
    }
}

/// Timing of one algorithm on one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    pub algorithm: Algorithm,
    pub distribution: Distribution,
    pub size: usize,
    pub elapsed: Duration,
    /// Output equals the standard library sort of the same input
    pub verified: bool,
}

/// Runs every (distribution, size, algorithm) combination
///
/// Results are ordered by distribution, then size, then algorithm, matching
/// [`Distribution::ALL`], `config.sizes` and [`Algorithm::ALL`].
pub fn compare_sorts(config: &CompareConfig) -> Vec<Measurement> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let runs = Distribution::ALL.len() * config.sizes.len() * Algorithm::ALL.len();
    let mut results = Vec::with_capacity(runs);
    for distribution in Distribution::ALL {
        for &size in &config.sizes {
            let data = distribution.generate(size, config.max_value, &mut rng);
            let mut expected = data.clone();
            expected.sort_unstable();

            for algorithm in Algorithm::ALL {
                let start = Instant::now();
                let sorted = algorithm.run(&data, &mut rng);
                let elapsed = start.elapsed();

                let verified = sorted == expected;
                if !verified {
                    warn!(
                        "{algorithm} produced unsorted output for {distribution} input of size {size}"
                    );
                }
                debug!("{algorithm} on {distribution} n={size}: {elapsed:?}");

                results.push(Measurement {
                    algorithm,
                    distribution,
                    size,
                    elapsed,
                    verified,
                });
            }
        }
    }
    results
}

/// Writes measurements as a human-readable table, one block per distribution
pub fn render<W: Write>(measurements: &[Measurement], out: &mut W) -> io::Result<()> {
    writeln!(out, "\n--- Sorting Algorithm Comparison ---")?;

    let mut current: Option<Distribution> = None;
    for m in measurements {
        if current != Some(m.distribution) {
            if current.is_some() {
                writeln!(out, "{}", "-".repeat(50))?;
            }
            writeln!(out, "\nInput Distribution: {}", m.distribution)?;
            current = Some(m.distribution);
        }
        writeln!(
            out,
            "{:<10} | n={:<6} | Time: {:.5}s",
            m.algorithm,
            m.size,
            m.elapsed.as_secs_f64()
        )?;
    }
    if current.is_some() {
        writeln!(out, "{}", "-".repeat(50))?;
    }
    Ok(())
}
