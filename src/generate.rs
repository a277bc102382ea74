//! Generate module: synthetic input arrays for benchmarking.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Base seed for reproducible benchmark runs.
pub const DEFAULT_SEED: u64 = 42;

const RANDOM_LO: i64 = -1000;
const RANDOM_HI: i64 = 1000;

/// Errors from the array generator boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The requested distribution tag is not in the closed set.
    #[error("unknown input type: {0}")]
    UnknownDistribution(String),
}

/// The closed set of input-value distributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distribution {
    /// Uniform values in `-1000..=1000`.
    Random,
    /// `1..=n` ascending.
    Sorted,
    /// `n..=1` descending.
    ReverseSorted,
    /// Strictly positive ascending values.
    AllPositive,
    /// Strictly negative values, `-1, -2, ..., -n`.
    AllNegative,
    /// Sorted base with a handful of seeded random swaps.
    NearlySorted,
}

impl Distribution {
    /// Every distribution, in tag order.
    pub const ALL: [Distribution; 6] = [
        Distribution::Random,
        Distribution::Sorted,
        Distribution::ReverseSorted,
        Distribution::AllPositive,
        Distribution::AllNegative,
        Distribution::NearlySorted,
    ];

    /// The snake_case tag used on the CLI and in CSV rows.
    pub fn tag(self) -> &'static str {
        match self {
            Distribution::Random => "random",
            Distribution::Sorted => "sorted",
            Distribution::ReverseSorted => "reverse_sorted",
            Distribution::AllPositive => "all_positive",
            Distribution::AllNegative => "all_negative",
            Distribution::NearlySorted => "nearly_sorted",
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Distribution {
    type Err = GenerateError;

    /// Parse a tag, case-insensitively and ignoring surrounding whitespace.
    /// Unknown tags are rejected, never defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Distribution::Random),
            "sorted" => Ok(Distribution::Sorted),
            "reverse_sorted" => Ok(Distribution::ReverseSorted),
            "all_positive" => Ok(Distribution::AllPositive),
            "all_negative" => Ok(Distribution::AllNegative),
            "nearly_sorted" => Ok(Distribution::NearlySorted),
            other => Err(GenerateError::UnknownDistribution(other.to_string())),
        }
    }
}

/// Generate a synthetic array of `size` values for the given distribution.
///
/// Deterministic for a fixed `(distribution, size, seed)` triple; only the
/// random and nearly_sorted distributions consume the seed.
pub fn generate_array(size: usize, distribution: Distribution, seed: u64) -> Vec<i64> {
    match distribution {
        Distribution::Random => {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..size)
                .map(|_| rng.random_range(RANDOM_LO..=RANDOM_HI))
                .collect()
        }
        Distribution::Sorted | Distribution::AllPositive => (1..=size as i64).collect(),
        Distribution::ReverseSorted => (1..=size as i64).rev().collect(),
        Distribution::AllNegative => (1..=size as i64).map(|v| -v).collect(),
        Distribution::NearlySorted => {
            let mut array: Vec<i64> = (1..=size as i64).collect();
            if size >= 2 {
                let mut rng = StdRng::seed_from_u64(seed);
                let swaps = (size / 20).max(1);
                for _ in 0..swaps {
                    let a = rng.random_range(0..size);
                    let b = rng.random_range(0..size);
                    array.swap(a, b);
                }
            }
            array
        }
    }
}
