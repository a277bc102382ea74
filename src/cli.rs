//! CLI module: argument surface and the benchmark runner.

use crate::generate::{self, Distribution, GenerateError, DEFAULT_SEED};
use crate::kadane;
use crate::ledger::Ledger;
use crate::report::CsvReport;
use clap::{CommandFactory, Parser};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Name recorded in the algorithm column of every CSV row.
pub const ALGORITHM: &str = "Kadane";

/// Failure classes for a benchmark run, each with its own exit code.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Malformed or missing flag values found after parsing.
    #[error("argument error: {0}")]
    Argument(String),
    /// Unknown distribution tag; an argument error with its own source.
    #[error("argument error: {0}")]
    Distribution(#[from] GenerateError),
    /// Failure preparing or writing the output file.
    #[error("I/O error while writing output: {0}")]
    Io(#[from] std::io::Error),
    /// Anything that is neither an argument nor an I/O problem.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl BenchError {
    /// Process exit code for this error class (0 is success/help).
    pub fn exit_code(&self) -> u8 {
        match self {
            BenchError::Argument(_) | BenchError::Distribution(_) => 1,
            BenchError::Io(_) => 2,
            BenchError::Unexpected(_) => 3,
        }
    }
}

/// Maximum-subarray benchmark runner.
#[derive(Debug, Parser)]
#[command(
    name = "kadane-bench",
    version,
    about = "Runs the instrumented maximum-subarray scan across input sizes \
             and distributions and appends one CSV row per trial."
)]
pub struct Cli {
    /// Array sizes to test (comma-separated positive integers).
    #[arg(long, value_delimiter = ',', required = true, value_name = "N1,N2,...")]
    pub sizes: Vec<u64>,

    /// Input distributions: random, sorted, reverse_sorted, all_positive,
    /// all_negative, nearly_sorted (comma-separated).
    #[arg(
        long = "input-type",
        value_delimiter = ',',
        required = true,
        value_name = "TYPE,..."
    )]
    pub input_type: Vec<String>,

    /// Number of trials per size.
    #[arg(long, default_value_t = 3, value_name = "N")]
    pub trials: u64,

    /// Output CSV file.
    #[arg(long, default_value = "benchmark_results.csv", value_name = "FILE")]
    pub output: PathBuf,
}

/// Validated run configuration.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub sizes: Vec<usize>,
    pub input_types: Vec<Distribution>,
    pub trials: u64,
    pub output: PathBuf,
}

impl BenchConfig {
    /// Validate parsed flags into a runnable configuration.
    pub fn from_cli(cli: Cli) -> Result<Self, BenchError> {
        if cli.sizes.is_empty() {
            return Err(BenchError::Argument(
                "sizes must be specified (use --sizes)".to_string(),
            ));
        }
        let mut sizes = Vec::with_capacity(cli.sizes.len());
        for size in cli.sizes {
            if size == 0 {
                return Err(BenchError::Argument(
                    "sizes must be positive integers".to_string(),
                ));
            }
            sizes.push(size as usize);
        }

        if cli.input_type.is_empty() {
            return Err(BenchError::Argument(
                "input type must be specified (use --input-type)".to_string(),
            ));
        }
        let input_types = cli
            .input_type
            .iter()
            .map(|tag| tag.parse::<Distribution>())
            .collect::<Result<Vec<_>, _>>()?;

        if cli.trials == 0 {
            return Err(BenchError::Argument("trials must be positive".to_string()));
        }

        Ok(Self {
            sizes,
            input_types,
            trials: cli.trials,
            output: cli.output,
        })
    }
}

/// Run the full benchmark matrix described by the CLI flags.
pub fn run(cli: Cli) -> Result<(), BenchError> {
    let config = BenchConfig::from_cli(cli)?;

    if let Some(parent) = config.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    println!("Running benchmarks with configuration:");
    println!("  Sizes: {:?}", config.sizes);
    println!(
        "  Input types: [{}]",
        config
            .input_types
            .iter()
            .map(|d| d.tag())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("  Trials: {}", config.trials);
    println!("  Output: {}", config.output.display());

    let report = CsvReport::new(&config.output);
    report.write_header()?;

    let mut ledger = Ledger::new();
    for &distribution in &config.input_types {
        println!("Input type: {distribution}");
        for &size in &config.sizes {
            println!("  Testing size: {size}");
            for trial in 1..=config.trials {
                let seed = trial_seed(DEFAULT_SEED, size, trial);
                let array = generate::generate_array(size, distribution, seed);
                let result = kadane::run(&array, Some(&mut ledger));
                report.append_row(ALGORITHM, distribution, size, trial, &ledger)?;
                println!("    Trial {trial}: max_sum={}, {ledger}", result.max_sum);
            }
        }
    }

    println!(
        "Benchmark completed. Results saved to: {}",
        config.output.display()
    );
    Ok(())
}

/// The one-line usage text for this binary.
pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}

/// Render the stderr report for a failed run. Argument errors (exit code 1)
/// carry the usage text; other error classes report the message alone.
pub fn report_failure(err: &BenchError) -> String {
    if err.exit_code() == 1 {
        format!("Error: {err}\n{}", usage())
    } else {
        format!("Error: {err}")
    }
}

// Distinct deterministic seed per (size, trial) pair.
fn trial_seed(base: u64, size: usize, trial: u64) -> u64 {
    base.wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ ((size as u64) << 32) ^ trial
}
