//! Report module: CSV output for benchmark rows.

use crate::generate::Distribution;
use crate::ledger::Ledger;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Fixed header row, written exactly once per output file.
pub const HEADER: &str =
    "algorithm,input_type,n,trial,time_ms,comparisons,array_accesses,assignments,additions";

/// Writer that appends one CSV row per trial to a flat file.
#[derive(Debug, Clone)]
pub struct CsvReport {
    path: PathBuf,
}

impl CsvReport {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create or truncate the file and write the header line.
    pub fn write_header(&self) -> io::Result<()> {
        let mut file = File::create(&self.path)?;
        writeln!(file, "{HEADER}")
    }

    /// Append one row built from the ledger; the header is never rewritten.
    pub fn append_row(
        &self,
        algorithm: &str,
        distribution: Distribution,
        n: usize,
        trial: u64,
        ledger: &Ledger,
    ) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        writeln!(
            file,
            "{},{},{},{},{},{},{},{},{}",
            algorithm,
            distribution,
            n,
            trial,
            ledger.time_ms(),
            ledger.comparisons(),
            ledger.accesses(),
            ledger.assignments(),
            ledger.additions()
        )
    }
}
