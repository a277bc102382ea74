//! Ledger module: operation counters and elapsed time for one algorithm run.

use std::fmt;
use std::time::{Duration, Instant};

/// Mutable record of operation counts and wall time for a single run.
///
/// One engine invocation owns the ledger for the duration of the call; all
/// mutators take `&mut self`, so a second simultaneous writer cannot exist
/// without external synchronization. Counters are monotonically
/// non-decreasing between one [`reset_all`](Ledger::reset_all) and the next.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    comparisons: u64,
    accesses: u64,
    assignments: u64,
    additions: u64,
    started: Option<Instant>,
    elapsed: Duration,
}

impl Ledger {
    /// Create a ledger with all counters zeroed and no timing recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero every counter and both timestamps, regardless of prior values.
    pub fn reset_all(&mut self) {
        self.comparisons = 0;
        self.accesses = 0;
        self.assignments = 0;
        self.additions = 0;
        self.started = None;
        self.elapsed = Duration::ZERO;
    }

    /// Record the start instant for the next [`stop_timer`](Ledger::stop_timer).
    pub fn start_timer(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Store the elapsed time since the last start, clamped to zero.
    ///
    /// Without a matching [`start_timer`](Ledger::start_timer) this is a
    /// no-op and the elapsed time stays 0.
    pub fn stop_timer(&mut self) {
        if let Some(started) = self.started {
            self.elapsed = Instant::now().saturating_duration_since(started);
        }
    }

    /// Add `n` to the comparison counter.
    pub fn add_comparisons(&mut self, n: u64) {
        self.comparisons += n;
    }

    /// Add `n` to the element-access counter.
    pub fn add_accesses(&mut self, n: u64) {
        self.accesses += n;
    }

    /// Add `n` to the assignment counter.
    pub fn add_assignments(&mut self, n: u64) {
        self.assignments += n;
    }

    /// Add `n` to the addition counter.
    pub fn add_additions(&mut self, n: u64) {
        self.additions += n;
    }

    /// Comparisons recorded since the last reset.
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Element accesses recorded since the last reset.
    pub fn accesses(&self) -> u64 {
        self.accesses
    }

    /// Assignments recorded since the last reset.
    pub fn assignments(&self) -> u64 {
        self.assignments
    }

    /// Additions recorded since the last reset.
    pub fn additions(&self) -> u64 {
        self.additions
    }

    /// Elapsed wall time in whole milliseconds, truncated; 0 before any
    /// start/stop pair.
    pub fn time_ms(&self) -> u64 {
        self.elapsed.as_millis() as u64
    }
}

impl fmt::Display for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "comparisons={}, accesses={}, assignments={}, additions={}, time_ms={}",
            self.comparisons, self.accesses, self.assignments, self.additions,
            self.time_ms()
        )
    }
}
