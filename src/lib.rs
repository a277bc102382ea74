//! kadane-bench: instrumented maximum-subarray kernel.
//!
//! The engine in [`kadane`] computes the maximum-sum contiguous subarray of
//! a signed integer sequence in one pass. A caller may hand it a mutable
//! [`Ledger`] to record operation counts (comparisons, element accesses,
//! assignments, additions) and elapsed wall time for empirical complexity
//! analysis; without one the scan is pure computation. The [`cli`] runner
//! drives the engine across configurable sizes and input distributions and
//! writes one CSV row per trial.

pub mod cli;
pub mod generate;
pub mod kadane;
pub mod ledger;
pub mod report;

pub use generate::{Distribution, GenerateError, DEFAULT_SEED};
pub use kadane::KadaneResult;
pub use ledger::Ledger;
