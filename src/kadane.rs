//! Kadane module: single-pass maximum-subarray engine.

// IMPORTANT: the uninstrumented path must stay free of any counter bookkeeping.

use crate::ledger::Ledger;

/// Result of one engine invocation: best sum and inclusive index range.
///
/// Indices are `-1`/`-1` when the input was empty (no subarray exists);
/// otherwise `0 <= start_index <= end_index < input.len()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KadaneResult {
    /// Maximum contiguous subarray sum.
    pub max_sum: i64,
    /// Inclusive start index of the winning subarray.
    pub start_index: i64,
    /// Inclusive end index of the winning subarray.
    pub end_index: i64,
}

impl KadaneResult {
    /// Sentinel for an empty input sequence.
    pub const EMPTY: KadaneResult = KadaneResult {
        max_sum: 0,
        start_index: -1,
        end_index: -1,
    };
}

/// Scan `input` once and return the maximum-sum contiguous subarray.
///
/// With `Some(ledger)` the ledger is reset and timed around the scan and
/// receives one batched counter flush at the end; with `None` the scan runs
/// with zero instrumentation overhead. Both paths return identical results
/// for identical input. Ties on the best sum keep the first-found subarray
/// (smallest end index, then smallest start index); both decision points use
/// strict `>` so that extending an existing run beats restarting.
pub fn run(input: &[i64], ledger: Option<&mut Ledger>) -> KadaneResult {
    match ledger {
        Some(ledger) => run_instrumented(input, ledger),
        None => run_plain(input),
    }
}

fn run_plain(input: &[i64]) -> KadaneResult {
    if input.is_empty() {
        return KadaneResult::EMPTY;
    }
    let mut best_ending = input[0];
    let mut best_overall = input[0];
    let mut candidate_start = 0usize;
    let mut best_start = 0usize;
    let mut best_end = 0usize;
    for (i, &current) in input.iter().enumerate().skip(1) {
        let sum = current + best_ending;
        if current > sum {
            best_ending = current;
            candidate_start = i;
        } else {
            best_ending = sum;
        }
        if best_ending > best_overall {
            best_overall = best_ending;
            best_start = candidate_start;
            best_end = i;
        }
    }
    KadaneResult {
        max_sum: best_overall,
        start_index: best_start as i64,
        end_index: best_end as i64,
    }
}

// Counters accumulate in locals and flush to the ledger once after the loop.
fn run_instrumented(input: &[i64], ledger: &mut Ledger) -> KadaneResult {
    ledger.reset_all();
    ledger.start_timer();
    if input.is_empty() {
        // Lifecycle still runs on the fast path; no counter increments.
        ledger.stop_timer();
        return KadaneResult::EMPTY;
    }

    let mut comparisons = 0u64;
    let mut accesses = 0u64;
    let mut assignments = 0u64;
    let mut additions = 0u64;

    // Two initial element reads: index 0 into both running maxima.
    accesses += 1;
    let mut best_ending = input[0];
    accesses += 1;
    let mut best_overall = input[0];
    let mut candidate_start = 0usize;
    let mut best_start = 0usize;
    let mut best_end = 0usize;

    for (i, &current) in input.iter().enumerate().skip(1) {
        accesses += 1;

        additions += 1;
        let sum = current + best_ending;

        // Extend-vs-restart: one comparison, and one assignment charged
        // whichever arm is taken.
        comparisons += 1;
        assignments += 1;
        if current > sum {
            best_ending = current;
            candidate_start = i;
        } else {
            best_ending = sum;
        }

        // Global-best update: the three stores count as one logical group.
        comparisons += 1;
        if best_ending > best_overall {
            assignments += 3;
            best_overall = best_ending;
            best_start = candidate_start;
            best_end = i;
        }
    }

    ledger.add_comparisons(comparisons);
    ledger.add_accesses(accesses);
    ledger.add_assignments(assignments);
    ledger.add_additions(additions);
    ledger.stop_timer();

    KadaneResult {
        max_sum: best_overall,
        start_index: best_start as i64,
        end_index: best_end as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(input: &[i64], max_sum: i64, start: i64, end: i64) {
        let expected = KadaneResult {
            max_sum,
            start_index: start,
            end_index: end,
        };
        assert_eq!(run(input, None), expected);
    }

    #[test]
    fn empty_input_returns_sentinel() {
        check(&[], 0, -1, -1);
    }

    #[test]
    fn single_positive_element() {
        check(&[5], 5, 0, 0);
    }

    #[test]
    fn single_negative_element() {
        check(&[-5], -5, 0, 0);
    }

    #[test]
    fn classic_reference_case() {
        check(&[-2, 1, -3, 4, -1, 2, 1, -5, 4], 6, 3, 6);
    }

    #[test]
    fn all_negative_picks_single_maximum() {
        check(&[-8, -3, -6, -2, -5, -4], -2, 3, 3);
    }

    #[test]
    fn all_positive_sums_whole_sequence() {
        check(&[1, 2, 3, 4, 5], 15, 0, 4);
    }

    #[test]
    fn tie_keeps_first_found_subarray() {
        // [5] at 0 and [5] at 2 tie; the earlier one wins.
        check(&[5, -5, 5], 5, 0, 0);
    }

    #[test]
    fn instrumented_matches_plain_on_classic_case() {
        let input = [-2, 1, -3, 4, -1, 2, 1, -5, 4];
        let mut ledger = Ledger::new();
        assert_eq!(run(&input, Some(&mut ledger)), run(&input, None));
    }

    #[test]
    fn accounting_matches_contract_on_classic_case() {
        // len 9: 2 initial reads + 8 loop reads, 8 additions, 16 comparisons,
        // 8 unconditional assignments + 3 per global-best update (4 updates).
        let input = [-2, 1, -3, 4, -1, 2, 1, -5, 4];
        let mut ledger = Ledger::new();
        run(&input, Some(&mut ledger));
        assert_eq!(ledger.accesses(), 10);
        assert_eq!(ledger.additions(), 8);
        assert_eq!(ledger.comparisons(), 16);
        assert_eq!(ledger.assignments(), 20);
    }

    #[test]
    fn single_element_charges_only_initial_reads() {
        let mut ledger = Ledger::new();
        run(&[7], Some(&mut ledger));
        assert_eq!(ledger.accesses(), 2);
        assert_eq!(ledger.comparisons(), 0);
        assert_eq!(ledger.assignments(), 0);
        assert_eq!(ledger.additions(), 0);
    }

    #[test]
    fn empty_input_leaves_counters_untouched() {
        let mut ledger = Ledger::new();
        ledger.add_accesses(99); // stale state from a previous run
        run(&[], Some(&mut ledger));
        assert_eq!(ledger.accesses(), 0);
        assert_eq!(ledger.comparisons(), 0);
        assert_eq!(ledger.assignments(), 0);
        assert_eq!(ledger.additions(), 0);
    }

    #[test]
    fn run_resets_stale_ledger_state() {
        let mut ledger = Ledger::new();
        run(&[1, 2, 3], Some(&mut ledger));
        let first = ledger.accesses();
        run(&[1, 2, 3], Some(&mut ledger));
        assert_eq!(ledger.accesses(), first);
    }
}
