use kadane_bench::kadane::{self, KadaneResult};
use kadane_bench::Ledger;
use proptest::prelude::*;

/// O(n^2) reference scan over every contiguous subrange. Strict `>` keeps
/// the first-found winner (earliest start, then earliest end), matching the
/// engine's tie-break.
fn brute_force(input: &[i64]) -> KadaneResult {
    if input.is_empty() {
        return KadaneResult::EMPTY;
    }
    let mut best_sum = i64::MIN;
    let mut best_start = 0usize;
    let mut best_end = 0usize;
    for i in 0..input.len() {
        let mut sum = 0i64;
        for j in i..input.len() {
            sum += input[j];
            if sum > best_sum {
                best_sum = sum;
                best_start = i;
                best_end = j;
            }
        }
    }
    KadaneResult {
        max_sum: best_sum,
        start_index: best_start as i64,
        end_index: best_end as i64,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn engine_matches_brute_force(
        input in prop::collection::vec(-1000i64..=1000, 1..=200),
    ) {
        prop_assert_eq!(kadane::run(&input, None), brute_force(&input));
    }

    #[test]
    fn engine_matches_brute_force_on_narrow_values(
        // Heavy on ties: values in {-1, 0, 1} stress the tie-break rules.
        input in prop::collection::vec(-1i64..=1, 1..=64),
    ) {
        prop_assert_eq!(kadane::run(&input, None), brute_force(&input));
    }

    #[test]
    fn instrumentation_never_changes_the_result(
        input in prop::collection::vec(-500i64..=500, 0..=128),
    ) {
        let mut ledger = Ledger::new();
        let instrumented = kadane::run(&input, Some(&mut ledger));
        prop_assert_eq!(instrumented, kadane::run(&input, None));
    }

    #[test]
    fn counters_respect_their_floors(
        input in prop::collection::vec(-1000i64..=1000, 1..=200),
    ) {
        let mut ledger = Ledger::new();
        let result = kadane::run(&input, Some(&mut ledger));
        prop_assert!(ledger.accesses() >= input.len() as u64);
        if input.len() > 1 {
            prop_assert!(ledger.comparisons() > 0);
        }
        // Index invariant for non-empty input.
        prop_assert!(result.start_index >= 0);
        prop_assert!(result.start_index <= result.end_index);
        prop_assert!(result.end_index < input.len() as i64);
    }
}

#[test]
fn brute_force_agrees_on_the_classic_case() {
    let input = [-2, 1, -3, 4, -1, 2, 1, -5, 4];
    let expected = KadaneResult {
        max_sum: 6,
        start_index: 3,
        end_index: 6,
    };
    assert_eq!(brute_force(&input), expected);
    assert_eq!(kadane::run(&input, None), expected);
}

#[test]
fn empty_input_agrees_with_oracle() {
    assert_eq!(kadane::run(&[], None), brute_force(&[]));
}
