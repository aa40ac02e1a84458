//! Tests for the steppable sort machines.

use std::collections::BTreeSet;

use super::counting::DEFAULT_MAX_COUNTING_VALUE;
use super::{
    parse_values, BubbleSort, CountingSort, InsertionSort, SelectionSort, SortKind, SortMachine,
};
use crate::config::SortConfig;
use crate::error::Error;

fn set(indices: &[usize]) -> BTreeSet<usize> {
    indices.iter().copied().collect()
}

fn all_machines(values: &[i64]) -> Vec<Box<dyn SortMachine<i64>>> {
    SortKind::ALL
        .into_iter()
        .map(|kind| kind.machine(values.to_vec(), &SortConfig::default()).unwrap())
        .collect()
}

// ── Bubble ─────────────────────────────────────────────────────────

#[test]
fn test_bubble_first_step_swaps() {
    let mut sort = BubbleSort::new(vec![5, 3, 4, 1, 2]);
    let step = sort.step();

    assert!(!step.completed);
    assert_eq!(step.highlighted, set(&[0, 1]));
    assert_eq!(sort.values(), &[3, 5, 4, 1, 2]);
}

#[test]
fn test_bubble_sorts_reference_array() {
    let mut sort = BubbleSort::new(vec![5, 3, 4, 1, 2]);
    sort.run_to_end();
    assert_eq!(sort.values(), &[1, 2, 3, 4, 5]);
    assert!(sort.is_complete());
}

#[test]
fn test_bubble_pass_end_is_an_idle_step() {
    let mut sort = BubbleSort::new(vec![2, 1]);

    assert_eq!(sort.step().highlighted, set(&[0, 1]));
    let pass_end = sort.step();
    assert!(!pass_end.completed);
    assert!(pass_end.highlighted.is_empty());
}

#[test]
fn test_bubble_step_count() {
    // Passes compare 4 + 3 + 2 + 1 + 0 pairs, plus one idle step per pass.
    let mut sort = BubbleSort::new(vec![5, 3, 4, 1, 2]);
    assert_eq!(sort.run_to_end(), 15);
    assert_eq!(sort.stats().comparisons, 10);
}

#[test]
fn test_bubble_is_generic_over_ord() {
    let mut sort = BubbleSort::new(vec!["pear", "apple", "fig"]);
    sort.run_to_end();
    assert_eq!(sort.values(), &["apple", "fig", "pear"]);
}

// ── Insertion ──────────────────────────────────────────────────────

#[test]
fn test_insertion_shift_then_place() {
    let mut sort = InsertionSort::new(vec![5, 3, 4, 1, 2]);

    let shift = sort.step();
    assert_eq!(shift.highlighted, set(&[0, 1]));
    assert_eq!(sort.values(), &[5, 5, 4, 1, 2]);

    let place = sort.step();
    assert!(place.highlighted.is_empty());
    assert_eq!(sort.values(), &[3, 5, 4, 1, 2]);

    let shift = sort.step();
    assert_eq!(shift.highlighted, set(&[1, 2]));
    sort.step();
    assert_eq!(sort.values(), &[3, 4, 5, 1, 2]);
}

#[test]
fn test_insertion_sorts_reference_array() {
    let mut sort = InsertionSort::new(vec![5, 3, 4, 1, 2]);
    sort.run_to_end();
    assert_eq!(sort.values(), &[1, 2, 3, 4, 5]);
}

#[test]
fn test_insertion_single_element_completes_immediately() {
    let mut sort = InsertionSort::new(vec![7]);
    assert!(sort.step().completed);
    assert_eq!(sort.stats().steps, 0);
}

// ── Selection ──────────────────────────────────────────────────────

#[test]
fn test_selection_first_pass() {
    let mut sort = SelectionSort::new(vec![5, 3, 4, 1, 2]);

    assert_eq!(sort.step().highlighted, set(&[0]));
    assert_eq!(sort.step().highlighted, set(&[0, 1]));
    assert_eq!(sort.min_index(), 1);
    for _ in 0..3 {
        sort.step();
    }
    assert_eq!(sort.min_index(), 3);

    let swap = sort.step();
    assert!(swap.highlighted.is_empty());
    assert_eq!(sort.values(), &[1, 3, 4, 5, 2]);
    assert_eq!(sort.step().highlighted, set(&[1, 2]));
}

#[test]
fn test_selection_sorts_reference_array() {
    let mut sort = SelectionSort::new(vec![5, 3, 4, 1, 2]);
    sort.run_to_end();
    assert_eq!(sort.values(), &[1, 2, 3, 4, 5]);
}

// ── Counting ───────────────────────────────────────────────────────

#[test]
fn test_counting_prepares_sorted_buffer() {
    let sort = CountingSort::new(vec![3, 0, 2, 0, 3]).unwrap();
    assert_eq!(sort.prepared(), &[0, 0, 2, 3, 3]);
    assert_eq!(sort.values(), &[3, 0, 2, 0, 3]);
}

#[test]
fn test_counting_writes_one_index_per_step() {
    let mut sort = CountingSort::new(vec![3, 0, 2]).unwrap();

    assert_eq!(sort.step().highlighted, set(&[0]));
    assert_eq!(sort.values(), &[0, 0, 2]);
    assert_eq!(sort.step().highlighted, set(&[1]));
    assert_eq!(sort.step().highlighted, set(&[2]));
    assert_eq!(sort.values(), &[0, 2, 3]);
    assert!(sort.step().completed);
}

#[test]
fn test_counting_rejects_negative_values() {
    let err = CountingSort::new(vec![4, -1, 2]).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(ref m) if m.contains("-1")));
}

#[test]
fn test_counting_rejects_values_above_limit() {
    let err = CountingSort::with_limit(vec![4, 11], 10).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(ref m) if m.contains("11")));
    assert!(CountingSort::new(vec![i64::try_from(DEFAULT_MAX_COUNTING_VALUE).unwrap()]).is_ok());
}

#[test]
fn test_counting_empty_input() {
    let mut sort = CountingSort::new(Vec::new()).unwrap();
    assert!(sort.prepared().is_empty());
    assert!(sort.step().completed);
}

#[test]
fn test_counting_kind_respects_configured_limit() {
    let config = SortConfig {
        max_counting_value: 5,
    };
    assert!(SortKind::Counting.machine(vec![6], &config).is_err());
    assert!(SortKind::Bubble.machine(vec![-6], &config).is_ok());
}

// ── Shared contract ────────────────────────────────────────────────

#[test]
fn test_all_kinds_sort_reference_array() {
    for mut machine in all_machines(&[5, 3, 4, 1, 2]) {
        machine.run_to_end();
        assert_eq!(machine.values(), &[1, 2, 3, 4, 5], "{:?}", machine.kind());
    }
}

#[test]
fn test_completion_is_idempotent() {
    for mut machine in all_machines(&[4, 1, 3]) {
        machine.run_to_end();
        for _ in 0..3 {
            let step = machine.step();
            assert!(step.completed, "{:?}", machine.kind());
            assert!(step.highlighted.is_empty());
        }
        let steps = machine.stats().steps;
        machine.step();
        assert_eq!(machine.stats().steps, steps);
    }
}

#[test]
fn test_sorted_input_performs_no_moves() {
    for mut machine in all_machines(&[1, 2, 2, 5, 9]) {
        machine.run_to_end();
        assert!(machine.is_complete());
        assert_eq!(machine.stats().moves, 0, "{:?}", machine.kind());
        assert_eq!(machine.values(), &[1, 2, 2, 5, 9]);
    }
}

#[test]
fn test_empty_input_completes_for_all_kinds() {
    for mut machine in all_machines(&[]) {
        let step = machine.step();
        assert!(step.completed, "{:?}", machine.kind());
        assert!(machine.values().is_empty());
    }
}

#[test]
fn test_sort_kind_parse() {
    assert_eq!("Bubble".parse::<SortKind>().unwrap(), SortKind::Bubble);
    assert_eq!(" counting".parse::<SortKind>().unwrap(), SortKind::Counting);
    assert!(matches!(
        "quick".parse::<SortKind>(),
        Err(Error::UnknownAlgorithm(ref name)) if name == "quick"
    ));
}

#[test]
fn test_parse_values() {
    assert_eq!(parse_values("5, 3 4,,1").unwrap(), vec![5, 3, 4, 1]);
    assert!(parse_values("").unwrap().is_empty());
    assert!(matches!(parse_values("1,x"), Err(Error::InvalidInput(ref m)) if m.contains("'x'")));
}
