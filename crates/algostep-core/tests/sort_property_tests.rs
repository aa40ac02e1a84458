//! Property-based tests for the steppable sort machines.

use algostep_core::sort::{BubbleSort, CountingSort, InsertionSort, SelectionSort};
use algostep_core::{SortConfig, SortKind, SortMachine};
use proptest::{
    collection::vec,
    prelude::{prop_assert, prop_assert_eq},
    proptest,
    test_runner::{Config as ProptestConfig, FileFailurePersistence},
};

const SORT_PROP_CASES: u32 = 256;
const MAX_LEN: usize = 40;

fn sort_config() -> ProptestConfig {
    ProptestConfig {
        cases: SORT_PROP_CASES,
        failure_persistence: Some(Box::new(FileFailurePersistence::WithSource(
            "sort-property-regressions",
        ))),
        ..ProptestConfig::default()
    }
}

/// Steps until completion; fails if the machine does not terminate in
/// quadratic time.
fn step_to_end(machine: &mut dyn SortMachine<i64>) {
    let n = machine.values().len();
    let bound = (n + 2) * (n + 2) * 2;
    for _ in 0..=bound {
        if machine.step().completed {
            return;
        }
    }
    panic!("{:?} did not complete within {bound} steps", machine.kind());
}

fn comparison_machines(values: &[i64]) -> Vec<Box<dyn SortMachine<i64>>> {
    vec![
        Box::new(BubbleSort::new(values.to_vec())),
        Box::new(InsertionSort::new(values.to_vec())),
        Box::new(SelectionSort::new(values.to_vec())),
    ]
}

proptest! {
    #![proptest_config(sort_config())]

    #[test]
    fn prop_comparison_sorts_yield_sorted_permutation(values in vec(-500_i64..500, 0..MAX_LEN)) {
        let mut expected = values.clone();
        expected.sort_unstable();

        for mut machine in comparison_machines(&values) {
            step_to_end(machine.as_mut());
            prop_assert_eq!(machine.values(), expected.as_slice());
            prop_assert!(machine.is_complete());
        }
    }

    #[test]
    fn prop_counting_matches_stable_sort(values in vec(0_i64..300, 0..MAX_LEN)) {
        let mut expected = values.clone();
        expected.sort();

        let mut machine = CountingSort::new(values.clone()).unwrap();
        prop_assert_eq!(machine.prepared(), expected.as_slice());
        prop_assert_eq!(machine.prepared().len(), values.len());

        let mut writes = 0;
        loop {
            let step = machine.step();
            if step.completed {
                break;
            }
            prop_assert_eq!(step.highlighted.len(), 1);
            writes += 1;
        }
        prop_assert_eq!(writes, values.len());
        prop_assert_eq!(machine.values(), expected.as_slice());
    }

    #[test]
    fn prop_sorted_input_performs_no_moves(values in vec(0_i64..300, 0..MAX_LEN)) {
        let mut sorted = values;
        sorted.sort_unstable();

        for kind in SortKind::ALL {
            let mut machine = kind.machine(sorted.clone(), &SortConfig::default()).unwrap();
            step_to_end(machine.as_mut());
            prop_assert_eq!(machine.stats().moves, 0, "{} moved elements", kind);
            prop_assert_eq!(machine.values(), sorted.as_slice());
        }
    }

    #[test]
    fn prop_completed_tail_is_idempotent(
        values in vec(0_i64..300, 0..MAX_LEN),
        extra in 1_usize..5,
    ) {
        for kind in SortKind::ALL {
            let mut machine = kind.machine(values.clone(), &SortConfig::default()).unwrap();
            step_to_end(machine.as_mut());
            let settled = machine.values().to_vec();
            let stats = machine.stats();

            for _ in 0..extra {
                let step = machine.step();
                prop_assert!(step.completed);
                prop_assert!(step.highlighted.is_empty());
            }
            prop_assert_eq!(machine.values(), settled.as_slice());
            prop_assert_eq!(machine.stats(), stats);
        }
    }

    #[test]
    fn prop_highlights_stay_in_bounds(values in vec(-50_i64..50, 0..MAX_LEN)) {
        for mut machine in comparison_machines(&values) {
            let n = values.len();
            loop {
                let step = machine.step();
                prop_assert!(step.highlighted.iter().all(|&i| i < n));
                if step.completed {
                    break;
                }
            }
        }
    }
}
