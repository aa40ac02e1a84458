//! Insertion sort, one shift or placement per step.

use super::{SortKind, SortMachine, SortStats, SortStep};

/// Insertion sort over an owned array.
///
/// `hole` is the slot the key will land in (`j + 1` in index terms), which
/// keeps the shift cursor unsigned.
#[derive(Debug, Clone)]
pub struct InsertionSort<T> {
    values: Vec<T>,
    i: usize,
    hole: usize,
    key: Option<T>,
    stats: SortStats,
}

impl<T: Ord + Clone> InsertionSort<T> {
    /// Creates a machine positioned before the first key capture.
    #[must_use]
    pub fn new(values: Vec<T>) -> Self {
        Self {
            values,
            i: 1,
            hole: 1,
            key: None,
            stats: SortStats::default(),
        }
    }
}

impl<T: Ord + Clone + std::fmt::Debug> SortMachine<T> for InsertionSort<T> {
    fn kind(&self) -> SortKind {
        SortKind::Insertion
    }

    fn step(&mut self) -> SortStep {
        if self.i >= self.values.len() {
            return SortStep::completed();
        }
        self.stats.steps += 1;

        if self.key.is_none() {
            self.hole = self.i;
        }
        let values = &self.values;
        let i = self.i;
        let key = self.key.get_or_insert_with(|| values[i].clone());

        let shift = self.hole > 0 && {
            self.stats.comparisons += 1;
            self.values[self.hole - 1] > *key
        };
        if shift {
            let j = self.hole - 1;
            self.values[j + 1] = self.values[j].clone();
            self.stats.moves += 1;
            self.hole = j;
            return SortStep::touched([j, j + 1]);
        }

        if let Some(key) = self.key.take() {
            if self.hole != self.i {
                self.stats.moves += 1;
            }
            self.values[self.hole] = key;
        }
        self.i += 1;
        SortStep::idle()
    }

    fn values(&self) -> &[T] {
        &self.values
    }

    fn is_complete(&self) -> bool {
        self.i >= self.values.len()
    }

    fn stats(&self) -> SortStats {
        self.stats
    }
}
