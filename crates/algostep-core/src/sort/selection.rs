//! Selection sort, one minimum-candidate comparison per step.

use super::{SortKind, SortMachine, SortStats, SortStep};

/// Selection sort over an owned array.
///
/// The first pass scans from `j = i`; later passes start at `j = i + 1`.
/// An exhausted scan costs one idle step that swaps the minimum into place.
#[derive(Debug, Clone)]
pub struct SelectionSort<T> {
    values: Vec<T>,
    i: usize,
    j: usize,
    min_index: usize,
    stats: SortStats,
}

impl<T: Ord> SelectionSort<T> {
    /// Creates a machine positioned before the first comparison.
    #[must_use]
    pub fn new(values: Vec<T>) -> Self {
        Self {
            values,
            i: 0,
            j: 0,
            min_index: 0,
            stats: SortStats::default(),
        }
    }

    /// Index of the smallest value seen in the current pass.
    #[must_use]
    pub fn min_index(&self) -> usize {
        self.min_index
    }
}

impl<T: Ord + std::fmt::Debug> SortMachine<T> for SelectionSort<T> {
    fn kind(&self) -> SortKind {
        SortKind::Selection
    }

    fn step(&mut self) -> SortStep {
        let n = self.values.len();
        if self.i + 1 >= n {
            return SortStep::completed();
        }
        self.stats.steps += 1;

        if self.j < n {
            let j = self.j;
            self.stats.comparisons += 1;
            if self.values[j] < self.values[self.min_index] {
                self.min_index = j;
            }
            self.j += 1;
            SortStep::touched([self.i, j])
        } else {
            if self.min_index != self.i {
                self.values.swap(self.i, self.min_index);
                self.stats.moves += 1;
            }
            self.i += 1;
            self.j = self.i + 1;
            self.min_index = self.i;
            SortStep::idle()
        }
    }

    fn values(&self) -> &[T] {
        &self.values
    }

    fn is_complete(&self) -> bool {
        self.i + 1 >= self.values.len()
    }

    fn stats(&self) -> SortStats {
        self.stats
    }
}
