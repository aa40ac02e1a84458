//! Bubble sort, one adjacent comparison per step.

use super::{SortKind, SortMachine, SortStats, SortStep};

/// Bubble sort over an owned array.
///
/// Pass `i` compares `values[j]` and `values[j + 1]` for `j < n - i - 1`.
/// Finishing a pass costs one idle step that resets `j` and advances `i`.
#[derive(Debug, Clone)]
pub struct BubbleSort<T> {
    values: Vec<T>,
    i: usize,
    j: usize,
    stats: SortStats,
}

impl<T: Ord> BubbleSort<T> {
    /// Creates a machine positioned before the first comparison.
    #[must_use]
    pub fn new(values: Vec<T>) -> Self {
        Self {
            values,
            i: 0,
            j: 0,
            stats: SortStats::default(),
        }
    }
}

impl<T: Ord + std::fmt::Debug> SortMachine<T> for BubbleSort<T> {
    fn kind(&self) -> SortKind {
        SortKind::Bubble
    }

    fn step(&mut self) -> SortStep {
        let n = self.values.len();
        if self.i >= n {
            return SortStep::completed();
        }
        self.stats.steps += 1;

        if self.j + 1 < n - self.i {
            let j = self.j;
            self.stats.comparisons += 1;
            if self.values[j] > self.values[j + 1] {
                self.values.swap(j, j + 1);
                self.stats.moves += 1;
            }
            self.j += 1;
            SortStep::touched([j, j + 1])
        } else {
            self.j = 0;
            self.i += 1;
            SortStep::idle()
        }
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
