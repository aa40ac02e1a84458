//! Steppable sorting state machines.
//!
//! Every machine advances one primitive comparison or move per
//! [`SortMachine::step`] and reports the indices it touched. Once a machine
//! completes, further steps are no-ops that keep reporting completion with
//! an empty highlight set.
//!
//! # Example
//!
//! ```rust
//! use algostep_core::sort::{BubbleSort, SortMachine};
//!
//! let mut sort = BubbleSort::new(vec![5, 3, 4, 1, 2]);
//! let first = sort.step();
//! assert_eq!(first.highlighted.iter().copied().collect::<Vec<_>>(), vec![0, 1]);
//! assert_eq!(sort.values(), &[3, 5, 4, 1, 2]);
//!
//! while !sort.step().completed {}
//! assert_eq!(sort.values(), &[1, 2, 3, 4, 5]);
//! ```

mod bubble;
mod counting;
mod insertion;
mod selection;

#[cfg(test)]
mod sort_tests;

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::SortConfig;
use crate::error::{Error, Result};

pub use bubble::BubbleSort;
pub use counting::{CountingSort, DEFAULT_MAX_COUNTING_VALUE};
pub use insertion::InsertionSort;
pub use selection::SelectionSort;

/// Outcome of one [`SortMachine::step`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortStep {
    /// True once the array is sorted and no work remains.
    pub completed: bool,
    /// Indices the step compared or wrote.
    pub highlighted: BTreeSet<usize>,
}

impl SortStep {
    pub(crate) fn touched(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            completed: false,
            highlighted: indices.into_iter().collect(),
        }
    }

    /// A bookkeeping step: cursors moved, nothing to highlight.
    pub(crate) fn idle() -> Self {
        Self::default()
    }

    pub(crate) fn completed() -> Self {
        Self {
            completed: true,
            highlighted: BTreeSet::new(),
        }
    }
}

/// Work counters of a sort machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortStats {
    /// Steps that did work (completion reports are not counted).
    pub steps: u64,
    /// Element comparisons.
    pub comparisons: u64,
    /// Writes that changed the array (swaps, shifts, placements).
    pub moves: u64,
}

/// A sorting algorithm that can be advanced one primitive operation at a time.
pub trait SortMachine<T>: fmt::Debug {
    /// Algorithm of this machine.
    fn kind(&self) -> SortKind;

    /// Performs one step.
    fn step(&mut self) -> SortStep;

    /// Current array contents.
    fn values(&self) -> &[T];

    /// Returns true once the machine has reached its terminal state.
    fn is_complete(&self) -> bool;

    /// Work performed so far.
    fn stats(&self) -> SortStats;

    /// Steps until completion, returning the number of steps that did work.
    fn run_to_end(&mut self) -> u64 {
        let before = self.stats().steps;
        while !self.step().completed {}
        self.stats().steps - before
    }
}

/// Sorting algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKind {
    /// Adjacent compare-and-swap passes.
    Bubble,
    /// Shift larger elements right, then place the key.
    Insertion,
    /// Select the minimum of the unsorted suffix.
    Selection,
    /// Frequency table, then index-by-index write-back.
    Counting,
}

impl SortKind {
    /// All sort algorithms.
    pub const ALL: [SortKind; 4] = [
        SortKind::Bubble,
        SortKind::Insertion,
        SortKind::Selection,
        SortKind::Counting,
    ];

    /// Lower-case algorithm name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Insertion => "insertion",
            Self::Selection => "selection",
            Self::Counting => "counting",
        }
    }

    /// Creates a machine of this kind over `values`.
    ///
    /// # Errors
    ///
    /// Counting sort returns `Error::InvalidInput` for negative values or
    /// values above `config.max_counting_value`.
    pub fn machine(
        self,
        values: Vec<i64>,
        config: &SortConfig,
    ) -> Result<Box<dyn SortMachine<i64>>> {
        Ok(match self {
            Self::Bubble => Box::new(BubbleSort::new(values)),
            Self::Insertion => Box::new(InsertionSort::new(values)),
            Self::Selection => Box::new(SelectionSort::new(values)),
            Self::Counting => Box::new(CountingSort::with_limit(
                values,
                config.max_counting_value,
            )?),
        })
    }
}

impl fmt::Display for SortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or(Error::UnknownAlgorithm(name))
    }
}

/// Parses comma- or whitespace-separated integers.
///
/// # Errors
///
/// Returns `Error::InvalidInput` for the first token that is not an integer.
pub fn parse_values(text: &str) -> Result<Vec<i64>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| Error::InvalidInput(format!("'{token}' is not an integer")))
        })
        .collect()
}
