//! Counting sort: one-shot preparation, then one write per step.

use tracing::debug;

use super::{SortKind, SortMachine, SortStats, SortStep};
use crate::error::{Error, Result};

/// Largest value accepted by [`CountingSort::new`].
pub const DEFAULT_MAX_COUNTING_VALUE: usize = 1_000_000;

/// Counting sort over non-negative integers.
///
/// The sorted buffer is built when the machine is created; stepping then
/// copies it into the live array one index at a time.
#[derive(Debug, Clone)]
pub struct CountingSort {
    values: Vec<i64>,
    prepared: Vec<i64>,
    cursor: usize,
    stats: SortStats,
}

impl CountingSort {
    /// Prepares a machine with the default value bound.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` for negative values or values above
    /// [`DEFAULT_MAX_COUNTING_VALUE`].
    pub fn new(values: Vec<i64>) -> Result<Self> {
        Self::with_limit(values, DEFAULT_MAX_COUNTING_VALUE)
    }

    /// Prepares a machine whose frequency table may hold values up to `max_value`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` for negative values or values above `max_value`.
    pub fn with_limit(values: Vec<i64>, max_value: usize) -> Result<Self> {
        let prepared = prepare(&values, max_value)?;
        Ok(Self {
            values,
            prepared,
            cursor: 0,
            stats: SortStats::default(),
        })
    }

    /// The fully sorted buffer computed at preparation.
    #[must_use]
    pub fn prepared(&self) -> &[i64] {
        &self.prepared
    }
}

fn prepare(values: &[i64], max_value: usize) -> Result<Vec<i64>> {
    let mut slots = Vec::with_capacity(values.len());
    for &value in values {
        let slot = usize::try_from(value).map_err(|_| {
            Error::InvalidInput(format!(
                "counting sort requires non-negative integers, got {value}"
            ))
        })?;
        if slot > max_value {
            return Err(Error::InvalidInput(format!(
                "counting sort value {value} exceeds the limit of {max_value}"
            )));
        }
        slots.push(slot);
    }

    let Some(&max) = slots.iter().max() else {
        return Ok(Vec::new());
    };
    let mut counts = vec![0usize; max + 1];
    for slot in slots {
        counts[slot] += 1;
    }
    debug!(table_size = counts.len(), "counting sort table prepared");

    Ok((0i64..)
        .zip(counts)
        .flat_map(|(value, freq)| std::iter::repeat(value).take(freq))
        .collect())
}

impl SortMachine<i64> for CountingSort {
    fn kind(&self) -> SortKind {
        SortKind::Counting
    }

    fn step(&mut self) -> SortStep {
        let index = self.cursor;
        let Some(&value) = self.prepared.get(index) else {
            return SortStep::completed();
        };
        self.stats.steps += 1;
        if self.values[index] != value {
            self.values[index] = value;
            self.stats.moves += 1;
        }
        self.cursor += 1;
        SortStep::touched([index])
    }

    fn values(&self) -> &[i64] {
        &self.values
    }

    fn is_complete(&self) -> bool {
        self.cursor >= self.prepared.len()
    }

    fn stats(&self) -> SortStats {
        self.stats
    }
}
