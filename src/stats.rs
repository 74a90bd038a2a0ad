#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::collections::BTreeMap;

use itertools::{Itertools, MinMaxResult};
use serde::Serialize;
use tracing::debug;

use crate::{Grade, constants::MAX_GRADE, letter::LetterGrade};

/// Errors raised while summarising a grade list.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// Min, max and average have no meaning for zero grades.
    #[error("Cannot compute statistics over an empty list of grades.")]
    EmptyInput,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Aggregate statistics over a non-empty list of normalized grades.
pub struct GradeStatistics {
    /// Smallest grade
    pub min:           Grade,
    /// Largest grade
    pub max:           Grade,
    /// Number of grades equal to the perfect score
    pub perfect_count: usize,
    /// Number of grades summarised
    pub count:         usize,
    /// Sum of all grades, wide enough that it cannot overflow
    pub sum:           i64,
    /// Arithmetic mean
    pub average:       f64,
}

impl GradeStatistics {
    /// Summarises `grades`, failing with [`StatsError::EmptyInput`] when
    /// there is nothing to summarise.
    pub fn from_grades(grades: &[Grade]) -> Result<Self, StatsError> {
        let (min, max) = match grades.iter().copied().minmax() {
            MinMaxResult::NoElements => return Err(StatsError::EmptyInput),
            MinMaxResult::OneElement(g) => (g, g),
            MinMaxResult::MinMax(lo, hi) => (lo, hi),
        };

        let count = grades.len();
        let sum: i64 = grades.iter().map(|&g| i64::from(g)).sum();
        let stats = Self {
            min,
            max,
            perfect_count: perfect_count(grades),
            count,
            sum,
            average: sum as f64 / count as f64,
        };

        debug!(?stats, "computed grade statistics");
        Ok(stats)
    }
}

/// Counts grades equal to the perfect score.
pub fn perfect_count(grades: &[Grade]) -> usize {
    grades.iter().filter(|&&g| g == MAX_GRADE).count()
}

/// Groups `items` by `key` and counts each group. Iteration over the result
/// is in ascending key order, and only keys that were observed are present.
pub fn count_by<I, K, F>(items: I, mut key: F) -> BTreeMap<K, usize>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    items.into_iter().fold(BTreeMap::new(), |mut groups, item| {
        *groups.entry(key(&item)).or_insert(0) += 1;
        groups
    })
}

/// Histogram of letter grades, ordered `A` through `F`.
pub fn grade_counts(grades: &[Grade]) -> BTreeMap<LetterGrade, usize> {
    count_by(grades.iter().copied(), |&g| LetterGrade::from_grade(g))
}
