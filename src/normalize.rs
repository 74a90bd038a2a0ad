#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use crate::{
    Grade,
    constants::{MAX_GRADE, MIN_GRADE},
};

/// Clips a single grade into the valid percentage range.
pub fn normalize_grade(grade: Grade) -> Grade {
    grade.clamp(MIN_GRADE, MAX_GRADE)
}

/// Returns a copy of `grades` with every element clipped into `0..=100`.
pub fn normalize_grades(grades: &[Grade]) -> Vec<Grade> {
    grades.iter().copied().map(normalize_grade).collect()
}
