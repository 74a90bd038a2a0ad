#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use tracing::debug;

use crate::{
    Grade,
    constants::{GRADE_CEILING, GRADE_COUNT, GRADE_CURVE, NORMAL_SCALE, NORMAL_SHIFT},
    source::NormalSource,
};

/// Maps one standard-normal draw onto a raw (unclipped) grade.
///
/// The float to int cast saturates, so extreme draws land on `i32::MIN` or
/// `i32::MAX` instead of wrapping.
pub fn raw_grade(z: f64) -> Grade {
    (GRADE_CEILING - (z * NORMAL_SCALE + NORMAL_SHIFT).exp() + GRADE_CURVE).floor() as Grade
}

/// Draws `count` raw grades from `source`, in order.
pub fn grade_generator<S>(source: &mut S, count: usize) -> Vec<Grade>
where
    S: NormalSource + ?Sized,
{
    let grades: Vec<Grade> = std::iter::repeat_with(|| raw_grade(source.next_standard_normal()))
        .take(count)
        .collect();

    debug!(count = grades.len(), "generated raw grades");
    grades
}

/// Generates the fixed batch of [`GRADE_COUNT`] raw grades.
pub fn generate_grades<S>(source: &mut S) -> Vec<Grade>
where
    S: NormalSource + ?Sized,
{
    grade_generator(source, GRADE_COUNT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_draw_hits_the_median() {
        // 120 - e^3.5 = 86.88...
        assert_eq!(raw_grade(0.0), 86);
    }

    #[test]
    fn negative_results_floor_downwards() {
        // 120 - e^5.5 = -124.69...
        assert_eq!(raw_grade(8.0), -125);
    }

    #[test]
    fn extreme_draws_saturate() {
        assert_eq!(raw_grade(f64::MAX), Grade::MIN);
        assert_eq!(raw_grade(f64::NEG_INFINITY), 120);
    }
}
