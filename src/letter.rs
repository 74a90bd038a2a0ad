#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::{self, Display};

use serde::Serialize;

use crate::Grade;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
/// A letter grade. Variants are declared in letter order so the derived
/// `Ord` sorts `A` first and `F` last.
pub enum LetterGrade {
    /// 90 and above
    A,
    /// 80 to 89
    B,
    /// 70 to 79
    C,
    /// 60 to 69
    D,
    /// 59 and below
    F,
}

impl LetterGrade {
    /// Classifies a normalized (0-100) grade.
    ///
    /// Grades outside `0..=100` are not expected here; they fall through to
    /// `A` or `F` like their nearest in-range neighbour.
    pub fn from_grade(grade: Grade) -> Self {
        if grade > 89 {
            return Self::A;
        }
        if grade > 79 {
            return Self::B;
        }
        if grade > 69 {
            return Self::C;
        }
        if grade > 59 {
            return Self::D;
        }
        Self::F
    }

    /// The letter as a `char`.
    pub fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::F => 'F',
        }
    }
}

impl Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Shorthand for [`LetterGrade::from_grade`] returning the bare letter.
pub fn letter_grade(grade: Grade) -> char {
    LetterGrade::from_grade(grade).as_char()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        let grades = [0, 59, 60, 69, 70, 79, 80, 89, 90, 100];
        let letters: String = grades.into_iter().map(letter_grade).collect();
        assert_eq!(letters, "FFDDCCBBAA");
    }

    #[test]
    fn ordering_is_alphabetical() {
        let mut letters = vec![LetterGrade::F, LetterGrade::C, LetterGrade::A, LetterGrade::D];
        letters.sort();
        assert_eq!(letters, vec![LetterGrade::A, LetterGrade::C, LetterGrade::D, LetterGrade::F]);
    }

    #[test]
    fn displays_as_letter() {
        assert_eq!(LetterGrade::B.to_string(), "B");
    }
}
