use gradegen::{
    Grade,
    letter::{LetterGrade, letter_grade},
    report::{display_grade_counts, display_perfect_count, display_statistics},
    stats::{GradeStatistics, StatsError},
};

fn sample_grades() -> Vec<Grade> {
    vec![0, 59, 60, 69, 70, 79, 80, 89, 90, 100]
}

fn captured(f: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<()>) -> String {
    let mut buf = Vec::new();
    f(&mut buf).expect("report");
    String::from_utf8(buf).expect("utf-8 output")
}

#[test]
fn correct_letter_grades() {
    let actual: Vec<char> = sample_grades().into_iter().map(letter_grade).collect();
    assert_eq!(actual, vec!['F', 'F', 'D', 'D', 'C', 'C', 'B', 'B', 'A', 'A']);
}

#[test]
fn letter_enum_matches_chars() {
    assert_eq!(LetterGrade::from_grade(90), LetterGrade::A);
    assert_eq!(LetterGrade::from_grade(89), LetterGrade::B);
    assert_eq!(LetterGrade::from_grade(0), LetterGrade::F);
}

#[test]
fn statistics_output() {
    let grades = sample_grades();
    let expected = "Minimum grade: 0\nMaximum grade: 100\nAverage grade: 69.6\n";
    assert_eq!(captured(|o| display_statistics(o, &grades)), expected);
}

#[test]
fn perfect_count_output() {
    let grades = sample_grades();
    assert_eq!(captured(|o| display_perfect_count(o, &grades)), "Perfect score count: 1\n");
}

#[test]
fn grade_counts_output() {
    let grades = sample_grades();
    let expected = [
        "Letter grade A: 2 students",
        "Letter grade B: 2 students",
        "Letter grade C: 2 students",
        "Letter grade D: 2 students",
        "Letter grade F: 2 students",
    ]
    .map(|l| format!("{l}\n"))
    .concat();

    assert_eq!(captured(|o| display_grade_counts(o, &grades)), expected);
}

#[test]
fn average_is_not_truncated() {
    let stats = GradeStatistics::from_grades(&[99, 100]).expect("stats");
    assert_eq!(stats.average, 99.5);
}

#[test]
fn empty_statistics_are_rejected() {
    let err = GradeStatistics::from_grades(&[]).unwrap_err();
    assert_eq!(err, StatsError::EmptyInput);

    let mut buf = Vec::new();
    let err = display_statistics(&mut buf, &[]).unwrap_err();
    assert_eq!(err.downcast_ref::<StatsError>(), Some(&StatsError::EmptyInput));
}
