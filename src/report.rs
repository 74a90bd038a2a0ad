#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::io::Write;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, object::Rows},
};
use tracing::instrument;

use crate::{
    Grade,
    config::{Format, ReportConfig},
    constants::{BANNER_DESCRIPTION, BANNER_RULE, BANNER_TITLE},
    letter::LetterGrade,
    stats::{GradeStatistics, grade_counts, perfect_count},
};

#[derive(Tabled, Serialize, Debug, Clone, PartialEq, Eq)]
/// Number of students holding one letter grade
pub struct LetterCount {
    #[tabled(rename = "Letter")]
    /// * `letter`: the letter grade
    pub letter:   LetterGrade,
    #[tabled(rename = "Students")]
    /// * `students`: how many grades map to it
    pub students: usize,
}

#[derive(Tabled)]
/// One `metric | value` row of the summary table
struct SummaryRow {
    #[tabled(rename = "Metric")]
    /// * `metric`: metric label
    metric: &'static str,
    #[tabled(rename = "Value")]
    /// * `value`: rendered value
    value:  String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
/// Everything the reporter knows about one batch of normalized grades.
pub struct GradeReport {
    /// Seed the batch was generated from, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed:          Option<u64>,
    /// Aggregate statistics
    pub statistics:    GradeStatistics,
    /// Letter grade histogram, `A` first, observed letters only
    pub letter_counts: Vec<LetterCount>,
}

impl GradeReport {
    /// Builds a report over normalized `grades`. Fails on an empty list.
    pub fn from_grades(grades: &[Grade]) -> Result<Self> {
        let statistics = GradeStatistics::from_grades(grades)?;
        let letter_counts = grade_counts(grades)
            .into_iter()
            .map(|(letter, students)| LetterCount { letter, students })
            .collect();

        Ok(Self {
            seed: None,
            statistics,
            letter_counts,
        })
    }

    /// Attaches the seed the grades were generated from.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Renders an average the way a JVM prints a `double`: shortest round-trip
/// digits with at least one fractional digit (`70.0`, `69.6`).
pub fn format_average(average: f64) -> String {
    format!("{average:?}")
}

/// Writes the minimum, maximum and average lines.
fn write_statistics(out: &mut impl Write, stats: &GradeStatistics) -> Result<()> {
    writeln!(out, "Minimum grade: {}", stats.min)?;
    writeln!(out, "Maximum grade: {}", stats.max)?;
    writeln!(out, "Average grade: {}", format_average(stats.average))?;
    Ok(())
}

/// Writes the perfect score line.
fn write_perfect_count(out: &mut impl Write, count: usize) -> Result<()> {
    writeln!(out, "Perfect score count: {count}")?;
    Ok(())
}

/// Writes one histogram line per observed letter.
fn write_grade_counts<'a>(
    out: &mut impl Write,
    counts: impl IntoIterator<Item = &'a LetterCount>,
) -> Result<()> {
    for LetterCount { letter, students } in counts {
        writeln!(out, "Letter grade {letter}: {students} students")?;
    }
    Ok(())
}

/// Prints minimum, maximum and average of normalized `grades`.
pub fn display_statistics(out: &mut impl Write, grades: &[Grade]) -> Result<()> {
    let stats = GradeStatistics::from_grades(grades)?;
    write_statistics(out, &stats)
}

/// Prints how many of `grades` are perfect scores.
pub fn display_perfect_count(out: &mut impl Write, grades: &[Grade]) -> Result<()> {
    write_perfect_count(out, perfect_count(grades))
}

/// Prints the letter grade histogram of normalized `grades`, `A` first.
pub fn display_grade_counts(out: &mut impl Write, grades: &[Grade]) -> Result<()> {
    let counts: Vec<LetterCount> = grade_counts(grades)
        .into_iter()
        .map(|(letter, students)| LetterCount { letter, students })
        .collect();
    write_grade_counts(out, &counts)
}

/// Builds a report over `grades` and prints it according to `config`.
pub fn display_report(
    out: &mut impl Write,
    grades: &[Grade],
    config: &ReportConfig,
) -> Result<()> {
    let report = GradeReport::from_grades(grades)?;
    render_report(out, &report, config)
}

/// Prints an already-built report according to `config`.
#[instrument(skip_all, fields(format = %config.format))]
pub fn render_report(
    out: &mut impl Write,
    report: &GradeReport,
    config: &ReportConfig,
) -> Result<()> {
    // the banner only frames human-readable output
    let banner = config.banner && config.format != Format::Json;

    if banner {
        writeln!(out)?;
        writeln!(out, "{}", BANNER_TITLE.bold())?;
        writeln!(out, "{BANNER_DESCRIPTION}")?;
        writeln!(out)?;
        writeln!(out, "{BANNER_RULE}")?;
    }

    match config.format {
        Format::Text => render_text(out, report, config)?,
        Format::Table => render_table(out, report, config)?,
        Format::Json => render_json(out, report, config)?,
    }

    if banner {
        writeln!(out, "{BANNER_RULE}")?;
        writeln!(out)?;
    }

    out.flush().context("Could not flush report output")
}

/// Plain `label: value` lines.
fn render_text(out: &mut impl Write, report: &GradeReport, config: &ReportConfig) -> Result<()> {
    if config.statistics {
        write_statistics(out, &report.statistics)?;
    }
    if config.perfect_count {
        write_perfect_count(out, report.statistics.perfect_count)?;
    }
    if config.grade_counts {
        write_grade_counts(out, &report.letter_counts)?;
    }
    Ok(())
}

/// Summary and histogram as box-drawn tables.
fn render_table(out: &mut impl Write, report: &GradeReport, config: &ReportConfig) -> Result<()> {
    let stats = &report.statistics;
    let mut rows = Vec::new();

    if config.statistics {
        rows.push(SummaryRow {
            metric: "Minimum grade",
            value:  stats.min.to_string(),
        });
        rows.push(SummaryRow {
            metric: "Maximum grade",
            value:  stats.max.to_string(),
        });
        rows.push(SummaryRow {
            metric: "Average grade",
            value:  format_average(stats.average),
        });
    }
    if config.perfect_count {
        rows.push(SummaryRow {
            metric: "Perfect score count",
            value:  stats.perfect_count.to_string(),
        });
    }

    if !rows.is_empty() {
        let title = match report.seed {
            Some(seed) => format!("Grade Summary (seed {seed})"),
            None => "Grade Summary".to_string(),
        };
        writeln!(
            out,
            "{}",
            Table::new(&rows)
                .with(Panel::header(title))
                .with(
                    Modify::new(Rows::first())
                        .with(Alignment::center())
                        .with(Alignment::center_vertical()),
                )
                .with(Style::modern())
        )?;
    }

    if config.grade_counts && !report.letter_counts.is_empty() {
        writeln!(
            out,
            "{}",
            Table::new(&report.letter_counts)
                .with(Panel::header("Letter Grades"))
                .with(Panel::footer(format!("Total: {}", stats.count)))
                .with(
                    Modify::new(Rows::first())
                        .with(Alignment::center())
                        .with(Alignment::center_vertical()),
                )
                .with(
                    Modify::new(Rows::last())
                        .with(Alignment::center())
                        .with(Alignment::center_vertical()),
                )
                .with(Style::modern())
        )?;
    }

    Ok(())
}

/// Pretty JSON restricted to the enabled sections.
fn render_json(out: &mut impl Write, report: &GradeReport, config: &ReportConfig) -> Result<()> {
    let mut doc = serde_json::Map::new();

    if let Some(seed) = report.seed {
        doc.insert("seed".into(), seed.into());
    }
    doc.insert("count".into(), report.statistics.count.into());

    if config.statistics {
        doc.insert("minimum".into(), report.statistics.min.into());
        doc.insert("maximum".into(), report.statistics.max.into());
        doc.insert("average".into(), report.statistics.average.into());
    }
    if config.perfect_count {
        doc.insert("perfect_count".into(), report.statistics.perfect_count.into());
    }
    if config.grade_counts {
        doc.insert(
            "letter_counts".into(),
            serde_json::to_value(&report.letter_counts)
                .context("Could not serialize letter grade counts")?,
        );
    }

    serde_json::to_writer_pretty(&mut *out, &doc).context("Could not write JSON report")?;
    writeln!(out)?;
    Ok(())
}
