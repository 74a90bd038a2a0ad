//! # gradegen
//!
//! Generates a batch of synthetic student grades from a lognormal-derived
//! distribution, clips them to a valid percentage, and reports descriptive
//! statistics along with a letter grade histogram.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Report configuration and environment lookups
pub mod config;
/// A module defining a bunch of constant values to be used throughout
pub mod constants;
/// Raw grade generation
pub mod generate;
/// Letter grade classification
pub mod letter;
/// Clipping raw grades into range
pub mod normalize;
/// Printing statistics and histograms
pub mod report;
/// Seedable standard-normal sources
pub mod source;
/// Aggregate statistics and grouping
pub mod stats;

use std::io::Write;

use anyhow::Result;
use tracing::info;

use crate::{
    config::ReportConfig, generate::generate_grades, normalize::normalize_grades,
    report::GradeReport, source::SeededNormalSource,
};

/// An integer percentage grade. Raw grades may fall anywhere in the `i32`
/// range; normalized grades are within `0..=100`.
pub type Grade = i32;

/// Generates, normalizes and reports one batch of grades drawn from `source`.
pub fn run(
    source: &mut SeededNormalSource,
    config: &ReportConfig,
    out: &mut impl Write,
) -> Result<()> {
    info!(seed = source.seed(), "generating grades");

    let grades = generate_grades(source);
    let clipped = normalize_grades(&grades);
    let report = GradeReport::from_grades(&clipped)?.with_seed(source.seed());

    report::render_report(out, &report, config)
}
