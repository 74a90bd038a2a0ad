#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # gradegen
//!
//! Prints summary statistics for 1000 synthetic lognormal grades.
//!
//! The seed comes from `--seed`, then the `GRADEGEN_SEED` environment
//! variable (a `.env` file is honoured), and falls back to OS entropy.

use anyhow::{Context, Result};
use bpaf::*;
use dotenvy::dotenv;
use gradegen::{
    config::{self, Format, ReportConfig},
    source::SeededNormalSource,
};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Parsed command line options.
#[derive(Debug, Clone)]
struct Opts {
    /// Seed for the normal source
    seed:       Option<u64>,
    /// Output format override
    format:     Option<Format>,
    /// Skip minimum/maximum/average
    no_stats:   bool,
    /// Skip the perfect score count
    no_perfect: bool,
    /// Skip the letter grade histogram
    no_counts:  bool,
    /// Frame the output with the title banner
    banner:     bool,
    /// Log verbosity, one per `-v`
    verbose:    usize,
}

/// Parse the command line arguments and return the options
fn options() -> Opts {
    let seed = long("seed")
        .help("Seed for the random source (defaults to $GRADEGEN_SEED, then entropy)")
        .argument::<u64>("SEED")
        .optional();

    let format = long("format")
        .short('f')
        .help("Output format: text, table or json (defaults to $GRADEGEN_FORMAT, then text)")
        .argument::<String>("FORMAT")
        .parse(|s| s.parse::<Format>())
        .optional();

    let no_stats = long("no-stats")
        .help("Do not print minimum, maximum and average")
        .switch();

    let no_perfect = long("no-perfect")
        .help("Do not print the perfect score count")
        .switch();

    let no_counts = long("no-counts")
        .help("Do not print the letter grade histogram")
        .switch();

    let banner = long("banner")
        .help("Frame the report with a title banner")
        .switch();

    let verbose = short('v')
        .long("verbose")
        .help("Increase log verbosity, can be repeated")
        .req_flag(())
        .many()
        .map(|v| v.len());

    construct!(Opts {
        seed,
        format,
        no_stats,
        no_perfect,
        no_counts,
        banner,
        verbose
    })
    .to_options()
    .descr("Generates lognormal grades and prints their statistics")
    .run()
}

fn main() -> Result<()> {
    dotenv().ok();

    let opts = options();

    let level = match opts.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    let fmt = fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(level);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let seed = match opts.seed {
        Some(seed) => Some(seed),
        None => config::seed_from_env()?,
    };
    let format = match opts.format {
        Some(format) => format,
        None => config::format_from_env()?.unwrap_or_default(),
    };

    let report_config = ReportConfig::builder()
        .statistics(!opts.no_stats)
        .perfect_count(!opts.no_perfect)
        .grade_counts(!opts.no_counts)
        .banner(opts.banner)
        .format(format)
        .build();

    let mut source = match seed {
        Some(seed) => SeededNormalSource::new(seed),
        None => SeededNormalSource::from_entropy(),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    gradegen::run(&mut source, &report_config, &mut out)
        .with_context(|| format!("Failed to report grades for seed {}", source.seed()))?;

    Ok(())
}
