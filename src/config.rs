#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{fmt, str::FromStr};

use typed_builder::TypedBuilder;

use crate::constants::{FORMAT_ENV, SEED_ENV};

/// Errors raised while resolving configuration values.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The seed could not be parsed as an unsigned 64-bit integer.
    #[error("Invalid seed `{value}` (from {origin}): expected an unsigned 64-bit integer.")]
    InvalidSeed {
        /// Raw value that failed to parse
        value:  String,
        /// Where the value came from
        origin: String,
    },
    /// The output format name is not one of the supported formats.
    #[error("Unknown output format `{0}`: expected one of `text`, `table`, `json`.")]
    UnknownFormat(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// How the report is rendered on stdout.
pub enum Format {
    /// One `label: value` line per metric
    #[default]
    Text,
    /// Box-drawn tables
    Table,
    /// A pretty-printed JSON document
    Json,
}

impl FromStr for Format {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Table => "table",
            Self::Json => "json",
        };
        write!(f, "{name}")
    }
}

#[derive(TypedBuilder, Debug, Clone, PartialEq, Eq)]
#[builder(doc)]
/// Selects which report sections are printed and how.
pub struct ReportConfig {
    /// Print minimum, maximum and average
    #[builder(default = true)]
    pub statistics:    bool,
    /// Print the perfect score count
    #[builder(default = true)]
    pub perfect_count: bool,
    /// Print the letter grade histogram
    #[builder(default = true)]
    pub grade_counts:  bool,
    /// Frame the report with the title banner and separators
    #[builder(default = false)]
    pub banner:        bool,
    /// Output format
    #[builder(default)]
    pub format:        Format,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Parses a seed value, recording `origin` for the error message.
pub fn parse_seed(value: &str, origin: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidSeed {
        value:  value.to_string(),
        origin: origin.to_string(),
    })
}

/// Reads the seed from the environment, if one is set.
pub fn seed_from_env() -> Result<Option<u64>, ConfigError> {
    match std::env::var(SEED_ENV) {
        Ok(value) if !value.trim().is_empty() => parse_seed(&value, SEED_ENV).map(Some),
        _ => Ok(None),
    }
}

/// Reads the default output format from the environment, if one is set.
pub fn format_from_env() -> Result<Option<Format>, ConfigError> {
    match std::env::var(FORMAT_ENV) {
        Ok(value) if !value.trim().is_empty() => value.parse().map(Some),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_print_everything_as_text() {
        let config = ReportConfig::default();
        assert!(config.statistics && config.perfect_count && config.grade_counts);
        assert!(!config.banner);
        assert_eq!(config.format, Format::Text);
    }

    #[test]
    fn builder_overrides() {
        let config = ReportConfig::builder()
            .perfect_count(false)
            .format(Format::Json)
            .build();
        assert!(!config.perfect_count);
        assert!(config.statistics);
        assert_eq!(config.format, Format::Json);
    }

    #[test]
    fn format_parsing() {
        assert_eq!(" TABLE ".parse::<Format>(), Ok(Format::Table));
        assert_eq!("json".parse::<Format>(), Ok(Format::Json));
        assert_eq!("csv".parse::<Format>(), Err(ConfigError::UnknownFormat("csv".into())));
    }

    #[test]
    fn seed_parsing() {
        assert_eq!(parse_seed("11111", "test"), Ok(11111));
        assert!(matches!(
            parse_seed("-4", "test"),
            Err(ConfigError::InvalidSeed { origin, .. }) if origin == "test"
        ));
    }
}
