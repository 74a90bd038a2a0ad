#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Number of grades produced by a single generator run
pub const GRADE_COUNT: usize = 1000;

/// Lowest valid percentage grade
pub const MIN_GRADE: i32 = 0;

/// Highest valid percentage grade, also the perfect score
pub const MAX_GRADE: i32 = 100;

/// Base the lognormal term is subtracted from
pub const GRADE_CEILING: f64 = 100.0;

/// Flat curve added after the lognormal term is subtracted
pub const GRADE_CURVE: f64 = 20.0;

/// Scale applied to the standard-normal draw (sigma of the lognormal)
pub const NORMAL_SCALE: f64 = 0.25;

/// Location added to the scaled draw (mu of the lognormal)
pub const NORMAL_SHIFT: f64 = 3.5;

/// Environment variable consulted for a seed when `--seed` is not given
pub const SEED_ENV: &str = "GRADEGEN_SEED";

/// Environment variable consulted for a default output format
pub const FORMAT_ENV: &str = "GRADEGEN_FORMAT";

/// Title printed by the banner
pub const BANNER_TITLE: &str = "GRADE GENERATOR";

/// Description printed under the banner title
pub const BANNER_DESCRIPTION: &str = "This demo generates 1000 random grades of lognormal \
                                      distribution and then displays basic statistics of the \
                                      grade distribution.";

/// Separator line framing the report when the banner is enabled
pub const BANNER_RULE: &str = "------";
