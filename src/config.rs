//! Analysis configuration
//!
//! Window sizes are named constants so the aggregation semantics stay
//! auditable. [`AnalysisConfig::for_granularity`] gives the presets for daily
//! and hourly data; [`crate::AnalyzerBuilder`] overrides individual fields.
//!
//! # Example
//!
//! ```rust
//! use pattern_echo::config::{AnalysisConfig, Granularity};
//!
//! let cfg = AnalysisConfig::for_granularity(Granularity::Hourly);
//! assert_eq!(cfg.subject_window.get(), 720);
//! assert!(cfg.validate().is_ok());
//! ```

use std::fmt;

use chrono::{DateTime, Duration, Utc};

use crate::{AnalysisError, Period, Result};

// ============================================================
// WINDOW CONSTANTS
// ============================================================

/// Symbols in the current pattern
pub const PATTERN_LENGTH: usize = 8;
/// Points in the trailing window (the matched segment)
pub const TRAILING_LENGTH: usize = 8;
/// Points in the leading window
pub const LEADING_LENGTH: usize = 13;
/// Runs with fewer raw matches than this produce no records
pub const MIN_MATCHES: usize = 3;
/// Steps in a rendered projection
pub const PROJECTION_HORIZON: usize = 10;
/// Records rendered as projections
pub const MAX_RENDERED_MATCHES: usize = 5;

/// Subject window and reference exclusion zone, daily data (one month)
pub const DAILY_WINDOW: usize = 30;
/// Subject window and reference exclusion zone, hourly data (one month)
pub const HOURLY_WINDOW: usize = 720;

// ============================================================
// GRANULARITY
// ============================================================

/// Time step between consecutive points of a series
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Daily,
    Hourly,
}

impl Granularity {
    /// Interval code as used by market-data providers
    pub fn code(self) -> &'static str {
        match self {
            Granularity::Daily => "1d",
            Granularity::Hourly => "1h",
        }
    }

    pub fn step(self) -> Duration {
        match self {
            Granularity::Daily => Duration::days(1),
            Granularity::Hourly => Duration::hours(1),
        }
    }

    /// strftime format for entry labels: date only, or date and time
    pub fn label_format(self) -> &'static str {
        match self {
            Granularity::Daily => "%d-%b-%Y",
            Granularity::Hourly => "%d-%b-%Y %H:%M",
        }
    }

    pub fn format_label(self, timestamp: DateTime<Utc>) -> String {
        timestamp.format(self.label_format()).to_string()
    }

    pub fn default_subject_window(self) -> usize {
        match self {
            Granularity::Daily => DAILY_WINDOW,
            Granularity::Hourly => HOURLY_WINDOW,
        }
    }

    pub fn default_exclusion(self) -> usize {
        match self {
            Granularity::Daily => DAILY_WINDOW,
            Granularity::Hourly => HOURLY_WINDOW,
        }
    }

    /// History requested for the subject asset
    pub fn subject_span(self) -> HistorySpan {
        HistorySpan::Years(1)
    }

    /// History requested for the reference asset
    pub fn reference_span(self) -> HistorySpan {
        HistorySpan::Years(10)
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Granularity {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "1d" | "daily" => Ok(Granularity::Daily),
            "1h" | "hourly" => Ok(Granularity::Hourly),
            other => Err(AnalysisError::InvalidConfig(format!(
                "unknown granularity '{other}'"
            ))),
        }
    }
}

/// Amount of history to request from a [`crate::source::PriceSource`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum HistorySpan {
    Years(u32),
}

impl fmt::Display for HistorySpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistorySpan::Years(n) => write!(f, "{n}y"),
        }
    }
}

// ============================================================
// ANALYSIS CONFIG
// ============================================================

/// Settings for one [`crate::PatternAnalyzer`]
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnalysisConfig {
    pub granularity: Granularity,
    /// Most recent subject points the current pattern is drawn from
    pub subject_window: Period,
    /// Trailing reference periods hidden from the search (may be 0)
    pub reference_exclusion: usize,
    pub pattern_length: Period,
    pub trailing_length: Period,
    pub leading_length: Period,
    pub min_matches: Period,
}

impl AnalysisConfig {
    pub fn for_granularity(granularity: Granularity) -> Self {
        Self {
            granularity,
            subject_window: Period::new_const(granularity.default_subject_window()),
            reference_exclusion: granularity.default_exclusion(),
            pattern_length: Period::new_const(PATTERN_LENGTH),
            trailing_length: Period::new_const(TRAILING_LENGTH),
            leading_length: Period::new_const(LEADING_LENGTH),
            min_matches: Period::new_const(MIN_MATCHES),
        }
    }

    /// Cross-field checks. Field-level positivity is enforced by [`Period`].
    pub fn validate(&self) -> Result<()> {
        // pattern_length symbols need pattern_length + 1 points
        if self.subject_window.get() <= self.pattern_length.get() {
            return Err(AnalysisError::InvalidConfig(format!(
                "subject_window ({}) must exceed pattern_length ({})",
                self.subject_window.get(),
                self.pattern_length.get()
            )));
        }
        if self.trailing_length < self.pattern_length {
            return Err(AnalysisError::InvalidConfig(format!(
                "trailing_length ({}) must be >= pattern_length ({})",
                self.trailing_length.get(),
                self.pattern_length.get()
            )));
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::for_granularity(Granularity::default())
    }
}

// ============================================================
// TESTS
// ============================================================
