//! # Pattern Echo - up/down pattern search over price history
//!
//! Encodes the recent up/down moves of a subject asset, looks for the same
//! run of moves in a long reference history, and reports window statistics
//! around every earlier occurrence.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use pattern_echo::prelude::*;
//!
//! let start = Utc.with_ymd_and_hms(2015, 1, 1, 0, 0, 0).unwrap();
//!
//! // Reference: a short climb, then a repeating up/down wave
//! let reference_closes: Vec<f64> = (0..20)
//!     .map(|i| 80.0 + i as f64)
//!     .chain((0..380).map(|i| 100.0 + ((i % 10) as f64 - 5.0).abs()))
//!     .collect();
//! let reference = PriceSeries::from_closes(Granularity::Daily, start, &reference_closes).unwrap();
//!
//! // Subject: the same wave, recent window only
//! let subject_closes: Vec<f64> =
//!     (0..60).map(|i| 50.0 + ((i % 10) as f64 - 5.0).abs()).collect();
//! let subject = PriceSeries::from_closes(Granularity::Daily, start, &subject_closes).unwrap();
//!
//! let analyzer = AnalyzerBuilder::new(Granularity::Daily).build().unwrap();
//! let analysis = analyzer.analyze(&subject, &reference).unwrap();
//!
//! for record in analysis.records() {
//!     println!("{} -> {:+.2}%", record.start(), record.leading_average());
//! }
//! ```

pub mod config;
pub mod pattern;
pub mod projection;
pub mod source;
pub mod window;

pub mod prelude {
    pub use crate::{
        // Config
        config::{AnalysisConfig, Granularity, HistorySpan},
        // Patterns
        pattern::{encode, encode_closes, find_matches, Direction, DirectionPattern},
        // Rendering
        projection::{ProjectedPoint, Projection, TableRow},
        // Retrieval
        source::{analyze_symbols, PriceSource},
        // Windows
        window::{aggregate, recent_entries, WindowEntry, WindowStats},
        // Parallel
        analyze_parallel,
        // Errors
        AnalysisError,
        // Engine
        AnalyzerBuilder,
        MatchRecord,
        PatternAnalysis,
        PatternAnalyzer,
        // Types
        Period,
        PricePoint,
        PriceSeries,
        Result,
        SubjectAnalysis,
        SubjectError,
    };
}

use chrono::{DateTime, Utc};

use config::{AnalysisConfig, Granularity};
use pattern::DirectionPattern;
use window::{WindowEntry, WindowStats};

// ============================================================
// ERRORS
// ============================================================

pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors that can occur during pattern analysis
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    #[error("Insufficient data: need {need} points, got {got}")]
    InsufficientData { need: usize, got: usize },

    #[error("Search pattern is empty")]
    EmptyPattern,

    #[error("{field} = {value} out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Window is empty")]
    EmptyWindow,

    #[error("Failed to retrieve {symbol}: {reason}")]
    DataRetrieval { symbol: String, reason: String },

    #[error("Invalid price at index {index}: {reason}")]
    InvalidPrice { index: usize, reason: &'static str },

    #[error("Timestamps not strictly ascending at index {index}")]
    UnorderedSeries { index: usize },

    #[error("Granularity mismatch: expected {expected}, got {got}")]
    GranularityMismatch {
        expected: Granularity,
        got: Granularity,
    },

    #[error("Invalid value: {0}")]
    InvalidValue(&'static str),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

// ============================================================
// VALIDATED TYPES
// ============================================================

/// Window or pattern length (must be > 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period(usize);

impl Period {
    /// Create a new Period, validating value is > 0
    pub fn new(value: usize) -> Result<Self> {
        if value == 0 {
            return Err(AnalysisError::InvalidValue("Period must be > 0"));
        }
        Ok(Self(value))
    }

    #[doc(hidden)]
    pub const fn new_const(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl serde::Serialize for Period {
    fn serialize<S: serde::Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.serialize(s)
    }
}

impl<'de> serde::Deserialize<'de> for Period {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        let value = usize::deserialize(d)?;
        Period::new(value).map_err(serde::de::Error::custom)
    }
}

// ============================================================
// PRICE DATA
// ============================================================

/// One close at one instant
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
}

impl PricePoint {
    pub fn new(timestamp: DateTime<Utc>, close: f64) -> Self {
        Self { timestamp, close }
    }

    fn validate(&self, index: usize) -> Result<()> {
        if self.close.is_nan() {
            return Err(AnalysisError::InvalidPrice {
                index,
                reason: "NaN close",
            });
        }
        if self.close.is_infinite() {
            return Err(AnalysisError::InvalidPrice {
                index,
                reason: "Infinite close",
            });
        }
        // Percentage differences divide by closes
        if self.close <= 0.0 {
            return Err(AnalysisError::InvalidPrice {
                index,
                reason: "close <= 0",
            });
        }
        Ok(())
    }
}

/// Closes ordered by strictly ascending timestamp, at one granularity.
///
/// Validated on construction; immutable afterwards.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PriceSeries {
    granularity: Granularity,
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(granularity: Granularity, points: Vec<PricePoint>) -> Result<Self> {
        for (i, point) in points.iter().enumerate() {
            point.validate(i)?;
        }
        if let Some(i) = points
            .windows(2)
            .position(|w| w[1].timestamp <= w[0].timestamp)
        {
            return Err(AnalysisError::UnorderedSeries { index: i + 1 });
        }
        Ok(Self {
            granularity,
            points,
        })
    }

    /// Build a series from bare closes, one granularity step apart from `start`.
    pub fn from_closes(granularity: Granularity, start: DateTime<Utc>, closes: &[f64]) -> Result<Self> {
        let step = granularity.step();
        let points = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PricePoint::new(start + step * i as i32, close))
            .collect();
        Self::new(granularity, points)
    }

    #[inline]
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&PricePoint> {
        self.points.get(index)
    }

    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    pub fn first_timestamp(&self) -> Option<DateTime<Utc>> {
        self.points.first().map(|p| p.timestamp)
    }

    pub fn last_timestamp(&self) -> Option<DateTime<Utc>> {
        self.points.last().map(|p| p.timestamp)
    }

    pub fn last_close(&self) -> Option<f64> {
        self.points.last().map(|p| p.close)
    }

    /// Display label for the point at `index`, formatted for this granularity.
    pub fn label(&self, index: usize) -> Option<String> {
        self.points
            .get(index)
            .map(|p| self.granularity.format_label(p.timestamp))
    }

    /// The most recent `n` points. Fails when fewer are available.
    pub fn tail(&self, n: usize) -> Result<PriceSeries> {
        if self.points.len() < n {
            return Err(AnalysisError::InsufficientData {
                need: n,
                got: self.points.len(),
            });
        }
        Ok(Self {
            granularity: self.granularity,
            points: self.points[self.points.len() - n..].to_vec(),
        })
    }
}

// ============================================================
// ANALYSIS RESULTS
// ============================================================

/// One historical occurrence of the current pattern in the reference series
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MatchRecord {
    start: usize,
    pattern: DirectionPattern,
    stats: WindowStats,
}

impl MatchRecord {
    /// Start position in the reference direction pattern
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn pattern_length(&self) -> usize {
        self.pattern.len()
    }

    #[inline]
    pub fn pattern(&self) -> &DirectionPattern {
        &self.pattern
    }

    /// The matched historical segment
    #[inline]
    pub fn trailing(&self) -> &[WindowEntry] {
        &self.stats.trailing
    }

    /// Window adjacent to the match, walked backwards from `start`
    #[inline]
    pub fn leading(&self) -> &[WindowEntry] {
        &self.stats.leading
    }

    /// Mean percentage difference of the leading window
    #[inline]
    pub fn leading_average(&self) -> f64 {
        self.stats.leading_average
    }

    #[inline]
    pub fn stats(&self) -> &WindowStats {
        &self.stats
    }
}

/// Outcome of one analysis run.
///
/// An empty `records()` with `total_matches() < min_matches` is a valid
/// "not enough history" result, not a failure.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PatternAnalysis {
    granularity: Granularity,
    current_pattern: DirectionPattern,
    total_matches: usize,
    records: Vec<MatchRecord>,
    recent: Vec<WindowEntry>,
    last_close: f64,
    last_timestamp: DateTime<Utc>,
}

impl PatternAnalysis {
    #[inline]
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// The subject's most recent pattern that was searched for
    #[inline]
    pub fn current_pattern(&self) -> &DirectionPattern {
        &self.current_pattern
    }

    /// Raw number of matches found, before any policy was applied
    #[inline]
    pub fn total_matches(&self) -> usize {
        self.total_matches
    }

    #[inline]
    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    #[inline]
    pub fn has_matches(&self) -> bool {
        !self.records.is_empty()
    }

    /// The subject's own recent entries, for comparison against the matches
    #[inline]
    pub fn recent(&self) -> &[WindowEntry] {
        &self.recent
    }

    /// Last known subject close, the base of every projection
    #[inline]
    pub fn last_close(&self) -> f64 {
        self.last_close
    }

    #[inline]
    pub fn last_timestamp(&self) -> DateTime<Utc> {
        self.last_timestamp
    }

    /// Projections of the first `limit` records, `horizon` steps each.
    pub fn projections(&self, limit: usize, horizon: usize) -> Vec<projection::Projection> {
        self.records
            .iter()
            .take(limit)
            .enumerate()
            .map(|(i, record)| projection::Projection::from_record(i + 1, record, self, horizon))
            .collect()
    }
}

// ============================================================
// ANALYZER
// ============================================================

/// Main pattern analysis engine
#[derive(Debug, Clone)]
pub struct PatternAnalyzer {
    config: AnalysisConfig,
}

impl PatternAnalyzer {
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Current pattern of a subject series: the last `pattern_length`
    /// symbols of its most recent `subject_window` points.
    pub fn current_pattern(&self, subject: &PriceSeries) -> Result<DirectionPattern> {
        let recent = subject.tail(self.config.subject_window.get())?;
        let encoded = pattern::encode(&recent)?;
        Ok(encoded.tail(self.config.pattern_length.get()))
    }

    /// Search the reference history for the subject's current pattern.
    ///
    /// If several matches cannot be aggregated, the error of the
    /// chronologically first one is returned.
    pub fn analyze(&self, subject: &PriceSeries, reference: &PriceSeries) -> Result<PatternAnalysis> {
        let cfg = &self.config;
        self.check_granularity(subject)?;
        self.check_granularity(reference)?;

        let recent = subject.tail(cfg.subject_window.get())?;
        let current = pattern::encode(&recent)?.tail(cfg.pattern_length.get());
        log::debug!("Current pattern being searched: {current}");

        let exclusion = cfg.reference_exclusion;
        if reference.len() <= exclusion {
            return Err(AnalysisError::InsufficientData {
                need: exclusion + 1,
                got: reference.len(),
            });
        }
        let searchable = pattern::encode(reference)?.truncate_end(exclusion)?;
        log::debug!(
            "Reference range {:?} to {:?}, {} points, {} searchable symbols",
            reference.first_timestamp(),
            reference.last_timestamp(),
            reference.len(),
            searchable.len()
        );

        let matches = pattern::find_matches(&current, &searchable)?;
        log::debug!("Found {} matching patterns in reference history", matches.len());

        let records = if matches.len() < cfg.min_matches.get() {
            log::info!(
                "Discarding {} matches for {current}: fewer than {}",
                matches.len(),
                cfg.min_matches.get()
            );
            Vec::new()
        } else {
            self.build_records(reference, &current, &matches)?
        };
        log::debug!("Found {} unique pattern matches", records.len());

        let recent_entries = window::recent_entries(&recent, cfg.pattern_length.get())?;

        let (last_close, last_timestamp) = recent
            .points()
            .last()
            .map(|p| (p.close, p.timestamp))
            .ok_or(AnalysisError::InsufficientData { need: 1, got: 0 })?;

        Ok(PatternAnalysis {
            granularity: cfg.granularity,
            current_pattern: current,
            total_matches: matches.len(),
            records,
            recent: recent_entries,
            last_close,
            last_timestamp,
        })
    }

    // ===========================================
    // Internal helpers
    // ===========================================

    /// Aggregate every match except the chronologically first one.
    ///
    /// Windows are measured on the full reference series, so they may reach
    /// into the exclusion zone.
    fn build_records(
        &self,
        reference: &PriceSeries,
        current: &DirectionPattern,
        matches: &[usize],
    ) -> Result<Vec<MatchRecord>> {
        let mut starts: Vec<usize> = if matches.len() > 1 {
            matches[1..].to_vec()
        } else {
            matches.to_vec()
        };
        starts.dedup();

        let trailing = self.config.trailing_length.get();
        let leading = self.config.leading_length.get();

        let results: Vec<Result<MatchRecord>> = starts
            .into_par_iter()
            .map(|start| {
                window::aggregate(reference, start, trailing, leading).map(|stats| MatchRecord {
                    start,
                    pattern: current.clone(),
                    stats,
                })
            })
            .collect();

        // Sequential pass keeps the first failing start deterministic
        results.into_iter().collect()
    }

    fn check_granularity(&self, series: &PriceSeries) -> Result<()> {
        if series.granularity() != self.config.granularity {
            return Err(AnalysisError::GranularityMismatch {
                expected: self.config.granularity,
                got: series.granularity(),
            });
        }
        Ok(())
    }
}

/// One-shot analysis with the default windows of `subject`'s granularity,
/// overriding only the subject window and the reference exclusion zone.
pub fn analyze(
    subject: &PriceSeries,
    reference: &PriceSeries,
    subject_window_size: usize,
    reference_exclusion_size: usize,
) -> Result<PatternAnalysis> {
    AnalyzerBuilder::new(subject.granularity())
        .subject_window(subject_window_size)
        .reference_exclusion(reference_exclusion_size)
        .build()?
        .analyze(subject, reference)
}

// ============================================================
// BUILDER
// ============================================================

/// Builder for creating PatternAnalyzer instances
#[derive(Debug, Clone)]
pub struct AnalyzerBuilder {
    granularity: Granularity,
    subject_window: usize,
    reference_exclusion: usize,
    pattern_length: usize,
    trailing_length: usize,
    leading_length: usize,
    min_matches: usize,
}

impl AnalyzerBuilder {
    /// Start from the defaults of `granularity`
    pub fn new(granularity: Granularity) -> Self {
        let defaults = AnalysisConfig::for_granularity(granularity);
        Self {
            granularity,
            subject_window: defaults.subject_window.get(),
            reference_exclusion: defaults.reference_exclusion,
            pattern_length: defaults.pattern_length.get(),
            trailing_length: defaults.trailing_length.get(),
            leading_length: defaults.leading_length.get(),
            min_matches: defaults.min_matches.get(),
        }
    }

    /// Number of most recent subject points the pattern is drawn from
    pub fn subject_window(mut self, points: usize) -> Self {
        self.subject_window = points;
        self
    }

    /// Number of trailing reference periods hidden from the search
    pub fn reference_exclusion(mut self, periods: usize) -> Self {
        self.reference_exclusion = periods;
        self
    }

    pub fn pattern_length(mut self, symbols: usize) -> Self {
        self.pattern_length = symbols;
        self
    }

    pub fn trailing_length(mut self, points: usize) -> Self {
        self.trailing_length = points;
        self
    }

    pub fn leading_length(mut self, points: usize) -> Self {
        self.leading_length = points;
        self
    }

    /// Below this many raw matches the run yields no records
    pub fn min_matches(mut self, count: usize) -> Self {
        self.min_matches = count;
        self
    }

    /// Build the analyzer
    pub fn build(self) -> Result<PatternAnalyzer> {
        PatternAnalyzer::new(AnalysisConfig {
            granularity: self.granularity,
            subject_window: Period::new(self.subject_window)?,
            reference_exclusion: self.reference_exclusion,
            pattern_length: Period::new(self.pattern_length)?,
            trailing_length: Period::new(self.trailing_length)?,
            leading_length: Period::new(self.leading_length)?,
            min_matches: Period::new(self.min_matches)?,
        })
    }
}

// ============================================================
// PARALLEL ANALYSIS
// ============================================================

use rayon::prelude::*;

/// Result of analyzing a single subject
#[derive(Debug)]
pub struct SubjectAnalysis {
    pub symbol: String,
    pub analysis: PatternAnalysis,
}

/// Error from analyzing a single subject
#[derive(Debug)]
pub struct SubjectError {
    pub symbol: String,
    pub error: AnalysisError,
}

/// Analyze several subjects against one shared reference series
pub fn analyze_parallel<'a, I>(
    analyzer: &PatternAnalyzer,
    subjects: I,
    reference: &PriceSeries,
) -> (Vec<SubjectAnalysis>, Vec<SubjectError>)
where
    I: IntoParallelIterator<Item = (&'a str, &'a PriceSeries)>,
{
    let results: Vec<_> = subjects
        .into_par_iter()
        .map(|(symbol, series)| {
            analyzer
                .analyze(series, reference)
                .map(|analysis| SubjectAnalysis {
                    symbol: symbol.to_string(),
                    analysis,
                })
                .map_err(|error| SubjectError {
                    symbol: symbol.to_string(),
                    error,
                })
        })
        .collect();

    let mut successes = Vec::new();
    let mut errors = Vec::new();

    for result in results {
        match result {
            Ok(r) => successes.push(r),
            Err(e) => errors.push(e),
        }
    }

    (successes, errors)
}

// ============================================================
// TESTS
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
    }

    fn daily(closes: &[f64]) -> PriceSeries {
        PriceSeries::from_closes(Granularity::Daily, start(), closes).unwrap()
    }

    /// Repeating 10-period wave: 5 down moves then 5 up moves
    fn wave(n: usize, base: f64) -> Vec<f64> {
        (0..n)
            .map(|i| base + ((i % 10) as f64 - 5.0).abs())
            .collect()
    }

    /// 20 rising points, then the wave. Keeps every kept match far enough
    /// from the start for a full leading window.
    fn reference() -> PriceSeries {
        let mut closes: Vec<f64> = (0..20).map(|i| 80.0 + i as f64).collect();
        closes.extend(wave(180, 100.0));
        daily(&closes)
    }

    #[test]
    fn test_period_validation() {
        assert!(Period::new(1).is_ok());
        assert!(Period::new(100).is_ok());
        assert!(Period::new(0).is_err());
    }

    #[test]
    fn test_series_rejects_bad_prices() {
        let err = PriceSeries::from_closes(Granularity::Daily, start(), &[1.0, f64::NAN]);
        assert!(matches!(err, Err(AnalysisError::InvalidPrice { index: 1, .. })));

        let err = PriceSeries::from_closes(Granularity::Daily, start(), &[1.0, 0.0]);
        assert!(matches!(err, Err(AnalysisError::InvalidPrice { index: 1, .. })));
    }

    #[test]
    fn test_series_rejects_unordered() {
        let t = start();
        let points = vec![
            PricePoint::new(t, 1.0),
            PricePoint::new(t + chrono::Duration::days(1), 1.0),
            PricePoint::new(t + chrono::Duration::days(1), 1.0),
        ];
        assert!(matches!(
            PriceSeries::new(Granularity::Daily, points),
            Err(AnalysisError::UnorderedSeries { index: 2 })
        ));
    }

    #[test]
    fn test_series_tail() {
        let s = daily(&[1.0, 2.0, 3.0, 4.0]);
        let t = s.tail(2).unwrap();
        assert_eq!(t.closes(), vec![3.0, 4.0]);
        assert_eq!(t.first_timestamp(), s.get(2).map(|p| p.timestamp));
        assert!(s.tail(5).is_err());
    }

    #[test]
    fn test_series_label() {
        let s = daily(&[1.0, 2.0]);
        assert_eq!(s.label(1).unwrap(), "02-Jan-2020");
        assert!(s.label(2).is_none());
    }

    #[test]
    fn test_builder_defaults() {
        let analyzer = AnalyzerBuilder::new(Granularity::Hourly).build().unwrap();
        assert_eq!(analyzer.config().subject_window.get(), 720);
        assert_eq!(analyzer.config().reference_exclusion, 720);
        assert_eq!(analyzer.config().pattern_length.get(), 8);
    }

    #[test]
    fn test_builder_rejects_zero() {
        assert!(AnalyzerBuilder::new(Granularity::Daily)
            .leading_length(0)
            .build()
            .is_err());
    }

    #[test]
    fn test_current_pattern() {
        let analyzer = AnalyzerBuilder::new(Granularity::Daily).build().unwrap();
        let subject = daily(&wave(40, 50.0));
        let p = analyzer.current_pattern(&subject).unwrap();
        assert_eq!(p.len(), 8);
        // Last closes: ..., i=31..39 -> 54,53,52,51,50,51,52,53,54
        assert_eq!(p.to_string(), "DDDDUUUU");
    }

    #[test]
    fn test_analyze_wave() {
        let analyzer = AnalyzerBuilder::new(Granularity::Daily).build().unwrap();
        let subject = daily(&wave(40, 50.0));
        let reference = reference();

        let analysis = analyzer.analyze(&subject, &reference).unwrap();
        // "DDDDUUUU" starts at symbol 21, 31, ... (wave offset 20).
        // Searchable symbols: 199 - 30 = 169 -> starts 21..=161 step 10 = 15 matches
        assert_eq!(analysis.total_matches(), 15);
        assert_eq!(analysis.records().len(), 14);
        assert_eq!(analysis.records()[0].start(), 31);
        assert!(analysis
            .records()
            .windows(2)
            .all(|w| w[0].start() < w[1].start()));
        assert_eq!(analysis.recent().len(), 8);
        assert_eq!(analysis.last_close(), 54.0);
    }

    #[test]
    fn test_analyze_granularity_mismatch() {
        let analyzer = AnalyzerBuilder::new(Granularity::Daily).build().unwrap();
        let subject =
            PriceSeries::from_closes(Granularity::Hourly, start(), &wave(40, 50.0)).unwrap();
        let reference = reference();
        assert!(matches!(
            analyzer.analyze(&subject, &reference),
            Err(AnalysisError::GranularityMismatch { .. })
        ));
    }

    #[test]
    fn test_analyze_free_fn() {
        let subject = daily(&wave(40, 50.0));
        let reference = reference();
        let analysis = analyze(&subject, &reference, 30, 30).unwrap();
        assert_eq!(analysis.records().len(), 14);
    }

    #[test]
    fn test_parallel_analysis() {
        let analyzer = AnalyzerBuilder::new(Granularity::Daily).build().unwrap();
        let reference = reference();
        let good = daily(&wave(40, 50.0));
        let short = daily(&wave(10, 50.0));

        let subjects: Vec<(&str, &PriceSeries)> = vec![("ETH", &good), ("SOL", &short)];
        let (results, errors) = analyze_parallel(&analyzer, subjects, &reference);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].symbol, "ETH");
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors[0].error,
            AnalysisError::InsufficientData { need: 30, got: 10 }
        ));
    }
}
