//! Window statistics around a match
//!
//! Two windows are measured on the raw reference series, never on the
//! encoded pattern:
//!
//! - **Trailing**: `trailing_length` points from `match_start` forward, each
//!   compared against the point after it:
//!   `(price[i] - price[i+1]) / price[i+1] * 100`.
//! - **Leading**: `leading_length` points from `match_start` backward
//!   (`match_start, match_start - 1, ...`), each compared against the point
//!   before it: `(price[i-1] - price[i]) / price[i] * 100`.
//!
//! The leading window walks back through calendar time. Callers treat it as
//! the post-match outcome; keep the indexing as is.

use chrono::{DateTime, Utc};

use crate::{AnalysisError, PriceSeries, Result};

/// One point of a window with its percentage difference to a neighbour
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WindowEntry {
    pub timestamp: DateTime<Utc>,
    /// Timestamp formatted for the series granularity
    pub label: String,
    pub close: f64,
    pub percentage_difference: f64,
}

/// Statistics for one match
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WindowStats {
    pub trailing: Vec<WindowEntry>,
    pub leading: Vec<WindowEntry>,
    /// Arithmetic mean of the leading percentage differences
    pub leading_average: f64,
}

/// `(value - base) / base * 100`
#[inline]
pub fn percentage_difference(value: f64, base: f64) -> f64 {
    (value - base) / base * 100.0
}

/// Arithmetic mean of the entries' percentage differences.
pub fn mean_difference(entries: &[WindowEntry]) -> Result<f64> {
    if entries.is_empty() {
        return Err(AnalysisError::EmptyWindow);
    }
    let sum: f64 = entries.iter().map(|e| e.percentage_difference).sum();
    Ok(sum / entries.len() as f64)
}

/// Trailing and leading windows for a match at `match_start`.
pub fn aggregate(
    series: &PriceSeries,
    match_start: usize,
    trailing_length: usize,
    leading_length: usize,
) -> Result<WindowStats> {
    if leading_length == 0 {
        return Err(AnalysisError::EmptyWindow);
    }

    let trailing = trailing_window(series, match_start, trailing_length)?;
    let leading = leading_window(series, match_start, leading_length)?;
    let leading_average = mean_difference(&leading)?;

    Ok(WindowStats {
        trailing,
        leading,
        leading_average,
    })
}

/// `length` points from `start`, each against its successor.
pub fn trailing_window(series: &PriceSeries, start: usize, length: usize) -> Result<Vec<WindowEntry>> {
    let points = series.points();
    // Last entry compares against index start + length
    let end = match start.checked_add(length) {
        Some(end) if end < points.len() => end,
        overflowing => {
            return Err(AnalysisError::OutOfRange {
                field: "trailing_end",
                value: overflowing.map_or(i64::MAX, |end| i64::try_from(end).unwrap_or(i64::MAX)),
                min: 0,
                max: points.len() as i64 - 1,
            })
        }
    };

    Ok((start..end)
        .map(|i| entry(series, i, points[i + 1].close))
        .collect())
}

/// `length` points from `start` backwards, each against its predecessor.
///
/// The lowest visited index is `start + 1 - length` and its predecessor must
/// exist too, so `start` must be at least `length`. `start == length - 1`
/// fails even though its lowest visited index is 0. No clamping at the
/// series start.
pub fn leading_window(series: &PriceSeries, start: usize, length: usize) -> Result<Vec<WindowEntry>> {
    let points = series.points();
    if start >= points.len() {
        return Err(AnalysisError::OutOfRange {
            field: "match_start",
            value: i64::try_from(start).unwrap_or(i64::MAX),
            min: 0,
            max: points.len() as i64 - 1,
        });
    }
    if start < length {
        let shortfall = i64::try_from(length - start).unwrap_or(i64::MAX);
        return Err(AnalysisError::OutOfRange {
            field: "leading_start",
            value: -shortfall,
            min: 0,
            max: start as i64,
        });
    }

    Ok((start + 1 - length..=start)
        .rev()
        .map(|i| {
            let current = points[i].close;
            let mut e = entry(series, i, current);
            e.percentage_difference = percentage_difference(points[i - 1].close, current);
            e
        })
        .collect())
}

/// The subject's last `count` points that have a successor, each against it.
pub fn recent_entries(series: &PriceSeries, count: usize) -> Result<Vec<WindowEntry>> {
    if series.len() <= count {
        return Err(AnalysisError::InsufficientData {
            need: count + 1,
            got: series.len(),
        });
    }
    trailing_window(series, series.len() - 1 - count, count)
}

fn entry(series: &PriceSeries, index: usize, base: f64) -> WindowEntry {
    let point = series.points()[index];
    WindowEntry {
        timestamp: point.timestamp,
        label: series.granularity().format_label(point.timestamp),
        close: point.close,
        percentage_difference: percentage_difference(point.close, base),
    }
}
