//! Presentation-facing view of a match
//!
//! A [`Projection`] compounds a record's leading-window percentage
//! differences onto the subject's last known close, one granularity step per
//! entry. Charting and table rendering are left to the host.

use chrono::{DateTime, Utc};

use crate::{MatchRecord, PatternAnalysis};

/// One step of a projected price path
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ProjectedPoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

/// One row of the leading-window table
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TableRow {
    pub date: String,
    pub percentage_difference: f64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Projection {
    pub label: String,
    pub start: usize,
    pub points: Vec<ProjectedPoint>,
    pub rows: Vec<TableRow>,
}

impl Projection {
    /// Render `record` as the `rank`-th projection, using at most `horizon`
    /// leading entries.
    pub fn from_record(rank: usize, record: &MatchRecord, analysis: &PatternAnalysis, horizon: usize) -> Self {
        let step = analysis.granularity().step();
        let leading = &record.leading()[..horizon.min(record.leading().len())];

        let mut price = analysis.last_close();
        let mut timestamp = analysis.last_timestamp();
        let points = leading
            .iter()
            .map(|e| {
                price *= 1.0 + e.percentage_difference / 100.0;
                timestamp += step;
                ProjectedPoint { timestamp, price }
            })
            .collect();

        let rows = leading
            .iter()
            .map(|e| TableRow {
                date: e.label.clone(),
                percentage_difference: e.percentage_difference,
            })
            .collect();

        Self {
            label: format!("Pattern {rank} ({})", record.pattern()),
            start: record.start(),
            points,
            rows,
        }
    }

    /// Last projected price, if any step was projected
    pub fn final_price(&self) -> Option<f64> {
        self.points.last().map(|p| p.price)
    }

    /// Table rows for the leading entries that were projected
    pub fn table_rows(&self) -> &[TableRow] {
        &self.rows
    }
}
