//! Price retrieval boundary
//!
//! The analyzer never does I/O. Hosts implement [`PriceSource`] over their
//! market-data provider and hand it to [`analyze_symbols`].

use crate::config::{Granularity, HistorySpan};
use crate::{AnalysisError, PatternAnalysis, PatternAnalyzer, PriceSeries, Result};

/// Abstract interface for fetching close histories.
///
/// Failures (unknown symbol, network, ...) must be reported as
/// [`AnalysisError::DataRetrieval`].
pub trait PriceSource: Send + Sync {
    fn fetch(&self, symbol: &str, span: HistorySpan, granularity: Granularity) -> Result<PriceSeries>;
}

/// Fetch a series and reject empty or wrongly-grained results.
pub fn fetch_checked<S: PriceSource + ?Sized>(
    source: &S,
    symbol: &str,
    span: HistorySpan,
    granularity: Granularity,
) -> Result<PriceSeries> {
    let series = source.fetch(symbol, span, granularity)?;
    if series.is_empty() {
        return Err(AnalysisError::DataRetrieval {
            symbol: symbol.to_string(),
            reason: format!("no data for {span} at {granularity}"),
        });
    }
    if series.granularity() != granularity {
        return Err(AnalysisError::DataRetrieval {
            symbol: symbol.to_string(),
            reason: format!("requested {granularity}, received {}", series.granularity()),
        });
    }
    log::debug!(
        "{symbol} data range: {:?} to {:?}, {} points",
        series.first_timestamp(),
        series.last_timestamp(),
        series.len()
    );
    Ok(series)
}

/// Fetch both series with the analyzer's granularity and analyze them.
pub fn analyze_symbols<S: PriceSource + ?Sized>(
    source: &S,
    analyzer: &PatternAnalyzer,
    subject_symbol: &str,
    reference_symbol: &str,
) -> Result<PatternAnalysis> {
    let granularity = analyzer.config().granularity;
    let subject = fetch_checked(source, subject_symbol, granularity.subject_span(), granularity)?;
    let reference = fetch_checked(
        source,
        reference_symbol,
        granularity.reference_span(),
        granularity,
    )?;
    analyzer.analyze(&subject, &reference)
}
