//! Direction encoder
//!
//! Symbol `i` of the output describes the move from close `i` to close
//! `i + 1` of the input, so the pattern is one symbol shorter than its series.

use super::{Direction, DirectionPattern};
use crate::{AnalysisError, PriceSeries, Result};

/// Encode a series' closes into a direction pattern.
pub fn encode(series: &PriceSeries) -> Result<DirectionPattern> {
    encode_closes(&series.closes())
}

/// Encode raw closes. Needs at least two values.
pub fn encode_closes(closes: &[f64]) -> Result<DirectionPattern> {
    if closes.len() < 2 {
        return Err(AnalysisError::InsufficientData {
            need: 2,
            got: closes.len(),
        });
    }

    Ok(closes
        .windows(2)
        .map(|w| Direction::between(w[0], w[1]))
        .collect())
}
