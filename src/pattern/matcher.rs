//! Exact pattern search
//!
//! Naive sliding comparison. Needles are short (8 symbols by default) so the
//! O(n*m) worst case never matters in practice.

use super::DirectionPattern;
use crate::{AnalysisError, Result};

/// Every start index `k` where `haystack[k..k + needle.len()] == needle`.
///
/// Ascending, overlapping matches included. An empty result is not an error.
pub fn find_matches(needle: &DirectionPattern, haystack: &DirectionPattern) -> Result<Vec<usize>> {
    if needle.is_empty() {
        return Err(AnalysisError::EmptyPattern);
    }

    let needle = needle.as_slice();
    Ok(haystack
        .as_slice()
        .windows(needle.len())
        .enumerate()
        .filter_map(|(k, w)| (w == needle).then_some(k))
        .collect())
}
