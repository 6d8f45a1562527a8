//! Direction patterns
//!
//! A price series is reduced to a sequence of [`Direction`] symbols, one per
//! adjacent pair of closes. Matching then happens over that two-letter
//! alphabet instead of over raw prices.
//!
//! - [`encoder`]: closes -> [`DirectionPattern`]
//! - [`matcher`]: exact (overlapping) sequence search over patterns

pub mod encoder;
pub mod matcher;

pub use encoder::*;
pub use matcher::*;

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::{AnalysisError, Result};

/// Move of one period relative to the period before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Classify a move. Equal closes count as `Up`.
    #[inline]
    pub fn between(previous: f64, current: f64) -> Self {
        if current >= previous {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    #[inline]
    pub fn is_up(self) -> bool {
        matches!(self, Direction::Up)
    }

    #[inline]
    pub fn is_down(self) -> bool {
        matches!(self, Direction::Down)
    }

    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = AnalysisError;

    fn try_from(c: char) -> Result<Self> {
        match c {
            'U' | 'u' => Ok(Direction::Up),
            'D' | 'd' => Ok(Direction::Down),
            _ => Err(AnalysisError::InvalidValue("Direction must be 'U' or 'D'")),
        }
    }
}

/// Ordered run of direction symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct DirectionPattern(Vec<Direction>);

impl DirectionPattern {
    pub fn new(symbols: Vec<Direction>) -> Self {
        Self(symbols)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Direction] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Direction> {
        self.0.iter()
    }

    /// The last `n` symbols (all of them when `n >= len`).
    pub fn tail(&self, n: usize) -> DirectionPattern {
        let start = self.0.len().saturating_sub(n);
        DirectionPattern(self.0[start..].to_vec())
    }

    /// Drop the last `n` symbols.
    ///
    /// Fails when fewer than `n` symbols exist, so an over-long exclusion
    /// never degrades into an empty search corpus.
    pub fn truncate_end(&self, n: usize) -> Result<DirectionPattern> {
        if self.0.len() < n {
            return Err(AnalysisError::InsufficientData {
                need: n,
                got: self.0.len(),
            });
        }
        Ok(DirectionPattern(self.0[..self.0.len() - n].to_vec()))
    }

    pub fn count_up(&self) -> usize {
        self.0.iter().filter(|d| d.is_up()).count()
    }
}

impl Index<usize> for DirectionPattern {
    type Output = Direction;

    fn index(&self, index: usize) -> &Direction {
        &self.0[index]
    }
}

impl From<Vec<Direction>> for DirectionPattern {
    fn from(symbols: Vec<Direction>) -> Self {
        Self(symbols)
    }
}

impl FromIterator<Direction> for DirectionPattern {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DirectionPattern {
    type Item = &'a Direction;
    type IntoIter = std::slice::Iter<'a, Direction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for DirectionPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.0 {
            write!(f, "{}", d.as_char())?;
        }
        Ok(())
    }
}

impl FromStr for DirectionPattern {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self> {
        s.chars().map(Direction::try_from).collect()
    }
}
