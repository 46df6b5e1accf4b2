// src/sequence/range.rs

//! Compact range expressions over frame numbers (`1-3,5,7-9`).

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An ordered set of disjoint, non-adjacent closed intervals of frame numbers.
///
/// Singletons are stored as `(n, n)`. The union of the intervals is exactly
/// the set of frames the expression was built from.
///
/// # Examples
///
/// ```
/// use seqls::sequence::RangeExpression;
///
/// let range = RangeExpression::from_frames([9, 1, 2, 3, 5, 7, 8]);
/// assert_eq!(range.to_string(), "1-3,5,7-9");
/// assert_eq!(range.expand().collect::<Vec<_>>(), vec![1, 2, 3, 5, 7, 8, 9]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeExpression {
    intervals: Vec<(u64, u64)>,
}

/// Errors from parsing a rendered range expression.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RangeParseError {
    #[error("empty range expression")]
    Empty,
    #[error("invalid frame number '{0}'")]
    InvalidNumber(String),
    #[error("descending interval '{0}'")]
    Descending(String),
}

impl RangeExpression {
    /// Builds the minimal expression covering exactly `frames`.
    ///
    /// Frames are ordered numerically and duplicates collapse.
    pub fn from_frames<I: IntoIterator<Item = u64>>(frames: I) -> Self {
        let sorted: BTreeSet<u64> = frames.into_iter().collect();
        let mut intervals: Vec<(u64, u64)> = Vec::new();
        for frame in sorted.iter().copied() {
            match intervals.last_mut() {
                Some((_, hi)) if hi.checked_add(1) == Some(frame) => *hi = frame,
                _ => intervals.push((frame, frame)),
            }
        }
        let range = Self { intervals };
        debug_assert!(
            range.expand().eq(sorted.iter().copied()),
            "range expression {} does not reproduce its frames",
            range
        );
        range
    }

    /// Builds an expression from arbitrary closed intervals, merging any that
    /// overlap or touch.
    pub fn from_intervals<I: IntoIterator<Item = (u64, u64)>>(intervals: I) -> Self {
        let mut input: Vec<(u64, u64)> = intervals.into_iter().collect();
        input.sort_unstable();
        let mut merged: Vec<(u64, u64)> = Vec::with_capacity(input.len());
        for (lo, hi) in input {
            match merged.last_mut() {
                Some((_, last_hi)) if lo <= last_hi.saturating_add(1) => {
                    *last_hi = (*last_hi).max(hi);
                }
                _ => merged.push((lo, hi)),
            }
        }
        Self { intervals: merged }
    }

    /// The intervals in ascending order.
    pub fn intervals(&self) -> &[(u64, u64)] {
        &self.intervals
    }

    /// Iterates every frame in ascending order.
    pub fn expand(&self) -> impl Iterator<Item = u64> + '_ {
        self.intervals.iter().flat_map(|&(lo, hi)| lo..=hi)
    }

    /// Total number of frames covered.
    pub fn frame_count(&self) -> u64 {
        self.intervals
            .iter()
            .fold(0u64, |acc, &(lo, hi)| acc.saturating_add((hi - lo).saturating_add(1)))
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn first(&self) -> Option<u64> {
        self.intervals.first().map(|&(lo, _)| lo)
    }

    pub fn last(&self) -> Option<u64> {
        self.intervals.last().map(|&(_, hi)| hi)
    }

    /// Returns `true` when the frames form one unbroken run.
    pub fn is_contiguous(&self) -> bool {
        self.intervals.len() == 1
    }
}

impl fmt::Display for RangeExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &(lo, hi)) in self.intervals.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            if lo == hi {
                write!(f, "{}", lo)?;
            } else {
                write!(f, "{}-{}", lo, hi)?;
            }
        }
        Ok(())
    }
}

impl FromStr for RangeExpression {
    type Err = RangeParseError;

    /// Parses the rendered form back, e.g. `1-3,5,7-9`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(RangeParseError::Empty);
        }
        let parse_frame = |text: &str| {
            text.trim()
                .parse::<u64>()
                .map_err(|_| RangeParseError::InvalidNumber(text.to_string()))
        };
        let mut intervals = Vec::new();
        for part in s.split(',') {
            let interval = match part.split_once('-') {
                Some((lo, hi)) => {
                    let (lo, hi) = (parse_frame(lo)?, parse_frame(hi)?);
                    if lo > hi {
                        return Err(RangeParseError::Descending(part.to_string()));
                    }
                    (lo, hi)
                }
                None => {
                    let frame = parse_frame(part)?;
                    (frame, frame)
                }
            };
            intervals.push(interval);
        }
        Ok(Self::from_intervals(intervals))
    }
}
