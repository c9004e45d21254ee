//! Half-open line ranges
//!
//! Provides [`LineRange`], the zero-based `[start, end)` span of lines a
//! deletion removes.
//!
//! Two text forms are accepted:
//! - `822..1404`: zero-based, half-open
//! - `823-1404`: one-based, inclusive (line numbers as an editor shows them)
//!
//! Both of the examples above name the same range.

use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;
use std::ops::Range;
use std::str::FromStr;

/// Zero-based half-open span of line indices
///
/// # Invariants
/// - `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineRange {
    start: usize,
    end: usize,
}

impl LineRange {
    /// Create a range covering indices `start..end`
    ///
    /// # Errors
    /// Returns [`RangeError::Inverted`] if `start > end`
    #[inline]
    pub const fn new(start: usize, end: usize) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// Empty range positioned at `at`
    #[inline]
    #[must_use]
    pub const fn empty(at: usize) -> Self {
        Self { start: at, end: at }
    }

    /// Range of `len` lines beginning at `start`
    ///
    /// The end saturates at `usize::MAX`.
    #[inline]
    #[must_use]
    pub const fn spanning(start: usize, len: usize) -> Self {
        Self {
            start,
            end: start.saturating_add(len),
        }
    }

    /// Convert one-based inclusive line numbers
    ///
    /// `first - 1 == last` yields an empty range.
    ///
    /// # Errors
    /// - [`RangeError::ZeroLine`] if `first` is 0
    /// - [`RangeError::Inverted`] if `last < first - 1`
    pub const fn from_one_based_inclusive(first: usize, last: usize) -> Result<Self, RangeError> {
        if first == 0 {
            return Err(RangeError::ZeroLine);
        }
        Self::new(first - 1, last)
    }

    #[inline]
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    #[inline]
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Number of indices covered
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// True when every index is below `len`
    #[inline]
    #[must_use]
    pub const fn fits_within(&self, len: usize) -> bool {
        self.end <= len
    }

    /// Shrink both ends to at most `len`
    ///
    /// A range starting past `len` becomes the empty range at `len`.
    #[inline]
    #[must_use]
    pub fn clamp_to(&self, len: usize) -> Self {
        Self {
            start: self.start.min(len),
            end: self.end.min(len),
        }
    }

    /// As a std range, for slicing
    #[inline]
    #[must_use]
    pub const fn as_std(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl Display for LineRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl FromStr for LineRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some((start, end)) = s.split_once("..") {
            return Self::new(parse_index(start)?, parse_index(end)?);
        }
        if let Some((first, last)) = s.split_once('-') {
            return Self::from_one_based_inclusive(parse_index(first)?, parse_index(last)?);
        }
        Err(RangeError::Syntax(s.to_string()))
    }
}

fn parse_index(text: &str) -> Result<usize, RangeError> {
    let text = text.trim();
    text.parse().map_err(|source| RangeError::Number {
        input: text.to_string(),
        source,
    })
}

impl From<LineRange> for Range<usize> {
    fn from(range: LineRange) -> Self {
        range.as_std()
    }
}

impl serde::Serialize for LineRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for LineRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Errors when building or parsing a range
#[derive(Debug, thiserror::Error)]
pub enum RangeError {
    /// Start lies after end
    #[error("range start {start} is after end {end}")]
    Inverted { start: usize, end: usize },

    /// One-based line numbers start at 1
    #[error("line numbers start at 1")]
    ZeroLine,

    /// Neither `a..b` nor `a-b`
    #[error("invalid range '{0}': expected START..END (zero-based) or FIRST-LAST (one-based)")]
    Syntax(String),

    /// A bound is not a non-negative integer
    #[error("invalid line index '{input}': {source}")]
    Number {
        input: String,
        #[source]
        source: ParseIntError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_inverted() {
        assert!(matches!(
            LineRange::new(5, 3),
            Err(RangeError::Inverted { start: 5, end: 3 })
        ));
    }

    #[test]
    fn len_and_contains() {
        let range = LineRange::new(822, 1404).unwrap();
        assert_eq!(range.len(), 582);
        assert!(range.contains(822));
        assert!(range.contains(1403));
        assert!(!range.contains(1404));
        assert!(!range.contains(821));
    }

    #[test]
    fn empty_range() {
        let range = LineRange::empty(7);
        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
        assert!(!range.contains(7));
    }

    #[test]
    fn spanning_counts_from_start() {
        assert_eq!(LineRange::spanning(822, 582), LineRange::new(822, 1404).unwrap());
        assert!(LineRange::spanning(3, 0).is_empty());
    }

    #[test]
    fn spanning_saturates_at_usize_max() {
        let range = LineRange::spanning(usize::MAX - 1, 5);
        assert_eq!(range.end(), usize::MAX);
        assert_eq!(range.len(), 1);
        assert!(range.start() <= range.end());
    }

    #[test]
    fn one_based_inclusive_conversion() {
        let range = LineRange::from_one_based_inclusive(823, 1404).unwrap();
        assert_eq!(range, LineRange::new(822, 1404).unwrap());
    }

    #[test]
    fn one_based_single_line() {
        let range = LineRange::from_one_based_inclusive(1, 1).unwrap();
        assert_eq!(range.as_std(), 0..1);
    }

    #[test]
    fn one_based_empty_and_invalid() {
        assert!(LineRange::from_one_based_inclusive(5, 4).unwrap().is_empty());
        assert!(matches!(
            LineRange::from_one_based_inclusive(0, 4),
            Err(RangeError::ZeroLine)
        ));
        assert!(matches!(
            LineRange::from_one_based_inclusive(5, 2),
            Err(RangeError::Inverted { .. })
        ));
    }

    #[test]
    fn clamp_to_shorter_length() {
        let range = LineRange::new(10, 50).unwrap();
        assert_eq!(range.clamp_to(20), LineRange::new(10, 20).unwrap());
        assert_eq!(range.clamp_to(5), LineRange::empty(5));
        assert_eq!(range.clamp_to(100), range);
        assert!(range.fits_within(50));
        assert!(!range.fits_within(49));
    }

    #[test]
    fn parse_both_syntaxes() {
        let zero_based: LineRange = "822..1404".parse().unwrap();
        let one_based: LineRange = "823-1404".parse().unwrap();
        assert_eq!(zero_based, one_based);
        assert_eq!(" 3 .. 9 ".parse::<LineRange>().unwrap().as_std(), 3..9);
    }

    #[test]
    fn parse_errors() {
        assert!(matches!("12".parse::<LineRange>(), Err(RangeError::Syntax(_))));
        assert!(matches!(
            "a..3".parse::<LineRange>(),
            Err(RangeError::Number { .. })
        ));
        assert!(matches!(
            "-3-4".parse::<LineRange>(),
            Err(RangeError::Number { .. })
        ));
        assert!(matches!(
            "9..3".parse::<LineRange>(),
            Err(RangeError::Inverted { .. })
        ));
    }

    #[test]
    fn display_is_zero_based() {
        let range: LineRange = "1-3".parse().unwrap();
        assert_eq!(range.to_string(), "0..3");
        assert_eq!(range.to_string().parse::<LineRange>().unwrap(), range);
    }
}
