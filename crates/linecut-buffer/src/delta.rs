//! Positional line deletion
//!
//! Provides [`LineDeletion`], a pure mapping from a [`LineBuffer`] and a
//! [`LineRange`] to a new buffer with that range excised. Lines outside the
//! range are kept verbatim and in their original order.
//!
//! Deletion by fixed position is not idempotent: applying the same range to
//! an already-edited buffer removes different lines. Pin the expected base
//! hash with [`LineDeletion::with_base_hash`] to reject such a second run.

use crate::buffer::LineBuffer;
use crate::hash::ContentHash;
use crate::range::LineRange;
use serde::{Deserialize, Serialize};

/// What to do with a range that reaches past the end of the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundsPolicy {
    /// Shrink the range to the buffer length
    #[default]
    Clamp,
    /// Refuse to apply
    Strict,
}

/// Deletion of one half-open range of lines
///
/// # Invariants
/// - On success, `lines_after == lines_before - removed`
/// - With a `base_hash`, the buffer must hash to it before anything is removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineDeletion {
    range: LineRange,
    policy: BoundsPolicy,
    base_hash: Option<ContentHash>,
}

impl LineDeletion {
    /// Delete `range`, clamping it to the buffer
    #[inline]
    #[must_use]
    pub const fn new(range: LineRange) -> Self {
        Self {
            range,
            policy: BoundsPolicy::Clamp,
            base_hash: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_policy(mut self, policy: BoundsPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Require the buffer to hash to `hash` before applying
    #[inline]
    #[must_use]
    pub const fn with_base_hash(mut self, hash: ContentHash) -> Self {
        self.base_hash = Some(hash);
        self
    }

    #[inline]
    #[must_use]
    pub const fn range(&self) -> LineRange {
        self.range
    }

    #[inline]
    #[must_use]
    pub const fn policy(&self) -> BoundsPolicy {
        self.policy
    }

    #[inline]
    #[must_use]
    pub const fn base_hash(&self) -> Option<&ContentHash> {
        self.base_hash.as_ref()
    }

    /// Check the pinned base hash, if any
    ///
    /// # Errors
    /// Returns [`DeltaError::BaseMismatch`] if the buffer hash differs
    pub fn validate_base(&self, buffer: &LineBuffer) -> Result<(), DeltaError> {
        let Some(expected) = self.base_hash else {
            return Ok(());
        };
        let actual = buffer.hash();
        if expected != actual {
            return Err(DeltaError::BaseMismatch { expected, actual });
        }
        Ok(())
    }

    /// The range that will actually be removed from a buffer of `len` lines
    ///
    /// # Errors
    /// Returns [`DeltaError::OutOfBounds`] under [`BoundsPolicy::Strict`]
    /// when the range reaches past `len`
    pub fn resolve(&self, len: usize) -> Result<LineRange, DeltaError> {
        if self.range.fits_within(len) {
            return Ok(self.range);
        }
        match self.policy {
            BoundsPolicy::Clamp => Ok(self.range.clamp_to(len)),
            BoundsPolicy::Strict => Err(DeltaError::OutOfBounds {
                range: self.range,
                len,
            }),
        }
    }

    /// Produce a new buffer without the range
    ///
    /// # Errors
    /// - [`DeltaError::BaseMismatch`] if a pinned base hash differs
    /// - [`DeltaError::OutOfBounds`] under the strict policy
    pub fn apply(&self, buffer: &LineBuffer) -> Result<DeletionOutcome, DeltaError> {
        self.validate_base(buffer)?;
        let applied = self.resolve(buffer.len())?;

        let lines = buffer.lines();
        let mut kept = Vec::with_capacity(lines.len() - applied.len());
        kept.extend_from_slice(&lines[..applied.start()]);
        kept.extend_from_slice(&lines[applied.end()..]);

        let outcome = DeletionOutcome {
            buffer: LineBuffer::from_lines(kept),
            requested: self.range,
            applied,
            lines_before: lines.len(),
        };
        debug_assert_eq!(
            outcome.lines_after(),
            outcome.lines_before - outcome.removed()
        );
        Ok(outcome)
    }
}

/// Result of applying a [`LineDeletion`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionOutcome {
    /// The edited buffer
    pub buffer: LineBuffer,
    /// Range as asked for
    pub requested: LineRange,
    /// Range actually removed after bounds handling
    pub applied: LineRange,
    /// Line count of the input buffer
    pub lines_before: usize,
}

impl DeletionOutcome {
    /// Lines actually removed
    #[inline]
    #[must_use]
    pub const fn removed(&self) -> usize {
        self.applied.len()
    }

    #[inline]
    #[must_use]
    pub fn lines_after(&self) -> usize {
        self.buffer.len()
    }

    /// True when the requested range had to be shrunk
    #[inline]
    #[must_use]
    pub fn clamped(&self) -> bool {
        self.requested != self.applied
    }

    /// True when nothing was removed
    #[inline]
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.applied.is_empty()
    }
}

/// Errors specific to line deletion
#[derive(Debug, thiserror::Error)]
pub enum DeltaError {
    /// Buffer is not the text the deletion was written for
    #[error("base hash mismatch: expected {expected}, got {actual}")]
    BaseMismatch {
        expected: ContentHash,
        actual: ContentHash,
    },

    /// Range reaches past the buffer under the strict policy
    #[error("range {range} is out of bounds for {len} lines")]
    OutOfBounds { range: LineRange, len: usize },

    /// Builder was given no range
    #[error("deletion has no range")]
    MissingRange,
}

/// Builder for constructing deletions
#[derive(Debug, Default)]
pub struct DeletionBuilder {
    range: Option<LineRange>,
    policy: BoundsPolicy,
    base_hash: Option<ContentHash>,
}

impl DeletionBuilder {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn range(mut self, range: LineRange) -> Self {
        self.range = Some(range);
        self
    }

    #[inline]
    #[must_use]
    pub fn policy(mut self, policy: BoundsPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[inline]
    #[must_use]
    pub fn base_hash(mut self, hash: ContentHash) -> Self {
        self.base_hash = Some(hash);
        self
    }

    /// Pin the base hash to the buffer's current content
    #[inline]
    #[must_use]
    pub fn for_buffer(self, buffer: &LineBuffer) -> Self {
        self.base_hash(buffer.hash())
    }

    /// Build deletion
    ///
    /// # Errors
    /// Returns [`DeltaError::MissingRange`] if no range was set
    pub fn build(self) -> Result<LineDeletion, DeltaError> {
        let range = self.range.ok_or(DeltaError::MissingRange)?;
        Ok(LineDeletion {
            range,
            policy: self.policy,
            base_hash: self.base_hash,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn numbered(n: usize) -> LineBuffer {
        (0..n).map(|i| format!("line {i}\n")).collect()
    }

    fn range(start: usize, end: usize) -> LineRange {
        LineRange::new(start, end).unwrap()
    }

    #[test]
    fn removes_middle_range() {
        let buffer = LineBuffer::parse("a\nb\nc\nd\ne\n");
        let outcome = LineDeletion::new(range(1, 3)).apply(&buffer).unwrap();
        assert_eq!(outcome.buffer.to_text(), "a\nd\ne\n");
        assert_eq!(outcome.removed(), 2);
        assert_eq!(outcome.lines_before, 5);
        assert_eq!(outcome.lines_after(), 3);
        assert!(!outcome.clamped());
    }

    #[test]
    fn app_tsx_scenario() {
        let buffer = numbered(1500);
        let outcome = LineDeletion::new(range(822, 1404)).apply(&buffer).unwrap();
        assert_eq!(outcome.removed(), 582);
        assert_eq!(outcome.lines_after(), 918);
        assert_eq!(outcome.buffer.line(821), Some("line 821\n"));
        assert_eq!(outcome.buffer.line(822), buffer.line(1404));
        assert_eq!(outcome.buffer.line(917), Some("line 1499\n"));
    }

    #[test]
    fn empty_range_is_noop() {
        let buffer = numbered(10);
        let outcome = LineDeletion::new(LineRange::empty(4)).apply(&buffer).unwrap();
        assert!(outcome.is_noop());
        assert_eq!(outcome.buffer, buffer);
    }

    #[test]
    fn clamp_truncates_past_end() {
        let buffer = numbered(10);
        let outcome = LineDeletion::new(range(6, 40)).apply(&buffer).unwrap();
        assert_eq!(outcome.applied, range(6, 10));
        assert_eq!(outcome.removed(), 4);
        assert_eq!(outcome.lines_after(), 6);
        assert!(outcome.clamped());
    }

    #[test]
    fn clamp_with_start_past_end_removes_nothing() {
        let buffer = numbered(10);
        let outcome = LineDeletion::new(range(822, 1404)).apply(&buffer).unwrap();
        assert!(outcome.is_noop());
        assert_eq!(outcome.buffer, buffer);
        assert!(outcome.clamped());
    }

    #[test]
    fn strict_rejects_past_end() {
        let buffer = numbered(10);
        let result = LineDeletion::new(range(6, 11))
            .with_policy(BoundsPolicy::Strict)
            .apply(&buffer);
        assert!(matches!(
            result,
            Err(DeltaError::OutOfBounds { len: 10, .. })
        ));
    }

    #[test]
    fn strict_accepts_exact_end() {
        let buffer = numbered(10);
        let outcome = LineDeletion::new(range(6, 10))
            .with_policy(BoundsPolicy::Strict)
            .apply(&buffer)
            .unwrap();
        assert_eq!(outcome.lines_after(), 6);
    }

    #[test]
    fn last_line_without_newline_is_kept_verbatim() {
        let buffer = LineBuffer::parse("a\nb\nc");
        let outcome = LineDeletion::new(range(0, 1)).apply(&buffer).unwrap();
        assert_eq!(outcome.buffer.to_text(), "b\nc");
    }

    #[test]
    fn base_hash_guard() {
        let buffer = numbered(5);
        let deletion = LineDeletion::new(range(1, 2)).with_base_hash(buffer.hash());
        let first = deletion.apply(&buffer).unwrap();

        let second = deletion.apply(&first.buffer);
        assert!(matches!(second, Err(DeltaError::BaseMismatch { .. })));
    }

    #[test]
    fn not_idempotent_without_guard() {
        let buffer = numbered(6);
        let deletion = LineDeletion::new(range(1, 3));
        let once = deletion.apply(&buffer).unwrap().buffer;
        let twice = deletion.apply(&once).unwrap().buffer;
        assert_eq!(once.len(), 4);
        assert_eq!(twice.len(), 2);
        assert_eq!(twice.lines(), &["line 0\n", "line 5\n"]);
    }

    #[test]
    fn builder_success() {
        let buffer = numbered(3);
        let deletion = DeletionBuilder::new()
            .range(range(0, 1))
            .policy(BoundsPolicy::Strict)
            .for_buffer(&buffer)
            .build()
            .unwrap();
        assert_eq!(deletion.policy(), BoundsPolicy::Strict);
        assert_eq!(deletion.base_hash(), Some(&buffer.hash()));
    }

    #[test]
    fn builder_missing_range() {
        let result = DeletionBuilder::new().build();
        assert!(matches!(result, Err(DeltaError::MissingRange)));
    }

    #[test]
    fn policy_serde_lowercase() {
        let json = serde_json::to_string(&BoundsPolicy::Strict).unwrap();
        assert_eq!(json, "\"strict\"");
        let back: BoundsPolicy = serde_json::from_str("\"clamp\"").unwrap();
        assert_eq!(back, BoundsPolicy::Clamp);
    }
}
