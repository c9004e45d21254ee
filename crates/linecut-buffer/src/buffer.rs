//! In-memory line buffers
//!
//! A [`LineBuffer`] is a file's text split into lines. Each line keeps its
//! terminator, so concatenating the lines rebuilds the original text
//! byte-for-byte, including `\r\n` endings and a missing final newline.

use crate::hash::ContentHash;

/// Ordered sequence of lines read from a file
///
/// # Invariants
/// For buffers built with [`LineBuffer::parse`]:
/// - Every line except possibly the last ends with `\n`
/// - No line is empty (an empty text has zero lines)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    /// Split text after every `\n`
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(str::to_owned).collect(),
        }
    }

    /// Build from lines that already carry their terminators
    #[inline]
    #[must_use]
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Number of lines
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when the buffer holds no lines
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// All lines in order
    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Line at zero-based `index`, terminator included
    #[inline]
    #[must_use]
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    #[inline]
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Rebuild the full text
    #[must_use]
    pub fn to_text(&self) -> String {
        self.lines.concat()
    }

    /// Size of the rebuilt text in bytes
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.lines.iter().map(String::len).sum()
    }

    /// Hash of the rebuilt text
    #[must_use]
    pub fn hash(&self) -> ContentHash {
        ContentHash::compute_parts(self.lines.iter().map(String::as_str))
    }
}

impl From<&str> for LineBuffer {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl FromIterator<String> for LineBuffer {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}
