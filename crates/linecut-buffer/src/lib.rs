//! linecut line buffers
//!
//! Text split into lines, with positional deletion of a half-open range.
//!
//! # Core Concepts
//!
//! - [`LineBuffer`]: a file's lines, each keeping its terminator
//! - [`LineRange`]: zero-based half-open span `[start, end)`
//! - [`LineDeletion`]: pure `(buffer, range) -> buffer` with bounds handling
//! - [`ContentHash`]: 32-byte Blake3 hash of the full text
//!
//! # Example
//!
//! ```rust
//! use linecut_buffer::{LineBuffer, LineDeletion, LineRange};
//!
//! let buffer = LineBuffer::parse("keep\ndrop\ndrop\nkeep\n");
//! let range: LineRange = "1..3".parse().unwrap();
//! let outcome = LineDeletion::new(range).apply(&buffer).unwrap();
//!
//! assert_eq!(outcome.buffer.to_text(), "keep\nkeep\n");
//! assert_eq!(outcome.removed(), 2);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod buffer;
mod delta;
mod hash;
mod range;

// Re-exports
pub use buffer::LineBuffer;
pub use delta::{BoundsPolicy, DeletionBuilder, DeletionOutcome, DeltaError, LineDeletion};
pub use hash::{ContentHash, HashError};
pub use range::{LineRange, RangeError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn parse_delete_rebuild() {
        let text = "header\n// obsolete 1\n// obsolete 2\nfooter";
        let buffer = LineBuffer::parse(text);
        let base = buffer.hash();

        let deletion = DeletionBuilder::new()
            .range("2-3".parse().unwrap())
            .base_hash(base)
            .build()
            .unwrap();
        let outcome = deletion.apply(&buffer).unwrap();

        assert_eq!(outcome.buffer.to_text(), "header\nfooter");
        assert_ne!(outcome.buffer.hash(), base);
    }
}
