//! Testing utilities for linecut workspace
//!
//! Shared test helpers and fixtures.

#![allow(missing_docs)]

use linecut_buffer::LineBuffer;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Text of `n` lines, `original line 1\n` through `original line n\n`
pub fn numbered_text(n: usize) -> String {
    (1..=n).map(|i| format!("original line {i}\n")).collect()
}

/// The one-based line `n` as written by [`numbered_text`]
pub fn numbered_line(n: usize) -> String {
    format!("original line {n}\n")
}

/// A temporary directory holding one file
///
/// The directory (and file) is removed on drop.
pub struct Fixture {
    dir: TempDir,
    pub path: PathBuf,
}

impl Fixture {
    /// Write `text` to `name` inside a fresh temporary directory
    pub fn with_text(name: &str, text: &str) -> Self {
        Self::with_bytes(name, text.as_bytes())
    }

    /// Write raw `bytes`, which need not be UTF-8
    pub fn with_bytes(name: &str, bytes: &[u8]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        fs::write(&path, bytes).unwrap();
        Self { dir, path }
    }

    /// Fixture file of `n` numbered lines
    pub fn numbered(name: &str, n: usize) -> Self {
        Self::with_text(name, &numbered_text(n))
    }

    /// Path of another file in the same directory
    pub fn sibling(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn read_bytes(&self) -> Vec<u8> {
        fs::read(&self.path).unwrap()
    }

    pub fn read(&self) -> String {
        fs::read_to_string(&self.path).unwrap()
    }

    pub fn read_buffer(&self) -> LineBuffer {
        LineBuffer::parse(&self.read())
    }
}
