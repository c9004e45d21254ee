//! Edit reports

use linecut_buffer::{ContentHash, LineRange};
use serde::Serialize;
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

/// What a run did to the target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditReport {
    /// File that was read
    pub target: PathBuf,
    /// `None` for a dry run
    pub written_to: Option<PathBuf>,
    /// Range as asked for
    pub requested: LineRange,
    /// Range actually removed, after clamping
    pub applied: LineRange,
    /// Lines removed; the length of `applied`
    pub removed: usize,
    /// Line count of the target as read
    pub lines_before: usize,
    /// Line count of the edited text
    pub lines_after: usize,
    /// `applied` differs from `requested`
    pub clamped: bool,
    /// Hash of the text before the edit
    pub hash_before: ContentHash,
    /// Hash of the text after the edit
    pub hash_after: ContentHash,
}

impl EditReport {
    /// True when nothing was written
    #[inline]
    #[must_use]
    pub fn is_dry_run(&self) -> bool {
        self.written_to.is_none()
    }

    /// One human-readable summary line
    #[must_use]
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl Display for EditReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_dry_run() {
            f.write_str("[dry run] ")?;
        }
        write!(
            f,
            "Deleted {} lines. New file has {} lines.",
            self.removed, self.lines_after
        )
    }
}
