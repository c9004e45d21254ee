//! Edit plans
//!
//! An [`EditPlan`] names the file to edit, the range to delete and how to
//! treat bounds and the write. Plans come from [`EditPlan::default`] (the
//! built-in edit), from a TOML file, or are assembled by the caller.
//!
//! # Plan file
//!
//! ```toml
//! target = "App.tsx"
//! range = "823-1404"      # or: start = 822, end = 1404
//! bounds = "strict"       # "clamp" (default) or "strict"
//! expect_hash = "5d41..." # optional blake3 hex of the file before editing
//! output = "App.trimmed.tsx"
//! dry_run = false
//! ```

use crate::error::PlanError;
use linecut_buffer::{BoundsPolicy, ContentHash, LineDeletion, LineRange};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File edited when nothing else is specified
pub const DEFAULT_TARGET: &str = "App.tsx";

/// Lines 823-1404 (one-based, inclusive) of the default target
pub const DEFAULT_RANGE: LineRange = LineRange::spanning(822, 582);

/// Everything needed to run one deletion against the filesystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditPlan {
    /// File to read
    pub target: PathBuf,
    /// Lines to remove
    pub range: LineRange,
    /// Handling of a range past the end of the file
    pub bounds: BoundsPolicy,
    /// Hash the target must have before editing
    pub expect_hash: Option<ContentHash>,
    /// Write the result here instead of over the target
    pub output: Option<PathBuf>,
    /// Compute and report without writing
    pub dry_run: bool,
}

impl EditPlan {
    /// Plan deleting `range` from `target`, written back in place
    #[must_use]
    pub fn new(target: impl Into<PathBuf>, range: LineRange) -> Self {
        Self {
            target: target.into(),
            range,
            bounds: BoundsPolicy::default(),
            expect_hash: None,
            output: None,
            dry_run: false,
        }
    }

    /// Set how an out-of-range end is handled
    #[must_use]
    pub fn with_bounds(mut self, bounds: BoundsPolicy) -> Self {
        self.bounds = bounds;
        self
    }

    /// Refuse to edit unless the target hashes to `hash`
    #[must_use]
    pub fn with_expect_hash(mut self, hash: ContentHash) -> Self {
        self.expect_hash = Some(hash);
        self
    }

    /// Write to `output` and leave the target untouched
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Skip the write
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Where the edited text goes
    #[must_use]
    pub fn destination(&self) -> &Path {
        self.output.as_deref().unwrap_or(&self.target)
    }

    /// The pure deletion this plan performs
    #[must_use]
    pub fn deletion(&self) -> LineDeletion {
        let deletion = LineDeletion::new(self.range).with_policy(self.bounds);
        match self.expect_hash {
            Some(hash) => deletion.with_base_hash(hash),
            None => deletion,
        }
    }

    /// Parse a TOML plan
    ///
    /// `target` falls back to [`DEFAULT_TARGET`]; the range is mandatory.
    ///
    /// # Errors
    /// - [`PlanError::Toml`] for malformed TOML or unknown keys
    /// - [`PlanError::MissingRange`] if the range is absent or given twice
    /// - [`PlanError::Range`] / [`PlanError::Hash`] for invalid values
    pub fn from_toml_str(text: &str) -> Result<Self, PlanError> {
        let file: PlanFile = toml::from_str(text)?;

        let range = match (file.range, file.start, file.end) {
            (Some(range), None, None) => range.parse()?,
            (None, Some(start), Some(end)) => LineRange::new(start, end)?,
            _ => return Err(PlanError::MissingRange),
        };
        let expect_hash = file
            .expect_hash
            .map(|hash| hash.parse::<ContentHash>())
            .transpose()?;

        Ok(Self {
            target: file.target.unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET)),
            range,
            bounds: file.bounds.unwrap_or_default(),
            expect_hash,
            output: file.output,
            dry_run: file.dry_run.unwrap_or(false),
        })
    }

    /// Read and parse a TOML plan file
    ///
    /// # Errors
    /// [`PlanError::Io`] if the file cannot be read, otherwise as
    /// [`EditPlan::from_toml_str`]
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, PlanError> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| PlanError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!("Loaded plan from {}", path.display());
        Self::from_toml_str(&text)
    }
}

impl Default for EditPlan {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET, DEFAULT_RANGE)
    }
}

/// On-disk shape of a plan
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlanFile {
    target: Option<PathBuf>,
    range: Option<String>,
    start: Option<usize>,
    end: Option<usize>,
    bounds: Option<BoundsPolicy>,
    expect_hash: Option<String>,
    output: Option<PathBuf>,
    dry_run: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_is_builtin_edit() {
        let plan = EditPlan::default();
        assert_eq!(plan.target, PathBuf::from("App.tsx"));
        assert_eq!(plan.range.to_string(), "822..1404");
        assert_eq!(plan.bounds, BoundsPolicy::Clamp);
        assert_eq!(plan.destination(), Path::new("App.tsx"));
        assert!(!plan.dry_run);
    }

    #[test]
    fn toml_with_range_string() {
        let plan = EditPlan::from_toml_str(
            r#"
            target = "src/App.tsx"
            range = "823-1404"
            bounds = "strict"
            output = "out.tsx"
            dry_run = true
            "#,
        )
        .unwrap();
        assert_eq!(plan.target, PathBuf::from("src/App.tsx"));
        assert_eq!(plan.range, DEFAULT_RANGE);
        assert_eq!(plan.bounds, BoundsPolicy::Strict);
        assert_eq!(plan.destination(), Path::new("out.tsx"));
        assert!(plan.dry_run);
    }

    #[test]
    fn toml_with_start_end() {
        let plan = EditPlan::from_toml_str("start = 2\nend = 5\n").unwrap();
        assert_eq!(plan.target, PathBuf::from(DEFAULT_TARGET));
        assert_eq!(plan.range, LineRange::new(2, 5).unwrap());
    }

    #[test]
    fn toml_expect_hash() {
        let hash = ContentHash::compute(b"text");
        let plan =
            EditPlan::from_toml_str(&format!("range = \"0..1\"\nexpect_hash = \"{hash}\"\n"))
                .unwrap();
        assert_eq!(plan.expect_hash, Some(hash));
        assert_eq!(plan.deletion().base_hash(), Some(&hash));
    }

    #[test]
    fn toml_requires_exactly_one_range_form() {
        assert!(matches!(
            EditPlan::from_toml_str("target = \"a.txt\"\n"),
            Err(PlanError::MissingRange)
        ));
        assert!(matches!(
            EditPlan::from_toml_str("start = 1\n"),
            Err(PlanError::MissingRange)
        ));
        assert!(matches!(
            EditPlan::from_toml_str("range = \"1..2\"\nstart = 1\nend = 2\n"),
            Err(PlanError::MissingRange)
        ));
    }

    #[test]
    fn toml_invalid_values() {
        assert!(matches!(
            EditPlan::from_toml_str("range = \"9..3\"\n"),
            Err(PlanError::Range(_))
        ));
        assert!(matches!(
            EditPlan::from_toml_str("start = 9\nend = 3\n"),
            Err(PlanError::Range(_))
        ));
        assert!(matches!(
            EditPlan::from_toml_str("range = \"0..1\"\nexpect_hash = \"abc\"\n"),
            Err(PlanError::Hash(_))
        ));
        assert!(matches!(
            EditPlan::from_toml_str("range = \"0..1\"\nbounds = \"loose\"\n"),
            Err(PlanError::Toml(_))
        ));
    }

    #[test]
    fn toml_rejects_unknown_keys() {
        assert!(matches!(
            EditPlan::from_toml_str("range = \"0..1\"\nbackup = true\n"),
            Err(PlanError::Toml(_))
        ));
    }

    #[test]
    fn builder_methods() {
        let plan = EditPlan::new("a.txt", LineRange::new(1, 2).unwrap())
            .with_bounds(BoundsPolicy::Strict)
            .with_output("b.txt")
            .with_dry_run(true);
        assert_eq!(plan.destination(), Path::new("b.txt"));
        assert_eq!(plan.deletion().policy(), BoundsPolicy::Strict);
        assert!(plan.deletion().base_hash().is_none());
    }
}
