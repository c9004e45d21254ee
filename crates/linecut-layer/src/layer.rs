//! Edit layer - main entry point
//!
//! Provides the boundary between the filesystem and the pure deletion:
//! - File → line buffer (ingress)
//! - Line deletion (apply)
//! - Line buffer → file (egress)

use crate::error::{ApplyError, LayerResult, ReadError, WriteError};
use crate::plan::EditPlan;
use crate::report::EditReport;
use linecut_buffer::{ContentHash, DeletionOutcome, LineBuffer, LineDeletion};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Result of reading a file
#[derive(Debug, Clone)]
pub struct Ingress {
    /// The file's lines
    pub buffer: LineBuffer,
    /// Source file metadata
    pub metadata: SourceMetadata,
}

/// Source file metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceMetadata {
    /// File path
    pub path: PathBuf,
    /// Content checksum
    pub checksum: ContentHash,
    /// Size in bytes
    pub bytes: u64,
}

/// Edit layer
///
/// The only component that touches the filesystem. Each run reads the whole
/// file and closes it before opening it again for writing.
#[derive(Debug, Clone)]
pub struct EditLayer {
    /// Maximum file size to read (bytes)
    max_file_size: u64,
}

impl EditLayer {
    /// Default read limit
    pub const DEFAULT_MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;

    /// Create layer with the default read limit
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_file_size(Self::DEFAULT_MAX_FILE_SIZE)
    }

    /// Create layer with a specific read limit
    #[inline]
    #[must_use]
    pub fn with_max_file_size(max_file_size: u64) -> Self {
        Self { max_file_size }
    }

    /// Largest target, in bytes, this layer will read
    #[inline]
    #[must_use]
    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    /// Read file into a line buffer (Ingress)
    ///
    /// # Errors
    /// - `ReadError::Io` if the file is missing, unreadable or not UTF-8
    /// - `ReadError::TooLarge` past the read limit
    pub async fn read_ingress(&self, path: impl AsRef<Path>) -> Result<Ingress, ReadError> {
        let path = path.as_ref();

        let size = tokio::fs::metadata(path)
            .await
            .map_err(|e| ReadError::io_error(path, e))?
            .len();
        if size > self.max_file_size {
            return Err(ReadError::TooLarge {
                path: path.to_path_buf(),
                bytes: size,
                max: self.max_file_size,
            });
        }

        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::io_error(path, e))?;
        let buffer = LineBuffer::parse(&text);
        let metadata = SourceMetadata {
            path: path.to_path_buf(),
            checksum: ContentHash::compute(text.as_bytes()),
            bytes: text.len() as u64,
        };

        debug!(
            "Read {} lines ({} bytes) from {} [{}]",
            buffer.len(),
            metadata.bytes,
            path.display(),
            metadata.checksum.short()
        );
        Ok(Ingress { buffer, metadata })
    }

    /// Apply deletion to a read file
    ///
    /// # Errors
    /// - `ApplyError::Stale` if the deletion pins a different base hash
    /// - `ApplyError::Delta` if the strict bounds policy rejects the range
    pub fn apply(
        &self,
        ingress: &Ingress,
        deletion: &LineDeletion,
    ) -> Result<DeletionOutcome, ApplyError> {
        let outcome = deletion
            .apply(&ingress.buffer)
            .map_err(|e| ApplyError::for_path(&ingress.metadata.path, e))?;

        if outcome.clamped() {
            warn!(
                "Range {} exceeds {} lines of {}; deleting {} instead",
                outcome.requested,
                outcome.lines_before,
                ingress.metadata.path.display(),
                outcome.applied
            );
        }
        Ok(outcome)
    }

    /// Write buffer to file, replacing any existing content (Egress)
    ///
    /// # Errors
    /// - `WriteError::Io` if the file cannot be written
    pub async fn write_egress(
        &self,
        buffer: &LineBuffer,
        path: impl AsRef<Path>,
    ) -> Result<(), WriteError> {
        let path = path.as_ref();
        let text = buffer.to_text();
        tokio::fs::write(path, text.as_bytes())
            .await
            .map_err(|e| WriteError::io_error(path, e))?;
        debug!(
            "Wrote {} lines ({} bytes) to {}",
            buffer.len(),
            text.len(),
            path.display()
        );
        Ok(())
    }

    /// Run a plan end to end: read, delete, write back
    ///
    /// Nothing is written on a dry run or when any step fails.
    ///
    /// # Errors
    /// Any `ReadError`, `ApplyError` or `WriteError`, wrapped in `LayerError`
    pub async fn run(&self, plan: &EditPlan) -> LayerResult<EditReport> {
        info!(
            "Deleting lines {} from {}",
            plan.range,
            plan.target.display()
        );

        let ingress = self.read_ingress(&plan.target).await?;
        let outcome = self.apply(&ingress, &plan.deletion())?;

        let written_to = if plan.dry_run {
            info!("Dry run; leaving {} untouched", plan.destination().display());
            None
        } else {
            self.write_egress(&outcome.buffer, plan.destination()).await?;
            Some(plan.destination().to_path_buf())
        };

        let report = EditReport {
            target: plan.target.clone(),
            written_to,
            requested: outcome.requested,
            applied: outcome.applied,
            removed: outcome.removed(),
            lines_before: outcome.lines_before,
            lines_after: outcome.lines_after(),
            clamped: outcome.clamped(),
            hash_before: ingress.metadata.checksum,
            hash_after: outcome.buffer.hash(),
        };
        info!(
            "Removed {} lines, {} remain",
            report.removed, report.lines_after
        );
        Ok(report)
    }
}

impl Default for EditLayer {
    fn default() -> Self {
        Self::new()
    }
}
