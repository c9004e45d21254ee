//! Error types for the edit layer
//!
//! Provides error handling for:
//! - Read operations (file → line buffer)
//! - Apply operations (line deletion)
//! - Write operations (line buffer → file)
//! - Plan loading (TOML → edit plan)

use linecut_buffer::{DeltaError, HashError, RangeError};
use std::path::PathBuf;

/// Errors while reading the target file (ingress)
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// Missing file, permission denied, invalid UTF-8
    #[error("io error reading {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size limit
    #[error("{path} is too large: {bytes} bytes (max: {max})")]
    TooLarge {
        /// File being read
        path: PathBuf,
        /// Size on disk
        bytes: u64,
        /// Configured limit
        max: u64,
    },
}

impl ReadError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors while applying a deletion
#[derive(Debug, thiserror::Error)]
pub enum ApplyError {
    /// File content changed since the plan was written
    #[error("{path} does not match the expected content: {source}")]
    Stale {
        /// Target file
        path: PathBuf,
        /// Rejected deletion
        #[source]
        source: DeltaError,
    },

    /// Any other deletion failure
    #[error("cannot delete lines from {path}: {source}")]
    Delta {
        /// Target file
        path: PathBuf,
        /// Rejected deletion
        #[source]
        source: DeltaError,
    },
}

impl ApplyError {
    /// Wrap a deletion error with the file it concerns
    pub fn for_path(path: impl Into<PathBuf>, source: DeltaError) -> Self {
        let path = path.into();
        match source {
            DeltaError::BaseMismatch { .. } => Self::Stale { path, source },
            source => Self::Delta { path, source },
        }
    }
}

/// Errors while writing the result (egress)
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// IO error during file write
    #[error("io error writing {path}: {source}")]
    Io {
        /// Destination file
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },
}

impl WriteError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors while loading an edit plan
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// Plan file could not be read
    #[error("io error reading plan {path}: {source}")]
    Io {
        /// Plan file
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },

    /// Plan file is not valid TOML for a plan
    #[error("invalid plan: {0}")]
    Toml(#[from] toml::de::Error),

    /// Range could not be built
    #[error("invalid range in plan: {0}")]
    Range(#[from] RangeError),

    /// Expected hash is malformed
    #[error("invalid expect_hash in plan: {0}")]
    Hash(#[from] HashError),

    /// Neither `range` nor `start`/`end` were given, or both were
    #[error("plan must give either `range` or both `start` and `end`")]
    MissingRange,
}

/// Combined edit layer error
#[derive(Debug, thiserror::Error)]
pub enum LayerError {
    /// Target could not be read
    #[error(transparent)]
    Read(#[from] ReadError),

    /// Deletion was refused
    #[error(transparent)]
    Apply(#[from] ApplyError),

    /// Result could not be written
    #[error(transparent)]
    Write(#[from] WriteError),

    /// Plan could not be loaded
    #[error(transparent)]
    Plan(#[from] PlanError),
}

/// Result type alias for layer operations
pub type LayerResult<T> = Result<T, LayerError>;
