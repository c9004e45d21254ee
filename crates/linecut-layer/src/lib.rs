//! linecut Edit Layer
//!
//! The boundary between files on disk and the pure line deletion in
//! `linecut-buffer`.
//!
//! # Core Operations
//!
//! - **Ingress**: Read a file into a [`LineBuffer`](linecut_buffer::LineBuffer)
//! - **Apply**: Run a [`LineDeletion`](linecut_buffer::LineDeletion) on it
//! - **Egress**: Write the result back, overwriting the file
//!
//! # Architecture
//!
//! ```text
//! EditPlan → File System → LineBuffer → LineDeletion → LineBuffer' → File System
//!                                                          ↓
//!                                                     EditReport
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use linecut_layer::{EditLayer, EditPlan};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let layer = EditLayer::new();
//! let plan = EditPlan::new("App.tsx", "823-1404".parse()?);
//!
//! let report = layer.run(&plan).await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod error;
pub mod layer;
pub mod plan;
pub mod report;

// Re-exports for convenience
pub use error::{ApplyError, LayerError, LayerResult, PlanError, ReadError, WriteError};
pub use layer::{EditLayer, Ingress, SourceMetadata};
pub use plan::{EditPlan, DEFAULT_RANGE, DEFAULT_TARGET};
pub use report::EditReport;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the edit layer
    pub use crate::error::{LayerError, PlanError};
    pub use crate::layer::EditLayer;
    pub use crate::plan::EditPlan;
    pub use crate::report::EditReport;
    pub use linecut_buffer::{BoundsPolicy, ContentHash, LineBuffer, LineDeletion, LineRange};
}
