//! linecut command-line front end
//!
//! Parses arguments into an [`EditPlan`](linecut_layer::EditPlan), runs it
//! through the [`EditLayer`] and renders the [`EditReport`].
//!
//! # Quick Start
//!
//! ```text
//! linecut                              # lines 823-1404 of ./App.tsx
//! linecut App.tsx 822..1404            # same, zero-based half-open
//! linecut App.tsx --lines 823-1404 -n  # dry run
//! linecut --plan trim.toml --json
//! ```

pub mod args;
pub mod logging;

pub use args::{command, Invocation, OutputFormat, Overrides, Verbosity};

use anyhow::Context;
use linecut_layer::{EditLayer, EditReport};

/// Resolve the plan and run it
///
/// # Errors
/// Fails if the plan cannot be resolved or the edit fails
pub async fn run(invocation: &Invocation) -> anyhow::Result<EditReport> {
    let plan = invocation.resolve_plan().await?;
    tracing::debug!("Resolved plan: {:?}", plan);

    EditLayer::new()
        .run(&plan)
        .await
        .with_context(|| format!("failed to edit {}", plan.target.display()))
}

/// Render a report for stdout
///
/// # Errors
/// Fails only if JSON serialization fails
pub fn render(report: &EditReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(report.summary()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("failed to serialize report")
        }
    }
}
