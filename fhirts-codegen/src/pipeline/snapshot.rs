//! Pipeline snapshot plugin for inspection and debugging.
//!
//! This module provides a plugin that captures the pipeline state after each
//! phase, so the resolved type graph can be examined outside the generator.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};

use eyre::Result;
use fhirts_ir::TypeGraph;
use serde::Serialize;

use super::{CompilationContext, Diagnostic, Plugin};

/// A snapshot of the pipeline state at a specific phase.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSnapshot {
    /// The phase that just completed.
    pub phase: String,

    /// Number of documents loaded (available after "load" phase).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<usize>,

    /// The type graph (available after "resolve" phase).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph: Option<TypeGraph>,

    /// Diagnostics collected so far.
    pub diagnostics: Vec<Diagnostic>,
}

/// A plugin that captures pipeline state after each phase.
///
/// Used by the `--snapshot` flag to write intermediate state for debugging.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new().plugin(SnapshotPlugin::with_output_dir(".fhirts/debug"));
/// let ctx = pipeline.run(config)?;
/// ```
pub struct SnapshotPlugin {
    /// Collected snapshots.
    snapshots: RwLock<Vec<PhaseSnapshot>>,
    /// Output directory for snapshots.
    output_dir: Option<PathBuf>,
}

impl SnapshotPlugin {
    /// Create a new snapshot plugin.
    pub fn new() -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: None,
        }
    }

    /// Create a new snapshot plugin that writes to a directory.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: Some(output_dir.into()),
        }
    }

    /// Get all collected snapshots.
    pub fn snapshots(&self) -> Vec<PhaseSnapshot> {
        self.snapshots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Write all snapshots to `dir`, one `<phase>.json` file each.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<()> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let snapshots = self.snapshots.read().unwrap_or_else(PoisonError::into_inner);
        for snapshot in snapshots.iter() {
            write_snapshot(dir, snapshot)?;
        }

        Ok(())
    }

    fn capture_snapshot(&self, phase: &str, ctx: &CompilationContext) -> PhaseSnapshot {
        let snapshot = PhaseSnapshot {
            phase: phase.to_string(),
            documents: ctx.documents.as_ref().map(|d| d.len()),
            graph: ctx.graph.clone(),
            diagnostics: ctx.diagnostics.clone(),
        };
        self.snapshots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(snapshot.clone());
        snapshot
    }
}

fn write_snapshot(dir: &Path, snapshot: &PhaseSnapshot) -> Result<()> {
    let path = dir.join(format!("{}.json", snapshot.phase));
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(&path, json)?;
    tracing::debug!(path = %path.display(), "wrote snapshot");
    Ok(())
}

impl Default for SnapshotPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        let snapshot = self.capture_snapshot(phase, ctx);

        if let Some(dir) = &self.output_dir {
            fs::create_dir_all(dir)?;
            write_snapshot(dir, &snapshot)?;
        }

        Ok(())
    }
}
