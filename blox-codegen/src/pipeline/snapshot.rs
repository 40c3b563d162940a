//! Per-phase pipeline snapshots for `--visualize`.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};

use blox_ir::RegistryIR;
use eyre::{Context, Result};
use serde::Serialize;

use super::{CompilationContext, Diagnostic, Plugin};
use crate::ComputedData;

/// Pipeline state after one phase.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSnapshot {
    pub phase: String,
    /// Available after the expand phase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ir: Option<RegistryIR>,
    /// Available after the analyze phase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computed: Option<ComputedData>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Captures a [`PhaseSnapshot`] after every phase, optionally writing each
/// one to `<dir>/<phase>.json` as soon as it is taken.
pub struct SnapshotPlugin {
    snapshots: RwLock<Vec<PhaseSnapshot>>,
    output_dir: Option<PathBuf>,
}

impl SnapshotPlugin {
    pub fn new() -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: None,
        }
    }

    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: Some(output_dir.into()),
        }
    }

    pub fn snapshots(&self) -> Vec<PhaseSnapshot> {
        self.snapshots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Write every collected snapshot to `dir`.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<()> {
        let dir = dir.as_ref();
        for snapshot in self.snapshots() {
            write_snapshot(dir, &snapshot)?;
        }
        Ok(())
    }
}

fn write_snapshot(dir: &Path, snapshot: &PhaseSnapshot) -> Result<()> {
    fs::create_dir_all(dir).wrap_err_with(|| format!("failed to create {}", dir.display()))?;
    let path = dir.join(format!("{}.json", snapshot.phase));
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(&path, json).wrap_err_with(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), "wrote phase snapshot");
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
        let snapshot = PhaseSnapshot {
            phase: phase.to_string(),
            ir: ctx.ir.clone(),
            computed: ctx.computed.clone(),
            diagnostics: ctx.diagnostics.clone(),
        };

        if let Some(dir) = &self.output_dir {
            write_snapshot(dir, &snapshot)?;
        }

        self.snapshots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(snapshot);
        Ok(())
    }
}
