//! Clean operation - remove components of blocks that no longer exist.

use std::path::Path;

use blox_codegen::{Generator, pipeline::Pipeline};
use blox_codegen_react::ReactGenerator;
use blox_manifest::{Config, ProjectConfig};
use eyre::{Context, Result};

use super::{run_pipeline, warnings};
use crate::reports::CleanReport;

/// Options for the clean operation.
pub struct CleanOptions<'a> {
    /// Output directory containing the registry.
    pub output_dir: &'a Path,
    /// Whether to preview without deleting.
    pub dry_run: bool,
}

/// Execute the clean operation.
///
/// Removes generated components whose block is no longer produced by the
/// config. Components the user took ownership of are reported, not deleted.
pub fn clean(config: Config, project: ProjectConfig, opts: CleanOptions) -> Result<CleanReport> {
    let ctx = run_pipeline(Pipeline::new(), config, project)?;
    let warnings = warnings(&ctx);

    let generator = ReactGenerator::from_context(ctx)?;
    let result = if opts.dry_run {
        generator
            .preview_clean(opts.output_dir)
            .wrap_err("Failed to preview clean")?
    } else {
        generator
            .clean(opts.output_dir)
            .wrap_err("Failed to clean orphaned components")?
    };

    Ok(CleanReport {
        dry_run: opts.dry_run,
        warnings,
        deleted: result.deleted,
        skipped: result.skipped,
    })
}
