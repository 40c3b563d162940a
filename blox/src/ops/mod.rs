//! Core operations.
//!
//! This module contains the business logic for blox commands,
//! separated from CLI argument parsing and output rendering.

pub mod bake;
pub mod check;
pub mod clean;
pub mod list;
pub mod resolve;

pub use bake::bake;
pub use check::check;
pub use clean::clean;
pub use list::list;
pub use resolve::resolve;

use blox_codegen::pipeline::{CompilationContext, Pipeline, Severity};
use blox_manifest::{Config, ProjectConfig};
use eyre::{Result, eyre};

/// Run `pipeline`, turning error diagnostics into the failure message.
pub(crate) fn run_pipeline(
    pipeline: Pipeline,
    config: Config,
    project: ProjectConfig,
) -> Result<CompilationContext> {
    let (ctx, result) = pipeline.check(config, project);
    match result {
        Ok(()) => Ok(ctx),
        Err(err) => {
            let errors: Vec<String> = ctx.errors().map(|d| format!("  - {}", d.message)).collect();
            if errors.is_empty() {
                Err(err.wrap_err("Pipeline failed"))
            } else {
                Err(eyre!("{}:\n{}", err, errors.join("\n")))
            }
        }
    }
}

/// Warning messages collected by the pipeline.
pub(crate) fn warnings(ctx: &CompilationContext) -> Vec<String> {
    ctx.diagnostics
        .iter()
        .filter(|d| matches!(d.severity, Severity::Warning))
        .map(|d| d.message.clone())
        .collect()
}
