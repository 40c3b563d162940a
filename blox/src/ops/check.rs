//! Check operation - config validation.

use std::path::Path;

use blox_codegen::pipeline::{Pipeline, Severity};
use blox_manifest::{Config, ProjectConfig};

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the pipeline and collects every diagnostic instead of stopping at
/// the first failing phase.
pub fn check(config: Config, project: ProjectConfig, config_dir: &Path) -> CheckReport {
    let section_count = config.section_count();
    let template_count = config.template_count();
    let plugin_count = config.plugins.len();

    let (ctx, result) = Pipeline::new().check(config, project);

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = if let Some(loc) = &diag.location {
            format!("{}\n  --> {}", diag.message, loc)
        } else {
            diag.message.clone()
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    // A phase can fail without leaving a diagnostic behind.
    if let Err(err) = result
        && errors.is_empty()
    {
        errors.push(format!("{:#}", err));
    }

    CheckReport {
        config_dir: config_dir.to_path_buf(),
        errors,
        warnings,
        infos,
        section_count,
        template_count,
        plugin_count,
        block_count: ctx.computed.as_ref().map(|c| c.block_count),
    }
}
