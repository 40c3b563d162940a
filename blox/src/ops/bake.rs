//! Bake operation - registry generation from the config directory.

use std::path::Path;

use blox_codegen::{
    Generator,
    pipeline::{Pipeline, SnapshotPlugin},
};
use blox_codegen_react::{
    ReactGenerator,
    strategy::{FallbackStrategy, LlmStrategy},
};
use blox_manifest::{Config, ProjectConfig, Strategy};
use eyre::{Context, Result};

use super::{run_pipeline, warnings};
use crate::reports::{
    BakeReport, GenerationResult, PreviewFile, PreviewResult, RegistrySummary, WrittenResult,
};

/// Options for the bake operation.
pub struct BakeOptions<'a> {
    /// Output directory for the registry.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Use the LLM strategy regardless of `blox.toml`.
    pub ai: bool,
    /// Whether to output debug snapshots.
    pub visualize: bool,
}

/// Execute the bake operation.
///
/// Runs the pipeline on the config and writes the registry artifacts and
/// components, or previews them on a dry run.
pub fn bake(config: Config, project: ProjectConfig, opts: BakeOptions) -> Result<BakeReport> {
    let debug_dir = opts.output_dir.join(".blox/debug");

    let mut warnings_out = Vec::new();
    let strategy = select_strategy(&project, opts.ai, &mut warnings_out);

    let mut pipeline = Pipeline::new();
    if opts.visualize {
        pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(&debug_dir));
    }
    let ctx = run_pipeline(pipeline, config, project)?;
    warnings_out.extend(warnings(&ctx));

    let generator = ReactGenerator::from_context(ctx)?.with_strategy(strategy);
    let summary = RegistrySummary::new(&generator);

    let result = if opts.dry_run {
        let files = generator
            .preview()
            .wrap_err("Failed to render registry")?
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let result = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate registry")?;

        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: result.written,
            skipped: result.skipped,
            fallbacks: result.fallbacks,
            orphans: result.orphans,
            debug_dir: opts.visualize.then_some(debug_dir),
        })
    };

    Ok(BakeReport {
        summary,
        warnings: warnings_out,
        result,
    })
}

/// Pick the component strategy. A missing API key is reported once and the
/// whole run uses templates.
fn select_strategy(project: &ProjectConfig, ai: bool, warnings: &mut Vec<String>) -> FallbackStrategy {
    if !ai && project.generator.strategy != Strategy::Llm {
        return FallbackStrategy::template();
    }

    match LlmStrategy::from_settings(&project.llm) {
        Ok(llm) => {
            tracing::debug!(model = %project.llm.model, "using llm strategy");
            FallbackStrategy::new(Box::new(llm))
        }
        Err(err) => {
            warnings.push(format!("{:#}; generating components from templates", err));
            FallbackStrategy::template()
        }
    }
}

#[cfg(test)]
mod tests {
    use blox_codegen::testing::{blog_config, hero_config};
    use tempfile::TempDir;

    use super::*;

    fn options(dir: &Path) -> BakeOptions<'_> {
        BakeOptions {
            output_dir: dir,
            dry_run: false,
            ai: false,
            visualize: false,
        }
    }

    #[test]
    fn test_bake_writes_registry() {
        let out = TempDir::new().unwrap();
        let report = bake(blog_config().load(), ProjectConfig::default(), options(out.path())).unwrap();

        assert_eq!(report.summary.block_count, 7);
        assert_eq!(report.summary.strategy, "template");
        let GenerationResult::Written(written) = report.result else {
            panic!("expected written result");
        };
        assert!(written.written.iter().any(|p| p == "registry.json"));
        assert!(out.path().join("components/blocks/index.ts").exists());
        assert!(written.fallbacks.is_empty());
        assert!(written.debug_dir.is_none());
    }

    #[test]
    fn test_bake_dry_run_writes_nothing() {
        let out = TempDir::new().unwrap();
        let opts = BakeOptions {
            dry_run: true,
            ..options(out.path())
        };
        let report = bake(hero_config().load(), ProjectConfig::default(), opts).unwrap();

        let GenerationResult::Preview(preview) = report.result else {
            panic!("expected preview");
        };
        assert!(preview.files.iter().any(|f| f.path == "blocks-index.json"));
        assert!(!out.path().join("registry.json").exists());
    }

    #[test]
    fn test_bake_visualize_writes_snapshots() {
        let out = TempDir::new().unwrap();
        let opts = BakeOptions {
            visualize: true,
            ..options(out.path())
        };
        bake(hero_config().load(), ProjectConfig::default(), opts).unwrap();

        assert!(out.path().join(".blox/debug/expand.json").exists());
    }

    #[test]
    fn test_ai_without_key_warns_and_uses_templates() {
        let mut project = ProjectConfig::default();
        project.llm.api_key_env = "BLOX_TEST_KEY_THAT_IS_NEVER_SET".into();

        let mut warnings = Vec::new();
        let strategy = select_strategy(&project, true, &mut warnings);

        assert_eq!(strategy.primary_name(), "template");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("BLOX_TEST_KEY_THAT_IS_NEVER_SET"), "{}", warnings[0]);
    }

    #[test]
    fn test_template_strategy_without_ai() {
        let mut warnings = Vec::new();
        let strategy = select_strategy(&ProjectConfig::default(), false, &mut warnings);
        assert_eq!(strategy.primary_name(), "template");
        assert!(warnings.is_empty());
    }
}
