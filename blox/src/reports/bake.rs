//! Bake command report data structures.

use std::path::PathBuf;

use blox_codegen_react::ReactGenerator;
use indexmap::IndexMap;

use super::output::{Output, Report};

/// Report data from registry generation.
#[derive(Debug)]
pub struct BakeReport {
    pub summary: RegistrySummary,
    /// Pipeline warnings and strategy selection notes.
    pub warnings: Vec<String>,
    pub result: GenerationResult,
}

/// What the registry contains.
#[derive(Debug)]
pub struct RegistrySummary {
    pub name: String,
    pub version: String,
    pub title: String,
    pub block_count: usize,
    pub layout_count: usize,
    pub detail_count: usize,
    /// Blocks per module, main first.
    pub module_counts: IndexMap<String, usize>,
    pub dependencies: Vec<String>,
    /// Component strategy in use.
    pub strategy: &'static str,
}

impl RegistrySummary {
    pub fn new(generator: &ReactGenerator) -> Self {
        let meta = &generator.ir().meta;
        let computed = generator.computed();
        Self {
            name: meta.name.clone(),
            version: meta.version.to_string(),
            title: meta.title.clone(),
            block_count: computed.block_count,
            layout_count: computed.layout_count,
            detail_count: computed.detail_count,
            module_counts: computed.module_counts.clone(),
            dependencies: computed.dependencies.clone(),
            strategy: generator.strategy().primary_name(),
        }
    }
}

/// Result of generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Paths written, relative to `output_dir`.
    pub written: Vec<String>,
    /// Components kept because the user edited them.
    pub skipped: Vec<String>,
    /// Blocks rendered by the template fallback.
    pub fallbacks: Vec<String>,
    /// Components no block produces anymore.
    pub orphans: Vec<String>,
    /// Path to debug snapshots, if visualization was enabled.
    pub debug_dir: Option<PathBuf>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for BakeReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl BakeReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        if let Some(debug_dir) = &written.debug_dir {
            out.key_value(
                "Pipeline snapshots written to",
                &debug_dir.display().to_string(),
            );
            out.newline();
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        self.render_summary(out);
        out.newline();

        out.key_value(
            "Generated",
            &format!(
                "{} ({} files)",
                written.output_dir.display(),
                written.written.len()
            ),
        );

        if !written.fallbacks.is_empty() {
            out.newline();
            out.section("Rendered from templates after strategy failure");
            for block in &written.fallbacks {
                out.list_item(block);
            }
        }

        if !written.skipped.is_empty() {
            out.newline();
            out.section("Kept (modified by user)");
            for path in &written.skipped {
                out.list_item(&format!("! {}", path));
            }
        }

        if !written.orphans.is_empty() {
            out.newline();
            out.section("Unused components (run `blox clean`)");
            for path in &written.orphans {
                out.removed_item(path);
            }
        }
    }

    fn render_summary(&self, out: &mut dyn Output) {
        let s = &self.summary;
        out.preformatted(&format!("{} v{}", s.name, s.version));
        out.preformatted(&s.title);
        out.newline();

        out.section(&format!("Blocks ({})", s.block_count));
        for (module, count) in &s.module_counts {
            out.key_value_indented(module, &count.to_string());
        }
        out.key_value_indented("layout", &s.layout_count.to_string());
        out.key_value_indented("detail", &s.detail_count.to_string());
        out.newline();

        out.key_value("Dependencies", &s.dependencies.join(", "));
        out.key_value("Strategy", s.strategy);
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}
