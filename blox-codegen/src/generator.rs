//! Output generator traits.

use std::path::Path;

use eyre::Result;

/// A target that turns a registry into files.
pub trait Generator {
    /// Target identifier, e.g. `react`.
    fn target(&self) -> &'static str;

    /// Extension of generated component sources.
    fn file_extension(&self) -> &'static str;

    /// Every file that would be written, without touching disk.
    fn preview(&self) -> Result<Vec<PreviewFile>>;

    /// Write all files into `output_dir`.
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;

    /// Remove generated components that are no longer in the registry.
    /// Files the user took ownership of are kept.
    fn clean(&self, _output_dir: &Path) -> Result<CleanResult> {
        Ok(CleanResult::default())
    }

    /// What [`Generator::clean`] would remove.
    fn preview_clean(&self, _output_dir: &Path) -> Result<CleanResult> {
        Ok(CleanResult::default())
    }
}

#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Paths written, relative to the output directory.
    pub written: Vec<String>,
    /// Components kept because they no longer carry the generated header.
    pub skipped: Vec<String>,
    /// Blocks whose component came from the fallback strategy.
    pub fallbacks: Vec<String>,
    /// Generated components on disk that no block produces anymore.
    pub orphans: Vec<String>,
}

#[derive(Debug, Default)]
pub struct CleanResult {
    pub deleted: Vec<String>,
    /// Orphans left alone because the user edited them.
    pub skipped: Vec<String>,
}

impl CleanResult {
    pub fn is_empty(&self) -> bool {
        self.deleted.is_empty() && self.skipped.is_empty()
    }
}

/// A generated file for preview.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewFile {
    /// Path relative to the output directory.
    pub path: String,
    pub content: String,
}
