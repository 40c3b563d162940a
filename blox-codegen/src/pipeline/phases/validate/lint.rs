//! Lint trait for config validation.

use blox_core::MAIN_MODULE;
use blox_manifest::Config;

use crate::pipeline::Diagnostic;

#[derive(Debug, Clone)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A check over the parsed config.
///
/// Lints run before expansion. Error diagnostics stop the pipeline;
/// warnings and infos are reported and the run continues.
pub trait Lint: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn check(&self, config: &Config, diagnostics: &mut Vec<Diagnostic>);

    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}

/// Config path of a section, e.g. `sections.hero` or `plugins.shop.sections.list`.
pub(crate) fn section_location(module: &str, section: &str) -> String {
    if module == MAIN_MODULE {
        format!("sections.{}", section)
    } else {
        format!("plugins.{}.sections.{}", module, section)
    }
}
