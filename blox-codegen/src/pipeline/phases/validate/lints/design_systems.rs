//! Lint for body sections that expand to nothing.

use blox_manifest::Config;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Warns when the theme defines no design systems while body sections
/// exist: body blocks are instantiated once per design system.
pub struct DesignSystemsLint;

impl Lint for DesignSystemsLint {
    fn name(&self) -> &'static str {
        "design-systems"
    }

    fn description(&self) -> &'static str {
        "Warn when body sections produce no blocks"
    }

    fn check(&self, config: &Config, diagnostics: &mut Vec<Diagnostic>) {
        if !config.design_systems().is_empty() {
            return;
        }
        let body = config
            .modules()
            .flat_map(|m| m.sections)
            .filter(|s| !s.is_layout())
            .count();
        if body > 0 {
            diagnostics.push(
                Diagnostic::warning(
                    "validate",
                    format!(
                        "theme defines no design systems; {} body section(s) produce no blocks",
                        body
                    ),
                )
                .at("theme.designSystems"),
            );
        }
    }
}
