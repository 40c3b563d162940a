//! Lint for sections without a title.

use blox_manifest::Config;

use super::super::{Lint, lint::section_location};
use crate::pipeline::Diagnostic;

/// Warns about sections that fall back to their name as the title, which
/// then becomes the default heading of every block they produce.
pub struct MissingTitleLint;

impl Lint for MissingTitleLint {
    fn name(&self) -> &'static str {
        "missing-title"
    }

    fn description(&self) -> &'static str {
        "Warn about sections without a title"
    }

    fn check(&self, config: &Config, diagnostics: &mut Vec<Diagnostic>) {
        for module in config.modules() {
            for section in module.sections {
                if !section.has_title() {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!("section '{}' has no title", section.name),
                        )
                        .at(section_location(module.name, &section.name)),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::hero_config;

    #[test]
    fn test_titled_section() {
        let mut diagnostics = Vec::new();
        MissingTitleLint.check(&hero_config().load(), &mut diagnostics);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_untitled_plugin_section() {
        let config = hero_config()
            .file(
                "plugins/shop/sections.json",
                r#"[{ "name": "list", "title": " ", "templates": ["cover1"] }]"#,
            )
            .load();

        let mut diagnostics = Vec::new();
        MissingTitleLint.check(&config, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].location.as_deref(),
            Some("plugins.shop.sections.list")
        );
    }
}
