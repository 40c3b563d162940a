//! Lint for block names produced by more than one identity.

use std::collections::HashMap;

use blox_manifest::Config;

use super::super::{Lint, lint::section_location};
use crate::{expansion, pipeline::Diagnostic};

/// Errors when two (module, section, template, design system) tuples
/// slugify to the same block name. Nothing is ever overwritten silently.
pub struct BlockCollisionLint;

impl Lint for BlockCollisionLint {
    fn name(&self) -> &'static str {
        "block-collision"
    }

    fn description(&self) -> &'static str {
        "Detect distinct blocks that resolve to the same name"
    }

    fn check(&self, config: &Config, diagnostics: &mut Vec<Diagnostic>) {
        let planned = expansion::plan(config);
        let mut seen: HashMap<&str, &expansion::Planned<'_>> = HashMap::new();

        for block in &planned {
            match seen.get(block.name.as_str()) {
                Some(first) => diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!(
                            "block name '{}' is produced by both {} and {}",
                            block.name, first.id, block.id
                        ),
                    )
                    .at(section_location(&block.id.module, &block.id.section)),
                ),
                None => {
                    seen.insert(&block.name, block);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ConfigDir, blog_config};

    #[test]
    fn test_no_collisions() {
        let mut diagnostics = Vec::new();
        BlockCollisionLint.check(&blog_config().load(), &mut diagnostics);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_collision_names_both_tuples() {
        let config = ConfigDir::new()
            .file(
                "sections.json",
                r#"[
                  { "name": "Call to Action", "title": "CTA", "type": "layout", "templates": ["cta1"] },
                  { "name": "call-to-action", "title": "CTA", "type": "layout", "templates": ["cta1"] }
                ]"#,
            )
            .file("templates.json", r#"[{ "name": "cta1" }]"#)
            .load();

        let mut diagnostics = Vec::new();
        BlockCollisionLint.check(&config, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        let diag = &diagnostics[0];
        assert!(diag.severity.is_error());
        assert!(diag.message.contains("'main-call-to-action-cta1'"));
        assert!(diag.message.contains("section 'Call to Action'"));
        assert!(diag.message.contains("section 'call-to-action'"));
        assert_eq!(diag.location.as_deref(), Some("sections.call-to-action"));
    }

    #[test]
    fn test_plugin_cannot_shadow_main_block() {
        // A plugin named "main-hero" would produce "main-hero-..." names.
        let config = ConfigDir::new()
            .file(
                "sections.json",
                r#"[{ "name": "hero-x", "type": "layout", "templates": ["a"] }]"#,
            )
            .file("templates.json", r#"[{ "name": "a" }]"#)
            .file(
                "plugins/main-hero/sections.json",
                r#"[{ "name": "x", "type": "layout", "templates": ["a"] }]"#,
            )
            .load();

        let mut diagnostics = Vec::new();
        BlockCollisionLint.check(&config, &mut diagnostics);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("module 'main-hero'"));
    }

    #[test]
    fn test_digit_boundary_keeps_component_names_apart() {
        // "main-a-1-b" and "main-a1-b" are different blocks and must not
        // share a generated component.
        let config = ConfigDir::new()
            .file(
                "sections.json",
                r#"[
                  { "name": "a", "type": "layout", "templates": ["1-b"] },
                  { "name": "a1", "type": "layout", "templates": ["b"] }
                ]"#,
            )
            .file("templates.json", r#"[{ "name": "1-b" }, { "name": "b" }]"#)
            .load();

        let mut diagnostics = Vec::new();
        BlockCollisionLint.check(&config, &mut diagnostics);
        assert!(diagnostics.is_empty());

        let components: Vec<String> = expansion::plan(&config)
            .iter()
            .map(|block| blox_core::component_name(&block.name))
            .collect();
        assert_eq!(components, ["MainA_1B", "MainA1B"]);
    }
}
