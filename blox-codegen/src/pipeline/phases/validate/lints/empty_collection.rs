//! Lint for collections without entries.

use blox_manifest::Config;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Notes collections that are defined but empty.
pub struct EmptyCollectionLint;

impl Lint for EmptyCollectionLint {
    fn name(&self) -> &'static str {
        "empty-collection"
    }

    fn description(&self) -> &'static str {
        "Note collections that have no entries"
    }

    fn check(&self, config: &Config, diagnostics: &mut Vec<Diagnostic>) {
        for (name, entries) in config.collections.iter() {
            if entries.is_empty() {
                diagnostics.push(
                    Diagnostic::info("validate", format!("collection '{}' has no entries", name))
                        .at(format!("collections.{}", name)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::hero_config;

    #[test]
    fn test_empty_collection() {
        let config = hero_config()
            .file("collections/faq.json", "[]")
            .file("collections/team.json", r#"[{ "name": "Ada" }]"#)
            .load();

        let mut diagnostics = Vec::new();
        EmptyCollectionLint.check(&config, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, crate::pipeline::Severity::Info);
        assert_eq!(diagnostics[0].location.as_deref(), Some("collections.faq"));
    }
}
