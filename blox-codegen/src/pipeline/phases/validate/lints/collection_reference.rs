//! Lint for collection references the store cannot satisfy.

use std::collections::HashSet;

use blox_manifest::Config;

use super::super::{Lint, lint::section_location};
use crate::pipeline::Diagnostic;

/// Warns about sections listing a collection that does not exist, and
/// detail templates whose content type has no collection. Such slots are
/// emitted as empty lists.
pub struct CollectionReferenceLint;

impl Lint for CollectionReferenceLint {
    fn name(&self) -> &'static str {
        "collection-reference"
    }

    fn description(&self) -> &'static str {
        "Warn about referenced collections that are not defined"
    }

    fn check(&self, config: &Config, diagnostics: &mut Vec<Diagnostic>) {
        let mut reported_details = HashSet::new();

        for module in config.modules() {
            for section in module.sections {
                let location = section_location(module.name, &section.name);

                for name in section.collections.keys() {
                    if !config.collections.contains(name) {
                        diagnostics.push(
                            Diagnostic::warning(
                                "validate",
                                format!(
                                    "section '{}' lists collection '{}', which is not defined; it will be empty",
                                    section.name, name
                                ),
                            )
                            .at(format!("{}.collections.{}", location, name)),
                        );
                    }
                }

                for template_name in &section.templates {
                    let Some(template) = module.find_template(template_name) else {
                        continue;
                    };
                    let Some(ct) = template.content_type() else {
                        continue;
                    };
                    if !config.collections.contains(ct)
                        && reported_details.insert((template.name.as_str(), ct))
                    {
                        diagnostics.push(
                            Diagnostic::warning(
                                "validate",
                                format!(
                                    "detail template '{}' shows '{}' entries, but no such collection exists",
                                    template.name, ct
                                ),
                            )
                            .at(location.clone()),
                        );
                    }
                }
            }
        }
    }
}
