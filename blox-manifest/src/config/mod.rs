//! Site configuration read from a `data/` directory.

mod content_type;
mod field;
mod parse;
mod plugin;
mod section;
mod template;
mod theme;
mod validate;

use std::path::PathBuf;

use blox_core::{CollectionStore, MAIN_MODULE};
pub use content_type::ContentType;
pub use field::FieldDef;
use indexmap::IndexMap;
pub use plugin::Plugin;
pub use section::Section;
pub use template::{ContentTypeRef, Template};
pub use theme::{DesignSystem, Theme};

/// The parsed, validated configuration. Immutable once built.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the config was read from.
    pub root: PathBuf,
    pub theme: Theme,
    /// Main-module sections in file order.
    pub sections: Vec<Section>,
    /// Main-module templates, visible to every plugin.
    pub templates: Vec<Template>,
    /// Content types of every scope, keyed by name.
    pub content_types: IndexMap<String, ContentType>,
    /// Collections of every scope, keyed by name.
    pub collections: CollectionStore,
    /// Plugins in directory name order.
    pub plugins: Vec<Plugin>,
}

/// A module's sections with the templates it can see.
#[derive(Debug, Clone, Copy)]
pub struct Module<'a> {
    pub name: &'a str,
    pub sections: &'a [Section],
    templates: &'a [Template],
    main_templates: &'a [Template],
}

impl<'a> Module<'a> {
    pub fn is_main(&self) -> bool {
        self.name == MAIN_MODULE
    }

    /// Look a template up in the module's own scope, then in the main config.
    pub fn find_template(&self, name: &str) -> Option<&'a Template> {
        self.templates
            .iter()
            .find(|t| t.name == name)
            .or_else(|| self.main_templates.iter().find(|t| t.name == name))
    }
}

impl Config {
    /// Main module first, then every plugin.
    pub fn modules(&self) -> impl Iterator<Item = Module<'_>> {
        let main = Module {
            name: MAIN_MODULE,
            sections: &self.sections,
            templates: &self.templates,
            main_templates: &[],
        };
        std::iter::once(main).chain(self.plugins.iter().map(|plugin| Module {
            name: &plugin.name,
            sections: &plugin.sections,
            templates: &plugin.templates,
            main_templates: &self.templates,
        }))
    }

    pub fn design_systems(&self) -> &[DesignSystem] {
        &self.theme.design_systems
    }

    pub fn content_type(&self, name: &str) -> Option<&ContentType> {
        self.content_types.get(name)
    }

    /// Sections across every module.
    pub fn section_count(&self) -> usize {
        self.modules().map(|m| m.sections.len()).sum()
    }

    pub fn template_count(&self) -> usize {
        self.templates.len() + self.plugins.iter().map(|p| p.templates.len()).sum::<usize>()
    }
}
