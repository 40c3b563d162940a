use blox_core::{CollectionRefs, SectionKind};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::FieldDef;

/// A page section: `sections.json` entries.
#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    pub name: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: SectionKind,
    #[serde(default)]
    pub templates: Vec<String>,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
    #[serde(default)]
    pub data: Map<String, Value>,
    #[serde(default)]
    pub collections: CollectionRefs,
}

impl Section {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }

    /// Whether the section sets its own title rather than reusing the name.
    pub fn has_title(&self) -> bool {
        self.title.as_deref().is_some_and(|t| !t.trim().is_empty())
    }

    pub fn is_layout(&self) -> bool {
        self.kind.is_layout()
    }
}
