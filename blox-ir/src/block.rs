//! Expanded block representation.

use blox_core::{BlockId, CollectionRefs, FieldType, TemplateCategory, component_name};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Directory, relative to the output root, holding generated components.
pub const COMPONENTS_DIR: &str = "components/blocks";

/// One (section, template, design system) instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Structured identity. Never re-derived from `name`.
    pub id: BlockId,
    /// Canonical registry key.
    pub name: String,
    /// Section title, used as the heading default and in descriptions.
    pub title: String,
    /// Human readable description for `registry.json`.
    pub description: String,
    /// Layout shape of the template.
    pub category: TemplateCategory,
    /// Fields of the generated props interface, implicit ones first.
    pub fields: Vec<Field>,
    /// Default data, one value per field at least.
    pub data: Map<String, Value>,
    /// Collections this block lists, with limits filled in.
    pub collections: CollectionRefs,
    /// Content type of a detail template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    pub shadcn_components: Vec<String>,
    pub lucide_icons: Vec<String>,
    pub master_detail: MasterDetail,
}

impl Block {
    pub fn component_name(&self) -> String {
        component_name(&self.name)
    }

    /// Component path relative to the output root.
    pub fn file_path(&self) -> String {
        format!("{}/{}.tsx", COMPONENTS_DIR, self.name)
    }

    pub fn is_detail(&self) -> bool {
        self.master_detail.is_detail
    }

    pub fn is_layout(&self) -> bool {
        self.id.is_layout()
    }

    /// npm packages the generated component imports.
    pub fn dependencies(&self) -> Vec<String> {
        let mut deps = vec!["react".to_string()];
        if !self.lucide_icons.is_empty() {
            deps.push("lucide-react".to_string());
        }
        deps
    }

    /// Every collection name the block needs at render time, including
    /// the detail content type.
    pub fn referenced_collections(&self) -> impl Iterator<Item = &str> {
        self.collections
            .keys()
            .map(String::as_str)
            .chain(self.content_type.as_deref())
    }
}

/// A typed field of a block or content type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
            required: false,
            default: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Whether a block renders a list (master) or a single entry (detail).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterDetail {
    pub is_master: bool,
    pub is_detail: bool,
}

#[cfg(test)]
mod tests {
    use blox_core::CollectionRef;

    use super::*;

    fn block(icons: &[&str]) -> Block {
        let id = BlockId::new("main", "blog", "cards1", Some("bold".into()));
        let mut collections = CollectionRefs::new();
        collections.insert("blogItem".into(), CollectionRef::limited(3));
        Block {
            name: id.name(),
            id,
            title: "Blog".into(),
            description: String::new(),
            category: TemplateCategory::Cards,
            fields: vec![],
            data: Map::new(),
            collections,
            content_type: Some("author".into()),
            shadcn_components: vec![],
            lucide_icons: icons.iter().map(|s| s.to_string()).collect(),
            master_detail: MasterDetail::default(),
        }
    }

    #[test]
    fn test_file_path_and_component_name() {
        let b = block(&[]);
        assert_eq!(b.file_path(), "components/blocks/main-blog-cards1-bold.tsx");
        assert_eq!(b.component_name(), "MainBlogCards1Bold");
    }

    #[test]
    fn test_dependencies_follow_icons() {
        assert_eq!(block(&[]).dependencies(), vec!["react"]);
        assert_eq!(block(&["ArrowRight"]).dependencies(), vec!["react", "lucide-react"]);
    }

    #[test]
    fn test_referenced_collections_include_content_type() {
        let b = block(&[]);
        let names: Vec<_> = b.referenced_collections().collect();
        assert_eq!(names, vec!["blogItem", "author"]);
    }
}
