//! Registry-level IR.

use blox_core::{CollectionStore, Version};
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::{Block, Field};

/// The expanded registry, ready for code generation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryIR {
    pub meta: RegistryMeta,
    pub design_systems: Vec<DesignSystemIR>,
    /// Blocks in expansion order: main scope first, then plugins.
    pub blocks: Vec<Block>,
    pub content_types: IndexMap<String, ContentTypeIR>,
    /// Merged collections store, as authored.
    pub collections: CollectionStore,
}

/// Registry metadata.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryMeta {
    pub name: String,
    pub version: Version,
    pub base_url: String,
    /// Site title from the theme.
    pub title: String,
    pub description: Option<String>,
    /// Registry-wide npm dependencies declared by the project.
    pub dependencies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DesignSystemIR {
    pub name: String,
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeIR {
    pub name: String,
    pub title: String,
    /// Key under which entry data is exposed; defaults to the name.
    pub data_position: String,
    pub fields: Vec<Field>,
}

impl RegistryIR {
    pub fn block(&self, name: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.name == name)
    }

    pub fn design_system(&self, name: &str) -> Option<&DesignSystemIR> {
        self.design_systems.iter().find(|ds| ds.name == name)
    }

    /// Distinct collection names referenced by any block, in first-use order.
    pub fn referenced_collections(&self) -> IndexSet<&str> {
        self.blocks
            .iter()
            .flat_map(Block::referenced_collections)
            .collect()
    }

    /// Referenced collection names that the store does not define.
    pub fn missing_collections(&self) -> Vec<&str> {
        self.referenced_collections()
            .into_iter()
            .filter(|name| !self.collections.contains(name))
            .collect()
    }

    /// The store as written to `collections-data.json`: every referenced
    /// collection is present, missing ones as empty lists.
    pub fn collections_data(&self) -> CollectionStore {
        let mut store = self.collections.clone();
        for name in self.referenced_collections() {
            store.ensure(name);
        }
        store
    }

    /// Registry dependencies followed by every block dependency, deduplicated.
    pub fn dependencies(&self) -> Vec<String> {
        let mut deps: IndexSet<String> = self.meta.dependencies.iter().cloned().collect();
        for block in &self.blocks {
            deps.extend(block.dependencies());
        }
        deps.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use blox_core::{BlockId, CollectionRef, CollectionRefs, Entry, TemplateCategory};
    use serde_json::{Map, json};

    use super::*;
    use crate::MasterDetail;

    fn block(section: &str, collection: &str) -> Block {
        let id = BlockId::new("main", section, "list1", Some("standard".into()));
        let mut collections = CollectionRefs::new();
        collections.insert(collection.into(), CollectionRef::limited(10));
        Block {
            name: id.name(),
            id,
            title: section.into(),
            description: String::new(),
            category: TemplateCategory::Lists,
            fields: vec![],
            data: Map::new(),
            collections,
            content_type: None,
            shadcn_components: vec![],
            lucide_icons: vec!["ChevronRight".into()],
            master_detail: MasterDetail::default(),
        }
    }

    fn registry() -> RegistryIR {
        let mut collections = CollectionStore::new();
        collections.insert(
            "blogItem",
            vec![Entry::from_value(json!({ "slug": "a" })).unwrap()],
        );
        RegistryIR {
            meta: RegistryMeta {
                name: "test".into(),
                version: Version::default(),
                base_url: String::new(),
                title: "Test".into(),
                description: None,
                dependencies: vec!["next".into(), "react".into()],
            },
            design_systems: vec![],
            blocks: vec![block("blog", "blogItem"), block("faq", "faq")],
            content_types: IndexMap::new(),
            collections,
        }
    }

    #[test]
    fn test_missing_collections() {
        assert_eq!(registry().missing_collections(), vec!["faq"]);
    }

    #[test]
    fn test_collections_data_covers_every_reference() {
        let ir = registry();
        let data = ir.collections_data();
        for name in ir.referenced_collections() {
            assert!(data.contains(name), "missing {}", name);
        }
        assert_eq!(data.get("faq"), Some(&[][..]));
        assert_eq!(data.get("blogItem").map(<[_]>::len), Some(1));
    }

    #[test]
    fn test_dependencies_are_deduplicated() {
        assert_eq!(registry().dependencies(), vec!["next", "react", "lucide-react"]);
    }

    #[test]
    fn test_block_lookup() {
        let ir = registry();
        assert!(ir.block("main-blog-list1-standard").is_some());
        assert!(ir.block("main-blog").is_none());
    }
}
