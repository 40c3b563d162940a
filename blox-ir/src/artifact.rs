//! Serialized shapes of the generated JSON indexes.
//!
//! These types are written by the generator and read back by the render-time
//! resolver, so both directions go through serde.

use blox_core::{BlockId, CollectionRefs};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Block, ContentTypeIR, DesignSystemIR, Field, MasterDetail, RegistryIR};

pub const REGISTRY_FILE: &str = "registry.json";
pub const BLOCKS_INDEX_FILE: &str = "blocks-index.json";
pub const COLLECTIONS_DATA_FILE: &str = "collections-data.json";
pub const CONTENT_TYPES_FILE: &str = "content-types.json";

/// `registry.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryJson {
    pub name: String,
    pub version: String,
    pub base_url: String,
    pub dependencies: Vec<String>,
    pub design_systems: Vec<DesignSystemJson>,
    pub blocks: Vec<RegistryBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignSystemJson {
    pub name: String,
    pub label: String,
    pub description: String,
}

/// One entry of `registry.json#blocks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryBlock {
    pub name: String,
    pub description: String,
    pub files: Vec<String>,
    pub dependencies: Vec<String>,
    pub shadcn_components: Vec<String>,
    pub lucide_icons: Vec<String>,
    pub master_detail: MasterDetail,
    #[serde(flatten)]
    pub id: BlockId,
}

/// `blocks-index.json`, keyed by block name.
pub type BlocksIndex = IndexMap<String, BlockIndexEntry>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockIndexEntry {
    pub fields: Vec<Field>,
    pub data: Map<String, Value>,
    pub collections: CollectionRefs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

/// `content-types.json`, keyed by content type name.
pub type ContentTypesJson = IndexMap<String, ContentTypeJson>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeJson {
    pub name: String,
    pub title: String,
    pub data_position: String,
    pub fields: Vec<Field>,
}

impl From<&DesignSystemIR> for DesignSystemJson {
    fn from(ds: &DesignSystemIR) -> Self {
        Self {
            name: ds.name.clone(),
            label: ds.label.clone(),
            description: ds.description.clone(),
        }
    }
}

impl From<&Block> for RegistryBlock {
    fn from(block: &Block) -> Self {
        Self {
            name: block.name.clone(),
            description: block.description.clone(),
            files: vec![block.file_path()],
            dependencies: block.dependencies(),
            shadcn_components: block.shadcn_components.clone(),
            lucide_icons: block.lucide_icons.clone(),
            master_detail: block.master_detail,
            id: block.id.clone(),
        }
    }
}

impl From<&Block> for BlockIndexEntry {
    fn from(block: &Block) -> Self {
        Self {
            fields: block.fields.clone(),
            data: block.data.clone(),
            collections: block.collections.clone(),
            content_type: block.content_type.clone(),
        }
    }
}

impl From<&ContentTypeIR> for ContentTypeJson {
    fn from(ct: &ContentTypeIR) -> Self {
        Self {
            name: ct.name.clone(),
            title: ct.title.clone(),
            data_position: ct.data_position.clone(),
            fields: ct.fields.clone(),
        }
    }
}

impl RegistryJson {
    pub fn from_ir(ir: &RegistryIR) -> Self {
        Self {
            name: ir.meta.name.clone(),
            version: ir.meta.version.to_string(),
            base_url: ir.meta.base_url.clone(),
            dependencies: ir.dependencies(),
            design_systems: ir.design_systems.iter().map(Into::into).collect(),
            blocks: ir.blocks.iter().map(Into::into).collect(),
        }
    }

    pub fn block(&self, name: &str) -> Option<&RegistryBlock> {
        self.blocks.iter().find(|b| b.name == name)
    }
}

pub fn blocks_index(ir: &RegistryIR) -> BlocksIndex {
    ir.blocks
        .iter()
        .map(|block| (block.name.clone(), block.into()))
        .collect()
}

pub fn content_types(ir: &RegistryIR) -> ContentTypesJson {
    ir.content_types
        .iter()
        .map(|(name, ct)| (name.clone(), ct.into()))
        .collect()
}
