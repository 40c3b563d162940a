use serde::Deserialize;

use super::{Section, Template};

/// A plugin module loaded from `plugins/<dir>/`.
#[derive(Debug, Clone)]
pub struct Plugin {
    /// Module name, the slugified directory name.
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub sections: Vec<Section>,
    pub templates: Vec<Template>,
    /// Names of content types this plugin contributed to the global map.
    pub content_types: Vec<String>,
    /// Names of collections this plugin contributed to the global store.
    pub collections: Vec<String>,
}

/// Optional `plugin.json`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct PluginMeta {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
