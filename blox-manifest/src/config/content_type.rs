use serde::Deserialize;

use super::FieldDef;

/// Schema of collection entries: `content-types.json` entries.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentType {
    pub name: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    data_position: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

impl ContentType {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }

    pub fn data_position(&self) -> &str {
        self.data_position.as_deref().unwrap_or(&self.name)
    }
}
