use blox_core::FieldType;
use serde::Deserialize;
use serde_json::Value;

/// A field declared by a section or a content type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldDef {
    pub name: String,
    #[serde(rename = "type", default)]
    pub ty: FieldType,
    #[serde(default)]
    pub required: bool,
    /// Value used when the section data leaves the field unset.
    #[serde(default)]
    pub default: Option<Value>,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
            required: false,
            default: None,
        }
    }
}
