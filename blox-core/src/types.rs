//! Fundamental configuration types shared across crates.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field type for section fields and content-type fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    #[default]
    String,
    Text,
    RichText,
    Number,
    Boolean,
    Image,
    Url,
    Date,
    List,
    Object,
    /// A `{contentType, slug}` pointer to a collection entry.
    Reference,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Text => "text",
            Self::RichText => "richText",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Image => "image",
            Self::Url => "url",
            Self::Date => "date",
            Self::List => "list",
            Self::Object => "object",
            Self::Reference => "reference",
        }
    }

    /// TypeScript type used in generated interfaces.
    pub fn ts_type(&self) -> &'static str {
        match self {
            Self::String | Self::Text | Self::RichText | Self::Image | Self::Url | Self::Date => {
                "string"
            }
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::List => "string[]",
            Self::Object => "Record<string, unknown>",
            Self::Reference => "{ contentType: string; slug?: string }",
        }
    }

    /// Placeholder value used when neither the field nor the section supplies one.
    pub fn default_value(&self) -> Value {
        match self {
            Self::Number => Value::from(0),
            Self::Boolean => Value::Bool(false),
            Self::List => Value::Array(Vec::new()),
            Self::Object => Value::Object(Default::default()),
            Self::Reference => Value::Null,
            _ => Value::String(String::new()),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a section renders page content or page chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Content block, instantiated once per design system.
    #[default]
    Body,
    /// Chrome (headers, footers), design-system agnostic.
    Layout,
}

impl SectionKind {
    pub fn is_layout(&self) -> bool {
        matches!(self, Self::Layout)
    }
}

/// Layout shape family of a template.
///
/// Unknown categories fall back to [`TemplateCategory::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum TemplateCategory {
    Headers,
    Covers,
    Cards,
    Lists,
    Blocks,
    #[default]
    Default,
}

impl TemplateCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Headers => "headers",
            Self::Covers => "covers",
            Self::Cards => "cards",
            Self::Lists => "lists",
            Self::Blocks => "blocks",
            Self::Default => "default",
        }
    }

    /// shadcn/ui components a template of this shape uses unless it lists its own.
    pub fn shadcn_components(&self) -> &'static [&'static str] {
        match self {
            Self::Headers => &["button", "navigation-menu", "sheet"],
            Self::Covers => &["button"],
            Self::Cards => &["card", "badge"],
            Self::Lists => &["separator"],
            Self::Blocks => &["card"],
            Self::Default => &[],
        }
    }

    /// lucide-react icons a template of this shape uses unless it lists its own.
    pub fn lucide_icons(&self) -> &'static [&'static str] {
        match self {
            Self::Headers => &["Menu"],
            Self::Covers => &["ArrowRight"],
            Self::Cards => &["ArrowRight"],
            Self::Lists => &["ChevronRight"],
            Self::Blocks | Self::Default => &[],
        }
    }
}

impl From<String> for TemplateCategory {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "headers" | "header" => Self::Headers,
            "covers" | "cover" => Self::Covers,
            "cards" | "card" => Self::Cards,
            "lists" | "list" => Self::Lists,
            "blocks" | "block" => Self::Blocks,
            _ => Self::Default,
        }
    }
}

impl From<TemplateCategory> for String {
    fn from(value: TemplateCategory) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_deserialize() {
        let ty: FieldType = serde_json::from_str(r#""richText""#).unwrap();
        assert_eq!(ty, FieldType::RichText);
        assert!(serde_json::from_str::<FieldType>(r#""matrix""#).is_err());
    }

    #[test]
    fn test_field_type_defaults() {
        assert_eq!(FieldType::String.default_value(), Value::String(String::new()));
        assert_eq!(FieldType::Number.default_value(), Value::from(0));
        assert_eq!(FieldType::List.ts_type(), "string[]");
    }

    #[test]
    fn test_section_kind_default_is_body() {
        assert_eq!(SectionKind::default(), SectionKind::Body);
        let kind: SectionKind = serde_json::from_str(r#""layout""#).unwrap();
        assert!(kind.is_layout());
    }

    #[test]
    fn test_unknown_category_falls_back() {
        let cat: TemplateCategory = serde_json::from_str(r#""Covers""#).unwrap();
        assert_eq!(cat, TemplateCategory::Covers);

        let cat: TemplateCategory = serde_json::from_str(r#""galleries""#).unwrap();
        assert_eq!(cat, TemplateCategory::Default);
        assert_eq!(serde_json::to_string(&cat).unwrap(), r#""default""#);
    }
}
