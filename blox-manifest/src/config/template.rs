use blox_core::TemplateCategory;
use serde::Deserialize;

/// A layout template: `templates.json` entries.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub name: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    pub category: TemplateCategory,
    /// Marks a detail template bound to one entry of this content type.
    #[serde(default)]
    pub content_type: Option<ContentTypeRef>,
    #[serde(default)]
    pub shadcn_components: Option<Vec<String>>,
    #[serde(default)]
    pub lucide_icons: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentTypeRef {
    pub name: String,
}

impl Template {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_ref().map(|ct| ct.name.as_str())
    }

    pub fn is_detail(&self) -> bool {
        self.content_type.is_some()
    }

    /// shadcn/ui components, the category defaults unless listed explicitly.
    pub fn shadcn_components(&self) -> Vec<String> {
        match &self.shadcn_components {
            Some(list) => list.clone(),
            None => to_owned(self.category.shadcn_components()),
        }
    }

    /// lucide-react icons, the category defaults unless listed explicitly.
    pub fn lucide_icons(&self) -> Vec<String> {
        match &self.lucide_icons {
            Some(list) => list.clone(),
            None => to_owned(self.category.lucide_icons()),
        }
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_defaults() {
        let template: Template =
            serde_json::from_str(r#"{ "name": "cards1", "category": "cards" }"#).unwrap();
        assert_eq!(template.shadcn_components(), vec!["card", "badge"]);
        assert_eq!(template.lucide_icons(), vec!["ArrowRight"]);
        assert!(!template.is_detail());
    }

    #[test]
    fn test_explicit_lists_override_category() {
        let template: Template = serde_json::from_str(
            r#"{ "name": "cards1", "category": "cards", "lucideIcons": [], "shadcnComponents": ["card"] }"#,
        )
        .unwrap();
        assert!(template.lucide_icons().is_empty());
        assert_eq!(template.shadcn_components(), vec!["card"]);
    }

    #[test]
    fn test_detail_template() {
        let template: Template = serde_json::from_str(
            r#"{ "name": "post1", "title": "Post", "contentType": { "name": "blogItem" } }"#,
        )
        .unwrap();
        assert!(template.is_detail());
        assert_eq!(template.content_type(), Some("blogItem"));
        assert_eq!(template.category, TemplateCategory::Default);
    }
}
