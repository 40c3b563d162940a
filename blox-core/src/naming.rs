//! Slug and block-name functions.
//!
//! A block name is `{module}-{section}-{template}-{designSystem}` built from
//! slugified parts (layout blocks omit the design system). Slugs may contain
//! hyphens themselves, so a name cannot be split back into its parts; the
//! parts always travel alongside the name as a [`BlockId`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::to_pascal_case;

/// Module name of blocks defined by the main configuration.
pub const MAIN_MODULE: &str = "main";

/// Lowercase, keep `[a-z0-9 -]`, collapse whitespace and hyphen runs into `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else if c == '-' || c.is_whitespace() {
            pending_dash = true;
        }
    }

    slug
}

/// Canonical block name. Argument order follows the identity tuple; the
/// template precedes the design system in the output.
pub fn block_name(module: &str, section: &str, design_system: Option<&str>, template: &str) -> String {
    let mut parts = vec![slugify(module), slugify(section), slugify(template)];
    if let Some(ds) = design_system {
        parts.push(slugify(ds));
    }
    parts.join("-")
}

/// React component identifier for a block name.
///
/// Slugs are lowercase, so every uppercase letter or `_` marks a hyphen of
/// the block name and distinct names never share an identifier. Words that
/// start with a digit are joined with `_`.
pub fn component_name(block_name: &str) -> String {
    let mut name = String::with_capacity(block_name.len() + 1);
    for word in block_name.split('-').filter(|w| !w.is_empty()) {
        if word.starts_with(|c: char| c.is_ascii_digit()) {
            name.push('_');
        }
        name.push_str(&to_pascal_case(word));
    }
    name
}

/// Structured identity of a block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId {
    #[serde(rename = "moduleName")]
    pub module: String,
    #[serde(rename = "sectionName")]
    pub section: String,
    #[serde(rename = "templateName")]
    pub template: String,
    #[serde(rename = "designSystemName", skip_serializing_if = "Option::is_none", default)]
    pub design_system: Option<String>,
}

impl BlockId {
    pub fn new(
        module: impl Into<String>,
        section: impl Into<String>,
        template: impl Into<String>,
        design_system: Option<String>,
    ) -> Self {
        Self {
            module: module.into(),
            section: section.into(),
            template: template.into(),
            design_system,
        }
    }

    /// The canonical block name for this identity.
    pub fn name(&self) -> String {
        block_name(
            &self.module,
            &self.section,
            self.design_system.as_deref(),
            &self.template,
        )
    }

    pub fn is_layout(&self) -> bool {
        self.design_system.is_none()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(module '{}', section '{}', template '{}', design system {})",
            self.module,
            self.section,
            self.template,
            match &self.design_system {
                Some(ds) => format!("'{}'", ds),
                None => "none".to_string(),
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hero"), "hero");
        assert_eq!(slugify("Call to Action"), "call-to-action");
        assert_eq!(slugify("  spaced   out  "), "spaced-out");
        assert_eq!(slugify("a--b"), "a-b");
        assert_eq!(slugify("Blog & News!"), "blog-news");
        assert_eq!(slugify("cover_1"), "cover1");
        assert_eq!(slugify("-trim-"), "trim");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_block_name_order() {
        assert_eq!(
            block_name("main", "hero", Some("standard"), "cover1"),
            "main-hero-cover1-standard"
        );
    }

    #[test]
    fn test_layout_block_name() {
        assert_eq!(block_name("main", "header", None, "nav1"), "main-header-nav1");
    }

    #[test]
    fn test_block_name_slugifies_parts() {
        assert_eq!(
            block_name("Shop", "Call to Action", Some("Bold"), "Banner 2"),
            "shop-call-to-action-banner-2-bold"
        );
    }

    #[test]
    fn test_hyphenated_parts_can_collide() {
        let a = BlockId::new("main", "call-to", "action", Some("bold".into()));
        let b = BlockId::new("main", "call", "to-action", Some("bold".into()));
        assert_ne!(a, b);
        assert_eq!(a.name(), b.name());
    }

    #[test]
    fn test_component_name() {
        assert_eq!(component_name("main-hero-cover1-bold"), "MainHeroCover1Bold");
        assert_eq!(component_name("3d-hero"), "_3dHero");
        assert_eq!(component_name("shop-banner-2-bold"), "ShopBanner_2Bold");
    }

    #[test]
    fn test_component_name_keeps_digit_boundaries() {
        assert_eq!(component_name("main-a-1-b"), "MainA_1B");
        assert_eq!(component_name("main-a1-b"), "MainA1B");
        assert_ne!(component_name("block-3d-hero"), component_name("3d-hero"));
    }

    #[test]
    fn test_block_id_serializes_structured_fields() {
        let id = BlockId::new("main", "hero", "cover1", Some("bold".into()));
        let json = serde_json::to_value(&id).unwrap();
        assert_eq!(json["moduleName"], "main");
        assert_eq!(json["sectionName"], "hero");
        assert_eq!(json["templateName"], "cover1");
        assert_eq!(json["designSystemName"], "bold");

        let layout = BlockId::new("main", "footer", "footer1", None);
        let json = serde_json::to_value(&layout).unwrap();
        assert!(json.get("designSystemName").is_none());
    }
}
