//! Test utilities for pipeline and generator tests.
//!
//! Only available during tests or with the `testing` feature.

use std::{fs, path::Path};

use blox_manifest::Config;
use tempfile::TempDir;

/// Theme with the `standard` and `bold` design systems.
pub const THEME: &str = r#"{
  "title": "Acme Site",
  "description": "Marketing site",
  "designSystems": [
    { "name": "standard", "label": "Standard", "description": "Neutral" },
    { "name": "bold", "label": "Bold", "description": "High contrast" }
  ]
}"#;

/// A config directory on disk, removed on drop.
pub struct ConfigDir {
    dir: TempDir,
}

impl ConfigDir {
    /// An empty directory with only [`THEME`] written.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let this = Self { dir };
        this.file("theme.json", THEME)
    }

    /// Write `content` at `rel`, creating parent directories.
    pub fn file(self, rel: &str, content: &str) -> Self {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture dir");
        }
        fs::write(&path, content).expect("write fixture");
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Parse the directory, panicking with the rendered error on failure.
    pub fn load(&self) -> Config {
        match Config::from_dir(self.dir.path()) {
            Ok(config) => config,
            Err(err) => panic!("fixture config is invalid: {}", err),
        }
    }
}

impl Default for ConfigDir {
    fn default() -> Self {
        Self::new()
    }
}

/// One body section `hero` using template `cover1`.
pub fn hero_config() -> ConfigDir {
    ConfigDir::new()
        .file(
            "sections.json",
            r#"[{ "name": "hero", "title": "Welcome", "type": "body", "templates": ["cover1"] }]"#,
        )
        .file(
            "templates.json",
            r#"[{ "name": "cover1", "title": "Cover", "category": "covers" }]"#,
        )
}

/// A blog with a master list, a detail template and a layout footer.
pub fn blog_config() -> ConfigDir {
    ConfigDir::new()
        .file(
            "sections.json",
            r#"[
  { "name": "hero", "title": "Welcome", "type": "body", "templates": ["cover1"] },
  {
    "name": "blog",
    "title": "Latest posts",
    "type": "body",
    "templates": ["cards1", "post1"],
    "fields": [{ "name": "ctaLabel", "type": "string", "default": "Read more" }],
    "data": { "heading": "From the blog" },
    "collections": { "blogItem": { "limit": 2 }, "faq": {} }
  },
  { "name": "footer", "title": "Footer", "type": "layout", "templates": ["footer1"] }
]"#,
        )
        .file(
            "templates.json",
            r#"[
  { "name": "cover1", "title": "Cover", "category": "covers" },
  { "name": "cards1", "title": "Cards", "category": "cards" },
  { "name": "post1", "title": "Post", "category": "blocks", "contentType": { "name": "blogItem" } },
  { "name": "footer1", "title": "Simple footer", "category": "default" }
]"#,
        )
        .file(
            "content-types.json",
            r#"[
  {
    "name": "blogItem",
    "title": "Blog item",
    "dataPosition": "post",
    "fields": [
      { "name": "title", "type": "string", "required": true },
      { "name": "body", "type": "richText" }
    ]
  }
]"#,
        )
        .file(
            "collections/blogItem.json",
            r#"[
  { "title": "First post", "body": "Hello" },
  { "title": "Second post", "body": "Again" },
  { "title": "Third post", "body": "More" }
]"#,
        )
}
