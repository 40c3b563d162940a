//! The JSON indexes next to the components.

use std::path::{Path, PathBuf};

use blox_core::{FileRules, GeneratedFile};
use eyre::{Result, WrapErr};
use serde::Serialize;

/// A pretty-printed JSON document at the root of the output directory.
pub struct JsonArtifact {
    file: &'static str,
    content: String,
}

impl JsonArtifact {
    pub fn new(file: &'static str, value: &impl Serialize) -> Result<Self> {
        let mut content = serde_json::to_string_pretty(value)
            .wrap_err_with(|| format!("failed to serialize {}", file))?;
        content.push('\n');
        Ok(Self { file, content })
    }

    pub fn file(&self) -> &'static str {
        self.file
    }
}

impl GeneratedFile for JsonArtifact {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.file)
    }

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}
