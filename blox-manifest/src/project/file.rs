use std::path::{Path, PathBuf};

use super::ProjectConfig;
use crate::{Error, Result};

/// A `blox.toml` file with both raw content and parsed settings.
pub struct BloxToml {
    path: PathBuf,
    content: String,
    project: ProjectConfig,
}

impl BloxToml {
    /// Open and parse a blox.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|source| {
            Box::new(Error::Io {
                path: path.clone(),
                source,
            })
        })?;
        let project = ProjectConfig::from_str_with_filename(&content, &path.display().to_string())?;

        Ok(Self {
            path,
            content,
            project,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn project(&self) -> &ProjectConfig {
        &self.project
    }

    pub fn into_project(self) -> ProjectConfig {
        self.project
    }
}
