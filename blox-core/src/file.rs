use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content (without the header)
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        let rules = self.rules();
        write_with_rules(&path, &rules.apply(&self.render()), &rules)
    }
}

fn write_with_rules(path: &Path, content: &str, rules: &FileRules) -> Result<WriteResult> {
    match rules.overwrite {
        Overwrite::Always => {
            write_file(path, content)?;
            Ok(WriteResult::Written)
        }
        Overwrite::IfGenerated => {
            if rules.is_ejected(path) {
                tracing::debug!(path = %path.display(), "keeping ejected file");
                Ok(WriteResult::Skipped)
            } else {
                write_file(path, content)?;
                Ok(WriteResult::Written)
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (the user took ownership of it)
    Skipped,
}

/// A file to be generated
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules: always overwrite)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Replace the write rules for this file.
    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its rules
    pub fn write(&self) -> Result<WriteResult> {
        write_with_rules(&self.path, &self.rules.apply(&self.content), &self.rules)
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone)]
pub struct FileRules {
    pub overwrite: Overwrite,
    /// First line of every generated copy; doubles as the ownership marker.
    pub header: Option<&'static str>,
}

impl FileRules {
    /// Rules for generated sources the user may eject by deleting the header.
    pub fn generated(header: &'static str) -> Self {
        Self {
            overwrite: Overwrite::IfGenerated,
            header: Some(header),
        }
    }

    /// Prefix the header, if any, onto rendered content.
    pub fn apply(&self, content: &str) -> String {
        match self.header {
            Some(header) => format!("{}\n{}", header, content),
            None => content.to_string(),
        }
    }

    /// Whether an existing file at `path` no longer carries the header.
    ///
    /// Missing files and files without a header rule are never ejected.
    pub fn is_ejected(&self, path: &Path) -> bool {
        let Some(header) = self.header else {
            return false;
        };
        match std::fs::read_to_string(path) {
            Ok(existing) => !existing.starts_with(header),
            Err(_) => false,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (JSON artifacts)
    Always,
    /// Overwrite only files that still carry the generated header
    IfGenerated,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::Always,
            header: None,
        }
    }
}
