//! Project settings read from `blox.toml`.

mod file;
mod strategy;

use std::{path::Path, str::FromStr};

use blox_core::Version;
pub use file::BloxToml;
use serde::Deserialize;
pub use strategy::Strategy;

use crate::{Error, Result, error::SourceContext};

/// Default file name of the project settings.
pub const PROJECT_FILE: &str = "blox.toml";

const DEFAULT_LIMIT: usize = 10;

/// Root of `blox.toml`. Every table and key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    #[serde(default)]
    pub registry: RegistrySettings,
    #[serde(default)]
    pub generator: GeneratorSettings,
    #[serde(default)]
    pub llm: LlmSettings,
}

/// `[registry]`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistrySettings {
    /// Registry name; the slugified theme title when unset.
    pub name: Option<String>,
    #[serde(default)]
    pub version: Version,
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

/// `[generator]`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorSettings {
    /// Entries kept for a collection reference without a limit.
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default)]
    pub strategy: Strategy,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            strategy: Strategy::default(),
        }
    }
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// `[llm]`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LlmSettings {
    pub endpoint: String,
    pub model: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    pub timeout_secs: u64,
    pub max_retries: u32,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            timeout_secs: 30,
            max_retries: 2,
        }
    }
}

impl FromStr for ProjectConfig {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, PROJECT_FILE)
    }
}

impl ProjectConfig {
    /// Parse `blox.toml` content with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let project: Self = toml::from_str(content).map_err(|e| Box::new(ctx.toml_error(e)))?;
        project.validate(&ctx)?;
        Ok(project)
    }

    /// Read the settings file, or defaults when it does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no project file, using defaults");
            return Ok(Self::default());
        }
        Ok(BloxToml::open(path)?.into_project())
    }

    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        if self.generator.default_limit == 0 {
            return Err(Box::new(ctx.validation_error(
                "default_limit must be at least 1",
                find_key(ctx.src(), "default_limit"),
            )));
        }
        if self.llm.timeout_secs == 0 {
            return Err(Box::new(ctx.validation_error(
                "timeout_secs must be at least 1",
                find_key(ctx.src(), "timeout_secs"),
            )));
        }
        Ok(())
    }
}

fn find_key(src: &str, key: &str) -> Option<miette::SourceSpan> {
    src.find(key).map(|pos| (pos, key.len()).into())
}
