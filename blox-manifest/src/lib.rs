// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Config directory and project file parsing for the blox registry builder.
//!
//! [`Config::from_dir`] reads `theme.json`, `sections.json`, `templates.json`,
//! `content-types.json`, `collections/` and `plugins/`, and validates every
//! cross reference before anything is generated. [`ProjectConfig`] holds the
//! optional `blox.toml` settings.

mod config;
mod error;
mod project;

pub use config::{
    Config, ContentType, ContentTypeRef, DesignSystem, FieldDef, Module, Plugin, Section,
    Template, Theme,
};
pub use error::{Error, Result, SourceContext};
pub use project::{
    BloxToml, GeneratorSettings, LlmSettings, PROJECT_FILE, ProjectConfig, RegistrySettings,
    Strategy,
};
