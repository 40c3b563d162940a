//! Core utilities and types for the blox registry builder.
//!
//! This crate provides the pieces shared by every stage of the pipeline
//! and by the render-time tooling:
//!
//! - [`naming`] - slug and block-name functions
//! - [`collections`] - the collections store and reference resolution
//! - file writing helpers and small string utilities

pub mod collections;
mod file;
pub mod naming;
mod types;
mod utils;
mod version;

pub use collections::{
    CollectionRef, CollectionRefs, CollectionStore, Entry, EntryRef, PageContent,
    ResolvedCollections, resolve_collections, resolve_entry_reference,
};
// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
pub use naming::{BlockId, MAIN_MODULE, block_name, component_name, slugify};
// Fundamental types
pub use types::{FieldType, SectionKind, TemplateCategory};
// String utilities
pub use utils::{to_camel_case, to_pascal_case};
pub use version::Version;
