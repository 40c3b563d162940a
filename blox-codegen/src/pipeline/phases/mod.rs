//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - lints the config, failing on error diagnostics
//! - [`ExpandPhase`] - expands sections into the registry IR
//! - [`AnalyzePhase`] - computes shared data from the IR

mod analyze;
mod expand;
mod validate;

pub use analyze::AnalyzePhase;
pub use expand::ExpandPhase;
pub use validate::{
    BlockCollisionLint, CollectionReferenceLint, DesignSystemsLint, EmptyCollectionLint, Lint,
    LintInfo, MissingTitleLint, ValidatePhase,
};
