//! Intermediate representation for the blox registry builder.
//!
//! # Architecture
//!
//! ```text
//! data/ (JSON) → blox-manifest (parsing) → blox-ir (expanded blocks) → codegen
//! ```
//!
//! [`RegistryIR`] is the flat, fully expanded block list together with the
//! registry metadata. The [`artifact`] module holds the serialized shapes of
//! the four JSON indexes, which are also read back at render time.

pub mod artifact;
mod block;
mod registry;

pub use block::{Block, COMPONENTS_DIR, Field, MasterDetail};
pub use registry::{ContentTypeIR, DesignSystemIR, RegistryIR, RegistryMeta};
