//! Files written by the React generator.

mod component_tsx;
mod index_ts;
mod json;

pub use component_tsx::{ComponentTsx, GENERATED_HEADER};
pub use index_ts::IndexTs;
pub use json::JsonArtifact;
