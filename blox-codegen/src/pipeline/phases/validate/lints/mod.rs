//! Built-in lints.

mod block_collision;
mod collection_reference;
mod design_systems;
mod empty_collection;
mod missing_title;

pub use block_collision::BlockCollisionLint;
pub use collection_reference::CollectionReferenceLint;
pub use design_systems::DesignSystemsLint;
pub use empty_collection::EmptyCollectionLint;
pub use missing_title::MissingTitleLint;
