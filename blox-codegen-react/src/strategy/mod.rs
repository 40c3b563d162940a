//! Component source strategies.
//!
//! [`TemplateStrategy`] is deterministic and always available.
//! [`LlmStrategy`] asks a chat-completion endpoint and may fail;
//! [`FallbackStrategy`] wraps any strategy and substitutes the template
//! output when it does.

mod fallback;
mod llm;
mod template;

use blox_core::ResolvedCollections;
use blox_ir::{Block, DesignSystemIR};
use eyre::Result;
pub use fallback::{FallbackStrategy, Outcome};
pub use llm::LlmStrategy;
pub use template::TemplateStrategy;

/// Produces the TSX source of one block, without the generated header.
pub trait ComponentStrategy: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// `collections` holds the block's collections, plus its detail content
    /// type limited to one entry, resolved against the store.
    fn generate(
        &self,
        block: &Block,
        design_system: Option<&DesignSystemIR>,
        collections: &ResolvedCollections<'_>,
    ) -> Result<String>;
}
