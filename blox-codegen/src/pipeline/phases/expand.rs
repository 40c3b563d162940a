//! Expand phase - builds the registry IR from the config.

use eyre::Result;

use crate::{
    expansion,
    pipeline::{CompilationContext, Phase},
};

/// Expands every section × template × design system into a block.
///
/// Runs after validation, so block names are known to be unique.
pub struct ExpandPhase;

impl Phase for ExpandPhase {
    fn name(&self) -> &'static str {
        "expand"
    }

    fn description(&self) -> &'static str {
        "Expand sections into uniquely named blocks"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let ir = expansion::expand(&ctx.config, &ctx.project);
        tracing::debug!(blocks = ir.blocks.len(), "expanded registry");
        ctx.ir = Some(ir);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use blox_manifest::ProjectConfig;

    use super::*;
    use crate::testing::blog_config;

    #[test]
    fn test_expand_phase() {
        let mut ctx = CompilationContext::new(blog_config().load(), ProjectConfig::default());
        ExpandPhase.run(&mut ctx).unwrap();

        let ir = ctx.ir().unwrap();
        assert_eq!(ir.blocks.len(), 7);
        assert_eq!(ir.blocks[0].name, "main-hero-cover1-standard");
        assert!(ir.content_types.contains_key("blogItem"));
    }
}
