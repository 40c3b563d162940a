//! Analyze phase - computes shared data from the IR.

use eyre::Result;

use crate::{
    ComputedData,
    pipeline::{CompilationContext, Phase},
};

/// Computes [`ComputedData`]. Must run after `ExpandPhase`.
pub struct AnalyzePhase;

impl Phase for AnalyzePhase {
    fn name(&self) -> &'static str {
        "analyze"
    }

    fn description(&self) -> &'static str {
        "Compute shared data from IR"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let computed = ComputedData::from_ir(ctx.ir()?);
        ctx.computed = Some(computed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use blox_manifest::ProjectConfig;

    use super::*;
    use crate::{pipeline::phases::ExpandPhase, testing::hero_config};

    #[test]
    fn test_analyze_phase() {
        let mut ctx = CompilationContext::new(hero_config().load(), ProjectConfig::default());
        ExpandPhase.run(&mut ctx).unwrap();
        AnalyzePhase.run(&mut ctx).unwrap();

        let computed = ctx.computed.as_ref().unwrap();
        assert_eq!(computed.block_count, 2);
        assert_eq!(computed.layout_count, 0);
    }

    #[test]
    fn test_analyze_phase_requires_ir() {
        let mut ctx = CompilationContext::new(hero_config().load(), ProjectConfig::default());
        assert!(AnalyzePhase.run(&mut ctx).is_err());
    }
}
