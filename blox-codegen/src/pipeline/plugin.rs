//! Pipeline plugin trait.

use eyre::Result;

use super::CompilationContext;

/// Hooks called around every phase. Returning an error aborts the run.
pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;

    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }

    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }
}
