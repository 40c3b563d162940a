//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

#[derive(Debug, Clone)]
pub struct PhaseInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A step of the compilation pipeline.
///
/// Built-in phases:
/// - `ValidatePhase` - runs lints over the config
/// - `ExpandPhase` - builds the registry IR
/// - `AnalyzePhase` - computes shared data from the IR
pub trait Phase: Send + Sync {
    /// Name used in diagnostics, plugin hooks and snapshot file names.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Run the phase. Non-fatal issues go into `ctx.diagnostics`.
    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;

    fn info(&self) -> PhaseInfo {
        PhaseInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
