//! Pipeline orchestrator.

use blox_manifest::{Config, ProjectConfig};
use eyre::Result;

use super::{
    CompilationContext, Phase, Plugin,
    phases::{AnalyzePhase, ExpandPhase, ValidatePhase},
};

/// Runs the built-in phases, then user phases, with plugin hooks around each.
///
/// ```ignore
/// let ctx = Pipeline::new()
///     .plugin(SnapshotPlugin::with_output_dir(".blox/debug"))
///     .run(config, project)?;
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Replace the built-in validate phase, e.g. to change its lints.
    pub fn validate_with(mut self, validate: ValidatePhase) -> Self {
        self.validate = validate;
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run every phase in order: validate, expand, analyze, user phases.
    ///
    /// # Errors
    ///
    /// Fails when a phase fails, including validation with error
    /// diagnostics. Use [`Pipeline::check`] to keep the diagnostics.
    pub fn run(&self, config: Config, project: ProjectConfig) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(config, project);
        self.run_all(&mut ctx)?;
        Ok(ctx)
    }

    /// Run the pipeline and hand back the context even when a phase fails,
    /// together with the failure.
    pub fn check(
        &self,
        config: Config,
        project: ProjectConfig,
    ) -> (CompilationContext, Result<()>) {
        let mut ctx = CompilationContext::new(config, project);
        let result = self.run_all(&mut ctx);
        (ctx, result)
    }

    fn run_all(&self, ctx: &mut CompilationContext) -> Result<()> {
        let builtin: [&dyn Phase; 3] = [&self.validate, &ExpandPhase, &AnalyzePhase];
        for phase in builtin {
            self.run_phase(phase, ctx)?;
        }
        for phase in &self.phases {
            self.run_phase(phase.as_ref(), ctx)?;
        }
        Ok(())
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();
        tracing::debug!(phase = phase_name, "running phase");

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::testing::{ConfigDir, hero_config};

    struct CountingPlugin {
        before: Arc<AtomicUsize>,
        after: Arc<AtomicUsize>,
    }

    impl Plugin for CountingPlugin {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn on_before_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.before.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn on_after_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.after.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct MarkPhase;

    impl Phase for MarkPhase {
        fn name(&self) -> &'static str {
            "mark"
        }

        fn description(&self) -> &'static str {
            "Record that user phases run last"
        }

        fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
            assert!(ctx.computed.is_some());
            ctx.add_info("mark", "ran");
            Ok(())
        }
    }

    #[test]
    fn test_pipeline_runs_phases() {
        let ctx = Pipeline::new()
            .run(hero_config().load(), ProjectConfig::default())
            .unwrap();

        assert_eq!(ctx.ir.as_ref().map(|ir| ir.blocks.len()), Some(2));
        assert!(ctx.computed.is_some());
    }

    #[test]
    fn test_pipeline_plugin_hooks() {
        let before = Arc::new(AtomicUsize::new(0));
        let after = Arc::new(AtomicUsize::new(0));
        let plugin = CountingPlugin {
            before: before.clone(),
            after: after.clone(),
        };

        Pipeline::new()
            .plugin(plugin)
            .phase(MarkPhase)
            .run(hero_config().load(), ProjectConfig::default())
            .unwrap();

        assert_eq!(before.load(Ordering::SeqCst), 4);
        assert_eq!(after.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_collision_stops_before_expand() {
        // "hero banner" and "hero-banner" slugify to the same block name.
        let config = ConfigDir::new()
            .file(
                "sections.json",
                r#"[
                  { "name": "hero banner", "templates": ["cover1"] },
                  { "name": "hero-banner", "templates": ["cover1"] }
                ]"#,
            )
            .file("templates.json", r#"[{ "name": "cover1" }]"#)
            .load();

        let (ctx, result) = Pipeline::new().check(config, ProjectConfig::default());
        assert!(result.is_err());
        assert!(ctx.ir.is_none());
        assert_eq!(ctx.error_count(), 2);
    }
}
