//! Validate phase - runs lints over the config.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::{Lint, LintInfo};
pub use lints::{
    BlockCollisionLint, CollectionReferenceLint, DesignSystemsLint, EmptyCollectionLint,
    MissingTitleLint,
};

use crate::pipeline::{CompilationContext, Phase};

/// Runs every configured lint and fails if any reported an error.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// The built-in lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(BlockCollisionLint),
                Box::new(CollectionReferenceLint),
                Box::new(DesignSystemsLint),
                Box::new(EmptyCollectionLint),
                Box::new(MissingTitleLint),
            ],
        }
    }

    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check block uniqueness and collection references"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for lint in &self.lints {
            lint.check(&ctx.config, &mut ctx.diagnostics);
        }

        if ctx.has_errors() {
            bail!("validation failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}
