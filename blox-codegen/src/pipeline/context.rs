//! State carried through the pipeline phases.

use blox_ir::RegistryIR;
use blox_manifest::{Config, ProjectConfig};
use eyre::{Result, eyre};

use super::diagnostic::{Diagnostic, Severity};
use crate::ComputedData;

#[derive(Debug)]
pub struct CompilationContext {
    /// The parsed config directory.
    pub config: Config,
    /// Settings from `blox.toml`, or defaults.
    pub project: ProjectConfig,
    /// Registry IR, set by the expand phase.
    pub ir: Option<RegistryIR>,
    /// Analysis data, set by the analyze phase.
    pub computed: Option<ComputedData>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(config: Config, project: ProjectConfig) -> Self {
        Self {
            config,
            project,
            ir: None,
            computed: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// The registry IR, or an error if the expand phase has not run.
    pub fn ir(&self) -> Result<&RegistryIR> {
        self.ir
            .as_ref()
            .ok_or_else(|| eyre!("registry IR not set - did ExpandPhase run?"))
    }

    pub fn take_ir(&mut self) -> Result<RegistryIR> {
        self.ir
            .take()
            .ok_or_else(|| eyre!("registry IR not set - did ExpandPhase run?"))
    }

    pub fn take_computed(&mut self) -> Result<ComputedData> {
        self.computed
            .take()
            .ok_or_else(|| eyre!("computed data not set - did AnalyzePhase run?"))
    }
}
