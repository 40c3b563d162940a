use std::path::PathBuf;

use blox_manifest::PROJECT_FILE;
use clap::Args;
use eyre::Result;

use super::load_inputs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BakeCommand {
    /// Config directory with theme.json and sections.json
    #[arg(short, long, default_value = "data")]
    pub config: PathBuf,

    /// Output directory for the registry
    #[arg(short, long, default_value = "registry")]
    pub output: PathBuf,

    /// Path to blox.toml (optional)
    #[arg(short, long, default_value = PROJECT_FILE)]
    pub project: PathBuf,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Generate components with the LLM strategy (overrides blox.toml)
    #[arg(long)]
    pub ai: bool,

    /// Write per-phase pipeline snapshots to <output>/.blox/debug
    #[arg(long)]
    pub visualize: bool,
}

impl BakeCommand {
    pub fn run(&self) -> Result<()> {
        let (config, project) = load_inputs(&self.config, &self.project);

        let report = ops::bake(
            config,
            project,
            ops::bake::BakeOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
                ai: self.ai,
                visualize: self.visualize,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
