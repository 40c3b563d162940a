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
pub struct CleanCommand {
    /// Config directory with theme.json and sections.json
    #[arg(short, long, default_value = "data")]
    pub config: PathBuf,

    /// Output directory of the registry
    #[arg(short, long, default_value = "registry")]
    pub output: PathBuf,

    /// Path to blox.toml (optional)
    #[arg(short, long, default_value = PROJECT_FILE)]
    pub project: PathBuf,

    /// Preview what would be deleted without actually deleting
    #[arg(long)]
    pub dry_run: bool,
}

impl CleanCommand {
    pub fn run(&self) -> Result<()> {
        let (config, project) = load_inputs(&self.config, &self.project);

        let report = ops::clean(
            config,
            project,
            ops::clean::CleanOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
