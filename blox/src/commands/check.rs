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
pub struct CheckCommand {
    /// Config directory with theme.json and sections.json
    #[arg(short, long, default_value = "data")]
    pub config: PathBuf,

    /// Path to blox.toml (optional)
    #[arg(short, long, default_value = PROJECT_FILE)]
    pub project: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let (config, project) = load_inputs(&self.config, &self.project);

        let report = ops::check(config, project, &self.config);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
