use std::path::PathBuf;

use blox_core::EntryRef;
use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ResolveCommand {
    /// Block name, as listed in blocks-index.json
    pub block: String,

    /// Directory holding the generated JSON artifacts
    #[arg(short, long, default_value = "registry")]
    pub artifacts: PathBuf,

    /// Entry to show in a detail block, as `contentType` or `contentType:slug`
    #[arg(short, long)]
    pub entry: Option<EntryRef>,
}

impl ResolveCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::resolve(&self.artifacts, &self.block, self.entry.clone())?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
