mod bake;
mod check;
mod clean;
mod list;
mod resolve;

use std::path::Path;

use bake::BakeCommand;
use blox_manifest::{Config, ProjectConfig};
use check::CheckCommand;
use clap::{Parser, Subcommand};
use clean::CleanCommand;
use eyre::Result;
use list::ListCommand;
use resolve::ResolveCommand;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for blox_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Read the config directory and the optional project file.
pub(crate) fn load_inputs(config_dir: &Path, project_file: &Path) -> (Config, ProjectConfig) {
    let project = ProjectConfig::load_or_default(project_file).unwrap_or_exit();
    let config = Config::from_dir(config_dir).unwrap_or_exit();
    (config, project)
}

#[derive(Parser)]
#[command(name = "blox")]
#[command(version)]
#[command(about = "Build a React component registry from a JSON site configuration")]
pub(crate) struct Cli {
    /// Log debug output (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Bake(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Resolve(cmd) => cmd.run(),
            Commands::Clean(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the registry, components and JSON indexes
    Bake(BakeCommand),

    /// Validate the config directory without generating anything
    Check(CheckCommand),

    /// List every block the config expands to
    List(ListCommand),

    /// Print the hydrated content of one block from generated artifacts
    Resolve(ResolveCommand),

    /// Remove components of blocks that are no longer in the registry
    Clean(CleanCommand),
}
