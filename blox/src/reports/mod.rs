//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod bake;
mod check;
mod clean;
mod list;
mod output;
mod resolve;

pub use bake::{
    BakeReport, GenerationResult, PreviewFile, PreviewResult, RegistrySummary, WrittenResult,
};
pub use check::CheckReport;
pub use clean::CleanReport;
pub use list::{ListReport, ListedBlock};
pub use output::{Report, TerminalOutput};
pub use resolve::ResolveReport;
