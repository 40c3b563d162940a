//! Compilation pipeline from parsed config to registry IR.
//!
//! [`Pipeline`] runs the built-in phases (validate → expand → analyze)
//! followed by any user phases, calling plugin hooks around each one.
//! Diagnostics from every phase accumulate on the [`CompilationContext`].
//!
//! ```ignore
//! use blox_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(config, project)?;
//! for diag in ctx.warnings() {
//!     eprintln!("{}", diag);
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
