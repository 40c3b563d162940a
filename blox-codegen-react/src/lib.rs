//! React/Next.js output for the blox registry builder.
//!
//! [`ReactGenerator`] writes, into the output directory:
//!
//! - `registry.json`, `blocks-index.json`, `collections-data.json` and
//!   `content-types.json`
//! - `components/blocks/<block-name>.tsx`, one presentational component per block
//! - `components/blocks/index.ts`, mapping every block name to its component
//!
//! Component sources come from a [`strategy::ComponentStrategy`]. The
//! built-in templates are always available; an LLM strategy can be put in
//! front of them and falls back to the templates block by block.
//!
//! ```ignore
//! use blox_codegen::{Generator, pipeline::Pipeline};
//! use blox_codegen_react::ReactGenerator;
//!
//! let ctx = Pipeline::new().run(config, project)?;
//! let result = ReactGenerator::from_context(ctx)?.generate(Path::new("registry"))?;
//! ```

mod code_file;
mod generator;

pub mod ast;
pub mod files;
pub mod strategy;

pub use blox_codegen::{CleanResult, GenerateResult, Generator, PreviewFile};
pub use code_file::{CodeFile, RawCode};
pub use generator::ReactGenerator;
