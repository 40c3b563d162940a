//! Compilation pipeline and code generation utilities for the blox
//! registry builder.
//!
//! # Module Organization
//!
//! - [`pipeline`] - validate → expand → analyze phases, lints and plugins
//! - [`expansion`] - section × template × design system expansion
//! - [`builder`] - code generation building blocks (CodeBuilder, CodeFragment)
//! - [`generator`] - the [`Generator`] trait implemented by output targets
//! - [`testing`] - config fixtures (feature-gated)

pub mod builder;
mod computed;
pub mod expansion;
pub mod generator;
pub mod pipeline;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use computed::ComputedData;
pub use generator::{CleanResult, GenerateResult, Generator, PreviewFile};
