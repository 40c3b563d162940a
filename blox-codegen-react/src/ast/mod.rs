//! TypeScript and JSX syntax builders.
//!
//! Nodes describe themselves as [`CodeFragment`](blox_codegen::builder::CodeFragment)s
//! and are laid out by [`CodeFile`](crate::CodeFile).

mod consts;
mod exports;
mod function;
mod imports;
mod interface;
mod jsx;

pub use consts::Const;
pub use exports::Export;
pub use function::Function;
pub use imports::Import;
pub use interface::{Interface, InterfaceField, property_key};
pub use jsx::{JsxChild, JsxElement};
