//! Code building blocks.
//!
//! - [`CodeBuilder`] - Accumulates indented lines
//! - [`CodeFragment`] - Intermediate representation for pieces of code
//! - [`Renderable`] - Trait for syntax nodes that turn into fragments
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
