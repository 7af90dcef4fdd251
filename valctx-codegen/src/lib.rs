//! Field resolution and Go code emission for the valctx generator.
//!
//! ```text
//! FieldDescriptor* ──resolve──▶ GenerationRequest ──emit──▶ Go source text
//! ```
//!
//! # Module Organization
//!
//! - [`resolve`] - Turns descriptors into a validated [`GenerationRequest`]
//! - [`emit`] - Renders a request into the generated Go file
//! - [`builder`] - Indentation-aware code building blocks
//! - [`go`] - Go syntax nodes (functions, struct types, files)
//! - [`naming`] - Go identifier rules and the names derived from a field
//! - [`testing`] - Test utilities (feature-gated)

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod builder;
pub mod emit;
mod error;
pub mod go;
mod go_types;
pub mod naming;
pub mod resolve;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use emit::{AccessorFile, emit};
pub use error::{ResolveError, Result};
pub use resolve::resolve;
pub use valctx_ir::{GenerationField, GenerationRequest};
use valctx_manifest::FieldDescriptor;

/// Resolve `descriptors` and render the Go file in one step.
pub fn generate(
    package_name: &str,
    tool_version: &str,
    descriptors: &[FieldDescriptor],
) -> Result<String> {
    let request = resolve(package_name, tool_version, descriptors)?;
    Ok(emit(&request))
}
