//! Input model for the valctx generator.
//!
//! Turns `name[:type]` field specifications (from `--field` flags or a
//! `valctx.toml` manifest) into validated [`FieldDescriptor`]s.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod field;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use field::{FieldDescriptor, FieldKind, parse_fields};
pub use manifest::{Manifest, ManifestFile};
