//! Core utilities and types for the valctx generator.
//!
//! This crate provides the pieces shared by every other valctx crate that
//! are not about code generation itself: staging output files so the
//! destination is replaced atomically, build metadata, and the
//! first-letter case transforms used for Go identifiers.

mod build_info;
mod file;
mod utils;

pub use build_info::BuildInfo;
// File operations
pub use file::{File, GeneratedFile, SafeFile, WriteResult};
// String utilities
pub use utils::{lower_first, upper_first};
