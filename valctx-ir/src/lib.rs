//! Intermediate representation types for the valctx generator.
//!
//! # Architecture
//!
//! ```text
//! --field flags / valctx.toml → valctx-manifest (parsing) → valctx-ir (this crate) → codegen
//! ```
//!
//! A [`GenerationRequest`] is built once by the resolver, rendered once by the
//! emitter, then discarded. Nothing in here validates; the resolver only
//! produces requests whose invariants already hold.

mod request;

pub use request::{CONTEXT_IMPORT, GenerationField, GenerationRequest, UNTYPED};
