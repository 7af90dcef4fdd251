//! Go syntax nodes used by the emitter.

mod ast;
mod go_file;

pub use ast::{Func, Param, StructType};
pub use go_file::GoFile;
