//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod output;
mod version;

pub use check::CheckReport;
pub use generate::{GenerateReport, GenerationResult};
pub use output::{Report, TerminalOutput};
pub use version::VersionReport;
