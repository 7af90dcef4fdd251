use clap::Args;
use eyre::Result;

use crate::{
    build_info::BUILD_INFO,
    reports::{Report, TerminalOutput, VersionReport},
};

#[derive(Args, Debug)]
pub struct VersionCommand {}

impl VersionCommand {
    pub fn run(&self) -> Result<()> {
        VersionReport { info: BUILD_INFO }.render(&mut TerminalOutput::new());
        Ok(())
    }
}
