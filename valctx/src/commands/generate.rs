use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use tracing::info;

use super::{UnwrapOrExit, input::InputArgs};
use crate::{
    build_info::BUILD_INFO,
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args, Debug)]
pub struct GenerateCommand {
    /// Go file to write
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub input: InputArgs,

    /// Print the generated file to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let inputs = self.input.load(self.output.clone(), !self.dry_run);

        let request = valctx_codegen::resolve(
            &inputs.package,
            &BUILD_INFO.tool_version(),
            &inputs.fields,
        )
        .unwrap_or_exit();
        info!(
            package = %request.package_name,
            fields = request.fields.len(),
            imports = request.import_paths.len(),
            "resolved fields"
        );

        let report = ops::generate(
            request,
            GenerateOptions {
                output: inputs.output.as_deref(),
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
