use clap::Args;
use eyre::{Context, Result};

use super::{UnwrapOrExit, input::InputArgs};
use crate::{
    build_info::BUILD_INFO,
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args, Debug)]
pub struct CheckCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print the resolved model as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let inputs = self.input.load(None, false);

        let request = valctx_codegen::resolve(
            &inputs.package,
            &BUILD_INFO.tool_version(),
            &inputs.fields,
        )
        .unwrap_or_exit();

        let report = ops::check(request, self.input.config.as_deref());
        if self.json {
            let json = serde_json::to_string_pretty(&report.request)
                .wrap_err("Failed to serialize the resolved fields")?;
            println!("{json}");
        } else {
            report.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}
