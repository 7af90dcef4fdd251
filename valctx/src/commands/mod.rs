mod check;
mod completions;
mod generate;
mod input;
mod version;

use check::CheckCommand;
use clap::{CommandFactory, Parser, Subcommand, error::ErrorKind};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use version::VersionCommand;

/// Exit code for usage and validation errors, matching clap's own.
const USAGE_EXIT_CODE: i32 = 2;

/// Exit code for I/O and generation failures.
const FAILURE_EXIT_CODE: i32 = 1;

/// Extension trait for exiting on validation errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for valctx_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                let code = match *e {
                    valctx_manifest::Error::Io { .. } => FAILURE_EXIT_CODE,
                    _ => USAGE_EXIT_CODE,
                };
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(code);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for valctx_codegen::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(USAGE_EXIT_CODE);
            }
        }
    }
}

/// Report a usage error the way clap does and exit.
pub(crate) fn usage_error(message: &str) -> ! {
    Cli::command()
        .error(ErrorKind::MissingRequiredArgument, message)
        .exit()
}

#[derive(Parser)]
#[command(name = "valctx")]
#[command(version)]
#[command(about = "Generate convenient setters and getters for Go context values")]
#[command(
    after_help = "Fields look like Name, Name:int, Name:[]string or Name:github.com/user/pkg.Type"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    generate: GenerateCommand,

    /// Log what valctx is doing to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            None => self.generate.run(),
            Some(Commands::Check(cmd)) => cmd.run(),
            Some(Commands::Version(cmd)) => cmd.run(),
            Some(Commands::Completions(cmd)) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate fields and show the resolved accessors without writing
    Check(CheckCommand),

    /// Show version and build information
    Version(VersionCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
