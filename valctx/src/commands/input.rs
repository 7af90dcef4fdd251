use std::path::PathBuf;

use clap::Args;
use tracing::debug;
use valctx_manifest::{FieldDescriptor, Manifest, ManifestFile, parse_fields};

use super::{UnwrapOrExit, usage_error};

/// Field and package selection shared by the commands that resolve fields.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Go package name of the generated file
    #[arg(short, long, value_name = "NAME")]
    pub package: Option<String>,

    /// Field to generate accessors for: Name, Name:type or Name:import/path.Type (repeatable)
    #[arg(short, long = "field", value_name = "SPEC")]
    pub fields: Vec<String>,

    /// Read package, output and fields from a valctx.toml manifest
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Flags merged over the optional manifest.
#[derive(Debug)]
pub struct Inputs {
    pub package: String,
    pub output: Option<PathBuf>,
    pub fields: Vec<FieldDescriptor>,
}

impl InputArgs {
    /// Merge flags over the manifest and parse every field.
    ///
    /// Flags override the manifest's package and output; flag fields come
    /// after the manifest's fields. Missing inputs are usage errors, checked
    /// in order (output, package, fields) before any field is parsed.
    pub fn load(&self, output: Option<PathBuf>, require_output: bool) -> Inputs {
        let manifest = self.manifest();

        let output = output.or(manifest.output);
        if require_output && output.is_none() {
            usage_error("output file is required");
        }
        let Some(package) = self.package.clone().or(manifest.package) else {
            usage_error("package name is required");
        };
        if manifest.fields.is_empty() && self.fields.is_empty() {
            usage_error("at least one field is required");
        }

        let mut fields = manifest.fields;
        fields.extend(parse_fields(&self.fields).unwrap_or_exit());

        Inputs {
            package,
            output,
            fields,
        }
    }

    fn manifest(&self) -> Manifest {
        match &self.config {
            Some(path) => {
                let file = ManifestFile::open(path).unwrap_or_exit();
                debug!(
                    config = %file.path().display(),
                    fields = file.manifest().fields.len(),
                    "loaded manifest"
                );
                file.into_manifest()
            }
            None => Manifest::default(),
        }
    }
}
