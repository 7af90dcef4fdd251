//! Generate operation - writing the accessor file.

use std::path::Path;

use eyre::{Context, Result, eyre};
use tracing::{debug, info};
use valctx_codegen::{AccessorFile, GenerationRequest, emit};
use valctx_core::GeneratedFile;

use crate::reports::{GenerateReport, GenerationResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Destination file; optional only for dry runs.
    pub output: Option<&'a Path>,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// The destination is replaced atomically; on error it is left untouched.
pub fn generate(request: GenerationRequest, opts: GenerateOptions) -> Result<GenerateReport> {
    let package = request.package_name.clone();
    let field_count = request.fields.len();

    let result = if opts.dry_run {
        GenerationResult::Preview(emit(&request))
    } else {
        let output = opts
            .output
            .ok_or_else(|| eyre!("output file is required"))?;
        let file = AccessorFile::new(output, request);

        debug!(output = %output.display(), "writing accessor file");
        let write = file
            .write()
            .wrap_err_with(|| format!("Failed to write '{}'", output.display()))?;
        info!(output = %output.display(), ?write, "accessor file done");

        GenerationResult::Written {
            path: output.to_path_buf(),
            write,
        }
    };

    Ok(GenerateReport {
        package,
        field_count,
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use valctx_core::WriteResult;
    use valctx_manifest::parse_fields;

    use super::*;

    fn request() -> GenerationRequest {
        let fields = parse_fields(["UserID", "Field1:int"]).unwrap();
        valctx_codegen::resolve("gen", "v0.3.0", &fields).unwrap()
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ctx_gen.go");

        let report = generate(
            request(),
            GenerateOptions {
                output: Some(&path),
                dry_run: true,
            },
        )
        .unwrap();

        assert!(!path.exists());
        match report.result {
            GenerationResult::Preview(content) => assert!(content.contains("func GetField1")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_write_then_unchanged() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("pkg").join("ctx_gen.go");
        let opts = || GenerateOptions {
            output: Some(&path),
            dry_run: false,
        };

        let report = generate(request(), opts()).unwrap();
        assert_eq!(report.field_count, 2);
        assert!(matches!(
            report.result,
            GenerationResult::Written { write: WriteResult::Written, .. }
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), emit(&request()));

        let report = generate(request(), opts()).unwrap();
        assert!(matches!(
            report.result,
            GenerationResult::Written { write: WriteResult::Unchanged, .. }
        ));
    }

    #[test]
    fn test_output_is_directory() {
        let temp = TempDir::new().unwrap();

        let err = generate(
            request(),
            GenerateOptions {
                output: Some(temp.path()),
                dry_run: false,
            },
        )
        .unwrap_err();

        assert!(format!("{err:?}").contains("is a directory"));
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }
}
