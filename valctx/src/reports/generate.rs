//! Generate command report data structures.

use std::path::PathBuf;

use valctx_core::WriteResult;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Go package of the generated file.
    pub package: String,
    /// Number of fields with accessors.
    pub field_count: usize,
    /// Generation result (file written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// The file was written, or already up to date.
    Written { path: PathBuf, write: WriteResult },
    /// Dry-run preview of the file content.
    Preview(String),
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            // Keep stdout byte-identical to the file so it can be redirected.
            GenerationResult::Preview(content) => out.raw(content),
            GenerationResult::Written { path, write } => {
                let fields = if self.field_count == 1 { "field" } else { "fields" };
                let msg = match write {
                    WriteResult::Written => format!(
                        "Generated {} ({} {}, package {})",
                        path.display(),
                        self.field_count,
                        fields,
                        self.package
                    ),
                    WriteResult::Unchanged => format!("{} is up to date", path.display()),
                };
                out.success(&msg);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    fn render(report: &GenerateReport) -> String {
        let mut out = BufferOutput::default();
        report.render(&mut out);
        out.0
    }

    #[test]
    fn test_preview_is_raw_content() {
        let report = GenerateReport {
            package: "gen".to_string(),
            field_count: 1,
            result: GenerationResult::Preview("package gen\n".to_string()),
        };
        assert_eq!(render(&report), "package gen\n");
    }

    #[test]
    fn test_written_summary() {
        let report = GenerateReport {
            package: "gen".to_string(),
            field_count: 2,
            result: GenerationResult::Written {
                path: PathBuf::from("ctx_gen.go"),
                write: WriteResult::Written,
            },
        };
        assert_eq!(
            render(&report),
            "✓ Generated ctx_gen.go (2 fields, package gen)\n"
        );
    }

    #[test]
    fn test_unchanged_summary() {
        let report = GenerateReport {
            package: "gen".to_string(),
            field_count: 1,
            result: GenerationResult::Written {
                path: PathBuf::from("ctx_gen.go"),
                write: WriteResult::Unchanged,
            },
        };
        assert_eq!(render(&report), "✓ ctx_gen.go is up to date\n");
    }
}
