//! Check command report data structures.

use std::path::PathBuf;

use valctx_codegen::{GenerationField, GenerationRequest};

use super::output::{Output, Report};

/// Report data from field validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Manifest the fields came from, if any.
    pub config_path: Option<PathBuf>,
    /// The resolved model.
    pub request: GenerationRequest,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        let headline = match &self.config_path {
            Some(path) => format!("{} is valid", path.display()),
            None if self.request.fields.len() == 1 => "1 field is valid".to_string(),
            None => format!("{} fields are valid", self.request.fields.len()),
        };
        out.success(&headline);
        out.newline();

        out.key_value("Package", &self.request.package_name);
        out.newline();

        out.section("Imports");
        for path in &self.request.import_paths {
            out.list_item(path);
        }
        out.newline();

        out.section("Accessors");
        for field in &self.request.fields {
            out.list_item(&describe(field));
        }
    }
}

fn describe(field: &GenerationField) -> String {
    let returns = if field.is_untyped() {
        field.field_type.clone()
    } else {
        format!("({}, bool)", field.field_type)
    };
    format!(
        "{}(ctx) {} / {}(ctx, v {}) [key {}]",
        field.getter_name(),
        returns,
        field.setter_name(),
        field.field_type,
        field.key_name
    )
}
