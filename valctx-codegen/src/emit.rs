//! Rendering a [`GenerationRequest`] into the generated Go file.

use std::path::{Path, PathBuf};

use valctx_core::GeneratedFile;
use valctx_ir::{GenerationField, GenerationRequest};

use crate::go::{Func, GoFile, Param, StructType};

/// Render `request` as Go source.
///
/// Output depends only on the request: equal requests render byte-identical
/// text.
pub fn emit(request: &GenerationRequest) -> String {
    let mut file = GoFile::new(&request.package_name)
        .header(format!(
            "Code generated by valctx {}. DO NOT EDIT.",
            request.tool_version
        ))
        .imports(&request.import_paths);

    for field in &request.fields {
        file = file
            .add(StructType::new(&field.key_name))
            .add(getter(field))
            .add(setter(field));
    }

    file.render()
}

fn getter(field: &GenerationField) -> Func {
    let name = field.getter_name();
    let func = Func::new(&name)
        .doc(format!(
            "{name} retrieves the {} from the context.",
            field.field_name
        ))
        .param(Param::new("ctx", "context.Context"));

    // An untyped slot has no type to assert, so there is no presence flag.
    if field.is_untyped() {
        func.returns(&field.field_type)
            .body_line(format!("v := ctx.Value({}{{}})", field.key_name))
            .body_line("return v")
    } else {
        func.returns(&field.field_type)
            .returns("bool")
            .body_line(format!(
                "v, ok := ctx.Value({}{{}}).({})",
                field.key_name, field.field_type
            ))
            .body_line("return v, ok")
    }
}

fn setter(field: &GenerationField) -> Func {
    let name = field.setter_name();
    Func::new(&name)
        .doc(format!(
            "{name} sets the {} in the context.",
            field.field_name
        ))
        .param(Param::new("ctx", "context.Context"))
        .param(Param::new("v", &field.field_type))
        .returns("context.Context")
        .body_line(format!(
            "return context.WithValue(ctx, {}{{}}, v)",
            field.key_name
        ))
}

/// The accessor file for one request, bound to its destination.
#[derive(Debug, Clone)]
pub struct AccessorFile {
    path: PathBuf,
    request: GenerationRequest,
}

impl AccessorFile {
    pub fn new(path: impl Into<PathBuf>, request: GenerationRequest) -> Self {
        Self {
            path: path.into(),
            request,
        }
    }

    pub fn request(&self) -> &GenerationRequest {
        &self.request
    }
}

impl GeneratedFile for AccessorFile {
    fn path(&self) -> &Path {
        &self.path
    }

    fn render(&self) -> String {
        emit(&self.request)
    }
}
