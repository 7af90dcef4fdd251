//! Structured generation of a whole Go source file.

use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// A Go file: header comment, package clause, import block, and
/// declarations separated by blank lines.
#[derive(Debug, Clone)]
pub struct GoFile {
    header: Option<String>,
    package: String,
    imports: Vec<String>,
    body: Vec<Vec<CodeFragment>>,
}

impl GoFile {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            header: None,
            package: package.into(),
            imports: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Comment placed above the package clause.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Add import paths, rendered in the given order.
    pub fn imports(mut self, paths: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.imports.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Add a top-level declaration.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::default();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for GoFile {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut sections = Vec::new();

        if let Some(header) = &self.header {
            sections.push(vec![CodeFragment::comment(header)]);
        }
        sections.push(vec![CodeFragment::line(format!("package {}", self.package))]);
        if !self.imports.is_empty() {
            sections.push(vec![CodeFragment::braced_with(
                "import (",
                self.imports
                    .iter()
                    .map(|path| CodeFragment::line(format!("\"{path}\"")))
                    .collect(),
                ")",
            )]);
        }
        sections.extend(self.body.iter().cloned());

        vec![CodeFragment::separated(sections)]
    }
}
