use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// A named, typed parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    fn format(&self) -> String {
        format!("{} {}", self.name, self.ty)
    }
}

/// Builder for a top-level Go function.
#[derive(Debug, Clone)]
pub struct Func {
    name: String,
    doc: Option<String>,
    params: Vec<Param>,
    results: Vec<String>,
    body: Vec<String>,
}

impl Func {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            params: Vec::new(),
            results: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Doc comment, rendered as `// <doc>` above the function.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Add a result type. Two or more results are parenthesized.
    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.results.push(ty.into());
        self
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    fn signature(&self) -> String {
        let params = self
            .params
            .iter()
            .map(Param::format)
            .collect::<Vec<_>>()
            .join(", ");

        match self.results.as_slice() {
            [] => format!("func {}({}) {{", self.name, params),
            [one] => format!("func {}({}) {} {{", self.name, params, one),
            many => format!("func {}({}) ({}) {{", self.name, params, many.join(", ")),
        }
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::default();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Func {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::comment(doc));
        }
        fragments.push(CodeFragment::braced(
            self.signature(),
            self.body.iter().map(CodeFragment::line).collect(),
        ));
        fragments
    }
}

/// A `type <name> struct{}` declaration.
#[derive(Debug, Clone)]
pub struct StructType {
    name: String,
}

impl StructType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Renderable for StructType {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!("type {} struct{{}}", self.name))]
    }
}
