//! Syntax nodes render to [`CodeFragment`]s, which a
//! [`CodeBuilder`](super::CodeBuilder) lays out with indentation.

/// A piece of generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeFragment {
    /// A single line (newline appended).
    Line(String),
    /// An empty line, never indented.
    Blank,
    /// A `// ` comment line.
    Comment(String),
    /// A header line, an indented body, and an optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Fragments applied in order.
    Sequence(Vec<CodeFragment>),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn comment(s: impl Into<String>) -> Self {
        Self::Comment(s.into())
    }

    /// A block closed by `}`.
    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::braced_with(header, body, "}")
    }

    /// A block with an explicit closing line, e.g. `)` for an import group.
    pub fn braced_with(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: impl Into<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: Some(close.into()),
        }
    }

    /// Join groups of fragments with a single blank line between them.
    pub fn separated<I>(groups: I) -> Self
    where
        I: IntoIterator<Item = Vec<CodeFragment>>,
    {
        let mut fragments = Vec::new();
        for group in groups {
            if !fragments.is_empty() {
                fragments.push(Self::Blank);
            }
            fragments.extend(group);
        }
        Self::Sequence(fragments)
    }
}

/// Anything that can be laid out as code.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl Renderable for CodeFragment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![self.clone()]
    }
}
