use super::{CodeFragment, Indent, Renderable};

/// Accumulates lines of code at the current indentation level.
///
/// ```
/// use valctx_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::default();
/// builder
///     .push_line("func main() {")
///     .push_indent()
///     .push_line("println(\"hi\")")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "func main() {\n    println(\"hi\")\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Add a line at the current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add an empty line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add a `// ` comment line.
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("// ");
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Lay out a syntax node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Comment(text) => {
                self.push_comment(&text);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.indent.write_to(&mut self.buffer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_has_no_indent() {
        let mut builder = CodeBuilder::default();
        builder
            .push_indent()
            .push_line("a")
            .push_blank()
            .push_line("b");
        assert_eq!(builder.build(), "    a\n\n    b\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::default();
        builder.push_dedent().push_dedent();
        builder.push_line("x");
        assert_eq!(builder.build(), "x\n");
    }

    #[test]
    fn test_comment() {
        let mut builder = CodeBuilder::new(Indent::Tab);
        builder.push_indent().push_comment("note");
        assert_eq!(builder.build(), "\t// note\n");
    }

    #[test]
    fn test_emit_nested_blocks() {
        let node = CodeFragment::braced(
            "func f() {",
            vec![
                CodeFragment::braced("if ok {", vec![CodeFragment::line("return")]),
                CodeFragment::Blank,
                CodeFragment::comment("done"),
            ],
        );

        let mut builder = CodeBuilder::default();
        builder.emit(&node);
        assert_eq!(
            builder.build(),
            "func f() {\n    if ok {\n        return\n    }\n\n    // done\n}\n"
        );
    }

    #[test]
    fn test_block_without_close() {
        let mut builder = CodeBuilder::default();
        builder.apply_fragment(CodeFragment::Block {
            header: "case 1:".to_string(),
            body: vec![CodeFragment::line("x()")],
            close: None,
        });
        assert_eq!(builder.build(), "case 1:\n    x()\n");
    }
}
