//! Validation of Go type expressions that use no imported package.
//!
//! A small recursive-descent parser over the type grammar: predeclared names,
//! pointers, slices, arrays, maps, channels, function types, and the empty
//! `interface{}` and `struct{}` literals.

/// Predeclared Go types usable without an import.
pub const PREDECLARED_TYPES: &[&str] = &[
    "any", "bool", "byte", "complex64", "complex128", "error", "float32", "float64", "int",
    "int8", "int16", "int32", "int64", "rune", "string", "uint", "uint8", "uint16", "uint32",
    "uint64", "uintptr",
];

/// Deepest nesting of type literals accepted before giving up.
pub const MAX_NESTING: usize = 100;

/// Check that `ty` is a complete Go type expression built only from
/// predeclared types.
pub fn validate_builtin_type(ty: &str) -> Result<(), String> {
    let mut parser = TypeParser::new(ty);
    parser.parse_type()?;
    parser.skip_ws();
    if !parser.at_end() {
        return Err(format!("unexpected '{}' after the type", parser.rest()));
    }
    Ok(())
}

struct TypeParser<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> TypeParser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            depth: 0,
        }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn skip_ws(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.src.len() - trimmed.len();
    }

    /// Consume `token` (after whitespace) if it is next.
    fn eat(&mut self, token: &str) -> bool {
        self.skip_ws();
        if self.rest().starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: &str) -> Result<(), String> {
        if self.eat(token) {
            Ok(())
        } else {
            Err(self.unexpected(&format!("'{token}'")))
        }
    }

    fn unexpected(&self, wanted: &str) -> String {
        match self.peek() {
            Some(c) => format!("expected {wanted}, found '{c}'"),
            None => format!("expected {wanted}, found end of input"),
        }
    }

    fn word(&mut self) -> &'a str {
        self.skip_ws();
        let rest = self.rest();
        let len = rest
            .char_indices()
            .find(|&(_, c)| !(c.is_alphanumeric() || c == '_'))
            .map_or(rest.len(), |(i, _)| i);
        self.pos += len;
        &rest[..len]
    }

    fn parse_type(&mut self) -> Result<(), String> {
        if self.depth >= MAX_NESTING {
            return Err("type is nested too deeply".to_string());
        }
        self.depth += 1;
        let result = self.parse_type_expr();
        self.depth -= 1;
        result
    }

    fn parse_type_expr(&mut self) -> Result<(), String> {
        self.skip_ws();
        match self.peek() {
            Some('*') => {
                self.pos += 1;
                self.parse_type()
            }
            Some('[') => {
                self.pos += 1;
                self.skip_ws();
                let digits = self
                    .rest()
                    .chars()
                    .take_while(char::is_ascii_digit)
                    .count();
                self.pos += digits;
                self.expect("]")?;
                self.parse_type()
            }
            Some('(') => {
                self.pos += 1;
                self.parse_type()?;
                self.expect(")")
            }
            Some('<') => {
                self.expect("<-")?;
                if self.word() != "chan" {
                    return Err("expected 'chan' after '<-'".to_string());
                }
                self.parse_type()
            }
            Some(c) if c.is_alphabetic() || c == '_' => self.parse_named(),
            _ => Err(self.unexpected("a type")),
        }
    }

    fn parse_named(&mut self) -> Result<(), String> {
        match self.word() {
            "map" => {
                self.expect("[")?;
                self.parse_type()?;
                self.expect("]")?;
                self.parse_type()
            }
            "chan" => {
                self.eat("<-");
                self.parse_type()
            }
            "interface" | "struct" => {
                self.expect("{")?;
                self.expect("}")
            }
            "func" => self.parse_signature(),
            name if PREDECLARED_TYPES.contains(&name) => Ok(()),
            name => Err(format!("'{name}' is not a predeclared type")),
        }
    }

    fn parse_signature(&mut self) -> Result<(), String> {
        self.parse_type_list(true)?;

        self.skip_ws();
        match self.peek() {
            Some('(') => self.parse_type_list(false),
            Some(c) if c == '*' || c == '[' || c == '<' || c.is_alphabetic() || c == '_' => {
                self.parse_type()
            }
            _ => Ok(()),
        }
    }

    /// Parse `( [T {, T} [,]] )`, allowing `...T` last when `variadic`.
    fn parse_type_list(&mut self, variadic: bool) -> Result<(), String> {
        self.expect("(")?;
        loop {
            if self.eat(")") {
                return Ok(());
            }
            let spread = variadic && self.eat("...");
            self.parse_type()?;
            if spread {
                return self.expect(")");
            }
            if !self.eat(",") {
                return self.expect(")");
            }
        }
    }
}
