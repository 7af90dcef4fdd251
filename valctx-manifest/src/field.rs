//! Parsing of `name[:type]` field specifications.

use std::{fmt, str::FromStr};

use valctx_core::upper_first;

use crate::{Error, Result};

/// How the type of a field was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// No type: the value is stored untyped.
    Default,
    /// A type made only of built-in syntax (`int`, `[]string`, `map[string]any`).
    BuiltinOnly,
    /// A package-qualified type (`github.com/user/pkg.User`).
    CustomType,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::BuiltinOnly => "builtin",
            Self::CustomType => "custom",
        }
    }
}

/// One requested context field, as parsed from its specification.
///
/// Immutable once built: every constructor validates, so a descriptor in
/// hand always satisfies the kind/type invariants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    name: String,
    kind: FieldKind,
    raw_type: String,
}

impl FieldDescriptor {
    /// Build a descriptor from already split parts.
    ///
    /// The first letter of `name` is upper-cased.
    pub fn new(name: &str, kind: FieldKind, raw_type: &str) -> Result<Self> {
        let descriptor = Self {
            name: upper_first(name),
            kind,
            raw_type: raw_type.to_string(),
        };
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Parse `name` or `name:type`.
    ///
    /// Only the first colon splits; whitespace around both parts is trimmed.
    /// A type whose last `.` follows its last `/` (or that has no `/`) is a
    /// package-qualified custom type, a type without any `.` is built-in
    /// syntax, and anything else is rejected.
    pub fn parse(raw: &str) -> Result<Self> {
        let Some((name, ty)) = raw.split_once(':') else {
            return Self::new(raw.trim(), FieldKind::Default, "").map_err(|e| with_input(e, raw));
        };

        let ty = ty.trim();
        let kind = match (ty.rfind('.'), ty.rfind('/')) {
            (None, _) => FieldKind::BuiltinOnly,
            (Some(dot), Some(slash)) if dot < slash => {
                return Err(Error::invalid_format(
                    raw,
                    "the last '.' must come after the last '/' to separate the package from the type",
                ));
            }
            (Some(_), _) => FieldKind::CustomType,
        };

        Self::new(name.trim(), kind, ty).map_err(|e| with_input(e, raw))
    }

    /// Check the kind/type invariants.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Box::new(Error::MissingName {
                input: self.to_string(),
            }));
        }

        let has_dot = self.raw_type.contains('.');
        match self.kind {
            FieldKind::Default if self.raw_type.is_empty() => Ok(()),
            FieldKind::BuiltinOnly | FieldKind::CustomType if self.raw_type.is_empty() => {
                Err(Box::new(Error::MissingType {
                    input: self.to_string(),
                }))
            }
            FieldKind::BuiltinOnly if !has_dot => Ok(()),
            FieldKind::CustomType if has_dot => Ok(()),
            _ => Err(Box::new(Error::UnsupportedFormat {
                input: self.to_string(),
            })),
        }
    }

    /// Normalized (exported) field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Type text exactly as supplied; empty for [`FieldKind::Default`].
    pub fn raw_type(&self) -> &str {
        &self.raw_type
    }

    /// Import path of a custom type: everything before the last `.`.
    pub fn import_path(&self) -> Option<&str> {
        self.split_custom().map(|(path, _)| path)
    }

    /// Bare type name: the segment after the last `.` for a custom type, the
    /// raw type for built-in syntax.
    pub fn type_name(&self) -> Option<&str> {
        match self.kind {
            FieldKind::Default => None,
            FieldKind::BuiltinOnly => Some(&self.raw_type),
            FieldKind::CustomType => self.split_custom().map(|(_, name)| name),
        }
    }

    fn split_custom(&self) -> Option<(&str, &str)> {
        match self.kind {
            FieldKind::CustomType => self.raw_type.rsplit_once('.'),
            _ => None,
        }
    }
}

/// Rewrite the reported input of an error to the raw text the user typed.
fn with_input(mut err: Box<Error>, raw: &str) -> Box<Error> {
    match err.as_mut() {
        Error::InvalidFormat { input, .. }
        | Error::UnsupportedFormat { input }
        | Error::MissingName { input }
        | Error::MissingType { input } => *input = raw.to_string(),
        _ => {}
    }
    err
}

impl FromStr for FieldDescriptor {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FieldKind::Default => f.write_str(&self.name),
            _ => write!(f, "{}:{}", self.name, self.raw_type),
        }
    }
}

/// Parse a sequence of field specifications, stopping at the first error.
pub fn parse_fields<I, S>(raw: I) -> Result<Vec<FieldDescriptor>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .map(|s| FieldDescriptor::parse(s.as_ref()))
        .collect()
}
