use std::{ops::Range, path::PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for valctx-manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the manifest content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Wrap a field parse error with the location of the entry in the manifest.
    ///
    /// `span` is the entry's span as reported by `toml`, quotes included.
    pub fn field_error(&self, index: usize, span: Range<usize>, source: Box<Error>) -> Box<Error> {
        Box::new(Error::InvalidField {
            src: self.named_source(),
            span: Some(string_content_span(span)),
            index,
            source,
        })
    }
}

/// Narrow the span of a quoted string to its content.
fn string_content_span(span: Range<usize>) -> SourceSpan {
    if span.len() < 2 {
        return SourceSpan::from(span);
    }
    SourceSpan::from((span.start + 1, span.len() - 2))
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("invalid format of field '{input}': {reason}")]
    #[diagnostic(
        code(valctx::invalid_format),
        help("fields look like Name, Name:int, Name:[]string or Name:github.com/user/pkg.Type")
    )]
    InvalidFormat { input: String, reason: String },

    #[error("unsupported flag format '{input}'")]
    #[diagnostic(code(valctx::unsupported_format))]
    UnsupportedFormat { input: String },

    #[error("name is required in field '{input}'")]
    #[diagnostic(code(valctx::missing_name))]
    MissingName { input: String },

    #[error("type is required in field '{input}'")]
    #[diagnostic(
        code(valctx::missing_type),
        help("drop the colon to store an untyped value")
    )]
    MissingType { input: String },

    #[error("failed to read '{path}'")]
    #[diagnostic(code(valctx::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest")]
    #[diagnostic(code(valctx::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid field #{index} in manifest")]
    #[diagnostic(code(valctx::invalid_field))]
    InvalidField {
        #[source_code]
        src: NamedSource<String>,
        #[label("{source}")]
        span: Option<SourceSpan>,
        index: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Malformed `name[:type]` syntax: a bad colon/dot/slash combination,
    /// or a missing name or type.
    pub fn is_format_error(&self) -> bool {
        match self {
            Self::InvalidFormat { .. } | Self::MissingName { .. } | Self::MissingType { .. } => {
                true
            }
            Self::InvalidField { source, .. } => source.is_format_error(),
            _ => false,
        }
    }

    /// A field kind and type text that do not belong together.
    pub fn is_unsupported(&self) -> bool {
        match self {
            Self::UnsupportedFormat { .. } => true,
            Self::InvalidField { source, .. } => source.is_unsupported(),
            _ => false,
        }
    }

    pub(crate) fn invalid_format(input: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        Box::new(Self::InvalidFormat {
            input: input.into(),
            reason: reason.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_content_span() {
        assert_eq!(string_content_span(10..18), SourceSpan::from((11, 6)));
        assert_eq!(string_content_span(4..5), SourceSpan::from((4, 1)));
    }

    #[test]
    fn test_error_classes() {
        let format = Error::invalid_format("a:b.c/d", "dot before slash");
        assert!(format.is_format_error());
        assert!(!format.is_unsupported());

        let unsupported = Error::UnsupportedFormat {
            input: "a:int".to_string(),
        };
        assert!(unsupported.is_unsupported());
        assert!(!unsupported.is_format_error());
    }

    #[test]
    fn test_field_error_keeps_class() {
        let ctx = SourceContext::new("fields = [\":int\"]", "valctx.toml");
        let err = ctx.field_error(
            0,
            10..16,
            Box::new(Error::MissingName {
                input: ":int".to_string(),
            }),
        );
        assert!(err.is_format_error());
        match *err {
            Error::InvalidField { span, index, .. } => {
                assert_eq!(index, 0);
                assert_eq!(span, Some(SourceSpan::from((11, 4))));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
