//! The optional `valctx.toml` manifest.
//!
//! ```toml
//! package = "gen"
//! output = "ctxvalues_gen.go"
//! fields = ["UserID", "Field1:int", "User:github.com/user/pkg.User"]
//! ```

mod file;

use std::{path::PathBuf, str::FromStr};

pub use file::ManifestFile;
use serde::Deserialize;
use toml::Spanned;

use crate::{FieldDescriptor, Result, SourceContext};

/// Default manifest filename used in error reports.
const DEFAULT_FILENAME: &str = "valctx.toml";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    package: Option<String>,
    output: Option<PathBuf>,
    #[serde(default)]
    fields: Vec<Spanned<String>>,
}

/// Parsed `valctx.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    /// Target Go package name.
    pub package: Option<String>,
    /// Output file path.
    pub output: Option<PathBuf>,
    /// Fields in file order.
    pub fields: Vec<FieldDescriptor>,
}

impl Manifest {
    /// Parse a manifest with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let source_ctx = SourceContext::new(content, filename);
        let raw: RawManifest =
            toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;

        let fields = raw
            .fields
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                FieldDescriptor::parse(entry.get_ref())
                    .map_err(|e| source_ctx.field_error(index, entry.span(), e))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            package: raw.package,
            output: raw.output,
            fields,
        })
    }
}

impl FromStr for Manifest {
    type Err = Box<crate::Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, DEFAULT_FILENAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, FieldKind};

    #[test]
    fn test_parse_full_manifest() {
        let manifest: Manifest = r#"
            package = "gen"
            output = "ctxvalues_gen.go"
            fields = ["UserID", "field1:int", "User:github.com/user/pkg.User"]
        "#
        .parse()
        .unwrap();

        assert_eq!(manifest.package.as_deref(), Some("gen"));
        assert_eq!(manifest.output, Some(PathBuf::from("ctxvalues_gen.go")));
        let kinds: Vec<_> = manifest.fields.iter().map(|f| f.kind()).collect();
        assert_eq!(
            kinds,
            [FieldKind::Default, FieldKind::BuiltinOnly, FieldKind::CustomType]
        );
        assert_eq!(manifest.fields[1].name(), "Field1");
    }

    #[test]
    fn test_everything_is_optional() {
        let manifest: Manifest = "".parse().unwrap();
        assert_eq!(manifest, Manifest::default());
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = "pkg = \"gen\"".parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_invalid_field_points_at_entry() {
        let err = Manifest::from_str_with_filename(
            "fields = [\"UserID\", \"Cfg:gopkg.in/yaml\"]",
            "custom.toml",
        )
        .unwrap_err();

        assert!(err.is_format_error());
        match *err {
            Error::InvalidField {
                index, span, src, ..
            } => {
                assert_eq!(index, 1);
                assert_eq!(span.map(|s| s.offset()), Some(21));
                assert_eq!(src.name(), "custom.toml");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_field_span_skips_earlier_equal_text() {
        let err = "output = \":int\"\nfields = [\":int\"]"
            .parse::<Manifest>()
            .unwrap_err();

        match *err {
            Error::InvalidField { span, .. } => {
                assert_eq!(span.map(|s| (s.offset(), s.len())), Some((27, 4)));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
