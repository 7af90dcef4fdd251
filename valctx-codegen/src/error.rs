use miette::Diagnostic;
use thiserror::Error;

/// Result type for resolution.
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Reasons a set of fields cannot be turned into a generation request.
///
/// Every variant carries the offending field, type or package so the caller
/// can report it precisely.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ResolveError {
    #[error("field '{name}' is duplicated")]
    #[diagnostic(
        code(valctx::duplicate_field),
        help("field names are compared after upper-casing the first letter")
    )]
    DuplicateField { name: String },

    #[error("fields '{first}' and '{second}' both map to key type '{key}'")]
    #[diagnostic(code(valctx::duplicate_key))]
    DuplicateKey {
        key: String,
        first: String,
        second: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(valctx::invalid_identifier),
        help(
            "{reason}. Use only letters, digits, and underscores, starting with a letter or underscore."
        )
    )]
    InvalidIdentifier {
        name: String,
        context: String,
        reason: String,
    },

    #[error("'{name}' is a Go reserved keyword")]
    #[diagnostic(
        code(valctx::reserved_keyword),
        help("rename the {context} to something else")
    )]
    ReservedKeyword { name: String, context: String },

    #[error("invalid type '{ty}' of field '{field}': {reason}")]
    #[diagnostic(
        code(valctx::invalid_type),
        help(
            "types without a package must be built from predeclared Go types, e.g. int, []string, map[string]any"
        )
    )]
    InvalidType {
        field: String,
        ty: String,
        reason: String,
    },

    #[error("invalid import path '{path}' of field '{field}': {reason}")]
    #[diagnostic(code(valctx::invalid_import_path))]
    InvalidImportPath {
        field: String,
        path: String,
        reason: String,
    },

    #[error("imports '{first}' and '{second}' would both be referred to as '{alias}'")]
    #[diagnostic(code(valctx::import_alias_conflict))]
    ImportAliasConflict {
        alias: String,
        first: String,
        second: String,
    },

    #[error("import '{path}' is referred to as '{alias}', which clashes with {declaration}")]
    #[diagnostic(
        code(valctx::import_name_clash),
        help("the generated file already uses that name, so the package could not be referenced")
    )]
    ImportNameClash {
        alias: String,
        path: String,
        declaration: String,
    },

    #[error("unsupported kind of field '{field}'")]
    #[diagnostic(code(valctx::unsupported_kind))]
    UnsupportedKind { field: String },
}

impl ResolveError {
    pub(crate) fn invalid_identifier(
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidIdentifier {
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        }
    }
}
