//! Go identifier rules and the names derived from a field.

use valctx_core::lower_first;

/// Go keywords, which cannot be used as identifiers.
/// Source: https://go.dev/ref/spec#Keywords
pub const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var",
];

/// Suffix appended to the unexported key type of every field.
pub const KEY_SUFFIX: &str = "Key";

/// Check if a name is a Go keyword
pub fn is_go_keyword(name: &str) -> bool {
    GO_KEYWORDS.contains(&name)
}

/// Validate that a name is a Go identifier.
/// Returns None if valid, Some(reason) if invalid.
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Some("name must not be empty");
    };

    if !(first.is_alphabetic() || first == '_') {
        return Some("name must start with a letter or underscore");
    }

    if !chars.all(|c| c.is_alphanumeric() || c == '_') {
        return Some("name contains invalid characters");
    }

    None
}

/// Whether the identifier is visible outside its package.
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// Unexported key type name of a field (e.g., "UserID" -> "userIDKey").
pub fn key_name(field_name: &str) -> String {
    format!("{}{}", lower_first(field_name), KEY_SUFFIX)
}

/// Name a Go file refers to an imported package by.
///
/// Follows the convention Go tooling assumes when no explicit name is given:
/// a trailing major-version element is skipped (`github.com/go-chi/chi/v5`
/// -> `chi`), a `go-` prefix is dropped (`github.com/mattn/go-sqlite3` ->
/// `sqlite3`), and the name ends at the first character that cannot appear in
/// an identifier (`gopkg.in/yaml.v3` -> `yaml`).
pub fn package_alias(import_path: &str) -> &str {
    let mut segments = import_path.rsplit('/');
    let last = segments.next().unwrap_or_default();
    let base = match segments.next() {
        Some(parent) if is_major_version(last) => parent,
        _ => last,
    };

    let base = base.strip_prefix("go-").unwrap_or(base);
    let end = base
        .char_indices()
        .find(|&(_, c)| !(c.is_alphanumeric() || c == '_'))
        .map_or(base.len(), |(i, _)| i);
    &base[..end]
}

fn is_major_version(segment: &str) -> bool {
    segment
        .strip_prefix('v')
        .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
}

/// Validate a Go import path.
/// Returns None if valid, Some(reason) if invalid.
pub fn validate_import_path(path: &str) -> Option<&'static str> {
    if path.is_empty() {
        return Some("path must not be empty");
    }

    for segment in path.split('/') {
        if segment.is_empty() {
            return Some("path contains an empty element");
        }
        if segment == "." || segment == ".." {
            return Some("path must not contain '.' or '..' elements");
        }
        if !segment
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '-' | '.' | '_' | '~' | '+'))
        {
            return Some("path contains invalid characters");
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_identifier() {
        assert_eq!(validate_identifier("UserID"), None);
        assert_eq!(validate_identifier("_x1"), None);
        assert_eq!(validate_identifier("Économie"), None);
        assert_eq!(validate_identifier(""), Some("name must not be empty"));
        assert_eq!(
            validate_identifier("1abc"),
            Some("name must start with a letter or underscore")
        );
        assert_eq!(
            validate_identifier("User-ID"),
            Some("name contains invalid characters")
        );
        assert_eq!(
            validate_identifier("User ID"),
            Some("name contains invalid characters")
        );
    }

    #[test]
    fn test_keywords() {
        assert!(is_go_keyword("func"));
        assert!(is_go_keyword("package"));
        assert!(!is_go_keyword("Func"));
        assert!(!is_go_keyword("any"));
    }

    #[test]
    fn test_is_exported() {
        assert!(is_exported("User"));
        assert!(!is_exported("user"));
        assert!(!is_exported("_User"));
        assert!(!is_exported(""));
    }

    #[test]
    fn test_key_name() {
        assert_eq!(key_name("UserID"), "userIDKey");
        assert_eq!(key_name("Field1"), "field1Key");
        assert_eq!(key_name("_x"), "_xKey");
    }

    #[test]
    fn test_package_alias() {
        assert_eq!(package_alias("context"), "context");
        assert_eq!(package_alias("github.com/user/pkg"), "pkg");
        assert_eq!(package_alias("github.com/go-chi/chi/v5"), "chi");
        assert_eq!(package_alias("gopkg.in/yaml.v3"), "yaml");
        assert_eq!(package_alias("github.com/mattn/go-sqlite3"), "sqlite3");
        assert_eq!(package_alias("v2"), "v2");
        assert_eq!(package_alias("example.com/x-y"), "x");
    }

    #[test]
    fn test_validate_import_path() {
        assert_eq!(validate_import_path("github.com/user/pkg"), None);
        assert_eq!(validate_import_path("gopkg.in/yaml.v3"), None);
        assert_eq!(validate_import_path("context"), None);
        assert!(validate_import_path("").is_some());
        assert!(validate_import_path("/abs/path").is_some());
        assert!(validate_import_path("a//b").is_some());
        assert!(validate_import_path("a/../b").is_some());
        assert!(validate_import_path("[]pkg").is_some());
        assert!(validate_import_path("my pkg").is_some());
    }
}
