use serde::{Deserialize, Serialize};

/// Import path of the Go package defining `context.Context`.
pub const CONTEXT_IMPORT: &str = "context";

/// Field type used when no type was given.
pub const UNTYPED: &str = "any";

/// The whole-file generation unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Go package the emitted file belongs to.
    pub package_name: String,
    /// Import paths, sorted and free of duplicates. Always contains [`CONTEXT_IMPORT`].
    pub import_paths: Vec<String>,
    /// Fields in declaration order.
    pub fields: Vec<GenerationField>,
    /// Stamped into the header comment.
    pub tool_version: String,
}

/// One context field ready for emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationField {
    /// Exported name (`UserID`).
    pub field_name: String,
    /// Unexported key type name (`userIDKey`).
    pub key_name: String,
    /// Type text as emitted (`int`, `pkg.User`, or [`UNTYPED`]).
    pub field_type: String,
    /// Package qualifier of a type coming from an import.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_alias: Option<String>,
}

impl GenerationField {
    /// Untyped fields get a single-value getter without a presence flag.
    pub fn is_untyped(&self) -> bool {
        self.field_type == UNTYPED
    }

    pub fn getter_name(&self) -> String {
        format!("Get{}", self.field_name)
    }

    pub fn setter_name(&self) -> String {
        format!("Set{}", self.field_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, ty: &str) -> GenerationField {
        GenerationField {
            field_name: name.to_string(),
            key_name: format!("{}Key", name.to_lowercase()),
            field_type: ty.to_string(),
            package_alias: None,
        }
    }

    #[test]
    fn test_accessor_names() {
        let f = field("UserID", "int");
        assert_eq!(f.getter_name(), "GetUserID");
        assert_eq!(f.setter_name(), "SetUserID");
    }

    #[test]
    fn test_is_untyped() {
        assert!(field("UserID", UNTYPED).is_untyped());
        assert!(!field("UserID", "int").is_untyped());
        assert!(!field("UserID", "interface{}").is_untyped());
    }

    #[test]
    fn test_serialize_skips_missing_alias() {
        let json = serde_json::to_value(field("A", "int")).unwrap();
        assert!(json.get("package_alias").is_none());

        let mut custom = field("User", "pkg.User");
        custom.package_alias = Some("pkg".to_string());
        let json = serde_json::to_value(&custom).unwrap();
        assert_eq!(json["package_alias"], "pkg");
    }
}
