//! Turning parsed field descriptors into a [`GenerationRequest`].

use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use valctx_ir::{CONTEXT_IMPORT, GenerationField, GenerationRequest, UNTYPED};
use valctx_manifest::{FieldDescriptor, FieldKind};

use crate::{
    ResolveError, Result,
    go_types::validate_builtin_type,
    naming::{
        is_exported, is_go_keyword, key_name, package_alias, validate_identifier,
        validate_import_path,
    },
};

/// Parameter name every accessor body refers to.
const CTX_PARAM: &str = "ctx";

/// Build the generation model for `descriptors`, in input order.
///
/// Imports always contain [`CONTEXT_IMPORT`] and are sorted. The first
/// duplicated field name aborts resolution; nothing is merged.
pub fn resolve(
    package_name: &str,
    tool_version: &str,
    descriptors: &[FieldDescriptor],
) -> Result<GenerationRequest> {
    let mut resolver = Resolver::new();
    for descriptor in descriptors {
        resolver.add(descriptor)?;
    }
    validate_package_name(package_name)?;

    Ok(resolver.finish(package_name, tool_version))
}

struct Resolver {
    /// Import path keyed by the alias the generated file refers to it by.
    imports: BTreeMap<String, String>,
    fields: IndexMap<String, GenerationField>,
    /// Key type name to the field that owns it.
    keys: HashMap<String, String>,
    /// Package-level names of the generated file, described for diagnostics.
    declared: HashMap<String, String>,
}

impl Resolver {
    fn new() -> Self {
        let mut imports = BTreeMap::new();
        imports.insert(
            package_alias(CONTEXT_IMPORT).to_string(),
            CONTEXT_IMPORT.to_string(),
        );
        Self {
            imports,
            fields: IndexMap::new(),
            keys: HashMap::new(),
            declared: HashMap::new(),
        }
    }

    fn add(&mut self, descriptor: &FieldDescriptor) -> Result<()> {
        let name = descriptor.name();
        if self.fields.contains_key(name) {
            return Err(ResolveError::DuplicateField {
                name: name.to_string(),
            });
        }
        validate_field_name(name)?;

        let key = key_name(name);
        if let Some(first) = self.keys.get(&key) {
            return Err(ResolveError::DuplicateKey {
                key,
                first: first.clone(),
                second: name.to_string(),
            });
        }

        let declarations = [
            (key.clone(), format!("the key type of field '{name}'")),
            (format!("Get{name}"), format!("the getter of field '{name}'")),
            (format!("Set{name}"), format!("the setter of field '{name}'")),
        ];
        for (declared, description) in &declarations {
            if let Some(path) = self.imports.get(declared) {
                return Err(ResolveError::ImportNameClash {
                    alias: declared.clone(),
                    path: path.clone(),
                    declaration: description.clone(),
                });
            }
        }

        let (field_type, alias) = match descriptor.kind() {
            FieldKind::Default => (UNTYPED.to_string(), None),
            FieldKind::BuiltinOnly => {
                let ty = descriptor.raw_type();
                validate_builtin_type(ty).map_err(|reason| ResolveError::InvalidType {
                    field: name.to_string(),
                    ty: ty.to_string(),
                    reason,
                })?;
                (ty.to_string(), None)
            }
            FieldKind::CustomType => {
                let (path, type_name) = descriptor
                    .import_path()
                    .zip(descriptor.type_name())
                    .ok_or_else(|| ResolveError::UnsupportedKind {
                        field: name.to_string(),
                    })?;
                let alias = self.add_import(name, path, &declarations)?;
                validate_custom_type_name(name, type_name)?;
                (format!("{alias}.{type_name}"), Some(alias))
            }
        };

        self.declared.extend(declarations);
        self.keys.insert(key.clone(), name.to_string());
        self.fields.insert(
            name.to_string(),
            GenerationField {
                field_name: name.to_string(),
                key_name: key,
                field_type,
                package_alias: alias,
            },
        );
        Ok(())
    }

    /// Register `path` and return its alias.
    ///
    /// `pending` holds the declarations of the field being added.
    fn add_import(
        &mut self,
        field: &str,
        path: &str,
        pending: &[(String, String)],
    ) -> Result<String> {
        if let Some(reason) = validate_import_path(path) {
            return Err(ResolveError::InvalidImportPath {
                field: field.to_string(),
                path: path.to_string(),
                reason: reason.to_string(),
            });
        }

        let alias = package_alias(path);
        if let Some(reason) = validate_identifier(alias) {
            return Err(ResolveError::InvalidImportPath {
                field: field.to_string(),
                path: path.to_string(),
                reason: format!("cannot derive a package name from it ({reason})"),
            });
        }
        if is_go_keyword(alias) {
            return Err(ResolveError::InvalidImportPath {
                field: field.to_string(),
                path: path.to_string(),
                reason: format!("its package name '{alias}' is a Go keyword"),
            });
        }

        let clash = if alias == CTX_PARAM {
            Some(format!("the '{CTX_PARAM}' parameter of every accessor"))
        } else {
            self.declared.get(alias).cloned().or_else(|| {
                pending
                    .iter()
                    .find(|(declared, _)| declared == alias)
                    .map(|(_, description)| description.clone())
            })
        };
        if let Some(declaration) = clash {
            return Err(ResolveError::ImportNameClash {
                alias: alias.to_string(),
                path: path.to_string(),
                declaration,
            });
        }

        match self.imports.get(alias) {
            Some(existing) if existing != path => Err(ResolveError::ImportAliasConflict {
                alias: alias.to_string(),
                first: existing.clone(),
                second: path.to_string(),
            }),
            Some(_) => Ok(alias.to_string()),
            None => {
                self.imports.insert(alias.to_string(), path.to_string());
                Ok(alias.to_string())
            }
        }
    }

    fn finish(self, package_name: &str, tool_version: &str) -> GenerationRequest {
        let mut import_paths: Vec<String> = self.imports.into_values().collect();
        import_paths.sort();

        GenerationRequest {
            package_name: package_name.to_string(),
            import_paths,
            fields: self.fields.into_values().collect(),
            tool_version: tool_version.to_string(),
        }
    }
}

fn validate_field_name(name: &str) -> Result<()> {
    if let Some(reason) = validate_identifier(name) {
        return Err(ResolveError::invalid_identifier(name, "field", reason));
    }
    if is_go_keyword(name) {
        return Err(ResolveError::ReservedKeyword {
            name: name.to_string(),
            context: "field".to_string(),
        });
    }
    Ok(())
}

fn validate_custom_type_name(field: &str, type_name: &str) -> Result<()> {
    let reason = match validate_identifier(type_name) {
        Some(reason) => reason,
        None if !is_exported(type_name) => "types from another package must be exported",
        None => return Ok(()),
    };
    Err(ResolveError::InvalidType {
        field: field.to_string(),
        ty: type_name.to_string(),
        reason: reason.to_string(),
    })
}

fn validate_package_name(name: &str) -> Result<()> {
    if let Some(reason) = validate_identifier(name) {
        return Err(ResolveError::invalid_identifier(name, "package", reason));
    }
    if name == "_" {
        return Err(ResolveError::invalid_identifier(
            name,
            "package",
            "the blank identifier cannot name a package",
        ));
    }
    if is_go_keyword(name) {
        return Err(ResolveError::ReservedKeyword {
            name: name.to_string(),
            context: "package".to_string(),
        });
    }
    Ok(())
}
