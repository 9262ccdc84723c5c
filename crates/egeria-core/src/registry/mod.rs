//! Type-definition registry.
//!
//! Encoders stamp every instance they produce with the type identity found
//! here. The registry is an ordinary value handed to the mappers, so tests
//! and tools can run against their own set of definitions.

mod error;

pub use error::RegistryError;

use std::collections::HashMap;
use std::path::Path;

use uuid::Uuid;

use crate::beans::BUNDLED_TYPES;
use crate::config::DEFAULT_TYPE_DEF_VERSION;
use crate::instance::InstanceType;

/// Read-only lookup of type definitions by type name.
pub trait TypeDefRegistry: Send + Sync {
    /// Find the type identity for the given type name.
    fn lookup(&self, type_name: &str) -> Option<InstanceType>;
}

/// Registry held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTypeDefRegistry {
    types: HashMap<String, InstanceType>,
}

impl InMemoryTypeDefRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry describing every bundled bean type.
    ///
    /// GUIDs are derived from the type name so they are stable across runs.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (name, category, description) in BUNDLED_TYPES {
            registry.register(InstanceType {
                type_def_guid: builtin_guid(name),
                type_def_name: name.to_string(),
                type_def_version: DEFAULT_TYPE_DEF_VERSION,
                type_def_category: *category,
                type_def_description: Some(description.to_string()),
            });
        }
        registry
    }

    /// Parse a YAML list of type definitions.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, RegistryError> {
        let definitions: Vec<InstanceType> = serde_yaml::from_str(yaml)?;
        let mut registry = Self::new();
        for definition in definitions {
            if definition.type_def_name.trim().is_empty() {
                return Err(RegistryError::Invalid(format!(
                    "type definition {} has no name",
                    definition.type_def_guid
                )));
            }
            if definition.type_def_guid.trim().is_empty() {
                return Err(RegistryError::Invalid(format!(
                    "type definition {} has no GUID",
                    definition.type_def_name
                )));
            }
            registry.register(definition);
        }
        Ok(registry)
    }

    /// Load a YAML list of type definitions from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| RegistryError::io(path, e))?;
        Self::from_yaml_str(&content)
    }

    /// Add or replace a type definition.
    pub fn register(&mut self, definition: InstanceType) {
        self.types
            .insert(definition.type_def_name.clone(), definition);
    }

    /// Fold another registry into this one. Definitions from `other` win.
    pub fn merge(&mut self, other: InMemoryTypeDefRegistry) {
        self.types.extend(other.types);
    }

    /// Names of all registered types, sorted.
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeDefRegistry for InMemoryTypeDefRegistry {
    fn lookup(&self, type_name: &str) -> Option<InstanceType> {
        self.types.get(type_name).cloned()
    }
}

fn builtin_guid(type_name: &str) -> String {
    let url = format!("https://egeria-project.org/types/{type_name}");
    Uuid::new_v5(&Uuid::NAMESPACE_URL, url.as_bytes()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::TypeDefCategory;

    #[test]
    fn test_builtin_has_bundled_types() {
        let registry = InMemoryTypeDefRegistry::builtin();
        let table = registry.lookup("RelationalTable").unwrap();
        assert_eq!(table.type_def_category, TypeDefCategory::Entity);
        assert_eq!(table.type_def_version, DEFAULT_TYPE_DEF_VERSION);

        let reference = registry.lookup("LibraryTermReference").unwrap();
        assert_eq!(reference.type_def_category, TypeDefCategory::Relationship);

        assert!(registry.lookup("Confidentiality").is_some());
        assert!(registry.lookup("NoSuchType").is_none());
    }

    #[test]
    fn test_builtin_guids_are_stable() {
        let first = InMemoryTypeDefRegistry::builtin();
        let second = InMemoryTypeDefRegistry::builtin();
        assert_eq!(
            first.lookup("SchemaAttribute").unwrap().type_def_guid,
            second.lookup("SchemaAttribute").unwrap().type_def_guid
        );
        assert_ne!(
            first.lookup("SchemaAttribute").unwrap().type_def_guid,
            first.lookup("RelationalTable").unwrap().type_def_guid
        );
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
- typeDefGuid: "ce7e72b8-396a-4013-8688-f9d973067425"
  typeDefName: RelationalTable
  typeDefVersion: 3
  typeDefCategory: entity
"#;
        let registry = InMemoryTypeDefRegistry::from_yaml_str(yaml).unwrap();
        assert_eq!(registry.len(), 1);
        let table = registry.lookup("RelationalTable").unwrap();
        assert_eq!(table.type_def_version, 3);
        assert!(table.type_def_description.is_none());
    }

    #[test]
    fn test_from_yaml_rejects_nameless() {
        let yaml = r#"
- typeDefGuid: "1234"
  typeDefName: ""
  typeDefVersion: 1
  typeDefCategory: entity
"#;
        let err = InMemoryTypeDefRegistry::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, RegistryError::Invalid(_)));
    }

    #[test]
    fn test_merge_overrides() {
        let mut registry = InMemoryTypeDefRegistry::builtin();
        let before = registry.len();
        let overlay = InMemoryTypeDefRegistry::from_yaml_str(
            r#"
- typeDefGuid: "override-guid"
  typeDefName: RelationalTable
  typeDefVersion: 7
  typeDefCategory: entity
"#,
        )
        .unwrap();
        registry.merge(overlay);
        assert_eq!(registry.len(), before);
        assert_eq!(
            registry.lookup("RelationalTable").unwrap().type_def_guid,
            "override-guid"
        );
    }
}
