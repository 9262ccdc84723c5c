use std::fs;

use egeria_core::config::{
    MappingConfig, UnsupportedCategoryPolicy, DEFAULT_LOG_LEVEL, DEFAULT_RESERIALIZE_EXTRAS,
};
use egeria_core::{Config, MapperContext};
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.mapping, MappingConfig::default());
    assert_eq!(config.mapping.reserialize_extras, DEFAULT_RESERIALIZE_EXTRAS);
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
}

#[test]
fn test_config_from_toml() {
    let toml_str = r#"
[mapping]
unsupported_categories = "reject"
reserialize_extras = false

[registry]
type_file = "types.yaml"

[logging]
level = "egeria_core=debug"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(
        config.mapping.unsupported_categories,
        UnsupportedCategoryPolicy::Reject
    );
    assert!(!config.mapping.reserialize_extras);
    assert_eq!(config.registry.type_file.as_deref(), Some("types.yaml"));
    assert_eq!(config.logging.level, "egeria_core=debug");
}

#[test]
fn test_partial_config_keeps_defaults() {
    let config: Config = toml::from_str("[logging]\nlevel = \"info\"\n").unwrap();
    assert_eq!(config.mapping, MappingConfig::default());
    assert!(config.registry.type_file.is_none());
}

#[test]
fn test_config_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("egeria.toml");
    fs::write(&path, "[mapping]\nunsupported_categories = \"reject\"\n").unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(
        config.mapping.unsupported_categories,
        UnsupportedCategoryPolicy::Reject
    );
}

#[test]
fn test_invalid_config_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("egeria.toml");
    fs::write(&path, "[mapping]\nunsupported_categories = \"shrug\"\n").unwrap();

    assert!(Config::from_file(&path).is_err());
    assert!(Config::from_file(temp.path().join("missing.toml")).is_err());
}

#[test]
fn test_default_config_string_parses_back() {
    let rendered = Config::default_config_string();
    let config: Config = toml::from_str(&rendered).unwrap();
    assert_eq!(config.mapping, MappingConfig::default());
}

#[test]
fn test_context_layers_registry_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("types.yaml");
    fs::write(
        &path,
        r#"
- typeDefGuid: "b46cddb3-9864-4c5d-8a49-266b3fc95cb8"
  typeDefName: "DeployedDatabaseSchema"
  typeDefVersion: 2
  typeDefCategory: entity
"#,
    )
    .unwrap();

    let mut config = Config::default();
    config.registry.type_file = Some(path.to_string_lossy().to_string());

    let context = MapperContext::from_config(&config).unwrap();
    let schema = context.registry().lookup("DeployedDatabaseSchema").unwrap();
    assert_eq!(schema.type_def_version, 2);
    assert!(context.registry().lookup("RelationalTable").is_some());
}

#[test]
fn test_context_with_missing_registry_file() {
    let mut config = Config::default();
    config.registry.type_file = Some("/definitely/not/here/types.yaml".to_string());
    assert!(MapperContext::from_config(&config).is_err());
}
