use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use egeria_core::config::{
    ConfigError, UnsupportedCategoryPolicy, ENV_LOG, ENV_RESERIALIZE_EXTRAS, ENV_TYPE_REGISTRY,
    ENV_UNSUPPORTED_CATEGORIES,
};
use egeria_core::Config;
use tempfile::TempDir;

// The environment is process wide; every test here holds this lock.
static ENV_LOCK: Mutex<()> = Mutex::new(());

const ALL_VARS: [&str; 4] = [
    ENV_UNSUPPORTED_CATEGORIES,
    ENV_RESERIALIZE_EXTRAS,
    ENV_TYPE_REGISTRY,
    ENV_LOG,
];

/// Sets variables for the duration of a test and clears them on drop.
struct EnvGuard {
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    fn set(vars: &[(&str, &str)]) -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        for name in ALL_VARS {
            std::env::remove_var(name);
        }
        for (name, value) in vars {
            std::env::set_var(name, value);
        }
        Self { _lock: lock }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for name in ALL_VARS {
            std::env::remove_var(name);
        }
    }
}

const PROJECT_CONFIG: &str = r#"
[mapping]
unsupported_categories = "drop"
reserialize_extras = true

[registry]
type_file = "from-file.yaml"

[logging]
level = "info"
"#;

fn project_config() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("egeria.toml");
    fs::write(&path, PROJECT_CONFIG).unwrap();
    (temp, path)
}

#[test]
fn test_file_values_without_env() {
    let (_temp, path) = project_config();
    let _env = EnvGuard::set(&[]);

    let config = Config::from_file(&path).unwrap();

    assert_eq!(
        config.mapping.unsupported_categories,
        UnsupportedCategoryPolicy::Drop
    );
    assert!(config.mapping.reserialize_extras);
    assert_eq!(config.registry.type_file.as_deref(), Some("from-file.yaml"));
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_env_overrides_unsupported_categories() {
    let (_temp, path) = project_config();
    let _env = EnvGuard::set(&[(ENV_UNSUPPORTED_CATEGORIES, "REJECT")]);

    let config = Config::from_file(&path).unwrap();

    assert_eq!(
        config.mapping.unsupported_categories,
        UnsupportedCategoryPolicy::Reject
    );
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_env_overrides_reserialize_extras() {
    let (_temp, path) = project_config();
    let _env = EnvGuard::set(&[(ENV_RESERIALIZE_EXTRAS, "false")]);

    let config = Config::from_file(&path).unwrap();

    assert!(!config.mapping.reserialize_extras);
}

#[test]
fn test_env_overrides_type_registry() {
    let (_temp, path) = project_config();
    let _env = EnvGuard::set(&[(ENV_TYPE_REGISTRY, "/etc/egeria/types.yaml")]);

    let config = Config::from_file(&path).unwrap();

    assert_eq!(
        config.registry.type_file.as_deref(),
        Some("/etc/egeria/types.yaml")
    );
}

#[test]
fn test_env_overrides_log_level() {
    let (_temp, path) = project_config();
    let _env = EnvGuard::set(&[(ENV_LOG, "egeria_core=trace")]);

    let config = Config::from_file(&path).unwrap();

    assert_eq!(config.logging.level, "egeria_core=trace");
}

#[test]
fn test_invalid_reserialize_extras_env() {
    let (_temp, path) = project_config();
    let _env = EnvGuard::set(&[(ENV_RESERIALIZE_EXTRAS, "maybe")]);

    let err = Config::from_file(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Invalid(ref msg) if msg.contains("maybe")));
}

#[test]
fn test_invalid_policy_env() {
    let (_temp, path) = project_config();
    let _env = EnvGuard::set(&[(ENV_UNSUPPORTED_CATEGORIES, "ignore")]);

    let err = Config::from_file(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Invalid(_)));
}
