//! Default values for Egeria configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// File Locations
// ============================================================================

/// Project-local configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "egeria.toml";

/// Directory under the user config dir holding `config.toml`.
pub const DEFAULT_USER_CONFIG_DIR: &str = "egeria";

/// File name of the user configuration.
pub const DEFAULT_USER_CONFIG_FILE: &str = "config.toml";

// ============================================================================
// Mapping Defaults
// ============================================================================

/// Re-emit overflow attributes and classifications when encoding.
pub const DEFAULT_RESERIALIZE_EXTRAS: bool = true;

/// Version stamped on bundled type definitions.
pub const DEFAULT_TYPE_DEF_VERSION: i64 = 1;

// ============================================================================
// Logging Defaults
// ============================================================================

/// Log filter used when neither config nor environment sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// ============================================================================
// Environment Variables
// ============================================================================

pub const ENV_UNSUPPORTED_CATEGORIES: &str = "EGERIA_UNSUPPORTED_CATEGORIES";
pub const ENV_RESERIALIZE_EXTRAS: &str = "EGERIA_RESERIALIZE_EXTRAS";
pub const ENV_TYPE_REGISTRY: &str = "EGERIA_TYPE_REGISTRY";
pub const ENV_LOG: &str = "EGERIA_LOG";
