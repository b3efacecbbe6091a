//! Settings loading from configuration files.
//!
//! This module provides functions to load [`I18nSettings`] from TOML files,
//! JSON files, and to apply environment variable overrides.
//!
//! ## Loading Order
//!
//! 1. Start with default settings.
//! 2. Load from a TOML or JSON file (overriding defaults).
//! 3. Apply environment variable overrides (highest priority).
//!
//! ## Environment Variable Mapping
//!
//! | Env Var | Setting |
//! |---|---|
//! | `I18N_DEBUG` | `debug` |
//! | `I18N_LOG_LEVEL` | `log_level` |
//! | `I18N_LANGUAGE` | `language` |
//! | `I18N_LANGUAGES` | `languages` (comma-separated) |
//! | `I18N_DEFAULT_LANGUAGE` | `default_language` (empty unsets it) |
//! | `I18N_FLAGS_BASE_PATH` | `flags_base_path` |
//!
//! ## Examples
//!
//! ```rust,no_run
//! use i18n_rs_core::settings_loader;
//!
//! let settings = settings_loader::from_toml_file("config/i18n.toml").unwrap();
//! let settings = settings_loader::from_json_file_with_env("config/i18n.json").unwrap();
//! ```

use std::path::Path;

use crate::error::I18nError;
use crate::settings::I18nSettings;

/// Loads settings from a TOML string.
///
/// Any fields not present in the TOML keep their default values.
///
/// # Errors
///
/// Returns an error if the TOML is malformed or cannot be deserialized.
pub fn from_toml_str(toml_str: &str) -> Result<I18nSettings, I18nError> {
    let toml_value: toml::Value = toml::from_str(toml_str)
        .map_err(|e| I18nError::ConfigurationError(format!("Failed to parse TOML: {e}")))?;
    from_overrides(toml_to_json(toml_value), "TOML")
}

/// Loads settings from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the TOML is malformed.
pub fn from_toml_file(path: impl AsRef<Path>) -> Result<I18nSettings, I18nError> {
    from_toml_str(&read_config(path.as_ref(), "TOML")?)
}

/// Loads settings from a TOML file and then applies environment variable overrides.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the TOML is malformed.
pub fn from_toml_file_with_env(path: impl AsRef<Path>) -> Result<I18nSettings, I18nError> {
    let mut settings = from_toml_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Loads settings from a JSON string.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or cannot be deserialized.
pub fn from_json_str(json_str: &str) -> Result<I18nSettings, I18nError> {
    let json_value: serde_json::Value = serde_json::from_str(json_str)
        .map_err(|e| I18nError::ConfigurationError(format!("Failed to parse JSON: {e}")))?;
    from_overrides(json_value, "JSON")
}

/// Loads settings from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the JSON is malformed.
pub fn from_json_file(path: impl AsRef<Path>) -> Result<I18nSettings, I18nError> {
    from_json_str(&read_config(path.as_ref(), "JSON")?)
}

/// Loads settings from a JSON file and then applies environment variable overrides.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the JSON is malformed.
pub fn from_json_file_with_env(path: impl AsRef<Path>) -> Result<I18nSettings, I18nError> {
    let mut settings = from_json_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Loads settings from just environment variables (starting from defaults).
pub fn from_env() -> I18nSettings {
    let mut settings = I18nSettings::default();
    apply_env_overrides(&mut settings);
    settings
}

/// Applies `I18N_*` environment variable overrides to a settings struct.
///
/// See the module documentation for the supported variables.
pub fn apply_env_overrides(settings: &mut I18nSettings) {
    if let Ok(val) = std::env::var("I18N_DEBUG") {
        settings.debug = matches!(val.to_lowercase().as_str(), "true" | "1" | "yes");
    }

    if let Ok(val) = std::env::var("I18N_LOG_LEVEL") {
        settings.log_level = val;
    }

    if let Ok(val) = std::env::var("I18N_LANGUAGE") {
        settings.language = val;
    }

    if let Ok(val) = std::env::var("I18N_LANGUAGES") {
        settings.languages = split_list(&val);
    }

    if let Ok(val) = std::env::var("I18N_DEFAULT_LANGUAGE") {
        let val = val.trim();
        settings.default_language = (!val.is_empty()).then(|| val.to_string());
    }

    if let Ok(val) = std::env::var("I18N_FLAGS_BASE_PATH") {
        settings.flags_base_path = val;
    }
}

// ============================================================
// Helpers
// ============================================================

fn read_config(path: &Path, format: &str) -> Result<String, I18nError> {
    std::fs::read_to_string(path).map_err(|e| {
        I18nError::ConfigurationError(format!(
            "Failed to read {format} file '{}': {e}",
            path.display()
        ))
    })
}

/// Merges parsed file values over the defaults and deserializes the result.
fn from_overrides(overrides: serde_json::Value, format: &str) -> Result<I18nSettings, I18nError> {
    let default_json = serde_json::to_value(I18nSettings::default()).map_err(|e| {
        I18nError::ConfigurationError(format!("Failed to serialize default settings: {e}"))
    })?;

    let merged = merge_json(default_json, overrides);
    serde_json::from_value(merged).map_err(|e| {
        I18nError::ConfigurationError(format!("Failed to deserialize settings from {format}: {e}"))
    })
}

fn split_list(val: &str) -> Vec<String> {
    val.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Converts a TOML value to a `serde_json::Value`.
fn toml_to_json(value: toml::Value) -> serde_json::Value {
    match value {
        toml::Value::String(s) => serde_json::Value::String(s),
        toml::Value::Integer(i) => serde_json::json!(i),
        toml::Value::Float(f) => serde_json::json!(f),
        toml::Value::Boolean(b) => serde_json::Value::Bool(b),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        toml::Value::Array(arr) => {
            serde_json::Value::Array(arr.into_iter().map(toml_to_json).collect())
        }
        toml::Value::Table(table) => serde_json::Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}

/// Deep-merges two JSON values. The `override_val` takes precedence.
fn merge_json(base: serde_json::Value, override_val: serde_json::Value) -> serde_json::Value {
    match (base, override_val) {
        (serde_json::Value::Object(mut base_map), serde_json::Value::Object(override_map)) => {
            for (key, override_v) in override_map {
                let merged = if let Some(base_v) = base_map.remove(&key) {
                    merge_json(base_v, override_v)
                } else {
                    override_v
                };
                base_map.insert(key, merged);
            }
            serde_json::Value::Object(base_map)
        }
        (_, override_val) => override_val,
    }
}
