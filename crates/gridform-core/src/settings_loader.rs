//! Settings loading from configuration files.
//!
//! This module loads [`FormSettings`] from TOML or JSON and applies
//! environment variable overrides.
//!
//! ## Loading Order
//!
//! 1. Start with default settings.
//! 2. Load from a TOML or JSON document (overriding defaults, deep-merged so
//!    a partial `[grid]` table keeps the remaining grid defaults).
//! 3. Apply environment variable overrides (highest priority).
//! 4. Check the result with [`check`].
//!
//! ## Environment Variable Mapping
//!
//! | Env Var | Setting |
//! |---|---|
//! | `GRIDFORM_DEBUG` | `debug` |
//! | `GRIDFORM_LOG_LEVEL` | `log_level` |
//! | `GRIDFORM_API` | `api` (empty string clears it) |
//! | `GRIDFORM_SUBMIT_TEXT` | `submit.text` |
//! | `GRIDFORM_SUCCESS_TEXT` | `success.text` |
//! | `GRIDFORM_SUCCESS_DURATION_MS` | `success.duration_ms` |
//! | `GRIDFORM_GRID_COLUMNS` | `grid.grid_columns` |
//!
//! ## Examples
//!
//! ```rust,no_run
//! use gridform_core::settings_loader;
//!
//! let settings = settings_loader::from_toml_file("config/form.toml").unwrap();
//! let settings = settings_loader::from_json_file_with_env("config/form.json").unwrap();
//! ```

use std::path::Path;

use crate::error::FormError;
use crate::settings::FormSettings;

/// Loads settings from a TOML string.
///
/// Any setting not present in the TOML keeps its default value. Unknown
/// top-level keys (such as a `fields` list) are ignored.
///
/// # Errors
///
/// Returns an error if the TOML is malformed or cannot be deserialized.
pub fn from_toml_str(toml_str: &str) -> Result<FormSettings, FormError> {
    let value = parse_toml_value(toml_str)?;
    from_value(value)
}

/// Loads settings from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the TOML is malformed.
pub fn from_toml_file(path: impl AsRef<Path>) -> Result<FormSettings, FormError> {
    let content = read_config(path.as_ref(), "TOML")?;
    from_toml_str(&content)
}

/// Loads settings from a TOML file and then applies environment variable overrides.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the TOML is malformed, or the
/// overridden settings fail [`check`].
pub fn from_toml_file_with_env(path: impl AsRef<Path>) -> Result<FormSettings, FormError> {
    let mut settings = from_toml_file(path)?;
    apply_env_overrides(&mut settings);
    check(&settings)?;
    Ok(settings)
}

/// Loads settings from a JSON string.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or cannot be deserialized.
pub fn from_json_str(json_str: &str) -> Result<FormSettings, FormError> {
    let value: serde_json::Value = serde_json::from_str(json_str)
        .map_err(|e| FormError::ConfigurationError(format!("Failed to parse JSON: {e}")))?;
    from_value(value)
}

/// Loads settings from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the JSON is malformed.
pub fn from_json_file(path: impl AsRef<Path>) -> Result<FormSettings, FormError> {
    let content = read_config(path.as_ref(), "JSON")?;
    from_json_str(&content)
}

/// Loads settings from a JSON file and then applies environment variable overrides.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the JSON is malformed, or the
/// overridden settings fail [`check`].
pub fn from_json_file_with_env(path: impl AsRef<Path>) -> Result<FormSettings, FormError> {
    let mut settings = from_json_file(path)?;
    apply_env_overrides(&mut settings);
    check(&settings)?;
    Ok(settings)
}

/// Loads settings from just environment variables (starting from defaults).
pub fn from_env() -> FormSettings {
    let mut settings = FormSettings::default();
    apply_env_overrides(&mut settings);
    settings
}

/// Builds settings from an already-parsed document.
///
/// The document is deep-merged over the serialized defaults and then checked.
///
/// # Errors
///
/// Returns an error if the merged document does not deserialize or fails
/// [`check`].
pub fn from_value(value: serde_json::Value) -> Result<FormSettings, FormError> {
    let mut merged = serde_json::to_value(FormSettings::default()).map_err(|e| {
        FormError::ConfigurationError(format!("Failed to serialize default settings: {e}"))
    })?;

    overlay(&mut merged, value);
    let settings: FormSettings = serde_json::from_value(merged).map_err(|e| {
        FormError::ConfigurationError(format!("Failed to deserialize settings: {e}"))
    })?;
    check(&settings)?;
    Ok(settings)
}

/// Parses a TOML document into a JSON value.
///
/// TOML and JSON configs then share one path through [`from_value`].
///
/// # Errors
///
/// Returns an error if the TOML is malformed.
pub fn parse_toml_value(toml_str: &str) -> Result<serde_json::Value, FormError> {
    toml::from_str(toml_str)
        .map_err(|e| FormError::ConfigurationError(format!("Failed to parse TOML: {e}")))
}

/// Checks settings for values that would produce a broken form.
///
/// # Errors
///
/// Returns [`FormError::ConfigurationError`] when the grid has no columns, a
/// field would have zero height or span, or the API endpoint is not an
/// absolute URL.
pub fn check(settings: &FormSettings) -> Result<(), FormError> {
    if settings.grid.grid_columns == 0 {
        return Err(FormError::ConfigurationError(
            "grid.grid_columns must be at least 1".to_string(),
        ));
    }
    if settings.grid.default_field_columns == 0 {
        return Err(FormError::ConfigurationError(
            "grid.default_field_columns must be at least 1".to_string(),
        ));
    }
    if settings.grid.fields_height == 0 {
        return Err(FormError::ConfigurationError(
            "grid.fields_height must be greater than 0".to_string(),
        ));
    }
    if let Some(api) = settings.api_endpoint() {
        url::Url::parse(api).map_err(|e| {
            FormError::ConfigurationError(format!("Invalid API endpoint '{api}': {e}"))
        })?;
    }
    Ok(())
}

/// Applies environment variable overrides to a settings struct.
///
/// Supported environment variables:
///
/// - `GRIDFORM_DEBUG` -> `debug` (values: "true"/"1"/"yes" => true, anything else => false)
/// - `GRIDFORM_LOG_LEVEL` -> `log_level`
/// - `GRIDFORM_API` -> `api`
/// - `GRIDFORM_SUBMIT_TEXT` -> `submit.text`
/// - `GRIDFORM_SUCCESS_TEXT` -> `success.text`
/// - `GRIDFORM_SUCCESS_DURATION_MS` -> `success.duration_ms` (ignored unless numeric)
/// - `GRIDFORM_GRID_COLUMNS` -> `grid.grid_columns` (ignored unless numeric)
pub fn apply_env_overrides(settings: &mut FormSettings) {
    if let Ok(val) = std::env::var("GRIDFORM_DEBUG") {
        settings.debug = matches!(val.to_lowercase().as_str(), "true" | "1" | "yes");
    }

    if let Ok(val) = std::env::var("GRIDFORM_LOG_LEVEL") {
        settings.log_level = val;
    }

    if let Ok(val) = std::env::var("GRIDFORM_API") {
        settings.api = if val.is_empty() { None } else { Some(val) };
    }

    if let Ok(val) = std::env::var("GRIDFORM_SUBMIT_TEXT") {
        settings.submit.text = val;
    }

    if let Ok(val) = std::env::var("GRIDFORM_SUCCESS_TEXT") {
        settings.success.text = val;
    }

    if let Ok(val) = std::env::var("GRIDFORM_SUCCESS_DURATION_MS") {
        if let Ok(ms) = val.parse::<u64>() {
            settings.success.duration_ms = ms;
        }
    }

    if let Ok(val) = std::env::var("GRIDFORM_GRID_COLUMNS") {
        if let Ok(columns) = val.parse::<u32>() {
            settings.grid.grid_columns = columns;
        }
    }
}

// ============================================================
// Helpers
// ============================================================

fn read_config(path: &Path, format: &str) -> Result<String, FormError> {
    std::fs::read_to_string(path).map_err(|e| {
        FormError::ConfigurationError(format!(
            "Failed to read {format} file '{}': {e}",
            path.display()
        ))
    })
}

/// Writes `overrides` onto `target`.
///
/// Objects are merged key by key; anything else, arrays included, replaces
/// what was there. An explicit `null` clears an optional setting.
fn overlay(target: &mut serde_json::Value, overrides: serde_json::Value) {
    match (target, overrides) {
        (serde_json::Value::Object(target), serde_json::Value::Object(overrides)) => {
            for (key, value) in overrides {
                match target.get_mut(&key) {
                    Some(slot) => overlay(slot, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── TOML loading ────────────────────────────────────────────────

    #[test]
    fn test_from_toml_str_basic() {
        let toml = r#"
            title = "Contact us"
            debug = false
            api = "https://example.com/contact"
        "#;

        let settings = from_toml_str(toml).unwrap();
        assert_eq!(settings.title, "Contact us");
        assert!(!settings.debug);
        assert_eq!(settings.api_endpoint(), Some("https://example.com/contact"));
        // Defaults preserved
        assert_eq!(settings.submit.text, "Submit");
    }

    #[test]
    fn test_from_toml_str_partial_grid_keeps_defaults() {
        let toml = r"
            [grid]
            grid_columns = 4
            row_gap = 8
        ";

        let settings = from_toml_str(toml).unwrap();
        assert_eq!(settings.grid.grid_columns, 4);
        assert_eq!(settings.grid.row_gap, 8);
        assert_eq!(settings.grid.column_gap, 3);
        assert_eq!(settings.grid.fields_height, 50);
    }

    #[test]
    fn test_from_toml_str_submit_placement() {
        let toml = r"
            [submit.grid]
            columnStart = 2
            rowStart = 5
            columns = 2
        ";

        let settings = from_toml_str(toml).unwrap();
        let grid = settings.submit.grid.unwrap();
        assert_eq!(grid.column_start, 2);
        assert_eq!(grid.row_start, 5);
        assert_eq!(grid.columns, Some(2));
    }

    #[test]
    fn test_from_toml_str_ignores_fields_key() {
        let toml = r#"
            title = "With fields"

            [[fields]]
            name = "email"
        "#;

        let settings = from_toml_str(toml).unwrap();
        assert_eq!(settings.title, "With fields");
    }

    #[test]
    fn test_from_toml_str_empty() {
        let settings = from_toml_str("").unwrap();
        assert_eq!(settings, FormSettings::default());
    }

    #[test]
    fn test_from_toml_str_invalid() {
        let result = from_toml_str("[[invalid toml content");
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_grid_columns_rejected() {
        let err = from_toml_str("[grid]\ngrid_columns = 0").unwrap_err();
        assert!(err.to_string().contains("grid_columns"));
    }

    #[test]
    fn test_relative_api_rejected() {
        let err = from_toml_str(r#"api = "/contact""#).unwrap_err();
        assert_eq!(err.code(), "configuration");
    }

    // ── JSON loading ────────────────────────────────────────────────

    #[test]
    fn test_from_json_str_basic() {
        let json = r#"{
            "log_level": "debug",
            "success": {"text": "Thanks!"}
        }"#;

        let settings = from_json_str(json).unwrap();
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.success.text, "Thanks!");
        // Defaults preserved
        assert_eq!(settings.success.duration_ms, 2000);
        assert!(settings.success.enabled);
    }

    #[test]
    fn test_from_json_str_empty_object() {
        let settings = from_json_str("{}").unwrap();
        assert_eq!(settings, FormSettings::default());
    }

    #[test]
    fn test_from_json_str_invalid() {
        let result = from_json_str("{invalid json");
        assert!(result.is_err());
    }

    // ── File loading ────────────────────────────────────────────────

    #[test]
    fn test_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("form.toml");
        std::fs::write(&path, "title = \"File form\"\ndebug = false\n").unwrap();

        let settings = from_toml_file(&path).unwrap();
        assert_eq!(settings.title, "File form");
        assert!(!settings.debug);
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("form.json");
        std::fs::write(&path, r#"{"subtitle": "From JSON"}"#).unwrap();

        let settings = from_json_file(&path).unwrap();
        assert_eq!(settings.subtitle, "From JSON");
    }

    #[test]
    fn test_from_toml_file_missing() {
        let result = from_toml_file("/nonexistent/path/form.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_json_file_missing() {
        let result = from_json_file("/nonexistent/path/form.json");
        assert!(result.is_err());
    }

    // ── Environment variable overrides ──────────────────────────────
    // Each test touches its own variable so they can run in parallel.

    #[test]
    fn test_apply_env_overrides_log_level() {
        let mut settings = FormSettings::default();
        std::env::set_var("GRIDFORM_LOG_LEVEL", "trace");
        apply_env_overrides(&mut settings);
        assert_eq!(settings.log_level, "trace");
        std::env::remove_var("GRIDFORM_LOG_LEVEL");
    }

    #[test]
    fn test_apply_env_overrides_submit_text() {
        let mut settings = FormSettings::default();
        std::env::set_var("GRIDFORM_SUBMIT_TEXT", "Send");
        apply_env_overrides(&mut settings);
        assert_eq!(settings.submit.text, "Send");
        std::env::remove_var("GRIDFORM_SUBMIT_TEXT");
    }

    #[test]
    fn test_apply_env_overrides_success_duration() {
        let mut settings = FormSettings::default();
        std::env::set_var("GRIDFORM_SUCCESS_DURATION_MS", "500");
        apply_env_overrides(&mut settings);
        assert_eq!(settings.success.duration_ms, 500);
        std::env::remove_var("GRIDFORM_SUCCESS_DURATION_MS");
    }

    #[test]
    fn test_apply_env_overrides_invalid_grid_columns() {
        let mut settings = FormSettings::default();
        std::env::set_var("GRIDFORM_GRID_COLUMNS", "wide");
        apply_env_overrides(&mut settings);
        assert_eq!(settings.grid.grid_columns, 1); // unchanged
        std::env::remove_var("GRIDFORM_GRID_COLUMNS");
    }

    #[test]
    fn test_toml_with_env_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("form_env.toml");
        std::fs::write(&path, "api = \"https://example.com/a\"\n").unwrap();

        std::env::set_var("GRIDFORM_API", "https://example.com/b");
        let settings = from_toml_file_with_env(&path).unwrap();
        std::env::remove_var("GRIDFORM_API");

        assert_eq!(settings.api_endpoint(), Some("https://example.com/b"));
    }

    // ── overlay helper ──────────────────────────────────────────────

    #[test]
    fn test_overlay_merges_objects_and_replaces_the_rest() {
        let mut target = serde_json::json!({
            "grid": {"grid_columns": 1, "row_gap": 3},
            "list": [1, 2, 3],
            "api": "https://example.com/a"
        });
        overlay(
            &mut target,
            serde_json::json!({"grid": {"row_gap": 8}, "list": [4], "api": null, "extra": 1}),
        );
        assert_eq!(
            target,
            serde_json::json!({
                "grid": {"grid_columns": 1, "row_gap": 8},
                "list": [4],
                "api": null,
                "extra": 1
            })
        );
    }

    #[test]
    fn test_partial_submit_table_keeps_defaults() {
        let settings = from_toml_str(
            r#"
            [submit.style]
            color = "white"
        "#,
        )
        .unwrap();
        assert_eq!(settings.submit.text, "Submit");
        assert_eq!(settings.submit.inline_style(), "color: white;");
    }

    #[test]
    fn test_parse_toml_value() {
        let json = parse_toml_value(
            r#"
            name = "test"
            count = 42
            flag = true
            items = [1, 2, 3]
            [nested]
            key = "value"
        "#,
        )
        .unwrap();

        assert_eq!(json["name"], "test");
        assert_eq!(json["count"], 42);
        assert_eq!(json["flag"], true);
        assert_eq!(json["items"], serde_json::json!([1, 2, 3]));
        assert_eq!(json["nested"]["key"], "value");
    }
}
