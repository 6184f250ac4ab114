//! Loading a complete form from one document.
//!
//! A form config is a settings document (see
//! [`settings_loader`](gridform_core::settings_loader)) with an extra
//! `fields` array holding the field definitions:
//!
//! ```toml
//! title = "Contact"
//! api = "https://example.com/contact"
//!
//! [grid]
//! grid_columns = 2
//!
//! [[fields]]
//! name = "email"
//! type = "email"
//! required = true
//! gridOptions = { columnStart = 1, rowStart = 1 }
//! ```

use std::path::Path;

use serde::Deserialize;

use gridform_core::error::FormError;
use gridform_core::settings::FormSettings;
use gridform_core::settings_loader;

use crate::fields::FieldDefinition;

/// Settings plus field definitions.
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Form settings.
    pub settings: FormSettings,
    /// Field definitions in declaration order.
    pub fields: Vec<FieldDefinition>,
}

#[derive(Deserialize)]
struct FieldList {
    #[serde(default)]
    fields: Vec<FieldDefinition>,
}

impl FormConfig {
    /// Loads a config from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::ConfigurationError`] if the document is malformed,
    /// a field definition is invalid, or the settings fail their checks.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, FormError> {
        Self::from_value(settings_loader::parse_toml_value(toml_str)?)
    }

    /// Loads a config from a JSON string.
    ///
    /// # Errors
    ///
    /// Same as [`from_toml_str`](Self::from_toml_str).
    pub fn from_json_str(json_str: &str) -> Result<Self, FormError> {
        let value: serde_json::Value = serde_json::from_str(json_str)
            .map_err(|e| FormError::ConfigurationError(format!("Failed to parse JSON: {e}")))?;
        Self::from_value(value)
    }

    /// Loads a config from a file, picking the format from its extension
    /// (`.json` is JSON, anything else TOML), then applies environment
    /// overrides to the settings.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::IoError`] if the file cannot be read, and the
    /// errors of [`from_toml_str`](Self::from_toml_str) otherwise.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FormError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let mut config = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };
        settings_loader::apply_env_overrides(&mut config.settings);
        settings_loader::check(&config.settings)?;
        Ok(config)
    }

    /// Builds a config from an already-parsed document.
    ///
    /// # Errors
    ///
    /// Same as [`from_toml_str`](Self::from_toml_str).
    pub fn from_value(value: serde_json::Value) -> Result<Self, FormError> {
        let FieldList { fields } = serde_json::from_value(value.clone())
            .map_err(|e| FormError::ConfigurationError(format!("Invalid field definition: {e}")))?;
        let settings = settings_loader::from_value(value)?;
        tracing::debug!(fields = fields.len(), title = %settings.title, "form config loaded");
        Ok(Self { settings, fields })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FieldType;

    const CONTACT_TOML: &str = r#"
title = "Contact"

[grid]
grid_columns = 2

[[fields]]
name = "email"
type = "email"
required = true
placeHolder = "you@example.com"
gridOptions = { columnStart = 1, rowStart = 1 }

[[fields]]
name = "message"
type = "textArea"
maxLength = 500
gridOptions = { columnStart = 1, rowStart = 2, columns = 2, rows = 3, responsive = [{ breakpoint = 480, columns = 1 }] }

[[fields]]
name = "subscribe"
type = "switch"
label = "Keep me posted"
"#;

    #[test]
    fn test_from_toml_str() {
        let config = FormConfig::from_toml_str(CONTACT_TOML).unwrap();
        assert_eq!(config.settings.title, "Contact");
        assert_eq!(config.settings.grid.grid_columns, 2);
        // Untouched grid keys keep their defaults.
        assert_eq!(config.settings.grid.fields_height, 50);

        assert_eq!(config.fields.len(), 3);
        let email = &config.fields[0];
        assert_eq!(email.field_type, FieldType::Email);
        assert!(email.required);
        assert_eq!(email.placeholder.as_deref(), Some("you@example.com"));

        let message = &config.fields[1];
        assert_eq!(message.max_length, Some(500));
        assert_eq!(message.grid_options.rows, Some(3));
        assert_eq!(message.grid_options.responsive.len(), 1);

        assert_eq!(config.fields[2].field_type, FieldType::Switch);
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "api": "https://example.com/contact",
            "fields": [
                {"name": "zip", "type": "text", "regex": "^[0-9]{5}$"}
            ]
        }"#;
        let config = FormConfig::from_json_str(json).unwrap();
        assert_eq!(config.settings.api_endpoint(), Some("https://example.com/contact"));
        let zip = &config.fields[0];
        assert!(zip.regex.as_ref().unwrap().is_match("12345"));
    }

    #[test]
    fn test_submit_style_from_toml() {
        let config = FormConfig::from_toml_str(
            r##"
[submit]
text = "Send"
style = { backgroundColor = "#222", color = "white" }
"##,
        )
        .unwrap();
        assert_eq!(config.settings.submit.text, "Send");
        assert_eq!(config.settings.submit.style.len(), 2);
        assert_eq!(
            config.settings.submit.inline_style(),
            "background-color: #222; color: white;"
        );
    }

    #[test]
    fn test_no_fields_is_empty_form() {
        let config = FormConfig::from_toml_str("title = \"Empty\"").unwrap();
        assert!(config.fields.is_empty());
    }

    #[test]
    fn test_bad_regex_is_configuration_error() {
        let json = r#"{"fields": [{"name": "x", "regex": "(unclosed"}]}"#;
        let err = FormConfig::from_json_str(json).unwrap_err();
        assert_eq!(err.code(), "configuration");
    }

    #[test]
    fn test_bad_settings_rejected() {
        let err = FormConfig::from_toml_str("[grid]\ngrid_columns = 0").unwrap_err();
        assert!(err.to_string().contains("grid_columns"));
    }

    #[test]
    fn test_from_file_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let toml_path = dir.path().join("form.toml");
        std::fs::write(&toml_path, CONTACT_TOML).unwrap();
        assert_eq!(FormConfig::from_file(&toml_path).unwrap().fields.len(), 3);

        let json_path = dir.path().join("form.JSON");
        std::fs::write(&json_path, r#"{"fields": [{"name": "a"}]}"#).unwrap();
        assert_eq!(FormConfig::from_file(&json_path).unwrap().fields.len(), 1);
    }

    #[test]
    fn test_from_file_missing() {
        let err = FormConfig::from_file("/nonexistent/form.toml").unwrap_err();
        assert_eq!(err.code(), "io");
    }
}
