//! Form field definitions and values.
//!
//! Each [`FieldDefinition`] describes a single field: its name and type, the
//! rules the validation engine applies to it, presentation metadata, and its
//! grid placement. Definitions are immutable once a form is built.
//!
//! Definitions can be built in code with the builder methods or deserialized
//! from TOML/JSON, where the custom pattern is given as a string under
//! `regex` and compiled on load.

use std::fmt;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use gridform_core::error::FormError;
use gridform_core::grid::GridOptions;

/// The type of a form field.
///
/// `Checkbox`, `Switch` and `Radio` are boolean-like: they hold a
/// [`FormValue::Bool`] and are never rejected by the pattern rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    /// A single-line text input.
    #[default]
    Text,
    /// A multi-line text area.
    TextArea,
    /// An email address input, checked against an email pattern by default.
    Email,
    /// A telephone number input.
    Phone,
    /// A URL input.
    Url,
    /// A checkbox.
    Checkbox,
    /// A toggle switch.
    Switch,
    /// A single-selection dropdown.
    Dropdown,
    /// A radio button.
    Radio,
}

impl FieldType {
    /// Returns `true` for types whose value is a boolean.
    pub const fn is_boolean(self) -> bool {
        matches!(self, Self::Checkbox | Self::Switch | Self::Radio)
    }

    /// Returns the default value for a field of this type.
    pub fn default_value(self) -> FormValue {
        if self.is_boolean() {
            FormValue::Bool(false)
        } else {
            FormValue::Text(String::new())
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::TextArea => "textArea",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Url => "url",
            Self::Checkbox => "checkbox",
            Self::Switch => "switch",
            Self::Dropdown => "dropdown",
            Self::Radio => "radio",
        };
        f.write_str(name)
    }
}

/// The current value of one field.
///
/// Serializes as a bare JSON string or boolean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    /// The value of a boolean-like field.
    Bool(bool),
    /// The value of any other field.
    Text(String),
}

impl FormValue {
    /// Returns the text, or `None` for a boolean.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Bool(_) => None,
        }
    }

    /// Returns the boolean, or `None` for text.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Text(_) => None,
        }
    }

    /// Returns `true` if this is the empty string.
    pub fn is_empty_text(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }

    /// Returns `true` if this value has the kind a field of `field_type` holds.
    pub const fn fits(&self, field_type: FieldType) -> bool {
        matches!(self, Self::Bool(_)) == field_type.is_boolean()
    }
}

impl From<&str> for FormValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FormValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for FormValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl fmt::Display for FormValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One entry of a dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    /// The value stored when this entry is selected.
    pub value: String,
    /// The text shown for this entry.
    pub label: String,
}

impl DropdownOption {
    /// Creates a dropdown entry.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Complete definition of a form field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    /// The key of this field in the submitted data.
    pub name: String,
    /// The field type.
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
    /// Whether an empty value blocks submission.
    #[serde(default)]
    pub required: bool,
    /// Maximum number of characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Custom pattern replacing the type's default pattern.
    #[serde(default, with = "pattern", skip_serializing_if = "Option::is_none")]
    pub regex: Option<Regex>,
    /// Label shown next to the input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Placeholder shown in an empty input.
    #[serde(default, alias = "placeHolder", skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Dropdown entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<DropdownOption>,
    /// Placement in the form grid.
    #[serde(default)]
    pub grid_options: GridOptions,
}

impl FieldDefinition {
    /// Creates an optional field at grid position (1, 1).
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: false,
            max_length: None,
            regex: None,
            label: None,
            placeholder: None,
            options: Vec::new(),
            grid_options: GridOptions::default(),
        }
    }

    /// Sets whether this field is required.
    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the maximum length.
    #[must_use]
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Sets a custom pattern.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidPattern`] if `pattern` does not compile.
    pub fn regex(mut self, pattern: &str) -> Result<Self, FormError> {
        let compiled = compile_pattern(pattern).map_err(|source| FormError::InvalidPattern {
            field: self.name.clone(),
            source,
        })?;
        self.regex = Some(compiled);
        Ok(self)
    }

    /// Sets the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the placeholder.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Adds a dropdown entry.
    #[must_use]
    pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push(DropdownOption::new(value, label));
        self
    }

    /// Sets the grid placement.
    #[must_use]
    pub fn grid(mut self, grid_options: GridOptions) -> Self {
        self.grid_options = grid_options;
        self
    }

    /// Returns `true` if this field holds a boolean.
    pub const fn is_boolean(&self) -> bool {
        self.field_type.is_boolean()
    }
}

/// Derives the default value of every field, in declaration order.
///
/// Boolean-like fields default to `false`, every other field to `""`.
pub fn init_defaults(fields: &[FieldDefinition]) -> Vec<FormValue> {
    fields.iter().map(|f| f.field_type.default_value()).collect()
}

/// Compiles a custom pattern with ASCII-only `\d`, `\w`, `\s` and `\b`.
///
/// Patterns that cannot be compiled that way (a bare `.` can match invalid
/// UTF-8 without Unicode mode) are compiled with Unicode classes instead.
pub(crate) fn compile_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .unicode(false)
        .build()
        .or_else(|_| Regex::new(pattern))
}

/// (De)serializes an optional compiled pattern as its source string.
mod pattern {
    use regex::Regex;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(regex: &Option<Regex>, serializer: S) -> Result<S::Ok, S::Error> {
        match regex {
            Some(re) => serializer.serialize_some(re.as_str()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Regex>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|p| super::compile_pattern(&p).map_err(serde::de::Error::custom))
            .transpose()
    }
}
