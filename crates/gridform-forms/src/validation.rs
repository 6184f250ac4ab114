//! Field validation engine.
//!
//! [`validate`] maps field definitions and current values to one
//! [`ErrorMarker`] per field. For each field the rules are tried in order and
//! the first that applies decides:
//!
//! 1. a required field holding the empty string is [`ErrorMarker::Required`];
//! 2. boolean-like fields are [`ErrorMarker::Valid`];
//! 3. text longer than `max_length` characters is [`ErrorMarker::Invalid`];
//! 4. text not matched by the field's pattern is [`ErrorMarker::Invalid`].
//!
//! The pattern is the field's own `regex` if set. Otherwise `email` fields
//! use [`DEFAULT_EMAIL_PATTERN`] and every other type accepts anything.
//! Patterns are searched for anywhere in the value, so a custom pattern that
//! must cover the whole value needs its own `^...$` anchors.
//!
//! Boolean-like fields are never `Required`, even when marked required.

use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use gridform_core::error::FormError;

use crate::fields::{FieldDefinition, FieldType, FormValue};

/// Email pattern applied when an `email` field has no custom pattern.
///
/// `\w` is ASCII-only here: `[A-Za-z0-9_]`.
pub const DEFAULT_EMAIL_PATTERN: &str = r"^\w+([-+.']\w+)*@\w+([-.]\w+)*\.\w+([-.]\w+)*$";

fn default_email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        RegexBuilder::new(DEFAULT_EMAIL_PATTERN)
            .unicode(false)
            .build()
            .expect("default email pattern is valid")
    })
}

/// The validation outcome for one field.
///
/// Serializes as `false` (valid), `true` (length or pattern failure) or
/// `"required"` (missing required value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorMarker {
    /// The value passed every rule.
    #[default]
    Valid,
    /// The value is too long or does not match the pattern.
    Invalid,
    /// A required value is missing.
    Required,
}

impl ErrorMarker {
    /// Returns `true` if this marker blocks submission.
    pub const fn is_blocking(self) -> bool {
        !matches!(self, Self::Valid)
    }

    /// Converts a blocking marker into the error describing it.
    pub fn as_error(self, field: &str) -> Option<FormError> {
        match self {
            Self::Valid => None,
            Self::Invalid => Some(FormError::PatternMismatch {
                field: field.to_string(),
            }),
            Self::Required => Some(FormError::MissingRequired {
                field: field.to_string(),
            }),
        }
    }
}

impl fmt::Display for ErrorMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => f.write_str("false"),
            Self::Invalid => f.write_str("true"),
            Self::Required => f.write_str("required"),
        }
    }
}

impl Serialize for ErrorMarker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Valid => serializer.serialize_bool(false),
            Self::Invalid => serializer.serialize_bool(true),
            Self::Required => serializer.serialize_str("required"),
        }
    }
}

impl<'de> Deserialize<'de> for ErrorMarker {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MarkerVisitor;

        impl Visitor<'_> for MarkerVisitor {
            type Value = ErrorMarker;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(r#"a boolean or the string "required""#)
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<ErrorMarker, E> {
                Ok(if v { ErrorMarker::Invalid } else { ErrorMarker::Valid })
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ErrorMarker, E> {
                if v == "required" {
                    Ok(ErrorMarker::Required)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(v), &self))
                }
            }
        }

        deserializer.deserialize_any(MarkerVisitor)
    }
}

/// Validates a single value against its field definition.
pub fn validate_field(field: &FieldDefinition, value: &FormValue) -> ErrorMarker {
    if field.required && value.is_empty_text() {
        return ErrorMarker::Required;
    }

    if field.is_boolean() {
        return ErrorMarker::Valid;
    }

    // A boolean in a text field is treated as its rendered text.
    let text: Cow<'_, str> = match value {
        FormValue::Text(s) => Cow::Borrowed(s),
        FormValue::Bool(b) => Cow::Owned(b.to_string()),
    };

    if let Some(max) = field.max_length {
        if text.chars().count() > max {
            return ErrorMarker::Invalid;
        }
    }

    if matches_pattern(field, &text) {
        ErrorMarker::Valid
    } else {
        ErrorMarker::Invalid
    }
}

/// Validates every field, returning one marker per field in declaration order.
///
/// Fields without a corresponding value are checked against their default.
pub fn validate(fields: &[FieldDefinition], values: &[FormValue]) -> Vec<ErrorMarker> {
    let markers: Vec<ErrorMarker> = fields
        .iter()
        .enumerate()
        .map(|(i, field)| match values.get(i) {
            Some(value) => validate_field(field, value),
            None => validate_field(field, &field.field_type.default_value()),
        })
        .collect();

    tracing::debug!(
        fields = fields.len(),
        blocking = markers.iter().filter(|m| m.is_blocking()).count(),
        "validated form"
    );
    markers
}

/// Returns `true` if any marker blocks submission.
pub fn is_blocking(markers: &[ErrorMarker]) -> bool {
    markers.iter().any(|m| m.is_blocking())
}

/// Collects the errors behind every blocking marker.
///
/// Useful for presentation layers that need messages rather than markers.
pub fn collect_errors(fields: &[FieldDefinition], markers: &[ErrorMarker]) -> Vec<FormError> {
    fields
        .iter()
        .zip(markers)
        .filter_map(|(field, marker)| marker.as_error(&field.name))
        .collect()
}

fn matches_pattern(field: &FieldDefinition, text: &str) -> bool {
    match (&field.regex, field.field_type) {
        (Some(re), _) => re.is_match(text),
        (None, FieldType::Email) => default_email_regex().is_match(text),
        (None, _) => true,
    }
}
