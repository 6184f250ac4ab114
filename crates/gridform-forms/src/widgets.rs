//! Input kinds for the presentation layer.
//!
//! The form does not draw anything itself. Each field is handed to the host
//! as a [`RenderRequest`](crate::bound_field::RenderRequest) carrying an
//! [`InputKind`], which names the input control to draw for it.

use std::fmt;

use serde::Serialize;

use crate::fields::FieldType;

/// The kind of input control a field is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// `<input type="text">`.
    Text,
    /// `<input type="email">`.
    Email,
    /// `<input type="tel">`.
    Tel,
    /// `<input type="url">`.
    Url,
    /// `<textarea>`.
    Textarea,
    /// `<input type="checkbox">`.
    Checkbox,
    /// A checkbox drawn as a toggle switch.
    Toggle,
    /// `<select>` with one option per dropdown entry.
    Dropdown,
    /// `<input type="radio">`.
    Radio,
}

impl InputKind {
    /// Returns the input kind used for fields of `field_type`.
    pub const fn for_field(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Text => Self::Text,
            FieldType::TextArea => Self::Textarea,
            FieldType::Email => Self::Email,
            FieldType::Phone => Self::Tel,
            FieldType::Url => Self::Url,
            FieldType::Checkbox => Self::Checkbox,
            FieldType::Switch => Self::Toggle,
            FieldType::Dropdown => Self::Dropdown,
            FieldType::Radio => Self::Radio,
        }
    }

    /// Returns the kind's name, e.g. `"tel"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Textarea => "textarea",
            Self::Checkbox => "checkbox",
            Self::Toggle => "toggle",
            Self::Dropdown => "dropdown",
            Self::Radio => "radio",
        }
    }

    /// Returns `true` for controls that hold a boolean.
    pub const fn is_boolean(self) -> bool {
        matches!(self, Self::Checkbox | Self::Toggle | Self::Radio)
    }

    /// Returns `true` for controls that are drawn with a label above them.
    pub const fn has_label(self) -> bool {
        !self.is_boolean()
    }
}

impl From<FieldType> for InputKind {
    fn from(field_type: FieldType) -> Self {
        Self::for_field(field_type)
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
