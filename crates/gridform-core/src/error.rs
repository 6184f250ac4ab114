//! Core error types for gridform.
//!
//! [`FormError`] covers validation failures, transport failures, configuration
//! problems and misuse of the form state API. Validation failures are normally
//! carried as per-field markers and only turned into a [`FormError`] when a
//! caller asks for a message (see [`FormError::code`]).

use thiserror::Error;

use crate::field_id::FieldId;

/// The primary error type for gridform.
#[derive(Error, Debug)]
pub enum FormError {
    // ── Validation ───────────────────────────────────────────────────

    /// A required field was left empty.
    #[error("This field is required: {field}")]
    MissingRequired {
        /// Name of the offending field.
        field: String,
    },

    /// A value exceeded its maximum length or did not match its pattern.
    #[error("Enter a valid value: {field}")]
    PatternMismatch {
        /// Name of the offending field.
        field: String,
    },

    // ── Transport ────────────────────────────────────────────────────

    /// The submission POST could not be delivered.
    #[error("Transport failure: {0}")]
    TransportFailure(String),

    // ── Field definitions and state ──────────────────────────────────

    /// A field's custom regular expression does not compile.
    #[error("Invalid pattern for field '{field}': {source}")]
    InvalidPattern {
        /// Name of the field carrying the pattern.
        field: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// A [`FieldId`] that does not belong to this form.
    #[error("Unknown field: {0}")]
    UnknownField(FieldId),

    /// A boolean value was given to a text field, or the other way around.
    #[error("Value kind does not match the type of field '{field}'")]
    ValueKindMismatch {
        /// Name of the field.
        field: String,
    },

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    // ── Serialization ────────────────────────────────────────────────

    /// An error occurred during serialization or deserialization.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl FormError {
    /// Returns a short code identifying the kind of failure.
    ///
    /// Presentation layers key their messages on this code:
    ///
    /// - `MissingRequired` -> `"required"`
    /// - `PatternMismatch` -> `"invalid"`
    /// - `TransportFailure` -> `"transport"`
    /// - `InvalidPattern`, `ConfigurationError` -> `"configuration"`
    /// - `UnknownField`, `ValueKindMismatch` -> `"state"`
    /// - `SerializationError`, `IoError` -> `"io"`
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingRequired { .. } => "required",
            Self::PatternMismatch { .. } => "invalid",
            Self::TransportFailure(_) => "transport",
            Self::InvalidPattern { .. } | Self::ConfigurationError(_) => "configuration",
            Self::UnknownField(_) | Self::ValueKindMismatch { .. } => "state",
            Self::SerializationError(_) | Self::IoError(_) => "io",
        }
    }

    /// Returns `true` for the two variants that block a submission.
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::MissingRequired { .. } | Self::PatternMismatch { .. })
    }
}

/// A convenience type alias for `Result<T, FormError>`.
pub type FormResult<T> = Result<T, FormError>;
