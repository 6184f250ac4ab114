//! # gridform
//!
//! Declarative forms laid out on a CSS grid, validated on submit.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient access.
//! You can depend on `gridform` to get everything, or depend on individual
//! crates for finer-grained control.
//!
//! ```
//! use gridform::prelude::*;
//!
//! let mut form = InlineForm::new(
//!     vec![
//!         FieldDefinition::new("email", FieldType::Email).required(true),
//!         FieldDefinition::new("news", FieldType::Switch).label("Newsletter"),
//!     ],
//!     FormSettings::default(),
//! );
//!
//! let email = form.id_of("email").unwrap();
//! form.set_value(email, "not-an-email").unwrap();
//! assert_eq!(
//!     form.submit(),
//!     SubmitOutcome::Blocked(vec![ErrorMarker::Invalid, ErrorMarker::Valid])
//! );
//! ```

/// Core types, settings, grid options, logging, and error types.
pub use gridform_core as core;

/// Field definitions, validation, layout, form state, and submission.
pub use gridform_forms as forms;

/// Command framework and built-in commands (CLI).
#[cfg(feature = "cli")]
pub use gridform_cli as cli;

// Third-party crates re-exported for user convenience.
pub use async_trait;
pub use serde;
pub use serde_json;
pub use tokio;
pub use tracing;
pub use tracing_subscriber;

/// The types most forms need.
pub mod prelude {
    pub use gridform_core::{
        Breakpoint, FieldId, FormError, FormResult, FormSettings, GridOptions, GridSettings,
    };
    pub use gridform_forms::{
        ErrorMarker, FieldDefinition, FieldType, FormConfig, FormValue, InlineForm,
        RenderRequest, SubmissionData, SubmitOutcome, Transport,
    };
}
