//! # gridform-forms
//!
//! Declarative forms for gridform: field definitions, the validation
//! engine, the grid layout resolver, the form state model, and the submit
//! flow that ties them together.
//!
//! ## Modules
//!
//! - [`fields`] - Field definitions and values
//! - [`validation`] - Per-field validation rules and error markers
//! - [`layout`] - Grid placement and height resolution, CSS emission
//! - [`state`] - Per-field values and markers with change tracking
//! - [`submission`] - The submitted `{name: value}` data
//! - [`transport`] - Background delivery of submissions
//! - [`indicator`] - The self-dismissing success indicator
//! - [`widgets`] - Input kinds for the presentation layer
//! - [`bound_field`] - Render requests for fields and the submit button
//! - [`config`] - Loading settings and fields from one document
//! - [`form`] - The inline form and its submit flow

pub mod bound_field;
pub mod config;
pub mod fields;
pub mod form;
pub mod indicator;
pub mod layout;
pub mod state;
pub mod submission;
pub mod transport;
pub mod validation;
pub mod widgets;

pub use bound_field::{RenderRequest, SubmitButton};
pub use config::FormConfig;
pub use fields::{DropdownOption, FieldDefinition, FieldType, FormValue};
pub use form::{InlineForm, SubmitOutcome, SuccessCallback};
pub use layout::{FieldLayout, Placement};
pub use state::{FieldState, FormState};
pub use submission::SubmissionData;
pub use transport::{HttpTransport, MemoryTransport, Transport};
pub use validation::ErrorMarker;
pub use widgets::InputKind;
