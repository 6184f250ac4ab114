//! # gridform-core
//!
//! Core types, settings, grid options, and error types for gridform.
//! This crate has no dependency on the rest of the workspace and provides the
//! foundation for the forms and CLI crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`field_id`] - Stable per-field identity
//! - [`grid`] - Declarative grid placement options and breakpoints
//! - [`settings`] - Form settings with documented defaults
//! - [`settings_loader`] - TOML/JSON loading and environment overrides
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod field_id;
pub mod grid;
pub mod logging;
pub mod settings;
pub mod settings_loader;

// Re-export the most commonly used types at the crate root.
pub use error::{FormError, FormResult};
pub use field_id::FieldId;
pub use grid::{Breakpoint, GridOptions};
pub use settings::{FormSettings, GridSettings, SubmitSettings, SuccessSettings};
