//! # gridform-cli
//!
//! Command-line tooling for gridform form configs.
//!
//! This crate provides a framework for defining and registering CLI commands,
//! plus the built-in commands:
//!
//! - `check` - load a config and report suspicious definitions
//! - `layout` - print each field's resolved grid placement and height
//! - `validate` - validate a JSON object of values, exiting 1 when blocked
//!
//! ## Quick Start
//!
//! ```rust
//! use gridform_cli::command::CommandRegistry;
//! use gridform_cli::commands::register_builtin_commands;
//!
//! let mut registry = CommandRegistry::new();
//! register_builtin_commands(&mut registry);
//!
//! assert_eq!(registry.list_commands(), vec!["check", "layout", "validate"]);
//! ```

// These clippy lints are intentionally allowed:
// - result_large_err: FormError is the workspace-wide error type
// - unused_async: command handlers maintain consistent async signatures
#![allow(clippy::result_large_err)]
#![allow(clippy::unused_async)]

pub mod command;
pub mod commands;

pub use command::{CommandRegistry, CommandStatus, FormCommand};
