//! Built-in commands.
//!
//! Each command implements the [`FormCommand`](crate::command::FormCommand)
//! trait and takes the path of a form config as its first argument.

pub mod check;
pub mod layout;
pub mod validate;

use std::path::PathBuf;

pub use check::CheckCommand;
pub use layout::LayoutCommand;
pub use validate::ValidateCommand;

use gridform_core::FormError;
use gridform_forms::config::FormConfig;

use crate::command::CommandRegistry;

/// Registers all built-in commands into the given registry.
pub fn register_builtin_commands(registry: &mut CommandRegistry) {
    registry.register(Box::new(CheckCommand));
    registry.register(Box::new(LayoutCommand));
    registry.register(Box::new(ValidateCommand));
}

/// Loads the config named by the `config` argument.
fn load_config(matches: &clap::ArgMatches) -> Result<FormConfig, FormError> {
    let path = matches
        .get_one::<PathBuf>("config")
        .ok_or_else(|| FormError::ConfigurationError("missing config file".to_string()))?;
    tracing::debug!(path = %path.display(), "loading form config");
    FormConfig::from_file(path)
}
