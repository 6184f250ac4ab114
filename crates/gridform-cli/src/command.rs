//! Command framework for the gridform CLI.
//!
//! This module provides the [`FormCommand`] trait for defining CLI commands
//! and [`CommandRegistry`] for registering and dispatching them.
//!
//! ## Defining a Custom Command
//!
//! ```rust,no_run
//! use std::io::Write;
//!
//! use async_trait::async_trait;
//! use gridform_cli::command::{CommandStatus, FormCommand};
//! use gridform_core::FormError;
//!
//! struct GreetCommand;
//!
//! #[async_trait]
//! impl FormCommand for GreetCommand {
//!     fn name(&self) -> &'static str { "greet" }
//!     fn help(&self) -> &'static str { "Say hello" }
//!
//!     async fn handle(
//!         &self,
//!         _matches: &clap::ArgMatches,
//!         out: &mut (dyn Write + Send),
//!     ) -> Result<CommandStatus, FormError> {
//!         writeln!(out, "Hello from gridform!")?;
//!         Ok(CommandStatus::Success)
//!     }
//! }
//! ```

use std::collections::HashMap;
use std::io::Write;
use std::process::ExitCode;

use async_trait::async_trait;
use gridform_core::FormError;

/// Whether a command's findings should fail the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    /// Everything checked out.
    Success,
    /// The command ran but found problems (exit code 1).
    Failure,
}

impl CommandStatus {
    /// Returns `true` for [`CommandStatus::Success`].
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl From<CommandStatus> for ExitCode {
    fn from(status: CommandStatus) -> Self {
        match status {
            CommandStatus::Success => Self::SUCCESS,
            CommandStatus::Failure => Self::FAILURE,
        }
    }
}

/// A command that can be registered and invoked through the CLI.
///
/// Implementations define a name, help text, optional arguments, and an async
/// handler that writes its report to `out`.
#[async_trait]
pub trait FormCommand: Send + Sync {
    /// Returns the name of this command (used to invoke it from the CLI).
    fn name(&self) -> &'static str;

    /// Returns a short help description for this command.
    fn help(&self) -> &'static str;

    /// Adds custom arguments to the clap command.
    ///
    /// The default implementation returns the command unchanged.
    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd
    }

    /// Executes the command with the given argument matches.
    ///
    /// Errors are reserved for commands that could not run at all (an
    /// unreadable config, say); problems found in the input are reported in
    /// `out` and signalled with [`CommandStatus::Failure`].
    async fn handle(
        &self,
        matches: &clap::ArgMatches,
        out: &mut (dyn Write + Send),
    ) -> Result<CommandStatus, FormError>;
}

/// A registry of commands.
///
/// Commands are registered by name and can be looked up, listed, or executed.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<&'static str, Box<dyn FormCommand>>,
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a command.
    ///
    /// If a command with the same name already exists, it is replaced.
    pub fn register(&mut self, command: Box<dyn FormCommand>) {
        self.commands.insert(command.name(), command);
    }

    /// Returns a reference to the command with the given name, if registered.
    pub fn get(&self, name: &str) -> Option<&dyn FormCommand> {
        self.commands.get(name).map(AsRef::as_ref)
    }

    /// Returns a sorted list of all registered command names.
    pub fn list_commands(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Builds a top-level clap `Command` containing all registered subcommands.
    pub fn build_cli(&self) -> clap::Command {
        let mut app = clap::Command::new("gridform")
            .about("Inspect and exercise gridform form definitions")
            .subcommand_required(true);

        let mut entries: Vec<_> = self.commands.values().collect();
        entries.sort_by_key(|cmd| cmd.name());

        for cmd in entries {
            let subcmd = clap::Command::new(cmd.name()).about(cmd.help());
            app = app.subcommand(cmd.add_arguments(subcmd));
        }

        app
    }

    /// Executes the command identified by the given argument matches.
    pub async fn execute(
        &self,
        matches: &clap::ArgMatches,
        out: &mut (dyn Write + Send),
    ) -> Result<CommandStatus, FormError> {
        let (name, sub_matches) = matches.subcommand().ok_or_else(|| {
            FormError::ConfigurationError("No subcommand specified".to_string())
        })?;

        let cmd = self
            .get(name)
            .ok_or_else(|| FormError::ConfigurationError(format!("Unknown command: {name}")))?;

        tracing::debug!(command = name, "running command");
        cmd.handle(sub_matches, out).await
    }
}
