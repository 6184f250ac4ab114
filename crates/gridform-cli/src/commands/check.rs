//! The `check` command.
//!
//! Loads a form config and looks for definitions that load fine but would
//! produce a surprising form: overlapping names, placements outside the grid,
//! dropdowns with nothing to pick.

use std::collections::HashSet;
use std::io::Write;
use std::path::PathBuf;

use async_trait::async_trait;
use gridform_core::FormError;
use gridform_forms::config::FormConfig;
use gridform_forms::fields::FieldType;
use gridform_forms::layout;

use crate::command::{CommandStatus, FormCommand};

/// Loads a form config and reports problems with it.
pub struct CheckCommand;

/// The result of a single check.
#[derive(Debug, Clone)]
pub struct CheckMessage {
    /// The severity level of this check result.
    pub level: CheckLevel,
    /// A human-readable description of the issue.
    pub msg: String,
    /// An optional hint for how to resolve the issue.
    pub hint: Option<String>,
    /// A unique identifier for this check (e.g. "fields.W001").
    pub id: &'static str,
}

/// Severity levels for check results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CheckLevel {
    /// Informational message.
    Info,
    /// A warning that may indicate a problem.
    Warning,
    /// An error that must be resolved.
    Error,
}

impl std::fmt::Display for CheckLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARNING"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Runs every check against a loaded config.
pub fn run_checks(config: &FormConfig) -> Vec<CheckMessage> {
    let mut messages = Vec::new();
    let grid = &config.settings.grid;
    let mut seen = HashSet::new();

    for field in &config.fields {
        let options = &field.grid_options;

        if options.column_start == 0 || options.row_start == 0 {
            messages.push(CheckMessage {
                level: CheckLevel::Error,
                msg: format!("'{}' starts at grid line 0", field.name),
                hint: Some("Grid lines are numbered from 1".to_string()),
                id: "fields.E001",
            });
        }

        if !seen.insert(field.name.as_str()) {
            messages.push(CheckMessage {
                level: CheckLevel::Warning,
                msg: format!("More than one field is named '{}'", field.name),
                hint: Some("Only the last field's value is submitted".to_string()),
                id: "fields.W001",
            });
        }

        let placement = layout::resolve_placement(options, grid.default_field_columns);
        let last_column = placement
            .column_start
            .saturating_add(placement.column_span.saturating_sub(1));
        if placement.column_start > 0 && last_column > grid.grid_columns {
            messages.push(CheckMessage {
                level: CheckLevel::Warning,
                msg: format!(
                    "'{}' ends at column {last_column} but the grid has {} column(s)",
                    field.name, grid.grid_columns
                ),
                hint: Some("The browser adds implicit columns to fit it".to_string()),
                id: "fields.W002",
            });
        }

        if field.field_type == FieldType::Dropdown && field.options.is_empty() {
            messages.push(CheckMessage {
                level: CheckLevel::Warning,
                msg: format!("Dropdown '{}' has no options", field.name),
                hint: None,
                id: "fields.W003",
            });
        }

        if field.required && field.is_boolean() {
            messages.push(CheckMessage {
                level: CheckLevel::Info,
                msg: format!("'{}' is required but never blocks submission", field.name),
                hint: Some(format!("{} fields are exempt from `required`", field.field_type)),
                id: "fields.I001",
            });
        }
    }

    if config.settings.api_endpoint().is_none() && !config.settings.success.enabled {
        messages.push(CheckMessage {
            level: CheckLevel::Info,
            msg: "No API endpoint and no success indicator".to_string(),
            hint: Some("Submissions only reach the success callback".to_string()),
            id: "settings.I001",
        });
    }

    messages
}

#[async_trait]
impl FormCommand for CheckCommand {
    fn name(&self) -> &'static str {
        "check"
    }

    fn help(&self) -> &'static str {
        "Load a form config and report problems"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(
            clap::Arg::new("config")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Form config file (.toml or .json)"),
        )
    }

    async fn handle(
        &self,
        matches: &clap::ArgMatches,
        out: &mut (dyn Write + Send),
    ) -> Result<CommandStatus, FormError> {
        let config = super::load_config(matches)?;
        let messages = run_checks(&config);

        writeln!(
            out,
            "Loaded '{}' with {} field(s)",
            config.settings.title,
            config.fields.len()
        )?;

        let errors = messages.iter().filter(|m| m.level >= CheckLevel::Error).count();
        let warnings = messages.iter().filter(|m| m.level == CheckLevel::Warning).count();

        for msg in &messages {
            write!(out, "{} ({}): {}", msg.level, msg.id, msg.msg)?;
            if let Some(hint) = &msg.hint {
                write!(out, "\n\tHINT: {hint}")?;
            }
            writeln!(out)?;
        }

        if messages.is_empty() {
            writeln!(out, "Check identified no issues")?;
        } else {
            writeln!(
                out,
                "Check identified {} issue(s) ({errors} error(s), {warnings} warning(s))",
                messages.len()
            )?;
        }

        if errors > 0 {
            return Ok(CommandStatus::Failure);
        }
        Ok(CommandStatus::Success)
    }
}
