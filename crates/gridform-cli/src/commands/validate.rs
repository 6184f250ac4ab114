//! The `validate` command.
//!
//! Runs the validation engine over a JSON object of `{name: value}` pairs, as
//! if the values had been typed into the form and submit pressed.

use std::io::Write;
use std::path::PathBuf;

use async_trait::async_trait;
use gridform_core::{FieldId, FormError};
use gridform_forms::fields::FormValue;
use gridform_forms::state::FormState;
use gridform_forms::validation::{self, ErrorMarker};

use crate::command::{CommandStatus, FormCommand};

/// Validates a set of values against a form config.
pub struct ValidateCommand;

/// Converts one JSON value into a form value.
///
/// Numbers are accepted as their text, since a host's text inputs hold
/// strings.
fn to_form_value(name: &str, value: &serde_json::Value) -> Result<FormValue, FormError> {
    match value {
        serde_json::Value::Bool(b) => Ok(FormValue::Bool(*b)),
        serde_json::Value::String(s) => Ok(FormValue::Text(s.clone())),
        serde_json::Value::Number(n) => Ok(FormValue::Text(n.to_string())),
        other => Err(FormError::SerializationError(format!(
            "value of '{name}' must be a string, number or boolean, got {other}"
        ))),
    }
}

/// Fills `state` from a JSON object, returning the keys no field is named.
///
/// A key shared by several fields sets all of them.
pub fn apply_values(
    state: &mut FormState,
    values: &serde_json::Map<String, serde_json::Value>,
) -> Result<Vec<String>, FormError> {
    let mut unknown = Vec::new();
    for (name, raw) in values {
        let ids: Vec<FieldId> = state
            .ids()
            .filter(|&id| state.field(id).is_some_and(|f| &f.name == name))
            .collect();
        if ids.is_empty() {
            unknown.push(name.clone());
            continue;
        }
        let value = to_form_value(name, raw)?;
        for id in ids {
            state.set_value(id, value.clone())?;
        }
    }
    Ok(unknown)
}

const fn describe(marker: ErrorMarker) -> &'static str {
    match marker {
        ErrorMarker::Valid => "ok",
        ErrorMarker::Invalid => "invalid",
        ErrorMarker::Required => "required",
    }
}

#[async_trait]
impl FormCommand for ValidateCommand {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn help(&self) -> &'static str {
        "Validate a JSON object of field values; exits 1 if submission would be blocked"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(
            clap::Arg::new("config")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Form config file (.toml or .json)"),
        )
        .arg(
            clap::Arg::new("values")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("JSON file holding an object of {name: value}"),
        )
        .arg(
            clap::Arg::new("json")
                .long("json")
                .action(clap::ArgAction::SetTrue)
                .help("Print the markers as JSON"),
        )
    }

    async fn handle(
        &self,
        matches: &clap::ArgMatches,
        out: &mut (dyn Write + Send),
    ) -> Result<CommandStatus, FormError> {
        let config = super::load_config(matches)?;
        let values_path = matches
            .get_one::<PathBuf>("values")
            .ok_or_else(|| FormError::ConfigurationError("missing values file".to_string()))?;
        let content = std::fs::read_to_string(values_path)?;
        let values: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&content)
            .map_err(|e| {
                FormError::SerializationError(format!("{}: {e}", values_path.display()))
            })?;

        let mut state = FormState::new(config.fields);
        let unknown = apply_values(&mut state, &values)?;
        state.mark_attempted();
        let markers = state.validate();
        let blocked = validation::is_blocking(&markers);

        if matches.get_flag("json") {
            let report = serde_json::json!({
                "markers": markers,
                "blocked": blocked,
            });
            writeln!(out, "{report}")?;
        } else {
            for name in &unknown {
                writeln!(out, "ignoring '{name}': no such field")?;
            }
            for (field, marker) in state.fields().iter().zip(&markers) {
                match marker.as_error(&field.name) {
                    Some(err) => writeln!(out, "{:<20} {:<8} {err}", field.name, describe(*marker))?,
                    None => writeln!(out, "{:<20} {}", field.name, describe(*marker))?,
                }
            }
            if blocked {
                writeln!(out, "Submission would be blocked")?;
            } else {
                writeln!(out, "Submission would be accepted")?;
            }
        }

        tracing::debug!(fields = markers.len(), blocked, "values validated");
        if blocked {
            return Ok(CommandStatus::Failure);
        }
        Ok(CommandStatus::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridform_forms::fields::{FieldDefinition, FieldType};

    fn state() -> FormState {
        FormState::new(vec![
            FieldDefinition::new("age", FieldType::Text),
            FieldDefinition::new("terms", FieldType::Checkbox),
            FieldDefinition::new("age", FieldType::Text),
        ])
    }

    #[test]
    fn test_apply_values() {
        let mut state = state();
        let values = serde_json::json!({"age": 42, "terms": true, "extra": "x"});
        let unknown = apply_values(&mut state, values.as_object().unwrap()).unwrap();

        assert_eq!(unknown, vec!["extra".to_string()]);
        assert_eq!(
            state.values(),
            vec![
                FormValue::from("42"),
                FormValue::Bool(true),
                FormValue::from("42"),
            ]
        );
    }

    #[test]
    fn test_apply_values_rejects_wrong_kind() {
        let mut state = state();
        let values = serde_json::json!({"terms": "yes"});
        let err = apply_values(&mut state, values.as_object().unwrap()).unwrap_err();
        assert_eq!(err.code(), "state");
    }

    #[test]
    fn test_apply_values_rejects_nested() {
        let mut state = state();
        let values = serde_json::json!({"age": [1, 2]});
        let err = apply_values(&mut state, values.as_object().unwrap()).unwrap_err();
        assert!(err.to_string().contains("'age'"));
    }
}
