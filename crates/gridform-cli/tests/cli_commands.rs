//! Integration tests for the built-in commands.
//!
//! Each test writes a form config (and values where needed) to a temporary
//! directory, runs a command through the registry, and checks its report.

use std::path::Path;

use gridform_cli::command::{CommandRegistry, CommandStatus};
use gridform_cli::commands::register_builtin_commands;

const CONTACT: &str = r#"
title = "Contact"

[grid]
grid_columns = 2
default_field_columns = 2

[submit]
text = "Send"
grid = { columnStart = 1, rowStart = 4, columns = 1 }

[[fields]]
name = "name"
type = "text"
required = true
gridOptions = { columnStart = 1, rowStart = 1, columns = 1, responsive = [{ breakpoint = 480, columns = 2 }] }

[[fields]]
name = "email"
type = "email"
required = true
gridOptions = { columnStart = 2, rowStart = 1, columns = 1, responsive = [{ breakpoint = 480, columnStart = 1, rowStart = 2, columns = 2 }] }

[[fields]]
name = "message"
type = "textArea"
maxLength = 20
gridOptions = { columnStart = 1, rowStart = 2, rows = 2 }
"#;

fn write(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

async fn run(args: &[&str]) -> (CommandStatus, String) {
    let mut registry = CommandRegistry::new();
    register_builtin_commands(&mut registry);
    let argv = std::iter::once("gridform").chain(args.iter().copied());
    let matches = registry.build_cli().try_get_matches_from(argv).unwrap();

    let mut out = Vec::new();
    let status = registry.execute(&matches, &mut out).await.unwrap();
    (status, String::from_utf8(out).unwrap())
}

// ============================================================================
// check
// ============================================================================

#[tokio::test]
async fn test_check_clean_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(dir.path(), "contact.toml", CONTACT);

    let (status, out) = run(&["check", &config]).await;
    assert_eq!(status, CommandStatus::Success);
    assert!(out.contains("Loaded 'Contact' with 3 field(s)"));
    assert!(out.contains("Check identified no issues"));
}

#[tokio::test]
async fn test_check_reports_errors() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(
        dir.path(),
        "broken.json",
        r#"{"fields": [
            {"name": "a", "gridOptions": {"columnStart": 0, "rowStart": 1}},
            {"name": "a"}
        ]}"#,
    );

    let (status, out) = run(&["check", &config]).await;
    assert_eq!(status, CommandStatus::Failure);
    assert!(out.contains("ERROR (fields.E001)"));
    assert!(out.contains("WARNING (fields.W001)"));
    assert!(out.contains("(1 error(s), 1 warning(s))"));
}

#[tokio::test]
async fn test_missing_config_is_an_error() {
    let mut registry = CommandRegistry::new();
    register_builtin_commands(&mut registry);
    let matches = registry
        .build_cli()
        .try_get_matches_from(["gridform", "check", "/nonexistent/form.toml"])
        .unwrap();

    let mut out = Vec::new();
    let err = registry.execute(&matches, &mut out).await.unwrap_err();
    assert_eq!(err.code(), "io");
}

// ============================================================================
// layout
// ============================================================================

#[tokio::test]
async fn test_layout_base() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(dir.path(), "contact.toml", CONTACT);

    let (status, out) = run(&["layout", &config]).await;
    assert_eq!(status, CommandStatus::Success);
    assert!(out.contains(
        "container: display: grid; grid-template-columns: repeat(2, 1fr); column-gap: 3px; row-gap: 3px;"
    ));
    let email = out.lines().find(|l| l.starts_with("email")).unwrap();
    let columns: Vec<&str> = email.split_whitespace().collect();
    assert_eq!(columns, vec!["email", "email", "2", "1", "1", "1", "50px"]);

    let message = out.lines().find(|l| l.starts_with("message")).unwrap();
    assert!(message.ends_with("103px"));
    assert!(message.split_whitespace().any(|c| c == "textarea"));
    assert!(out.contains("submit 'Send' at column 1, row 4 (span 1x1)"));
    assert!(!out.contains("submit style"));
}

#[tokio::test]
async fn test_layout_prints_submit_style() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(
        dir.path(),
        "styled.toml",
        r#"
[submit]
text = "Go"
style = { fontWeight = "bold" }

[[fields]]
name = "q"
"#,
    );

    let (_, out) = run(&["layout", &config]).await;
    assert!(out.contains("submit 'Go' placed automatically"));
    assert!(out.contains("submit style: font-weight: bold;"));
}

#[tokio::test]
async fn test_layout_at_width() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(dir.path(), "contact.toml", CONTACT);

    let (_, out) = run(&["layout", &config, "--width", "400"]).await;
    assert!(out.starts_with("Layout of 'Contact' at 400px"));
    let email = out.lines().find(|l| l.starts_with("email")).unwrap();
    let columns: Vec<&str> = email.split_whitespace().collect();
    assert_eq!(columns, vec!["email", "email", "1", "2", "2", "1", "50px"]);
}

// ============================================================================
// validate
// ============================================================================

#[tokio::test]
async fn test_validate_accepts_good_values() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(dir.path(), "contact.toml", CONTACT);
    let values = write(
        dir.path(),
        "values.json",
        r#"{"name": "Ada", "email": "ada@example.com", "message": "hi"}"#,
    );

    let (status, out) = run(&["validate", &config, &values]).await;
    assert_eq!(status, CommandStatus::Success);
    assert!(out.contains("Submission would be accepted"));
}

#[tokio::test]
async fn test_validate_blocks_bad_values() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(dir.path(), "contact.toml", CONTACT);
    let values = write(
        dir.path(),
        "values.json",
        r#"{"email": "not-an-email", "message": "this message is far too long", "phone": "1"}"#,
    );

    let (status, out) = run(&["validate", &config, &values]).await;
    assert_eq!(status, CommandStatus::Failure);
    assert!(out.contains("ignoring 'phone': no such field"));
    let name = out.lines().find(|l| l.starts_with("name")).unwrap();
    assert!(name.contains("required"));
    let email = out.lines().find(|l| l.starts_with("email")).unwrap();
    assert!(email.contains("invalid"));
    assert!(out.contains("Submission would be blocked"));
}

#[tokio::test]
async fn test_validate_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(dir.path(), "contact.toml", CONTACT);
    let values = write(dir.path(), "values.json", r#"{"name": "Ada"}"#);

    let (status, out) = run(&["validate", &config, &values, "--json"]).await;
    assert_eq!(status, CommandStatus::Failure);
    let report: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
    assert_eq!(
        report,
        serde_json::json!({"markers": [false, "required", false], "blocked": true})
    );
}
