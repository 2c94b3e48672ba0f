//! Tests that drive the `chartguard` binary.
//!
//! Run with: cargo test --package chartguard --test cli

use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const SCHEMA: &str = r#"
Sales:
  all_columns: [id, product, amount, region]
  numerical_columns: [id, amount]
Contact:
  all_columns: [Id, FirstName, Email]
  numerical_columns: [Id]
"#;

fn chartguard(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_chartguard"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("CHARTGUARD_CONFIG")
        .output()
        .unwrap()
}

fn write(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_build_prints_sql() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write(dir.path(), "schema.yaml", SCHEMA);
    let request = write(
        dir.path(),
        "request.json",
        r#"{"table_name": "Sales", "chart_type": "bar", "x_axis": "product", "y_axis": "amount", "aggregate_y": "SUM", "limit": 100000}"#,
    );

    let output = chartguard(&["build", "--schema", &schema, "--request", &request]);
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(
        json["sql"],
        "SELECT \"product\", SUM(\"amount\") AS \"Sum of amount\" FROM \"Sales\" \
         GROUP BY \"product\" ORDER BY \"Sum of amount\" DESC LIMIT 50"
    );
    assert_eq!(json["params"], Value::Array(vec![]));
}

#[test]
fn test_build_dialect_from_config_and_flag() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "schema.yaml", SCHEMA);
    let config = write(
        dir.path(),
        "chartguard.yaml",
        "dialect: bracket\nschema_file: schema.yaml\nguardrails:\n  max_rows: 10\n",
    );
    let request = write(
        dir.path(),
        "request.json",
        r#"{"table_name": "Sales", "chart_type": "scatter", "x_axis": "amount", "y_axis": "id"}"#,
    );

    let output = chartguard(&["--config", &config, "build", "--request", &request]);
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output)["sql"],
        "SELECT TOP 10 [amount], [id] FROM [Sales] ORDER BY [amount]"
    );

    let output = chartguard(&[
        "--config", &config, "build", "--request", &request, "--dialect", "sqlite",
    ]);
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output)["sql"],
        "SELECT \"amount\", \"id\" FROM \"Sales\" ORDER BY \"amount\" LIMIT 10"
    );
}

#[test]
fn test_validate_rejection_exits_with_two() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write(dir.path(), "schema.yaml", SCHEMA);
    let request = write(
        dir.path(),
        "request.json",
        r#"{"table_name": "Contact", "chart_type": "bar", "x_axis": "Email", "y_axis": "Id"}"#,
    );

    let output = chartguard(&["validate", "--schema", &schema, "--request", &request]);
    assert_eq!(output.status.code(), Some(2));

    let json = stdout_json(&output);
    assert_eq!(json["status"], "rejected");
    assert_eq!(json["retryable"], true);
    assert_eq!(json["error"]["kind"], "sensitive_column");
}

#[test]
fn test_validate_accepts_request() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write(dir.path(), "schema.yaml", SCHEMA);
    let request = write(
        dir.path(),
        "request.json",
        r#"{"table_name": "dbo.Sales", "chart_type": "Pie Chart", "x_axis": "region", "y_axis": "amount", "aggregate_y": "avg"}"#,
    );

    let output = chartguard(&["validate", "--schema", &schema, "--request", &request]);
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["aggregated"], true);
    assert_eq!(json["y_axis_label"], "Average of amount");
    assert_eq!(json["request"]["table_name"], "Sales");
    assert_eq!(json["request"]["chart_type"], "pie_chart");
}

#[test]
fn test_missing_schema_fails() {
    let dir = tempfile::tempdir().unwrap();
    let request = write(dir.path(), "request.json", "{}");

    let output = chartguard(&["validate", "--request", &request]);
    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(2));
}
