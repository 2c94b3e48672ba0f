//! `chartguard schema` command implementation.

use anyhow::Result;
use std::path::Path;

use chartguard_core::{ChartGuardConfig, SchemaRegistry};

use super::load_schema;

pub fn run(config: &ChartGuardConfig, schema: Option<&Path>) -> Result<()> {
    let schema = load_schema(config, schema)?;
    print!("{}", render(&schema, config));
    Ok(())
}

/// One line per table: name, column count, numeric count, flags.
fn render(schema: &SchemaRegistry, config: &ChartGuardConfig) -> String {
    if schema.is_empty() {
        return "(no tables)\n".to_string();
    }

    let width = schema.table_names().map(str::len).max().unwrap_or(0);
    let mut out = String::new();
    for (name, columns) in schema.tables() {
        let pii = columns
            .all_columns
            .iter()
            .filter(|c| config.allow_lists.is_pii_column(c))
            .count();

        let mut line = format!(
            "{:<width$}  {:>3} columns  {:>3} numeric",
            name,
            columns.all_columns.len(),
            columns.numerical_columns.len(),
        );
        if pii > 0 {
            line.push_str(&format!("  {} pii", pii));
        }
        if config.allow_lists.is_baseline_table(name) {
            line.push_str("  baseline");
        }
        out.push_str(&line);
        out.push('\n');
    }
    out
}
