//! `chartguard build` command implementation.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::ExitCode;

use chartguard_core::{ChartGuardConfig, Dialect};
use chartguard_policy::RequestValidator;
use chartguard_sql::SqlBuilder;

use super::{load_schema, print_json, read_request, report_rejection};

/// Validate the request and print its SQL. `--dialect` wins over the config.
pub fn run(
    config: &ChartGuardConfig,
    schema: Option<&Path>,
    request: &Path,
    dialect: Option<Dialect>,
) -> Result<ExitCode> {
    let schema = load_schema(config, schema)?;
    let request = read_request(request)?;

    let validated = match RequestValidator::new(&config.allow_lists).validate(&request, &schema) {
        Ok(validated) => validated,
        Err(err) => return report_rejection(&err),
    };

    let dialect = dialect.unwrap_or(config.dialect);
    let built = SqlBuilder::new(dialect)
        .with_guardrails(config.guardrails)
        .build(&validated, &schema)
        .context("Failed to build SQL for a validated request")?;

    print_json(&built)?;
    Ok(ExitCode::SUCCESS)
}
