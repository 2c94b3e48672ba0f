//! CLI command implementations for chartguard.

pub mod build;
pub mod schema;
pub mod validate;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use chartguard_core::{ChartGuardConfig, SchemaRegistry};
use chartguard_policy::{ChartRequest, ValidationError};

/// Exit status for a rejected request.
pub const EXIT_REJECTED: u8 = 2;

/// Load the configuration file, or the defaults when none is given.
pub fn load_config(path: Option<&Path>) -> Result<ChartGuardConfig> {
    let Some(path) = path else {
        return Ok(ChartGuardConfig::default());
    };

    let config = ChartGuardConfig::load_with_context(path)
        .with_context(|| format!("Failed to load config: {}", path.display()))?;
    tracing::debug!(path = %path.display(), dialect = %config.dialect, "loaded configuration");
    Ok(config)
}

/// Load the schema snapshot from `--schema`, falling back to the config.
pub fn load_schema(config: &ChartGuardConfig, path: Option<&Path>) -> Result<SchemaRegistry> {
    if let Some(path) = path {
        return SchemaRegistry::from_file(path)
            .with_context(|| format!("Failed to load schema snapshot: {}", path.display()));
    }

    match config
        .load_schema()
        .context("Failed to load schema_file from config")?
    {
        Some(schema) => Ok(schema),
        None => bail!("No schema snapshot: pass --schema or set schema_file in the config"),
    }
}

/// Read a request from a JSON file, or from stdin when the path is `-`.
pub fn read_request(path: &Path) -> Result<ChartRequest> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read request from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read request: {}", path.display()))?
    };

    parse_request(&content)
}

fn parse_request(content: &str) -> Result<ChartRequest> {
    let value: serde_json::Value =
        serde_json::from_str(content).context("Request is not valid JSON")?;
    match ChartRequest::from_value(value) {
        Some(request) => Ok(request),
        None => bail!("Request must be a JSON object"),
    }
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[derive(Serialize)]
struct Rejection<'a> {
    status: &'static str,
    retryable: bool,
    error: &'a ValidationError,
}

/// Print a rejection as JSON and return the rejection exit status.
pub fn report_rejection(err: &ValidationError) -> Result<ExitCode> {
    print_json(&Rejection {
        status: "rejected",
        retryable: err.kind.is_retryable(),
        error: err,
    })?;
    Ok(ExitCode::from(EXIT_REJECTED))
}
