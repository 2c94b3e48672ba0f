//! `chartguard validate` command implementation.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;

use chartguard_core::ChartGuardConfig;
use chartguard_policy::{RequestValidator, ValidatedRequest};

use super::{load_schema, print_json, read_request, report_rejection};

#[derive(Serialize)]
struct Accepted<'a> {
    status: &'static str,
    aggregated: bool,
    y_axis_label: String,
    request: &'a ValidatedRequest,
}

pub fn run(config: &ChartGuardConfig, schema: Option<&Path>, request: &Path) -> Result<ExitCode> {
    let schema = load_schema(config, schema)?;
    let request = read_request(request)?;

    let validator = RequestValidator::new(&config.allow_lists);
    match validator.validate(&request, &schema) {
        Ok(validated) => {
            print_json(&Accepted {
                status: "ok",
                aggregated: validated.is_aggregated(),
                y_axis_label: validated.y_axis_label(),
                request: &validated,
            })?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => report_rejection(&err),
    }
}
