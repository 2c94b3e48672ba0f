//! Chart request validator.
//!
//! The `RequestValidator` is the only way to obtain a [`ValidatedRequest`].
//! It runs these steps in order and returns the first failure:
//!
//! 1. **Table** - resolve `table_name` against the schema snapshot
//! 2. **Chart type** - normalize and match against the closed set
//! 3. **Axes** - presence, PII block-list and column membership per role
//! 4. **Numeric roles** - magnitudes required by the chart type
//! 5. **Aggregation** - keyword, then numeric y for anything but COUNT
//! 6. **Limit** - positive integer (clamping happens in the builder)

use crate::chart::{Aggregation, AxisRole, ChartType, Requirement};
use crate::error::ValidationError;
use crate::request::{ChartRequest, RawField};
use crate::validated::{Axes, ValidatedRequest};
use chartguard_core::{AllowLists, ColumnMetadata, SchemaRegistry};
use serde_json::Value;
use std::collections::BTreeSet;

/// Validates raw chart requests against a schema snapshot and allow-lists.
pub struct RequestValidator<'a> {
    allow_lists: &'a AllowLists,
}

impl<'a> RequestValidator<'a> {
    /// Create a new validator over the given allow-lists.
    pub fn new(allow_lists: &'a AllowLists) -> Self {
        Self { allow_lists }
    }

    /// Get the allow-lists.
    pub fn allow_lists(&self) -> &AllowLists {
        self.allow_lists
    }

    /// Validate a raw request.
    pub fn validate(
        &self,
        request: &ChartRequest,
        schema: &SchemaRegistry,
    ) -> Result<ValidatedRequest, ValidationError> {
        let result = self.run(request, schema);

        match &result {
            Ok(validated) => tracing::debug!(
                table = validated.table_name(),
                chart_type = %validated.chart_type(),
                aggregated = validated.is_aggregated(),
                "chart request validated"
            ),
            Err(err) => tracing::debug!(
                code = err.kind.code(),
                field = err.field.as_deref().unwrap_or("-"),
                "chart request rejected: {}",
                err.message
            ),
        }

        result
    }

    fn run(
        &self,
        request: &ChartRequest,
        schema: &SchemaRegistry,
    ) -> Result<ValidatedRequest, ValidationError> {
        // 1. Table
        let table = self.resolve_table(request, schema)?;
        let no_columns = ColumnMetadata::default();
        let columns = schema.get_table(&table).unwrap_or(&no_columns);

        // 2. Chart type
        let chart_type = resolve_chart_type(request)?;
        let requirements = chart_type.requirements();

        // 3. Axes
        let mut axes = Axes::default();
        for role in AxisRole::ALL {
            let column =
                self.resolve_axis(request, role, requirements.get(role), &table, columns, chart_type)?;
            axes.set(role, column);
        }

        // 4. Numeric roles mandated by the chart type
        for role in AxisRole::ALL {
            if requirements.get(role) != Requirement::RequiredNumeric {
                continue;
            }
            if let Some(column) = axes.get(role)
                && !columns.is_numeric(column)
            {
                return Err(ValidationError::non_numeric(
                    role,
                    column,
                    chart_type.as_str(),
                    columns.numeric_column_names(),
                ));
            }
        }

        // 5. Aggregation
        let aggregate_y = resolve_aggregation(request)?;
        if let Some(agg) = aggregate_y
            && agg.requires_numeric()
            && let Some(y) = axes.get(AxisRole::Y)
            && !columns.is_numeric(y)
        {
            return Err(ValidationError::non_numeric(
                AxisRole::Y,
                y,
                &format!("{} aggregation", agg),
                columns.numeric_column_names(),
            ));
        }

        // 6. Limit
        let limit = resolve_limit(request)?;

        let title = match request.field("title") {
            RawField::Text(title) => Some(title.to_string()),
            _ => None,
        };

        Ok(ValidatedRequest::new(
            table,
            chart_type,
            axes,
            aggregate_y,
            limit,
            title,
        ))
    }

    /// Resolve `table_name` to an unqualified registry key.
    ///
    /// A schema qualifier is stripped (`dbo.Account` becomes `Account`). A
    /// table absent from the snapshot is only accepted when it is a baseline
    /// table and the snapshot itself is non-empty.
    fn resolve_table(
        &self,
        request: &ChartRequest,
        schema: &SchemaRegistry,
    ) -> Result<String, ValidationError> {
        let raw = match request.field("table_name") {
            RawField::Absent => return Err(ValidationError::missing_field("table_name", None)),
            RawField::Text(raw) => raw.to_string(),
            RawField::Other(value) => {
                return Err(ValidationError::unknown_table(
                    &render(value),
                    self.available_tables(schema),
                ));
            }
        };

        let table = raw.rsplit('.').next().unwrap_or_default();

        if schema.contains_table(table) {
            return Ok(table.to_string());
        }

        if !self.allow_lists.is_baseline_table(table) {
            return Err(ValidationError::unknown_table(
                table,
                self.available_tables(schema),
            ));
        }

        if schema.is_empty() {
            return Err(ValidationError::schema_unavailable(table));
        }

        tracing::warn!(
            table,
            "baseline table missing from schema snapshot; columns cannot be checked"
        );
        Ok(table.to_string())
    }

    fn available_tables(&self, schema: &SchemaRegistry) -> Vec<String> {
        let names: BTreeSet<String> = schema
            .table_names()
            .map(String::from)
            .chain(self.allow_lists.baseline_tables.iter().cloned())
            .collect();
        names.into_iter().collect()
    }

    /// Resolve one axis role against the requirement row.
    fn resolve_axis(
        &self,
        request: &ChartRequest,
        role: AxisRole,
        requirement: Requirement,
        table: &str,
        columns: &ColumnMetadata,
        chart_type: ChartType,
    ) -> Result<Option<String>, ValidationError> {
        let field = request.field(role.field_name());

        if requirement == Requirement::Unused {
            if field != RawField::Absent {
                tracing::debug!(
                    field = role.field_name(),
                    chart_type = %chart_type,
                    "ignoring field not used by chart type"
                );
            }
            return Ok(None);
        }

        let column = match field {
            RawField::Absent if requirement.is_required() => {
                return Err(ValidationError::missing_field(
                    role.field_name(),
                    Some(chart_type),
                ));
            }
            RawField::Absent => return Ok(None),
            RawField::Text(column) => column,
            RawField::Other(value) => {
                return Err(ValidationError::unknown_column(
                    table,
                    role,
                    &render(value),
                    self.selectable_columns(columns),
                ));
            }
        };

        if self.allow_lists.is_pii_column(column) {
            return Err(ValidationError::sensitive_column(role, column));
        }

        if !columns.has_column(column) {
            return Err(ValidationError::unknown_column(
                table,
                role,
                column,
                self.selectable_columns(columns),
            ));
        }

        Ok(Some(column.to_string()))
    }

    /// Table columns minus PII, for suggestions.
    fn selectable_columns(&self, columns: &ColumnMetadata) -> Vec<String> {
        columns
            .all_columns
            .iter()
            .filter(|c| !self.allow_lists.is_pii_column(c))
            .cloned()
            .collect()
    }
}

fn resolve_chart_type(request: &ChartRequest) -> Result<ChartType, ValidationError> {
    let raw = match request.field("chart_type") {
        RawField::Absent => return Err(ValidationError::missing_field("chart_type", None)),
        RawField::Text(raw) => raw.to_string(),
        RawField::Other(value) => render(value),
    };

    let normalized = ChartType::normalize(&raw);
    if normalized.is_empty() {
        return Err(ValidationError::missing_field("chart_type", None));
    }

    ChartType::from_normalized(&normalized)
        .ok_or_else(|| ValidationError::invalid_chart_type(&raw, &normalized))
}

fn resolve_aggregation(request: &ChartRequest) -> Result<Option<Aggregation>, ValidationError> {
    match request.field("aggregate_y") {
        RawField::Absent => Ok(None),
        RawField::Text(raw) => Aggregation::parse(raw)
            .map(Some)
            .ok_or_else(|| ValidationError::invalid_aggregation(raw)),
        RawField::Other(value) => Err(ValidationError::invalid_aggregation(&render(value))),
    }
}

/// Accepts JSON integers, integral floats and integer strings, all >= 1.
fn resolve_limit(request: &ChartRequest) -> Result<Option<u64>, ValidationError> {
    let value = match request.get("limit") {
        None | Some(Value::Null) => return Ok(None),
        Some(value) => value,
    };

    let parsed = match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };

    match parsed {
        Some(limit) if limit >= 1 => Ok(Some(limit)),
        _ => Err(ValidationError::invalid_limit(&render(value))),
    }
}

/// Render a non-string value for an error message.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Validate with the default allow-lists.
pub fn validate_chart_request(
    request: &ChartRequest,
    schema: &SchemaRegistry,
) -> Result<ValidatedRequest, ValidationError> {
    let allow_lists = AllowLists::default();
    RequestValidator::new(&allow_lists).validate(request, schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationErrorKind;
    use serde_json::json;

    fn mock_schema() -> SchemaRegistry {
        SchemaRegistry::new()
            .with_table(
                "Users",
                ColumnMetadata::new(["id", "name", "email", "age", "created_at"], ["id", "age"]),
            )
            .with_table(
                "Sales",
                ColumnMetadata::new(["id", "product", "amount", "date", "region"], ["id", "amount"]),
            )
            .with_table(
                "Contact",
                ColumnMetadata::new(
                    ["ContactID", "AccountID", "FullName", "Role", "Email", "CreatedDate"],
                    ["ContactID", "AccountID"],
                ),
            )
    }

    fn request(value: Value) -> ChartRequest {
        ChartRequest::from_value(value).unwrap()
    }

    fn kind_of(value: Value) -> ValidationErrorKind {
        validate_chart_request(&request(value), &mock_schema())
            .unwrap_err()
            .kind
    }

    #[test]
    fn test_valid_bar_chart() {
        let validated = validate_chart_request(
            &request(json!({
                "table_name": "Users",
                "chart_type": "Bar Chart",
                "x_axis": "name",
                "y_axis": "age",
                "title": "Ages",
            })),
            &mock_schema(),
        )
        .unwrap();

        assert_eq!(validated.table_name(), "Users");
        assert_eq!(validated.chart_type(), ChartType::BarChart);
        assert_eq!(validated.x_axis(), Some("name"));
        assert_eq!(validated.y_axis(), Some("age"));
        assert_eq!(validated.title(), Some("Ages"));
        assert!(!validated.is_aggregated());
    }

    #[test]
    fn test_missing_table_name() {
        assert_eq!(
            kind_of(json!({"chart_type": "bar", "x_axis": "id", "y_axis": "age"})),
            ValidationErrorKind::MissingRequiredField
        );
        assert_eq!(
            kind_of(json!({"table_name": "", "chart_type": "bar"})),
            ValidationErrorKind::MissingRequiredField
        );
    }

    #[test]
    fn test_invalid_table() {
        let err = validate_chart_request(
            &request(json!({
                "table_name": "NonExistentTable",
                "chart_type": "bar_chart",
                "x_axis": "id",
                "y_axis": "amount",
            })),
            &mock_schema(),
        )
        .unwrap_err();

        assert_eq!(err.kind, ValidationErrorKind::UnknownTable);
        assert!(err.suggestions.contains(&"Sales".to_string()));
        assert!(err.suggestions.contains(&"Account".to_string()));
    }

    #[test]
    fn test_qualified_table_name_is_stripped() {
        let validated = validate_chart_request(
            &request(json!({
                "table_name": "dbo.Sales",
                "chart_type": "bar",
                "x_axis": "product",
                "y_axis": "amount",
            })),
            &mock_schema(),
        )
        .unwrap();
        assert_eq!(validated.table_name(), "Sales");
    }

    #[test]
    fn test_baseline_table_with_empty_schema() {
        let err = validate_chart_request(
            &request(json!({
                "table_name": "Account",
                "chart_type": "bar",
                "x_axis": "AccountName",
                "y_axis": "Revenue",
            })),
            &SchemaRegistry::new(),
        )
        .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::SchemaUnavailable);
        assert!(!err.kind.is_retryable());
    }

    #[test]
    fn test_non_baseline_table_with_empty_schema() {
        let err = validate_chart_request(
            &request(json!({"table_name": "Sales", "chart_type": "bar"})),
            &SchemaRegistry::new(),
        )
        .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::UnknownTable);
    }

    #[test]
    fn test_baseline_table_missing_from_populated_schema() {
        // The table resolves, but without metadata no column can match.
        let err = validate_chart_request(
            &request(json!({
                "table_name": "Opportunity",
                "chart_type": "bar",
                "x_axis": "Stage",
                "y_axis": "Value",
            })),
            &mock_schema(),
        )
        .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::UnknownColumn);
        assert_eq!(err.field.as_deref(), Some("x_axis"));
    }

    #[test]
    fn test_invalid_chart_type() {
        let err = validate_chart_request(
            &request(json!({
                "table_name": "Users",
                "chart_type": "malicious_chart",
                "x_axis": "id",
                "y_axis": "age",
            })),
            &mock_schema(),
        )
        .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidChartType);
        assert_eq!(err.suggestions.len(), ChartType::ALL.len());
    }

    #[test]
    fn test_missing_chart_type() {
        assert_eq!(
            kind_of(json!({"table_name": "Users", "chart_type": "   "})),
            ValidationErrorKind::MissingRequiredField
        );
    }

    #[test]
    fn test_invalid_column() {
        let err = validate_chart_request(
            &request(json!({
                "table_name": "Users",
                "chart_type": "bar_chart",
                "x_axis": "invalid_col",
                "y_axis": "age",
            })),
            &mock_schema(),
        )
        .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::UnknownColumn);
        assert_eq!(err.field.as_deref(), Some("x_axis"));
        assert!(err.suggestions.contains(&"name".to_string()));
    }

    #[test]
    fn test_non_string_column_rejected() {
        assert_eq!(
            kind_of(json!({"table_name": "Users", "chart_type": "bar", "x_axis": 1, "y_axis": "age"})),
            ValidationErrorKind::UnknownColumn
        );
    }

    #[test]
    fn test_required_axes_per_chart_type() {
        assert_eq!(
            kind_of(json!({"table_name": "Users", "chart_type": "line", "x_axis": "name"})),
            ValidationErrorKind::MissingRequiredField
        );
        assert_eq!(
            kind_of(json!({"table_name": "Users", "chart_type": "histogram"})),
            ValidationErrorKind::MissingRequiredField
        );

        let err = validate_chart_request(
            &request(json!({
                "table_name": "Users",
                "chart_type": "3d",
                "x_axis": "id",
                "y_axis": "age",
            })),
            &mock_schema(),
        )
        .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::MissingRequiredField);
        assert_eq!(err.field.as_deref(), Some("z_axis"));

        let err = validate_chart_request(
            &request(json!({
                "table_name": "Users",
                "chart_type": "bubble",
                "x_axis": "id",
                "y_axis": "age",
            })),
            &mock_schema(),
        )
        .unwrap_err();
        assert_eq!(err.field.as_deref(), Some("size"));
    }

    #[test]
    fn test_histogram_drops_y_axis() {
        let validated = validate_chart_request(
            &request(json!({
                "table_name": "Users",
                "chart_type": "histogram",
                "x_axis": "age",
                "y_axis": "does_not_exist",
            })),
            &mock_schema(),
        )
        .unwrap();
        assert_eq!(validated.y_axis(), None);
    }

    #[test]
    fn test_unused_roles_are_dropped() {
        let validated = validate_chart_request(
            &request(json!({
                "table_name": "Users",
                "chart_type": "bar",
                "x_axis": "name",
                "y_axis": "age",
                "z_axis": "id",
                "size": "age",
            })),
            &mock_schema(),
        )
        .unwrap();
        assert_eq!(validated.z_axis(), None);
        assert_eq!(validated.size(), None);
    }

    #[test]
    fn test_pie_requires_numeric_y() {
        let err = validate_chart_request(
            &request(json!({
                "table_name": "Users",
                "chart_type": "pie",
                "x_axis": "name",
                "y_axis": "created_at",
            })),
            &mock_schema(),
        )
        .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::NonNumericField);
        assert_eq!(err.suggestions, vec!["age".to_string(), "id".to_string()]);

        assert!(
            validate_chart_request(
                &request(json!({
                    "table_name": "Users",
                    "chart_type": "donut",
                    "x_axis": "name",
                    "y_axis": "age",
                })),
                &mock_schema(),
            )
            .is_ok()
        );
    }

    #[test]
    fn test_bubble_requires_numeric_size() {
        assert_eq!(
            kind_of(json!({
                "table_name": "Sales",
                "chart_type": "bubble",
                "x_axis": "id",
                "y_axis": "amount",
                "size": "region",
            })),
            ValidationErrorKind::NonNumericField
        );
    }

    #[test]
    fn test_pii_blocked_in_every_role() {
        for role in AxisRole::ALL {
            let mut fields = json!({
                "table_name": "Contact",
                "chart_type": "3d_scatter_plot",
                "x_axis": "FullName",
                "y_axis": "ContactID",
                "z_axis": "AccountID",
            });
            if role == AxisRole::Size {
                fields["chart_type"] = json!("bubble");
                fields["z_axis"] = Value::Null;
                fields["size"] = json!("AccountID");
            }
            fields[role.field_name()] = json!("Email");

            let err = validate_chart_request(&request(fields), &mock_schema()).unwrap_err();
            assert_eq!(err.kind, ValidationErrorKind::SensitiveColumn, "role {role}");
            assert_eq!(err.field.as_deref(), Some(role.field_name()));
        }
    }

    #[test]
    fn test_pii_match_is_case_sensitive() {
        // lowercase "email" is an ordinary column of Users
        assert!(
            validate_chart_request(
                &request(json!({
                    "table_name": "Users",
                    "chart_type": "bar",
                    "x_axis": "email",
                    "y_axis": "age",
                    "aggregate_y": "COUNT",
                })),
                &mock_schema(),
            )
            .is_ok()
        );
    }

    #[test]
    fn test_aggregation_normalized_to_upper() {
        let validated = validate_chart_request(
            &request(json!({
                "table_name": "Sales",
                "chart_type": "bar",
                "x_axis": "product",
                "y_axis": "amount",
                "aggregate_y": "sum",
            })),
            &mock_schema(),
        )
        .unwrap();
        assert_eq!(validated.aggregate_y(), Some(Aggregation::Sum));
        assert!(validated.is_aggregated());
        assert_eq!(validated.y_axis_label(), "Sum of amount");
    }

    #[test]
    fn test_invalid_aggregation_keyword() {
        assert_eq!(
            kind_of(json!({
                "table_name": "Sales",
                "chart_type": "bar",
                "x_axis": "product",
                "y_axis": "amount",
                "aggregate_y": "MEDIAN",
            })),
            ValidationErrorKind::InvalidAggregation
        );
    }

    #[test]
    fn test_sum_on_non_numeric_rejected_but_count_allowed() {
        assert_eq!(
            kind_of(json!({
                "table_name": "Users",
                "chart_type": "bar",
                "x_axis": "name",
                "y_axis": "email",
                "aggregate_y": "SUM",
            })),
            ValidationErrorKind::NonNumericField
        );

        let validated = validate_chart_request(
            &request(json!({
                "table_name": "Users",
                "chart_type": "bar",
                "x_axis": "created_at",
                "y_axis": "name",
                "aggregate_y": "count",
            })),
            &mock_schema(),
        )
        .unwrap();
        assert_eq!(validated.y_axis_label(), "Count of name");
    }

    #[test]
    fn test_aggregation_none_is_not_aggregated() {
        let validated = validate_chart_request(
            &request(json!({
                "table_name": "Users",
                "chart_type": "bar",
                "x_axis": "name",
                "y_axis": "age",
                "aggregate_y": "NONE",
            })),
            &mock_schema(),
        )
        .unwrap();
        assert_eq!(validated.aggregate_y(), Some(Aggregation::None));
        assert!(!validated.is_aggregated());
        assert_eq!(validated.y_axis_label(), "age");
    }

    #[test]
    fn test_aggregation_none_requires_numeric_y() {
        let err = validate_chart_request(
            &request(json!({
                "table_name": "Sales",
                "chart_type": "bar",
                "x_axis": "product",
                "y_axis": "region",
                "aggregate_y": "NONE",
            })),
            &mock_schema(),
        )
        .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::NonNumericField);
        assert_eq!(err.field.as_deref(), Some("y_axis"));
    }

    #[test]
    fn test_unknown_column_in_every_role() {
        for role in AxisRole::ALL {
            let mut fields = json!({
                "table_name": "Sales",
                "chart_type": "3d_scatter_plot",
                "x_axis": "product",
                "y_axis": "amount",
                "z_axis": "id",
            });
            if role == AxisRole::Size {
                fields["chart_type"] = json!("bubble");
                fields["z_axis"] = Value::Null;
                fields["size"] = json!("amount");
            }
            fields[role.field_name()] = json!("no_such_column");

            let err = validate_chart_request(&request(fields), &mock_schema()).unwrap_err();
            assert_eq!(err.kind, ValidationErrorKind::UnknownColumn, "role {role}");
            assert_eq!(err.field.as_deref(), Some(role.field_name()));
        }
    }

    #[test]
    fn test_limit_parsing() {
        let base = json!({
            "table_name": "Users",
            "chart_type": "bar",
            "x_axis": "name",
            "y_axis": "age",
        });
        let with_limit = |limit: Value| {
            let mut fields = base.clone();
            fields["limit"] = limit;
            validate_chart_request(&request(fields), &mock_schema())
        };

        assert_eq!(with_limit(json!(25)).unwrap().limit(), Some(25));
        assert_eq!(with_limit(json!("40")).unwrap().limit(), Some(40));
        assert_eq!(with_limit(json!(10.0)).unwrap().limit(), Some(10));
        assert_eq!(with_limit(json!(100000)).unwrap().limit(), Some(100000));
        assert_eq!(with_limit(Value::Null).unwrap().limit(), None);

        for bad in [json!(0), json!(-5), json!(2.5), json!("ten"), json!(""), json!(true), json!([1])] {
            let err = with_limit(bad.clone()).unwrap_err();
            assert_eq!(err.kind, ValidationErrorKind::InvalidLimit, "limit {bad}");
        }
    }

    #[test]
    fn test_injection_in_table_name() {
        assert_eq!(
            kind_of(json!({
                "table_name": "Users; DROP TABLE Users; --",
                "chart_type": "bar_chart",
                "x_axis": "id",
                "y_axis": "age",
            })),
            ValidationErrorKind::UnknownTable
        );
    }

    #[test]
    fn test_injection_in_column_name() {
        assert_eq!(
            kind_of(json!({
                "table_name": "Users",
                "chart_type": "bar_chart",
                "x_axis": "id; DROP TABLE Users; --",
                "y_axis": "age",
            })),
            ValidationErrorKind::UnknownColumn
        );
    }

    #[test]
    fn test_first_failure_wins() {
        // bad chart type and bad column: chart type is checked first
        assert_eq!(
            kind_of(json!({
                "table_name": "Users",
                "chart_type": "radar",
                "x_axis": "nope",
            })),
            ValidationErrorKind::InvalidChartType
        );
        // bad column and bad limit: columns are checked first
        assert_eq!(
            kind_of(json!({
                "table_name": "Users",
                "chart_type": "bar",
                "x_axis": "nope",
                "y_axis": "age",
                "limit": -1,
            })),
            ValidationErrorKind::UnknownColumn
        );
    }

    #[test]
    fn test_custom_allow_lists() {
        let allow_lists = AllowLists {
            baseline_tables: BTreeSet::new(),
            pii_columns: BTreeSet::from(["name".to_string()]),
        };
        let validator = RequestValidator::new(&allow_lists);

        let err = validator
            .validate(
                &request(json!({
                    "table_name": "Users",
                    "chart_type": "bar",
                    "x_axis": "name",
                    "y_axis": "age",
                })),
                &mock_schema(),
            )
            .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::SensitiveColumn);

        let err = validator
            .validate(
                &request(json!({"table_name": "Account", "chart_type": "bar"})),
                &mock_schema(),
            )
            .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::UnknownTable);
        assert!(!err.suggestions.contains(&"Account".to_string()));
    }

    #[test]
    fn test_error_serializes_reason_code() {
        let err = ValidationError::invalid_limit("-1");
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["kind"], json!("invalid_limit"));
        assert_eq!(value["field"], json!("limit"));
        assert!(value.get("suggestions").is_none());
    }
}
