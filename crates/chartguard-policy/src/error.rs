//! Validation error types.
//!
//! Every rejection carries a machine-readable [`ValidationErrorKind`], a
//! human-readable message, the request field at fault, and (when the set of
//! valid alternatives is closed) the values that would have been accepted.
//! Callers feed the suggestions back to whatever produced the request.

use crate::chart::{Aggregation, AxisRole, ChartType};
use serde::Serialize;
use std::fmt;

/// Error type for chart request rejections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// The kind of validation error.
    pub kind: ValidationErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Request field that caused the rejection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Values that would have been accepted, sorted.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ValidationError {
    /// Create a new validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field: None,
            suggestions: Vec::new(),
        }
    }

    /// Attach the offending request field.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Attach suggested valid values.
    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }

    // =========================================================================
    // TABLE ERRORS
    // =========================================================================

    pub fn unknown_table(table: &str, available: Vec<String>) -> Self {
        Self::new(
            ValidationErrorKind::UnknownTable,
            format!(
                "Table '{}' not found in database. Available tables: {}",
                table,
                available.join(", ")
            ),
        )
        .with_field("table_name")
        .with_suggestions(available)
    }

    pub fn schema_unavailable(table: &str) -> Self {
        Self::new(
            ValidationErrorKind::SchemaUnavailable,
            format!(
                "Table '{}' is allowed but schema discovery returned no tables. \
                 Please ensure the database connection is working.",
                table
            ),
        )
        .with_field("table_name")
    }

    // =========================================================================
    // FIELD ERRORS
    // =========================================================================

    pub fn missing_field(field: &str, chart_type: Option<ChartType>) -> Self {
        let message = match chart_type {
            Some(chart_type) => format!("{} is required for chart_type '{}'", field, chart_type),
            None => format!("{} is required", field),
        };
        Self::new(ValidationErrorKind::MissingRequiredField, message).with_field(field)
    }

    pub fn unknown_column(table: &str, role: AxisRole, column: &str, available: Vec<String>) -> Self {
        Self::new(
            ValidationErrorKind::UnknownColumn,
            format!(
                "Invalid column '{}' for {} in table '{}'. Must be one of: {}",
                column,
                role,
                table,
                available.join(", ")
            ),
        )
        .with_field(role.field_name())
        .with_suggestions(available)
    }

    pub fn sensitive_column(role: AxisRole, column: &str) -> Self {
        Self::new(
            ValidationErrorKind::SensitiveColumn,
            format!(
                "Column '{}' contains PII and cannot be selected for privacy protection.",
                column
            ),
        )
        .with_field(role.field_name())
    }

    pub fn non_numeric(role: AxisRole, column: &str, context: &str, numeric: Vec<String>) -> Self {
        Self::new(
            ValidationErrorKind::NonNumericField,
            format!(
                "{} '{}' must be numerical for {}. Numerical columns: {}",
                role,
                column,
                context,
                numeric.join(", ")
            ),
        )
        .with_field(role.field_name())
        .with_suggestions(numeric)
    }

    // =========================================================================
    // KEYWORD ERRORS
    // =========================================================================

    pub fn invalid_chart_type(raw: &str, normalized: &str) -> Self {
        let allowed = ChartType::allowed_names();
        Self::new(
            ValidationErrorKind::InvalidChartType,
            format!(
                "Invalid chart_type '{}' (normalized: '{}'). Allowed types: {}",
                raw,
                normalized,
                allowed.join(", ")
            ),
        )
        .with_field("chart_type")
        .with_suggestions(allowed)
    }

    pub fn invalid_aggregation(raw: &str) -> Self {
        let allowed = Aggregation::allowed_names();
        Self::new(
            ValidationErrorKind::InvalidAggregation,
            format!(
                "Invalid aggregate_y '{}'. Allowed: {}",
                raw,
                allowed.join(", ")
            ),
        )
        .with_field("aggregate_y")
        .with_suggestions(allowed)
    }

    pub fn invalid_limit(raw: &str) -> Self {
        Self::new(
            ValidationErrorKind::InvalidLimit,
            format!("limit must be an integer of at least 1, got: {}", raw),
        )
        .with_field("limit")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// Table is in neither the schema snapshot nor the baseline allow-list.
    UnknownTable,
    /// Schema snapshot is empty, so no table can be checked.
    SchemaUnavailable,
    /// Column is not part of the resolved table.
    UnknownColumn,
    /// Column is on the PII block-list.
    SensitiveColumn,
    /// Chart type is not in the allow-list after normalization.
    InvalidChartType,
    /// A field required by the chart type (or the request itself) is absent.
    MissingRequiredField,
    /// A magnitude role points at a non-numeric column.
    NonNumericField,
    /// Aggregation keyword is not recognised.
    InvalidAggregation,
    /// Limit is present but not a positive integer.
    InvalidLimit,
}

impl ValidationErrorKind {
    /// Stable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationErrorKind::UnknownTable => "unknown_table",
            ValidationErrorKind::SchemaUnavailable => "schema_unavailable",
            ValidationErrorKind::UnknownColumn => "unknown_column",
            ValidationErrorKind::SensitiveColumn => "sensitive_column",
            ValidationErrorKind::InvalidChartType => "invalid_chart_type",
            ValidationErrorKind::MissingRequiredField => "missing_required_field",
            ValidationErrorKind::NonNumericField => "non_numeric_field",
            ValidationErrorKind::InvalidAggregation => "invalid_aggregation",
            ValidationErrorKind::InvalidLimit => "invalid_limit",
        }
    }

    /// Whether a corrected request can succeed against the same schema.
    ///
    /// `SchemaUnavailable` depends on the caller's schema discovery, not on
    /// the request, so re-prompting will not help.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, ValidationErrorKind::SchemaUnavailable)
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
