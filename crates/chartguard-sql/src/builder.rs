//! SQL generation for validated chart requests.

use crate::error::BuildError;
use crate::shape::check_statement_shape;
use chartguard_core::{Dialect, GuardrailsConfig, SchemaRegistry};
use chartguard_policy::{ChartType, ValidatedRequest};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A generated statement with its bind parameters.
///
/// `params` is always empty today; it is where filter values will go once
/// WHERE clauses are supported, so they are never spliced into `sql`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuiltQuery {
    pub sql: String,
    pub params: Vec<Value>,
}

/// Builds dialect-specific SELECT statements.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlBuilder {
    dialect: Dialect,
    guardrails: GuardrailsConfig,
}

impl SqlBuilder {
    /// Create a builder with the default ceilings.
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            guardrails: GuardrailsConfig::default(),
        }
    }

    /// Override the row and group ceilings.
    pub fn with_guardrails(mut self, guardrails: GuardrailsConfig) -> Self {
        self.guardrails = guardrails;
        self
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn guardrails(&self) -> &GuardrailsConfig {
        &self.guardrails
    }

    /// The ceiling that applies to this request's query shape.
    pub fn ceiling(&self, request: &ValidatedRequest) -> u64 {
        if request.is_aggregated() {
            self.guardrails.max_groups
        } else if request.chart_type() == ChartType::Histogram {
            self.guardrails.max_histogram_bins
        } else {
            self.guardrails.max_rows
        }
    }

    /// Requested limit clamped to the ceiling, at least 1.
    pub fn effective_limit(&self, request: &ValidatedRequest) -> u64 {
        let ceiling = self.ceiling(request);
        request
            .limit()
            .map_or(ceiling, |requested| requested.min(ceiling))
            .max(1)
    }

    /// Build the statement for a validated request.
    ///
    /// `schema` must be the snapshot the request was validated against.
    pub fn build(
        &self,
        request: &ValidatedRequest,
        schema: &SchemaRegistry,
    ) -> Result<BuiltQuery, BuildError> {
        check_against_schema(request, schema)?;

        let quoted_table = self.quote(request.table_name())?;
        let limit = self.effective_limit(request);
        let params: Vec<Value> = Vec::new();

        let mut select_parts = Vec::new();
        let mut group_by_parts = Vec::new();
        let order_by_clause;

        if let Some(aggregation) = request.aggregation() {
            // aggregation() guarantees both axes
            let (Some(x), Some(y)) = (request.x_axis(), request.y_axis()) else {
                return Err(BuildError::NoColumns);
            };
            let alias = self.quote(&request.y_axis_label())?;

            select_parts.push(self.quote(x)?);
            select_parts.push(format!(
                "{}({}) AS {}",
                aggregation.keyword(),
                self.quote(y)?,
                alias
            ));
            group_by_parts.push(self.quote(x)?);

            if let Some(color) = request.color()
                && color != x
            {
                select_parts.push(self.quote(color)?);
                group_by_parts.push(self.quote(color)?);
            }

            order_by_clause = Some(format!("ORDER BY {} DESC", alias));
        } else {
            let mut columns: Vec<&str> = Vec::new();
            for (_, column) in request.axes() {
                if !columns.contains(&column) {
                    columns.push(column);
                }
            }
            if columns.is_empty() {
                return Err(BuildError::NoColumns);
            }
            for column in columns {
                select_parts.push(self.quote(column)?);
            }

            order_by_clause = match request.x_axis() {
                Some(x) => Some(format!("ORDER BY {}", self.quote(x)?)),
                None => None,
            };
        }

        // Reserved for parameterized filters; values would go to `params`.
        let where_clause: Option<String> = None;

        let mut sql_parts = Vec::new();
        if self.dialect.uses_top() {
            sql_parts.push(format!("SELECT TOP {}", limit));
        } else {
            sql_parts.push("SELECT".to_string());
        }
        sql_parts.push(select_parts.join(", "));
        sql_parts.push(format!("FROM {}", quoted_table));
        if let Some(where_clause) = where_clause {
            sql_parts.push(where_clause);
        }
        if !group_by_parts.is_empty() {
            sql_parts.push(format!("GROUP BY {}", group_by_parts.join(", ")));
        }
        if let Some(order_by_clause) = order_by_clause {
            sql_parts.push(order_by_clause);
        }
        if !self.dialect.uses_top() {
            sql_parts.push(format!("LIMIT {}", limit));
        }

        let sql = sql_parts.join(" ");
        check_statement_shape(&sql, self.dialect)?;

        tracing::debug!(
            table = request.table_name(),
            dialect = %self.dialect,
            aggregated = request.is_aggregated(),
            limit,
            sql = %sql,
            "built chart query"
        );

        Ok(BuiltQuery { sql, params })
    }

    fn quote(&self, name: &str) -> Result<String, BuildError> {
        Ok(self.dialect.quote_ident(name)?)
    }
}

/// Every identifier must exist in the snapshot the builder was given.
fn check_against_schema(
    request: &ValidatedRequest,
    schema: &SchemaRegistry,
) -> Result<(), BuildError> {
    let columns = schema
        .get_table(request.table_name())
        .ok_or_else(|| BuildError::SchemaMismatch {
            what: "table",
            name: request.table_name().to_string(),
        })?;

    for (_, column) in request.axes() {
        if !columns.has_column(column) {
            return Err(BuildError::SchemaMismatch {
                what: "column",
                name: format!("{}.{}", request.table_name(), column),
            });
        }
    }
    Ok(())
}

/// Build with the default ceilings.
pub fn build_sql(
    request: &ValidatedRequest,
    schema: &SchemaRegistry,
    dialect: Dialect,
) -> Result<BuiltQuery, BuildError> {
    SqlBuilder::new(dialect).build(request, schema)
}
