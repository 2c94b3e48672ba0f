//! The validated request handed to the SQL builder.

use crate::chart::{Aggregation, AxisRole, ChartType};
use serde::Serialize;

/// A chart request that passed validation.
///
/// Only [`RequestValidator`](crate::RequestValidator) constructs this type,
/// and it is not `Deserialize`, so it cannot be forged from raw input. Fields
/// are read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedRequest {
    table_name: String,
    chart_type: ChartType,
    #[serde(skip_serializing_if = "Option::is_none")]
    x_axis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    y_axis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    z_axis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    aggregate_y: Option<Aggregation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
}

/// Resolved axis columns, indexed by role.
#[derive(Debug, Clone, Default)]
pub(crate) struct Axes {
    pub x: Option<String>,
    pub y: Option<String>,
    pub color: Option<String>,
    pub z: Option<String>,
    pub size: Option<String>,
}

impl Axes {
    pub fn get(&self, role: AxisRole) -> Option<&str> {
        match role {
            AxisRole::X => self.x.as_deref(),
            AxisRole::Y => self.y.as_deref(),
            AxisRole::Color => self.color.as_deref(),
            AxisRole::Z => self.z.as_deref(),
            AxisRole::Size => self.size.as_deref(),
        }
    }

    pub fn set(&mut self, role: AxisRole, column: Option<String>) {
        match role {
            AxisRole::X => self.x = column,
            AxisRole::Y => self.y = column,
            AxisRole::Color => self.color = column,
            AxisRole::Z => self.z = column,
            AxisRole::Size => self.size = column,
        }
    }
}

impl ValidatedRequest {
    pub(crate) fn new(
        table_name: String,
        chart_type: ChartType,
        axes: Axes,
        aggregate_y: Option<Aggregation>,
        limit: Option<u64>,
        title: Option<String>,
    ) -> Self {
        Self {
            table_name,
            chart_type,
            x_axis: axes.x,
            y_axis: axes.y,
            color: axes.color,
            z_axis: axes.z,
            size: axes.size,
            aggregate_y,
            limit,
            title,
        }
    }

    /// Unqualified table name, a key of the schema snapshot.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    pub fn x_axis(&self) -> Option<&str> {
        self.x_axis.as_deref()
    }

    pub fn y_axis(&self) -> Option<&str> {
        self.y_axis.as_deref()
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn z_axis(&self) -> Option<&str> {
        self.z_axis.as_deref()
    }

    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }

    /// Column for an axis role.
    pub fn axis(&self, role: AxisRole) -> Option<&str> {
        match role {
            AxisRole::X => self.x_axis(),
            AxisRole::Y => self.y_axis(),
            AxisRole::Color => self.color(),
            AxisRole::Z => self.z_axis(),
            AxisRole::Size => self.size(),
        }
    }

    /// Populated axes in x, y, color, z, size order.
    pub fn axes(&self) -> impl Iterator<Item = (AxisRole, &str)> {
        AxisRole::ALL
            .into_iter()
            .filter_map(|role| self.axis(role).map(|column| (role, column)))
    }

    pub fn aggregate_y(&self) -> Option<Aggregation> {
        self.aggregate_y
    }

    /// Requested limit. Untrusted: the builder clamps it.
    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    /// Display title. Never used in SQL.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The aggregation to apply, if this is an aggregated query.
    ///
    /// A request is aggregated when `aggregate_y` is set to anything but
    /// NONE and both x and y are present.
    pub fn aggregation(&self) -> Option<Aggregation> {
        match (self.aggregate_y, &self.x_axis, &self.y_axis) {
            (Some(agg), Some(_), Some(_)) if agg.is_aggregate() => Some(agg),
            _ => None,
        }
    }

    pub fn is_aggregated(&self) -> bool {
        self.aggregation().is_some()
    }

    /// Label for the y axis: `"Sum of amount"` when aggregated, the raw y
    /// column otherwise, empty when there is no y axis.
    ///
    /// Matches the alias the builder gives the aggregate column.
    pub fn y_axis_label(&self) -> String {
        let y = self.y_axis.as_deref().unwrap_or_default();
        match self.aggregate_y.and_then(|agg| agg.label_verb()) {
            Some(verb) if !y.is_empty() => format!("{} of {}", verb, y),
            _ => y.to_string(),
        }
    }
}
