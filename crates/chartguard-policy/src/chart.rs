//! Chart types, axis roles and aggregation functions.
//!
//! Every chart type maps to a fixed [`AxisRequirements`] row, so adding a
//! chart type forces a decision for every axis role at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical chart types accepted by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    BarChart,
    LineChart,
    ScatterPlot,
    PieChart,
    DonutChart,
    Histogram,
    BoxPlot,
    AreaChart,
    #[serde(rename = "3d_scatter_plot")]
    ScatterPlot3d,
    BubbleChart,
}

impl ChartType {
    /// All chart types, in allow-list order.
    pub const ALL: [ChartType; 10] = [
        ChartType::BarChart,
        ChartType::LineChart,
        ChartType::ScatterPlot,
        ChartType::PieChart,
        ChartType::DonutChart,
        ChartType::Histogram,
        ChartType::BoxPlot,
        ChartType::AreaChart,
        ChartType::ScatterPlot3d,
        ChartType::BubbleChart,
    ];

    /// Canonical name, as used in requests and responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::BarChart => "bar_chart",
            ChartType::LineChart => "line_chart",
            ChartType::ScatterPlot => "scatter_plot",
            ChartType::PieChart => "pie_chart",
            ChartType::DonutChart => "donut_chart",
            ChartType::Histogram => "histogram",
            ChartType::BoxPlot => "box_plot",
            ChartType::AreaChart => "area_chart",
            ChartType::ScatterPlot3d => "3d_scatter_plot",
            ChartType::BubbleChart => "bubble_chart",
        }
    }

    /// Lowercase, trim, and turn spaces and hyphens into underscores.
    ///
    /// `"Bar Chart"` and `"bar-chart"` both become `"bar_chart"`.
    pub fn normalize(raw: &str) -> String {
        raw.trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == ' ' || c == '-' { '_' } else { c })
            .collect()
    }

    /// Resolve a normalized name or one of its synonyms.
    pub fn from_normalized(name: &str) -> Option<Self> {
        let chart_type = match name {
            "bar" | "bar_chart" => ChartType::BarChart,
            "line" | "line_chart" => ChartType::LineChart,
            "scatter" | "scatter_plot" => ChartType::ScatterPlot,
            "pie" | "pie_chart" => ChartType::PieChart,
            "donut" | "donut_chart" => ChartType::DonutChart,
            "histogram" => ChartType::Histogram,
            "box" | "box_plot" => ChartType::BoxPlot,
            "area" | "area_chart" => ChartType::AreaChart,
            "3d" | "3d_chart" | "3d_scatter" | "3d_scatter_plot" => ChartType::ScatterPlot3d,
            "bubble" | "bubble_chart" => ChartType::BubbleChart,
            _ => return None,
        };
        Some(chart_type)
    }

    /// Normalize and resolve a raw chart type string.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::from_normalized(&Self::normalize(raw))
    }

    /// Canonical names of every chart type, sorted.
    pub fn allowed_names() -> Vec<String> {
        let mut names: Vec<String> = Self::ALL.iter().map(|c| c.as_str().to_string()).collect();
        names.sort();
        names
    }

    /// The axis requirement row for this chart type.
    pub fn requirements(&self) -> AxisRequirements {
        use Requirement::{Optional, Required, RequiredNumeric, Unused};

        match self {
            ChartType::BarChart
            | ChartType::LineChart
            | ChartType::ScatterPlot
            | ChartType::BoxPlot
            | ChartType::AreaChart => AxisRequirements {
                x: Required,
                y: Required,
                z: Unused,
                size: Unused,
                color: Optional,
            },
            ChartType::PieChart | ChartType::DonutChart => AxisRequirements {
                x: Required,
                y: RequiredNumeric,
                z: Unused,
                size: Unused,
                color: Optional,
            },
            ChartType::Histogram => AxisRequirements {
                x: Required,
                y: Unused,
                z: Unused,
                size: Unused,
                color: Optional,
            },
            ChartType::ScatterPlot3d => AxisRequirements {
                x: Required,
                y: Required,
                z: Required,
                size: Unused,
                color: Optional,
            },
            ChartType::BubbleChart => AxisRequirements {
                x: Required,
                y: Required,
                z: Unused,
                size: RequiredNumeric,
                color: Optional,
            },
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A column-valued field of a chart request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisRole {
    X,
    Y,
    Color,
    Z,
    Size,
}

impl AxisRole {
    /// Roles in validation and selection order.
    pub const ALL: [AxisRole; 5] = [
        AxisRole::X,
        AxisRole::Y,
        AxisRole::Color,
        AxisRole::Z,
        AxisRole::Size,
    ];

    /// Request field carrying this role.
    pub fn field_name(&self) -> &'static str {
        match self {
            AxisRole::X => "x_axis",
            AxisRole::Y => "y_axis",
            AxisRole::Color => "color",
            AxisRole::Z => "z_axis",
            AxisRole::Size => "size",
        }
    }
}

impl fmt::Display for AxisRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// How a chart type uses an axis role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    /// Must be present; any column.
    Required,
    /// Must be present and numeric.
    RequiredNumeric,
    /// May be present; any column.
    Optional,
    /// Ignored if supplied.
    Unused,
}

impl Requirement {
    pub fn is_required(&self) -> bool {
        matches!(self, Requirement::Required | Requirement::RequiredNumeric)
    }
}

/// One row of the axis requirement matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisRequirements {
    pub x: Requirement,
    pub y: Requirement,
    pub z: Requirement,
    pub size: Requirement,
    pub color: Requirement,
}

impl AxisRequirements {
    pub fn get(&self, role: AxisRole) -> Requirement {
        match role {
            AxisRole::X => self.x,
            AxisRole::Y => self.y,
            AxisRole::Color => self.color,
            AxisRole::Z => self.z,
            AxisRole::Size => self.size,
        }
    }
}

/// Aggregation applied to the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Aggregation {
    None,
    Sum,
    Avg,
    Count,
    Min,
    Max,
}

impl Aggregation {
    pub const ALL: [Aggregation; 6] = [
        Aggregation::None,
        Aggregation::Sum,
        Aggregation::Avg,
        Aggregation::Count,
        Aggregation::Min,
        Aggregation::Max,
    ];

    /// Case-insensitive keyword lookup.
    pub fn parse(raw: &str) -> Option<Self> {
        let aggregation = match raw.trim().to_ascii_uppercase().as_str() {
            "NONE" => Aggregation::None,
            "SUM" => Aggregation::Sum,
            "AVG" => Aggregation::Avg,
            "COUNT" => Aggregation::Count,
            "MIN" => Aggregation::Min,
            "MAX" => Aggregation::Max,
            _ => return None,
        };
        Some(aggregation)
    }

    /// Upper-case keyword; also the SQL function name.
    pub fn keyword(&self) -> &'static str {
        match self {
            Aggregation::None => "NONE",
            Aggregation::Sum => "SUM",
            Aggregation::Avg => "AVG",
            Aggregation::Count => "COUNT",
            Aggregation::Min => "MIN",
            Aggregation::Max => "MAX",
        }
    }

    /// Title-cased verb used in the display label (`"Average of price"`).
    pub fn label_verb(&self) -> Option<&'static str> {
        match self {
            Aggregation::None => None,
            Aggregation::Sum => Some("Sum"),
            Aggregation::Avg => Some("Average"),
            Aggregation::Count => Some("Count"),
            Aggregation::Min => Some("Min"),
            Aggregation::Max => Some("Max"),
        }
    }

    /// Whether the y axis must be numeric. Only COUNT works on any column;
    /// NONE still plots y as a magnitude.
    pub fn requires_numeric(&self) -> bool {
        !matches!(self, Aggregation::Count)
    }

    /// Whether this actually aggregates (anything but NONE).
    pub fn is_aggregate(&self) -> bool {
        !matches!(self, Aggregation::None)
    }

    /// Aggregation functions offered as suggestions, excluding NONE.
    pub fn allowed_names() -> Vec<String> {
        Self::ALL
            .iter()
            .filter(|a| a.is_aggregate())
            .map(|a| a.keyword().to_string())
            .collect()
    }
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
