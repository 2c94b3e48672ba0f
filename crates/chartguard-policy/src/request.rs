//! Raw chart request type.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An untrusted chart request: a string-keyed bag of arbitrary JSON values.
///
/// Nothing about the contents is assumed. Recognised keys are `table_name`,
/// `chart_type`, `x_axis`, `y_axis`, `color`, `z_axis`, `size`,
/// `aggregate_y`, `limit` and `title`; everything else is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartRequest {
    fields: Map<String, Value>,
}

/// A raw field narrowed just enough to dispatch on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum RawField<'a> {
    /// Missing, `null`, or an empty string.
    Absent,
    /// A non-empty string.
    Text(&'a str),
    /// Any other JSON value.
    Other(&'a Value),
}

impl ChartRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Wrap a JSON value; `None` unless it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    /// Get a field's raw value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub(crate) fn field(&self, key: &str) -> RawField<'_> {
        match self.fields.get(key) {
            None | Some(Value::Null) => RawField::Absent,
            Some(Value::String(s)) if s.is_empty() => RawField::Absent,
            Some(Value::String(s)) => RawField::Text(s),
            Some(other) => RawField::Other(other),
        }
    }
}

impl From<Map<String, Value>> for ChartRequest {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}
