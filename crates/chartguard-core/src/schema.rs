//! Schema snapshot types.
//!
//! A [`SchemaRegistry`] maps table names to [`ColumnMetadata`]. The calling
//! application produces it (usually from database introspection, refreshed on a
//! TTL) and hands an immutable snapshot to the validator and the builder.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

/// Error type for schema loading and invariant checks.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported schema file format '{0}' (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),

    #[error("table '{table}': {role} column '{column}' is not listed in all_columns")]
    NotInAllColumns {
        table: String,
        role: &'static str,
        column: String,
    },
}

/// Type classification of a column, derived from its SQL data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Numeric,
    Date,
    Categorical,
}

const NUMERIC_TYPES: &[&str] = &[
    "int",
    "integer",
    "smallint",
    "bigint",
    "tinyint",
    "mediumint",
    "decimal",
    "numeric",
    "real",
    "float",
    "double",
    "double precision",
    "money",
    "smallmoney",
    "bit",
];

const DATE_TYPES: &[&str] = &[
    "date",
    "datetime",
    "datetime2",
    "smalldatetime",
    "timestamp",
    "time",
    "datetimeoffset",
];

impl ColumnKind {
    /// Classify an `INFORMATION_SCHEMA.COLUMNS.DATA_TYPE` value.
    ///
    /// Matching is case-insensitive and ignores a precision suffix, so
    /// `DECIMAL(10,2)` is numeric. Postgres `timestamp with time zone` and
    /// friends are dates. Anything unrecognised is categorical.
    pub fn classify(data_type: &str) -> Self {
        let lowered = data_type.trim().to_ascii_lowercase();
        let base = lowered
            .split('(')
            .next()
            .unwrap_or_default()
            .trim();

        if NUMERIC_TYPES.contains(&base) {
            ColumnKind::Numeric
        } else if DATE_TYPES.contains(&base) || base.starts_with("timestamp") {
            ColumnKind::Date
        } else {
            ColumnKind::Categorical
        }
    }
}

/// Column metadata for a single table.
///
/// `all_columns` keeps ordinal order; the classified subsets are sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMetadata {
    /// Every column of the table, in ordinal order.
    #[serde(default)]
    pub all_columns: Vec<String>,

    /// Columns with a numeric SQL type.
    #[serde(default)]
    pub numerical_columns: BTreeSet<String>,

    /// Columns with a date/time SQL type.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub date_columns: BTreeSet<String>,

    /// Everything else.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub categorical_columns: BTreeSet<String>,
}

impl ColumnMetadata {
    /// Create metadata from a column list and its numeric subset.
    ///
    /// Duplicate names in `all_columns` keep their first position.
    pub fn new<A, N>(all_columns: A, numerical_columns: N) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        let mut meta = Self::default();
        for column in all_columns {
            meta.push_column(column.into());
        }
        meta.numerical_columns = numerical_columns.into_iter().map(Into::into).collect();
        meta
    }

    /// Build metadata from introspected `(column_name, data_type)` rows.
    pub fn from_typed_columns<I, C, T>(columns: I) -> Self
    where
        I: IntoIterator<Item = (C, T)>,
        C: Into<String>,
        T: AsRef<str>,
    {
        let mut meta = Self::default();
        for (name, data_type) in columns {
            let name = name.into();
            if meta.has_column(&name) {
                continue;
            }
            match ColumnKind::classify(data_type.as_ref()) {
                ColumnKind::Numeric => meta.numerical_columns.insert(name.clone()),
                ColumnKind::Date => meta.date_columns.insert(name.clone()),
                ColumnKind::Categorical => meta.categorical_columns.insert(name.clone()),
            };
            meta.all_columns.push(name);
        }
        meta
    }

    fn push_column(&mut self, name: String) {
        if !self.has_column(&name) {
            self.all_columns.push(name);
        }
    }

    /// Check if the table has a column with exactly this name.
    pub fn has_column(&self, name: &str) -> bool {
        self.all_columns.iter().any(|c| c == name)
    }

    /// Check if a column is classified numeric.
    pub fn is_numeric(&self, name: &str) -> bool {
        self.numerical_columns.contains(name)
    }

    /// Classification of a column, if it exists.
    pub fn kind_of(&self, name: &str) -> Option<ColumnKind> {
        if !self.has_column(name) {
            return None;
        }
        if self.numerical_columns.contains(name) {
            Some(ColumnKind::Numeric)
        } else if self.date_columns.contains(name) {
            Some(ColumnKind::Date)
        } else {
            Some(ColumnKind::Categorical)
        }
    }

    /// Numeric column names, sorted.
    pub fn numeric_column_names(&self) -> Vec<String> {
        self.numerical_columns.iter().cloned().collect()
    }

    /// Check that every classified subset is contained in `all_columns`.
    pub fn validate(&self, table: &str) -> Result<(), SchemaError> {
        let subsets = [
            ("numerical", &self.numerical_columns),
            ("date", &self.date_columns),
            ("categorical", &self.categorical_columns),
        ];
        for (role, subset) in subsets {
            if let Some(column) = subset.iter().find(|c| !self.has_column(c)) {
                return Err(SchemaError::NotInAllColumns {
                    table: table.to_string(),
                    role,
                    column: column.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Snapshot of the queryable tables and their columns.
///
/// Serialized as a plain `{table: {all_columns, numerical_columns, ...}}` map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaRegistry {
    tables: BTreeMap<String, ColumnMetadata>,
}

impl SchemaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style table insertion.
    pub fn with_table(mut self, name: impl Into<String>, columns: ColumnMetadata) -> Self {
        self.insert_table(name, columns);
        self
    }

    /// Add or replace a table.
    pub fn insert_table(&mut self, name: impl Into<String>, columns: ColumnMetadata) {
        self.tables.insert(name.into(), columns);
    }

    /// Get a table's metadata by exact name.
    pub fn get_table(&self, name: &str) -> Option<&ColumnMetadata> {
        self.tables.get(name)
    }

    pub fn contains_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// True when schema discovery produced no tables at all.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Table names in sorted order.
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Iterate over `(table, metadata)` pairs in sorted order.
    pub fn tables(&self) -> impl Iterator<Item = (&str, &ColumnMetadata)> {
        self.tables.iter().map(|(name, meta)| (name.as_str(), meta))
    }

    /// Check the subset invariants of every table.
    pub fn validate(&self) -> Result<(), SchemaError> {
        for (name, meta) in &self.tables {
            meta.validate(name)?;
        }
        Ok(())
    }

    /// Parse a registry from YAML content and check its invariants.
    pub fn from_yaml(content: &str) -> Result<Self, SchemaError> {
        let registry: Self = serde_yaml::from_str(content)?;
        registry.validate()?;
        Ok(registry)
    }

    /// Parse a registry from JSON content and check its invariants.
    pub fn from_json(content: &str) -> Result<Self, SchemaError> {
        let registry: Self = serde_json::from_str(content)?;
        registry.validate()?;
        Ok(registry)
    }

    /// Load a registry from a `.json`, `.yaml` or `.yml` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let content = fs::read_to_string(path)?;
        let registry = match extension.as_str() {
            "json" => Self::from_json(&content)?,
            "yaml" | "yml" => Self::from_yaml(&content)?,
            other => return Err(SchemaError::UnsupportedFormat(other.to_string())),
        };

        tracing::debug!(
            path = %path.display(),
            tables = registry.len(),
            "loaded schema snapshot"
        );
        Ok(registry)
    }
}

impl FromIterator<(String, ColumnMetadata)> for SchemaRegistry {
    fn from_iter<I: IntoIterator<Item = (String, ColumnMetadata)>>(iter: I) -> Self {
        Self {
            tables: iter.into_iter().collect(),
        }
    }
}
