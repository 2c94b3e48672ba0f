//! Static allow-lists: baseline tables and PII columns.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Process-wide allow/block lists consulted by the validator.
///
/// Loaded once and treated as read-only; pass a custom instance in tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowLists {
    /// Production tables accepted even when schema discovery did not report
    /// them, as long as discovery reported at least one table.
    #[serde(default = "default_baseline_tables")]
    pub baseline_tables: BTreeSet<String>,

    /// Columns that must never be selected or returned. Exact,
    /// case-sensitive match.
    #[serde(default = "default_pii_columns")]
    pub pii_columns: BTreeSet<String>,
}

impl Default for AllowLists {
    fn default() -> Self {
        Self {
            baseline_tables: default_baseline_tables(),
            pii_columns: default_pii_columns(),
        }
    }
}

impl AllowLists {
    pub fn is_baseline_table(&self, table: &str) -> bool {
        self.baseline_tables.contains(table)
    }

    pub fn is_pii_column(&self, column: &str) -> bool {
        self.pii_columns.contains(column)
    }

    /// Copy of a result row without its PII keys.
    pub fn scrub_record(&self, record: &Map<String, Value>) -> Map<String, Value> {
        let scrubbed: Map<String, Value> = record
            .iter()
            .filter(|(key, _)| !self.is_pii_column(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        if scrubbed.len() != record.len() {
            tracing::debug!(
                removed = record.len() - scrubbed.len(),
                "removed PII fields from result row"
            );
        }
        scrubbed
    }
}

fn default_baseline_tables() -> BTreeSet<String> {
    ["Account", "Contact", "Lead", "Opportunity"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_pii_columns() -> BTreeSet<String> {
    BTreeSet::from(["Email".to_string()])
}
