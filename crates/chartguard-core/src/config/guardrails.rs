//! Row and group ceilings applied by the SQL builder.

use serde::{Deserialize, Serialize};

/// Maximum rows for non-aggregated queries.
pub const MAX_ROWS: u64 = 5000;

/// Maximum groups for aggregated queries.
pub const MAX_GROUPS: u64 = 50;

/// Maximum raw points fetched for a histogram.
pub const MAX_HISTOGRAM_BINS: u64 = 100;

/// Hard ceilings on the number of rows a chart query may return.
///
/// Requested limits are clamped to these, never the other way around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardrailsConfig {
    #[serde(default = "default_max_rows")]
    pub max_rows: u64,

    #[serde(default = "default_max_groups")]
    pub max_groups: u64,

    #[serde(default = "default_max_histogram_bins")]
    pub max_histogram_bins: u64,
}

impl Default for GuardrailsConfig {
    fn default() -> Self {
        Self {
            max_rows: MAX_ROWS,
            max_groups: MAX_GROUPS,
            max_histogram_bins: MAX_HISTOGRAM_BINS,
        }
    }
}

impl GuardrailsConfig {
    /// Name of the first ceiling that is zero, if any.
    pub(crate) fn zero_ceiling(&self) -> Option<&'static str> {
        [
            ("max_rows", self.max_rows),
            ("max_groups", self.max_groups),
            ("max_histogram_bins", self.max_histogram_bins),
        ]
        .into_iter()
        .find(|(_, value)| *value == 0)
        .map(|(name, _)| name)
    }
}

fn default_max_rows() -> u64 {
    MAX_ROWS
}

fn default_max_groups() -> u64 {
    MAX_GROUPS
}

fn default_max_histogram_bins() -> u64 {
    MAX_HISTOGRAM_BINS
}
