//! Configuration types for chartguard.
//!
//! Configuration is loaded from a single YAML file (`chartguard.yaml`). Every
//! section is optional and falls back to the production defaults.
//!
//! ```yaml
//! dialect: bracket
//! schema_file: schema.yaml
//! allow_lists:
//!   baseline_tables: [Account, Contact, Lead, Opportunity]
//!   pii_columns: [Email]
//! guardrails:
//!   max_rows: 5000
//!   max_groups: 50
//!   max_histogram_bins: 100
//! ```

pub mod allow_lists;
pub mod guardrails;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::dialect::Dialect;
use crate::schema::{SchemaError, SchemaRegistry};

pub use allow_lists::AllowLists;
pub use guardrails::{GuardrailsConfig, MAX_GROUPS, MAX_HISTOGRAM_BINS, MAX_ROWS};

/// Complete chartguard configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartGuardConfig {
    /// SQL dialect of the active backend.
    #[serde(default)]
    pub dialect: Dialect,

    /// Path to a schema snapshot (JSON or YAML).
    #[serde(default)]
    pub schema_file: Option<PathBuf>,

    /// Baseline tables and PII columns.
    #[serde(default)]
    pub allow_lists: AllowLists,

    /// Row and group ceilings.
    #[serde(default)]
    pub guardrails: GuardrailsConfig,
}

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ChartGuardConfig {
    /// Load configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML content.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration and resolve `schema_file` relative to the
    /// configuration file's directory.
    pub fn load_with_context(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut config = Self::from_file(path)?;

        let base_dir = path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        if let Some(schema_file) = &config.schema_file
            && !schema_file.is_absolute()
        {
            config.schema_file = Some(base_dir.join(schema_file));
        }

        Ok(config)
    }

    /// Load the configured schema snapshot, if one is configured.
    pub fn load_schema(&self) -> Result<Option<SchemaRegistry>, ConfigError> {
        match &self.schema_file {
            Some(path) => Ok(Some(SchemaRegistry::from_file(path)?)),
            None => Ok(None),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(name) = self.guardrails.zero_ceiling() {
            return Err(ConfigError::Config(format!(
                "guardrails.{} must be at least 1",
                name
            )));
        }
        Ok(())
    }
}
