//! # chartguard-core
//!
//! Shared types for the chartguard crates:
//! - [`SchemaRegistry`] / [`ColumnMetadata`]: the caller-supplied schema snapshot
//! - [`Dialect`]: identifier quoting and row-cap placement per SQL engine
//! - [`ChartGuardConfig`]: allow-lists (baseline tables, PII columns) and row ceilings
//!
//! Nothing in this crate performs I/O except the explicit `from_file` loaders.

pub mod config;
pub mod dialect;
pub mod schema;

pub use config::{
    AllowLists, ChartGuardConfig, ConfigError, GuardrailsConfig, MAX_GROUPS, MAX_HISTOGRAM_BINS,
    MAX_ROWS,
};
pub use dialect::{Dialect, QuoteError, UnknownDialect};
pub use schema::{ColumnKind, ColumnMetadata, SchemaError, SchemaRegistry};
