//! Error types for the SQL builder.

use chartguard_core::QuoteError;
use thiserror::Error;

/// Builder failures.
///
/// Every variant is a broken precondition: a request that passed validation
/// against the same schema snapshot never produces one.
#[derive(Debug, Error)]
pub enum BuildError {
    /// No column ended up in the SELECT list.
    #[error("at least one column must be selected")]
    NoColumns,

    /// An identifier could not be quoted.
    #[error("cannot quote identifier: {0}")]
    Quote(#[from] QuoteError),

    /// The request references a table or column missing from the schema
    /// snapshot passed to the builder.
    #[error("schema snapshot has no {what} '{name}'")]
    SchemaMismatch { what: &'static str, name: String },

    /// The assembled statement did not parse back as a single SELECT.
    #[error("generated statement is malformed: {0}")]
    MalformedStatement(String),
}
