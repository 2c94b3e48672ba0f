//! SQL dialects and identifier quoting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target SQL syntax family.
///
/// The dialect decides how identifiers are quoted and where the row cap goes:
///
/// | Dialect   | Identifier | Row cap            | Engines            |
/// |-----------|------------|--------------------|--------------------|
/// | `Bracket` | `[name]`   | `SELECT TOP n ...` | SQL Server, Azure  |
/// | `Quoted`  | `"name"`   | `... LIMIT n`      | SQLite, Postgres   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Bracket,
    #[default]
    Quoted,
}

/// Error returned when quoting an empty identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuoteError {
    #[error("identifier name cannot be empty")]
    Empty,
}

/// Error returned when parsing an unknown dialect name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dialect '{0}' (expected 'bracket' or 'quoted')")]
pub struct UnknownDialect(pub String);

impl Dialect {
    /// Quote a table or column identifier.
    ///
    /// The closing quote character is doubled inside the name, so the result
    /// is always a single delimited identifier whatever the input contains.
    pub fn quote_ident(&self, name: &str) -> Result<String, QuoteError> {
        if name.is_empty() {
            return Err(QuoteError::Empty);
        }
        Ok(match self {
            Dialect::Bracket => format!("[{}]", name.replace(']', "]]")),
            Dialect::Quoted => format!("\"{}\"", name.replace('"', "\"\"")),
        })
    }

    /// Whether the row cap is written as `TOP n` right after `SELECT`.
    pub fn uses_top(&self) -> bool {
        matches!(self, Dialect::Bracket)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Bracket => "bracket",
            Dialect::Quoted => "quoted",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = UnknownDialect;

    /// Accepts the dialect names plus the engine names callers usually have
    /// at hand (`sqlserver`, `mssql`, `sqlite`, `postgres`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bracket" | "sqlserver" | "mssql" | "azure" => Ok(Dialect::Bracket),
            "quoted" | "sqlite" | "postgres" | "postgresql" => Ok(Dialect::Quoted),
            _ => Err(UnknownDialect(s.to_string())),
        }
    }
}
