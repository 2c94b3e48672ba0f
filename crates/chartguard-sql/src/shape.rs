//! Statement shape check.
//!
//! Parses a generated statement back with `sqlparser` and checks that it is
//! exactly one plain `SELECT` query.

use crate::error::BuildError;
use chartguard_core::Dialect;
use sqlparser::ast::Statement;
use sqlparser::dialect::{MsSqlDialect, SQLiteDialect};
use sqlparser::parser::Parser;

/// Verify that `sql` is a single SELECT statement in the given dialect.
pub fn check_statement_shape(sql: &str, dialect: Dialect) -> Result<(), BuildError> {
    let statements = match dialect {
        Dialect::Bracket => Parser::parse_sql(&MsSqlDialect {}, sql),
        Dialect::Quoted => Parser::parse_sql(&SQLiteDialect {}, sql),
    }
    .map_err(|e| BuildError::MalformedStatement(e.to_string()))?;

    match statements.as_slice() {
        [Statement::Query(query)] if query.body.as_select().is_some() => Ok(()),
        [_] => Err(BuildError::MalformedStatement(
            "statement is not a plain SELECT".to_string(),
        )),
        other => Err(BuildError::MalformedStatement(format!(
            "expected one statement, found {}",
            other.len()
        ))),
    }
}
