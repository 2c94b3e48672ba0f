//! # chartguard-sql
//!
//! Builds the SQL statement for a [`ValidatedRequest`].
//!
//! The builder performs no semantic validation. Every request-derived
//! fragment it emits is a quoted identifier (table, columns, aggregate alias);
//! everything else comes from closed enumerations (aggregate function,
//! dialect keywords) or from the builder's own ceilings.
//!
//! ## Query shapes
//!
//! | Shape      | SELECT                         | GROUP BY     | ORDER BY     | Ceiling              |
//! |------------|--------------------------------|--------------|--------------|----------------------|
//! | Aggregated | `x, AGG(y) AS "<Verb> of y"[, color]` | `x[, color]` | alias `DESC` | `max_groups`         |
//! | Raw        | distinct populated axes        | -            | `x`          | `max_rows` / `max_histogram_bins` |
//!
//! ## Dialects
//!
//! ```sql
//! -- bracket
//! SELECT TOP 50 [product], SUM([amount]) AS [Sum of amount] FROM [Sales] GROUP BY [product] ORDER BY [Sum of amount] DESC
//! -- quoted
//! SELECT "product", SUM("amount") AS "Sum of amount" FROM "Sales" GROUP BY "product" ORDER BY "Sum of amount" DESC LIMIT 50
//! ```
//!
//! [`ValidatedRequest`]: chartguard_policy::ValidatedRequest

pub mod builder;
pub mod error;
pub mod shape;

pub use builder::{BuiltQuery, SqlBuilder, build_sql};
pub use error::BuildError;
pub use shape::check_statement_shape;
