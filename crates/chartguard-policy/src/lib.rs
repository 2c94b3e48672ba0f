//! Chartguard request validation
//!
//! Narrows an untrusted [`ChartRequest`] (a loose JSON object produced by an
//! LLM or a form) into a [`ValidatedRequest`] whose every identifier is a
//! known, non-sensitive column of a known table. The SQL builder only accepts
//! a `ValidatedRequest`, and only [`RequestValidator`] can construct one.
//!
//! Validation is an ordered pipeline; the first failing step decides the
//! [`ValidationError`]:
//!
//! 1. table resolution (schema snapshot, then baseline allow-list)
//! 2. chart type normalization
//! 3. axis requirements per chart type (presence, PII, column membership)
//! 4. numeric roles
//! 5. aggregation keyword
//! 6. limit

pub mod chart;
pub mod error;
pub mod request;
pub mod validated;
pub mod validator;

pub use chart::{Aggregation, AxisRequirements, AxisRole, ChartType, Requirement};
pub use error::{ValidationError, ValidationErrorKind};
pub use request::ChartRequest;
pub use validated::ValidatedRequest;
pub use validator::{RequestValidator, validate_chart_request};
