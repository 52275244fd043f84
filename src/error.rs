//! Error types for expression evaluation.

use crate::types::ExpressionType;
use thiserror::Error;

/// Errors that can occur while evaluating an expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    /// A required value was absent: a nullable computation produced no value
    /// in a context that demands one (`eval_required`, `or_else_throw`).
    #[error("absent value: nullable computation of type {expression_type:?} produced no value")]
    AbsentValue { expression_type: ExpressionType },
}

/// Result type for expression operations.
pub type ExpressionResult<T> = Result<T, ExpressionError>;
