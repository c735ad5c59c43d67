//! Error types for GPT Core

use crate::expression::Expression;
use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Expression cannot be turned into a unary interval
    #[error("Cannot create a unary interval from expression {0}")]
    InvalidExpression(Expression),

    /// Value breaks an invariant of the target type
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
