//! Compiler error types

use gpt_core::CoreError;
use std::fmt;
use thiserror::Error;

/// Language construct that parses but cannot be lowered yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Construct {
    /// A feature declared inside another feature
    NestedFeature,
    /// `else if` branch
    ElseIf,
    /// `else` branch
    Else,
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Construct::NestedFeature => "nested features",
            Construct::ElseIf => "else if",
            Construct::Else => "else",
        };
        f.write_str(name)
    }
}

/// Compiler error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    /// Construct accepted by the grammar but not by lowering
    #[error("Unsupported construct: {0} is not yet supported")]
    UnsupportedConstruct(Construct),

    /// Interval algebra rejected a value
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Condition kind does not fit the declared variable type
    #[error("Type mismatch for variable '{var_name}': declared {expected}, condition is {actual}")]
    TypeMismatch {
        var_name: String,
        expected: String,
        actual: String,
    },

    /// Condition references a variable the feature never declares
    #[error("Undefined variable: {0}")]
    UndefinedVariable(String),

    /// Variable declared more than once in one feature
    #[error("Duplicate variable declaration: {0}")]
    DuplicateVariable(String),
}

/// Result type for compiler operations
pub type Result<T> = std::result::Result<T, CompileError>;
