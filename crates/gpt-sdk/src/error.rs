//! SDK error types

use gpt_compiler::CompileError;
use gpt_core::CoreError;
use gpt_parser::ParseError;
use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration file that does not describe a valid `EngineConfig`
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Configuration is not valid YAML or has unknown fields
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Parser error
    #[error("Parser error: {0}")]
    ParseError(#[from] ParseError),

    /// Compiler error
    #[error("Compiler error: {0}")]
    CompileError(#[from] CompileError),

    /// Tuple set could not be serialized
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Failure category, independent of the pipeline stage that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input does not match the grammar
    Syntax,
    /// Construct the compiler does not lower (`else`, `else if`, nested features)
    UnsupportedConstruct,
    /// Expression outside the unary interval table
    InvalidExpression,
    /// Anything else: bad literals, type mismatches, configuration, I/O
    Other,
}

impl SdkError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SdkError::ParseError(ParseError::Syntax { .. }) => ErrorKind::Syntax,
            SdkError::CompileError(CompileError::UnsupportedConstruct(_)) => {
                ErrorKind::UnsupportedConstruct
            }
            SdkError::CompileError(CompileError::Core(CoreError::InvalidExpression(_))) => {
                ErrorKind::InvalidExpression
            }
            _ => ErrorKind::Other,
        }
    }
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
