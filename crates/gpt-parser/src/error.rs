//! Parser error types

use thiserror::Error;

/// Parser error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Input does not match the grammar
    #[error("Syntax error at {line}:{column}\n{message}")]
    Syntax {
        message: String,
        line: usize,
        column: usize,
    },

    /// Literal matched the grammar but is not a usable value
    #[error("Invalid value for field '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Parse tree is missing a node the builder expects
    #[error("Missing required node: {field}")]
    MissingField { field: String },
}

impl ParseError {
    pub(crate) fn missing(field: &str) -> Self {
        ParseError::MissingField {
            field: field.to_string(),
        }
    }

    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        ParseError::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Line and column of a syntax error
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            ParseError::Syntax { line, column, .. } => Some((*line, *column)),
            _ => None,
        }
    }
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_only_for_syntax_errors() {
        let err = ParseError::Syntax {
            message: "expected feature".to_string(),
            line: 3,
            column: 7,
        };
        assert_eq!(err.position(), Some((3, 7)));
        assert!(err.to_string().starts_with("Syntax error at 3:7"));

        assert_eq!(ParseError::missing("var_name").position(), None);
    }

    #[test]
    fn test_invalid_value_message() {
        let err = ParseError::invalid("precision", "must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid value for field 'precision': must be positive"
        );
    }
}
