//! Variable types
//!
//! A feature declares its variables with one of these types. Numbers carry the
//! smallest meaningful step between two values; this crate only carries it
//! through to the tuples, the value generator decides what to do with it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Precision used for `int` declarations
pub const INT_PRECISION: f64 = 1.0;

/// Precision used for `num` declarations without an explicit precision
pub const DEFAULT_NUM_PRECISION: f64 = 0.01;

/// Declared type of a variable
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VarType {
    /// `bool`
    Bool,
    /// `int`, `num` or `num(p)`
    Number { precision: f64 },
}

impl VarType {
    /// Type of an `int` declaration
    pub fn int() -> Self {
        VarType::Number {
            precision: INT_PRECISION,
        }
    }

    /// Type of a `num` declaration
    pub fn num() -> Self {
        VarType::Number {
            precision: DEFAULT_NUM_PRECISION,
        }
    }

    /// Type of a `num(p)` declaration
    pub fn num_with_precision(precision: f64) -> Self {
        VarType::Number { precision }
    }

    /// Precision of a number type, `None` for booleans
    pub fn precision(&self) -> Option<f64> {
        match self {
            VarType::Bool => None,
            VarType::Number { precision } => Some(*precision),
        }
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, VarType::Bool)
    }

    pub fn is_number(&self) -> bool {
        matches!(self, VarType::Number { .. })
    }
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarType::Bool => write!(f, "bool"),
            VarType::Number { precision } => write!(f, "num({})", precision),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_and_num_precisions() {
        assert_eq!(VarType::int().precision(), Some(1.0));
        assert_eq!(VarType::num().precision(), Some(0.01));
        assert_eq!(VarType::num_with_precision(0.5).precision(), Some(0.5));
        assert_eq!(VarType::Bool.precision(), None);
    }

    #[test]
    fn test_type_predicates() {
        assert!(VarType::Bool.is_bool());
        assert!(!VarType::Bool.is_number());
        assert!(VarType::int().is_number());
    }

    #[test]
    fn test_display() {
        assert_eq!(VarType::Bool.to_string(), "bool");
        assert_eq!(VarType::num().to_string(), "num(0.01)");
    }

    #[test]
    fn test_var_type_serde() {
        let json = serde_json::to_string(&VarType::num_with_precision(0.1)).unwrap();
        assert_eq!(json, r#"{"type":"number","precision":0.1}"#);

        let parsed: VarType = serde_json::from_str(r#"{"type":"bool"}"#).unwrap();
        assert_eq!(parsed, VarType::Bool);
    }
}
