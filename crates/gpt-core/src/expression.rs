//! Canonical relational expressions
//!
//! Every IR condition and every tuple slot carries one of these tags. It tells
//! the downstream generator which shape of constraint it is looking at.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical relational tag, always read with the variable on the left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expression {
    /// x < c
    LessThan,
    /// x <= c
    LessThanOrEqualTo,
    /// x > c
    GreaterThan,
    /// x >= c
    GreaterThanOrEqualTo,
    /// x = c
    EqualTo,
    /// x != c
    NotEqualTo,
    /// x == true
    BoolTrue,
    /// x == false
    BoolFalse,
    /// x in an explicit interval literal
    Interval,
}

impl Expression {
    /// Returns true for the tags that `MultiInterval::from_unary_expression` accepts
    pub fn is_unary_relational(&self) -> bool {
        matches!(
            self,
            Expression::LessThan
                | Expression::LessThanOrEqualTo
                | Expression::GreaterThan
                | Expression::GreaterThanOrEqualTo
                | Expression::EqualTo
                | Expression::NotEqualTo
        )
    }

    /// Returns true for the boolean tags
    pub fn is_bool(&self) -> bool {
        matches!(self, Expression::BoolTrue | Expression::BoolFalse)
    }

    /// Tag for a resolved boolean target
    pub fn from_bool(value: bool) -> Self {
        if value {
            Expression::BoolTrue
        } else {
            Expression::BoolFalse
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
