//! Operators of the GPT surface syntax

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Equality operator used in boolean conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EqOp {
    /// =
    Equal,
    /// !=
    NotEqual,
}

/// Relational operator used between a variable and a numeric constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    /// <=
    LessThanOrEqualTo,
    /// >=
    GreaterThanOrEqualTo,
    /// !=
    NotEqual,
    /// <
    LessThan,
    /// >
    GreaterThan,
    /// =
    Equal,
}

/// Interval membership operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntervalOp {
    /// in
    In,
}

/// Side of a binary condition the constant was written on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstantPosition {
    /// `0 > x`
    LeftHandSide,
    /// `x < 0`
    RightHandSide,
}

impl EqOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            EqOp::Equal => "=",
            EqOp::NotEqual => "!=",
        }
    }
}

impl BinaryOp {
    /// Operator that keeps the meaning when both operands swap sides
    ///
    /// `0 > x` is `x < 0`. `=` and `!=` are symmetric.
    pub fn flip(&self) -> Self {
        match self {
            BinaryOp::LessThanOrEqualTo => BinaryOp::GreaterThanOrEqualTo,
            BinaryOp::GreaterThanOrEqualTo => BinaryOp::LessThanOrEqualTo,
            BinaryOp::LessThan => BinaryOp::GreaterThan,
            BinaryOp::GreaterThan => BinaryOp::LessThan,
            BinaryOp::Equal => BinaryOp::Equal,
            BinaryOp::NotEqual => BinaryOp::NotEqual,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::LessThanOrEqualTo => "<=",
            BinaryOp::GreaterThanOrEqualTo => ">=",
            BinaryOp::NotEqual => "!=",
            BinaryOp::LessThan => "<",
            BinaryOp::GreaterThan => ">",
            BinaryOp::Equal => "=",
        }
    }

    /// All operators, in grammar order
    pub fn all() -> [BinaryOp; 6] {
        [
            BinaryOp::LessThanOrEqualTo,
            BinaryOp::GreaterThanOrEqualTo,
            BinaryOp::NotEqual,
            BinaryOp::LessThan,
            BinaryOp::GreaterThan,
            BinaryOp::Equal,
        ]
    }
}

impl FromStr for EqOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(EqOp::Equal),
            "!=" => Ok(EqOp::NotEqual),
            other => Err(format!("Unknown equality operator: {}", other)),
        }
    }
}

impl FromStr for BinaryOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BinaryOp::all()
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| format!("Unknown binary operator: {}", s))
    }
}

impl fmt::Display for EqOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
