//! Condition AST nodes
//!
//! Conditions are kept exactly as written: the constant may sit on either side
//! and operators are the raw surface operators. Canonicalization happens during
//! lowering.

use super::operator::{BinaryOp, ConstantPosition, EqOp, IntervalOp};
use crate::interval::{Interval, IsOpen};
use serde::{Deserialize, Serialize};

/// `&&`-joined list of conditions of one `if`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionsNode {
    pub conditions: Vec<Condition>,
}

/// A single surface condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Condition {
    /// `x = true`, `false != x`
    Bool(BoolCondition),
    /// `x < 5`, `5 >= x`
    Binary(BinaryCondition),
    /// `x in [0, 10)`
    Interval(IntervalCondition),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoolCondition {
    pub var_name: String,
    pub eq_op: EqOp,
    pub bool_val: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryCondition {
    pub var_name: String,
    pub constant_position: ConstantPosition,
    pub constant: f64,
    pub binary_op: BinaryOp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalCondition {
    pub var_name: String,
    pub interval_op: IntervalOp,
    pub interval: Interval,
    pub is_open: IsOpen,
}

impl ConditionsNode {
    pub fn new(conditions: Vec<Condition>) -> Self {
        Self { conditions }
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

impl Condition {
    /// Create a boolean condition
    pub fn bool(var_name: impl Into<String>, eq_op: EqOp, bool_val: bool) -> Self {
        Condition::Bool(BoolCondition {
            var_name: var_name.into(),
            eq_op,
            bool_val,
        })
    }

    /// Create a binary condition written as `x <op> constant`
    pub fn binary(var_name: impl Into<String>, binary_op: BinaryOp, constant: f64) -> Self {
        Condition::Binary(BinaryCondition {
            var_name: var_name.into(),
            constant_position: ConstantPosition::RightHandSide,
            constant,
            binary_op,
        })
    }

    /// Create a binary condition written as `constant <op> x`
    pub fn binary_lhs(constant: f64, binary_op: BinaryOp, var_name: impl Into<String>) -> Self {
        Condition::Binary(BinaryCondition {
            var_name: var_name.into(),
            constant_position: ConstantPosition::LeftHandSide,
            constant,
            binary_op,
        })
    }

    /// Create an interval membership condition
    pub fn interval(var_name: impl Into<String>, interval: Interval, is_open: IsOpen) -> Self {
        Condition::Interval(IntervalCondition {
            var_name: var_name.into(),
            interval_op: IntervalOp::In,
            interval,
            is_open,
        })
    }

    /// Name of the variable the condition talks about
    pub fn var_name(&self) -> &str {
        match self {
            Condition::Bool(cond) => &cond.var_name,
            Condition::Binary(cond) => &cond.var_name,
            Condition::Interval(cond) => &cond.var_name,
        }
    }
}
