//! Canonical IR conditions

use crate::expression::Expression;
use crate::interval::MultiInterval;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A condition on one variable, variable always on the left
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Condition {
    Bool(BoolCondition),
    Interval(IntervalCondition),
}

/// `var == should_equal_to`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoolCondition {
    pub var_name: String,
    pub should_equal_to: bool,
    /// `BoolTrue` or `BoolFalse`, matching `should_equal_to`
    pub expression: Expression,
}

/// `var in interval`, tagged with the relation it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalCondition {
    pub var_name: String,
    pub expression: Expression,
    pub interval: MultiInterval,
}

impl Condition {
    /// Boolean condition, tag derived from the target value
    pub fn bool(var_name: impl Into<String>, should_equal_to: bool) -> Self {
        Condition::Bool(BoolCondition {
            var_name: var_name.into(),
            should_equal_to,
            expression: Expression::from_bool(should_equal_to),
        })
    }

    pub fn interval(
        var_name: impl Into<String>,
        expression: Expression,
        interval: MultiInterval,
    ) -> Self {
        Condition::Interval(IntervalCondition {
            var_name: var_name.into(),
            expression,
            interval,
        })
    }

    pub fn var_name(&self) -> &str {
        match self {
            Condition::Bool(cond) => &cond.var_name,
            Condition::Interval(cond) => &cond.var_name,
        }
    }

    pub fn expression(&self) -> Expression {
        match self {
            Condition::Bool(cond) => cond.expression,
            Condition::Interval(cond) => cond.expression,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Bool(BoolCondition {
                var_name,
                should_equal_to,
                ..
            }) => write!(f, "{} == {}", var_name, should_equal_to),
            Condition::Interval(IntervalCondition {
                var_name, interval, ..
            }) => write!(f, "{} in {}", var_name, interval),
        }
    }
}
