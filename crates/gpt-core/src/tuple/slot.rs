//! Tuple slots
//!
//! A slot is the constraint one decision path puts on one variable, or the
//! explicit marker that the path does not constrain it.

use crate::expression::Expression;
use crate::interval::MultiInterval;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Constraint on one variable at one tuple position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Slot {
    Bool(BoolConstraint),
    Interval(IntervalConstraint),
    /// The path says nothing about the variable
    Missing,
}

/// Boolean variable must equal `value`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoolConstraint {
    pub expression: Expression,
    pub value: bool,
}

/// Numeric variable must lie in one of the segments of `interval`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalConstraint {
    pub expression: Expression,
    pub interval: MultiInterval,
    /// Declared precision of the variable
    pub precision: f64,
}

impl BoolConstraint {
    pub fn new(value: bool) -> Self {
        Self {
            expression: Expression::from_bool(value),
            value,
        }
    }
}

impl IntervalConstraint {
    pub fn new(expression: Expression, interval: MultiInterval, precision: f64) -> Self {
        Self {
            expression,
            interval,
            precision,
        }
    }
}

impl Slot {
    pub fn is_missing(&self) -> bool {
        matches!(self, Slot::Missing)
    }

    pub fn as_bool(&self) -> Option<&BoolConstraint> {
        match self {
            Slot::Bool(constraint) => Some(constraint),
            _ => None,
        }
    }

    pub fn as_interval(&self) -> Option<&IntervalConstraint> {
        match self {
            Slot::Interval(constraint) => Some(constraint),
            _ => None,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Bool(constraint) => write!(f, "{}", constraint.value),
            Slot::Interval(constraint) => write!(f, "{}", constraint.interval),
            Slot::Missing => write!(f, "_"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::{Interval, IsOpen, Segment};

    #[test]
    fn test_bool_constraint_tag() {
        assert_eq!(BoolConstraint::new(true).expression, Expression::BoolTrue);
        assert_eq!(BoolConstraint::new(false).expression, Expression::BoolFalse);
    }

    #[test]
    fn test_slot_display() {
        let interval = Slot::Interval(IntervalConstraint::new(
            Expression::GreaterThanOrEqualTo,
            MultiInterval::simple(Interval::above(50.0), IsOpen::new(false, true)),
            0.01,
        ));

        assert_eq!(Slot::Bool(BoolConstraint::new(false)).to_string(), "false");
        assert_eq!(interval.to_string(), "[50, Inf)");
        assert_eq!(Slot::Missing.to_string(), "_");
    }

    #[test]
    fn test_interval_slot_keeps_every_segment() -> anyhow::Result<()> {
        let segments = MultiInterval::try_from(vec![
            Segment::new(Interval::below(3.0), IsOpen::open()),
            Segment::new(Interval::above(3.0), IsOpen::open()),
        ])?;
        let slot = Slot::Interval(IntervalConstraint::new(Expression::Interval, segments, 1.0));

        assert_eq!(slot.to_string(), "(-Inf, 3) (3, Inf)");
        let json = serde_json::to_value(&slot)?;
        assert_eq!(json["interval"].as_array().map(Vec::len), Some(2));
        Ok(())
    }

    #[test]
    fn test_slot_serde() {
        let json = serde_json::to_value(Slot::Missing).unwrap();
        assert_eq!(json["kind"], "missing");

        let json = serde_json::to_value(Slot::Bool(BoolConstraint::new(true))).unwrap();
        assert_eq!(json["kind"], "bool");
        assert_eq!(json["value"], true);
        assert_eq!(json["expression"], "BoolTrue");
    }
}
