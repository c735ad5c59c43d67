//! Constraint contract consumed by the test value generator

use super::slot::{IntervalConstraint, Slot};
use crate::expression::Expression;

/// Operations a generator needs to combine constraints on the same variable
pub trait Constraint: Sized {
    /// Expression the constraint originated from, `None` for "unconstrained"
    fn expression(&self) -> Option<Expression>;

    /// Whether both constraints admit at least one common value
    fn intersects_with(&self, other: &Self) -> bool;

    /// Constraint describing the common values, `None` if there are none
    fn intersect(&self, other: &Self) -> Option<Self>;
}

impl Constraint for Slot {
    fn expression(&self) -> Option<Expression> {
        match self {
            Slot::Bool(constraint) => Some(constraint.expression),
            Slot::Interval(constraint) => Some(constraint.expression),
            Slot::Missing => None,
        }
    }

    fn intersects_with(&self, other: &Self) -> bool {
        match (self, other) {
            (Slot::Missing, _) | (_, Slot::Missing) => true,
            (Slot::Bool(this), Slot::Bool(that)) => this.value == that.value,
            (Slot::Interval(this), Slot::Interval(that)) => {
                this.interval.intersects_with(&that.interval)
            }
            _ => false,
        }
    }

    fn intersect(&self, other: &Self) -> Option<Self> {
        match (self, other) {
            (Slot::Missing, other) => Some(other.clone()),
            (this, Slot::Missing) => Some(this.clone()),
            (Slot::Bool(this), Slot::Bool(that)) if this.value == that.value => {
                Some(Slot::Bool(*this))
            }
            (Slot::Interval(this), Slot::Interval(that)) => {
                let interval = this.interval.intersect(&that.interval)?;
                let expression = if this.expression == that.expression {
                    this.expression
                } else {
                    Expression::Interval
                };
                Some(Slot::Interval(IntervalConstraint::new(
                    expression,
                    interval,
                    this.precision,
                )))
            }
            _ => None,
        }
    }
}
