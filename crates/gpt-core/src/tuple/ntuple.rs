//! Fixed-width tuples and the final tuple set

use super::constraint::Constraint;
use super::slot::Slot;
use crate::ir::Variable;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One slot per declared variable, in declaration order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NTuple {
    pub slots: Vec<Slot>,
}

/// Output of the pipeline: declared variables and one tuple per decision path
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TupleSet {
    pub variables: Vec<Variable>,
    pub tuples: Vec<NTuple>,
}

impl NTuple {
    pub fn new(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slot> {
        self.slots.iter()
    }

    /// Number of slots that actually constrain their variable
    pub fn constrained_count(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_missing()).count()
    }

    /// Position-wise check; tuples of different width never intersect
    pub fn intersects_with(&self, other: &NTuple) -> bool {
        self.len() == other.len()
            && self
                .slots
                .iter()
                .zip(&other.slots)
                .all(|(a, b)| a.intersects_with(b))
    }

    /// Position-wise intersection, `None` if any position is disjoint
    pub fn intersect(&self, other: &NTuple) -> Option<NTuple> {
        if self.len() != other.len() {
            return None;
        }

        self.slots
            .iter()
            .zip(&other.slots)
            .map(|(a, b)| a.intersect(b))
            .collect::<Option<Vec<Slot>>>()
            .map(NTuple::new)
    }
}

impl TupleSet {
    pub fn new(variables: Vec<Variable>, tuples: Vec<NTuple>) -> Self {
        Self { variables, tuples }
    }

    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    /// Slot of `var_name` in every tuple, in tuple order
    pub fn column(&self, var_name: &str) -> Option<Vec<&Slot>> {
        let index = self
            .variables
            .iter()
            .position(|var| var.var_name == var_name)?;
        Some(self.tuples.iter().filter_map(|t| t.get(index)).collect())
    }
}

impl fmt::Display for NTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", slot)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::Expression;
    use crate::interval::{Interval, IsOpen, MultiInterval};
    use crate::tuple::{BoolConstraint, IntervalConstraint};
    use crate::types::VarType;

    fn below(value: f64) -> Slot {
        Slot::Interval(IntervalConstraint::new(
            Expression::LessThan,
            MultiInterval::simple(Interval::below(value), IsOpen::open()),
            0.01,
        ))
    }

    #[test]
    fn test_display() {
        let tuple = NTuple::new(vec![Slot::Bool(BoolConstraint::new(true)), below(50.0), Slot::Missing]);
        assert_eq!(tuple.to_string(), "(true, (-Inf, 50), _)");
        assert_eq!(tuple.constrained_count(), 2);
    }

    #[test]
    fn test_tuple_intersection() {
        let a = NTuple::new(vec![Slot::Bool(BoolConstraint::new(true)), Slot::Missing]);
        let b = NTuple::new(vec![Slot::Missing, below(3.0)]);

        let both = a.intersect(&b).unwrap();
        assert_eq!(both, NTuple::new(vec![Slot::Bool(BoolConstraint::new(true)), below(3.0)]));
        assert!(a.intersects_with(&b));
    }

    #[test]
    fn test_tuple_intersection_fails_on_any_disjoint_slot() {
        let a = NTuple::new(vec![Slot::Bool(BoolConstraint::new(true)), Slot::Missing]);
        let b = NTuple::new(vec![Slot::Bool(BoolConstraint::new(false)), Slot::Missing]);
        assert!(!a.intersects_with(&b));
        assert_eq!(a.intersect(&b), None);
    }

    #[test]
    fn test_width_mismatch() {
        let a = NTuple::new(vec![Slot::Missing]);
        let b = NTuple::new(vec![Slot::Missing, Slot::Missing]);
        assert!(!a.intersects_with(&b));
        assert_eq!(a.intersect(&b), None);
    }

    #[test]
    fn test_column() {
        let set = TupleSet::new(
            vec![Variable::new("VIP", VarType::Bool), Variable::new("price", VarType::num())],
            vec![
                NTuple::new(vec![Slot::Bool(BoolConstraint::new(true)), Slot::Missing]),
                NTuple::new(vec![Slot::Missing, below(1.0)]),
            ],
        );

        let column = set.column("price").unwrap();
        assert_eq!(column, vec![&Slot::Missing, &below(1.0)]);
        assert!(set.column("nope").is_none());
    }
}
