//! Tuple assembly
//!
//! Projects every predicate onto the declared variables. Tuples are always as
//! wide as the variable list; a variable a path does not mention gets
//! [`Slot::Missing`]. A variable constrained several times along one path gets
//! the intersection of those constraints, and a path whose constraints cannot
//! all hold produces no tuple.

use crate::error::{CompileError, Result};
use gpt_core::interval::MultiInterval;
use gpt_core::ir::{Condition, Feature, Predicate, Variable};
use gpt_core::tuple::{BoolConstraint, Constraint, IntervalConstraint, NTuple, Slot, TupleSet};
use gpt_core::{Expression, VarType};

/// Tuple assembler
pub struct TupleAssembler;

impl TupleAssembler {
    /// Assemble one tuple per satisfiable predicate of a lowered feature
    pub fn assemble(feature: &Feature) -> Result<TupleSet> {
        let mut tuples = Vec::with_capacity(feature.predicates.len());
        for predicate in &feature.predicates {
            if let Some(tuple) = Self::assemble_predicate(&feature.variables, predicate)? {
                tuples.push(tuple);
            }
        }

        log::debug!(
            "Assembled {} tuples of width {} from {} paths",
            tuples.len(),
            feature.variables.len(),
            feature.predicates.len()
        );

        Ok(TupleSet::new(feature.variables.clone(), tuples))
    }

    /// Assemble the tuple of a single predicate
    ///
    /// Returns `None` when two conditions on the same variable share no value.
    pub fn assemble_predicate(
        variables: &[Variable],
        predicate: &Predicate,
    ) -> Result<Option<NTuple>> {
        let mut slots = Vec::with_capacity(variables.len());
        for variable in variables {
            match Self::constrain(variable, predicate)? {
                Some(slot) => slots.push(slot),
                None => {
                    log::debug!(
                        "Dropping unsatisfiable path on {}: {}",
                        variable.var_name,
                        predicate
                    );
                    return Ok(None);
                }
            }
        }

        Ok(Some(NTuple::new(slots)))
    }

    /// Intersection of every condition the predicate puts on `variable`
    fn constrain(variable: &Variable, predicate: &Predicate) -> Result<Option<Slot>> {
        let mut slots = predicate
            .conditions_on(&variable.var_name)
            .map(|condition| convert_condition(variable, condition))
            .collect::<Result<Vec<_>>>()?;

        if slots.len() > 1 {
            slots = slots.into_iter().map(widen_not_equal).collect();
        }

        Ok(slots
            .iter()
            .try_fold(Slot::Missing, |merged, slot| merged.intersect(slot)))
    }
}

fn convert_condition(variable: &Variable, condition: &Condition) -> Result<Slot> {
    match (condition, variable.var_type) {
        (Condition::Bool(cond), VarType::Bool) => {
            Ok(Slot::Bool(BoolConstraint::new(cond.should_equal_to)))
        }
        (Condition::Interval(cond), VarType::Number { precision }) => Ok(Slot::Interval(
            IntervalConstraint::new(cond.expression, cond.interval.clone(), precision),
        )),
        (Condition::Bool(_), var_type) => Err(type_mismatch(variable, var_type, "bool")),
        (Condition::Interval(_), var_type) => Err(type_mismatch(variable, var_type, "interval")),
    }
}

// `x != v` is lowered to the open point (v, v), which has no values of its own.
// Intersected with anything it must read as every number except v.
fn widen_not_equal(slot: Slot) -> Slot {
    match slot {
        Slot::Interval(mut constraint) if constraint.expression == Expression::NotEqualTo => {
            let value = constraint.interval.primary().interval.lo;
            constraint.interval = MultiInterval::excluding(value);
            Slot::Interval(constraint)
        }
        other => other,
    }
}

fn type_mismatch(variable: &Variable, var_type: VarType, actual: &str) -> CompileError {
    CompileError::TypeMismatch {
        var_name: variable.var_name.clone(),
        expected: var_type.to_string(),
        actual: actual.to_string(),
    }
}
