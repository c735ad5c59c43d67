//! Lowered feature
//!
//! The IR form of a feature: its variables with semantic types and the flat
//! list of decision paths.

use super::predicate::Predicate;
use crate::types::VarType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A declared variable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub var_name: String,
    pub var_type: VarType,
}

/// Lowered feature ready for tuple assembly
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Feature {
    /// Declaration order, which is also tuple slot order
    pub variables: Vec<Variable>,
    pub predicates: Vec<Predicate>,
}

impl Variable {
    pub fn new(var_name: impl Into<String>, var_type: VarType) -> Self {
        Self {
            var_name: var_name.into(),
            var_type,
        }
    }
}

impl Feature {
    pub fn new(variables: Vec<Variable>, predicates: Vec<Predicate>) -> Self {
        Self {
            variables,
            predicates,
        }
    }

    pub fn variable(&self, var_name: &str) -> Option<&Variable> {
        self.variables.iter().find(|var| var.var_name == var_name)
    }

    pub fn predicate_count(&self) -> usize {
        self.predicates.len()
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.var_name, self.var_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Condition;

    #[test]
    fn test_variable_lookup() {
        let feature = Feature::new(
            vec![Variable::new("VIP", VarType::Bool), Variable::new("price", VarType::num())],
            vec![Predicate::new(vec![Condition::bool("VIP", true)])],
        );

        assert_eq!(feature.variable("price").map(|v| v.var_type), Some(VarType::num()));
        assert_eq!(feature.predicate_count(), 1);
    }

    #[test]
    fn test_variable_display() {
        assert_eq!(Variable::new("age", VarType::int()).to_string(), "age: num(1)");
    }
}
