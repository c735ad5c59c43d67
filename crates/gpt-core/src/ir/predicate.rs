//! Predicates: conjunctions of canonical conditions

use super::condition::Condition;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One decision path. Conditions are AND-ed, in root-to-leaf order.
///
/// Nested ifs can constrain the same variable again; tuple assembly
/// intersects those conditions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Predicate {
    pub conditions: Vec<Condition>,
}

impl Predicate {
    pub fn new(conditions: Vec<Condition>) -> Self {
        Self { conditions }
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Condition> {
        self.conditions.iter()
    }

    /// Conditions on `var_name`, in path order
    pub fn conditions_on<'a>(&'a self, var_name: &'a str) -> impl Iterator<Item = &'a Condition> {
        self.conditions
            .iter()
            .filter(move |cond| cond.var_name() == var_name)
    }

    /// `self` followed by `other`
    pub fn concat(&self, other: &Predicate) -> Predicate {
        let mut conditions = Vec::with_capacity(self.len() + other.len());
        conditions.extend(self.conditions.iter().cloned());
        conditions.extend(other.conditions.iter().cloned());
        Predicate { conditions }
    }
}

impl FromIterator<Condition> for Predicate {
    fn from_iter<I: IntoIterator<Item = Condition>>(iter: I) -> Self {
        Predicate::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Predicate {
    type Item = &'a Condition;
    type IntoIter = std::slice::Iter<'a, Condition>;

    fn into_iter(self) -> Self::IntoIter {
        self.conditions.iter()
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cond) in self.conditions.iter().enumerate() {
            if i > 0 {
                write!(f, " && ")?;
            }
            write!(f, "{}", cond)?;
        }
        Ok(())
    }
}
