//! Intermediate Representation (IR) for the GPT language
//!
//! The IR drops all surface syntax: no constant positions, no raw operators,
//! only canonical expressions and intervals. It is the target of lowering from
//! the AST and the input of tuple assembly.

pub mod condition;
pub mod predicate;
pub mod program;

pub use condition::{BoolCondition, Condition, IntervalCondition};
pub use predicate::Predicate;
pub use program::{Feature, Variable};
