//! Abstract Syntax Tree (AST) definitions for the GPT language
//!
//! This module contains the AST node definitions for:
//! - Features and variable declarations
//! - If-statements with `else if` / `else` branches
//! - Raw conditions (boolean, binary relational, interval membership)
//! - Surface operators

pub mod condition;
pub mod feature;
pub mod operator;
pub mod statement;

pub use condition::{BinaryCondition, BoolCondition, Condition, ConditionsNode, IntervalCondition};
pub use feature::{FeatureNode, VarNode};
pub use operator::{BinaryOp, ConstantPosition, EqOp, IntervalOp};
pub use statement::{ElseIfNode, ElseNode, IfNode};
