//! GPT Core - Core types for the GPT feature language
//!
//! This crate provides the types shared by the parser, compiler and SDK:
//! - Variable types and canonical expressions
//! - Interval algebra
//! - AST (Abstract Syntax Tree) definitions
//! - IR (Intermediate Representation) definitions
//! - Tuples and the constraint contract
//! - Error types

pub mod ast;
pub mod error;
pub mod expression;
pub mod interval;
pub mod ir;
pub mod tuple;
pub mod types;

// Re-export commonly used types
pub use error::CoreError;
pub use expression::Expression;
pub use interval::{Interval, IsOpen, MultiInterval};
pub use tuple::{NTuple, Slot, TupleSet};
pub use types::VarType;
