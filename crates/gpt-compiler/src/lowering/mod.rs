//! AST to IR lowering
//!
//! This module contains the passes that turn a parsed feature into IR.

pub mod condition_lowering;
pub mod feature_lowering;
pub mod if_lowering;

pub use condition_lowering::{binary_op_to_expression, resolve_bool_condition, ConditionLowering};
pub use feature_lowering::FeatureLowering;
pub use if_lowering::IfLowering;
