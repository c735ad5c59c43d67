//! Condition lowering
//!
//! Rewrites surface conditions into canonical IR conditions: variable on the
//! left, one [`Expression`] tag, interval bounds instead of operators.

use crate::error::Result;
use gpt_core::ast::{self, BinaryOp, ConstantPosition, ConditionsNode, EqOp};
use gpt_core::interval::MultiInterval;
use gpt_core::ir::{Condition, Predicate};
use gpt_core::Expression;

/// Condition lowering
pub struct ConditionLowering;

impl ConditionLowering {
    /// Lower an `&&`-joined condition list into one predicate, keeping order
    pub fn lower(conditions: &ConditionsNode) -> Result<Predicate> {
        conditions
            .conditions
            .iter()
            .map(Self::lower_condition)
            .collect()
    }

    /// Lower a single surface condition
    pub fn lower_condition(condition: &ast::Condition) -> Result<Condition> {
        match condition {
            ast::Condition::Bool(cond) => Ok(Condition::bool(
                cond.var_name.clone(),
                resolve_bool_condition(cond.eq_op, cond.bool_val),
            )),
            ast::Condition::Binary(cond) => {
                // The interval table assumes `x <op> constant`.
                let binary_op = match cond.constant_position {
                    ConstantPosition::LeftHandSide => cond.binary_op.flip(),
                    ConstantPosition::RightHandSide => cond.binary_op,
                };
                let expression = binary_op_to_expression(binary_op);
                let interval = MultiInterval::from_unary_expression(expression, cond.constant)?;
                Ok(Condition::interval(cond.var_name.clone(), expression, interval))
            }
            ast::Condition::Interval(cond) => Ok(Condition::interval(
                cond.var_name.clone(),
                Expression::Interval,
                MultiInterval::simple(cond.interval, cond.is_open),
            )),
        }
    }
}

/// Value a boolean variable must take for `var <eq_op> bool_val` to hold
pub fn resolve_bool_condition(eq_op: EqOp, bool_val: bool) -> bool {
    match eq_op {
        EqOp::Equal => bool_val,
        EqOp::NotEqual => !bool_val,
    }
}

/// Expression tag of a relational operator with the variable on the left
pub fn binary_op_to_expression(binary_op: BinaryOp) -> Expression {
    match binary_op {
        BinaryOp::Equal => Expression::EqualTo,
        BinaryOp::NotEqual => Expression::NotEqualTo,
        BinaryOp::LessThanOrEqualTo => Expression::LessThanOrEqualTo,
        BinaryOp::GreaterThanOrEqualTo => Expression::GreaterThanOrEqualTo,
        BinaryOp::LessThan => Expression::LessThan,
        BinaryOp::GreaterThan => Expression::GreaterThan,
    }
}
