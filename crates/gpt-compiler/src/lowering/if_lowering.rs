//! If-statement lowering
//!
//! Flattens a tree of nested `if`s into one predicate per root-to-leaf path.

use super::condition_lowering::ConditionLowering;
use crate::error::{CompileError, Construct, Result};
use gpt_core::ast::IfNode;
use gpt_core::ir::Predicate;

/// If-statement lowering
pub struct IfLowering;

impl IfLowering {
    /// Lower an `if` and everything nested in it
    ///
    /// A leaf yields its own conditions as a single predicate. A node with a
    /// body yields, for every predicate of every child, its own conditions
    /// followed by the child's.
    pub fn lower(if_node: &IfNode) -> Result<Vec<Predicate>> {
        if !if_node.else_if.is_empty() {
            return Err(CompileError::UnsupportedConstruct(Construct::ElseIf));
        }
        if if_node.else_node.is_some() {
            return Err(CompileError::UnsupportedConstruct(Construct::Else));
        }

        let own = ConditionLowering::lower(&if_node.conditions)?;

        let body = match &if_node.body {
            Some(body) if !body.is_empty() => body,
            _ => return Ok(vec![own]),
        };

        let mut predicates = Vec::new();
        for child in body {
            for path in Self::lower(child)? {
                predicates.push(own.concat(&path));
            }
        }

        log::trace!(
            "Flattened if with {} conditions into {} paths",
            own.len(),
            predicates.len()
        );

        Ok(predicates)
    }
}
