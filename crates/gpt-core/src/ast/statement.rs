//! If-statement AST nodes
//!
//! `if` bodies hold further `if`s only, so the tree is built bottom-up and never
//! points back at its parent.

use super::condition::ConditionsNode;
use serde::{Deserialize, Serialize};

/// `if (conditions) { body } else if ... else { ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfNode {
    pub conditions: ConditionsNode,
    /// `None` when no braces follow the condition list
    pub body: Option<Vec<IfNode>>,
    pub else_if: Vec<ElseIfNode>,
    pub else_node: Option<ElseNode>,
}

/// `else if (conditions) { body }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElseIfNode {
    pub conditions: ConditionsNode,
    pub body: Option<Vec<IfNode>>,
}

/// `else { body }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElseNode {
    pub body: Vec<IfNode>,
}

impl IfNode {
    /// `if` without body or branches
    pub fn new(conditions: ConditionsNode) -> Self {
        Self {
            conditions,
            body: None,
            else_if: Vec::new(),
            else_node: None,
        }
    }

    /// Set the body
    pub fn with_body(mut self, body: Vec<IfNode>) -> Self {
        self.body = Some(body);
        self
    }

    /// Append an `else if` branch
    pub fn with_else_if(mut self, else_if: ElseIfNode) -> Self {
        self.else_if.push(else_if);
        self
    }

    /// Set the `else` branch
    pub fn with_else(mut self, else_node: ElseNode) -> Self {
        self.else_node = Some(else_node);
        self
    }

    /// True when the node has no nested `if`s (missing or empty braces)
    pub fn is_leaf(&self) -> bool {
        self.body.as_ref().map_or(true, Vec::is_empty)
    }

    /// True when the node carries `else if` or `else` branches
    pub fn has_branches(&self) -> bool {
        !self.else_if.is_empty() || self.else_node.is_some()
    }
}
