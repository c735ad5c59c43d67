//! Feature and variable declaration nodes

use super::statement::IfNode;
use crate::types::VarType;
use serde::{Deserialize, Serialize};

/// `[ ... ]` block. Statements are split by kind, each list keeps source order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureNode {
    pub variables: Vec<VarNode>,
    pub if_statements: Vec<IfNode>,
    pub features: Vec<FeatureNode>,
}

/// `var name: type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarNode {
    pub var_name: String,
    pub var_type: VarType,
}

impl FeatureNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable declaration
    pub fn with_variable(mut self, var_name: impl Into<String>, var_type: VarType) -> Self {
        self.variables.push(VarNode::new(var_name, var_type));
        self
    }

    /// Add a top-level if-statement
    pub fn with_if(mut self, if_node: IfNode) -> Self {
        self.if_statements.push(if_node);
        self
    }

    /// Add a nested feature
    pub fn with_feature(mut self, feature: FeatureNode) -> Self {
        self.features.push(feature);
        self
    }

    /// Find a variable declaration by name
    pub fn variable(&self, var_name: &str) -> Option<&VarNode> {
        self.variables.iter().find(|var| var.var_name == var_name)
    }
}

impl VarNode {
    pub fn new(var_name: impl Into<String>, var_type: VarType) -> Self {
        Self {
            var_name: var_name.into(),
            var_type,
        }
    }
}
