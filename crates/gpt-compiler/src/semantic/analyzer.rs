//! Semantic analyzer
//!
//! Optional checks run on the AST before lowering. Lowering itself assumes
//! declarations are unique and every referenced variable is declared; the
//! analyzer turns those assumptions into errors.

use crate::error::{CompileError, Result};
use gpt_core::ast::{ConditionsNode, FeatureNode, IfNode};
use std::collections::HashSet;

/// Semantic analyzer
#[derive(Debug, Default)]
pub struct SemanticAnalyzer {
    /// Variables declared by the feature under analysis
    defined_variables: HashSet<String>,
}

impl SemanticAnalyzer {
    /// Create a new semantic analyzer
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyze a feature
    ///
    /// Fails on the first duplicate declaration or undeclared reference, in
    /// source order. Nested features are not descended into.
    pub fn analyze_feature(&mut self, feature: &FeatureNode) -> Result<()> {
        self.defined_variables.clear();

        for var in &feature.variables {
            if !self.defined_variables.insert(var.var_name.clone()) {
                return Err(CompileError::DuplicateVariable(var.var_name.clone()));
            }
        }

        for if_node in &feature.if_statements {
            self.analyze_if(if_node)?;
        }

        Ok(())
    }

    fn analyze_if(&self, if_node: &IfNode) -> Result<()> {
        self.analyze_conditions(&if_node.conditions)?;

        for child in if_node.body.iter().flatten() {
            self.analyze_if(child)?;
        }
        for else_if in &if_node.else_if {
            self.analyze_conditions(&else_if.conditions)?;
            for child in else_if.body.iter().flatten() {
                self.analyze_if(child)?;
            }
        }
        if let Some(else_node) = &if_node.else_node {
            for child in &else_node.body {
                self.analyze_if(child)?;
            }
        }

        Ok(())
    }

    fn analyze_conditions(&self, conditions: &ConditionsNode) -> Result<()> {
        for condition in &conditions.conditions {
            let var_name = condition.var_name();
            if !self.defined_variables.contains(var_name) {
                return Err(CompileError::UndefinedVariable(var_name.to_string()));
            }
        }
        Ok(())
    }

    /// Variables declared by the last analyzed feature
    pub fn defined_variables(&self) -> &HashSet<String> {
        &self.defined_variables
    }
}
