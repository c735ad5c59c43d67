//! Feature lowering
//!
//! Converts a parsed feature into its IR form. Every top-level `if` contributes
//! its own paths; top-level statements are not alternatives of each other.

use super::if_lowering::IfLowering;
use crate::error::{CompileError, Construct, Result};
use gpt_core::ast::{FeatureNode, VarNode};
use gpt_core::ir::{Feature, Variable};

/// Feature lowering
pub struct FeatureLowering;

impl FeatureLowering {
    /// Lower a feature into variables and a flat list of predicates
    pub fn lower(feature: &FeatureNode) -> Result<Feature> {
        if !feature.features.is_empty() {
            return Err(CompileError::UnsupportedConstruct(Construct::NestedFeature));
        }

        let variables = feature.variables.iter().map(convert_variable).collect();

        let mut predicates = Vec::new();
        for if_node in &feature.if_statements {
            predicates.extend(IfLowering::lower(if_node)?);
        }

        log::debug!(
            "Lowered feature: {} variables, {} if-statements, {} predicates",
            feature.variables.len(),
            feature.if_statements.len(),
            predicates.len()
        );

        Ok(Feature::new(variables, predicates))
    }
}

fn convert_variable(var: &VarNode) -> Variable {
    Variable::new(var.var_name.clone(), var.var_type)
}
