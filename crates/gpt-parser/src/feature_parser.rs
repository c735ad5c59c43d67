//! Feature parser
//!
//! Entry point of the crate: turns GPT source text into a [`FeatureNode`].

use crate::error::{ParseError, Result};
use crate::grammar::{parse_file, Rule};
use crate::literal::parse_precision;
use crate::statement_parser::build_if_stmt;
use gpt_core::ast::{FeatureNode, VarNode};
use gpt_core::types::VarType;
use pest::iterators::Pair;

/// Feature parser
///
/// Stateless: the grammar is compiled into the type, so a single value can be
/// shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureParser;

impl FeatureParser {
    /// Parse a whole source file into its top-level feature
    ///
    /// Parsing is all-or-nothing: any grammar mismatch fails with
    /// [`ParseError::Syntax`] and no partial tree is returned.
    pub fn parse(source: &str) -> Result<FeatureNode> {
        let pair = parse_file(source)?;
        let feature = build_feature(pair)?;

        log::debug!(
            "Parsed feature: {} variables, {} if-statements, {} nested features",
            feature.variables.len(),
            feature.if_statements.len(),
            feature.features.len()
        );

        Ok(feature)
    }
}

fn build_feature(pair: Pair<'_, Rule>) -> Result<FeatureNode> {
    let mut feature = FeatureNode::new();

    for p in pair.into_inner() {
        match p.as_rule() {
            Rule::var_decl => feature.variables.push(build_var_decl(p)?),
            Rule::if_stmt => feature.if_statements.push(build_if_stmt(p)?),
            Rule::feature => feature.features.push(build_feature(p)?),
            _ => {}
        }
    }

    Ok(feature)
}

fn build_var_decl(pair: Pair<'_, Rule>) -> Result<VarNode> {
    let mut var_name = None;
    let mut var_type = None;

    for p in pair.into_inner() {
        match p.as_rule() {
            Rule::var_name => var_name = Some(p.as_str().to_string()),
            Rule::bool_type => var_type = Some(VarType::Bool),
            Rule::int_type => var_type = Some(VarType::int()),
            Rule::num_type => var_type = Some(VarType::num()),
            Rule::num_with_prec => {
                let precision = p
                    .into_inner()
                    .next()
                    .ok_or_else(|| ParseError::missing("precision"))?;
                var_type = Some(VarType::num_with_precision(parse_precision(&precision)?));
            }
            _ => {}
        }
    }

    Ok(VarNode::new(
        var_name.ok_or_else(|| ParseError::missing("var_name"))?,
        var_type.ok_or_else(|| ParseError::missing("var_type"))?,
    ))
}
