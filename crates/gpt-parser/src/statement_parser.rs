//! If-statement builders

use crate::condition_parser::build_conditions;
use crate::error::{ParseError, Result};
use crate::grammar::Rule;
use gpt_core::ast::{ElseIfNode, ElseNode, IfNode};
use pest::iterators::Pair;

/// Build an `if` with its optional body and any `else if` / `else` branches
pub(crate) fn build_if_stmt(pair: Pair<'_, Rule>) -> Result<IfNode> {
    let mut conditions = None;
    let mut body = None;
    let mut else_if = Vec::new();
    let mut else_node = None;

    for p in pair.into_inner() {
        match p.as_rule() {
            Rule::conditions => conditions = Some(build_conditions(p)?),
            Rule::if_body => body = Some(build_body(p)?),
            Rule::else_if => else_if.push(build_else_if(p)?),
            Rule::else_clause => else_node = Some(build_else(p)?),
            _ => {}
        }
    }

    Ok(IfNode {
        conditions: conditions.ok_or_else(|| ParseError::missing("conditions"))?,
        body,
        else_if,
        else_node,
    })
}

fn build_body(pair: Pair<'_, Rule>) -> Result<Vec<IfNode>> {
    pair.into_inner()
        .filter(|p| p.as_rule() == Rule::if_stmt)
        .map(build_if_stmt)
        .collect()
}

fn build_else_if(pair: Pair<'_, Rule>) -> Result<ElseIfNode> {
    let mut conditions = None;
    let mut body = None;

    for p in pair.into_inner() {
        match p.as_rule() {
            Rule::conditions => conditions = Some(build_conditions(p)?),
            Rule::if_body => body = Some(build_body(p)?),
            _ => {}
        }
    }

    Ok(ElseIfNode {
        conditions: conditions.ok_or_else(|| ParseError::missing("conditions"))?,
        body,
    })
}

fn build_else(pair: Pair<'_, Rule>) -> Result<ElseNode> {
    Ok(ElseNode {
        body: build_body(pair)?,
    })
}
