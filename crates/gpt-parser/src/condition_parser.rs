//! Condition builders
//!
//! Conditions are kept in their surface form: operand order is recorded as a
//! constant position and nothing is normalized here.

use crate::error::{ParseError, Result};
use crate::grammar::Rule;
use crate::literal::{parse_binary_op, parse_bool, parse_eq_op, parse_number};
use gpt_core::ast::{Condition, ConditionsNode};
use gpt_core::interval::{Interval, IsOpen};
use pest::iterators::Pair;

/// Build the `&&`-joined condition list of an `if` or `else if`
pub(crate) fn build_conditions(pair: Pair<'_, Rule>) -> Result<ConditionsNode> {
    let conditions = pair
        .into_inner()
        .map(build_condition)
        .collect::<Result<Vec<_>>>()?;

    if conditions.is_empty() {
        return Err(ParseError::missing("condition"));
    }
    Ok(ConditionsNode::new(conditions))
}

fn build_condition(pair: Pair<'_, Rule>) -> Result<Condition> {
    let rule = pair.as_rule();
    let mut var_name = None;
    let mut bool_val = None;
    let mut eq_op = None;
    let mut binary_op = None;
    let mut constant = None;
    let mut interval = None;

    for p in pair.into_inner() {
        match p.as_rule() {
            Rule::var_name => var_name = Some(p.as_str().to_string()),
            Rule::bool_lit => bool_val = Some(parse_bool(&p)),
            Rule::eq_op => eq_op = Some(parse_eq_op(&p)?),
            Rule::binary_op => binary_op = Some(parse_binary_op(&p)?),
            Rule::number => constant = Some(parse_number(&p)?),
            Rule::interval_lit => interval = Some(build_interval(p)?),
            _ => {}
        }
    }

    let var_name = var_name.ok_or_else(|| ParseError::missing("var_name"))?;

    match rule {
        Rule::bool_lhs | Rule::bool_rhs => Ok(Condition::bool(
            var_name,
            eq_op.ok_or_else(|| ParseError::missing("eq_op"))?,
            bool_val.ok_or_else(|| ParseError::missing("bool_lit"))?,
        )),
        Rule::binary_lhs => Ok(Condition::binary_lhs(
            constant.ok_or_else(|| ParseError::missing("number"))?,
            binary_op.ok_or_else(|| ParseError::missing("binary_op"))?,
            var_name,
        )),
        Rule::binary_rhs => Ok(Condition::binary(
            var_name,
            binary_op.ok_or_else(|| ParseError::missing("binary_op"))?,
            constant.ok_or_else(|| ParseError::missing("number"))?,
        )),
        Rule::interval_cond => {
            let (interval, is_open) = interval.ok_or_else(|| ParseError::missing("interval_lit"))?;
            Ok(Condition::interval(var_name, interval, is_open))
        }
        other => Err(ParseError::invalid(
            "condition",
            format!("unexpected node {:?}", other),
        )),
    }
}

/// `(lo, hi]`-style literal; each bracket sets the openness of its own end
fn build_interval(pair: Pair<'_, Rule>) -> Result<(Interval, IsOpen)> {
    let mut lo_open = None;
    let mut hi_open = None;
    let mut bounds = Vec::with_capacity(2);

    for p in pair.into_inner() {
        match p.as_rule() {
            Rule::lower_bracket => lo_open = Some(p.as_str() == "("),
            Rule::upper_bracket => hi_open = Some(p.as_str() == ")"),
            Rule::number => bounds.push(parse_number(&p)?),
            _ => {}
        }
    }

    let (lo, hi) = match bounds.as_slice() {
        [lo, hi] => (*lo, *hi),
        _ => return Err(ParseError::missing("interval bound")),
    };
    let is_open = IsOpen::new(
        lo_open.ok_or_else(|| ParseError::missing("lower_bracket"))?,
        hi_open.ok_or_else(|| ParseError::missing("upper_bracket"))?,
    );

    Ok((Interval::new(lo, hi), is_open))
}
