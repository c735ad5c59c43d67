//! Literal and operator tokens

use crate::error::{ParseError, Result};
use crate::grammar::Rule;
use gpt_core::ast::{BinaryOp, EqOp};
use pest::iterators::Pair;

/// Parse a `number` token, including `Inf` and `-Inf`
///
/// The minus sign of `-Inf` may be separated from `Inf` by whitespace and
/// comments, which are part of the token text.
pub(crate) fn parse_number(pair: &Pair<'_, Rule>) -> Result<f64> {
    let text = pair.as_str();
    if text.ends_with("Inf") {
        return Ok(if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }
    text.parse::<f64>()
        .map_err(|e| ParseError::invalid("number", format!("'{}': {}", text, e)))
}

/// Parse the precision of a `num(p)` declaration; must be strictly positive
pub(crate) fn parse_precision(pair: &Pair<'_, Rule>) -> Result<f64> {
    let text = pair.as_str();
    let precision = text
        .parse::<f64>()
        .map_err(|e| ParseError::invalid("precision", format!("'{}': {}", text, e)))?;

    if precision > 0.0 {
        Ok(precision)
    } else {
        Err(ParseError::invalid(
            "precision",
            format!("'{}' must be greater than zero", text),
        ))
    }
}

pub(crate) fn parse_bool(pair: &Pair<'_, Rule>) -> bool {
    pair.as_str() == "true"
}

pub(crate) fn parse_eq_op(pair: &Pair<'_, Rule>) -> Result<EqOp> {
    pair.as_str()
        .parse()
        .map_err(|e: String| ParseError::invalid("eq_op", e))
}

pub(crate) fn parse_binary_op(pair: &Pair<'_, Rule>) -> Result<BinaryOp> {
    pair.as_str()
        .parse()
        .map_err(|e: String| ParseError::invalid("binary_op", e))
}
