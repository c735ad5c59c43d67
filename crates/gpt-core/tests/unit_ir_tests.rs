//! Unit tests for IR and tuple types
//!
//! Tests the lowered representation and the tuples built from it

use gpt_core::interval::{Interval, IsOpen, MultiInterval};
use gpt_core::ir::*;
use gpt_core::tuple::{BoolConstraint, Constraint, IntervalConstraint, NTuple, Slot, TupleSet};
use gpt_core::{CoreError, Expression, VarType};

// =============================================================================
// Condition Tests
// =============================================================================

#[test]
fn test_interval_condition_from_unary_expression() -> anyhow::Result<()> {
    let interval = MultiInterval::from_unary_expression(Expression::GreaterThan, 30.0)?;
    let cond = Condition::interval("price", Expression::GreaterThan, interval);

    match &cond {
        Condition::Interval(c) => {
            assert_eq!(c.expression, Expression::GreaterThan);
            assert_eq!(c.interval.primary().interval, Interval::above(30.0));
            assert_eq!(c.interval.primary().is_open, IsOpen::open());
        }
        _ => panic!("Expected Interval condition"),
    }
    assert_eq!(cond.to_string(), "price in (30, Inf)");
    Ok(())
}

#[test]
fn test_invalid_expression_error() {
    let err = MultiInterval::from_unary_expression(Expression::Interval, 1.0).unwrap_err();
    assert_eq!(err, CoreError::InvalidExpression(Expression::Interval));
    assert!(err.to_string().contains("Interval"));
}

// =============================================================================
// Predicate Tests
// =============================================================================

#[test]
fn test_predicate_serializes_as_condition_list() -> anyhow::Result<()> {
    let predicate = Predicate::new(vec![Condition::bool("VIP", true)]);
    let json = serde_json::to_value(&predicate)?;

    assert!(json.is_array());
    assert_eq!(json[0]["type"], "bool");
    assert_eq!(json[0]["should_equal_to"], true);
    assert_eq!(json[0]["expression"], "BoolTrue");
    Ok(())
}

#[test]
fn test_feature_ir_round_trip() -> anyhow::Result<()> {
    let feature = Feature::new(
        vec![Variable::new("VIP", VarType::Bool), Variable::new("price", VarType::num())],
        vec![Predicate::new(vec![
            Condition::bool("VIP", false),
            Condition::interval(
                "price",
                Expression::LessThanOrEqualTo,
                MultiInterval::from_unary_expression(Expression::LessThanOrEqualTo, 99.99)?,
            ),
        ])],
    );

    let json = serde_json::to_string(&feature)?;
    let back: Feature = serde_json::from_str(&json)?;
    assert_eq!(back, feature);
    Ok(())
}

// =============================================================================
// Tuple Tests
// =============================================================================

#[test]
fn test_tuple_set_json_shape() -> anyhow::Result<()> {
    let set = TupleSet::new(
        vec![Variable::new("VIP", VarType::Bool), Variable::new("price", VarType::num())],
        vec![NTuple::new(vec![
            Slot::Bool(BoolConstraint::new(true)),
            Slot::Missing,
        ])],
    );

    let json = serde_json::to_value(&set)?;
    assert_eq!(json["variables"][1]["var_name"], "price");
    assert_eq!(json["tuples"][0][0]["kind"], "bool");
    assert_eq!(json["tuples"][0][1]["kind"], "missing");
    Ok(())
}

#[test]
fn test_interval_slot_carries_precision() {
    let interval = MultiInterval::simple(Interval::new(0.0, 1.0), IsOpen::new(true, false));
    let slot = Slot::Interval(IntervalConstraint::new(
        Expression::Interval,
        interval,
        0.5,
    ));

    let constraint = slot.as_interval().expect("interval slot");
    assert_eq!(constraint.precision, 0.5);
    assert_eq!(slot.expression(), Some(Expression::Interval));
    assert_eq!(slot.to_string(), "(0, 1]");
}
