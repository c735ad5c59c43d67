//! Basic usage example for gpt-core
//!
//! Run with: cargo run --example basic_usage

use gpt_core::interval::{Interval, IsOpen, MultiInterval};
use gpt_core::ir::{Condition, Predicate, Variable};
use gpt_core::tuple::{BoolConstraint, Constraint, IntervalConstraint, NTuple, Slot};
use gpt_core::{Expression, VarType};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== GPT Core Basic Usage Example ===\n");

    // Example 1: Intervals from relational expressions
    println!("1. Unary intervals for value 50:");
    for expression in [
        Expression::LessThan,
        Expression::LessThanOrEqualTo,
        Expression::GreaterThan,
        Expression::GreaterThanOrEqualTo,
        Expression::EqualTo,
        Expression::NotEqualTo,
    ] {
        let interval = MultiInterval::from_unary_expression(expression, 50.0)?;
        println!("   {:<22} {}", expression.to_string(), interval);
    }
    println!();

    // Example 2: A predicate (VIP == true && price < 50)
    println!("2. Predicate:");
    let predicate = Predicate::new(vec![
        Condition::bool("VIP", true),
        Condition::interval(
            "price",
            Expression::LessThan,
            MultiInterval::from_unary_expression(Expression::LessThan, 50.0)?,
        ),
    ]);
    println!("   {}\n", predicate);

    // Example 3: Tuples aligned to declared variables
    println!("3. Tuples:");
    let variables = [
        Variable::new("VIP", VarType::Bool),
        Variable::new("price", VarType::num()),
        Variable::new("qty", VarType::int()),
    ];
    println!(
        "   variables: {}",
        variables
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let below_fifty = MultiInterval::from_unary_expression(Expression::LessThan, 50.0)?;
    let from_ten = MultiInterval::simple(Interval::above(10.0), IsOpen::new(false, true));

    let first = NTuple::new(vec![
        Slot::Bool(BoolConstraint::new(true)),
        Slot::Interval(IntervalConstraint::new(
            Expression::LessThan,
            below_fifty,
            0.01,
        )),
        Slot::Missing,
    ]);
    let second = NTuple::new(vec![
        Slot::Missing,
        Slot::Interval(IntervalConstraint::new(
            Expression::Interval,
            from_ten,
            0.01,
        )),
        Slot::Missing,
    ]);
    println!("   first:  {}", first);
    println!("   second: {}\n", second);

    // Example 4: Intersecting constraints
    println!("4. Intersection:");
    match first.intersect(&second) {
        Some(overlap) => println!("   overlap: {}", overlap),
        None => println!("   no overlap"),
    }
    println!(
        "   price slots intersect: {}",
        first.slots[1].intersects_with(&second.slots[1])
    );

    Ok(())
}
