//! Multi-segment intervals
//!
//! A `MultiInterval` is a union of segments. Lowering currently only ever
//! produces a single segment; `NotEqualTo` is kept as the open point `(v, v)`
//! rather than `(-Inf, v) (v, Inf)`. The list shape is there so that union can
//! be introduced without touching any consumer.

use super::bounds::{Bound, Interval, IsOpen};
use crate::error::{CoreError, Result};
use crate::expression::Expression;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One `(openness, bounds)` piece of a multi-interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub is_open: IsOpen,
    pub interval: Interval,
}

impl Segment {
    pub fn new(interval: Interval, is_open: IsOpen) -> Self {
        Self { is_open, interval }
    }

    /// True when no real number satisfies the segment
    pub fn is_empty(&self) -> bool {
        let Interval { lo, hi } = self.interval;
        if lo.is_nan() || hi.is_nan() || lo > hi {
            return true;
        }
        lo == hi && (self.is_open.lo || self.is_open.hi)
    }

    pub fn contains(&self, value: f64) -> bool {
        let Interval { lo, hi } = self.interval;
        let above_lo = if self.is_open.lo { value > lo } else { value >= lo };
        let below_hi = if self.is_open.hi { value < hi } else { value <= hi };
        above_lo && below_hi
    }

    /// Overlap of two segments, `None` if they share no value
    pub fn intersect(&self, other: &Segment) -> Option<Segment> {
        let (lo, lo_open) = if self.interval.lo > other.interval.lo {
            (self.interval.lo, self.is_open.lo)
        } else if other.interval.lo > self.interval.lo {
            (other.interval.lo, other.is_open.lo)
        } else {
            (self.interval.lo, self.is_open.lo || other.is_open.lo)
        };

        let (hi, hi_open) = if self.interval.hi < other.interval.hi {
            (self.interval.hi, self.is_open.hi)
        } else if other.interval.hi < self.interval.hi {
            (other.interval.hi, other.is_open.hi)
        } else {
            (self.interval.hi, self.is_open.hi || other.is_open.hi)
        };

        let segment = Segment::new(Interval::new(lo, hi), IsOpen::new(lo_open, hi_open));
        if segment.is_empty() {
            None
        } else {
            Some(segment)
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}, {}{}",
            if self.is_open.lo { '(' } else { '[' },
            Bound(self.interval.lo),
            Bound(self.interval.hi),
            if self.is_open.hi { ')' } else { ']' },
        )
    }
}

/// Union of one or more segments. Never holds an empty segment list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Segment>", into = "Vec<Segment>")]
pub struct MultiInterval {
    segments: Vec<Segment>,
}

impl MultiInterval {
    /// Build a single-segment interval directly from bounds and openness
    pub fn simple(interval: Interval, is_open: IsOpen) -> Self {
        Self {
            segments: vec![Segment::new(interval, is_open)],
        }
    }

    /// Interval of all `x` satisfying `x <expression> value`
    ///
    /// Only the six relational tags are accepted; `Interval`, `BoolTrue` and
    /// `BoolFalse` fail with [`CoreError::InvalidExpression`].
    pub fn from_unary_expression(expression: Expression, value: f64) -> Result<Self> {
        let interval = match expression {
            Expression::LessThan => Self::simple(Interval::below(value), IsOpen::new(true, true)),
            Expression::LessThanOrEqualTo => {
                Self::simple(Interval::below(value), IsOpen::new(true, false))
            }
            Expression::GreaterThan => {
                Self::simple(Interval::above(value), IsOpen::new(true, true))
            }
            Expression::GreaterThanOrEqualTo => {
                Self::simple(Interval::above(value), IsOpen::new(false, true))
            }
            Expression::EqualTo => Self::simple(Interval::point(value), IsOpen::closed()),
            // TODO: return `Self::excluding(value)` once the value generator reads every segment
            Expression::NotEqualTo => Self::simple(Interval::point(value), IsOpen::open()),
            other => return Err(CoreError::InvalidExpression(other)),
        };

        Ok(interval)
    }

    /// Every real number except `value`: `(-Inf, value) (value, Inf)`
    pub fn excluding(value: f64) -> Self {
        Self {
            segments: vec![
                Segment::new(Interval::below(value), IsOpen::open()),
                Segment::new(Interval::above(value), IsOpen::open()),
            ],
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The first segment. Tuple slots only describe this one.
    pub fn primary(&self) -> &Segment {
        &self.segments[0]
    }

    /// True when every segment is empty
    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(Segment::is_empty)
    }

    pub fn contains(&self, value: f64) -> bool {
        self.segments.iter().any(|segment| segment.contains(value))
    }

    pub fn intersects_with(&self, other: &MultiInterval) -> bool {
        self.intersect(other).is_some()
    }

    /// Pairwise overlap of all segments, `None` if nothing overlaps
    pub fn intersect(&self, other: &MultiInterval) -> Option<MultiInterval> {
        let segments: Vec<Segment> = self
            .segments
            .iter()
            .flat_map(|a| other.segments.iter().filter_map(move |b| a.intersect(b)))
            .collect();

        if segments.is_empty() {
            None
        } else {
            Some(Self { segments })
        }
    }
}

impl TryFrom<Vec<Segment>> for MultiInterval {
    type Error = CoreError;

    fn try_from(segments: Vec<Segment>) -> Result<Self> {
        if segments.is_empty() {
            return Err(CoreError::InvalidValue(
                "a multi-interval needs at least one segment".to_string(),
            ));
        }
        Ok(Self { segments })
    }
}

impl From<MultiInterval> for Vec<Segment> {
    fn from(interval: MultiInterval) -> Self {
        interval.segments
    }
}

impl fmt::Display for MultiInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(lo: f64, hi: f64, lo_open: bool, hi_open: bool) -> Segment {
        Segment::new(Interval::new(lo, hi), IsOpen::new(lo_open, hi_open))
    }

    #[test]
    fn test_less_than_is_open_half_line() {
        let interval = MultiInterval::from_unary_expression(Expression::LessThan, 50.0).unwrap();
        assert_eq!(interval.segments().len(), 1);
        assert_eq!(interval.primary().interval, Interval::new(f64::NEG_INFINITY, 50.0));
        assert_eq!(interval.primary().is_open, IsOpen::new(true, true));
        assert_eq!(interval.to_string(), "(-Inf, 50)");
    }

    #[test]
    fn test_relational_table() {
        let cases = [
            (Expression::LessThanOrEqualTo, f64::NEG_INFINITY, 7.0, true, false),
            (Expression::GreaterThan, 7.0, f64::INFINITY, true, true),
            (Expression::GreaterThanOrEqualTo, 7.0, f64::INFINITY, false, true),
            (Expression::EqualTo, 7.0, 7.0, false, false),
            (Expression::NotEqualTo, 7.0, 7.0, true, true),
        ];

        for (expression, lo, hi, lo_open, hi_open) in cases {
            let interval = MultiInterval::from_unary_expression(expression, 7.0).unwrap();
            assert_eq!(
                interval.primary(),
                &segment(lo, hi, lo_open, hi_open),
                "wrong interval for {}",
                expression
            );
        }
    }

    #[test]
    fn test_non_relational_expressions_are_rejected() {
        for expression in [Expression::Interval, Expression::BoolTrue, Expression::BoolFalse] {
            let result = MultiInterval::from_unary_expression(expression, 1.0);
            assert_eq!(result, Err(CoreError::InvalidExpression(expression)));
        }
    }

    #[test]
    fn test_not_equal_is_single_empty_point() {
        let interval = MultiInterval::from_unary_expression(Expression::NotEqualTo, 3.0).unwrap();
        assert_eq!(interval.segments().len(), 1);
        assert!(interval.is_empty());
        assert!(!interval.contains(3.0));
        assert!(!interval.contains(4.0));
    }

    #[test]
    fn test_excluding_is_two_open_half_lines() {
        let interval = MultiInterval::excluding(3.0);
        assert_eq!(interval.to_string(), "(-Inf, 3) (3, Inf)");
        assert!(!interval.contains(3.0));
        assert!(interval.contains(2.5));
        assert!(interval.contains(3.5));

        let capped = MultiInterval::from_unary_expression(Expression::LessThanOrEqualTo, 10.0).unwrap();
        let both = interval.intersect(&capped).unwrap();
        assert_eq!(both.to_string(), "(-Inf, 3) (3, 10]");
    }

    #[test]
    fn test_contains_respects_openness() {
        let interval = MultiInterval::simple(Interval::new(0.0, 10.0), IsOpen::new(false, true));
        assert!(interval.contains(0.0));
        assert!(interval.contains(9.99));
        assert!(!interval.contains(10.0));
        assert_eq!(interval.to_string(), "[0, 10)");
    }

    #[test]
    fn test_segment_intersection_touching_endpoints() {
        let a = segment(0.0, 5.0, false, false);
        let b = segment(5.0, 10.0, false, true);
        assert_eq!(a.intersect(&b), Some(segment(5.0, 5.0, false, false)));

        let open_b = segment(5.0, 10.0, true, true);
        assert_eq!(a.intersect(&open_b), None);
    }

    #[test]
    fn test_segment_intersection_keeps_tighter_bounds() {
        let below = segment(f64::NEG_INFINITY, 50.0, true, true);
        let range = segment(10.0, 100.0, false, false);
        assert_eq!(below.intersect(&range), Some(segment(10.0, 50.0, false, true)));
    }

    #[test]
    fn test_multi_interval_intersection() {
        let a = MultiInterval::from_unary_expression(Expression::GreaterThanOrEqualTo, 1.0).unwrap();
        let b = MultiInterval::from_unary_expression(Expression::LessThan, 3.0).unwrap();
        let both = a.intersect(&b).unwrap();
        assert_eq!(both.to_string(), "[1, 3)");
        assert!(a.intersects_with(&b));

        let c = MultiInterval::from_unary_expression(Expression::GreaterThan, 3.0).unwrap();
        assert!(!b.intersects_with(&c));
    }

    #[test]
    fn test_reversed_bounds_are_empty() {
        let interval = MultiInterval::simple(Interval::new(5.0, 1.0), IsOpen::closed());
        assert!(interval.is_empty());
    }

    #[test]
    fn test_serde_rejects_empty_segment_list() {
        let result: std::result::Result<MultiInterval, _> = serde_json::from_str("[]");
        assert!(result.is_err());
    }

    #[test]
    fn test_serde_round_trip_keeps_infinity() {
        let interval = MultiInterval::from_unary_expression(Expression::GreaterThan, 2.5).unwrap();
        let json = serde_json::to_string(&interval).unwrap();
        let back: MultiInterval = serde_json::from_str(&json).unwrap();
        assert_eq!(back, interval);
    }
}
