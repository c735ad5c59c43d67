//! Interval algebra
//!
//! Canonical form of "which values satisfy a condition on one variable":
//! - `Interval`: low/high bounds, possibly infinite
//! - `IsOpen`: independent open/closed flag per endpoint
//! - `MultiInterval`: union of `(IsOpen, Interval)` segments

mod bounds;
mod multi_interval;

pub use bounds::{Interval, IsOpen};
pub use multi_interval::{MultiInterval, Segment};
