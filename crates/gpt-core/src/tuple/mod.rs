//! Tuples handed to the test value generator
//!
//! - `Slot`: per-variable constraint or the "missing" marker
//! - `NTuple`: one slot per declared variable
//! - `TupleSet`: variables plus one tuple per decision path
//! - `Constraint`: intersection contract the generator relies on

mod constraint;
mod ntuple;
mod slot;

pub use constraint::Constraint;
pub use ntuple::{NTuple, TupleSet};
pub use slot::{BoolConstraint, IntervalConstraint, Slot};
