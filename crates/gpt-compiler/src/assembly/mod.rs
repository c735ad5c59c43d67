//! IR to tuple assembly

pub mod tuple_assembly;

pub use tuple_assembly::TupleAssembler;
