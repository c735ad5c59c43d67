//! GPT Compiler - AST to IR to tuple compiler
//!
//! This crate lowers a parsed GPT feature into IR (one predicate per decision
//! path) and assembles the fixed-width tuples handed to value generation.

pub mod assembly;
pub mod compiler;
pub mod error;
pub mod lowering;
pub mod semantic;

// Re-export main types
pub use compiler::{Compiler, CompilerOptions};
pub use error::{CompileError, Construct, Result};

pub use assembly::TupleAssembler;
pub use lowering::{ConditionLowering, FeatureLowering, IfLowering};
pub use semantic::SemanticAnalyzer;
