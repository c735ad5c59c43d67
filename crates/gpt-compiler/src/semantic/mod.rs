//! Semantic analysis module
//!
//! This module provides the opt-in checks run before lowering.

pub mod analyzer;

pub use analyzer::SemanticAnalyzer;
