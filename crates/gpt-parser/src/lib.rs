//! GPT Parser - Source text to AST parser for the GPT feature language
//!
//! This crate converts GPT source text into the AST defined in `gpt-core`.
//! The grammar is a pest PEG grammar (`gpt.pest`); builders walk the resulting
//! parse tree and produce AST nodes without normalizing anything.

mod condition_parser;
pub mod error;
mod feature_parser;
mod grammar;
mod literal;
mod statement_parser;

// Re-export main parser types
pub use error::{ParseError, Result};
pub use feature_parser::FeatureParser;
