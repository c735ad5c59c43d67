//! GPT SDK
//!
//! High-level API for compiling GPT features into tuple sets.

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;

// Re-export main types
pub use builder::GptEngineBuilder;
pub use config::EngineConfig;
pub use engine::GptEngine;
pub use error::{ErrorKind, Result, SdkError};

// Re-export commonly used types from dependencies
pub use gpt_compiler::CompilerOptions;
pub use gpt_core::ir::{Feature, Variable};
pub use gpt_core::{NTuple, Slot, TupleSet};
