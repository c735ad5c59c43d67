//! Builder pattern for GptEngine

use crate::config::EngineConfig;
use crate::engine::GptEngine;
use crate::error::Result;
use gpt_compiler::CompilerOptions;
use std::path::Path;

/// Builder for GptEngine
///
/// # Example
///
/// ```rust
/// use gpt_sdk::GptEngineBuilder;
///
/// let engine = GptEngineBuilder::new()
///     .enable_semantic_analysis(true)
///     .build();
///
/// let tuples = engine.compile("[ var x: int if (x > 0) ]").unwrap();
/// assert_eq!(tuples.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GptEngineBuilder {
    config: EngineConfig,
}

impl GptEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a YAML configuration file
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new().with_config(EngineConfig::from_file(path)?))
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set compiler options
    pub fn with_compiler_options(mut self, options: CompilerOptions) -> Self {
        self.config.compiler_options = options;
        self
    }

    /// Enable semantic analysis
    pub fn enable_semantic_analysis(mut self, enable: bool) -> Self {
        self.config = self.config.enable_semantic_analysis(enable);
        self
    }

    /// Enable tracing
    pub fn enable_tracing(mut self, enable: bool) -> Self {
        self.config = self.config.enable_tracing(enable);
        self
    }

    /// Build the engine
    pub fn build(self) -> GptEngine {
        tracing::debug!(
            semantic_analysis = self.config.compiler_options.enable_semantic_analysis,
            tracing = self.config.enable_tracing,
            "Building GPT engine"
        );
        GptEngine::with_config(self.config)
    }
}
