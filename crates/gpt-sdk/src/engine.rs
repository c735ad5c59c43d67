//! GptEngine - text to tuples in one call

use crate::config::EngineConfig;
use crate::error::Result;
use gpt_compiler::Compiler;
use gpt_core::ast::FeatureNode;
use gpt_core::ir::Feature;
use gpt_core::TupleSet;
use gpt_parser::FeatureParser;
use tracing::Span;

/// GPT engine
///
/// Holds only configuration. Every call builds a fresh compiler, so one engine
/// can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct GptEngine {
    config: EngineConfig,
}

impl GptEngine {
    /// Create an engine with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with the given configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Get the engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Parse source text into an AST
    pub fn parse(&self, source: &str) -> Result<FeatureNode> {
        let _enter = self.span("parse").entered();
        Ok(FeatureParser::parse(source)?)
    }

    /// Parse and lower source text into IR
    pub fn lower(&self, source: &str) -> Result<Feature> {
        let _enter = self.span("lower").entered();

        let ast = FeatureParser::parse(source)?;
        let feature = self.compiler().lower(&ast)?;

        tracing::debug!(
            variables = feature.variables.len(),
            predicates = feature.predicates.len(),
            "Lowered feature"
        );
        Ok(feature)
    }

    /// Run the whole pipeline: parse, lower and assemble
    pub fn compile(&self, source: &str) -> Result<TupleSet> {
        let _enter = self.span("compile").entered();

        let ast = FeatureParser::parse(source)?;
        let mut compiler = self.compiler();
        let feature = compiler.lower(&ast)?;
        let tuple_set = compiler.assemble(&feature)?;

        tracing::info!(
            variables = tuple_set.variables.len(),
            tuples = tuple_set.tuples.len(),
            "Compiled feature"
        );
        Ok(tuple_set)
    }

    /// Compile and serialize the tuple set as JSON for an external generator
    pub fn compile_to_json(&self, source: &str) -> Result<String> {
        let tuple_set = self.compile(source)?;
        Ok(serde_json::to_string(&tuple_set)?)
    }

    fn compiler(&self) -> Compiler {
        Compiler::with_options(self.config.compiler_options.clone())
    }

    fn span(&self, stage: &'static str) -> Span {
        if self.config.enable_tracing {
            tracing::debug_span!("gpt_engine", stage)
        } else {
            Span::none()
        }
    }
}
