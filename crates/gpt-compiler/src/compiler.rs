//! Main compiler
//!
//! Provides a unified interface for the AST → IR → tuple pipeline.

use crate::assembly::TupleAssembler;
use crate::error::Result;
use crate::lowering::FeatureLowering;
use crate::semantic::SemanticAnalyzer;
use gpt_core::ast::FeatureNode;
use gpt_core::ir::Feature;
use gpt_core::TupleSet;
use serde::{Deserialize, Serialize};

/// Compiler options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerOptions {
    /// Reject duplicate declarations and undeclared references before lowering
    pub enable_semantic_analysis: bool,
}

impl CompilerOptions {
    pub fn with_semantic_analysis(mut self, enabled: bool) -> Self {
        self.enable_semantic_analysis = enabled;
        self
    }
}

/// The GPT compiler
#[derive(Debug, Default)]
pub struct Compiler {
    /// Compiler options
    options: CompilerOptions,
    /// Semantic analyzer
    semantic_analyzer: SemanticAnalyzer,
}

impl Compiler {
    /// Create a new compiler instance with default options
    pub fn new() -> Self {
        Self::with_options(CompilerOptions::default())
    }

    /// Create a new compiler instance with custom options
    pub fn with_options(options: CompilerOptions) -> Self {
        Self {
            options,
            semantic_analyzer: SemanticAnalyzer::new(),
        }
    }

    /// Lower a feature into IR
    pub fn lower(&mut self, feature: &FeatureNode) -> Result<Feature> {
        // Semantic analysis
        if self.options.enable_semantic_analysis {
            self.semantic_analyzer.analyze_feature(feature)?;
        }

        FeatureLowering::lower(feature)
    }

    /// Assemble the tuple set of a lowered feature
    pub fn assemble(&self, feature: &Feature) -> Result<TupleSet> {
        TupleAssembler::assemble(feature)
    }

    /// Lower and assemble in one step
    pub fn compile_feature(&mut self, feature: &FeatureNode) -> Result<TupleSet> {
        let lowered = self.lower(feature)?;
        self.assemble(&lowered)
    }

    /// Get the compiler options
    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    /// Get a reference to the semantic analyzer
    pub fn semantic_analyzer(&self) -> &SemanticAnalyzer {
        &self.semantic_analyzer
    }
}
