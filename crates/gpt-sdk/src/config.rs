//! Configuration types for GptEngine

use crate::error::{Result, SdkError};
use gpt_compiler::CompilerOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main engine configuration
///
/// ```yaml
/// compiler_options:
///   enable_semantic_analysis: true
/// enable_tracing: false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Compiler options
    pub compiler_options: CompilerOptions,

    /// Open a tracing span around every compile
    pub enable_tracing: bool,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load configuration from a YAML file
    ///
    /// Invalid YAML or unknown fields are reported as
    /// [`SdkError::ConfigError`] naming the file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| SdkError::ConfigError(format!("{}: {}", path.display(), e)))
    }

    /// Set compiler options
    pub fn with_compiler_options(mut self, options: CompilerOptions) -> Self {
        self.compiler_options = options;
        self
    }

    /// Enable semantic analysis
    pub fn enable_semantic_analysis(mut self, enable: bool) -> Self {
        self.compiler_options.enable_semantic_analysis = enable;
        self
    }

    /// Enable tracing
    pub fn enable_tracing(mut self, enable: bool) -> Self {
        self.enable_tracing = enable;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_builder() {
        let config = EngineConfig::new()
            .enable_semantic_analysis(true)
            .enable_tracing(true);

        assert!(config.compiler_options.enable_semantic_analysis);
        assert!(config.enable_tracing);
    }

    #[test]
    fn test_engine_config_from_yaml() {
        let config = EngineConfig::from_yaml(
            "compiler_options:\n  enable_semantic_analysis: true\nenable_tracing: true\n",
        )
        .unwrap();

        assert_eq!(
            config,
            EngineConfig::new()
                .enable_semantic_analysis(true)
                .enable_tracing(true)
        );
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = EngineConfig::from_yaml("enable_tracing: true").unwrap();
        assert!(config.enable_tracing);
        assert!(!config.compiler_options.enable_semantic_analysis);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = EngineConfig::from_yaml("enable_metrics: true").unwrap_err();
        assert!(matches!(err, SdkError::YamlError(_)));
    }

    #[test]
    fn test_invalid_file_names_the_path() -> anyhow::Result<()> {
        let path = std::env::temp_dir().join(format!("gpt-engine-{}.yaml", std::process::id()));
        std::fs::write(&path, "enable_tracing: true\nenable_metrics: true\n")?;

        let err = EngineConfig::from_file(&path).unwrap_err();
        std::fs::remove_file(&path)?;

        match err {
            SdkError::ConfigError(message) => {
                assert!(message.contains(&path.display().to_string()));
                assert!(message.contains("enable_metrics"));
            }
            other => panic!("Expected config error, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::from_file("/nonexistent/gpt-engine.yaml").unwrap_err();
        assert!(matches!(err, SdkError::IoError(_)));
    }
}
