//! Feature compilation demo
//!
//! This demo shows:
//! - Loading engine configuration from YAML
//! - Compiling a feature file into tuples
//! - Emitting the tuple set as JSON
//!
//! Run with: cargo run --bin compile_feature [-- path/to/feature.gpt]
//! Set RUST_LOG=debug to see the pipeline spans.

use gpt_sdk::{GptEngineBuilder, SdkError};
use tracing_subscriber::EnvFilter;

const DEFAULT_FEATURE: &str = "demos/features/pricing.gpt";
const CONFIG_FILE: &str = "demos/engine.yaml";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Compile Feature Demo ===\n");

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_FEATURE.to_string());
    let source = std::fs::read_to_string(&path)?;

    let engine = GptEngineBuilder::from_config_file(CONFIG_FILE)?.build();
    println!("Engine configuration: {:?}\n", engine.config());

    let tuple_set = match engine.compile(&source) {
        Ok(tuple_set) => tuple_set,
        Err(e) => {
            report(&path, &e);
            return Err(e.into());
        }
    };

    println!("Variables:");
    for variable in &tuple_set.variables {
        println!("  {}", variable);
    }

    println!("\nTuples ({}):", tuple_set.len());
    for (i, tuple) in tuple_set.tuples.iter().enumerate() {
        println!("  #{} {}", i, tuple);
    }

    println!("\nJSON:");
    println!("{}", serde_json::to_string_pretty(&tuple_set)?);

    Ok(())
}

fn report(path: &str, error: &SdkError) {
    eprintln!("Failed to compile {} ({:?}):", path, error.kind());
    eprintln!("{}", error);
}
