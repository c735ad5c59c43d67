//! Common test utilities for SDK integration tests

use gpt_sdk::{GptEngine, Slot, TupleSet};

/// Feature used throughout the documentation
pub const REFERENCE_FEATURE: &str = r#"
[
    var VIP: bool
    var price: num(0.01)
    if (VIP = true && price < 50) {
        if (price = 2) {}
    }
]
"#;

/// Compile with a default engine, panicking on failure
pub fn compile(source: &str) -> TupleSet {
    GptEngine::new()
        .compile(source)
        .unwrap_or_else(|e| panic!("compile failed: {e}\nsource: {source}"))
}

/// Assertions on assembled tuple sets
pub trait TupleSetAssertions {
    fn assert_width(&self, width: usize) -> &Self;
    fn assert_rendered(&self, expected: &[&str]) -> &Self;
    fn slot(&self, tuple: usize, var_name: &str) -> &Slot;
}

impl TupleSetAssertions for TupleSet {
    fn assert_width(&self, width: usize) -> &Self {
        assert_eq!(self.variables.len(), width, "declared variables");
        for (i, tuple) in self.tuples.iter().enumerate() {
            assert_eq!(tuple.len(), width, "width of tuple {}", i);
        }
        self
    }

    fn assert_rendered(&self, expected: &[&str]) -> &Self {
        let rendered: Vec<String> = self.tuples.iter().map(|t| t.to_string()).collect();
        assert_eq!(rendered, expected);
        self
    }

    fn slot(&self, tuple: usize, var_name: &str) -> &Slot {
        let index = self
            .variables
            .iter()
            .position(|v| v.var_name == var_name)
            .unwrap_or_else(|| panic!("undeclared variable {var_name}"));
        &self.tuples[tuple].slots[index]
    }
}
