//! Interval bounds and per-endpoint openness

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed-form bounds of a real interval, either end may be infinite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    #[serde(with = "bound")]
    pub lo: f64,
    #[serde(with = "bound")]
    pub hi: f64,
}

/// Whether each endpoint is excluded from the interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IsOpen {
    pub lo: bool,
    pub hi: bool,
}

impl Interval {
    /// Create an interval. Bounds are not reordered; `lo > hi` denotes the empty set.
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Single point interval `[value, value]` bounds
    pub fn point(value: f64) -> Self {
        Self::new(value, value)
    }

    /// `(-Inf, hi)` bounds
    pub fn below(hi: f64) -> Self {
        Self::new(f64::NEG_INFINITY, hi)
    }

    /// `(lo, Inf)` bounds
    pub fn above(lo: f64) -> Self {
        Self::new(lo, f64::INFINITY)
    }

    /// `(-Inf, Inf)` bounds
    pub fn whole() -> Self {
        Self::new(f64::NEG_INFINITY, f64::INFINITY)
    }

    pub fn is_point(&self) -> bool {
        self.lo == self.hi
    }
}

impl IsOpen {
    pub fn new(lo: bool, hi: bool) -> Self {
        Self { lo, hi }
    }

    /// Both endpoints included
    pub fn closed() -> Self {
        Self::new(false, false)
    }

    /// Both endpoints excluded
    pub fn open() -> Self {
        Self::new(true, true)
    }
}

/// Formats a bound the way the language writes it (`Inf`, `-Inf`, `2.5`)
pub(crate) struct Bound(pub f64);

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == f64::INFINITY {
            write!(f, "Inf")
        } else if self.0 == f64::NEG_INFINITY {
            write!(f, "-Inf")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// JSON has no infinity, so infinite bounds travel as `"Inf"` / `"-Inf"`.
mod bound {
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Finite(f64),
        Named(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        let repr = if value.is_finite() {
            Repr::Finite(*value)
        } else if value.is_nan() {
            Repr::Named("NaN".to_string())
        } else if *value > 0.0 {
            Repr::Named("Inf".to_string())
        } else {
            Repr::Named("-Inf".to_string())
        };
        repr.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Finite(value) => Ok(value),
            Repr::Named(name) => match name.as_str() {
                "Inf" => Ok(f64::INFINITY),
                "-Inf" => Ok(f64::NEG_INFINITY),
                "NaN" => Ok(f64::NAN),
                other => Err(de::Error::custom(format!("invalid interval bound: {}", other))),
            },
        }
    }
}
