//! Benchmark and Variant Enumerations

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The seven fixed benchmarks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenchmarkKind {
    /// Trial-division prime search
    Primes,
    /// Dense square matrix multiply
    Matrix,
    /// Fibonacci sequence
    Fibonacci,
    /// Multiply/xor-shift hash mixing
    Hash,
    /// Monte Carlo estimate of π
    Pi,
    /// Sort of LCG-generated integers
    Sort,
    /// Repeated case inversion of a fixed phrase
    Text,
}

impl BenchmarkKind {
    /// All kinds in canonical order
    pub const ALL: [BenchmarkKind; 7] = [
        BenchmarkKind::Primes,
        BenchmarkKind::Matrix,
        BenchmarkKind::Fibonacci,
        BenchmarkKind::Hash,
        BenchmarkKind::Pi,
        BenchmarkKind::Sort,
        BenchmarkKind::Text,
    ];

    /// Position in [`BenchmarkKind::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable lowercase identifier
    pub const fn name(self) -> &'static str {
        match self {
            BenchmarkKind::Primes => "primes",
            BenchmarkKind::Matrix => "matrix",
            BenchmarkKind::Fibonacci => "fibonacci",
            BenchmarkKind::Hash => "hash",
            BenchmarkKind::Pi => "pi",
            BenchmarkKind::Sort => "sort",
            BenchmarkKind::Text => "text",
        }
    }

    /// Human-readable title
    pub const fn title(self) -> &'static str {
        match self {
            BenchmarkKind::Primes => "Prime Numbers",
            BenchmarkKind::Matrix => "Matrix Multiplication",
            BenchmarkKind::Fibonacci => "Fibonacci Sequence",
            BenchmarkKind::Hash => "Hash Computation",
            BenchmarkKind::Pi => "Monte Carlo Pi",
            BenchmarkKind::Sort => "Array Sorting",
            BenchmarkKind::Text => "Text Processing",
        }
    }
}

impl fmt::Display for BenchmarkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BenchmarkKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        BenchmarkKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| ParseError::UnknownKind(s.to_string()))
    }
}

/// Implementation strategy for a kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Dynamically-typed host implementation
    Reference,
    /// Native fixed-width implementation, compiled to wasm for the browser
    Accelerated,
}

impl Variant {
    /// Both variants, reference first
    pub const ALL: [Variant; 2] = [Variant::Reference, Variant::Accelerated];

    /// Stable lowercase identifier
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Reference => "reference",
            Variant::Accelerated => "accelerated",
        }
    }

    /// Human-readable title
    pub const fn title(self) -> &'static str {
        match self {
            Variant::Reference => "Reference (scripted)",
            Variant::Accelerated => "Accelerated (compiled)",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reference" | "ref" | "js" => Ok(Variant::Reference),
            "accelerated" | "acc" | "wasm" => Ok(Variant::Accelerated),
            _ => Err(ParseError::UnknownVariant(s.to_string())),
        }
    }
}

/// Errors from parsing kind or variant names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Name is not one of the seven kinds
    #[error("unknown benchmark kind '{0}' (expected primes, matrix, fibonacci, hash, pi, sort or text)")]
    UnknownKind(String),
    /// Name is not a known variant
    #[error("unknown variant '{0}' (expected reference or accelerated)")]
    UnknownVariant(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_in_index_order() {
        for (i, kind) in BenchmarkKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_kind_parse_roundtrip() {
        for kind in BenchmarkKind::ALL {
            assert_eq!(kind.name().parse::<BenchmarkKind>().unwrap(), kind);
        }
        assert_eq!("  PI ".parse::<BenchmarkKind>().unwrap(), BenchmarkKind::Pi);
        assert!(matches!(
            "mandelbrot".parse::<BenchmarkKind>(),
            Err(ParseError::UnknownKind(_))
        ));
    }

    #[test]
    fn test_variant_aliases() {
        assert_eq!("wasm".parse::<Variant>().unwrap(), Variant::Accelerated);
        assert_eq!("JS".parse::<Variant>().unwrap(), Variant::Reference);
        assert!("native".parse::<Variant>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&BenchmarkKind::Fibonacci).unwrap();
        assert_eq!(json, "\"fibonacci\"");
        let variant: Variant = serde_json::from_str("\"accelerated\"").unwrap();
        assert_eq!(variant, Variant::Accelerated);
    }
}
