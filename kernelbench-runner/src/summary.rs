//! Human-readable one-line summaries of kernel results

use kernelbench_core::KernelResult;

const TEXT_PREVIEW_CHARS: usize = 50;

/// Render the kind-specific summary line for `result`
pub fn summarize(result: &KernelResult) -> String {
    match result {
        KernelResult::Primes(primes) => match primes.last() {
            Some(largest) => format!("Found {} primes (largest: {})", primes.len(), largest),
            None => "Found 0 primes".to_string(),
        },
        KernelResult::Matrix { size, values } => {
            let n = *size as usize;
            let trace: f64 = (0..n).filter_map(|i| values.get(i * n + i)).sum();
            format!("Computed {size}x{size} matrix (trace: {trace})")
        }
        KernelResult::Fibonacci(sequence) => match sequence.last() {
            Some(last) => format!(
                "Generated {} Fibonacci numbers (last has {} digits)",
                sequence.len(),
                last.decimal_digits()
            ),
            None => "Generated 0 Fibonacci numbers".to_string(),
        },
        KernelResult::Hash(hash) => format!("Hash: 0x{hash:x}"),
        KernelResult::Pi(estimate) => format!("π ≈ {estimate:.6}"),
        KernelResult::Sort(values) => match (values.first(), values.last()) {
            (Some(min), Some(max)) => {
                format!("Sorted {} numbers (min: {}, max: {})", values.len(), min, max)
            }
            _ => "Sorted 0 numbers".to_string(),
        },
        KernelResult::Text(text) => {
            let preview: String = text.chars().take(TEXT_PREVIEW_CHARS).collect();
            let ellipsis = if text.chars().count() > TEXT_PREVIEW_CHARS {
                "..."
            } else {
                ""
            };
            format!("Processed text: \"{preview}{ellipsis}\"")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernelbench_core::Natural;

    #[test]
    fn test_primes_summary() {
        assert_eq!(
            summarize(&KernelResult::Primes(vec![2, 3, 5, 7])),
            "Found 4 primes (largest: 7)"
        );
        assert_eq!(summarize(&KernelResult::Primes(vec![])), "Found 0 primes");
    }

    #[test]
    fn test_matrix_trace() {
        let result = KernelResult::Matrix {
            size: 2,
            values: vec![0.0, 1.0, 0.0, 2.0],
        };
        assert_eq!(summarize(&result), "Computed 2x2 matrix (trace: 2)");

        let empty = KernelResult::Matrix {
            size: 0,
            values: vec![],
        };
        assert_eq!(summarize(&empty), "Computed 0x0 matrix (trace: 0)");
    }

    #[test]
    fn test_fibonacci_digits() {
        let seq = vec![Natural::zero(), Natural::from(1), Natural::from(144)];
        assert_eq!(
            summarize(&KernelResult::Fibonacci(seq)),
            "Generated 3 Fibonacci numbers (last has 3 digits)"
        );
        assert_eq!(
            summarize(&KernelResult::Fibonacci(vec![])),
            "Generated 0 Fibonacci numbers"
        );
    }

    #[test]
    fn test_scalar_summaries() {
        assert_eq!(summarize(&KernelResult::Hash(0xe1a3_6b17)), "Hash: 0xe1a36b17");
        assert_eq!(summarize(&KernelResult::Hash(0xff)), "Hash: 0xff");
        assert_eq!(summarize(&KernelResult::Pi(3.1416604)), "π ≈ 3.141660");
        assert_eq!(summarize(&KernelResult::Pi(0.0)), "π ≈ 0.000000");
    }

    #[test]
    fn test_sort_summary() {
        assert_eq!(
            summarize(&KernelResult::Sort(vec![0, 4, 9999])),
            "Sorted 3 numbers (min: 0, max: 9999)"
        );
        assert_eq!(summarize(&KernelResult::Sort(vec![])), "Sorted 0 numbers");
    }

    #[test]
    fn test_text_preview() {
        let text = "ab".repeat(40);
        let expected = format!("Processed text: \"{}...\"", &text[..50]);
        assert_eq!(summarize(&KernelResult::Text(text)), expected);
        assert_eq!(summarize(&KernelResult::Text(String::new())), "Processed text: \"\"");
    }

    #[test]
    fn test_short_text_not_elided() {
        let one = "tHE QUICK BROWN FOX JUMPS OVER THE LAZY DOG";
        assert_eq!(
            summarize(&KernelResult::Text(one.to_string())),
            format!("Processed text: \"{one}\"")
        );

        let exact = "x".repeat(50);
        assert_eq!(
            summarize(&KernelResult::Text(exact.clone())),
            format!("Processed text: \"{exact}\"")
        );
    }
}
