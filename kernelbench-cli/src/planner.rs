//! Benchmark Planner
//!
//! Builds the execution plan from the kind filter and variant selection.
//! Kinds keep their canonical order and each kind's variants run back to
//! back, reference first, so both see the same machine state.

use crate::config::VariantSelection;
use kernelbench_core::{BenchmarkKind, Variant};
use regex::Regex;

/// Ordered kernel/variant pairs to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionPlan {
    /// Kinds selected by the filter, canonical order
    pub kinds: Vec<BenchmarkKind>,
    /// Variants to run for each kind
    pub variants: Vec<Variant>,
}

impl ExecutionPlan {
    /// Every pair in execution order
    pub fn pairs(&self) -> impl Iterator<Item = (BenchmarkKind, Variant)> + '_ {
        self.kinds
            .iter()
            .flat_map(move |&kind| self.variants.iter().map(move |&variant| (kind, variant)))
    }

    /// Number of pairs
    pub fn len(&self) -> usize {
        self.kinds.len() * self.variants.len()
    }

    /// No pairs selected
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build the plan; `None` selects every kind
pub fn build_plan(filter: Option<&Regex>, selection: VariantSelection) -> ExecutionPlan {
    let kinds = BenchmarkKind::ALL
        .into_iter()
        .filter(|kind| filter.map_or(true, |re| re.is_match(kind.name())))
        .collect();

    ExecutionPlan {
        kinds,
        variants: selection.variants().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_filter_selects_all() {
        let plan = build_plan(None, VariantSelection::Both);
        assert_eq!(plan.kinds, BenchmarkKind::ALL.to_vec());
        assert_eq!(plan.len(), 14);
    }

    #[test]
    fn test_regex_filter() {
        let re = Regex::new("^(pi|primes)$").unwrap();
        let plan = build_plan(Some(&re), VariantSelection::Both);
        assert_eq!(plan.kinds, vec![BenchmarkKind::Primes, BenchmarkKind::Pi]);

        let re = Regex::new("^zzz").unwrap();
        assert!(build_plan(Some(&re), VariantSelection::Both).is_empty());
    }

    #[test]
    fn test_pairs_reference_first() {
        let re = Regex::new("hash|sort").unwrap();
        let pairs: Vec<_> = build_plan(Some(&re), VariantSelection::Both).pairs().collect();
        assert_eq!(
            pairs,
            vec![
                (BenchmarkKind::Hash, Variant::Reference),
                (BenchmarkKind::Hash, Variant::Accelerated),
                (BenchmarkKind::Sort, Variant::Reference),
                (BenchmarkKind::Sort, Variant::Accelerated),
            ]
        );
    }

    #[test]
    fn test_single_variant() {
        let plan = build_plan(None, VariantSelection::Accelerated);
        assert!(plan.pairs().all(|(_, v)| v == Variant::Accelerated));
        assert_eq!(plan.len(), 7);
    }
}
