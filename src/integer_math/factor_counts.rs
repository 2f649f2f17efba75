// src/integer_math/factor_counts.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A prime factorization as a prime -> exponent map.
///
/// Keys are unique and iterate in ascending prime order. The product of
/// `prime^exponent` over all entries reconstructs the factorized integer;
/// an empty map has product 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorCounts(BTreeMap<i64, u32>);

impl FactorCounts {
    pub fn new() -> Self {
        FactorCounts(BTreeMap::new())
    }

    /// Records one occurrence of `factor`.
    pub fn add(&mut self, factor: i64) {
        self.add_count(factor, 1);
    }

    fn add_count(&mut self, factor: i64, count: u32) {
        let entry = self.0.entry(factor).or_insert(0);
        *entry += count;
    }

    /// Merges the occurrences of `other` into `self`.
    pub fn combine(&mut self, other: &FactorCounts) {
        for (&factor, &count) in &other.0 {
            self.add_count(factor, count);
        }
    }

    /// Exponent of `factor`, 0 when absent.
    pub fn exponent_of(&self, factor: i64) -> u32 {
        self.0.get(&factor).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&i64, &u32)> {
        self.0.iter()
    }

    /// Product of `prime^exponent` over all entries.
    pub fn product(&self) -> i64 {
        self.0.iter().map(|(&factor, &exp)| factor.pow(exp)).product()
    }

    pub fn to_map(&self) -> BTreeMap<i64, u32> {
        self.0.clone()
    }

    /// Renders the map as a factorization, e.g. `2^3 * 3^2 * 5^1`.
    pub fn format_as_factorization(&self) -> String {
        let factors: Vec<String> = self
            .0
            .iter()
            .map(|(factor, exp)| format!("{}^{}", factor, exp))
            .collect();
        factors.join(" * ")
    }
}

impl fmt::Display for FactorCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for (factor, exp) in &self.0 {
            writeln!(f, "\t{:5}: {:5}", factor, exp)?;
        }
        write!(f, "}}")
    }
}

impl FromIterator<i64> for FactorCounts {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut counts = FactorCounts::new();
        for factor in iter {
            counts.add(factor);
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_accumulates() {
        let mut counts = FactorCounts::new();
        counts.add(2);
        counts.add(2);
        counts.add(3);
        assert_eq!(counts.exponent_of(2), 2);
        assert_eq!(counts.exponent_of(3), 1);
        assert_eq!(counts.exponent_of(5), 0);
    }

    #[test]
    fn test_product_of_empty_is_one() {
        assert_eq!(FactorCounts::new().product(), 1);
    }

    #[test]
    fn test_combine() {
        let a: FactorCounts = vec![2, 2, 3].into_iter().collect();
        let b: FactorCounts = vec![2, 5].into_iter().collect();
        let mut merged = a.clone();
        merged.combine(&b);
        assert_eq!(merged.exponent_of(2), 3);
        assert_eq!(merged.exponent_of(3), 1);
        assert_eq!(merged.exponent_of(5), 1);
        assert_eq!(merged.product(), 120);
    }

    #[test]
    fn test_format_as_factorization() {
        let counts: FactorCounts = vec![2, 2, 2, 3, 3, 5].into_iter().collect();
        assert_eq!(counts.format_as_factorization(), "2^3 * 3^2 * 5^1");
    }

    #[test]
    fn test_iteration_is_ascending() {
        let counts: FactorCounts = vec![7, 2, 5, 2, 3].into_iter().collect();
        let keys: Vec<i64> = counts.iter().map(|(&k, _)| k).collect();
        assert_eq!(keys, vec![2, 3, 5, 7]);
    }
}
