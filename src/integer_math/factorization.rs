// src/integer_math/factorization.rs
//
// Trial division with a shrinking limit: every time a factor is divided
// out, the search bound drops to sqrt of the remaining cofactor, so
// numbers with small factors finish in near-linear time instead of
// paying sqrt(n) unconditionally.

use log::trace;
use num::integer::Roots;

use crate::error::MathError;
use crate::integer_math::factor_counts::FactorCounts;

/// Lazy prime-factor sequence over a positive integer.
///
/// Yields prime factors in ascending order with repetition (e.g. 12
/// yields 2, 2, 3). Each instance is independent; nothing is shared
/// between separate factorizations.
#[derive(Debug, Clone)]
pub struct PrimeFactorIter {
    rem: i64,
    actual: i64,
    limit: i64,
}

impl PrimeFactorIter {
    /// Starts a factorization of `n`.
    ///
    /// Returns [`MathError::NonPositive`] for `n < 1`. `n == 1` produces
    /// an empty sequence.
    pub fn new(n: i64) -> Result<Self, MathError> {
        if n < 1 {
            return Err(MathError::NonPositive(n));
        }
        Ok(PrimeFactorIter {
            rem: n,
            actual: 2,
            limit: n.sqrt(),
        })
    }
}

impl Iterator for PrimeFactorIter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        while self.actual <= self.limit {
            if self.rem % self.actual == 0 {
                self.rem /= self.actual;
                self.limit = self.rem.sqrt();
                // Do not advance: the same prime may divide again.
                return Some(self.actual);
            }
            // 2 -> 3, then odd candidates only.
            self.actual += 1 + self.actual % 2;
        }
        if self.rem > 1 {
            let last = self.rem;
            self.rem = 1;
            return Some(last);
        }
        None
    }
}

/// Returns the prime factors of `n` in ascending order with multiplicity.
///
/// # Examples
/// ```
/// use math_utils::integer_math::factorization::prime_factors;
///
/// assert_eq!(prime_factors(12).unwrap(), vec![2, 2, 3]);
/// assert!(prime_factors(1).unwrap().is_empty());
/// ```
pub fn prime_factors(n: i64) -> Result<Vec<i64>, MathError> {
    let factors: Vec<i64> = PrimeFactorIter::new(n)?.collect();
    trace!("prime_factors({}) -> {:?}", n, factors);
    Ok(factors)
}

/// Returns the prime factorization of `n` as a prime -> exponent map.
///
/// # Examples
/// ```
/// use math_utils::integer_math::factorization::prime_factors_counts;
///
/// let counts = prime_factors_counts(360).unwrap();
/// assert_eq!(counts.exponent_of(2), 3);
/// assert_eq!(counts.exponent_of(3), 2);
/// assert_eq!(counts.exponent_of(5), 1);
/// ```
pub fn prime_factors_counts(n: i64) -> Result<FactorCounts, MathError> {
    let mut counts = FactorCounts::new();
    for factor in PrimeFactorIter::new(n)? {
        counts.add(factor);
    }
    Ok(counts)
}
