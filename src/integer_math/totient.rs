// src/integer_math/totient.rs

use crate::error::MathError;
use crate::integer_math::gcd::Gcd;

/// Euler's totient: the count of integers in [1, n] coprime to `n`.
///
/// Brute-force over the whole range, one gcd per candidate. Fine for the
/// native range this crate targets; the factorization-based product
/// formula is deliberately not used so results stay tied to the
/// definitional contract (phi(1) == 1 included).
pub fn totient(n: i64) -> Result<i64, MathError> {
    if n < 1 {
        return Err(MathError::NonPositive(n));
    }
    Ok((1..=n).filter(|&x| Gcd::find_gcd_pair(x, n) == 1).count() as i64)
}

/// The pairs (x, n) for x in [1, n] with gcd(x, n) == 1.
///
/// `totient_pairs(n)?.len()` equals `totient(n)?`.
pub fn totient_pairs(n: i64) -> Result<Vec<(i64, i64)>, MathError> {
    if n < 1 {
        return Err(MathError::NonPositive(n));
    }
    Ok((1..=n)
        .filter(|&x| Gcd::find_gcd_pair(x, n) == 1)
        .map(|x| (x, n))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totient_known_values() {
        assert_eq!(totient(1).unwrap(), 1);
        assert_eq!(totient(9).unwrap(), 6);
        assert_eq!(totient(10).unwrap(), 4);
        assert_eq!(totient(12).unwrap(), 4);
        // phi(p) == p - 1 for primes
        assert_eq!(totient(97).unwrap(), 96);
    }

    #[test]
    fn test_totient_rejects_non_positive() {
        assert_eq!(totient(0), Err(MathError::NonPositive(0)));
        assert_eq!(totient(-5), Err(MathError::NonPositive(-5)));
        assert!(totient_pairs(0).is_err());
    }

    #[test]
    fn test_totient_pairs_match_count() {
        for n in 1..=50 {
            let pairs = totient_pairs(n).unwrap();
            assert_eq!(pairs.len() as i64, totient(n).unwrap(), "mismatch for {}", n);
            assert!(pairs.iter().all(|&(x, m)| m == n && Gcd::find_gcd_pair(x, n) == 1));
        }
    }

    #[test]
    fn test_totient_pairs_of_9() {
        let pairs = totient_pairs(9).unwrap();
        assert_eq!(pairs, vec![(1, 9), (2, 9), (4, 9), (5, 9), (7, 9), (8, 9)]);
    }
}
