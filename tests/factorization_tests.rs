// tests/factorization_tests.rs

use math_utils::{
    is_prime, prime_factors, prime_factors_counts, FactorCounts, MathError, PrimeFactorIter,
};

#[cfg(test)]
mod factorization_tests {
    use super::*;

    #[test]
    fn test_list_form_known_values() {
        assert_eq!(prime_factors(12).unwrap(), vec![2, 2, 3]);
        assert_eq!(prime_factors(8).unwrap(), vec![2, 2, 2]);
        assert_eq!(prime_factors(360).unwrap(), vec![2, 2, 2, 3, 3, 5]);
        assert_eq!(prime_factors(97).unwrap(), vec![97]);
    }

    #[test]
    fn test_counts_form_known_values() {
        let counts = prime_factors_counts(360).unwrap();
        assert_eq!(counts.exponent_of(2), 3, "360 = 2^3 * 3^2 * 5");
        assert_eq!(counts.exponent_of(3), 2);
        assert_eq!(counts.exponent_of(5), 1);
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn test_lazy_form_of_one_is_empty() {
        let factors: Vec<i64> = PrimeFactorIter::new(1).unwrap().collect();
        assert_eq!(factors, Vec::<i64>::new());
    }

    #[test]
    fn test_empty_factorization_of_one() {
        assert_eq!(prime_factors(1).unwrap(), Vec::<i64>::new());
        assert!(prime_factors_counts(1).unwrap().is_empty());
    }

    #[test]
    fn test_non_positive_inputs_rejected_uniformly() {
        for n in [0, -1, -5] {
            assert_eq!(prime_factors(n), Err(MathError::NonPositive(n)));
            assert_eq!(prime_factors_counts(n), Err(MathError::NonPositive(n)));
            assert!(PrimeFactorIter::new(n).is_err());
        }
    }

    #[test]
    fn test_three_forms_agree_over_range() {
        // Exhaustive product cross-check; the full sweep to 100000 runs in
        // the self-test binary.
        for n in 2..=10_000i64 {
            let listed = prime_factors(n).unwrap();
            let counts = prime_factors_counts(n).unwrap();
            let lazy: Vec<i64> = PrimeFactorIter::new(n).unwrap().collect();

            assert_eq!(listed, lazy, "list/lazy disagree for {}", n);
            assert_eq!(listed.iter().product::<i64>(), n, "list product for {}", n);
            assert_eq!(counts.product(), n, "counts product for {}", n);
        }
    }

    #[test]
    fn test_factors_are_prime_and_ascending() {
        for n in 2..=5_000i64 {
            let factors = prime_factors(n).unwrap();
            for window in factors.windows(2) {
                assert!(window[0] <= window[1], "factors of {} not ascending", n);
            }
            for f in factors {
                assert!(is_prime(f), "factor {} of {} is not prime", f, n);
            }
        }
    }

    #[test]
    fn test_counts_round_trip_is_identity() {
        for n in 2..=5_000i64 {
            let counts = prime_factors_counts(n).unwrap();
            let again = prime_factors_counts(counts.product()).unwrap();
            assert_eq!(counts, again, "round trip mismatch for {}", n);
        }
    }

    #[test]
    fn test_counts_serde_round_trip() {
        let counts = prime_factors_counts(360).unwrap();
        let json = serde_json::to_string(&counts).unwrap();
        let back: FactorCounts = serde_json::from_str(&json).unwrap();
        assert_eq!(counts, back);
    }

    #[test]
    fn test_semiprime_with_large_factors() {
        // 99991 * 99989, both prime; exercises the shrinking limit on a
        // number whose smallest factor is near sqrt(n).
        let n = 99_991i64 * 99_989;
        assert_eq!(prime_factors(n).unwrap(), vec![99_989, 99_991]);
    }
}
