// src/integer_math/primality.rs

use num::integer::Roots;

/// Returns true if `x` is prime.
///
/// Deterministic trial division: anything below 2 is rejected, even
/// numbers other than 2 are rejected, then odd divisors are tested up to
/// and including the integer square root of `x`. The inclusive bound
/// matters for squares of primes (49 is rejected by its divisor 7, which
/// equals the limit).
pub fn is_prime(x: i64) -> bool {
    if x < 2 || (x != 2 && x % 2 == 0) {
        return false;
    }
    if matches!(x, 2 | 3 | 5 | 7) {
        return true;
    }
    let limit = x.sqrt();
    let mut a = 3;
    while a <= limit {
        if x % a == 0 {
            return false;
        }
        a += 2;
    }
    true
}

/// Yields the primes strictly greater than `n`, in order.
///
/// Only odd candidates above `n` are examined, so the sequence starting
/// below 2 begins at 3.
pub fn primes_from(n: i64) -> impl Iterator<Item = i64> {
    let mut candidate = n + 1;
    if candidate % 2 == 0 {
        candidate += 1;
    }
    std::iter::from_fn(move || loop {
        let current = candidate;
        candidate += 2;
        if is_prime(current) {
            return Some(current);
        }
    })
}

/// Returns the first prime strictly greater than `n`.
pub fn next_prime(n: i64) -> i64 {
    let mut result = n + 1;
    if result % 2 == 0 {
        result += 1;
    }
    while !is_prime(result) {
        result += 2;
    }
    result
}
