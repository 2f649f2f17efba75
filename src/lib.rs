// src/lib.rs

pub mod config;
pub mod error;
pub mod integer_math;
pub mod numeric;
pub mod selftest;

pub use error::MathError;
pub use integer_math::factor_counts::FactorCounts;
pub use integer_math::factorization::{prime_factors, prime_factors_counts, PrimeFactorIter};
pub use integer_math::primality::{is_prime, next_prime, primes_from};
pub use integer_math::totient::{totient, totient_pairs};
