// src/integer_math/mod.rs

pub mod factor_counts;
pub mod factorization;
pub mod gcd;
pub mod primality;
pub mod totient;
