// src/error.rs

use thiserror::Error;

/// Errors produced by the integer_math and numeric helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// Factorization and totient are defined for positive integers only.
    #[error("input must be a positive integer, got {0}")]
    NonPositive(i64),

    /// Approximate-equality comparisons require a non-negative decimal precision.
    #[error("precision must be non-negative, got {0}")]
    NegativePrecision(i32),
}
