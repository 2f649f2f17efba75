// src/numeric/approx.rs

use crate::error::MathError;

/// Default decimal precision for [`eqd`].
pub const DEFAULT_PRECISION: i32 = 4;

/// Returns true if `n` equals its integral part when the fractional part
/// is scaled by `10^precision`, i.e. |frac(n)| < 10^-precision.
pub fn decimal_threshold(n: f64, precision: u32) -> bool {
    let exp = 10f64.powi(precision as i32);
    let n = n.abs();
    (n - n.trunc()) * exp < 1.0
}

/// Approximate equality of `a` and `b` under `delta`, with both sides
/// scaled by `10^precision`.
///
/// Returns [`MathError::NegativePrecision`] for `precision < 0`.
pub fn eqd(a: f64, b: f64, delta: f64, precision: i32) -> Result<bool, MathError> {
    if precision < 0 {
        return Err(MathError::NegativePrecision(precision));
    }
    let exp = 10f64.powi(precision);
    let a = a.abs();
    let b = b.abs();
    Ok(((a - b) * exp).abs() <= (delta * exp).abs())
}
