// src/numeric/percent.rs

/// `percentage` percent of `value`.
pub fn perc(value: f64, percentage: f64) -> f64 {
    percentage * value / 100.0
}

/// Like [`perc`], with a mapping applied to the result (e.g. `f64::floor`).
pub fn perc_with<F>(value: f64, percentage: f64, map: F) -> f64
where
    F: Fn(f64) -> f64,
{
    map(perc(value, percentage))
}

/// Returns true if `num` lies within ±`percentage` percent of `value`.
pub fn in_perc_range(num: f64, value: f64, percentage: f64) -> bool {
    let x = perc(value, percentage);
    num >= value - x && num <= value + x
}
