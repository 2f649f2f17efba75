// src/numeric/average.rs

/// Arithmetic mean of `seq`, 0.0 for an empty sequence.
pub fn avg<I>(seq: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut total = 0.0;
    let mut count = 0u64;
    for value in seq {
        total += value;
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}
