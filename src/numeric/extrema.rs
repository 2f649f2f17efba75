// src/numeric/extrema.rs

/// Returns every maximal element of `items`, in encounter order.
///
/// An empty input produces an empty vec; callers wanting a fallback
/// supply their own (there is no built-in default value).
pub fn max_all<T, I>(items: I) -> Vec<T>
where
    T: PartialOrd,
    I: IntoIterator<Item = T>,
{
    let mut maxima: Vec<T> = Vec::new();
    for item in items {
        if maxima.is_empty() {
            maxima.push(item);
        } else if item > maxima[0] {
            maxima.clear();
            maxima.push(item);
        } else if item == maxima[0] {
            maxima.push(item);
        }
    }
    maxima
}
