// src/numeric/binary.rs

/// Bit-string representation of `n`, most significant bit first.
///
/// No leading zeros; `to_bit_string(0)` is `"0"`.
pub fn to_bit_string(n: u64) -> String {
    let mut bits = vec![(n & 1) as u8];
    let mut n = n >> 1;
    while n != 0 {
        bits.push((n & 1) as u8);
        n >>= 1;
    }
    bits.iter().rev().map(|&b| char::from(b'0' + b)).collect()
}
