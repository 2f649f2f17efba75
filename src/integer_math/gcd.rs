// src/integer_math/gcd.rs

use num::integer;

pub struct Gcd;

impl Gcd {
    pub fn find_lcm(numbers: &[i64]) -> i64 {
        numbers.iter().fold(1, |acc, &x| Self::find_lcm_pair(acc, x))
    }

    pub fn find_lcm_pair(left: i64, right: i64) -> i64 {
        integer::lcm(left.abs(), right.abs())
    }

    pub fn find_gcd(numbers: &[i64]) -> i64 {
        numbers.iter().fold(0, |acc, &x| Self::find_gcd_pair(acc, x))
    }

    pub fn find_gcd_pair(left: i64, right: i64) -> i64 {
        integer::gcd(left, right)
    }

    pub fn are_coprime(numbers: &[i64]) -> bool {
        Self::find_gcd(numbers) == 1
    }
}
