// src/selftest/mod.rs
//
// Self-test harness: exercises every helper against known values and an
// exhaustive factorization sweep, reporting pass/fail per suite. The
// sweep parallelizes across inputs; each call is independent so this is
// purely a caller-side concern.

use log::{debug, error, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::selftest_config::SelfTestConfig;
use crate::integer_math::factorization::{prime_factors, prime_factors_counts, PrimeFactorIter};
use crate::integer_math::primality::{is_prime, next_prime};
use crate::integer_math::totient::{totient, totient_pairs};
use crate::numeric::approx::{decimal_threshold, eqd, DEFAULT_PRECISION};
use crate::numeric::average::avg;
use crate::numeric::binary::to_bit_string;
use crate::numeric::extrema::max_all;
use crate::numeric::percent::in_perc_range;

const MAX_REPORTED_FAILURES: usize = 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteResult {
    pub name: String,
    pub checked: usize,
    pub failures: Vec<String>,
}

impl SuiteResult {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfTestReport {
    pub suites: Vec<SuiteResult>,
}

impl SelfTestReport {
    pub fn all_passed(&self) -> bool {
        self.suites.iter().all(SuiteResult::passed)
    }

    pub fn save_to_file(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Runs every suite and logs per-suite results.
pub fn run(config: &SelfTestConfig) -> SelfTestReport {
    let suites = vec![
        factorization_suite(config.sweep.factor_max),
        primality_suite(),
        totient_suite(),
        bit_string_suite(config.sweep.bit_string_max),
        average_suite(),
        percent_suite(),
        threshold_suite(),
        approx_equality_suite(),
        extrema_suite(),
    ];

    for suite in &suites {
        if suite.passed() {
            info!("{}: OK ({} checks)", suite.name, suite.checked);
        } else {
            error!(
                "{}: FAILED ({} checks, {} failures shown)",
                suite.name,
                suite.checked,
                suite.failures.len()
            );
            for failure in &suite.failures {
                error!("  {}", failure);
            }
        }
    }

    SelfTestReport { suites }
}

fn suite(name: &str, checked: usize, mut failures: Vec<String>) -> SuiteResult {
    failures.truncate(MAX_REPORTED_FAILURES);
    SuiteResult {
        name: name.to_string(),
        checked,
        failures,
    }
}

/// All three factorization forms must agree with each other and with the
/// input, every emitted factor must be prime, and re-factorizing the
/// reconstructed product must reproduce the counts exactly.
fn check_factorization(n: i64) -> Result<(), String> {
    let listed = prime_factors(n).map_err(|e| format!("prime_factors({}): {}", n, e))?;
    let counts =
        prime_factors_counts(n).map_err(|e| format!("prime_factors_counts({}): {}", n, e))?;
    let lazy: Vec<i64> = PrimeFactorIter::new(n)
        .map_err(|e| format!("PrimeFactorIter::new({}): {}", n, e))?
        .collect();

    if listed != lazy {
        return Err(format!("list and lazy forms disagree for {}", n));
    }
    if listed.iter().product::<i64>() != n {
        return Err(format!("list product != {}", n));
    }
    if counts.product() != n {
        return Err(format!("counts product != {} ({})", n, counts.format_as_factorization()));
    }
    for &f in &listed {
        if !is_prime(f) {
            return Err(format!("non-prime factor {} of {}", f, n));
        }
        // Regression sample: factor + 7 is even (or 9) for this corpus,
        // so it must never test prime.
        if is_prime(f + 7) {
            return Err(format!("is_prime({} + 7) true for factor of {}", f, n));
        }
    }
    let again = prime_factors_counts(counts.product())
        .map_err(|e| format!("round-trip factorization of {}: {}", n, e))?;
    if again != counts {
        return Err(format!("counts round trip mismatch for {}", n));
    }
    Ok(())
}

fn factorization_suite(max: i64) -> SuiteResult {
    debug!("factorization sweep over [2, {}]", max);
    let failures: Vec<String> = (2..max.saturating_add(1))
        .into_par_iter()
        .filter_map(|n| check_factorization(n).err())
        .collect();
    suite("factorization", (max - 1).max(0) as usize, failures)
}

fn primality_suite() -> SuiteResult {
    let mut failures = Vec::new();
    let mut checked = 0;

    for x in [-5, -1, 0, 1] {
        checked += 1;
        if is_prime(x) {
            failures.push(format!("is_prime({}) should be false", x));
        }
    }
    for x in [2, 3, 5, 7, 11, 97, 7919] {
        checked += 1;
        if !is_prime(x) {
            failures.push(format!("is_prime({}) should be true", x));
        }
    }
    for x in (4..1000).step_by(2) {
        checked += 1;
        if is_prime(x) {
            failures.push(format!("is_prime({}) should be false (even)", x));
        }
    }
    for x in [9, 25, 49, 121] {
        checked += 1;
        if is_prime(x) {
            failures.push(format!("is_prime({}) should be false (prime square)", x));
        }
    }
    for (n, expected) in [(2, 3), (7, 11), (100, 101)] {
        checked += 1;
        let got = next_prime(n);
        if got != expected {
            failures.push(format!("next_prime({}) = {}, expected {}", n, got, expected));
        }
    }
    suite("primality", checked, failures)
}

fn totient_suite() -> SuiteResult {
    let mut failures = Vec::new();
    let mut checked = 0;

    for (n, expected) in [(1, 1), (9, 6), (10, 4), (12, 4), (97, 96)] {
        checked += 1;
        match totient(n) {
            Ok(got) if got == expected => {}
            Ok(got) => failures.push(format!("totient({}) = {}, expected {}", n, got, expected)),
            Err(e) => failures.push(format!("totient({}): {}", n, e)),
        }
    }
    for n in [0, -5] {
        checked += 1;
        if totient(n).is_ok() {
            failures.push(format!("totient({}) should be rejected", n));
        }
    }
    for n in 1..=100 {
        checked += 1;
        match (totient(n), totient_pairs(n)) {
            (Ok(count), Ok(pairs)) if pairs.len() as i64 == count => {}
            _ => failures.push(format!("totient/totient_pairs disagree for {}", n)),
        }
    }
    suite("totient", checked, failures)
}

fn bit_string_suite(max: u64) -> SuiteResult {
    let failures: Vec<String> = (0..=max)
        .filter_map(|n| {
            let got = to_bit_string(n);
            let expected = format!("{:b}", n);
            if got == expected {
                None
            } else {
                Some(format!("to_bit_string({}) = {}, expected {}", n, got, expected))
            }
        })
        .collect();
    suite("bit_string", (max + 1) as usize, failures)
}

fn average_suite() -> SuiteResult {
    let mut failures = Vec::new();
    let cases: [(&[f64], f64); 4] = [
        (&[], 0.0),
        (&[0.0], 0.0),
        (&[1.0], 1.0),
        (&[0.0, 10.0], 5.0),
    ];
    for (seq, expected) in cases {
        let got = avg(seq.iter().copied());
        if got != expected {
            failures.push(format!("avg({:?}) = {}, expected {}", seq, got, expected));
        }
    }
    suite("average", cases.len(), failures)
}

fn percent_suite() -> SuiteResult {
    let mut failures = Vec::new();
    let mut checked = 0;

    for i in 0..11 {
        let i = i as f64;
        let cases = [
            (true, 100.0 + i),
            (false, 111.0 + i),
            (true, 90.0 + i),
            (false, 89.0 - i),
        ];
        for (expected, num) in cases {
            checked += 1;
            if in_perc_range(num, 100.0, 10.0) != expected {
                failures.push(format!("in_perc_range({}, 100, 10) != {}", num, expected));
            }
        }
    }
    checked += 2;
    if !in_perc_range(80.0, 100.0, 20.0) {
        failures.push("in_perc_range(80, 100, 20) should be true".to_string());
    }
    if !in_perc_range(40.0, 50.0, 20.0) {
        failures.push("in_perc_range(40, 50, 20) should be true".to_string());
    }
    suite("percent", checked, failures)
}

fn threshold_suite() -> SuiteResult {
    let mut failures = Vec::new();
    let n = 1.00005;
    for precision in 0..5 {
        if !decimal_threshold(n, precision) {
            failures.push(format!("decimal_threshold({}, {}) should be true", n, precision));
        }
    }
    for precision in 5..8 {
        if decimal_threshold(n, precision) {
            failures.push(format!("decimal_threshold({}, {}) should be false", n, precision));
        }
    }
    suite("decimal_threshold", 8, failures)
}

fn approx_equality_suite() -> SuiteResult {
    let mut failures = Vec::new();
    let cases = [
        (false, 22.0, 24.0, 1.0),
        (true, 22.0, 23.0, 1.0),
        (true, 22.0, 23.0, 3.0),
        (false, 22.009, 22.007, 0.001),
        (true, 22.009, 22.007, 0.002),
        (true, 22.009, 22.007, 0.003),
    ];
    for (expected, a, b, delta) in cases {
        match eqd(a, b, delta, DEFAULT_PRECISION) {
            Ok(got) if got == expected => {}
            Ok(_) => failures.push(format!("eqd({}, {}, {}) != {}", a, b, delta, expected)),
            Err(e) => failures.push(format!("eqd({}, {}, {}): {}", a, b, delta, e)),
        }
    }
    if eqd(1.0, 1.0, 0.1, -1).is_ok() {
        failures.push("eqd with negative precision should be rejected".to_string());
    }
    suite("approx_equality", cases.len() + 1, failures)
}

fn extrema_suite() -> SuiteResult {
    let mut failures = Vec::new();
    if !max_all(Vec::<i64>::new()).is_empty() {
        failures.push("max_all of empty input should be empty".to_string());
    }
    if max_all(vec![3, 1, 4, 1, 5]) != vec![5] {
        failures.push("max_all([3,1,4,1,5]) != [5]".to_string());
    }
    if max_all(vec![2, 7, 7, 1]) != vec![7, 7] {
        failures.push("max_all([2,7,7,1]) != [7,7]".to_string());
    }
    suite("extrema", 3, failures)
}
