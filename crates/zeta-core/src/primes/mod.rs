//! Prime-counting comparison kernel: exact counts by trial division against
//! the logarithmic-integral-style estimate `x / ln(x) * (1 + 1 / ln(x))`.

use crate::numerics::relative_error_percent;
use serde::Serialize;

pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }

    let mut divisor = 2u64;
    while divisor.saturating_mul(divisor) <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }

    true
}

/// Exact `pi(x)`, the number of primes up to and including `x`.
pub fn prime_count(x: u64) -> u64 {
    (2..=x).filter(|candidate| is_prime(*candidate)).count() as u64
}

/// Asymptotic estimate of `pi(x)`. Zero below the first prime.
pub fn prime_count_estimate(x: f64) -> f64 {
    if x < 2.0 {
        return 0.0;
    }

    let log_x = x.ln();
    x / log_x * (1.0 + 1.0 / log_x)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrimeCountComparison {
    pub x: u64,
    pub actual: u64,
    pub estimate: f64,
    /// `None` when the exact count is zero and the percentage is undefined.
    pub error_percent: Option<f64>,
}

/// Rows comparing exact and estimated prime counts over an inclusive range.
/// A zero step yields no rows.
pub fn prime_distribution(start: u64, end: u64, step: u64) -> Vec<PrimeCountComparison> {
    if step == 0 {
        return Vec::new();
    }

    let mut rows = Vec::new();
    let mut x = start;
    while x <= end {
        let actual = prime_count(x);
        let estimate = prime_count_estimate(x as f64);
        rows.push(PrimeCountComparison {
            x,
            actual,
            estimate,
            error_percent: relative_error_percent(estimate, actual as f64),
        });

        x = match x.checked_add(step) {
            Some(next) => next,
            None => break,
        };
    }

    rows
}
