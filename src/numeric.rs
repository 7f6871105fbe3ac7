//! Tolerant floating point comparisons
//!
//! All threshold tests on copy number and allele frequency values go through these helpers so that
//! values which are equal up to accumulated rounding error compare as equal.
//!

use approx::abs_diff_eq;

/// Absolute tolerance used for all threshold comparisons
pub const EPSILON: f64 = 1e-10;

pub fn approx_eq(a: f64, b: f64) -> bool {
    abs_diff_eq!(a, b, epsilon = EPSILON)
}

/// True if a is below b by more than the tolerance
pub fn less_than(a: f64, b: f64) -> bool {
    a < b && !approx_eq(a, b)
}

pub fn less_or_equal(a: f64, b: f64) -> bool {
    a < b || approx_eq(a, b)
}

pub fn greater_or_equal(a: f64, b: f64) -> bool {
    a > b || approx_eq(a, b)
}

/// Unweighted arithmetic mean of the current mean over `count` values and one more value
pub fn extend_unweighted_mean(mean: f64, count: usize, value: f64) -> f64 {
    (mean * count as f64 + value) / (count + 1) as f64
}
