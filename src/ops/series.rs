//! Leibniz series.

use itertools::iterate;

/// Returns the first `num_terms` terms of the Leibniz series: `1/1, -1/3, 1/5, -1/7, ...`.
/// The sum of all terms converges to π/4.
///
/// Denominators are generated as floating point numbers, so the iterator can be driven
/// for any number of terms without overflowing.
pub fn leibniz_terms(num_terms: usize) -> impl Iterator<Item = f64> {
    iterate(1.0f64, |d| d + 2.0)
        .zip([1.0f64, -1.0].into_iter().cycle())
        .map(|(d, sign)| sign / d)
        .take(num_terms)
}

/// Computes an estimate of the number π using `num_terms` terms of the Leibniz series.
///
/// The terms are accumulated in order and the sum is multiplied by 4 once at the end.
/// Zero terms produce exactly `0.0`. The error of the estimate decreases roughly as `1/num_terms`.
pub fn pi_leibniz(num_terms: usize) -> f64 {
    let mut acc = 0.0;
    for term in leibniz_terms(num_terms) {
        acc += term;
    }
    4.0 * acc
}
