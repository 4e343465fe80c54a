//! This test suite compares the Leibniz estimate with an independently computed partial sum.

use leibniz_pi::{abs_error, abs_error_from_known, pi_leibniz, Estimate, PI};
use rand::random;

/// Odd numbers 1, 3, 5, 7, ... for the given number of terms.
fn odd_range(num_terms: usize) -> impl Iterator<Item = u64> {
    (0..num_terms as u64).map(|i| 2 * i + 1)
}

fn reciprocals(terms: impl Iterator<Item = u64>) -> impl Iterator<Item = f64> {
    terms.map(|t| 1.0 / t as f64)
}

/// Flips the sign from one term to the next, starting with `+`.
fn alternate_term_signs(terms: impl Iterator<Item = f64>) -> impl Iterator<Item = f64> {
    let mut sign = -1.0;
    terms.map(move |t| {
        sign = -sign;
        sign * t
    })
}

fn expected_pi(num_terms: usize) -> f64 {
    4.0 * alternate_term_signs(reciprocals(odd_range(num_terms))).sum::<f64>()
}

fn assert_close(a: f64, b: f64, eps: f64) {
    assert!((a - b).abs() <= eps, "{a} is not within {eps} of {b}");
}

#[test]
fn pi_leibniz_1_to_9_terms() {
    for n in 1..10 {
        assert_close(pi_leibniz(n), expected_pi(n), 1e-16);
    }
}

#[test]
fn pi_leibniz_10_100_10000_terms() {
    let terms_10 = pi_leibniz(10);
    let terms_100 = pi_leibniz(100);
    let terms_10_000 = pi_leibniz(10_000);

    assert!((terms_10 - terms_100).abs() > 1e-4);
    assert!((terms_10 - terms_10_000).abs() > 1e-4);
    assert!((terms_100 - terms_10_000).abs() > 1e-8);

    assert_close(terms_10, expected_pi(10), 1e-16);
    assert_close(terms_100, expected_pi(100), 1e-16);
    assert_close(terms_10_000, expected_pi(10_000), 1e-16);

    assert!(abs_error(terms_10_000) < abs_error(terms_10));
}

#[test]
fn pi_leibniz_scenario() {
    assert!(pi_leibniz(0) == 0.0);
    assert!(pi_leibniz(1) == 4.0);
    assert_close(pi_leibniz(2), 2.666666666666667, 1e-15);
    assert_close(pi_leibniz(10), 3.0418396189, 1e-10);
}

#[test]
#[allow(clippy::approx_constant)]
fn abs_error_from_known_table() {
    let cases = [(0.0, 0.0), (1.0, 1.0), (2.0, 4.61), (3.14, PI), (100.0, 100.001)];
    for (computed, known) in cases {
        assert_close(abs_error_from_known(computed, known), (computed - known).abs(), 1e-6);
    }
    assert_close(abs_error_from_known(3.14, PI), 0.0015926535, 1e-6);
}

#[test]
fn abs_error_of_equal_values() {
    for _ in 0..10000 {
        let i: i8 = random::<i8>() % 10i8;
        let mut x: f64 = random::<f64>().powf(i as f64);
        if i & 1 == 0 {
            x = -x;
        }
        if !x.is_finite() {
            continue;
        }
        assert!(abs_error_from_known(x, x) == 0.0);
    }
}

#[test]
fn estimate_report() {
    for n in [0, 1, 2, 10, 1000] {
        let r = Estimate::compute(n);
        assert_eq!(r.estimate(), pi_leibniz(n));
        assert_eq!(r.abs_error(), abs_error(pi_leibniz(n)));

        let text = r.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].len() == 72 && lines[0].chars().all(|c| c == '-'));
        assert!(lines[1].starts_with("Estimated: "));
        assert_eq!(lines[2], "Known    : 3.1415926535897931");
        assert!(lines[3].starts_with("Abs Error: "));
        for l in &lines[1..] {
            let (_, frac) = l.split_once('.').unwrap();
            assert_eq!(frac.len(), 16);
        }
    }
}
