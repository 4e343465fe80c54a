//! Absolute error of an estimate.

use crate::defs::PI;

/// Returns the absolute error `|estimate - known|` of `estimate` with respect to the accepted value `known`.
pub fn abs_error_from_known(estimate: f64, known: f64) -> f64 {
    (estimate - known).abs()
}

/// Returns the absolute error of `estimate` with respect to π.
pub fn abs_error(estimate: f64) -> f64 {
    abs_error_from_known(estimate, PI)
}
