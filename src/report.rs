//! Estimate of π together with its absolute error.

use core::fmt::Display;

use crate::defs::DISPLAY_DIGITS;
use crate::defs::PI;
use crate::defs::SEPARATOR_WIDTH;
use crate::ops::abs_error::abs_error_from_known;
use crate::ops::series::pi_leibniz;
use tracing::debug;

/// Result of estimating π with a given number of series terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    num_terms: usize,
    estimate: f64,
    known: f64,
    abs_error: f64,
}

impl Estimate {
    /// Estimates π using `num_terms` terms of the Leibniz series and compares the estimate with π.
    pub fn compute(num_terms: usize) -> Self {
        Self::with_known(num_terms, PI)
    }

    /// Estimates π using `num_terms` terms of the Leibniz series and compares the estimate with `known`.
    pub fn with_known(num_terms: usize, known: f64) -> Self {
        let estimate = pi_leibniz(num_terms);
        let abs_error = abs_error_from_known(estimate, known);
        debug!(num_terms, estimate, abs_error, "estimated pi");
        Estimate {
            num_terms,
            estimate,
            known,
            abs_error,
        }
    }

    /// Returns the number of series terms used.
    pub fn num_terms(&self) -> usize {
        self.num_terms
    }

    /// Returns the estimated value.
    pub fn estimate(&self) -> f64 {
        self.estimate
    }

    /// Returns the value the estimate was compared with.
    pub fn known(&self) -> f64 {
        self.known
    }

    /// Returns the absolute error of the estimate.
    pub fn abs_error(&self) -> f64 {
        self.abs_error
    }
}

/// A separator rule followed by the estimate, the known value, and the absolute error, one per line.
impl Display for Estimate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        writeln!(f, "Estimated: {:.*}", DISPLAY_DIGITS, self.estimate)?;
        writeln!(f, "Known    : {:.*}", DISPLAY_DIGITS, self.known)?;
        writeln!(f, "Abs Error: {:.*}", DISPLAY_DIGITS, self.abs_error)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_estimate() {
        let e = Estimate::compute(10);
        assert_eq!(e.num_terms(), 10);
        assert_eq!(e.estimate(), pi_leibniz(10));
        assert_eq!(e.known(), PI);
        assert_eq!(e.abs_error(), (pi_leibniz(10) - PI).abs());

        let e = Estimate::with_known(1, 3.0);
        assert_eq!(e.estimate(), 4.0);
        assert_eq!(e.abs_error(), 1.0);

        let e = Estimate::compute(0);
        assert_eq!(e.estimate(), 0.0);
        assert_eq!(e.abs_error(), PI);
    }

    #[test]
    fn test_display() {
        let s = Estimate::compute(10).to_string();
        let expected = format!(
            "{}\n\
            Estimated: 3.0418396189294032\n\
            Known    : 3.1415926535897931\n\
            Abs Error: 0.0997530346603899\n",
            "-".repeat(72)
        );
        assert_eq!(s, expected);

        let s = Estimate::compute(4).to_string();
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "Estimated: 2.8952380952380956");
        assert_eq!(lines[3], "Abs Error: 0.2463545583516975");

        let s = Estimate::compute(1).to_string();
        assert!(s.contains("Estimated: 4.0000000000000000\n"));
    }
}
