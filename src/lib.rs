//! Estimation of the number π with the Leibniz series.
//!
//! The estimate is the partial sum `4 * (1 - 1/3 + 1/5 - 1/7 + ...)` of the given number of terms.
//! Its absolute error is measured against the reference value [`PI`].
//!
//! ```
//! use leibniz_pi::{pi_leibniz, abs_error, Estimate};
//!
//! let est = pi_leibniz(10);
//! assert!(abs_error(est) < 0.1);
//!
//! let report = Estimate::compute(10);
//! assert_eq!(report.estimate(), est);
//! ```
//!
//! The `serde` feature (enabled by default) implements `Serialize` for [`Estimate`].

#![deny(missing_docs)]
#![deny(clippy::suspicious)]

mod defs;
mod for_3rd;
mod ops;
mod parser;
mod report;

pub use crate::defs::Error;
pub use crate::defs::DEFAULT_NUM_TERMS;
pub use crate::defs::DISPLAY_DIGITS;
pub use crate::defs::PI;
pub use crate::defs::SEPARATOR_WIDTH;
pub use crate::ops::abs_error::abs_error;
pub use crate::ops::abs_error::abs_error_from_known;
pub use crate::ops::series::leibniz_terms;
pub use crate::ops::series::pi_leibniz;
pub use crate::parser::num_terms_or_default;
pub use crate::parser::parse_num_terms;
pub use crate::report::Estimate;
