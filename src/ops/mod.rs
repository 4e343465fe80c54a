//! Numeric operations.

pub mod abs_error;
pub mod series;
