//! Definitions.

use core::fmt::Display;

/// Reference value of the number π.
pub const PI: f64 = core::f64::consts::PI;

/// Number of series terms used when the input is not an integer.
pub const DEFAULT_NUM_TERMS: usize = 4;

/// Width of the separator rule printed above the report.
pub const SEPARATOR_WIDTH: usize = 72;

/// Number of digits after the decimal point in the report.
pub const DISPLAY_DIGITS: usize = 16;

/// Possible errors.
#[derive(Debug, Clone)]
pub enum Error {
    /// The input is not an integer literal.
    InvalidTermCount(String),

    /// Reading input or writing output failed.
    Io(std::io::ErrorKind),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidTermCount(s) => write!(f, "invalid term count: {s:?}"),
            Error::Io(kind) => write!(f, "i/o failure: {kind}"),
        }
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidTermCount(l0), Self::InvalidTermCount(r0)) => l0 == r0,
            (Self::Io(l0), Self::Io(r0)) => l0 == r0,
            _ => false,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.kind())
    }
}
