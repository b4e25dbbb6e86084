//! Errors raised by [`FenwickTree`](crate::FenwickTree) operations.

use core::fmt;
use core::ops::Range;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An index or bound argument fell outside its valid window.
    OutOfRange {
        argument: &'static str,
        value: usize,
        valid: Range<usize>,
    },
    /// `init` was handed a different number of values than the tree holds.
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                argument,
                value,
                valid,
            } if valid.is_empty() => write!(
                f,
                "`{argument}` out of range: {value} given but no value is valid"
            ),
            Self::OutOfRange {
                argument,
                value,
                valid,
            } => write!(
                f,
                "`{argument}` out of range: {value} not in {}..{}",
                valid.start, valid.end
            ),
            Self::LengthMismatch { expected, actual } => write!(
                f,
                "length mismatch: the tree has {expected} frequencies but {actual} were given"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cold]
pub(crate) fn out_of_range(argument: &'static str, value: usize, valid: Range<usize>) -> Error {
    #[cfg(feature = "tracing")]
    tracing::debug!(argument, value, start = valid.start, end = valid.end, "argument out of range");
    Error::OutOfRange {
        argument,
        value,
        valid,
    }
}

#[cold]
pub(crate) fn length_mismatch(expected: usize, actual: usize) -> Error {
    #[cfg(feature = "tracing")]
    tracing::debug!(expected, actual, "frequency length mismatch");
    Error::LengthMismatch { expected, actual }
}
