//! Crate-wide error type.
//!
//! Every failure in `satchel` is a local validation failure raised
//! synchronously by the call that violates a precondition. Absence is never
//! an error: missing bag items count as zero and unreachable vertex pairs
//! are simply left out of shortest-path results.

use core::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for invalid arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// An edge weight was negative (or NaN).
    NegativeWeight,
    /// A vertex that has no incident edge in the graph was used as a source.
    UnknownVertex,
    /// A requested length does not fit the available input.
    InvalidLength {
        /// The length that was asked for.
        requested: usize,
        /// The number of elements actually available.
        available: usize,
    },
    /// A statistic was requested over an empty sequence.
    EmptyInput,
    /// The input contained NaN or an infinity where finite values are required.
    NonFinite,
}

impl Error {
    /// Returns `true` for every variant: all errors in this crate are
    /// invalid-argument conditions.
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::NegativeWeight
                | Error::UnknownVertex
                | Error::InvalidLength { .. }
                | Error::EmptyInput
                | Error::NonFinite
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NegativeWeight => f.write_str("edge weights must be non-negative"),
            Error::UnknownVertex => f.write_str("source is not a vertex of this graph"),
            Error::InvalidLength {
                requested,
                available,
            } => write!(
                f,
                "invalid length {requested} for an input of {available} elements"
            ),
            Error::EmptyInput => f.write_str("cannot compute a statistic of an empty sequence"),
            Error::NonFinite => f.write_str("input contains NaN or infinite values"),
        }
    }
}

impl std::error::Error for Error {}
