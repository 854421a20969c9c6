//! Errors shared by every union-find variant.

use core::fmt;

/// Structural invariant violations surfaced to the caller.
///
/// Domain-level outcomes, notably
/// [`Verdict::Contradiction`](crate::extended::Verdict), are *not* errors:
/// they are expected results, tallied and returned as values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An element, version, or relation-kind id outside its declared bound.
    ///
    /// Detected before any structural mutation; the rejected operation has
    /// no side effect.
    OutOfRange { index: usize, len: usize },

    /// `undo` was called with an empty journal.
    ///
    /// This signals a caller discipline violation (more pops than pushes),
    /// so it is surfaced immediately rather than silently ignored.
    UndoUnderflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Error::UndoUnderflow => write!(f, "undo called on an empty journal"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
