use crate::data::err::GetCode;
use std::{collections::TryReserveError, error::Error, fmt};

/// An enum representing errors that can happen when building a query profile
/// or aligning against it.
#[derive(Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AlignmentError {
    /// A profile was requested for an empty query
    EmptyQuery,
    /// A sequence contained a value outside of the alphabet
    InvalidSymbol { symbol: u8, position: usize },
    /// The gap extension penalty was greater than the gap open penalty
    BadGapWeights { gap_open: u8, gap_extend: u8 },
    /// A profile or working buffer could not be allocated
    AllocationFailed(TryReserveError),
    /// The reverse pass did not reproduce the score of the forward pass, so
    /// the start of the alignment could not be located
    BeginNotFound { forward: u16, reverse: u16 },
}

impl fmt::Display for AlignmentError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AlignmentError::EmptyQuery => write!(f, "The alignment query was empty"),
            AlignmentError::InvalidSymbol { symbol, position } => {
                write!(f, "The symbol {symbol} at position {position} is not part of the alphabet")
            }
            AlignmentError::BadGapWeights { gap_open, gap_extend } => write!(
                f,
                "The gap extend penalty ({gap_extend}) was greater than the gap open penalty ({gap_open})"
            ),
            AlignmentError::AllocationFailed(e) => write!(f, "Failed to allocate alignment buffers: {e}"),
            AlignmentError::BeginNotFound { forward, reverse } => write!(
                f,
                "The reverse pass scored {reverse} but the forward pass scored {forward}; the alignment start could not be found"
            ),
        }
    }
}

impl fmt::Debug for AlignmentError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for AlignmentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AlignmentError::AllocationFailed(e) => Some(e),
            _ => None,
        }
    }
}

impl GetCode for AlignmentError {}

impl From<TryReserveError> for AlignmentError {
    #[inline]
    fn from(e: TryReserveError) -> Self {
        AlignmentError::AllocationFailed(e)
    }
}
