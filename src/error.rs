//! Errors raised by the segmented-number contract
//!
//! These are programmer errors: a caller asked for a word that does not
//! exist, or tried to change the size of something that cannot change size.
//! The arithmetic in this crate never triggers them on well-formed values.

use crate::stdlib::fmt;
use crate::stdlib::result;


/// Contract violation on a segmented number
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentError {
    /// Word index past the last addressable word
    ///
    /// Note the overflow segment is addressable at `index == count`.
    IndexOutOfRange {
        index: usize,
        count: usize,
    },

    /// Resize a fixed-capacity digit word, or shrink a word sequence
    UnsupportedResize {
        count: usize,
        requested: usize,
    },
}

impl fmt::Display for SegmentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use SegmentError::*;

        match *self {
            IndexOutOfRange { index, count } => {
                write!(f, "index {} out of range for number with {} words", index, count)
            }
            UnsupportedResize { count, requested } => {
                write!(f, "unsupported resize from {} to {} words", count, requested)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SegmentError {}

/// [`SegmentError`] or success
pub type SegmentResult<T> = result::Result<T, SegmentError>;
