/*!
Precondition-violation errors for the handful of entry points where a
caller mistake is cheap to detect and isn't on a documented hot path.

Most of this crate's surface (`find`, `hash`, `equal`, `order`, the
per-row edit-distance kernels) stays a total function with
`debug_assert!` guards only: spec-mandated hot paths must not pay for
runtime checks. The two places a caller-supplied buffer can be silently
wrong in a way that's cheap to catch before any work happens — sequence
construction from a tape, and scratch-buffer sizing — get a real
`Result` instead.
*/

use core::fmt;

/// An error constructing a [`Sequence`](crate::sequence::Sequence) from a
/// tape layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceError {
    /// `offsets` had fewer than `count + 1` entries.
    OffsetsTooShort {
        /// The number of offsets the tape actually supplied.
        got: usize,
        /// The number of offsets required (`count + 1`).
        need: usize,
    },
    /// Two consecutive offsets decreased (offsets must be
    /// monotonically non-decreasing).
    OffsetsNotMonotonic {
        /// The index `i` at which `offsets[i] > offsets[i + 1]`.
        at: usize,
    },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SequenceError::OffsetsTooShort { got, need } => {
                write!(f, "tape offsets array has {} entries, need at least {}", got, need)
            }
            SequenceError::OffsetsNotMonotonic { at } => {
                write!(f, "tape offsets are not monotonically non-decreasing at index {}", at)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SequenceError {}

/// An error reported by a scratch-buffer-consuming entry point when the
/// caller-supplied buffer is smaller than
/// [`levenshtein_memory`](crate::distance::levenshtein_memory) or
/// [`alignment_score_memory`](crate::distance::alignment_score_memory)
/// require.
///
/// Note that [`levenshtein`](crate::distance::levenshtein) and
/// [`alignment_score`](crate::distance::alignment_score) themselves
/// still `assert!` on this condition rather than returning this type —
/// per spec, an undersized scratch buffer is a caller bug, and the
/// assertion is cheaper than a `Result` on what's meant to be a hot
/// path. This type exists for wrapper code (such as
/// [`crate::distance::try_levenshtein`]) that wants to convert the
/// same condition into a recoverable error ahead of the call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScratchTooSmall {
    /// Bytes the caller supplied.
    pub got: usize,
    /// Bytes required.
    pub need: usize,
}

impl fmt::Display for ScratchTooSmall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scratch buffer has {} bytes, need at least {}", self.got, self.need)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ScratchTooSmall {}
