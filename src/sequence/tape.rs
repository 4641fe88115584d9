//! Apache-Arrow-style contiguous "tape" layouts: one flat byte buffer
//! plus a `count + 1`-entry offsets array, element `i` spanning
//! `tape[offsets[i]..offsets[i + 1]]`.

use super::Sequence;
use crate::error::SequenceError;

/// An offset width usable in a tape layout.
pub trait Offset: Copy {
    /// Converts this offset to a `usize` byte position.
    fn as_usize(self) -> usize;
}

impl Offset for u32 {
    #[inline]
    fn as_usize(self) -> usize {
        self as usize
    }
}

impl Offset for u64 {
    #[inline]
    fn as_usize(self) -> usize {
        self as usize
    }
}

/// A [`Sequence`] backed by a tape layout: one contiguous byte buffer
/// addressed through `count + 1` monotonically non-decreasing offsets.
#[derive(Clone, Copy, Debug)]
pub struct TapeSequence<'a, Off> {
    tape: &'a [u8],
    offsets: &'a [Off],
}

impl<'a, Off: Offset> Sequence for TapeSequence<'a, Off> {
    #[inline]
    fn count(&self) -> usize {
        self.offsets.len() - 1
    }

    #[inline]
    fn get(&self, index: usize) -> &[u8] {
        let start = self.offsets[index].as_usize();
        let end = self.offsets[index + 1].as_usize();
        &self.tape[start..end]
    }
}

fn validate<Off: Offset>(tape: &[u8], offsets: &[Off], count: usize) -> Result<(), SequenceError> {
    let need = count + 1;
    if offsets.len() < need {
        return Err(SequenceError::OffsetsTooShort { got: offsets.len(), need });
    }
    for i in 0..count {
        if offsets[i].as_usize() > offsets[i + 1].as_usize() {
            return Err(SequenceError::OffsetsNotMonotonic { at: i });
        }
    }
    debug_assert!(offsets[count].as_usize() <= tape.len());
    Ok(())
}

/// Builds a [`Sequence`] over `tape`, addressed by `count + 1` 32-bit
/// offsets (`offsets[i + 1] - offsets[i]` is the length of element `i`;
/// `offsets[count]` is the total tape length).
///
/// # Examples
///
/// ```
/// use swarstr::sequence::{from_u32_tape, Sequence};
///
/// let tape = b"catdoghorse";
/// let offsets: [u32; 4] = [0, 3, 6, 11];
/// let seq = from_u32_tape(tape, &offsets, 3).unwrap();
/// assert_eq!(seq.get(0), b"cat");
/// assert_eq!(seq.get(2), b"horse");
/// ```
#[inline]
pub fn from_u32_tape<'a>(
    tape: &'a [u8],
    offsets: &'a [u32],
    count: usize,
) -> Result<TapeSequence<'a, u32>, SequenceError> {
    validate(tape, offsets, count)?;
    Ok(TapeSequence { tape, offsets: &offsets[..count + 1] })
}

/// As [`from_u32_tape`], with 64-bit offsets for tapes larger than 4 GiB.
#[inline]
pub fn from_u64_tape<'a>(
    tape: &'a [u8],
    offsets: &'a [u64],
    count: usize,
) -> Result<TapeSequence<'a, u64>, SequenceError> {
    validate(tape, offsets, count)?;
    Ok(TapeSequence { tape, offsets: &offsets[..count + 1] })
}
