//! Non-overlapping match iterators over a fixed needle.

use super::{Finder, FinderRev};
use core::cmp;

/// An iterator over non-overlapping substring matches, produced by
/// [`find_iter`](super::find_iter) or [`Finder::find_iter`].
///
/// Matches are reported by the byte offset at which they begin. `'h` is
/// the lifetime of the haystack, `'n` of the needle.
#[derive(Debug)]
pub struct FindIter<'h, 'n> {
    haystack: &'h [u8],
    finder: Finder<'n>,
    pos: usize,
}

impl<'h, 'n> FindIter<'h, 'n> {
    pub(crate) fn new(haystack: &'h [u8], finder: Finder<'n>) -> FindIter<'h, 'n> {
        FindIter { haystack, finder, pos: 0 }
    }
}

impl<'h, 'n> Iterator for FindIter<'h, 'n> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.pos > self.haystack.len() {
            return None;
        }
        match self.finder.find(&self.haystack[self.pos..]) {
            None => None,
            Some(i) => {
                let pos = self.pos + i;
                self.pos = pos + cmp::max(1, self.finder.needle().len());
                Some(pos)
            }
        }
    }
}

/// An iterator over non-overlapping substring matches in reverse,
/// produced by [`rfind_iter`](super::rfind_iter) or
/// [`FinderRev::rfind_iter`].
///
/// Matches are reported by the byte offset at which they begin. `'h` is
/// the lifetime of the haystack, `'n` of the needle.
#[derive(Debug)]
pub struct RFindIter<'h, 'n> {
    haystack: &'h [u8],
    finder: FinderRev<'n>,
    /// Cleared to `None` once the empty-needle match at position 0 has
    /// been yielded, so the iterator terminates instead of looping.
    pos: Option<usize>,
}

impl<'h, 'n> RFindIter<'h, 'n> {
    pub(crate) fn new(haystack: &'h [u8], finder: FinderRev<'n>) -> RFindIter<'h, 'n> {
        let pos = Some(haystack.len());
        RFindIter { haystack, finder, pos }
    }
}

impl<'h, 'n> Iterator for RFindIter<'h, 'n> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        let pos = self.pos?;
        match self.finder.rfind(&self.haystack[..pos]) {
            None => {
                self.pos = None;
                None
            }
            Some(i) => {
                // Needles are never empty (an empty needle always
                // returns `None`, see `rfind`'s doc), so `i < pos`
                // always holds and the next search window is strictly
                // smaller: non-overlapping matches, same contract as
                // the forward iterator's `pos + needle.len()` advance.
                self.pos = Some(i);
                Some(i)
            }
        }
    }
}
