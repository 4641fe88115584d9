/*!
Length-dispatched substring search (component C2).

[`find`] and [`rfind`] pick the cheapest kernel that can search a needle
of the given length: a single-byte SWAR scan, a 2/3/4-byte packed SWAR
compare, a Bitap automaton sized to 8/16/64 bits of state, or — past 64
bytes — a seeded-prefix Bitap scan with a byte-equality tail check. All
are `O(haystack.len() + needle.len())`.

# Examples

```
use swarstr::search::{find, rfind};

let haystack = b"the quick brown fox jumps";
assert_eq!(find(haystack, b"brown"), Some(10));
assert_eq!(rfind(b"abcabcabc", b"abc"), Some(6));
assert_eq!(find(b"aaaaaa", b"aab"), None);
```
*/

mod bitap;
mod iter;
mod swar;

pub use self::iter::{FindIter, RFindIter};

use crate::primitives::{find_byte, rfind_byte};
use bitap::MAX_BITAP_LEN;

/// Returns the index of the leftmost occurrence of `needle` in
/// `haystack`, or `None` if `needle` does not occur (including when
/// `needle` is empty, or longer than `haystack`).
///
/// # Examples
///
/// ```
/// use swarstr::find;
///
/// assert_eq!(find(b"the quick brown fox jumps", b"brown"), Some(10));
/// assert_eq!(find(b"aaaaaa", b"aab"), None);
/// ```
#[inline]
pub fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if haystack.len() < needle.len() {
        return None;
    }
    match needle.len() {
        0 => None,
        1 => find_byte(haystack, needle[0]),
        2 => swar::find_2byte(haystack, needle[0], needle[1]),
        3 => swar::find_3byte(haystack, needle),
        4 => swar::find_4byte(haystack, needle),
        5..=8 => bitap::find_under8byte(haystack, needle),
        9..=16 => bitap::find_under16byte(haystack, needle),
        17..=MAX_BITAP_LEN => bitap::find_under64byte(haystack, needle),
        _ => bitap::find_long(haystack, needle),
    }
}

/// Returns the index of the rightmost occurrence of `needle` in
/// `haystack`, or `None` if `needle` does not occur.
///
/// # Examples
///
/// ```
/// use swarstr::rfind;
///
/// assert_eq!(rfind(b"abcabcabc", b"abc"), Some(6));
/// ```
#[inline]
pub fn rfind(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if haystack.len() < needle.len() {
        return None;
    }
    match needle.len() {
        0 => None,
        1 => rfind_byte(haystack, needle[0]),
        2..=8 => bitap::rfind_under8byte(haystack, needle),
        9..=16 => bitap::rfind_under16byte(haystack, needle),
        17..=MAX_BITAP_LEN => bitap::rfind_under64byte(haystack, needle),
        _ => bitap::rfind_long(haystack, needle),
    }
}

/// Returns an iterator over every non-overlapping leftmost occurrence of
/// `needle` in `haystack`, in left-to-right order.
///
/// # Examples
///
/// ```
/// use swarstr::find_iter;
///
/// let mut it = find_iter(b"foo bar foo baz foo", b"foo");
/// assert_eq!(it.next(), Some(0));
/// assert_eq!(it.next(), Some(8));
/// assert_eq!(it.next(), Some(16));
/// assert_eq!(it.next(), None);
/// ```
#[inline]
pub fn find_iter<'h, 'n>(haystack: &'h [u8], needle: &'n [u8]) -> FindIter<'h, 'n> {
    Finder::new(needle).find_iter(haystack)
}

/// Returns an iterator over every non-overlapping rightmost occurrence of
/// `needle` in `haystack`, in right-to-left order.
///
/// # Examples
///
/// ```
/// use swarstr::rfind_iter;
///
/// let mut it = rfind_iter(b"foo bar foo baz foo", b"foo");
/// assert_eq!(it.next(), Some(16));
/// assert_eq!(it.next(), Some(8));
/// assert_eq!(it.next(), Some(0));
/// assert_eq!(it.next(), None);
/// ```
#[inline]
pub fn rfind_iter<'h, 'n>(haystack: &'h [u8], needle: &'n [u8]) -> RFindIter<'h, 'n> {
    FinderRev::new(needle).rfind_iter(haystack)
}

/// A substring searcher bound to a fixed needle.
///
/// Reusing a `Finder` across many haystacks avoids nothing algorithmic
/// (needle dispatch is already `O(1)`) but does avoid re-deriving the
/// needle's length-class each call when that matters in a profile.
#[derive(Clone, Copy, Debug)]
pub struct Finder<'n> {
    needle: &'n [u8],
}

impl<'n> Finder<'n> {
    /// Creates a finder for the given needle.
    #[inline]
    pub fn new(needle: &'n [u8]) -> Finder<'n> {
        Finder { needle }
    }

    /// Returns the needle this finder searches for.
    #[inline]
    pub fn needle(&self) -> &[u8] {
        self.needle
    }

    /// Returns the index of the leftmost occurrence of this finder's
    /// needle in `haystack`.
    #[inline]
    pub fn find(&self, haystack: &[u8]) -> Option<usize> {
        find(haystack, self.needle)
    }

    /// Returns an iterator over non-overlapping leftmost occurrences.
    #[inline]
    pub fn find_iter<'h>(&self, haystack: &'h [u8]) -> FindIter<'h, 'n> {
        FindIter::new(haystack, *self)
    }
}

/// A substring searcher, bound to a fixed needle, that searches from the
/// end of the haystack backwards.
#[derive(Clone, Copy, Debug)]
pub struct FinderRev<'n> {
    needle: &'n [u8],
}

impl<'n> FinderRev<'n> {
    /// Creates a reverse finder for the given needle.
    #[inline]
    pub fn new(needle: &'n [u8]) -> FinderRev<'n> {
        FinderRev { needle }
    }

    /// Returns the needle this finder searches for.
    #[inline]
    pub fn needle(&self) -> &[u8] {
        self.needle
    }

    /// Returns the index of the rightmost occurrence of this finder's
    /// needle in `haystack`.
    #[inline]
    pub fn rfind(&self, haystack: &[u8]) -> Option<usize> {
        rfind(haystack, self.needle)
    }

    /// Returns an iterator over non-overlapping rightmost occurrences, in
    /// right-to-left order.
    #[inline]
    pub fn rfind_iter<'h>(&self, haystack: &'h [u8]) -> RFindIter<'h, 'n> {
        RFindIter::new(haystack, *self)
    }
}
