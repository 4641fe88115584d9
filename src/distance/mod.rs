/*!
Bounded Levenshtein distance and weighted Needleman-Wunsch-style
alignment scoring (component C3).

Both routines are a classic row-swapping dynamic program: only the
previous and current row of the edit-distance table are kept, and their
roles swap after each outer iteration. [`levenshtein`] additionally
narrows its cell width to `u8` when both inputs are under 256 bytes,
halving the scratch footprint for the short-string case that dominates
fuzzy-deduplication workloads.
*/

mod matrix;

pub use self::matrix::{uniform_matrix, SubstitutionMatrix};

use self::matrix::MatrixExt;

use core::mem::size_of;

/// Returns the number of bytes of scratch [`levenshtein`] needs for
/// inputs of the given lengths.
///
/// # Examples
///
/// ```
/// use swarstr::distance::levenshtein_memory;
///
/// assert_eq!(levenshtein_memory(3, 300), 2 * 301 * core::mem::size_of::<usize>());
/// assert_eq!(levenshtein_memory(3, 5), 2 * 6);
/// ```
#[inline]
pub fn levenshtein_memory(a_len: usize, b_len: usize) -> usize {
    let cell_size = if a_len < 256 && b_len < 256 { 1 } else { size_of::<usize>() };
    2 * (b_len + 1) * cell_size
}

/// Returns the number of bytes of scratch [`alignment_score`] needs for
/// inputs of the given lengths.
#[inline]
pub fn alignment_score_memory(_a_len: usize, b_len: usize) -> usize {
    2 * (b_len + 1) * size_of::<isize>()
}

#[inline(always)]
fn min3<T: Ord>(a: T, b: T, c: T) -> T {
    a.min(b).min(c)
}

/// A fixed-width row of cells packed into a byte scratch buffer. Cells
/// are read and written through `to_ne_bytes`/`from_ne_bytes` rather
/// than a pointer cast, so the buffer needs no particular alignment.
struct Row<'a, const WIDTH: usize> {
    bytes: &'a mut [u8],
}

impl<'a, const WIDTH: usize> Row<'a, WIDTH> {
    #[inline(always)]
    fn split(bytes: &'a mut [u8], cells_per_row: usize) -> (Row<'a, WIDTH>, Row<'a, WIDTH>) {
        let (a, b) = bytes.split_at_mut(cells_per_row * WIDTH);
        (Row { bytes: a }, Row { bytes: b })
    }
}

macro_rules! impl_row {
    ($ty:ty, $width:expr) => {
        impl<'a> Row<'a, $width> {
            #[inline(always)]
            fn get(&self, i: usize) -> $ty {
                let w = $width;
                <$ty>::from_ne_bytes(self.bytes[i * w..i * w + w].try_into().unwrap())
            }

            #[inline(always)]
            fn set(&mut self, i: usize, v: $ty) {
                let w = $width;
                self.bytes[i * w..i * w + w].copy_from_slice(&v.to_ne_bytes());
            }
        }
    };
}

impl_row!(usize, { size_of::<usize>() });
impl_row!(isize, { size_of::<isize>() });

/// Computes the Levenshtein (edit) distance between `a` and `b`, capped
/// at `bound`.
///
/// `scratch` must be at least [`levenshtein_memory(a.len(), b.len())`]
/// bytes; its contents on return are unspecified. If the true distance
/// exceeds `bound`, this returns `bound` rather than continuing the
/// computation to completion (an early exit the dynamic program performs
/// as soon as every cell in a row is known to exceed `bound`).
///
/// # Panics
///
/// Panics if `scratch` is shorter than required.
///
/// # Examples
///
/// ```
/// use swarstr::distance::{levenshtein, levenshtein_memory};
///
/// let a = b"kitten";
/// let b = b"sitting";
/// let mut scratch = vec![0u8; levenshtein_memory(a.len(), b.len())];
/// assert_eq!(levenshtein(a, b, &mut scratch, 100), 3);
/// ```
#[inline]
pub fn levenshtein(a: &[u8], b: &[u8], scratch: &mut [u8], bound: usize) -> usize {
    let (a_len, b_len) = (a.len(), b.len());

    if a_len == 0 {
        return b_len.min(bound);
    }
    if b_len == 0 {
        return a_len.min(bound);
    }
    let len_diff = if a_len > b_len { a_len - b_len } else { b_len - a_len };
    if len_diff > bound {
        return bound;
    }

    if a_len < 256 && b_len < 256 {
        levenshtein_narrow(a, b, scratch, bound)
    } else {
        levenshtein_wide(a, b, scratch, bound)
    }
}

fn levenshtein_narrow(a: &[u8], b: &[u8], scratch: &mut [u8], bound: usize) -> usize {
    let b_len = b.len();
    let needed = 2 * (b_len + 1);
    assert!(scratch.len() >= needed, "scratch buffer too small for levenshtein_narrow");

    let (mut previous, mut current) = Row::<1>::split(&mut scratch[..needed], b_len + 1);
    for j in 0..=b_len {
        previous.set(j, j.min(u8::MAX as usize) as u8);
    }

    for (idx_a, &byte_a) in a.iter().enumerate() {
        current.set(0, (idx_a + 1).min(u8::MAX as usize) as u8);
        // Tracked as `usize` (not truncated to the `u8` cell width) so the
        // early-exit comparison against `bound` is correct even when
        // `bound > u8::MAX`; the cells themselves stay `u8` since inputs
        // under 256 bytes can never produce a true distance above 255.
        let mut min_distance = bound;

        for (idx_b, &byte_b) in b.iter().enumerate() {
            let cost_deletion = previous.get(idx_b + 1).saturating_add(1);
            let cost_insertion = current.get(idx_b).saturating_add(1);
            let cost_substitution = previous.get(idx_b) + (byte_a != byte_b) as u8;
            let cell = min3(cost_deletion, cost_insertion, cost_substitution);
            current.set(idx_b + 1, cell);
            min_distance = min_distance.min(cell as usize);
        }

        if min_distance >= bound {
            return bound;
        }
        core::mem::swap(&mut previous, &mut current);
    }

    (previous.get(b_len) as usize).min(bound)
}

fn levenshtein_wide(a: &[u8], b: &[u8], scratch: &mut [u8], bound: usize) -> usize {
    let b_len = b.len();
    let needed = levenshtein_memory(256, b_len).max(levenshtein_memory(b_len, 256));
    let needed = needed.max(2 * (b_len + 1) * size_of::<usize>());
    assert!(scratch.len() >= needed, "scratch buffer too small for levenshtein_wide");

    let (mut previous, mut current) = Row::<{ size_of::<usize>() }>::split(scratch, b_len + 1);
    for j in 0..=b_len {
        previous.set(j, j);
    }

    for (idx_a, &byte_a) in a.iter().enumerate() {
        current.set(0, idx_a + 1);
        let mut min_distance = bound;

        for (idx_b, &byte_b) in b.iter().enumerate() {
            let cost_deletion = previous.get(idx_b + 1) + 1;
            let cost_insertion = current.get(idx_b) + 1;
            let cost_substitution = previous.get(idx_b) + (byte_a != byte_b) as usize;
            let cell = min3(cost_deletion, cost_insertion, cost_substitution);
            current.set(idx_b + 1, cell);
            min_distance = min_distance.min(cell);
        }

        if min_distance >= bound {
            return bound;
        }
        core::mem::swap(&mut previous, &mut current);
    }

    previous.get(b_len).min(bound)
}

/// Computes a weighted alignment score between `a` and `b` under a flat
/// `gap` penalty and a 256x256 substitution cost matrix.
///
/// Unlike [`levenshtein`], there is no `bound`: substitution costs may be
/// negative (rewarding matches), so the running minimum is not monotone
/// and can't be used to exit early.
///
/// `scratch` must be at least
/// [`alignment_score_memory(a.len(), b.len())`] bytes.
///
/// Empty-input edge case: an empty `a` scores `b.len()` and an empty `b`
/// scores `a.len()` — not `b.len() * gap` / `a.len() * gap`. This mirrors
/// the reference implementation's literal behavior (its first DP row is
/// seeded with plain indices, not gap-weighted ones) rather than the
/// arguably more consistent gap-weighted value.
///
/// # Panics
///
/// Panics if `scratch` is shorter than required.
#[inline]
pub fn alignment_score(
    a: &[u8],
    b: &[u8],
    gap: i8,
    subs: &SubstitutionMatrix,
    scratch: &mut [u8],
) -> isize {
    let (a_len, b_len) = (a.len(), b.len());
    if a_len == 0 {
        return b_len as isize;
    }
    if b_len == 0 {
        return a_len as isize;
    }

    let needed = 2 * (b_len + 1) * size_of::<isize>();
    assert!(scratch.len() >= needed, "scratch buffer too small for alignment_score");

    let (mut previous, mut current) = Row::<{ size_of::<isize>() }>::split(scratch, b_len + 1);
    for j in 0..=b_len {
        previous.set(j, j as isize);
    }

    for (idx_a, &byte_a) in a.iter().enumerate() {
        current.set(0, idx_a as isize + 1);
        let row = subs.row(byte_a);

        for (idx_b, &byte_b) in b.iter().enumerate() {
            let cost_deletion = previous.get(idx_b + 1) + gap as isize;
            let cost_insertion = current.get(idx_b) + gap as isize;
            let cost_substitution = previous.get(idx_b) + row[byte_b as usize] as isize;
            current.set(idx_b + 1, min3(cost_deletion, cost_insertion, cost_substitution));
        }

        core::mem::swap(&mut previous, &mut current);
    }

    previous.get(b_len)
}

/// As [`levenshtein`], but checks `scratch`'s size against
/// [`levenshtein_memory`] and returns
/// [`ScratchTooSmall`](crate::error::ScratchTooSmall) instead of
/// panicking when it's undersized.
///
/// `levenshtein` itself keeps the panicking `assert!`, since that
/// function is the documented hot path (spec.md §7: "must not impose
/// runtime checks on the hot path"); this wrapper is for callers that
/// receive `scratch` from somewhere they don't fully trust (e.g.
/// deserialized alongside the strings it was sized for) and would
/// rather handle the mistake than crash.
#[inline]
pub fn try_levenshtein(
    a: &[u8],
    b: &[u8],
    scratch: &mut [u8],
    bound: usize,
) -> Result<usize, crate::error::ScratchTooSmall> {
    let need = levenshtein_memory(a.len(), b.len());
    if scratch.len() < need {
        return Err(crate::error::ScratchTooSmall { got: scratch.len(), need });
    }
    Ok(levenshtein(a, b, scratch, bound))
}

/// As [`alignment_score`], but checks `scratch`'s size against
/// [`alignment_score_memory`] and returns
/// [`ScratchTooSmall`](crate::error::ScratchTooSmall) instead of
/// panicking when it's undersized.
#[inline]
pub fn try_alignment_score(
    a: &[u8],
    b: &[u8],
    gap: i8,
    subs: &SubstitutionMatrix,
    scratch: &mut [u8],
) -> Result<isize, crate::error::ScratchTooSmall> {
    let need = alignment_score_memory(a.len(), b.len());
    if scratch.len() < need {
        return Err(crate::error::ScratchTooSmall { got: scratch.len(), need });
    }
    Ok(alignment_score(a, b, gap, subs, scratch))
}
