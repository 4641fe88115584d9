//! The flat 256x256 substitution-cost matrix consumed by
//! [`alignment_score`](super::alignment_score).

/// A row-major, 65536-entry substitution-cost matrix: `matrix[a * 256 + b]`
/// is the cost of substituting byte `b` for byte `a` (both treated as
/// unsigned byte indices).
///
/// This is a plain array newtype rather than a bespoke accessor API so
/// callers can build one with an array literal or `[0i8; 65536]` and
/// mutate it directly; [`SubstitutionMatrix::row`] is a convenience for
/// the inner loop of [`alignment_score`](super::alignment_score), which
/// re-reads the same row for every byte of `b`.
pub type SubstitutionMatrix = [i8; 65536];

/// Extension trait providing row access into a [`SubstitutionMatrix`].
pub(crate) trait MatrixExt {
    fn row(&self, a: u8) -> &[i8];
}

impl MatrixExt for SubstitutionMatrix {
    #[inline(always)]
    fn row(&self, a: u8) -> &[i8] {
        let start = a as usize * 256;
        &self[start..start + 256]
    }
}

/// Builds a symmetric substitution matrix that scores a byte match as
/// `match_score` and every mismatch as `mismatch_score`.
///
/// This is a convenience constructor, not part of the original
/// algorithmic contract: most callers of
/// [`alignment_score`](super::alignment_score) want a simple
/// match/mismatch scheme rather than a hand-tuned 65536-entry table.
#[inline]
pub fn uniform_matrix(match_score: i8, mismatch_score: i8) -> SubstitutionMatrix {
    let mut matrix = [mismatch_score; 65536];
    let mut byte = 0usize;
    while byte < 256 {
        matrix[byte * 256 + byte] = match_score;
        byte += 1;
    }
    matrix
}
