//! Bitap kernels for needles that don't fit the fixed 1-4 byte SWAR
//! kernels. State width (8/16/64-bit) is chosen by needle length so that
//! the running-match mask is exactly as wide as it needs to be: no state
//! bits are wasted tracking alignments the needle's length can't reach.
//!
//! See <https://en.wikipedia.org/wiki/Bitap_algorithm>.

use crate::primitives::equal;

/// Longest needle a single Bitap pass can track state for (64-bit mask).
pub(crate) const MAX_BITAP_LEN: usize = 64;

macro_rules! bitap_kernels {
    ($forward:ident, $reverse:ident, $ty:ty) => {
        /// Leftmost occurrence of `needle` (`needle.len() <= ` the state
        /// width of this kernel) in `haystack`.
        pub(crate) fn $forward(haystack: &[u8], needle: &[u8]) -> Option<usize> {
            let needle_len = needle.len();
            debug_assert!(needle_len >= 1 && needle_len <= core::mem::size_of::<$ty>() * 8);

            let mut pattern_mask = [<$ty>::MAX; 256];
            for (i, &c) in needle.iter().enumerate() {
                pattern_mask[c as usize] &= !((1 as $ty) << i);
            }

            let final_bit: $ty = 1 << (needle_len - 1);
            let mut running_match: $ty = <$ty>::MAX;
            for (i, &c) in haystack.iter().enumerate() {
                running_match = (running_match << 1) | pattern_mask[c as usize];
                if running_match & final_bit == 0 {
                    return Some(i + 1 - needle_len);
                }
            }
            None
        }

        /// Rightmost occurrence of `needle` in `haystack`. Runs the same
        /// automaton over the reversed index order with a
        /// reversed-needle mask, which is equivalent to running the
        /// forward kernel over reversed copies of both strings but
        /// without allocating either reversal.
        pub(crate) fn $reverse(haystack: &[u8], needle: &[u8]) -> Option<usize> {
            let needle_len = needle.len();
            debug_assert!(needle_len >= 1 && needle_len <= core::mem::size_of::<$ty>() * 8);

            let mut pattern_mask = [<$ty>::MAX; 256];
            for (i, &c) in needle.iter().rev().enumerate() {
                pattern_mask[c as usize] &= !((1 as $ty) << i);
            }

            let final_bit: $ty = 1 << (needle_len - 1);
            let mut running_match: $ty = <$ty>::MAX;
            for (i, &c) in haystack.iter().enumerate().rev() {
                running_match = (running_match << 1) | pattern_mask[c as usize];
                if running_match & final_bit == 0 {
                    return Some(i);
                }
            }
            None
        }
    };
}

bitap_kernels!(find_under8byte, rfind_under8byte, u8);
bitap_kernels!(find_under16byte, rfind_under16byte, u16);
bitap_kernels!(find_under64byte, rfind_under64byte, u64);

/// Leftmost occurrence of a needle longer than [`MAX_BITAP_LEN`]: locate a
/// 64-byte prefix candidate with Bitap, then verify the remaining bytes
/// byte-for-byte. On a false-positive prefix match, resume the scan one
/// byte past where that candidate started — a later real match can still
/// begin anywhere inside the 64 bytes just tested, so skipping the whole
/// span would miss it.
pub(crate) fn find_long(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    let (prefix, rest) = needle.split_at(MAX_BITAP_LEN);
    let rest_len = rest.len();
    let mut i = 0usize;
    while i + needle.len() <= haystack.len() {
        let found = i + find_under64byte(&haystack[i..], prefix)?;
        if found + MAX_BITAP_LEN + rest_len <= haystack.len()
            && equal(&haystack[found + MAX_BITAP_LEN..], rest, rest_len)
        {
            return Some(found);
        }
        i = found + 1;
    }
    None
}

/// Rightmost occurrence of a needle longer than [`MAX_BITAP_LEN`]: mirror
/// of [`find_long`], seeded from the needle's final 64 bytes instead of
/// its first.
pub(crate) fn rfind_long(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    let prefix_len = needle.len() - MAX_BITAP_LEN;
    let (prefix, suffix) = needle.split_at(prefix_len);
    let mut end = haystack.len();
    while needle.len() <= end {
        let found_suffix_start = rfind_under64byte(&haystack[..end], suffix)?;
        if found_suffix_start >= prefix_len {
            let start = found_suffix_start - prefix_len;
            if equal(&haystack[start..], prefix, prefix_len) {
                return Some(start);
            }
        }
        end = found_suffix_start + MAX_BITAP_LEN - 1;
    }
    None
}
