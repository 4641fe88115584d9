/*!
A 64-bit, non-cryptographic digest (component C4) derived from the
MurmurHash3-128 mixing schedule, folded down to a single 64-bit output by
summing its two lanes.

This is *not* MurmurHash3: both lanes are seeded to the input length
rather than a caller-supplied seed, and the finalization step deliberately
skips MurmurHash3's avalanche mixing (`fmix64`) on each lane before
combining them. Treat the output as a fast, well-distributed digest for
hash tables and deduplication, not as a drop-in MurmurHash3
implementation and not as anything resembling a cryptographic hash.
*/

const C1: u64 = 0x87c3_7b91_1142_53d5;
const C2: u64 = 0x4cf5_ad43_2745_937f;

#[inline(always)]
fn rotl64(x: u64, r: u32) -> u64 {
    x.rotate_left(r)
}

/// Computes the 64-bit digest of `data`.
///
/// Deterministic: identical bytes always yield identical output,
/// regardless of host platform or endianness (block and tail loads are
/// little-endian internally, matching the reference mixing schedule).
///
/// # Examples
///
/// ```
/// use swarstr::hash;
///
/// assert_eq!(hash(b""), 0);
/// assert_eq!(hash(b"hello"), hash(b"hello"));
/// assert_ne!(hash(b"hello"), hash(b"world"));
/// ```
#[inline]
pub fn hash(data: &[u8]) -> u64 {
    let length = data.len() as u64;
    let mut h1 = length;
    let mut h2 = length;

    let mut chunks = data.chunks_exact(16);
    for block in &mut chunks {
        let mut k1 = u64::from_le_bytes(block[0..8].try_into().unwrap());
        let mut k2 = u64::from_le_bytes(block[8..16].try_into().unwrap());

        k1 = k1.wrapping_mul(C1);
        k1 = rotl64(k1, 31);
        k1 = k1.wrapping_mul(C2);
        h1 ^= k1;

        h1 = rotl64(h1, 27);
        h1 = h1.wrapping_add(h2);
        h1 = h1.wrapping_mul(5).wrapping_add(0x52dc_e729);

        k2 = k2.wrapping_mul(C2);
        k2 = rotl64(k2, 33);
        k2 = k2.wrapping_mul(C1);
        h2 ^= k2;

        h2 = rotl64(h2, 31);
        h2 = h2.wrapping_add(h1);
        h2 = h2.wrapping_mul(5).wrapping_add(0x3849_5ab5);
    }

    let tail = chunks.remainder();
    if !tail.is_empty() {
        let mut k1_bytes = [0u8; 8];
        let mut k2_bytes = [0u8; 8];
        // Bytes 8..15 of the tail feed k2 (mixed first, mirroring the
        // reference's fallthrough `switch` from case 15 down to case 9);
        // bytes 0..7 feed k1.
        for (i, &byte) in tail.iter().enumerate().skip(8) {
            k2_bytes[i - 8] = byte;
        }
        if tail.len() > 8 {
            let mut k2 = u64::from_le_bytes(k2_bytes);
            k2 = k2.wrapping_mul(C2);
            k2 = rotl64(k2, 33);
            k2 = k2.wrapping_mul(C1);
            h2 ^= k2;
        }
        for (i, &byte) in tail.iter().enumerate().take(8) {
            k1_bytes[i] = byte;
        }
        if !tail.is_empty() {
            let mut k1 = u64::from_le_bytes(k1_bytes);
            k1 = k1.wrapping_mul(C1);
            k1 = rotl64(k1, 31);
            k1 = k1.wrapping_mul(C2);
            h1 ^= k1;
        }
    }

    // The reference deliberately skips MurmurHash3's final avalanche
    // (`fmix64` on each lane) before combining them.
    h1.wrapping_add(h2)
}

/// A [`core::hash::Hasher`] bridge over [`hash`], for use with
/// `HashMap`/`HashSet` keyed by byte strings via [`BuildSwarHasher`].
///
/// This is convenience sugar over the single-shot digest, not a true
/// incremental hasher: bytes written via [`core::hash::Hasher::write`]
/// are buffered and the digest is computed once, in
/// [`core::hash::Hasher::finish`]. The streaming/incremental-hashing
/// Non-goal still holds — there is no per-chunk folding.
#[cfg(feature = "alloc")]
#[derive(Clone, Debug, Default)]
pub struct SwarHasher {
    buffer: alloc::vec::Vec<u8>,
}

#[cfg(feature = "alloc")]
impl SwarHasher {
    /// Creates an empty hasher.
    #[inline]
    pub fn new() -> SwarHasher {
        SwarHasher { buffer: alloc::vec::Vec::new() }
    }
}

#[cfg(feature = "alloc")]
impl core::hash::Hasher for SwarHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    #[inline]
    fn finish(&self) -> u64 {
        hash(&self.buffer)
    }
}

/// A [`core::hash::BuildHasher`] that produces [`SwarHasher`]s, for
/// plugging this crate's digest into a `HashMap`/`HashSet`.
#[cfg(feature = "alloc")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BuildSwarHasher;

#[cfg(feature = "alloc")]
impl core::hash::BuildHasher for BuildSwarHasher {
    type Hasher = SwarHasher;

    #[inline]
    fn build_hasher(&self) -> SwarHasher {
        SwarHasher::new()
    }
}
