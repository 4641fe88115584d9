/*!
`swarstr` provides heavily optimized routines for operating on arbitrary
byte strings: substring search, comparison, edit distance, hashing, and
bulk sorting of string collections.

Traditionally these operations are provided piecemeal by libc (`memchr`,
`memcmp`) or by crates specialized to a single task. `swarstr` collects a
coherent set of them, dispatched by input size to the cheapest kernel that
can do the job: word-parallel (SWAR) scans for short, fixed patterns,
Bitap bitmasks for medium-length needles, and a seeded-prefix scan backed
by byte-equality verification for long ones. None of this requires
platform-specific SIMD; every routine here is scalar and portable, which
means it also works in `#![no_std]` builds.

This crate does not do Unicode-aware collation, regular expressions,
streaming hashing, or cryptographically secure hashing. Its sort is
explicitly unstable. See the module docs for each component for details.
*/

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![doc(html_root_url = "https://docs.rs/swarstr/0.1.0")]

#[cfg(feature = "alloc")]
extern crate alloc;

// Supporting 8-bit (or others) would require reworking the SWAR lane
// width assumptions throughout `search` and `primitives`.
#[cfg(not(any(
    target_pointer_width = "16",
    target_pointer_width = "32",
    target_pointer_width = "64"
)))]
compile_error!("swarstr currently not supported on non-{16,32,64}-bit targets");

pub mod case;
pub mod distance;
pub mod error;
pub mod hash;
pub mod primitives;
pub mod search;
pub mod sequence;

pub use crate::case::{to_ascii, to_lower, to_upper};
pub use crate::distance::{alignment_score, alignment_score_memory, levenshtein, levenshtein_memory};
pub use crate::hash::hash;
pub use crate::primitives::{equal, mismatch_first, mismatch_last, order};
pub use crate::search::{find, find_byte, find_iter, rfind, rfind_byte, rfind_iter, Finder, FinderRev};
#[cfg(feature = "alloc")]
pub use crate::sequence::{sort, sort_partial};
pub use crate::sequence::{merge, partition, sort_intro, Sequence};
