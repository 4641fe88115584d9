use crate::search::{find, find_iter, rfind, rfind_iter};

/// Each test is a (needle, haystack, expected_fwd, expected_rev) tuple.
type SearchTest = (&'static [u8], &'static [u8], Option<usize>, Option<usize>);

const SEARCH_TESTS: &[SearchTest] = &[
    // Empty needle is explicitly "not found" (spec §4.2 open question 1).
    (b"", b"", None, None),
    (b"", b"a", None, None),
    (b"a", b"", None, None),
    (b"a", b"a", Some(0), Some(0)),
    (b"a", b"aa", Some(0), Some(1)),
    (b"a", b"ba", Some(1), Some(1)),
    (b"a", b"bba", Some(2), Some(2)),
    (b"a", b"bbbbbb", None, None),
    // 2-4 byte SWAR kernels.
    (b"ab", b"ab", Some(0), Some(0)),
    (b"ab", b"aab", Some(1), Some(1)),
    (b"ab", b"abaab", Some(0), Some(3)),
    (b"ab", b"acb", None, None),
    (b"abc", b"zzabc", Some(2), Some(2)),
    (b"abcd", b"xxabcdxx", Some(2), Some(2)),
    (b"abcd", b"abcabcd", Some(3), Some(3)),
    // Bitap kernels (5-8, 9-16, 17-64 bytes).
    (b"brown", b"the quick brown fox jumps", Some(10), Some(10)),
    (b"aab", b"aaaaaa", None, None),
    (b"needle_longer9", b"xxneedle_longer9xx", Some(2), Some(2)),
    (b"seventeen_byte_ln", b"__seventeen_byte_ln__", Some(2), Some(2)),
    (b"abc", b"abcabcabc", Some(0), Some(6)),
    // Seeded-prefix scan for needles over 64 bytes.
    (
        b"0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdefXYZ",
        b"prefix-0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdefXYZ-suffix",
        Some(7),
        Some(7),
    ),
    (
        b"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaab",
        b"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaac",
        None,
        None,
    ),
];

#[test]
fn forward() {
    for &(needle, haystack, expected, _) in SEARCH_TESTS {
        assert_eq!(find(haystack, needle), expected, "find({:?}, {:?})", haystack, needle);
    }
}

#[test]
fn reverse() {
    for &(needle, haystack, _, expected) in SEARCH_TESTS {
        assert_eq!(rfind(haystack, needle), expected, "rfind({:?}, {:?})", haystack, needle);
    }
}

#[test]
fn scenario_the_quick_brown_fox() {
    assert_eq!(find(b"the quick brown fox jumps", b"brown"), Some(10));
}

#[test]
fn scenario_no_match_despite_shared_prefix() {
    assert_eq!(find(b"aaaaaa", b"aab"), None);
}

#[test]
fn scenario_rightmost_of_three() {
    assert_eq!(rfind(b"abcabcabc", b"abc"), Some(6));
}

#[test]
fn find_iter_yields_non_overlapping_matches() {
    let matches: Vec<usize> = find_iter(b"foo bar foo baz foo", b"foo").collect();
    assert_eq!(matches, vec![0, 8, 16]);
}

#[test]
fn rfind_iter_yields_non_overlapping_matches_in_reverse() {
    let matches: Vec<usize> = rfind_iter(b"foo bar foo baz foo", b"foo").collect();
    assert_eq!(matches, vec![16, 8, 0]);
}

#[test]
fn seeded_prefix_scan_does_not_skip_a_match_inside_a_false_positive_span() {
    // The first 64 bytes of the haystack form a false-positive prefix
    // candidate (needle's rest doesn't follow it), but a genuine match
    // starts one byte later, still inside that 64-byte span.
    let needle: Vec<u8> = core::iter::repeat(b'a').take(64).chain(core::iter::once(b'X')).collect();
    let haystack: Vec<u8> = core::iter::repeat(b'a').take(65).chain(core::iter::once(b'X')).collect();
    assert_eq!(find(&haystack, &needle), Some(1));
}

#[test]
fn seeded_prefix_scan_rejects_a_false_positive_that_overruns_the_haystack() {
    // The 64-byte prefix candidate at offset 1 is a false positive (the
    // needle's 65th byte would need a byte past the haystack's end to
    // verify), and there's no room left to retry past it either: the
    // correct answer is `None`, not a panic from indexing past the end
    // of the haystack while checking the tail.
    let needle: Vec<u8> = core::iter::repeat(b'A').take(64).chain(core::iter::once(b'B')).collect();
    let haystack: Vec<u8> = core::iter::once(b'X').chain(core::iter::repeat(b'A').take(64)).collect();
    assert_eq!(needle.len(), 65);
    assert_eq!(haystack.len(), 65);
    assert_eq!(find(&haystack, &needle), None);
    assert_eq!(rfind(&haystack, &needle), None);
}

#[test]
fn find_iter_overlapping_needle_does_not_double_count() {
    // "aa" inside "aaaa" can match at 0, 1, or 2; non-overlapping means
    // only 0 and 2 are reported.
    let matches: Vec<usize> = find_iter(b"aaaa", b"aa").collect();
    assert_eq!(matches, vec![0, 2]);
}
