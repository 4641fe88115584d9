use crate::distance::{
    alignment_score, alignment_score_memory, levenshtein, levenshtein_memory, uniform_matrix,
};

#[test]
fn scenario_kitten_sitting() {
    let a = b"kitten";
    let b = b"sitting";
    let mut scratch = vec![0u8; levenshtein_memory(a.len(), b.len())];
    assert_eq!(levenshtein(a, b, &mut scratch, 100), 3);
}

#[test]
fn scenario_bound_equals_true_distance() {
    let a = b"abcdef";
    let b = b"azcdef";
    let mut scratch = vec![0u8; levenshtein_memory(a.len(), b.len())];
    assert_eq!(levenshtein(a, b, &mut scratch, 1), 1);
    // When the bound itself is 0, the early exit fires before the true
    // distance can be observed; per spec this reports the bound, not
    // the real (larger) distance.
    assert_eq!(levenshtein(a, b, &mut scratch, 0), 0);
}

#[test]
fn empty_inputs() {
    let mut scratch = vec![0u8; levenshtein_memory(0, 5)];
    assert_eq!(levenshtein(b"", b"hello", &mut scratch, 100), 5);
    assert_eq!(levenshtein(b"hello", b"", &mut scratch, 100), 5);
    assert_eq!(levenshtein(b"", b"", &mut scratch, 100), 0);
}

#[test]
fn identical_strings_have_zero_distance() {
    let a = b"the quick brown fox";
    let mut scratch = vec![0u8; levenshtein_memory(a.len(), a.len())];
    assert_eq!(levenshtein(a, a, &mut scratch, 100), 0);
}

#[test]
fn length_difference_exceeding_bound_short_circuits() {
    let a = b"a";
    let b = b"abcdefghij";
    let mut scratch = vec![0u8; levenshtein_memory(a.len(), b.len())];
    assert_eq!(levenshtein(a, b, &mut scratch, 3), 3);
}

#[test]
fn wide_cell_path_for_long_inputs() {
    let a = vec![b'a'; 300];
    let mut b = vec![b'a'; 300];
    b[150] = b'z';
    let mut scratch = vec![0u8; levenshtein_memory(a.len(), b.len())];
    assert_eq!(levenshtein(&a, &b, &mut scratch, 1000), 1);
}

#[test]
fn narrow_cell_path_early_exit_is_not_truncated_to_u8_range() {
    // Both inputs are under 256 bytes (narrow `u8`-cell path) and
    // pairwise mismatched throughout, so the true distance is 255 — the
    // maximum a `u8` cell can represent, but well under a `bound` of
    // 1000. The early-exit threshold must be compared against the real
    // `bound`, not a `u8::MAX`-truncated stand-in, or this would
    // wrongly report 1000 instead of the true distance.
    let a = vec![b'a'; 255];
    let b = vec![b'b'; 255];
    let mut scratch = vec![0u8; levenshtein_memory(a.len(), b.len())];
    assert_eq!(levenshtein(&a, &b, &mut scratch, 1000), 255);
}

#[test]
fn alignment_score_empty_input_edge_case() {
    // Preserved literally from the reference: empty `a` scores `b.len()`,
    // not `b.len() * gap` (see spec §9 open question 3).
    let subs = uniform_matrix(-1, 1);
    let mut scratch = vec![0u8; alignment_score_memory(0, 5)];
    assert_eq!(alignment_score(b"", b"hello", 2, &subs, &mut scratch), 5);
    let mut scratch = vec![0u8; alignment_score_memory(5, 0)];
    assert_eq!(alignment_score(b"hello", b"", 2, &subs, &mut scratch), 5);
}

#[test]
fn alignment_score_rewards_matches_with_negative_cost() {
    let subs = uniform_matrix(-1, 1);
    let a = b"kitten";
    let b = b"kitten";
    let mut scratch = vec![0u8; alignment_score_memory(a.len(), b.len())];
    // All matches, no gaps: score is `-len`.
    assert_eq!(alignment_score(a, b, 2, &subs, &mut scratch), -6);
}
