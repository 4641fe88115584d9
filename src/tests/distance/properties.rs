use quickcheck::quickcheck;

use crate::distance::{levenshtein, levenshtein_memory};

const BOUND: usize = 64;

fn lev(a: &[u8], b: &[u8], bound: usize) -> usize {
    let mut scratch = vec![0u8; levenshtein_memory(a.len(), b.len())];
    levenshtein(a, b, &mut scratch, bound)
}

quickcheck! {
    fn qc_symmetric(a: Vec<u8>, b: Vec<u8>) -> bool {
        lev(&a, &b, BOUND) == lev(&b, &a, BOUND)
    }

    fn qc_zero_iff_equal(a: Vec<u8>, b: Vec<u8>) -> bool {
        (lev(&a, &b, BOUND) == 0) == (a == b)
    }

    fn qc_never_exceeds_bound(a: Vec<u8>, b: Vec<u8>) -> bool {
        lev(&a, &b, BOUND) <= BOUND
    }

    fn qc_bounded_equals_min_of_unbounded_and_bound(a: Vec<u8>, b: Vec<u8>) -> bool {
        // An unbounded call (bound large enough it can never saturate)
        // clamped by hand must equal the directly-bounded call.
        let generous = a.len().max(b.len()) + 1;
        let unbounded = lev(&a, &b, generous);
        lev(&a, &b, BOUND) == unbounded.min(BOUND)
    }

    fn qc_triangle_inequality(a: Vec<u8>, b: Vec<u8>, c: Vec<u8>) -> bool {
        let generous = a.len().max(b.len()).max(c.len()) + 1;
        lev(&a, &c, generous) <= lev(&a, &b, generous) + lev(&b, &c, generous)
    }

    fn qc_length_difference_is_a_lower_bound(a: Vec<u8>, b: Vec<u8>) -> bool {
        let generous = a.len().max(b.len()) + 1;
        let diff = if a.len() > b.len() { a.len() - b.len() } else { b.len() - a.len() };
        lev(&a, &b, generous) >= diff
    }
}
