//! Hoare-style in-place partition over a `Sequence`'s `order` array.

use super::Sequence;

/// Partitions `order` so that every index `i < k` satisfies
/// `predicate(seq, order[i])` and every index `i >= k` does not, where
/// `k` is the returned split point.
///
/// Unstable: relative order within each side of the split is not
/// preserved. `predicate` is called at most once per element of `order`
/// per pass of the two cursors; callers must ensure it's a pure function
/// of the index (the two-cursor scan may call it on the same index more
/// than once across the whole partition if cursors cross back over an
/// element, so purity, not call-count, is the contract).
///
/// # Examples
///
/// ```
/// use swarstr::sequence::partition;
///
/// let data: [&[u8]; 4] = [b"apple", b"banana", b"kiwi", b"fig"];
/// let mut order = [0usize, 1, 2, 3];
/// let split = partition(&data[..], &mut order, |seq, i| seq.get(i).len() <= 4);
/// assert_eq!(split, 2);
/// for &i in &order[..split] {
///     assert!(data[i].len() <= 4);
/// }
/// for &i in &order[split..] {
///     assert!(data[i].len() > 4);
/// }
/// ```
pub fn partition<S, P>(seq: &S, order: &mut [usize], mut predicate: P) -> usize
where
    S: Sequence + ?Sized,
    P: FnMut(&S, usize) -> bool,
{
    if order.is_empty() {
        return 0;
    }

    let mut left = 0isize;
    let mut right = order.len() as isize - 1;
    loop {
        while left <= right && predicate(seq, order[left as usize]) {
            left += 1;
        }
        while left <= right && !predicate(seq, order[right as usize]) {
            right -= 1;
        }
        if left >= right {
            break;
        }
        order.swap(left as usize, right as usize);
        left += 1;
        right -= 1;
    }
    left as usize
}
