//! In-place heapsort over a sequence.

use crate::heap::sift_down;
use crate::seq::Sequence;

/// Sorts `seq` in place into non-ascending order (largest first).
///
/// The sequence is first heapified bottom-up, then the root (the current
/// minimum) is repeatedly swapped to the shrinking tail and the new root
/// sifted down over the remaining prefix. Placing each extracted minimum
/// at the current tail yields the descending result. Uses O(1)
/// temporaries and never reallocates.
///
/// # Example
///
/// ```
/// use plinth_collections::{heapsort, Sequence};
///
/// let mut seq: Sequence<i64> = [100, 20, 6, 200, 90, 150, 300].into_iter().collect();
/// heapsort(&mut seq);
///
/// let sorted: Vec<i64> = seq.iter().copied().collect();
/// assert_eq!(sorted, [300, 200, 150, 100, 90, 20, 6]);
/// ```
pub fn heapsort<T: Ord>(seq: &mut Sequence<T>) {
    let len = seq.len();
    for parent in (0..len / 2).rev() {
        sift_down(seq, parent, len);
    }
    for k in (0..len).rev() {
        seq.swap_slots(0, k);
        sift_down(seq, 0, k);
    }
}
