//! Mode finding over pre-grouped sequences.

use crate::seq::Sequence;

/// Returns the most frequent value(s) of `seq` and their shared
/// frequency, scanning runs of equal adjacent elements.
///
/// The input must already be grouped so that equal elements are
/// contiguous (sorted input qualifies). This function never sorts;
/// ungrouped input yields run-local counts. Two linear passes: the first
/// measures the longest run, the second collects the representative of
/// every run of that length, in the order the runs occur.
///
/// An empty input yields an empty sequence and frequency 0.
///
/// # Example
///
/// ```
/// use plinth_collections::{find_mode, Sequence};
///
/// let grouped: Sequence<i64> = [1, 1, 2, 3, 3, 4].into_iter().collect();
/// let (modes, frequency) = find_mode(&grouped);
///
/// let modes: Vec<i64> = modes.iter().copied().collect();
/// assert_eq!(modes, [1, 3]);
/// assert_eq!(frequency, 2);
/// ```
pub fn find_mode<T: PartialEq + Clone>(seq: &Sequence<T>) -> (Sequence<T>, usize) {
    let len = seq.len();

    let mut frequency = 0;
    let mut i = 0;
    let mut j = 0;
    while j < len {
        while j < len && seq.at(j) == seq.at(i) {
            j += 1;
        }
        frequency = frequency.max(j - i);
        i = j;
    }

    let mut modes = Sequence::new();
    let mut i = 0;
    let mut j = 0;
    while j < len {
        while j < len && seq.at(j) == seq.at(i) {
            j += 1;
        }
        if j - i == frequency {
            modes.append(seq.at(i).clone());
        }
        i = j;
    }

    (modes, frequency)
}
