//! In-memory containers over fixed-capacity storage.
//!
//! This crate builds a small family of structures on top of
//! `plinth-store`'s [`FixedStore`](plinth_store::FixedStore), a
//! preallocated block of slots that never moves or resizes itself. The
//! key discipline: reallocation is an explicit, observable operation
//! owned by the structure, never hidden inside the backing container.
//!
//! ```text
//! FixedStore  - fixed-capacity slots, knows nothing about liveness
//! Sequence    - owns a store plus a logical length; grows and shrinks
//!               by allocating a fresh store and migrating elements
//! MinHeap     - owns a Sequence as its heap array
//! heapsort    - in-place descending sort sharing the heap's sift-down
//! find_mode   - run scan over a pre-grouped Sequence
//! ```
//!
//! Nothing here is shared by reference across a structure boundary:
//! slices are independent copies, and [`MinHeap::build_from`] clones its
//! input so later mutation of either side never reaches the other.
//!
//! # Quick Start
//!
//! ```
//! use plinth_collections::{find_mode, heapsort, MinHeap, Sequence};
//!
//! // A sequence grows by doubling as elements arrive.
//! let mut seq: Sequence<i64> = Sequence::new();
//! for value in [100, 20, 6, 200, 90, 150, 300] {
//!     seq.append(value);
//! }
//!
//! // Heapify a copy and drain it in ascending order.
//! let mut heap = MinHeap::new();
//! heap.build_from(&seq);
//! assert_eq!(heap.extract_min(), Ok(6));
//! assert_eq!(heap.extract_min(), Ok(20));
//!
//! // Or sort the sequence itself, largest first.
//! heapsort(&mut seq);
//! assert_eq!(seq.get(0), Ok(&300));
//!
//! // Mode finding over grouped input.
//! let grouped: Sequence<i64> = [1, 1, 2, 3, 3, 4].into_iter().collect();
//! let (modes, frequency) = find_mode(&grouped);
//! assert_eq!(frequency, 2);
//! assert_eq!(modes.len(), 2);
//! ```
//!
//! # Capacity policy
//!
//! | Event | Trigger | New capacity |
//! |-------|---------|--------------|
//! | grow | `append`/`insert_at` on a full sequence | 2x |
//! | shrink | `remove_at` with capacity > 10 and len < capacity / 4 | max(2 * len, 10) |
//!
//! # Errors
//!
//! Two error types cover every failure: [`IndexError`] for out-of-range
//! index or size arguments (detected before any mutation), and
//! [`EmptyHeapError`] for `peek_min`/`extract_min` on an empty heap.
//! Failures never poison a structure; the failed call leaves it
//! unchanged and usable.

#![warn(missing_docs)]

pub mod error;
pub mod heap;
pub mod mode;
pub mod seq;
pub mod sort;

pub use error::{EmptyHeapError, IndexError};
pub use heap::MinHeap;
pub use mode::find_mode;
pub use seq::{Sequence, INITIAL_CAPACITY};
pub use sort::heapsort;
