//! Scratch data structures backing the algorithm engines.
//!
//! Everything here is exclusively owned by one engine invocation; sharing
//! across threads happens only through the partition-and-barrier pattern
//! the engines implement on top.

/// Indexed binary min-heap with decrease-key support.
pub mod indexed_heap;

/// Fixed-width bit masks tracking up to 32 traversal lanes per node.
pub mod multi_bit_set;

/// Contiguous node-range partitioning for the parallel engines.
pub mod partition;

pub use indexed_heap::IndexedPriorityQueue;
pub use multi_bit_set::MultiBitSet;
