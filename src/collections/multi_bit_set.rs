//! 32-bit-wide bit sets, one mask per node.
//!
//! Equivalent to a `Vec` of 32-entry bit sets, stored densely as one `u32`
//! per node. Bit `k` of a node's mask means the node currently sits in
//! traversal lane `k`'s frontier.

use crate::error::{filled_vec, Error, Result};
use crate::types::NodeId;

/// Fixed-width (32 lane) per-node bit masks with a scan-forward operation.
#[derive(Debug)]
pub struct MultiBitSet {
    bits: Vec<u32>,
}

impl MultiBitSet {
    /// Allocates all-clear masks for `node_count` nodes.
    ///
    /// Fails with [`Error::InvalidArgument`] for a zero node count and with
    /// [`Error::AllocationFailed`] when the backing array cannot be
    /// reserved.
    pub fn new(node_count: usize) -> Result<Self> {
        if node_count == 0 {
            return Err(Error::InvalidArgument(
                "node count must be positive".to_string(),
            ));
        }
        Ok(Self {
            bits: filled_vec(node_count, 0u32)?,
        })
    }

    /// Number of per-node masks.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True when the set holds no masks.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Sets lane `bit` (in `[0, 32)`) for `node`.
    #[inline]
    pub fn set_bit(&mut self, node: NodeId, bit: u32) {
        debug_assert!(bit < 32);
        self.bits[node] |= 1 << bit;
    }

    /// Overwrites the whole mask for `node`.
    #[inline]
    pub fn set(&mut self, node: NodeId, mask: u32) {
        self.bits[node] = mask;
    }

    /// ORs `mask` into the existing mask for `node`.
    #[inline]
    pub fn union(&mut self, node: NodeId, mask: u32) {
        self.bits[node] |= mask;
    }

    /// Returns the mask for `node`.
    #[inline]
    pub fn get(&self, node: NodeId) -> u32 {
        self.bits[node]
    }

    /// Clears every mask.
    pub fn clear(&mut self) {
        self.bits.fill(0);
    }

    /// Smallest node id at or after `from` with a nonzero mask; may return
    /// `from` itself.
    ///
    /// Returns `-1` when nothing is set at or after `from`, and `-2` when a
    /// scan from 0 proves every mask clear. The distinction lets a caller
    /// tell "exhausted from here" apart from "nothing was ever seeded".
    pub fn next_set_node_id(&self, from: NodeId) -> i64 {
        for (node, &mask) in self.bits.iter().enumerate().skip(from) {
            if mask != 0 {
                return node as i64;
            }
        }
        if from == 0 {
            -2
        } else {
            -1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_node_count_is_rejected() {
        assert!(matches!(
            MultiBitSet::new(0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn fresh_set_reports_globally_empty() {
        let set = MultiBitSet::new(8).unwrap();
        assert_eq!(set.next_set_node_id(0), -2);
        assert_eq!(set.next_set_node_id(3), -1);
    }

    #[test]
    fn scan_finds_the_set_node_and_distinguishes_sentinels() {
        let mut set = MultiBitSet::new(8).unwrap();
        set.set_bit(3, 5);
        assert_eq!(set.next_set_node_id(0), 3);
        assert_eq!(set.next_set_node_id(3), 3);
        assert_eq!(set.next_set_node_id(4), -1);
        assert_eq!(set.get(3), 1 << 5);
    }

    #[test]
    fn union_and_overwrite() {
        let mut set = MultiBitSet::new(4).unwrap();
        set.set_bit(1, 0);
        set.union(1, 0b1010);
        assert_eq!(set.get(1), 0b1011);
        set.set(1, 0b100);
        assert_eq!(set.get(1), 0b100);
        set.clear();
        assert_eq!(set.next_set_node_id(0), -2);
    }
}
