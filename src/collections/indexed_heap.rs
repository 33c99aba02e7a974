//! Indexed binary min-heap keyed by `f64` cost.
//!
//! A position index per node allows an already-enqueued node's key to be
//! decreased in `O(log n)` instead of re-inserting duplicates. Keys must
//! not be NaN.

use crate::error::{filled_vec, Error, Result};
use crate::types::NodeId;

const ABSENT: usize = usize::MAX;

/// Min-priority queue over node ids with decrease-key support.
#[derive(Debug)]
pub struct IndexedPriorityQueue {
    heap: Vec<NodeId>,
    position: Vec<usize>,
    keys: Vec<f64>,
}

impl IndexedPriorityQueue {
    /// Creates an empty queue able to hold nodes `0..capacity`.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidArgument(
                "queue capacity must be positive".to_string(),
            ));
        }
        Ok(Self {
            heap: Vec::new(),
            position: filled_vec(capacity, ABSENT)?,
            keys: filled_vec(capacity, f64::INFINITY)?,
        })
    }

    /// Number of enqueued nodes.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True when nothing is enqueued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Current key for `node`; infinity when it was never pushed.
    pub fn key(&self, node: NodeId) -> f64 {
        self.keys[node]
    }

    /// Inserts `node` with `key`, or decreases its key when already
    /// enqueued with a larger one. Increase requests are ignored.
    pub fn push(&mut self, node: NodeId, key: f64) {
        if self.position[node] == ABSENT {
            self.keys[node] = key;
            self.position[node] = self.heap.len();
            self.heap.push(node);
            self.sift_up(self.heap.len() - 1);
        } else if key < self.keys[node] {
            self.keys[node] = key;
            self.sift_up(self.position[node]);
        }
    }

    /// Removes and returns the minimum-key node with its key.
    pub fn pop(&mut self) -> Option<(NodeId, f64)> {
        let top = *self.heap.first()?;
        let key = self.keys[top];
        let last = self.heap.pop()?;
        self.position[top] = ABSENT;
        if top != last {
            self.heap[0] = last;
            self.position[last] = 0;
            self.sift_down(0);
        }
        Some((top, key))
    }

    /// Drops every enqueued node, keeping the capacity.
    pub fn clear(&mut self) {
        for &node in &self.heap {
            self.position[node] = ABSENT;
        }
        self.heap.clear();
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.keys[self.heap[slot]] < self.keys[self.heap[parent]] {
                self.swap_slots(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < self.heap.len()
                && self.keys[self.heap[left]] < self.keys[self.heap[smallest]]
            {
                smallest = left;
            }
            if right < self.heap.len()
                && self.keys[self.heap[right]] < self.keys[self.heap[smallest]]
            {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap_slots(slot, smallest);
            slot = smallest;
        }
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a]] = a;
        self.position[self.heap[b]] = b;
    }
}
