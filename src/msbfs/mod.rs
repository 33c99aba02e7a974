//! Bit-parallel multi-source breadth-first search.
//!
//! Runs up to 32 traversals at once by packing one lane per bit of a
//! 32-bit mask per node, after "The More the Merrier: Efficient
//! Multi-Source Graph Traversal" (Then et al., VLDB 2015). Converging
//! paths share a single relationship scan per node and depth. Source sets
//! larger than 32 split into independent batches executed in parallel on
//! the shared worker pool; batches never need to merge because each is
//! logically its own traversal.

use rayon::prelude::*;
use smallvec::SmallVec;
use tracing::debug;

use crate::collections::MultiBitSet;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::pool;
use crate::termination::TerminationFlag;
use crate::types::{Direction, NodeId};

/// Number of traversal lanes a single engine instance tracks.
pub const OMEGA: usize = 32;

/// Bit-parallel BFS engine over a shared read-only graph.
pub struct MultiSourceBfs<'g> {
    graph: &'g Graph,
    direction: Direction,
    max_depth: Option<usize>,
}

impl<'g> MultiSourceBfs<'g> {
    /// Creates an engine traversing `direction` relationships of `graph`.
    pub fn new(graph: &'g Graph, direction: Direction) -> Self {
        Self {
            graph,
            direction,
            max_depth: None,
        }
    }

    /// Bounds traversal depth; no lane expands past `depth` levels.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Runs BFS from `sources` (internal ids; duplicates get independent
    /// lanes).
    ///
    /// `on_discover(source, target, depth)` fires once per newly reached
    /// (lane, node) pair, nodes in ascending order within a depth; seeds
    /// count as visited at depth 0 and are not reported. `on_complete
    /// (batch, depth)` fires per batch of up to [`OMEGA`] sources once its
    /// lanes drain or hit the depth bound, with the deepest level at which
    /// the batch discovered anything. Cancellation is polled once per
    /// depth level.
    pub fn run<D, C>(
        &self,
        sources: &[NodeId],
        termination: &TerminationFlag,
        on_discover: D,
        on_complete: C,
    ) -> Result<()>
    where
        D: Fn(NodeId, NodeId, usize) + Sync,
        C: Fn(usize, usize) + Sync,
    {
        if sources.is_empty() {
            return Ok(());
        }
        let node_count = self.graph.node_count();
        if !self.graph.has_direction(self.direction) {
            return Err(Error::DirectionNotLoaded(self.direction));
        }
        if let Some(&bad) = sources.iter().find(|&&source| source >= node_count) {
            return Err(Error::InvalidArgument(format!(
                "source node {bad} exceeds node count {node_count}"
            )));
        }

        if sources.len() <= OMEGA {
            let depth = self.run_batch(sources, termination, &on_discover)?;
            on_complete(0, depth);
            return Ok(());
        }

        let batches: Vec<&[NodeId]> = sources.chunks(OMEGA).collect();
        debug!(
            sources = sources.len(),
            batches = batches.len(),
            "dispatching multi-source BFS batches"
        );
        pool::shared().install(|| {
            batches
                .par_iter()
                .enumerate()
                .try_for_each(|(batch, batch_sources)| {
                    let depth = self.run_batch(batch_sources, termination, &on_discover)?;
                    on_complete(batch, depth);
                    Ok(())
                })
        })
    }

    /// One batch of up to [`OMEGA`] lanes; returns the deepest level at
    /// which a discovery happened.
    fn run_batch<D>(
        &self,
        sources: &[NodeId],
        termination: &TerminationFlag,
        on_discover: &D,
    ) -> Result<usize>
    where
        D: Fn(NodeId, NodeId, usize) + Sync,
    {
        debug_assert!(!sources.is_empty() && sources.len() <= OMEGA);
        let node_count = self.graph.node_count();
        let mut frontier = MultiBitSet::new(node_count)?;
        let mut next = MultiBitSet::new(node_count)?;
        let mut visited = MultiBitSet::new(node_count)?;

        let lanes: SmallVec<[NodeId; OMEGA]> = sources.iter().copied().collect();
        for (lane, &source) in lanes.iter().enumerate() {
            frontier.set_bit(source, lane as u32);
            visited.union(source, 1 << lane);
        }

        let mut depth = 0;
        let mut reached = 0;
        loop {
            termination.check()?;
            if frontier.next_set_node_id(0) == -2 {
                break;
            }
            if let Some(bound) = self.max_depth {
                if depth >= bound {
                    break;
                }
            }
            depth += 1;

            // Expansion: every frontier node ORs its lane mask into each
            // neighbor that none of those lanes visited yet.
            let mut cursor = frontier.next_set_node_id(0);
            while cursor >= 0 {
                let node = cursor as NodeId;
                let mask = frontier.get(node);
                self.graph
                    .for_each_relationship(node, self.direction, |_, target| {
                        let undiscovered = mask & !visited.get(target);
                        if undiscovered != 0 {
                            next.union(target, undiscovered);
                        }
                        true
                    })?;
                cursor = frontier.next_set_node_id(node + 1);
            }

            // Settlement: mark this depth's discoveries visited and report
            // them, one callback per (lane, node) pair.
            let mut cursor = next.next_set_node_id(0);
            while cursor >= 0 {
                let node = cursor as NodeId;
                let fresh = next.get(node) & !visited.get(node);
                next.set(node, fresh);
                if fresh != 0 {
                    visited.union(node, fresh);
                    reached = depth;
                    let mut mask = fresh;
                    while mask != 0 {
                        let lane = mask.trailing_zeros() as usize;
                        mask &= mask - 1;
                        on_discover(lanes[lane], node, depth);
                    }
                }
                cursor = next.next_set_node_id(node + 1);
            }

            frontier.clear();
            std::mem::swap(&mut frontier, &mut next);
        }
        Ok(reached)
    }
}
