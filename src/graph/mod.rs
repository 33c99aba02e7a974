//! Compact, immutable adjacency storage shared read-only by the engines.
//!
//! Relationships live in compressed sparse rows per loaded direction: an
//! offset array of length `node_count + 1` plus a flat target array, with
//! an optional parallel weight array. The structure holds no per-call
//! mutable state, so one instance may be scanned from many threads at
//! once as long as each scan owns its own scratch.

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::types::{Direction, NodeId, OriginalId};

mod builder;

pub use builder::GraphBuilder;

/// Compressed adjacency for one orientation.
#[derive(Debug)]
pub(crate) struct Adjacency {
    offsets: Vec<usize>,
    targets: Vec<NodeId>,
    weights: Option<Vec<f64>>,
}

impl Adjacency {
    fn neighbors(&self, node: NodeId) -> &[NodeId] {
        &self.targets[self.offsets[node]..self.offsets[node + 1]]
    }

    fn degree(&self, node: NodeId) -> usize {
        self.offsets[node + 1] - self.offsets[node]
    }

    fn weight(&self, slot: usize, default: f64) -> f64 {
        match &self.weights {
            Some(weights) => weights[slot],
            None => default,
        }
    }
}

/// Immutable graph over a dense internal id space.
///
/// Internal ids cover `[0, node_count)` and stay stable for the lifetime
/// of the instance; original ids are whatever the loader supplied.
/// Construction goes through [`GraphBuilder`]; queries for a direction the
/// builder did not load fail with [`Error::DirectionNotLoaded`] so callers
/// can tell "no edges" apart from "wrong direction requested".
pub struct Graph {
    original_ids: Vec<OriginalId>,
    id_map: FxHashMap<OriginalId, NodeId>,
    outgoing: Option<Adjacency>,
    incoming: Option<Adjacency>,
    default_weight: f64,
}

impl Graph {
    pub(crate) fn from_parts(
        original_ids: Vec<OriginalId>,
        id_map: FxHashMap<OriginalId, NodeId>,
        outgoing: Option<Adjacency>,
        incoming: Option<Adjacency>,
        default_weight: f64,
    ) -> Self {
        Self {
            original_ids,
            id_map,
            outgoing,
            incoming,
            default_weight,
        }
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.original_ids.len()
    }

    /// Total number of loaded relationships.
    pub fn relationship_count(&self) -> usize {
        self.outgoing
            .as_ref()
            .or(self.incoming.as_ref())
            .map_or(0, |adjacency| adjacency.targets.len())
    }

    /// True when relationships for `direction` were loaded.
    pub fn has_direction(&self, direction: Direction) -> bool {
        match direction {
            Direction::Outgoing => self.outgoing.is_some(),
            Direction::Incoming => self.incoming.is_some(),
            Direction::Both => self.outgoing.is_some() && self.incoming.is_some(),
        }
    }

    /// Degree of `node` for `direction`; `Both` sums the two orientations,
    /// counting parallel edges on each side.
    pub fn degree(&self, node: NodeId, direction: Direction) -> Result<usize> {
        debug_assert!(node < self.node_count(), "node {node} out of bounds");
        match direction {
            Direction::Outgoing => Ok(self.loaded(Direction::Outgoing, direction)?.degree(node)),
            Direction::Incoming => Ok(self.loaded(Direction::Incoming, direction)?.degree(node)),
            Direction::Both => {
                let out = self.loaded(Direction::Outgoing, direction)?;
                let inc = self.loaded(Direction::Incoming, direction)?;
                Ok(out.degree(node) + inc.degree(node))
            }
        }
    }

    /// Invokes `visitor(source, target)` once per relationship of `node`
    /// in `direction`, in stable load order. The visitor returns `false`
    /// to stop the scan early. For `Both`, outgoing relationships are
    /// visited before incoming ones, and the second argument is always the
    /// far endpoint.
    pub fn for_each_relationship<F>(
        &self,
        node: NodeId,
        direction: Direction,
        mut visitor: F,
    ) -> Result<()>
    where
        F: FnMut(NodeId, NodeId) -> bool,
    {
        self.for_each_relationship_weighted(node, direction, |source, target, _| {
            visitor(source, target)
        })
    }

    /// Weighted variant of [`Graph::for_each_relationship`]. On a graph
    /// loaded without weights every relationship yields the builder's
    /// default weight.
    pub fn for_each_relationship_weighted<F>(
        &self,
        node: NodeId,
        direction: Direction,
        mut visitor: F,
    ) -> Result<()>
    where
        F: FnMut(NodeId, NodeId, f64) -> bool,
    {
        debug_assert!(node < self.node_count(), "node {node} out of bounds");
        match direction {
            Direction::Outgoing | Direction::Incoming => {
                let adjacency = self.loaded(direction, direction)?;
                self.scan(adjacency, node, &mut visitor);
            }
            Direction::Both => {
                let out = self.loaded(Direction::Outgoing, direction)?;
                let inc = self.loaded(Direction::Incoming, direction)?;
                if self.scan(out, node, &mut visitor) {
                    self.scan(inc, node, &mut visitor);
                }
            }
        }
        Ok(())
    }

    /// Internal id for `original`; [`Error::NodeNotFound`] when unmapped.
    pub fn to_mapped_node_id(&self, original: OriginalId) -> Result<NodeId> {
        self.id_map
            .get(&original)
            .copied()
            .ok_or(Error::NodeNotFound(original))
    }

    /// Original id for internal `node`.
    pub fn to_original_node_id(&self, node: NodeId) -> OriginalId {
        self.original_ids[node]
    }

    /// Iterates every internal node id.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        0..self.node_count()
    }

    /// Runs the visitor over one adjacency row; true when it was not cut
    /// short.
    fn scan<F>(&self, adjacency: &Adjacency, node: NodeId, visitor: &mut F) -> bool
    where
        F: FnMut(NodeId, NodeId, f64) -> bool,
    {
        let start = adjacency.offsets[node];
        for (slot, &target) in adjacency.neighbors(node).iter().enumerate() {
            let weight = adjacency.weight(start + slot, self.default_weight);
            if !visitor(node, target, weight) {
                return false;
            }
        }
        true
    }

    fn loaded(&self, orientation: Direction, requested: Direction) -> Result<&Adjacency> {
        let adjacency = match orientation {
            Direction::Outgoing => self.outgoing.as_ref(),
            Direction::Incoming => self.incoming.as_ref(),
            Direction::Both => None,
        };
        adjacency.ok_or(Error::DirectionNotLoaded(requested))
    }
}
