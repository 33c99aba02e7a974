//! Loader-facing construction of the compressed graph.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::types::{Direction, NodeId, OriginalId};

use super::{Adjacency, Graph};

struct Rel {
    source: NodeId,
    target: NodeId,
    weight: f64,
}

/// Accumulates nodes and relationships, then freezes them into a
/// [`Graph`].
///
/// Internal ids are assigned densely in first-seen order, so identical
/// input always produces an identical mapping. Relationship endpoints
/// register themselves; duplicate relationships are kept as parallel
/// edges.
pub struct GraphBuilder {
    load_outgoing: bool,
    load_incoming: bool,
    weighted: bool,
    default_weight: f64,
    original_ids: Vec<OriginalId>,
    id_map: FxHashMap<OriginalId, NodeId>,
    rels: Vec<Rel>,
}

impl GraphBuilder {
    /// Starts a builder that loads relationships for `direction` only.
    pub fn new(direction: Direction) -> Self {
        Self {
            load_outgoing: matches!(direction, Direction::Outgoing | Direction::Both),
            load_incoming: matches!(direction, Direction::Incoming | Direction::Both),
            weighted: false,
            default_weight: 1.0,
            original_ids: Vec::new(),
            id_map: FxHashMap::default(),
            rels: Vec::new(),
        }
    }

    /// Loads relationship weights; `default_weight` fills relationships
    /// added without one and is what unweighted scans report.
    pub fn with_weights(mut self, default_weight: f64) -> Self {
        self.weighted = true;
        self.default_weight = default_weight;
        self
    }

    /// Registers `original` and returns its internal id; repeat calls
    /// reuse the first assignment.
    pub fn add_node(&mut self, original: OriginalId) -> NodeId {
        if let Some(&node) = self.id_map.get(&original) {
            return node;
        }
        let node = self.original_ids.len();
        self.original_ids.push(original);
        self.id_map.insert(original, node);
        node
    }

    /// Adds a directed relationship carrying the default weight.
    pub fn add_relationship(&mut self, source: OriginalId, target: OriginalId) {
        let weight = self.default_weight;
        self.push_rel(source, target, weight);
    }

    /// Adds a directed relationship with an explicit weight, switching the
    /// builder to weighted loading if it was not already.
    pub fn add_relationship_weighted(
        &mut self,
        source: OriginalId,
        target: OriginalId,
        weight: f64,
    ) {
        self.weighted = true;
        self.push_rel(source, target, weight);
    }

    /// Freezes the accumulated topology into an immutable [`Graph`].
    pub fn build(self) -> Graph {
        let node_count = self.original_ids.len();
        let outgoing = self
            .load_outgoing
            .then(|| build_csr(node_count, &self.rels, self.weighted, false));
        let incoming = self
            .load_incoming
            .then(|| build_csr(node_count, &self.rels, self.weighted, true));
        debug!(
            nodes = node_count,
            relationships = self.rels.len(),
            weighted = self.weighted,
            "graph frozen"
        );
        Graph::from_parts(
            self.original_ids,
            self.id_map,
            outgoing,
            incoming,
            self.default_weight,
        )
    }

    fn push_rel(&mut self, source: OriginalId, target: OriginalId, weight: f64) {
        let source = self.add_node(source);
        let target = self.add_node(target);
        self.rels.push(Rel {
            source,
            target,
            weight,
        });
    }
}

/// Counting sort of the relationship list into compressed rows; insertion
/// order is preserved within each row.
fn build_csr(node_count: usize, rels: &[Rel], weighted: bool, reverse: bool) -> Adjacency {
    let endpoints = |rel: &Rel| {
        if reverse {
            (rel.target, rel.source)
        } else {
            (rel.source, rel.target)
        }
    };

    let mut offsets = vec![0usize; node_count + 1];
    for rel in rels {
        let (row, _) = endpoints(rel);
        offsets[row + 1] += 1;
    }
    for node in 0..node_count {
        offsets[node + 1] += offsets[node];
    }

    let mut cursor = offsets.clone();
    let mut targets = vec![0 as NodeId; rels.len()];
    let mut weights = weighted.then(|| vec![0.0f64; rels.len()]);
    for rel in rels {
        let (row, other) = endpoints(rel);
        let slot = cursor[row];
        cursor[row] += 1;
        targets[slot] = other;
        if let Some(weights) = weights.as_mut() {
            weights[slot] = rel.weight;
        }
    }

    Adjacency {
        offsets,
        targets,
        weights,
    }
}
