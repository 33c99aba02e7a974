//! Single-source shortest paths over non-negative weights.

use serde::Serialize;
use tracing::debug;

use crate::collections::IndexedPriorityQueue;
use crate::error::{filled_vec, Result};
use crate::graph::Graph;
use crate::types::{Direction, NodeId, OriginalId};

const NO_PREDECESSOR: i64 = -1;

/// Path produced by [`ShortestPathDijkstra::compute`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShortestPath {
    /// Original node ids from start to goal, inclusive.
    ///
    /// When the goal is unreachable the predecessor chase stops early, so
    /// the first element is not the requested start node; that mismatch is
    /// the unreachability signal.
    pub nodes: Vec<OriginalId>,
    /// Total cost of the path; infinite when the goal was never reached.
    pub cost: f64,
}

impl ShortestPath {
    /// True when the path actually begins at `start`.
    pub fn reaches_from(&self, start: OriginalId) -> bool {
        self.nodes.first() == Some(&start)
    }
}

/// Dijkstra engine over a shared read-only graph.
///
/// Edge weights must be non-negative; behavior under negative weights is
/// unspecified. Each invocation owns its scratch, so independent
/// invocations may run concurrently on the same graph.
pub struct ShortestPathDijkstra<'g> {
    graph: &'g Graph,
}

impl<'g> ShortestPathDijkstra<'g> {
    /// Creates an engine borrowing `graph` read-only.
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// Computes the cheapest path from `start` to `goal` (original ids),
    /// stopping as soon as the goal is finalized.
    pub fn compute(&self, start: OriginalId, goal: OriginalId) -> Result<ShortestPath> {
        let node_count = self.graph.node_count();
        let start_node = self.graph.to_mapped_node_id(start)?;
        let goal_node = self.graph.to_mapped_node_id(goal)?;

        let mut costs = filled_vec(node_count, f64::INFINITY)?;
        let mut predecessor = filled_vec(node_count, NO_PREDECESSOR)?;
        let mut visited = filled_vec(node_count, false)?;
        let mut queue = IndexedPriorityQueue::new(node_count)?;

        costs[start_node] = 0.0;
        queue.push(start_node, 0.0);

        while let Some((node, cost)) = queue.pop() {
            if node == goal_node {
                break;
            }
            visited[node] = true;
            self.graph
                .for_each_relationship_weighted(node, Direction::Outgoing, |source, target, weight| {
                    let new_cost = cost + weight;
                    if new_cost < costs[target] {
                        costs[target] = new_cost;
                        predecessor[target] = source as i64;
                        if !visited[target] {
                            queue.push(target, new_cost);
                        }
                    }
                    true
                })?;
        }

        let mut nodes = Vec::new();
        let mut last = goal_node as i64;
        while last != NO_PREDECESSOR {
            nodes.push(self.graph.to_original_node_id(last as NodeId));
            last = predecessor[last as usize];
        }
        nodes.reverse();

        let cost = costs[goal_node];
        debug!(start, goal, hops = nodes.len(), cost, "shortest path computed");
        Ok(ShortestPath { nodes, cost })
    }
}
