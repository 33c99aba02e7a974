//! Identifier aliases and the edge-orientation enum shared across the engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Internal node id: a dense `[0, node_count)` index assigned at load time.
pub type NodeId = usize;

/// Externally meaningful node identifier, e.g. a database record id.
///
/// Original ids need not be dense; the graph keeps a bidirectional mapping
/// between them and internal ids.
pub type OriginalId = u64;

/// Edge orientation a degree or relationship query filters on.
///
/// A graph only answers queries for orientations it was loaded with;
/// anything else fails with [`crate::Error::DirectionNotLoaded`] instead of
/// silently returning empty results.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Follow relationships from source to target.
    Outgoing,
    /// Follow relationships from target to source.
    Incoming,
    /// Follow relationships in both orientations.
    Both,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Outgoing => write!(f, "OUTGOING"),
            Direction::Incoming => write!(f, "INCOMING"),
            Direction::Both => write!(f, "BOTH"),
        }
    }
}
