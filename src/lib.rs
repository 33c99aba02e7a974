//! Compact in-memory graph analytics.
//!
//! A compressed, immutable, random-access graph representation plus a
//! small set of traversal engines that share one worker pool:
//!
//! - [`PageRank`]: damped, degree-normalized iterative ranking over
//!   partitioned node ranges with a barrier between iterations.
//! - [`ShortestPathDijkstra`]: single-source shortest path with an
//!   indexed decrease-key priority queue.
//! - [`MultiSourceBfs`]: bit-parallel breadth-first search tracking up to
//!   32 sources per pass.
//!
//! A [`Graph`] is built once through [`GraphBuilder`], handed read-only to
//! one engine per invocation, and released independently of the results
//! the engines produce. Long-running engines poll a [`TerminationFlag`]
//! at coarse safe points.

#![warn(missing_docs)]

pub mod collections;
pub mod config;
pub mod error;
pub mod graph;
pub mod msbfs;
pub mod pagerank;
pub mod pool;
pub mod shortest_path;
pub mod termination;
pub mod types;

pub use config::ProcedureConfig;
pub use error::{Error, Result};
pub use graph::{Graph, GraphBuilder};
pub use msbfs::MultiSourceBfs;
pub use pagerank::{PageRank, PageRankScores};
pub use shortest_path::{ShortestPath, ShortestPathDijkstra};
pub use termination::TerminationFlag;
pub use types::{Direction, NodeId, OriginalId};
