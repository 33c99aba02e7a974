//! Degree-normalized iterative ranking over the shared worker pool.
//!
//! The node-id space is partitioned into contiguous ranges. Each iteration
//! runs a scatter phase where every partition worker accumulates outbound
//! contributions into its own buffer, a join barrier, and an update phase
//! over disjoint score ranges. No worker reads another worker's buffer
//! before the barrier, and buffers are summed in a fixed order, so two
//! runs with identical inputs produce bit-identical scores.
//!
//! Dangling nodes (zero out-degree) forward nothing; their mass leaks out
//! of the distribution rather than being redistributed, so score sums fall
//! below 1.0 on graphs that have them.

use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::collections::partition::{adjusted_batch_size, partitions};
use crate::config::ProcedureConfig;
use crate::error::{filled_vec, Result};
use crate::graph::Graph;
use crate::pool;
use crate::termination::TerminationFlag;
use crate::types::{Direction, NodeId};

/// Dense ranking scores, owned independently of the graph that produced
/// them; the graph may be released while a result is still read.
#[derive(Clone, Debug, Serialize)]
pub struct PageRankScores {
    scores: Vec<f64>,
}

impl PageRankScores {
    /// Score for an internal node id.
    pub fn score(&self, node: NodeId) -> f64 {
        self.scores[node]
    }

    /// Number of scored nodes.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True when the graph had no nodes.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Dense array fast path for bulk writers.
    pub fn as_slice(&self) -> &[f64] {
        &self.scores
    }

    /// Lazy per-node sequence for exporters without array semantics.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.scores.iter().copied().enumerate()
    }

    /// Consumes the result into its backing array.
    pub fn into_vec(self) -> Vec<f64> {
        self.scores
    }
}

/// Damped, degree-normalized ranking engine.
pub struct PageRank<'g> {
    graph: &'g Graph,
    damping_factor: f64,
    batch_size: usize,
    concurrency: usize,
}

impl<'g> PageRank<'g> {
    /// Creates an engine from procedure configuration, failing fast on
    /// out-of-range settings.
    pub fn new(graph: &'g Graph, config: &ProcedureConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            graph,
            damping_factor: config.damping_factor,
            batch_size: config.batch_size,
            concurrency: config.effective_concurrency(),
        })
    }

    /// Runs exactly `iterations` synchronized passes and returns the
    /// scores; `0` iterations yields the uniform initial distribution.
    ///
    /// Cancellation is polled once per iteration; a cancelled run drops
    /// its scratch and surfaces [`crate::Error::Terminated`] instead of a
    /// partial result.
    pub fn compute(
        &self,
        iterations: usize,
        termination: &TerminationFlag,
    ) -> Result<PageRankScores> {
        let node_count = self.graph.node_count();
        if node_count == 0 {
            return Ok(PageRankScores { scores: Vec::new() });
        }

        let out_degrees: Vec<usize> = self
            .graph
            .node_ids()
            .map(|node| self.graph.degree(node, Direction::Outgoing))
            .collect::<Result<_>>()?;

        let batch = adjusted_batch_size(node_count, self.concurrency, self.batch_size);
        let ranges = partitions(node_count, batch);
        debug!(
            nodes = node_count,
            partitions = ranges.len(),
            damping = self.damping_factor,
            iterations,
            "computing page rank"
        );

        let initial = 1.0 / node_count as f64;
        let mut scores = filled_vec(node_count, initial)?;
        if iterations == 0 {
            return Ok(PageRankScores { scores });
        }

        let mut next_scores = filled_vec(node_count, 0.0f64)?;
        let mut buffers: Vec<Vec<f64>> = ranges
            .iter()
            .map(|_| filled_vec(node_count, 0.0f64))
            .collect::<Result<_>>()?;

        let damping = self.damping_factor;
        let base = (1.0 - damping) / node_count as f64;
        let started = Instant::now();

        pool::shared().install(|| -> Result<()> {
            for _ in 0..iterations {
                termination.check()?;

                // Scatter: each partition accumulates its nodes' outbound
                // contributions into its own buffer. Dangling nodes
                // forward nothing.
                ranges
                    .par_iter()
                    .zip(buffers.par_iter_mut())
                    .try_for_each(|(range, buffer)| -> Result<()> {
                        buffer.fill(0.0);
                        for node in range.clone() {
                            let degree = out_degrees[node];
                            if degree == 0 {
                                continue;
                            }
                            let contribution = scores[node] / degree as f64;
                            self.graph.for_each_relationship(
                                node,
                                Direction::Outgoing,
                                |_, target| {
                                    buffer[target] += contribution;
                                    true
                                },
                            )?;
                        }
                        Ok(())
                    })?;

                // Barrier reached: every buffer is complete. Update phase
                // writes disjoint score ranges, summing buffers in fixed
                // partition order.
                next_scores
                    .par_chunks_mut(batch)
                    .enumerate()
                    .for_each(|(chunk, out)| {
                        let offset = chunk * batch;
                        for (index, slot) in out.iter_mut().enumerate() {
                            let node = offset + index;
                            let mut incoming = 0.0;
                            for buffer in &buffers {
                                incoming += buffer[node];
                            }
                            *slot = base + damping * incoming;
                        }
                    });

                std::mem::swap(&mut scores, &mut next_scores);
            }
            Ok(())
        })?;

        debug!(
            compute_millis = started.elapsed().as_millis() as u64,
            "page rank finished"
        );
        Ok(PageRankScores { scores })
    }
}
