//! Invocation settings handed in by the procedure-binding layer.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pool;

/// Default damping factor for the ranking engine.
pub const DEFAULT_DAMPING_FACTOR: f64 = 0.85;
/// Default number of ranking iterations.
pub const DEFAULT_ITERATIONS: usize = 20;
/// Default minimum partition size, in nodes.
pub const DEFAULT_BATCH_SIZE: usize = 10_000;
/// Default property name the write-back path stores scores under.
pub const DEFAULT_SCORE_PROPERTY: &str = "pagerank";

/// Settings for one algorithm invocation.
///
/// `write` and `write_property` are only inspected by the host to decide
/// whether its writer path runs after `compute()`; persistence itself lives
/// outside the engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProcedureConfig {
    /// Damping factor in the open interval `(0, 1)`.
    pub damping_factor: f64,
    /// Number of synchronized ranking passes to run.
    pub iterations: usize,
    /// Worker count used to size partitions; `0` selects the shared pool
    /// width.
    pub concurrency: usize,
    /// Minimum number of nodes per partition.
    pub batch_size: usize,
    /// Whether the caller intends to write results back.
    pub write: bool,
    /// Property name used by the caller's write-back path.
    pub write_property: String,
}

impl Default for ProcedureConfig {
    fn default() -> Self {
        Self {
            damping_factor: DEFAULT_DAMPING_FACTOR,
            iterations: DEFAULT_ITERATIONS,
            concurrency: 0,
            batch_size: DEFAULT_BATCH_SIZE,
            write: true,
            write_property: DEFAULT_SCORE_PROPERTY.to_string(),
        }
    }
}

impl ProcedureConfig {
    /// Sets the damping factor.
    pub fn with_damping_factor(mut self, damping_factor: f64) -> Self {
        self.damping_factor = damping_factor;
        self
    }

    /// Sets the iteration count.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the concurrency used to size partitions.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Sets the minimum partition size.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Sets the write-back toggle.
    pub fn with_write(mut self, write: bool) -> Self {
        self.write = write;
        self
    }

    /// Sets the write-back property name.
    pub fn with_write_property(mut self, property: impl Into<String>) -> Self {
        self.write_property = property.into();
        self
    }

    /// Concurrency after resolving the `0` default to the shared pool width.
    pub fn effective_concurrency(&self) -> usize {
        if self.concurrency == 0 {
            pool::default_concurrency()
        } else {
            self.concurrency
        }
    }

    /// Fails fast on out-of-range settings; never clamps silently.
    pub fn validate(&self) -> Result<()> {
        if !(self.damping_factor > 0.0 && self.damping_factor < 1.0) {
            return Err(Error::InvalidArgument(format!(
                "damping factor must lie in (0, 1), got {}",
                self.damping_factor
            )));
        }
        if self.batch_size == 0 {
            return Err(Error::InvalidArgument(
                "batch size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
