//! Error taxonomy shared by graph construction and the algorithm engines.

use thiserror::Error;

use crate::types::{Direction, OriginalId};

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced synchronously by `compute()`/`run()` entry points.
///
/// Engines never retry and never return partial progress as success; every
/// failure propagates to the caller of the invocation that hit it.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration or constructor argument was out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Scratch allocation failed; carries the requested entry count.
    #[error("allocation of {requested} entries failed")]
    AllocationFailed {
        /// Entry count the failed reservation asked for.
        requested: usize,
    },
    /// A degree or relationship query named a direction that was never loaded.
    #[error("relationships for direction {0} are not loaded")]
    DirectionNotLoaded(Direction),
    /// An original node id with no internal mapping.
    #[error("node {0} not found")]
    NodeNotFound(OriginalId),
    /// Cooperative cancellation was observed at a safe point.
    #[error("computation terminated")]
    Terminated,
}

/// Allocates a `value`-filled vector, reporting failure as
/// [`Error::AllocationFailed`] instead of aborting.
pub(crate) fn filled_vec<T: Clone>(len: usize, value: T) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailed { requested: len })?;
    buf.resize(len, value);
    Ok(buf)
}
