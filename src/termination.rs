//! Cooperative cancellation shared between a caller and running engines.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{Error, Result};

/// A poll-able cancellation flag.
///
/// Cloning hands out another handle to the same flag, so a caller can keep
/// one handle and pass another into a long-running engine. Engines poll at
/// coarse safe points (once per ranking iteration, once per BFS depth
/// level), never inside per-edge loops.
#[derive(Clone, Debug, Default)]
pub struct TerminationFlag {
    stopped: Arc<AtomicBool>,
}

impl TerminationFlag {
    /// Creates a flag in the running state.
    pub fn new() -> Self {
        Self::default()
    }

    /// True while no cancellation has been requested.
    pub fn running(&self) -> bool {
        !self.stopped.load(Ordering::Relaxed)
    }

    /// Requests cancellation; engines stop at their next safe point and
    /// surface [`Error::Terminated`].
    pub fn terminate(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    /// Fails with [`Error::Terminated`] once cancellation was requested.
    pub fn check(&self) -> Result<()> {
        if self.running() {
            Ok(())
        } else {
            Err(Error::Terminated)
        }
    }
}
