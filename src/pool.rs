//! Shared worker pool backing the parallel engines.

use std::sync::OnceLock;

use rayon::{ThreadPool, ThreadPoolBuilder};

static SHARED: OnceLock<ThreadPool> = OnceLock::new();

/// Process-wide worker pool used by every algorithm engine.
///
/// Built on first use with one worker per available core. Per-invocation
/// `concurrency` settings size partitions rather than the pool itself, so
/// concurrent engine runs share these workers instead of oversubscribing
/// the machine.
pub fn shared() -> &'static ThreadPool {
    SHARED.get_or_init(|| {
        ThreadPoolBuilder::new()
            .thread_name(|index| format!("umbra-worker-{index}"))
            .build()
            .expect("failed to build shared worker pool")
    })
}

/// Number of workers in the shared pool; the default concurrency for
/// engines invoked without an explicit setting.
pub fn default_concurrency() -> usize {
    shared().current_num_threads()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_is_reused_across_calls() {
        let first = shared() as *const ThreadPool;
        let second = shared() as *const ThreadPool;
        assert_eq!(first, second);
        assert!(default_concurrency() >= 1);
    }
}
