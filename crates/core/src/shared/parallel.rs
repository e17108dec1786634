use std::num::NonZeroUsize;

use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

/// Policy controlling how many concurrent workers execute an effect's
/// row loop.
///
/// The default policy runs on the process-wide rayon pool;
/// [`ParallelOptions::with_max_workers`] builds a dedicated pool bounded
/// to the requested thread count. Effects take the policy as an opaque
/// read-only dependency and stay free of thread-management code.
pub struct ParallelOptions {
    pool: Option<ThreadPool>,
}

impl ParallelOptions {
    /// Uses the process-wide worker pool.
    pub fn new() -> Self {
        Self { pool: None }
    }

    /// Builds a dedicated pool bounded to `max_workers` threads.
    pub fn with_max_workers(max_workers: NonZeroUsize) -> Result<Self, ThreadPoolBuildError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(max_workers.get())
            .build()?;
        Ok(Self { pool: Some(pool) })
    }

    /// The number of workers this policy schedules onto.
    pub fn max_workers(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    /// Runs a fork-join computation under this policy, blocking until it
    /// completes.
    pub fn run<R, F>(&self, op: F) -> R
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }
}

impl Default for ParallelOptions {
    fn default() -> Self {
        Self::new()
    }
}
