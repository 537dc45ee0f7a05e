//! Execution engines for controlling computation strategy
//!
//! Both passes of the digitize kernel are embarrassingly parallel maps over
//! independent index ranges, so an execution engine only has to answer one
//! question: how is an index range scheduled? The engine is an explicit
//! argument to the kernel rather than attribute-driven device dispatch, and
//! the numeric result is identical for every engine because no unit of work
//! reads another unit's output.
//!
//! # Design Philosophy
//!
//! - **Unified Control**: one value selects the scheduling strategy
//! - **Thread Pool Integration**: works with the global Rayon pool or a
//!   caller-supplied one
//! - **No blocking**: engines run both passes to completion; there is no
//!   suspension, cancellation, or I/O at this layer

#[cfg(feature = "parallel")]
use crate::error::Result;

/// Execution strategy for the kernel's per-element passes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Process items sequentially on the calling thread
    Sequential,
    /// Process items in parallel
    Parallel,
}

/// Trait for execution engines that control how computations are performed
///
/// An engine schedules two shapes of work:
/// - a read-only sweep over an index range ([`for_each_index`](Self::for_each_index)),
/// - a write pass that fills each slot of an output buffer exactly once
///   ([`fill_with`](Self::fill_with)).
///
/// Implementations may run units of work in any order and on any thread, but
/// must invoke the closure exactly once per index.
pub trait ExecutionEngine: Clone + Send + Sync {
    /// Run `f(i)` for every `i` in `0..count`
    fn for_each_index<F>(&self, count: usize, f: F)
    where
        F: Fn(usize) + Send + Sync;

    /// Fill every slot of `out` with `f(index)`
    ///
    /// Each slot is written by exactly one unit of work, so no
    /// synchronization on the output buffer is required.
    fn fill_with<O, F>(&self, out: &mut [O], f: F)
    where
        O: Send,
        F: Fn(usize) -> O + Send + Sync;

    /// Get the execution strategy
    fn strategy(&self) -> ExecutionStrategy;

    /// Check if parallel execution is available
    fn is_parallel(&self) -> bool {
        matches!(self.strategy(), ExecutionStrategy::Parallel)
    }

    /// Get the number of threads available
    fn num_threads(&self) -> usize;
}

/// Sequential execution engine
///
/// Executes all operations sequentially in the current thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequentialEngine;

impl ExecutionEngine for SequentialEngine {
    fn for_each_index<F>(&self, count: usize, f: F)
    where
        F: Fn(usize) + Send + Sync,
    {
        for i in 0..count {
            f(i);
        }
    }

    fn fill_with<O, F>(&self, out: &mut [O], f: F)
    where
        O: Send,
        F: Fn(usize) -> O + Send + Sync,
    {
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = f(i);
        }
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Sequential
    }

    fn num_threads(&self) -> usize {
        1
    }
}

/// Parallel execution engine using Rayon
///
/// Executes operations in parallel using Rayon's thread pool.
#[cfg(feature = "parallel")]
#[derive(Clone, Debug, Default)]
pub struct ParallelEngine {
    thread_pool: Option<std::sync::Arc<rayon::ThreadPool>>,
}

#[cfg(feature = "parallel")]
impl ParallelEngine {
    /// Create a new parallel engine using the global thread pool
    pub fn new() -> Self {
        Self { thread_pool: None }
    }

    /// Create a new parallel engine with a custom thread pool
    pub fn with_thread_pool(pool: std::sync::Arc<rayon::ThreadPool>) -> Self {
        Self {
            thread_pool: Some(pool),
        }
    }

    /// Create with a specific number of threads
    pub fn with_num_threads(num_threads: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map_err(|e| {
                crate::Error::Execution(format!("Failed to create thread pool: {e}"))
            })?;

        log::debug!("created dedicated thread pool with {num_threads} threads");
        Ok(Self {
            thread_pool: Some(std::sync::Arc::new(pool)),
        })
    }

    fn install<R, F>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        match &self.thread_pool {
            Some(pool) => pool.install(f),
            None => f(),
        }
    }
}

#[cfg(feature = "parallel")]
impl ExecutionEngine for ParallelEngine {
    fn for_each_index<F>(&self, count: usize, f: F)
    where
        F: Fn(usize) + Send + Sync,
    {
        use rayon::prelude::*;

        self.install(|| (0..count).into_par_iter().for_each(|i| f(i)));
    }

    fn fill_with<O, F>(&self, out: &mut [O], f: F)
    where
        O: Send,
        F: Fn(usize) -> O + Send + Sync,
    {
        use rayon::prelude::*;

        self.install(|| {
            out.par_iter_mut()
                .enumerate()
                .for_each(|(i, slot)| *slot = f(i))
        });
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Parallel
    }

    fn num_threads(&self) -> usize {
        match &self.thread_pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }
}

/// Create a sequential engine
pub fn sequential() -> SequentialEngine {
    SequentialEngine
}

/// Create a parallel engine on the global Rayon pool
#[cfg(feature = "parallel")]
pub fn parallel() -> ParallelEngine {
    ParallelEngine::new()
}

/// Create a parallel engine with a dedicated pool of `num_threads` threads
#[cfg(feature = "parallel")]
pub fn parallel_with_num_threads(num_threads: usize) -> Result<ParallelEngine> {
    ParallelEngine::with_num_threads(num_threads)
}

/// Create the best engine available under the enabled features
pub fn auto_engine() -> impl ExecutionEngine {
    #[cfg(feature = "parallel")]
    {
        ParallelEngine::new()
    }
    #[cfg(not(feature = "parallel"))]
    {
        SequentialEngine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_sequential_engine() {
        let engine = sequential();

        // Test for_each_index
        let visited = AtomicUsize::new(0);
        engine.for_each_index(10, |_| {
            visited.fetch_add(1, Ordering::Relaxed);
        });
        assert_eq!(visited.load(Ordering::Relaxed), 10);

        // Test fill_with
        let mut out = vec![0usize; 5];
        engine.fill_with(&mut out, |i| i * i);
        assert_eq!(out, vec![0, 1, 4, 9, 16]);

        assert_eq!(engine.strategy(), ExecutionStrategy::Sequential);
        assert!(!engine.is_parallel());
        assert_eq!(engine.num_threads(), 1);
    }

    #[test]
    fn test_sequential_engine_empty_range() {
        let engine = sequential();
        engine.for_each_index(0, |_| panic!("must not be called"));
        let mut out: Vec<i32> = vec![];
        engine.fill_with(&mut out, |_| panic!("must not be called"));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_engine() {
        let engine = parallel();

        let visited = AtomicUsize::new(0);
        engine.for_each_index(1000, |i| {
            visited.fetch_add(i, Ordering::Relaxed);
        });
        assert_eq!(visited.load(Ordering::Relaxed), 499500);

        let mut out = vec![0usize; 100];
        engine.fill_with(&mut out, |i| i + 1);
        assert!(out.iter().enumerate().all(|(i, &v)| v == i + 1));

        assert_eq!(engine.strategy(), ExecutionStrategy::Parallel);
        assert!(engine.is_parallel());
        assert!(engine.num_threads() > 0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_engine_with_dedicated_pool() {
        let engine = parallel_with_num_threads(2).unwrap();
        assert_eq!(engine.num_threads(), 2);

        let mut out = vec![0usize; 64];
        engine.fill_with(&mut out, |i| i);
        assert!(out.iter().enumerate().all(|(i, &v)| v == i));
    }

    #[test]
    fn test_auto_engine() {
        let engine = auto_engine();
        assert!(engine.num_threads() > 0);

        let mut out = vec![0usize; 8];
        engine.fill_with(&mut out, |i| 2 * i);
        assert_eq!(out, vec![0, 2, 4, 6, 8, 10, 12, 14]);
    }
}
