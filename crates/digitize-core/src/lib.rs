//! Core traits and types for batched bucketization
//!
//! This crate provides the foundation that the digitize operator crates build
//! on: a closed element-type vocabulary, borrowed tensor views over
//! host-owned buffers, and execution engines that control how the per-element
//! passes are scheduled.
//!
//! # Design Philosophy
//!
//! - **Host owns the memory**: tensor views only borrow; nothing here
//!   allocates or resizes a buffer
//! - **Closed type set**: element types are a small fixed vocabulary so the
//!   dispatch boundary stays a single match
//! - **Explicit execution strategy**: callers pick sequential or parallel
//!   scheduling by value, not through global state
//!
//! # Example
//!
//! ```rust
//! use digitize_core::{sequential, ExecutionEngine, TensorView};
//!
//! let engine = sequential();
//! let shape = [2, 3];
//! let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let view = TensorView::new(&shape, &data).unwrap();
//!
//! let mut doubled = vec![0.0; view.len()];
//! engine.fill_with(&mut doubled, |i| view.data()[i] * 2.0);
//! assert_eq!(doubled, vec![2.0, 4.0, 6.0, 8.0, 10.0, 12.0]);
//! ```

pub mod dtype;
pub mod error;
pub mod execution;
pub mod numeric;
pub mod tensor;

// Re-export core types
pub use dtype::{DType, OutputDType};
pub use error::{Error, Result};

pub use execution::{
    auto_engine, sequential, ExecutionEngine, ExecutionStrategy, SequentialEngine,
};
#[cfg(feature = "parallel")]
pub use execution::{parallel, parallel_with_num_threads, ParallelEngine};

pub use numeric::{BucketIndex, Numeric};
pub use tensor::{TensorView, TensorViewMut};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        sequential, BucketIndex, DType, Error, ExecutionEngine, ExecutionStrategy, Numeric,
        OutputDType, Result, SequentialEngine, TensorView, TensorViewMut,
    };

    #[cfg(feature = "parallel")]
    pub use crate::{parallel, ParallelEngine};
}
