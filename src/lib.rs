//! Batched digitize (bucketization) transform
//!
//! This crate bundles the `digitize-*` workspace crates behind a single
//! dependency. Given a batched numeric data tensor and, per batch row, a
//! strictly increasing vector of bin edges, the digitize transform replaces
//! every data element with the index of the bin it falls into.
//!
//! # Example
//!
//! ```rust
//! use digitize::{digitize, sequential, DigitizeParams, TensorView, TensorViewMut};
//!
//! let data = [1.0_f64, 5.0, 9.0];
//! let edges = [2.0_f64, 4.0, 6.0, 8.0];
//! let mut out = [0_i32; 3];
//!
//! let data_view = TensorView::new(&[3], &data).unwrap();
//! let bins_view = TensorView::new(&[4], &edges).unwrap();
//! let out_view = TensorViewMut::new(&[3], &mut out).unwrap();
//!
//! digitize(
//!     data_view,
//!     bins_view,
//!     out_view,
//!     &DigitizeParams::default(),
//!     &sequential(),
//! )
//! .unwrap();
//!
//! assert_eq!(out, [0, 2, 4]);
//! ```

pub use digitize_core::{
    auto_engine, sequential, BucketIndex, DType, Error, ExecutionEngine, ExecutionStrategy,
    Numeric, OutputDType, Result, SequentialEngine, TensorView, TensorViewMut,
};

pub use digitize_core::{parallel, parallel_with_num_threads, ParallelEngine};

pub use digitize_op::{
    contract, digitize, digitize_dyn, DigitizeKernel, DigitizeParams, DynTensorView,
    DynTensorViewMut,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
