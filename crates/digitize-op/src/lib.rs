//! Batched digitize (bucketization) operator
//!
//! Given a batched numeric data tensor and, for each batch row, a strictly
//! monotonically increasing vector of bin edges, the digitize transform
//! replaces every data element with the index of the bin it falls into. The
//! last axis of the data tensor is the batch lane; all leading axes index
//! independent rows, each classified against its own edge vector from the
//! bins tensor. Output indices lie in `[0, bins_length]`: 0 means "before
//! all edges", `bins_length` means "after all edges".
//!
//! The crate splits the work the way a dataflow host consumes it:
//!
//! - [`contract`] validates shapes and element types once at graph-build
//!   time and derives the output metadata.
//! - [`DigitizeKernel`] verifies per-row edge monotonicity, then classifies
//!   every element by binary search. It runs once per execution step over
//!   host-owned buffers and never allocates.
//! - [`digitize_dyn`] is the runtime-tagged boundary for hosts that carry
//!   element types as metadata; [`digitize`] is the statically typed path.
//!
//! # Examples
//!
//! ## Single row
//!
//! ```rust
//! use digitize_core::{sequential, TensorView, TensorViewMut};
//! use digitize_op::{digitize, DigitizeParams};
//!
//! let data = [1.0_f64, 5.0, 9.0];
//! let edges = [2.0_f64, 4.0, 6.0, 8.0];
//! let mut out = [0_i32; 3];
//!
//! digitize(
//!     TensorView::new(&[3], &data).unwrap(),
//!     TensorView::new(&[4], &edges).unwrap(),
//!     TensorViewMut::new(&[3], &mut out).unwrap(),
//!     &DigitizeParams::default(),
//!     &sequential(),
//! )
//! .unwrap();
//!
//! assert_eq!(out, [0, 2, 4]);
//! ```
//!
//! ## Batched rows with per-row edges
//!
//! ```rust
//! use digitize_core::{sequential, TensorView, TensorViewMut};
//! use digitize_op::{digitize, DigitizeParams};
//!
//! // Two rows of three elements, each row with its own four edges
//! let data = [1.0_f64, 5.0, 9.0, 0.0, 10.0, 20.0];
//! let edges = [2.0_f64, 4.0, 6.0, 8.0, 5.0, 15.0, 25.0, 35.0];
//! let mut out = [0_i32; 6];
//!
//! digitize(
//!     TensorView::new(&[2, 3], &data).unwrap(),
//!     TensorView::new(&[2, 4], &edges).unwrap(),
//!     TensorViewMut::new(&[2, 3], &mut out).unwrap(),
//!     &DigitizeParams::default(),
//!     &sequential(),
//! )
//! .unwrap();
//!
//! assert_eq!(out, [0, 2, 4, 0, 1, 2]);
//! ```

pub mod contract;
pub mod dispatch;
pub mod kernel;
pub mod params;

// Re-export main types
pub use dispatch::{digitize_dyn, DynTensorView, DynTensorViewMut};
pub use kernel::DigitizeKernel;
pub use params::DigitizeParams;

pub use digitize_core::{Error, Result};

use digitize_core::{BucketIndex, ExecutionEngine, Numeric, TensorView, TensorViewMut};

/// Run the digitize transform on statically typed tensors.
///
/// Runs the shape/type contract, then the kernel, as one invocation. The
/// output element type is chosen by the caller through `O` and must agree
/// with the configured `output_dtype`.
pub fn digitize<T, O, E>(
    data: TensorView<'_, T>,
    bins: TensorView<'_, T>,
    out: TensorViewMut<'_, O>,
    params: &DigitizeParams,
    engine: &E,
) -> Result<()>
where
    T: Numeric,
    O: BucketIndex,
    E: ExecutionEngine,
{
    let resolved = contract::infer_types(
        Some(T::DTYPE),
        Some(T::DTYPE),
        Some(params.output_dtype),
    )?;
    if O::DTYPE != resolved {
        return Err(Error::output_dtype_mismatch(O::DTYPE, resolved));
    }

    DigitizeKernel::new(engine.clone()).apply(data, bins, out, params.right)
}
