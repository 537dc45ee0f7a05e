//! Bucketization kernel
//!
//! The kernel runs two data-parallel passes per invocation. The first sweeps
//! the whole bins buffer and verifies that every row's edges are strictly
//! increasing; the second classifies every data element by binary search
//! against its own row's edge slice. Both passes are maps over independent
//! index ranges, so the engine may distribute them arbitrarily without
//! changing the numeric result.
//!
//! The only shared mutable state is the monotonicity flag. It is an
//! [`AtomicBool`] written with relaxed ordering: writes only ever transition
//! true to false, so concurrent writers need no coordination, and the flag
//! is read once after the pass has joined.

use crate::contract;
use digitize_core::{
    BucketIndex, Error, ExecutionEngine, Numeric, Result, TensorView, TensorViewMut,
};
use log::debug;
use std::sync::atomic::{AtomicBool, Ordering};

/// Kernel for the batched digitize transform
///
/// Stateless across invocations: each call validates and classifies as one
/// atomic logical step, and all buffers stay owned by the host.
#[derive(Clone, Debug)]
pub struct DigitizeKernel<E: ExecutionEngine> {
    engine: E,
}

impl<E: ExecutionEngine> DigitizeKernel<E> {
    /// Create a new kernel running on the given engine
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Classify every element of `data` against its row's edges in `bins`,
    /// writing bucket indices into `out`.
    ///
    /// Shapes are re-validated on entry (the checks are trivially cheap next
    /// to the passes), then the bins tensor is scanned for monotonicity
    /// before any output is written. With `right = false` a data element
    /// equal to an edge counts as past that edge; with `right = true` it
    /// does not. Every output value lies in `[0, bins_length]`.
    pub fn apply<T, O>(
        &self,
        data: TensorView<'_, T>,
        bins: TensorView<'_, T>,
        mut out: TensorViewMut<'_, O>,
        right: bool,
    ) -> Result<()>
    where
        T: Numeric,
        O: BucketIndex,
    {
        let out_shape = contract::infer_shape(data.shape(), bins.shape())?;
        if out.shape() != out_shape.as_slice() {
            return Err(Error::Shape(format!(
                "output shape {:?} must equal data shape {:?}",
                out.shape(),
                out_shape
            )));
        }

        let batch_size = data.last_dim();
        let bins_length = bins.last_dim();
        debug!(
            "digitize: {} rows, batch_size={batch_size}, bins_length={bins_length}, right={right}",
            data.rows()
        );

        self.check_monotonic(bins.data(), bins_length)?;

        let data_buf = data.data();
        let bins_buf = bins.data();
        self.engine.fill_with(out.data_mut(), |i| {
            let value = data_buf[i];
            let batch_index = i / batch_size;
            let edges = &bins_buf[bins_length * batch_index..bins_length * (batch_index + 1)];

            let cut = if right {
                // First edge not less than the value (lower bound)
                edges.partition_point(|&edge| edge < value)
            } else {
                // First edge strictly greater than the value (upper bound)
                edges.partition_point(|&edge| edge <= value)
            };

            O::from_index(cut)
        });

        Ok(())
    }

    /// Verify that every row of the flattened bins buffer is strictly
    /// increasing.
    ///
    /// One comparison per element, skipping each row's last position so no
    /// comparison crosses a row boundary. Any violating pair anywhere fails
    /// the whole invocation.
    fn check_monotonic<T: Numeric>(&self, bins: &[T], bins_length: usize) -> Result<()> {
        let monotonic = AtomicBool::new(true);

        self.engine.for_each_index(bins.len(), |i| {
            if (i + 1) % bins_length == 0 {
                return;
            }
            if bins[i] >= bins[i + 1] {
                monotonic.store(false, Ordering::Relaxed);
            }
        });

        if monotonic.load(Ordering::Relaxed) {
            Ok(())
        } else {
            Err(Error::NonMonotonicBins)
        }
    }
}
