//! Borrowed tensor views over host-owned buffers
//!
//! The host collaborator allocates and owns every buffer; these views pair a
//! shape with a flat, contiguous, row-major slice for the duration of one
//! invocation. Construction verifies that the buffer length matches the
//! shape product, which is the only layout invariant the kernel relies on.
//! Rank and dimension compatibility between tensors is a contract-checking
//! concern, not a view concern.

use crate::error::{Error, Result};

fn element_count(shape: &[usize]) -> usize {
    shape.iter().product()
}

/// Read-only N-dimensional view: a shape plus a flat row-major slice
///
/// The last axis is the batch lane; all leading axes index independent rows.
#[derive(Debug, Clone, Copy)]
pub struct TensorView<'a, T> {
    shape: &'a [usize],
    data: &'a [T],
}

impl<'a, T> TensorView<'a, T> {
    /// Create a view, verifying the buffer length against the shape product.
    pub fn new(shape: &'a [usize], data: &'a [T]) -> Result<Self> {
        let expected = element_count(shape);
        if expected != data.len() {
            return Err(Error::buffer_len_mismatch(expected, data.len(), "tensor view"));
        }
        Ok(Self { shape, data })
    }

    pub fn shape(&self) -> &'a [usize] {
        self.shape
    }

    pub fn data(&self) -> &'a [T] {
        self.data
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Length of the trailing axis, 0 for a rank-0 view
    pub fn last_dim(&self) -> usize {
        self.shape.last().copied().unwrap_or(0)
    }

    /// Every axis except the trailing one
    pub fn leading_dims(&self) -> &'a [usize] {
        &self.shape[..self.shape.len().saturating_sub(1)]
    }

    /// Number of independent rows (product of the leading dimensions)
    pub fn rows(&self) -> usize {
        element_count(self.leading_dims())
    }
}

/// Mutable N-dimensional view with the same layout contract as [`TensorView`]
#[derive(Debug)]
pub struct TensorViewMut<'a, T> {
    shape: &'a [usize],
    data: &'a mut [T],
}

impl<'a, T> TensorViewMut<'a, T> {
    /// Create a mutable view, verifying the buffer length against the shape
    /// product.
    pub fn new(shape: &'a [usize], data: &'a mut [T]) -> Result<Self> {
        let expected = element_count(shape);
        if expected != data.len() {
            return Err(Error::buffer_len_mismatch(expected, data.len(), "tensor view"));
        }
        Ok(Self { shape, data })
    }

    pub fn shape(&self) -> &'a [usize] {
        self.shape
    }

    pub fn data(&self) -> &[T] {
        self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        self.data
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Length of the trailing axis, 0 for a rank-0 view
    pub fn last_dim(&self) -> usize {
        self.shape.last().copied().unwrap_or(0)
    }
}
