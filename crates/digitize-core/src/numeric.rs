//! Generic numeric traits for type-safe bucketization
//!
//! The digitize kernel is generic over two type parameters: the shared
//! element type of the data and bins tensors, and the integer type of the
//! output tensor. Both are drawn from small closed sets; the `DTYPE`
//! constants tie each concrete type back to its dynamic descriptor so the
//! dispatch boundary can convert once and never carry runtime tags into the
//! hot loop.

use crate::dtype::{DType, OutputDType};
use bytemuck::Pod;
use num_traits::Num;
use std::fmt::Debug;

/// Element types usable as data and bin-edge values
///
/// The kernel only compares elements, so ordering is the operative bound;
/// the rest makes the type safe to ship across threads and reinterpret as
/// raw bytes the way host buffers arrive.
pub trait Numeric: Pod + Num + Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// Dynamic descriptor of this element type
    const DTYPE: DType;
}

impl Numeric for u8 {
    const DTYPE: DType = DType::Uint8;
}

impl Numeric for i8 {
    const DTYPE: DType = DType::Int8;
}

impl Numeric for i32 {
    const DTYPE: DType = DType::Int32;
}

impl Numeric for i64 {
    const DTYPE: DType = DType::Int64;
}

impl Numeric for f32 {
    const DTYPE: DType = DType::Float32;
}

impl Numeric for f64 {
    const DTYPE: DType = DType::Float64;
}

/// Integer types usable as bucket indices in the output tensor
pub trait BucketIndex: Pod + Copy + Debug + Send + Sync + 'static {
    /// Dynamic descriptor of this output type
    const DTYPE: OutputDType;

    /// Convert a zero-based insertion point into this output type.
    ///
    /// Truncating cast, matching a plain integer narrowing: an index wider
    /// than the output type wraps rather than saturates.
    fn from_index(index: usize) -> Self;
}

impl BucketIndex for u8 {
    const DTYPE: OutputDType = OutputDType::Uint8;

    fn from_index(index: usize) -> Self {
        index as u8
    }
}

impl BucketIndex for i8 {
    const DTYPE: OutputDType = OutputDType::Int8;

    fn from_index(index: usize) -> Self {
        index as i8
    }
}

impl BucketIndex for i32 {
    const DTYPE: OutputDType = OutputDType::Int32;

    fn from_index(index: usize) -> Self {
        index as i32
    }
}

impl BucketIndex for i64 {
    const DTYPE: OutputDType = OutputDType::Int64;

    fn from_index(index: usize) -> Self {
        index as i64
    }
}
