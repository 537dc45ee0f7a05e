//! Dynamic dispatch boundary
//!
//! Hosts that drive the operator from graph metadata carry element types as
//! runtime tags. This module is the single point where those tags are
//! converted into concrete type parameters: the tagged unions below pair a
//! typed slice with its shape, and [`digitize_dyn`] matches on them exactly
//! once before handing off to the generic kernel. No runtime tag survives
//! into the per-element passes.

use crate::contract;
use crate::kernel::DigitizeKernel;
use crate::params::DigitizeParams;
use digitize_core::{
    DType, Error, ExecutionEngine, Numeric, OutputDType, Result, TensorView, TensorViewMut,
};

/// Read-only tensor view tagged with its element type
#[derive(Debug, Clone, Copy)]
pub enum DynTensorView<'a> {
    Uint8(TensorView<'a, u8>),
    Int8(TensorView<'a, i8>),
    Int32(TensorView<'a, i32>),
    Int64(TensorView<'a, i64>),
    Float32(TensorView<'a, f32>),
    Float64(TensorView<'a, f64>),
}

impl<'a> DynTensorView<'a> {
    pub fn dtype(&self) -> DType {
        match self {
            Self::Uint8(_) => DType::Uint8,
            Self::Int8(_) => DType::Int8,
            Self::Int32(_) => DType::Int32,
            Self::Int64(_) => DType::Int64,
            Self::Float32(_) => DType::Float32,
            Self::Float64(_) => DType::Float64,
        }
    }

    pub fn shape(&self) -> &'a [usize] {
        match self {
            Self::Uint8(view) => view.shape(),
            Self::Int8(view) => view.shape(),
            Self::Int32(view) => view.shape(),
            Self::Int64(view) => view.shape(),
            Self::Float32(view) => view.shape(),
            Self::Float64(view) => view.shape(),
        }
    }
}

impl<'a> From<TensorView<'a, u8>> for DynTensorView<'a> {
    fn from(view: TensorView<'a, u8>) -> Self {
        Self::Uint8(view)
    }
}

impl<'a> From<TensorView<'a, i8>> for DynTensorView<'a> {
    fn from(view: TensorView<'a, i8>) -> Self {
        Self::Int8(view)
    }
}

impl<'a> From<TensorView<'a, i32>> for DynTensorView<'a> {
    fn from(view: TensorView<'a, i32>) -> Self {
        Self::Int32(view)
    }
}

impl<'a> From<TensorView<'a, i64>> for DynTensorView<'a> {
    fn from(view: TensorView<'a, i64>) -> Self {
        Self::Int64(view)
    }
}

impl<'a> From<TensorView<'a, f32>> for DynTensorView<'a> {
    fn from(view: TensorView<'a, f32>) -> Self {
        Self::Float32(view)
    }
}

impl<'a> From<TensorView<'a, f64>> for DynTensorView<'a> {
    fn from(view: TensorView<'a, f64>) -> Self {
        Self::Float64(view)
    }
}

/// Mutable output tensor view tagged with its element type
#[derive(Debug)]
pub enum DynTensorViewMut<'a> {
    Uint8(TensorViewMut<'a, u8>),
    Int8(TensorViewMut<'a, i8>),
    Int32(TensorViewMut<'a, i32>),
    Int64(TensorViewMut<'a, i64>),
}

impl<'a> DynTensorViewMut<'a> {
    pub fn dtype(&self) -> OutputDType {
        match self {
            Self::Uint8(_) => OutputDType::Uint8,
            Self::Int8(_) => OutputDType::Int8,
            Self::Int32(_) => OutputDType::Int32,
            Self::Int64(_) => OutputDType::Int64,
        }
    }

    pub fn shape(&self) -> &'a [usize] {
        match self {
            Self::Uint8(view) => view.shape(),
            Self::Int8(view) => view.shape(),
            Self::Int32(view) => view.shape(),
            Self::Int64(view) => view.shape(),
        }
    }
}

impl<'a> From<TensorViewMut<'a, u8>> for DynTensorViewMut<'a> {
    fn from(view: TensorViewMut<'a, u8>) -> Self {
        Self::Uint8(view)
    }
}

impl<'a> From<TensorViewMut<'a, i8>> for DynTensorViewMut<'a> {
    fn from(view: TensorViewMut<'a, i8>) -> Self {
        Self::Int8(view)
    }
}

impl<'a> From<TensorViewMut<'a, i32>> for DynTensorViewMut<'a> {
    fn from(view: TensorViewMut<'a, i32>) -> Self {
        Self::Int32(view)
    }
}

impl<'a> From<TensorViewMut<'a, i64>> for DynTensorViewMut<'a> {
    fn from(view: TensorViewMut<'a, i64>) -> Self {
        Self::Int64(view)
    }
}

fn apply_typed<T, E>(
    data: TensorView<'_, T>,
    bins: TensorView<'_, T>,
    out: DynTensorViewMut<'_>,
    right: bool,
    engine: &E,
) -> Result<()>
where
    T: Numeric,
    E: ExecutionEngine,
{
    let kernel = DigitizeKernel::new(engine.clone());
    match out {
        DynTensorViewMut::Uint8(view) => kernel.apply(data, bins, view, right),
        DynTensorViewMut::Int8(view) => kernel.apply(data, bins, view, right),
        DynTensorViewMut::Int32(view) => kernel.apply(data, bins, view, right),
        DynTensorViewMut::Int64(view) => kernel.apply(data, bins, view, right),
    }
}

/// Run the digitize transform on runtime-tagged tensors.
///
/// The type contract is checked first, before any element is read: the data
/// and bins tags must match, and the output tag must agree with the
/// configured output type. The match below then converts into the generic
/// kernel call.
pub fn digitize_dyn<E: ExecutionEngine>(
    data: DynTensorView<'_>,
    bins: DynTensorView<'_>,
    out: DynTensorViewMut<'_>,
    params: &DigitizeParams,
    engine: &E,
) -> Result<()> {
    let resolved = contract::infer_types(
        Some(data.dtype()),
        Some(bins.dtype()),
        Some(params.output_dtype),
    )?;
    if out.dtype() != resolved {
        return Err(Error::output_dtype_mismatch(out.dtype(), resolved));
    }

    use DynTensorView as V;
    match (data, bins) {
        (V::Uint8(d), V::Uint8(b)) => apply_typed(d, b, out, params.right, engine),
        (V::Int8(d), V::Int8(b)) => apply_typed(d, b, out, params.right, engine),
        (V::Int32(d), V::Int32(b)) => apply_typed(d, b, out, params.right, engine),
        (V::Int64(d), V::Int64(b)) => apply_typed(d, b, out, params.right, engine),
        (V::Float32(d), V::Float32(b)) => apply_typed(d, b, out, params.right, engine),
        (V::Float64(d), V::Float64(b)) => apply_typed(d, b, out, params.right, engine),
        // Unreachable after infer_types, kept so the match stays total
        (d, b) => Err(Error::dtype_mismatch(d.dtype(), b.dtype())),
    }
}
