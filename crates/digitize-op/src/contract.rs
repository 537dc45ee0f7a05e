//! Shape and type contract checking
//!
//! These checks run once at graph-build time, before any buffer exists. The
//! host hands over dynamic metadata (shapes as dimension slices, element
//! types as optional descriptors since inference may not have resolved them
//! yet) and gets back either the derived output metadata or a typed failure.
//! Nothing here performs promotion or narrowing: the data and bins operands
//! must already agree.

use digitize_core::{DType, Error, OutputDType, Result};

/// Validate the data/bins shape pair and derive the output shape.
///
/// The output shape is always exactly the data shape. The last dimension of
/// each operand is excluded from the comparison: data's last dimension is
/// the batch lane length, bins' last dimension is the per-row edge count,
/// and the two are independent.
pub fn infer_shape(data_shape: &[usize], bins_shape: &[usize]) -> Result<Vec<usize>> {
    if data_shape.is_empty() {
        return Err(Error::undefined_rank("data"));
    }
    if bins_shape.is_empty() {
        return Err(Error::undefined_rank("bins"));
    }
    if data_shape.len() != bins_shape.len() {
        return Err(Error::rank_mismatch(data_shape.len(), bins_shape.len()));
    }

    let leading = data_shape.len() - 1;
    for (axis, (&data_dim, &bins_dim)) in data_shape[..leading]
        .iter()
        .zip(&bins_shape[..leading])
        .enumerate()
    {
        if data_dim != bins_dim {
            return Err(Error::leading_dim_mismatch(axis, data_dim, bins_dim));
        }
    }

    Ok(data_shape.to_vec())
}

/// Validate the data/bins element types and resolve the output type.
///
/// Both operands must share one numeric type so the search can compare them
/// directly; the output type comes from configuration alone.
pub fn infer_types(
    data: Option<DType>,
    bins: Option<DType>,
    output: Option<OutputDType>,
) -> Result<OutputDType> {
    let data = data.ok_or_else(|| Error::undefined_dtype("data"))?;
    let bins = bins.ok_or_else(|| Error::undefined_dtype("bins"))?;

    if data != bins {
        return Err(Error::dtype_mismatch(data, bins));
    }

    output.ok_or_else(Error::undetermined_output_dtype)
}
