//! Error types for the digitize transform
//!
//! Provides a unified error type for all digitize crates. Every failure is
//! local, synchronous, and fatal to the invocation: there is no retry path
//! and no partial output.

use crate::dtype::{DType, OutputDType};
use thiserror::Error;

/// Core error type for digitize operations
#[derive(Error, Debug)]
pub enum Error {
    /// Rank or dimension mismatch between the data and bins tensors
    #[error("Shape error: {0}")]
    Shape(String),

    /// Undefined or mismatched element types
    #[error("Type error: {0}")]
    Type(String),

    /// A tensor view whose buffer length does not match its shape
    #[error("Layout error: {0}")]
    Layout(String),

    /// At least one row's bin edges are not strictly increasing
    #[error("bins vector is not strictly monotonic and increasing")]
    NonMonotonicBins,

    /// Threading or parallelization error
    #[error("Execution error: {0}")]
    Execution(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for an operand with no defined shape (rank 0)
    pub fn undefined_rank(operand: &str) -> Self {
        Self::Shape(format!("{operand} shape undefined"))
    }

    /// Create an error for a data/bins rank mismatch
    pub fn rank_mismatch(data_rank: usize, bins_rank: usize) -> Self {
        Self::Shape(format!(
            "bins tensor must have the same number of dimensions as the input data: \
             data has {data_rank}, bins has {bins_rank}"
        ))
    }

    /// Create an error for a mismatched leading dimension
    pub fn leading_dim_mismatch(axis: usize, data_dim: usize, bins_dim: usize) -> Self {
        Self::Shape(format!(
            "first N-1 dimensions of the data and bins tensors must be the same: \
             axis {axis} is {data_dim} for data but {bins_dim} for bins"
        ))
    }

    /// Create an error for an operand with no defined element type
    pub fn undefined_dtype(operand: &str) -> Self {
        Self::Type(format!("{operand} element type undefined"))
    }

    /// Create an error for mismatched data/bins element types
    pub fn dtype_mismatch(data: DType, bins: DType) -> Self {
        Self::Type(format!(
            "data and bins must share an element type: data is {data}, bins is {bins}"
        ))
    }

    /// Create an error for an unresolved output type configuration
    pub fn undetermined_output_dtype() -> Self {
        Self::Type("output element type undetermined".to_string())
    }

    /// Create an error for an output buffer whose element type disagrees
    /// with the configured output type
    pub fn output_dtype_mismatch(buffer: OutputDType, configured: OutputDType) -> Self {
        Self::Type(format!(
            "output buffer element type {buffer} does not match configured output type {configured}"
        ))
    }

    /// Create an error for a buffer whose length disagrees with its shape
    pub fn buffer_len_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::Layout(format!(
            "buffer length mismatch in {context}: shape implies {expected} elements, \
             buffer holds {actual}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Shape("rank 0".to_string());
        assert_eq!(err.to_string(), "Shape error: rank 0");

        let err = Error::Type("float32 vs int32".to_string());
        assert_eq!(err.to_string(), "Type error: float32 vs int32");

        let err = Error::Layout("short buffer".to_string());
        assert_eq!(err.to_string(), "Layout error: short buffer");

        let err = Error::NonMonotonicBins;
        assert_eq!(
            err.to_string(),
            "bins vector is not strictly monotonic and increasing"
        );

        let err = Error::Execution("thread pool exhausted".to_string());
        assert_eq!(err.to_string(), "Execution error: thread pool exhausted");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::undefined_rank("data");
        assert_eq!(err.to_string(), "Shape error: data shape undefined");

        let err = Error::rank_mismatch(3, 2);
        assert!(err.to_string().contains("data has 3, bins has 2"));

        let err = Error::leading_dim_mismatch(1, 4, 5);
        assert!(err.to_string().contains("axis 1 is 4 for data but 5 for bins"));

        let err = Error::undefined_dtype("bins");
        assert_eq!(err.to_string(), "Type error: bins element type undefined");

        let err = Error::dtype_mismatch(DType::Float64, DType::Float32);
        assert!(err.to_string().contains("data is float64, bins is float32"));

        let err = Error::undetermined_output_dtype();
        assert_eq!(err.to_string(), "Type error: output element type undetermined");

        let err = Error::output_dtype_mismatch(OutputDType::Int64, OutputDType::Int32);
        assert!(err.to_string().contains("int64"));
        assert!(err.to_string().contains("int32"));

        let err = Error::buffer_len_mismatch(6, 4, "tensor view");
        assert!(err
            .to_string()
            .contains("shape implies 6 elements, buffer holds 4"));
    }

    #[test]
    fn test_result_type_alias() {
        fn test_function(succeed: bool) -> Result<i32> {
            if succeed {
                Ok(42)
            } else {
                Err(Error::NonMonotonicBins)
            }
        }

        assert_eq!(test_function(true).unwrap(), 42);
        assert!(test_function(false).is_err());
    }

    #[test]
    fn test_error_debug_impl() {
        let err = Error::Shape("test".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Shape"));
        assert!(debug_str.contains("test"));
    }
}
