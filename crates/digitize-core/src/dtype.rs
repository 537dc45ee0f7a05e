//! Element type descriptors for the dispatch boundary
//!
//! Graph-build-time code works with dynamic type metadata rather than Rust
//! generics. These enums are the closed vocabulary that metadata is drawn
//! from; the operator converts them into concrete type parameters exactly
//! once at the dispatch boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Element type of a data or bins tensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DType {
    Uint8,
    Int8,
    Int32,
    Int64,
    Float32,
    Float64,
}

impl DType {
    /// Canonical lowercase name, as used in operator configurations
    pub fn name(self) -> &'static str {
        match self {
            Self::Uint8 => "uint8",
            Self::Int8 => "int8",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
        }
    }

    /// Size of one element in bytes
    pub fn size_of(self) -> usize {
        match self {
            Self::Uint8 | Self::Int8 => 1,
            Self::Int32 | Self::Float32 => 4,
            Self::Int64 | Self::Float64 => 8,
        }
    }

    pub fn is_float(self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Element type of the output tensor
///
/// Bucket indices are small non-negative integers, so the output vocabulary
/// is restricted to integer widths. The default matches the operator's
/// `output_type` default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputDType {
    Uint8,
    Int8,
    #[default]
    Int32,
    Int64,
}

impl OutputDType {
    /// Canonical lowercase name, as used in operator configurations
    pub fn name(self) -> &'static str {
        match self {
            Self::Uint8 => "uint8",
            Self::Int8 => "int8",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
        }
    }

    /// Size of one element in bytes
    pub fn size_of(self) -> usize {
        match self {
            Self::Uint8 | Self::Int8 => 1,
            Self::Int32 => 4,
            Self::Int64 => 8,
        }
    }
}

impl fmt::Display for OutputDType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<OutputDType> for DType {
    fn from(odtype: OutputDType) -> Self {
        match odtype {
            OutputDType::Uint8 => DType::Uint8,
            OutputDType::Int8 => DType::Int8,
            OutputDType::Int32 => DType::Int32,
            OutputDType::Int64 => DType::Int64,
        }
    }
}
