//! Operator configuration

use digitize_core::OutputDType;
use serde::{Deserialize, Serialize};

/// Configuration record for the digitize operator
///
/// Two recognized options:
/// - `right` selects which side of a bin edge an exactly-equal element
///   belongs to. With `right = false` (the default) an element equal to an
///   edge counts as past that edge; with `right = true` it does not.
/// - `output_dtype` selects the integer element type of the output tensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigitizeParams {
    /// Whether the intervals include the right or the left bin edge
    pub right: bool,
    /// Element type of the output tensor
    pub output_dtype: OutputDType,
}

impl Default for DigitizeParams {
    fn default() -> Self {
        Self {
            right: false,
            output_dtype: OutputDType::Int32,
        }
    }
}

impl DigitizeParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_right(mut self, right: bool) -> Self {
        self.right = right;
        self
    }

    pub fn with_output_dtype(mut self, output_dtype: OutputDType) -> Self {
        self.output_dtype = output_dtype;
        self
    }
}
