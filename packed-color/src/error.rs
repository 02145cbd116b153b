//! Error types for color construction and channel access

/// Contract violations reported by the fallible `PackedColor` entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// An array constructor was handed a null pointer.
    #[error("color values must not be null")]
    NullInput,

    /// An array constructor was handed something other than four values.
    #[error("there must be four and only four input values for a color (got {len})")]
    InvalidLength { len: usize },

    /// A channel index outside `0..=3`.
    #[error("indices for a color run from 0 to 3 inclusive (got {index})")]
    IndexOutOfRange { index: usize },
}
