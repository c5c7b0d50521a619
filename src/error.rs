//! Error types for hypertrit.
//!
//! Every binary operator and metric reports unequal operand dimensions as
//! [`VsaError::DimensionMismatch`]; nothing is silently truncated, zeroed or
//! skipped.

use thiserror::Error;

/// Result type alias for hypertrit operations.
pub type Result<T> = std::result::Result<T, VsaError>;

/// Errors that can occur while building or combining hypervectors.
#[derive(Debug, Error)]
pub enum VsaError {
    /// Operands of a binary operator or metric differ in dimension.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimension of the first operand.
        expected: usize,
        /// Dimension of the offending operand.
        actual: usize,
    },

    /// An n-ary operation received no operands.
    #[error("cannot {op} an empty sequence of vectors")]
    Empty {
        /// Name of the operation.
        op: &'static str,
    },

    /// Backing storage could not be obtained.
    #[error("failed to allocate storage for {len} elements")]
    Allocation {
        /// Number of elements requested.
        len: usize,
    },

    /// A raw value outside {-1, 0, +1} where no quantization is possible.
    #[error("invalid trit value {value} at index {index} (expected -1, 0 or +1)")]
    InvalidTrit {
        /// Position of the offending value.
        index: usize,
        /// The offending value.
        value: i64,
    },

    /// A scalar outside {-1, 0, +1} offered as an exact trit.
    #[error("invalid trit value {value} (expected -1, 0 or +1)")]
    InvalidTritValue {
        /// The offending value.
        value: i64,
    },

    /// Element access past the end of a vector.
    #[error("index {index} out of bounds for dimension {dim}")]
    IndexOutOfBounds {
        /// The index that was accessed.
        index: usize,
        /// The vector dimension.
        dim: usize,
    },

    /// Raw bit-planes share a set bit or carry bits beyond the dimension.
    #[error("bit-planes overlap or exceed the dimension at word {word}")]
    InvalidPlanes {
        /// First word that violates the encoding.
        word: usize,
    },

    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Configuration could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Check that two dimensions agree.
#[inline]
pub(crate) fn ensure_same_dim(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        #[cfg(feature = "logging")]
        tracing::debug!(expected, actual, "rejecting operands with unequal dimensions");
        Err(VsaError::DimensionMismatch { expected, actual })
    }
}

/// Allocate a vector of `len` copies of `fill`, reporting failure instead of aborting.
pub(crate) fn try_filled<T: Clone>(len: usize, fill: T) -> Result<Vec<T>> {
    let mut out = Vec::new();
    out.try_reserve_exact(len)
        .map_err(|_| VsaError::Allocation { len })?;
    out.resize(len, fill);
    Ok(out)
}
