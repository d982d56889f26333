//! Error types for the correlation pipeline.

use thiserror::Error;

/// Errors that can occur in the coverage correlation pipeline.
///
/// Every variant is raised synchronously, before any transform runs; no
/// function returns a partially computed result. The operations are
/// deterministic pure functions, so retrying a failed call reproduces
/// the identical error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Structurally invalid input: a non-positive length, a padding
    /// length shorter than the signal, or mismatched spectrum lengths.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Description of the violated precondition.
        reason: String,
    },

    /// Zero-variance coverage cannot be rescaled to unit standard
    /// deviation. The caller decides the fallback (skip the track,
    /// treat it as all-zero).
    #[error("degenerate coverage: standard deviation is zero")]
    DegenerateInput,

    /// Centering width exceeds half the cross-correlation array.
    #[error(
        "centering width {width} is too large: 2*width must be at most the cross-correlation length {len}"
    )]
    WidthTooLarge {
        /// The requested half-window width.
        width: usize,
        /// Length of the cross-correlation array being centered.
        len: usize,
    },
}

impl AnalysisError {
    /// Create an [`AnalysisError::InvalidInput`] from a reason string.
    pub fn invalid(reason: impl Into<String>) -> Self {
        AnalysisError::InvalidInput {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_display() {
        let err = AnalysisError::invalid("padding length 4 is shorter than the signal length 10");
        let msg = err.to_string();
        assert!(msg.starts_with("invalid input:"), "got: {msg}");
        assert!(msg.contains("padding length 4"), "got: {msg}");
    }

    #[test]
    fn degenerate_input_display() {
        let msg = AnalysisError::DegenerateInput.to_string();
        assert_eq!(msg, "degenerate coverage: standard deviation is zero");
    }

    #[test]
    fn width_too_large_display_carries_values() {
        let err = AnalysisError::WidthTooLarge {
            width: 600,
            len: 1000,
        };
        let msg = err.to_string();
        assert!(msg.contains("centering width 600"), "got: {msg}");
        assert!(msg.contains("length 1000"), "got: {msg}");
    }
}
