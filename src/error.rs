//! Error types for the evaluation core.
//!
//! Every failure the core can produce is an input problem. Degenerate
//! confusion matrices are valid results and never surface here.

use std::fmt;
use thiserror::Error;

use crate::types::criteria::Metric;

/// Which input vector an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Labels,
    Predictions,
    Values,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputKind::Labels => "labels",
            InputKind::Predictions => "predictions",
            InputKind::Values => "values",
        };
        f.write_str(name)
    }
}

/// Rejected input. Always a hard stop: nothing is imputed and no partial
/// report is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputError {
    #[error("{input} is empty")]
    Empty { input: InputKind },

    #[error("length mismatch: {labels} labels vs {predictions} predictions")]
    LengthMismatch { labels: usize, predictions: usize },

    #[error("{input} contain a missing value at index {index}; clean the data before evaluation")]
    MissingValue { input: InputKind, index: usize },

    #[error("{input} must be 0 or 1, found {value} at index {index}")]
    NonBinary {
        input: InputKind,
        index: usize,
        value: f64,
    },

    #[error("{input} must be finite, found {value} at index {index}")]
    NonFinite {
        input: InputKind,
        index: usize,
        value: f64,
    },

    #[error("threshold must lie in [0, 1], got {0}")]
    InvalidThreshold(f64),

    #[error("acceptance criterion for {metric} must lie in [0, 1], got {value}")]
    InvalidCriterion { metric: Metric, value: f64 },
}

/// Result alias used by the scorer and the normalizer.
pub type EvalResult<T> = Result<T, InvalidInputError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_input() {
        let err = InvalidInputError::MissingValue {
            input: InputKind::Predictions,
            index: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("predictions"));
        assert!(msg.contains("index 3"));

        let err = InvalidInputError::LengthMismatch {
            labels: 4,
            predictions: 2,
        };
        assert_eq!(err.to_string(), "length mismatch: 4 labels vs 2 predictions");
    }
}
