//! Checks on raw numeric vectors shared by the scorer and the normalizer

use crate::error::{EvalResult, InputKind, InvalidInputError};

/// Reject the first NaN entry
pub fn check_no_missing(values: &[f64], input: InputKind) -> EvalResult<()> {
    match values.iter().position(|v| v.is_nan()) {
        Some(index) => Err(InvalidInputError::MissingValue { input, index }),
        None => Ok(()),
    }
}

/// Reject the first infinite entry
pub fn check_finite(values: &[f64], input: InputKind) -> EvalResult<()> {
    match values.iter().position(|v| v.is_infinite()) {
        Some(index) => Err(InvalidInputError::NonFinite {
            input,
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}
