//! Input validation run before any metric is computed

use crate::error::{EvalResult, InputKind, InvalidInputError};

/// Reject empty or mismatched label/prediction vectors
pub fn check_lengths(labels: &[f64], predictions: &[f64]) -> EvalResult<()> {
    if labels.is_empty() {
        return Err(InvalidInputError::Empty {
            input: InputKind::Labels,
        });
    }
    if predictions.is_empty() {
        return Err(InvalidInputError::Empty {
            input: InputKind::Predictions,
        });
    }
    if labels.len() != predictions.len() {
        return Err(InvalidInputError::LengthMismatch {
            labels: labels.len(),
            predictions: predictions.len(),
        });
    }
    Ok(())
}

/// Convert a 0/1 vector into booleans, rejecting anything else
pub fn to_binary(values: &[f64], input: InputKind) -> EvalResult<Vec<bool>> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            if value == 1.0 {
                Ok(true)
            } else if value == 0.0 {
                Ok(false)
            } else {
                Err(InvalidInputError::NonBinary {
                    input,
                    index,
                    value,
                })
            }
        })
        .collect()
}

/// Reject thresholds outside [0, 1]
pub fn check_threshold(threshold: f64) -> EvalResult<()> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(())
    } else {
        Err(InvalidInputError::InvalidThreshold(threshold))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths() {
        assert!(check_lengths(&[0.0, 1.0], &[0.2, 0.9]).is_ok());
        assert_eq!(
            check_lengths(&[], &[]),
            Err(InvalidInputError::Empty {
                input: InputKind::Labels
            })
        );
        assert_eq!(
            check_lengths(&[1.0], &[]),
            Err(InvalidInputError::Empty {
                input: InputKind::Predictions
            })
        );
        assert_eq!(
            check_lengths(&[1.0, 0.0, 1.0], &[1.0]),
            Err(InvalidInputError::LengthMismatch {
                labels: 3,
                predictions: 1
            })
        );
    }

    #[test]
    fn test_to_binary() {
        assert_eq!(
            to_binary(&[0.0, 1.0, 1.0], InputKind::Labels).unwrap(),
            vec![false, true, true]
        );
        assert_eq!(
            to_binary(&[0.0, 2.0], InputKind::Labels),
            Err(InvalidInputError::NonBinary {
                input: InputKind::Labels,
                index: 1,
                value: 2.0
            })
        );
    }

    #[test]
    fn test_threshold_bounds() {
        assert!(check_threshold(0.0).is_ok());
        assert!(check_threshold(1.0).is_ok());
        assert!(check_threshold(1.5).is_err());
        assert!(check_threshold(f64::NAN).is_err());
    }
}
