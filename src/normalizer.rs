//! Conversion of raw scores into a probability distribution.

use crate::error::{EvalResult, InputKind, InvalidInputError};
use crate::input;

/// Convert arbitrary real values into probabilities that sum to 1.
///
/// Uses a softmax shifted by the maximum value, so large magnitudes never
/// overflow and the largest entry always contributes `exp(0) = 1` to the sum.
pub fn to_probabilities(values: &[f64]) -> EvalResult<Vec<f64>> {
    if values.is_empty() {
        return Err(InvalidInputError::Empty {
            input: InputKind::Values,
        });
    }
    input::check_no_missing(values, InputKind::Values)?;
    input::check_finite(values, InputKind::Values)?;

    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = values.iter().map(|&v| (v - max).exp()).collect();
    let sum: f64 = exps.iter().sum();

    Ok(exps.into_iter().map(|e| e / sum).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum(values: &[f64]) -> f64 {
        values.iter().sum()
    }

    #[test]
    fn test_sums_to_one_and_preserves_order() {
        let probs = to_probabilities(&[1.0, 2.0, 3.0]).unwrap();

        assert_eq!(probs.len(), 3);
        assert!((sum(&probs) - 1.0).abs() < 1e-9);
        assert!(probs[2] > probs[1]);
        assert!(probs[1] > probs[0]);
    }

    #[test]
    fn test_large_values_shift_invariant() {
        let large = to_probabilities(&[1000.0, 1001.0, 1002.0]).unwrap();
        let small = to_probabilities(&[0.0, 1.0, 2.0]).unwrap();

        for (a, b) in large.iter().zip(&small) {
            assert!(a.is_finite());
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_extreme_magnitudes() {
        let probs = to_probabilities(&[f64::MAX, -f64::MAX, 0.0]).unwrap();

        assert!(probs.iter().all(|p| p.is_finite() && *p >= 0.0));
        assert_eq!(probs[0], 1.0);
        assert!((sum(&probs) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_and_equal_values() {
        let probs = to_probabilities(&[-5.0, -5.0]).unwrap();
        assert!((probs[0] - 0.5).abs() < 1e-12);
        assert!((probs[1] - 0.5).abs() < 1e-12);

        let single = to_probabilities(&[-42.0]).unwrap();
        assert_eq!(single, vec![1.0]);
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(
            to_probabilities(&[]),
            Err(InvalidInputError::Empty {
                input: InputKind::Values
            })
        );
        assert_eq!(
            to_probabilities(&[1.0, f64::NAN]),
            Err(InvalidInputError::MissingValue {
                input: InputKind::Values,
                index: 1
            })
        );
        assert!(matches!(
            to_probabilities(&[f64::INFINITY, 1.0]),
            Err(InvalidInputError::NonFinite { index: 0, .. })
        ));
    }
}
