//! Confusion-matrix counting and metric formulas
//!
//! Every ratio with a zero denominator evaluates to 0.0. A model that never
//! predicts positive must score precision 0, not an undefined value that the
//! verdict could skip over.

use crate::types::report::{ConfusionMatrix, Scores};

/// Count outcomes for paired binary labels and predictions
pub fn count(labels: &[bool], predictions: &[bool]) -> ConfusionMatrix {
    labels
        .iter()
        .zip(predictions)
        .fold(ConfusionMatrix::default(), |mut cm, (&actual, &predicted)| {
            match (actual, predicted) {
                (true, true) => cm.true_positives += 1,
                (false, true) => cm.false_positives += 1,
                (true, false) => cm.false_negatives += 1,
                (false, false) => cm.true_negatives += 1,
            }
            cm
        })
}

/// `numerator / denominator`, or 0.0 when the denominator is zero
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Precision, recall, accuracy and F1 for a confusion matrix
pub fn scores(cm: &ConfusionMatrix) -> Scores {
    let tp = cm.true_positives as f64;

    let precision = ratio(tp, cm.predicted_positives() as f64);
    let recall = ratio(tp, cm.actual_positives() as f64);
    let accuracy = ratio((cm.true_positives + cm.true_negatives) as f64, cm.total() as f64);
    // From the counts, so an exact boundary value is not lost to rounding
    let f1 = ratio(
        2.0 * tp,
        (2 * cm.true_positives + cm.false_positives + cm.false_negatives) as f64,
    );

    Scores {
        precision,
        recall,
        accuracy,
        f1,
    }
}
