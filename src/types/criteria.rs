//! Acceptance criteria for fraud model evaluation

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{EvalResult, InvalidInputError};
use crate::types::report::{CriterionFailure, Scores, VerdictReport};

/// Metrics reported by the scorer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Precision,
    Recall,
    Accuracy,
    F1,
}

impl Metric {
    /// All metrics in reporting order
    pub const ALL: [Metric; 4] = [Metric::Precision, Metric::Recall, Metric::Accuracy, Metric::F1];

    /// Human-readable name used in failure descriptions
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Precision => "Precision",
            Metric::Recall => "Recall",
            Metric::Accuracy => "Accuracy",
            Metric::F1 => "F1 Score",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Minimum metric values a model must reach to pass.
///
/// A metric fails only when it is strictly below its requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcceptanceCriteria {
    pub precision: f64,
    pub recall: f64,
    pub accuracy: f64,
    pub f1: f64,
}

impl Default for AcceptanceCriteria {
    fn default() -> Self {
        Self {
            precision: 0.70,
            recall: 0.65,
            accuracy: 0.75,
            f1: 0.70,
        }
    }
}

impl AcceptanceCriteria {
    /// Required minimum for a single metric
    pub fn required(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Precision => self.precision,
            Metric::Recall => self.recall,
            Metric::Accuracy => self.accuracy,
            Metric::F1 => self.f1,
        }
    }

    /// Check every requirement lies in [0, 1]
    pub fn validate(&self) -> EvalResult<()> {
        for metric in Metric::ALL {
            let value = self.required(metric);
            if !(0.0..=1.0).contains(&value) {
                return Err(InvalidInputError::InvalidCriterion { metric, value });
            }
        }
        Ok(())
    }

    /// Compare scores against every requirement and collect all failures
    pub fn judge(&self, scores: &Scores) -> VerdictReport {
        let failures = Metric::ALL
            .iter()
            .filter_map(|&metric| {
                let value = scores.get(metric);
                let required = self.required(metric);
                (value < required).then_some(CriterionFailure {
                    metric,
                    value,
                    required,
                })
            })
            .collect();

        VerdictReport::from_failures(failures)
    }
}
