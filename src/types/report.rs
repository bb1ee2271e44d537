//! Metric report data structures

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::scoring::PredictionMode;
use crate::types::criteria::Metric;

/// Counts of a binary confusion matrix
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub true_positives: u64,
    pub false_positives: u64,
    pub false_negatives: u64,
    pub true_negatives: u64,
}

impl ConfusionMatrix {
    /// Total number of samples
    pub fn total(&self) -> u64 {
        self.true_positives + self.false_positives + self.false_negatives + self.true_negatives
    }

    /// Number of samples predicted positive
    pub fn predicted_positives(&self) -> u64 {
        self.true_positives + self.false_positives
    }

    /// Number of samples that are actually positive
    pub fn actual_positives(&self) -> u64 {
        self.true_positives + self.false_negatives
    }
}

/// Computed classification metrics, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub precision: f64,
    pub recall: f64,
    pub accuracy: f64,
    pub f1: f64,
}

impl Scores {
    /// Value of a single metric
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Precision => self.precision,
            Metric::Recall => self.recall,
            Metric::Accuracy => self.accuracy,
            Metric::F1 => self.f1,
        }
    }
}

/// Final decision of the acceptance gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Pass,
    Reject,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => f.write_str("PASS"),
            Verdict::Reject => f.write_str("REJECT"),
        }
    }
}

/// A single unmet acceptance criterion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionFailure {
    pub metric: Metric,
    pub value: f64,
    pub required: f64,
}

impl fmt::Display for CriterionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} below threshold ({:.3} < {})",
            self.metric, self.value, self.required
        )
    }
}

/// Verdict plus every criterion that failed, in reporting order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerdictReport {
    pub decision: Verdict,
    pub failures: Vec<CriterionFailure>,
}

impl VerdictReport {
    /// Build a verdict from the collected failures
    pub fn from_failures(failures: Vec<CriterionFailure>) -> Self {
        let decision = if failures.is_empty() {
            Verdict::Pass
        } else {
            Verdict::Reject
        };
        Self { decision, failures }
    }

    /// Whether the model met every criterion
    pub fn passed(&self) -> bool {
        self.decision == Verdict::Pass
    }

    /// Human-readable failure descriptions
    pub fn failure_messages(&self) -> Vec<String> {
        self.failures.iter().map(ToString::to_string).collect()
    }

    /// One-line explanation of the decision
    pub fn reason(&self) -> String {
        if self.failures.is_empty() {
            "All metrics meet or exceed required thresholds.".to_string()
        } else {
            self.failure_messages().join(" | ")
        }
    }
}

/// Result of evaluating a classifier against ground-truth labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricReport {
    /// Precision, recall, accuracy and F1
    pub scores: Scores,
    /// Counts the scores were computed from
    pub confusion: ConfusionMatrix,
    /// How predictions were interpreted
    pub mode: PredictionMode,
    /// Binarization threshold (probability mode only)
    pub threshold: Option<f64>,
    /// Acceptance gate outcome, when requested
    pub verdict: Option<VerdictReport>,
}

impl MetricReport {
    /// Metric name to value mapping
    pub fn metrics(&self) -> BTreeMap<Metric, f64> {
        Metric::ALL
            .iter()
            .map(|&metric| (metric, self.scores.get(metric)))
            .collect()
    }

    /// Value of a single metric
    pub fn get(&self, metric: Metric) -> f64 {
        self.scores.get(metric)
    }

    /// Decision, if a verdict was requested
    pub fn decision(&self) -> Option<Verdict> {
        self.verdict.as_ref().map(|v| v.decision)
    }

    /// Structured JSON export
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
