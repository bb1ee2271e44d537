//! Binary classifier scoring with an optional acceptance gate

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::EvalConfig;
use crate::diagnostics;
use crate::error::{EvalResult, InputKind};
use crate::input;
use crate::scoring::{confusion, validate};
use crate::types::criteria::AcceptanceCriteria;
use crate::types::report::MetricReport;

/// How the prediction vector is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionMode {
    /// Probabilities, binarized at the configured threshold
    #[default]
    Probability,
    /// Already-binarized 0/1 predictions; the threshold is ignored
    Binary,
}

/// Per-call evaluation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalOptions {
    /// Prediction interpretation
    pub mode: PredictionMode,
    /// A probability at or above this value is a positive prediction
    pub threshold: f64,
    /// Whether to gate the scores against the acceptance criteria
    pub verdict: bool,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            mode: PredictionMode::Probability,
            threshold: 0.5,
            verdict: true,
        }
    }
}

impl EvalOptions {
    /// Probability mode with a custom threshold
    pub fn probability(threshold: f64) -> Self {
        Self {
            mode: PredictionMode::Probability,
            threshold,
            ..Self::default()
        }
    }

    /// Binary mode
    pub fn binary() -> Self {
        Self {
            mode: PredictionMode::Binary,
            ..Self::default()
        }
    }

    /// Toggle the acceptance gate
    pub fn with_verdict(mut self, verdict: bool) -> Self {
        self.verdict = verdict;
        self
    }
}

/// Scores predictions against labels and applies an acceptance policy.
///
/// Holds no mutable state; one scorer can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    /// Thresholds a model must meet to pass
    criteria: AcceptanceCriteria,
    /// Render each report through tracing after computing it
    diagnostics: bool,
}

impl Scorer {
    /// Create a scorer with the given acceptance criteria
    pub fn new(criteria: AcceptanceCriteria) -> Self {
        Self {
            criteria,
            diagnostics: false,
        }
    }

    /// Create a scorer from loaded configuration
    pub fn from_config(config: &EvalConfig) -> Self {
        Self::new(config.criteria.clone()).with_diagnostics(config.logging.diagnostics)
    }

    /// Enable or disable diagnostic rendering
    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled;
        self
    }

    /// Get the acceptance criteria
    pub fn criteria(&self) -> &AcceptanceCriteria {
        &self.criteria
    }

    /// Evaluate predictions against ground-truth labels.
    ///
    /// All inputs are validated before any metric is computed; a missing
    /// value anywhere terminates the evaluation.
    pub fn evaluate(
        &self,
        labels: &[f64],
        predictions: &[f64],
        options: &EvalOptions,
    ) -> EvalResult<MetricReport> {
        let (actual, predicted) = binarize(labels, predictions, options).inspect_err(|e| {
            warn!(error = %e, mode = ?options.mode, "Evaluation input rejected");
        })?;

        let cm = confusion::count(&actual, &predicted);
        let scores = confusion::scores(&cm);
        let verdict = options.verdict.then(|| self.criteria.judge(&scores));

        let threshold = match options.mode {
            PredictionMode::Probability => Some(options.threshold),
            PredictionMode::Binary => None,
        };

        let report = MetricReport {
            scores,
            confusion: cm,
            mode: options.mode,
            threshold,
            verdict,
        };

        debug!(
            samples = cm.total(),
            mode = ?options.mode,
            precision = scores.precision,
            recall = scores.recall,
            accuracy = scores.accuracy,
            f1 = scores.f1,
            decision = ?report.decision(),
            "Evaluation complete"
        );

        if self.diagnostics {
            diagnostics::log_report(&report);
        }

        Ok(report)
    }
}

/// Validate inputs and turn them into paired boolean vectors
fn binarize(
    labels: &[f64],
    predictions: &[f64],
    options: &EvalOptions,
) -> EvalResult<(Vec<bool>, Vec<bool>)> {
    validate::check_lengths(labels, predictions)?;
    input::check_no_missing(labels, InputKind::Labels)?;
    input::check_no_missing(predictions, InputKind::Predictions)?;

    let actual = validate::to_binary(labels, InputKind::Labels)?;
    let predicted = match options.mode {
        PredictionMode::Binary => validate::to_binary(predictions, InputKind::Predictions)?,
        PredictionMode::Probability => {
            validate::check_threshold(options.threshold)?;
            predictions.iter().map(|&p| p >= options.threshold).collect()
        }
    };

    Ok((actual, predicted))
}

/// Evaluate with the default acceptance criteria
pub fn evaluate(
    labels: &[f64],
    predictions: &[f64],
    options: &EvalOptions,
) -> EvalResult<MetricReport> {
    Scorer::default().evaluate(labels, predictions, options)
}
