//! Fraud Model Evaluation Library
//!
//! Scores binary fraud classifiers against ground-truth labels, gates them
//! against configurable acceptance criteria, and normalizes raw scores into
//! probability distributions.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod input;
pub mod logging;
pub mod normalizer;
pub mod scoring;
pub mod types;

pub use config::EvalConfig;
pub use error::{EvalResult, InputKind, InvalidInputError};
pub use normalizer::to_probabilities;
pub use scoring::{evaluate, EvalOptions, PredictionMode, Scorer};
pub use types::{AcceptanceCriteria, Metric, MetricReport, Verdict};
