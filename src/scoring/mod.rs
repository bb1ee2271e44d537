//! Classifier scoring components

pub mod confusion;
pub mod scorer;
pub mod validate;

pub use scorer::{evaluate, EvalOptions, PredictionMode, Scorer};
