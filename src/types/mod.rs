//! Type definitions for fraud model evaluation

pub mod criteria;
pub mod report;

pub use criteria::{AcceptanceCriteria, Metric};
pub use report::{ConfusionMatrix, CriterionFailure, MetricReport, Scores, Verdict, VerdictReport};
