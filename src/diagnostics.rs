//! Human-readable rendering of metric reports.
//!
//! Presentation only: nothing here feeds back into the report.

use tracing::info;

use crate::types::report::{MetricReport, VerdictReport};

/// Characters between the box borders, excluding the one-space margins
const INNER_WIDTH: usize = 64;

/// Log a summary box for an evaluation report
pub fn log_report(report: &MetricReport) {
    let cm = &report.confusion;
    let threshold = report
        .threshold
        .map(|t| format!("{:.2}", t))
        .unwrap_or_else(|| "n/a".to_string());

    info!("{}", border('╔', '╗'));
    info!("║ {:^width$} ║", "FRAUD MODEL EVALUATION - SUMMARY", width = INNER_WIDTH);
    info!("{}", border('╠', '╣'));
    info!(
        "{}",
        row(&format!(
            "Samples: {:>8}  │  Mode: {:?} (threshold {})",
            cm.total(),
            report.mode,
            threshold
        ))
    );
    info!(
        "{}",
        row(&format!(
            "TP={:<6} FP={:<6} FN={:<6} TN={:<6}",
            cm.true_positives, cm.false_positives, cm.false_negatives, cm.true_negatives
        ))
    );
    info!("{}", border('╠', '╣'));
    info!("{}", row(&format!("Precision : {:.4}", report.scores.precision)));
    info!("{}", row(&format!("Recall    : {:.4}", report.scores.recall)));
    info!("{}", row(&format!("Accuracy  : {:.4}", report.scores.accuracy)));
    info!("{}", row(&format!("F1 Score  : {:.4}", report.scores.f1)));

    if let Some(verdict) = &report.verdict {
        info!("{}", border('╠', '╣'));
        log_verdict(verdict);
    }
    info!("{}", border('╚', '╝'));
}

fn log_verdict(verdict: &VerdictReport) {
    info!("{}", row(&format!("Decision  : {}", verdict.decision)));
    if verdict.passed() {
        info!("{}", row(&format!("Reason    : {}", verdict.reason())));
        return;
    }
    for failure in &verdict.failures {
        info!("{}", row(&format!("  - {}", failure)));
    }
}

/// Horizontal rule spanning the full box width
fn border(left: char, right: char) -> String {
    format!("{}{}{}", left, "═".repeat(INNER_WIDTH + 2), right)
}

/// Body line padded to the right border
fn row(content: &str) -> String {
    format!("║ {:<width$} ║", content, width = INNER_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_align_with_border() {
        let top = border('╔', '╗');
        let width = top.chars().count();

        assert_eq!(row("Precision : 1.0000").chars().count(), width);
        assert_eq!(
            row("Recall below threshold (0.500 < 0.65)").chars().count(),
            width
        );
        assert!(row("").ends_with('║'));
    }
}
