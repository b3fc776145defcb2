/// Sentiment analysis flows on top of the classifier boundary.
///
/// ```text
///   single text ──► analyze_text ──► SingleResult
///
///   IngestOutcome ──► batch::run_batch ──► AnalysisRun ──► report::Distribution
/// ```

pub mod batch;
pub mod report;

use std::path::Path;

use crate::classifier::SentimentClassifier;
use crate::data::loader::{self, IngestOptions};
use crate::error::AnalysisError;

pub use batch::{AnalysisRun, run_batch};

/// Label shown for rows whose classification failed.
pub const ERROR_LABEL: &str = "ERROR";

// ---------------------------------------------------------------------------
// Per-row outcome
// ---------------------------------------------------------------------------

/// What happened to one row of a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// Classifier's top label.
    Labelled(String),
    /// Text was empty; the classifier was not called.
    Unknown,
    /// Classifier failed on this row only.
    Failed(String),
}

impl RowOutcome {
    /// Label for the results table and the distribution.
    pub fn label<'a>(&'a self, unknown_label: &'a str) -> &'a str {
        match self {
            RowOutcome::Labelled(label) => label,
            RowOutcome::Unknown => unknown_label,
            RowOutcome::Failed(_) => ERROR_LABEL,
        }
    }
}

// ---------------------------------------------------------------------------
// Single-text analysis
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct SingleResult {
    pub label: String,
    pub score: f32,
}

impl SingleResult {
    /// One-line report with the confidence to two decimals.
    pub fn summary(&self) -> String {
        format!(
            "Sentimen: {} dengan tingkat keyakinan {:.2}",
            self.label, self.score
        )
    }
}

/// Classify one piece of text. Empty input is rejected before the
/// classifier is touched.
pub fn analyze_text(
    text: &str,
    classifier: &dyn SentimentClassifier,
) -> Result<SingleResult, AnalysisError> {
    if text.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    let top = classifier.top(text)?;
    log::debug!("Single text classified as {} ({:.4})", top.label, top.score);
    Ok(SingleResult {
        label: top.label,
        score: top.score,
    })
}

/// Load a CSV file, validate it and classify every row.
pub fn analyze_file(
    path: &Path,
    options: &IngestOptions,
    classifier: &dyn SentimentClassifier,
    unknown_label: &str,
) -> Result<AnalysisRun, AnalysisError> {
    let ingested = loader::load_file(path, options)?;
    log::info!(
        "Loaded {} rows from {} ({} skipped)",
        ingested.dataset.len(),
        path.display(),
        ingested.skipped_rows.len()
    );
    Ok(run_batch(ingested, classifier, unknown_label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::testing::FakeClassifier;

    #[test]
    fn single_text_summary_has_two_decimals() {
        let clf = FakeClassifier::default();
        let result = analyze_text("I love this", &clf).unwrap();
        assert_eq!(result.label, "POSITIVE");
        assert_eq!(
            result.summary(),
            "Sentimen: POSITIVE dengan tingkat keyakinan 0.99"
        );
    }

    #[test]
    fn empty_single_text_never_reaches_classifier() {
        let clf = FakeClassifier::default();
        assert!(matches!(
            analyze_text("", &clf),
            Err(AnalysisError::EmptyInput)
        ));
        assert_eq!(clf.calls(), 0);
    }

    #[test]
    fn single_text_classifier_failure_is_reported() {
        let clf = FakeClassifier::default();
        assert!(matches!(
            analyze_text("boom", &clf),
            Err(AnalysisError::Classifier(_))
        ));
    }

    #[test]
    fn outcome_labels() {
        assert_eq!(RowOutcome::Labelled("NEGATIVE".into()).label("UNKNOWN"), "NEGATIVE");
        assert_eq!(RowOutcome::Unknown.label("UNKNOWN"), "UNKNOWN");
        assert_eq!(RowOutcome::Failed("x".into()).label("UNKNOWN"), ERROR_LABEL);
    }

    #[test]
    fn analyze_file_runs_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reviews.csv");
        std::fs::write(&path, "text\ngreat product\n\"\",\nterrible\n").unwrap();

        let clf = FakeClassifier::default();
        let run = analyze_file(&path, &IngestOptions::default(), &clf, "UNKNOWN").unwrap();
        assert_eq!(run.rows.len(), 3);
        assert_eq!(clf.calls(), 2);

        std::fs::write(&path, "comment\ngreat\n").unwrap();
        let err = analyze_file(&path, &IngestOptions::default(), &clf, "UNKNOWN").unwrap_err();
        assert!(matches!(err, AnalysisError::Validation { .. }));
        assert_eq!(clf.calls(), 2);
    }
}
