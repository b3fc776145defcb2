use crate::classifier::SentimentClassifier;
use crate::data::model::{AnalysedRecord, IngestOutcome, SkippedRow};

use super::RowOutcome;
use super::report::Distribution;

// ---------------------------------------------------------------------------
// AnalysisRun – everything the batch view renders
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct AnalysisRun {
    /// Original column names, in file order.
    pub headers: Vec<String>,
    /// Rows in upload order, each with its outcome.
    pub rows: Vec<AnalysedRecord>,
    pub skipped_rows: Vec<SkippedRow>,
    /// Sentinel shown for rows with empty text.
    pub unknown_label: String,
    pub distribution: Distribution,
}

impl AnalysisRun {
    /// Display label of row `idx`.
    pub fn label_of(&self, idx: usize) -> &str {
        self.rows[idx].outcome.label(&self.unknown_label)
    }

    pub fn failed_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| matches!(r.outcome, RowOutcome::Failed(_)))
            .count()
    }
}

/// Classify every record in order.
///
/// Empty text becomes [`RowOutcome::Unknown`] without calling the
/// classifier. A classifier error only marks its own row as
/// [`RowOutcome::Failed`]; the rest of the batch still runs.
pub fn run_batch(
    ingested: IngestOutcome,
    classifier: &dyn SentimentClassifier,
    unknown_label: &str,
) -> AnalysisRun {
    let IngestOutcome {
        dataset,
        skipped_rows,
    } = ingested;

    if dataset.is_empty() {
        log::warn!("Upload has no data rows");
    }

    let rows: Vec<AnalysedRecord> = dataset
        .records
        .into_iter()
        .map(|record| {
            let outcome = classify_row(&record.text, record.line, classifier);
            AnalysedRecord { record, outcome }
        })
        .collect();

    let distribution =
        Distribution::from_labels(rows.iter().map(|r| r.outcome.label(unknown_label)));

    log::info!(
        "Classified {} rows with {} classifier: {:?}",
        rows.len(),
        classifier.name(),
        distribution.counts()
    );

    AnalysisRun {
        headers: dataset.headers,
        rows,
        skipped_rows,
        unknown_label: unknown_label.to_string(),
        distribution,
    }
}

fn classify_row(text: &str, line: u64, classifier: &dyn SentimentClassifier) -> RowOutcome {
    if text.is_empty() {
        return RowOutcome::Unknown;
    }
    match classifier.top(text) {
        Ok(prediction) => RowOutcome::Labelled(prediction.label),
        Err(e) => {
            log::warn!("Classifier failed on line {line}: {e}");
            RowOutcome::Failed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::testing::FakeClassifier;
    use crate::data::loader::{IngestOptions, ingest_csv};

    fn run(input: &str, clf: &FakeClassifier) -> AnalysisRun {
        let ingested = ingest_csv(input.as_bytes(), &IngestOptions::default()).unwrap();
        run_batch(ingested, clf, "UNKNOWN")
    }

    #[test]
    fn blank_row_is_unknown_and_skips_classifier() {
        let clf = FakeClassifier::default();
        let out = run("text\n\"great product\"\n\"\",\n\"terrible\"\n", &clf);

        assert_eq!(out.rows.len(), 3);
        assert_eq!(out.label_of(0), "POSITIVE");
        assert_eq!(out.label_of(1), "UNKNOWN");
        assert_eq!(out.label_of(2), "NEGATIVE");
        assert_eq!(clf.calls(), 2);
        assert!(out.distribution.slices().len() <= 3);
    }

    #[test]
    fn row_count_excludes_only_skipped_rows() {
        let clf = FakeClassifier::default();
        let out = run("text,n\na,1\nb,2,x\nc,3\nd,4\n", &clf);
        assert_eq!(out.rows.len(), 4 - out.skipped_rows.len());
        assert_eq!(out.skipped_rows.len(), 1);
    }

    #[test]
    fn failures_are_isolated_per_row() {
        let clf = FakeClassifier::default();
        let out = run("text\nfine day\nboom\nsilent\nterrible day\n", &clf);

        assert_eq!(out.rows.len(), 4);
        assert_eq!(out.label_of(0), "POSITIVE");
        assert!(matches!(out.rows[1].outcome, RowOutcome::Failed(ref r) if r.contains("exploded")));
        assert!(matches!(out.rows[2].outcome, RowOutcome::Failed(_)));
        assert_eq!(out.label_of(3), "NEGATIVE");
        assert_eq!(out.failed_count(), 2);
        assert_eq!(out.distribution.count_of(crate::analysis::ERROR_LABEL), 2);
    }

    #[test]
    fn order_follows_input() {
        let clf = FakeClassifier::default();
        let out = run("text,id\nterrible,1\nok,2\nterrible,3\n", &clf);
        let lines: Vec<u64> = out.rows.iter().map(|r| r.record.line).collect();
        assert_eq!(lines, [2, 3, 4]);
        assert_eq!(out.headers, ["text", "id"]);
    }
}
