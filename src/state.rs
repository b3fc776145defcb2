use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::analysis::{self, AnalysisRun, SingleResult};
use crate::classifier::SentimentClassifier;
use crate::color::LabelColors;
use crate::config::AppConfig;

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Description,
    Analysis,
    Team,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Description, Page::Analysis, Page::Team];

    /// Menu entry text.
    pub fn title(self) -> &'static str {
        match self {
            Page::Description => "Deskripsi",
            Page::Analysis => "Analisis Sentimen",
            Page::Team => "Our Team",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: AppConfig,

    /// Shared classifier, built once at startup and never mutated.
    pub classifier: Arc<dyn SentimentClassifier>,

    pub page: Page,

    /// Contents of the single-text input box.
    pub input_text: String,

    /// Last single-text result (None until the user presses "Analisis").
    pub single_result: Option<SingleResult>,

    /// Inline error under the single-text control.
    pub single_error: Option<String>,

    /// Last uploaded file.
    pub upload_path: Option<PathBuf>,

    /// Last successful batch run.
    pub batch: Option<AnalysisRun>,

    /// Colours for the labels of `batch`.
    pub label_colors: Option<LabelColors>,

    /// Inline error under the upload control.
    pub batch_error: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig, classifier: Arc<dyn SentimentClassifier>) -> Self {
        Self {
            config,
            classifier,
            page: Page::default(),
            input_text: String::new(),
            single_result: None,
            single_error: None,
            upload_path: None,
            batch: None,
            label_colors: None,
            batch_error: None,
        }
    }

    /// Classify the text box contents.
    pub fn analyze_input(&mut self) {
        match analysis::analyze_text(&self.input_text, self.classifier.as_ref()) {
            Ok(result) => {
                self.single_result = Some(result);
                self.single_error = None;
            }
            Err(e) => {
                log::warn!("Single-text analysis failed: {e:#}");
                self.single_result = None;
                self.single_error = Some(format!("{e:#}"));
            }
        }
    }

    /// Ingest and classify an uploaded CSV. A failure clears the previous
    /// table and chart.
    pub fn analyze_upload(&mut self, path: &Path) {
        self.upload_path = Some(path.to_path_buf());
        let result = analysis::analyze_file(
            path,
            &self.config.ingest_options(),
            self.classifier.as_ref(),
            &self.config.unknown_label,
        );
        match result {
            Ok(run) => self.set_batch(run),
            Err(e) => {
                log::error!("Failed to analyse {}: {e:#}", path.display());
                self.batch = None;
                self.label_colors = None;
                self.batch_error = Some(format!("{e:#}"));
            }
        }
    }

    /// Store a finished run and rebuild the chart colours.
    pub fn set_batch(&mut self, run: AnalysisRun) {
        let labels = run.distribution.counts().iter().map(|(l, _)| l.as_str());
        self.label_colors = Some(LabelColors::new(labels));
        self.batch = Some(run);
        self.batch_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::testing::FakeClassifier;

    fn state_with(clf: Arc<FakeClassifier>) -> AppState {
        AppState::new(AppConfig::default(), clf)
    }

    #[test]
    fn empty_input_shows_prompt() {
        let clf = Arc::new(FakeClassifier::default());
        let mut state = state_with(clf.clone());
        state.analyze_input();
        assert_eq!(
            state.single_error.as_deref(),
            Some("Masukkan teks untuk dianalisis.")
        );
        assert!(state.single_result.is_none());
        assert_eq!(clf.calls(), 0);
    }

    #[test]
    fn input_result_replaces_previous_error() {
        let mut state = state_with(Arc::new(FakeClassifier::default()));
        state.analyze_input();
        state.input_text = "I love this".into();
        state.analyze_input();
        assert!(state.single_error.is_none());
        let summary = state.single_result.as_ref().unwrap().summary();
        assert!(summary.ends_with("0.99"));
    }

    #[test]
    fn upload_without_text_column_clears_results() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.csv");
        let bad = dir.path().join("bad.csv");
        std::fs::write(&good, "text\ngreat\nterrible\n").unwrap();
        std::fs::write(&bad, "comment\ngreat\n").unwrap();

        let clf = Arc::new(FakeClassifier::default());
        let mut state = state_with(clf.clone());

        state.analyze_upload(&good);
        assert_eq!(state.batch.as_ref().unwrap().rows.len(), 2);
        assert!(state.label_colors.is_some());

        state.analyze_upload(&bad);
        assert!(state.batch.is_none());
        assert!(state.label_colors.is_none());
        assert_eq!(
            state.batch_error.as_deref(),
            Some("File CSV harus memiliki kolom 'text'")
        );
        assert_eq!(clf.calls(), 2);
        assert_eq!(state.upload_path.as_deref(), Some(bad.as_path()));
    }

    #[test]
    fn page_titles() {
        let titles: Vec<&str> = Page::ALL.iter().map(|p| p.title()).collect();
        assert_eq!(titles, ["Deskripsi", "Analisis Sentimen", "Our Team"]);
        assert_eq!(Page::default(), Page::Description);
    }
}
