/// Sentiment classification boundary.
///
/// The rest of the application only sees [`SentimentClassifier`]; the concrete
/// backend is built once in `main` and shared read-only behind an `Arc`.
///
/// ```text
///   text ──► classify() ──► [Prediction { label, score }, ...]   (best first)
/// ```

pub mod lexicon;

pub use lexicon::LexiconClassifier;

// ---------------------------------------------------------------------------
// Prediction – one ranked label
// ---------------------------------------------------------------------------

/// A sentiment label with its confidence in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    pub score: f32,
}

impl Prediction {
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score: score.clamp(0.0, 1.0),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// The backend returned an empty ranking.
    #[error("classifier returned no prediction")]
    NoPrediction,

    /// The backend refused or failed on this input.
    #[error("{0}")]
    Backend(String),
}

// ---------------------------------------------------------------------------
// Classifier capability
// ---------------------------------------------------------------------------

/// Anything that can rank sentiment labels for a piece of text.
///
/// Implementations take `&self` only so a single instance can be shared by
/// every handler for the lifetime of the app.
pub trait SentimentClassifier: Send + Sync {
    /// Rank labels for `text`, best first.
    fn classify(&self, text: &str) -> Result<Vec<Prediction>, ClassifierError>;

    /// The best-ranked prediction; only the first result is ever used.
    fn top(&self, text: &str) -> Result<Prediction, ClassifierError> {
        self.classify(text)?
            .into_iter()
            .next()
            .ok_or(ClassifierError::NoPrediction)
    }

    /// Short name for logs and the status bar.
    fn name(&self) -> &str;
}
