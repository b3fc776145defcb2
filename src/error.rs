use crate::classifier::ClassifierError;

// ---------------------------------------------------------------------------
// Errors surfaced next to the control that triggered them
// ---------------------------------------------------------------------------

/// Recoverable failures of the single-text and CSV analysis flows.
///
/// None of these terminate the application; the UI renders them inline and
/// the user may retry (re-type, re-upload).
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// The uploaded CSV lacks the required text column.
    #[error("File CSV harus memiliki kolom '{column}'")]
    Validation { column: String },

    /// The uploaded file could not be read as CSV at all.
    #[error("Error reading CSV file: {0}")]
    Parse(String),

    /// Single-text analysis was requested without any text.
    #[error("Masukkan teks untuk dianalisis.")]
    EmptyInput,

    #[error("Classifier failed: {0}")]
    Classifier(#[from] ClassifierError),

    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

impl AnalysisError {
    pub fn parse(cause: impl std::fmt::Display) -> Self {
        AnalysisError::Parse(cause.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_names_the_column() {
        let err = AnalysisError::Validation {
            column: "text".into(),
        };
        assert_eq!(err.to_string(), "File CSV harus memiliki kolom 'text'");
    }

    #[test]
    fn parse_message_carries_the_cause() {
        let err = AnalysisError::parse("stream did not contain valid UTF-8");
        assert!(err.to_string().contains("valid UTF-8"));
    }
}
