use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::data::loader::IngestOptions;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "ESG_SENTIMENT_CONFIG";
/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "esg-sentiment.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// Application configuration
// ---------------------------------------------------------------------------

/// Startup settings. Every field is optional in the JSON file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the logo, poster and team portraits.
    pub assets_dir: PathBuf,
    /// Column of the uploaded CSV holding the text to classify.
    pub text_column: String,
    /// Header of the added prediction column in the results table.
    pub prediction_column: String,
    /// Label assigned to rows with empty text.
    pub unknown_label: String,
    /// Drop malformed CSV rows instead of rejecting the upload.
    pub skip_malformed_rows: bool,
    /// Optional JSON lexicon replacing the built-in word lists.
    pub lexicon_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            text_column: "text".to_string(),
            prediction_column: "Prediksi Sentimen".to_string(),
            unknown_label: "UNKNOWN".to_string(),
            skip_malformed_rows: true,
            lexicon_path: None,
        }
    }
}

impl AppConfig {
    /// Resolve the config file (`$ESG_SENTIMENT_CONFIG`, then
    /// `./esg-sentiment.json`) and load it. No file means defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        match explicit {
            Some(path) => Self::from_path(&path),
            None => {
                let local = Path::new(DEFAULT_CONFIG_FILE);
                if local.exists() {
                    Self::from_path(local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn ingest_options(&self) -> IngestOptions {
        IngestOptions {
            text_column: self.text_column.clone(),
            skip_malformed_rows: self.skip_malformed_rows,
        }
    }

    /// Path of an asset file inside `assets_dir`.
    pub fn asset(&self, name: &str) -> PathBuf {
        self.assets_dir.join(name)
    }
}
