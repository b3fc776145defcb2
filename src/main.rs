mod analysis;
mod app;
mod assets;
mod classifier;
mod color;
mod config;
mod data;
mod error;
mod state;
mod ui;

use std::sync::Arc;

use anyhow::Context;
use app::EsgSentimentApp;
use classifier::{LexiconClassifier, SentimentClassifier};
use config::AppConfig;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::error!("{e}; falling back to default settings");
        AppConfig::default()
    });

    // Built once before the window opens, then shared read-only.
    let classifier = build_classifier(&config)?;
    log::info!("Sentiment classifier ready: {}", classifier.name());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let state = AppState::new(config, classifier);
    eframe::run_native(
        "ESG Sentiment Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(EsgSentimentApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running UI: {e}"))
}

fn build_classifier(config: &AppConfig) -> anyhow::Result<Arc<dyn SentimentClassifier>> {
    let lexicon = match &config.lexicon_path {
        Some(path) => LexiconClassifier::from_path(path).context("loading sentiment lexicon")?,
        None => LexiconClassifier::default(),
    };
    log::debug!("Lexicon has {} polarity words", lexicon.vocabulary_size());
    Ok(Arc::new(lexicon))
}
