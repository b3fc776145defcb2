use eframe::egui;

use crate::state::AppState;
use crate::ui::images::ImageCache;
use crate::ui::{pages, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct EsgSentimentApp {
    pub state: AppState,
    images: ImageCache,
}

impl EsgSentimentApp {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            images: ImageCache::default(),
        }
    }
}

impl eframe::App for EsgSentimentApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: navigation ----
        egui::SidePanel::left("menu_panel")
            .default_width(180.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: logo + selected page ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::logo(ui, &self.state, &mut self.images);
            pages::show_page(ui, &mut self.state, &mut self.images);
        });
    }
}
