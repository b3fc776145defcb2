use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::{AppState, Page};
use crate::ui::images::{ImageCache, Shape};

pub const LOGO_FILE: &str = "Logofix.png";

// ---------------------------------------------------------------------------
// Left side panel – navigation
// ---------------------------------------------------------------------------

/// Render the navigation menu.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Menu");
    ui.separator();
    ui.label("Pilih Menu");

    for page in Page::ALL {
        ui.radio_value(&mut state.page, page, page.title());
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Upload CSV…").clicked() {
                state.page = Page::Analysis;
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();
        ui.label(format!("Classifier: {}", state.classifier.name()));

        if let Some(run) = &state.batch {
            ui.separator();
            ui.label(format!("{} baris dianalisis", run.rows.len()));
        }
    });
}

/// Logo shown at the top of every page. A missing file is only logged.
pub fn logo(ui: &mut Ui, state: &AppState, images: &mut ImageCache) {
    let path = state.config.asset(LOGO_FILE);
    if let Ok(texture) = images.get(ui.ctx(), &path, Shape::AsIs) {
        ui.add(egui::Image::from_texture(texture).max_width(200.0));
        ui.add_space(4.0);
    }
}

/// Inline error under the control that produced it.
pub fn error_label(ui: &mut Ui, msg: &str) {
    ui.label(RichText::new(msg).color(Color32::RED));
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Upload file CSV untuk analisis sentimen")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.analyze_upload(&path);
    }
}
