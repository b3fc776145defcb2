use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::state::{AppState, Page};
use crate::ui::images::{ImageCache, Shape};
use crate::ui::panels::{error_label, open_file_dialog};
use crate::ui::{plot, table};

const ESG_DESCRIPTION: &str = "ESG merupakan panduan harus diterapkan oleh perusahaan yang ingin \
berinvestasi dengan mempertimbangkan aspek lingkungan, sosial, dan tata kelola. Konsep ini \
digunakan sebagai acuan ukur untuk mengevaluasi dampak sosial dan keberlanjutan dari investasi \
yang dilakukan oleh perusahaan.";

const PROJECT_DESCRIPTION: &str = "Proyek ini bertujuan untuk menganalisis sentimen dari teks \
yang diberikan. Dengan menggunakan model klasifikasi sentimen, kita dapat mengidentifikasi \
sentimen positif, negatif, atau netral dari teks yang diinput.";

const DATA_DESCRIPTION: &str = "Data proyek ini bertipe One-Hot Encoding: dataset dengan angka 0 \
dan 1 dapat mengindikasikan penggunaan one-hot encoding, di mana setiap kolom mewakili satu \
kategori dan bernilai 0 atau 1 untuk menunjukkan ketiadaan atau kehadiran kategori tersebut. \
Misalnya kolom \"Kategori Positif\", \"Kategori Netral\", dan \"Kategori Negatif\": nilai 0 \
menunjukkan kategori tersebut tidak ada, sementara nilai 1 menunjukkan kategori tersebut ada.";

const POSTER_FILE: &str = "poster.png";

/// Team roster: (name, role, portrait file), laid out in two columns.
const TEAM: [[(&str, &str, &str); 2]; 2] = [
    [
        ("Denisa Septalian", "Project Leader & Analist.", "team1.png"),
        ("Lintang Karunia A.", "Visualization.", "team2.png"),
    ],
    [
        ("Bernardinus Rico", "Modeler 1.", "team3.png"),
        ("Khalid Jundullah", "Modeler 2.", "team4.png"),
    ],
];

// ---------------------------------------------------------------------------
// Deskripsi
// ---------------------------------------------------------------------------

pub fn description_page(ui: &mut Ui, state: &AppState, images: &mut ImageCache) {
    ui.heading("Deskripsi ESG");
    ui.label(ESG_DESCRIPTION);
    ui.add_space(12.0);

    ui.heading("Deskripsi Proyek");
    ui.label(RichText::new("Proyek Analisis Sentimen ESG").strong().size(16.0));
    ui.label(PROJECT_DESCRIPTION);
    ui.add_space(6.0);
    ui.label(DATA_DESCRIPTION);
    ui.add_space(12.0);

    let poster = state.config.asset(POSTER_FILE);
    if let Ok(texture) = images.get(ui.ctx(), &poster, Shape::AsIs) {
        ui.add(egui::Image::from_texture(texture).max_width(ui.available_width()));
    }
}

// ---------------------------------------------------------------------------
// Analisis Sentimen
// ---------------------------------------------------------------------------

pub fn analysis_page(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Dashboard Analisis Sentimen");
    ui.label("Ini adalah aplikasi untuk analisis sentimen dengan Topik ESG");
    ui.add_space(8.0);

    // ---- Single text ----
    ui.heading("Prediksi Kalimat");
    ui.add(
        egui::TextEdit::multiline(&mut state.input_text)
            .hint_text("Masukkan teks untuk analisis sentimen")
            .desired_width(f32::INFINITY)
            .desired_rows(4),
    );
    if ui.button("Analisis").clicked() {
        state.analyze_input();
    }
    if let Some(result) = &state.single_result {
        ui.label(RichText::new(result.summary()).strong());
    }
    if let Some(msg) = &state.single_error {
        error_label(ui, msg);
    }
    ui.add_space(12.0);

    // ---- CSV upload ----
    ui.heading("Prediksi File");
    ui.horizontal(|ui: &mut Ui| {
        if ui
            .button("Upload file CSV untuk analisis sentimen dalam jumlah banyak")
            .clicked()
        {
            open_file_dialog(state);
        }
        if let Some(path) = &state.upload_path {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            ui.label(name);
        }
    });
    if let Some(msg) = &state.batch_error {
        error_label(ui, msg);
    }

    let Some(run) = &state.batch else {
        return;
    };

    if !run.skipped_rows.is_empty() {
        egui::CollapsingHeader::new(format!(
            "{} baris rusak dilewati",
            run.skipped_rows.len()
        ))
        .id_salt("skipped_rows")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            for skipped in &run.skipped_rows {
                ui.label(format!("baris {}: {}", skipped.line, skipped.reason));
            }
        });
    }
    let unknown = run.distribution.count_of(&run.unknown_label);
    if unknown > 0 {
        ui.label(format!(
            "{unknown} baris tanpa teks diberi label {}.",
            run.unknown_label
        ));
    }
    let failed = run.failed_count();
    if failed > 0 {
        error_label(ui, &format!("{failed} baris gagal diklasifikasi."));
    }

    ui.label("Hasil Prediksi Sentimen:");
    let colors = state.label_colors.as_ref();
    ui.push_id("results_table", |ui: &mut Ui| {
        table::results_table(ui, run, &state.config.prediction_column, colors);
    });
    ui.add_space(12.0);
    plot::sentiment_pie(ui, run, colors);
}

// ---------------------------------------------------------------------------
// Our Team
// ---------------------------------------------------------------------------

pub fn team_page(ui: &mut Ui, state: &AppState, images: &mut ImageCache) {
    ui.heading("Our Team Gcoder");
    ui.add_space(8.0);

    ui.columns(2, |columns| {
        for (ui, members) in columns.iter_mut().zip(TEAM.iter()) {
            for (name, role, portrait) in members {
                let path = state.config.asset(portrait);
                match images.get(ui.ctx(), &path, Shape::Circle) {
                    Ok(texture) => {
                        ui.add(egui::Image::from_texture(texture).max_width(ui.available_width()));
                    }
                    Err(e) => error_label(ui, &format!("Error creating circular image: {e}")),
                }
                ui.label(RichText::new(*name).strong());
                ui.label(*role);
                ui.add_space(12.0);
            }
        }
    });
}

/// Dispatch to the page selected in the menu.
pub fn show_page(ui: &mut Ui, state: &mut AppState, images: &mut ImageCache) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| match state.page {
            Page::Description => description_page(ui, state, images),
            Page::Analysis => analysis_page(ui, state),
            Page::Team => team_page(ui, state, images),
        });
}
