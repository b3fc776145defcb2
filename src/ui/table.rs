use eframe::egui::{Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::analysis::{AnalysisRun, RowOutcome};
use crate::color::LabelColors;

const ROW_HEIGHT: f32 = 20.0;

/// Results table: every uploaded column plus the prediction column.
pub fn results_table(
    ui: &mut Ui,
    run: &AnalysisRun,
    prediction_column: &str,
    colors: Option<&LabelColors>,
) {
    let n_cols = run.headers.len();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .max_scroll_height(320.0)
        .column(Column::auto().at_least(32.0))
        .columns(Column::auto().at_least(80.0).clip(true), n_cols)
        .column(Column::remainder().at_least(120.0))
        .header(ROW_HEIGHT, |mut header| {
            header.col(|ui| {
                ui.strong("#");
            });
            for name in &run.headers {
                header.col(|ui| {
                    ui.strong(name);
                });
            }
            header.col(|ui| {
                ui.strong(prediction_column);
            });
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, run.rows.len(), |mut row| {
                let idx = row.index();
                let analysed = &run.rows[idx];

                row.col(|ui| {
                    ui.label(idx.to_string());
                });
                for cell in &analysed.record.cells {
                    row.col(|ui| {
                        ui.label(cell.to_string());
                    });
                }
                row.col(|ui| {
                    let label = run.label_of(idx);
                    let color = colors
                        .map(|c| c.color_for(label))
                        .unwrap_or(Color32::LIGHT_GRAY);
                    let response = ui.label(RichText::new(label).color(color));
                    if let RowOutcome::Failed(reason) = &analysed.outcome {
                        response.on_hover_text(reason);
                    }
                });
            });
        });
}
