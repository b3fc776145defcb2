use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoint, PlotPoints, Polygon, Text};

use crate::analysis::AnalysisRun;
use crate::analysis::report::{Slice, format_percentage};
use crate::color::LabelColors;

/// Angular step used to approximate each arc.
const ARC_STEP: f64 = 0.05;
const LABEL_RADIUS: f64 = 1.15;
const PERCENT_RADIUS: f64 = 0.6;

// ---------------------------------------------------------------------------
// Sentiment distribution pie chart
// ---------------------------------------------------------------------------

/// Render the label distribution of a batch as a pie chart.
pub fn sentiment_pie(ui: &mut Ui, run: &AnalysisRun, colors: Option<&LabelColors>) {
    if run.distribution.is_empty() {
        ui.label("Tidak ada baris untuk digambarkan.");
        return;
    }
    let slices = run.distribution.slices();

    Plot::new("sentiment_pie")
        .legend(Legend::default())
        .data_aspect(1.0)
        .height(360.0)
        .include_x(-1.5)
        .include_x(1.5)
        .include_y(-1.3)
        .include_y(1.3)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            for slice in &slices {
                let color = colors
                    .map(|c| c.color_for(&slice.label))
                    .unwrap_or(Color32::LIGHT_BLUE);

                plot_ui.polygon(
                    Polygon::new(wedge_points(slice))
                        .fill_color(color)
                        .stroke(Stroke::new(1.0, Color32::WHITE))
                        .name(slice.annotation()),
                );

                let mid = slice.start_angle + slice.sweep_angle / 2.0;
                plot_ui.text(Text::new(
                    polar(LABEL_RADIUS, mid),
                    RichText::new(&slice.label).strong(),
                ));
                plot_ui.text(Text::new(
                    polar(PERCENT_RADIUS, mid),
                    RichText::new(format_percentage(slice.percentage())).color(Color32::BLACK),
                ));
            }
        });
}

/// Closed outline of one wedge: centre, then the arc.
fn wedge_points(slice: &Slice) -> PlotPoints<'static> {
    let steps = ((slice.sweep_angle / ARC_STEP).ceil() as usize).max(2);
    let mut points = Vec::with_capacity(steps + 2);
    // A single slice is a full disc; the centre would draw a seam.
    if slice.fraction < 1.0 {
        points.push([0.0, 0.0]);
    }
    for i in 0..=steps {
        let angle = slice.start_angle + slice.sweep_angle * i as f64 / steps as f64;
        points.push([angle.cos(), angle.sin()]);
    }
    PlotPoints::new(points)
}

fn polar(radius: f64, angle: f64) -> PlotPoint {
    PlotPoint::new(radius * angle.cos(), radius * angle.sin())
}
