use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::analysis::ERROR_LABEL;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Label colours: sentiment label → Color32
// ---------------------------------------------------------------------------

/// Stable colours for the labels of one distribution. Well-known sentiment
/// labels get fixed colours; anything else draws from the palette.
#[derive(Debug, Clone)]
pub struct LabelColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl LabelColors {
    pub fn new<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        let mut mapping = BTreeMap::new();
        let mut others = Vec::new();
        for label in labels {
            match fixed_color(label) {
                Some(c) => {
                    mapping.insert(label.to_string(), c);
                }
                None => others.push(label.to_string()),
            }
        }
        let palette = generate_palette(others.len());
        mapping.extend(others.into_iter().zip(palette));

        LabelColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping
            .get(label)
            .copied()
            .unwrap_or(self.default_color)
    }
}

fn fixed_color(label: &str) -> Option<Color32> {
    match label.to_ascii_uppercase().as_str() {
        "POSITIVE" => Some(Color32::from_rgb(76, 175, 80)),
        "NEGATIVE" => Some(Color32::from_rgb(229, 57, 53)),
        "NEUTRAL" => Some(Color32::from_rgb(66, 133, 244)),
        l if l == ERROR_LABEL => Some(Color32::DARK_GRAY),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_colours() {
        let colours = generate_palette(4);
        assert_eq!(colours.len(), 4);
        for (i, a) in colours.iter().enumerate() {
            for b in &colours[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn known_labels_get_fixed_colours() {
        let colors = LabelColors::new(["POSITIVE", "negative", "UNKNOWN", "LABEL_7"]);
        assert_eq!(colors.color_for("POSITIVE"), Color32::from_rgb(76, 175, 80));
        assert_eq!(colors.color_for("negative"), Color32::from_rgb(229, 57, 53));
        assert_ne!(colors.color_for("UNKNOWN"), colors.color_for("LABEL_7"));
        assert_eq!(colors.color_for("missing"), Color32::GRAY);
    }
}
