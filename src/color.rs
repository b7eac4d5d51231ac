use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

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
// Diagnosis colors – one mapping shared by every chart
// ---------------------------------------------------------------------------

/// Awareness-ribbon pinks for the two canonical diagnoses. A presentation
/// constant, applied consistently across the pie, bar, scatter, histogram
/// and severity charts.
const MALIGNANT_PINK: Color32 = Color32::from_rgb(0xE7, 0x54, 0x80);
const BENIGN_PINK: Color32 = Color32::from_rgb(0xFF, 0xC0, 0xCB);

fn fixed_color(label: &str) -> Option<Color32> {
    match label.to_lowercase().as_str() {
        "malignant" | "maligno" => Some(MALIGNANT_PINK),
        "benign" | "benigno" => Some(BENIGN_PINK),
        _ => None,
    }
}

/// Maps diagnosis labels to colours: fixed pinks for the known labels,
/// generated hues for anything else.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build the mapping for the dataset's category set.
    pub fn new(categories: &BTreeSet<String>) -> Self {
        let fallback = generate_palette(categories.len());
        let mapping: BTreeMap<String, Color32> = categories
            .iter()
            .zip(fallback)
            .map(|(label, hue)| {
                let color = fixed_color(label).unwrap_or(hue);
                (label.clone(), color)
            })
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a diagnosis label.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping
            .get(label)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_get_fixed_pinks_in_any_locale() {
        let cats: BTreeSet<String> =
            ["Maligno", "Benigno"].iter().map(|s| s.to_string()).collect();
        let cm = ColorMap::new(&cats);
        assert_eq!(cm.color_for("Maligno"), MALIGNANT_PINK);
        assert_eq!(cm.color_for("Benigno"), BENIGN_PINK);

        let cats: BTreeSet<String> =
            ["Malignant", "Benign"].iter().map(|s| s.to_string()).collect();
        let cm = ColorMap::new(&cats);
        assert_eq!(cm.color_for("Malignant"), MALIGNANT_PINK);
    }

    #[test]
    fn unknown_labels_fall_back_to_generated_hues() {
        let cats: BTreeSet<String> = ["Unknown"].iter().map(|s| s.to_string()).collect();
        let cm = ColorMap::new(&cats);
        assert_ne!(cm.color_for("Unknown"), Color32::GRAY);
        assert_eq!(cm.color_for("not-in-dataset"), Color32::GRAY);
    }

    #[test]
    fn palette_spacing_is_stable() {
        assert!(generate_palette(0).is_empty());
        let p = generate_palette(4);
        assert_eq!(p.len(), 4);
        assert_eq!(p, generate_palette(4));
    }
}
