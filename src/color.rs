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
            let hsl = Hsl::new(hue, 0.75, 0.5);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0).round() as u8,
                (rgb.green * 255.0).round() as u8,
                (rgb.blue * 255.0).round() as u8,
            )
        })
        .collect()
}

/// Convert to the colour type of the PNG backend.
pub fn to_rgb(c: Color32) -> plotters::style::RGBColor {
    plotters::style::RGBColor(c.r(), c.g(), c.b())
}

// ---------------------------------------------------------------------------
// Color mapping: mutant label → Color32
// ---------------------------------------------------------------------------

/// Per-mutant line colours, editable from the UI.
///
/// Colours the user picked survive a new file selection as long as the label
/// is still present; new labels get palette colours.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl Default for VariantColors {
    fn default() -> Self {
        VariantColors {
            mapping: BTreeMap::new(),
            // matplotlib's first cycle colour
            default_color: Color32::from_rgb(0x1f, 0x77, 0xb4),
        }
    }
}

impl VariantColors {
    /// Make the mapping cover exactly `labels`.
    pub fn sync(&mut self, labels: &BTreeSet<String>) {
        self.mapping.retain(|label, _| labels.contains(label));

        let missing: Vec<&String> = labels
            .iter()
            .filter(|l| !self.mapping.contains_key(*l))
            .collect();
        if missing.is_empty() {
            return;
        }

        // Hues are spread over the full label set so colours stay distinct.
        let palette = generate_palette(labels.len());
        for (i, label) in labels.iter().enumerate() {
            if missing.contains(&label) {
                self.mapping.insert(label.clone(), palette[i]);
            }
        }
    }

    /// Look up the colour for a mutant label.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping
            .get(label)
            .copied()
            .unwrap_or(self.default_color)
    }

    /// Mutable access for the colour pickers, in label order.
    pub fn entries_mut(&mut self) -> impl Iterator<Item = (&String, &mut Color32)> {
        self.mapping.iter_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn palette_is_distinct() {
        let p = generate_palette(5);
        assert_eq!(p.len(), 5);
        let unique: BTreeSet<[u8; 4]> = p.iter().map(|c| c.to_array()).collect();
        assert_eq!(unique.len(), 5);
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn sync_keeps_user_choices_and_drops_stale_labels() {
        let mut colors = VariantColors::default();
        colors.sync(&labels(&["a", "b"]));
        for (label, c) in colors.entries_mut() {
            if label == "a" {
                *c = Color32::from_rgb(1, 2, 3);
            }
        }

        colors.sync(&labels(&["a", "c"]));
        assert_eq!(colors.color_for("a"), Color32::from_rgb(1, 2, 3));
        let keys: Vec<String> = colors.entries_mut().map(|(k, _)| k.clone()).collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn unknown_label_falls_back_to_default() {
        let colors = VariantColors::default();
        assert_eq!(colors.color_for("zzz"), Color32::from_rgb(0x1f, 0x77, 0xb4));
    }

    #[test]
    fn converts_to_backend_color() {
        let rgb = to_rgb(Color32::from_rgb(10, 20, 30));
        assert_eq!((rgb.0, rgb.1, rgb.2), (10, 20, 30));
    }
}
