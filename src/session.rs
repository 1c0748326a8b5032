use std::fmt;
use std::path::PathBuf;

use eframe::egui::Color32;

use crate::color::VariantColors;
use crate::data::model::Series;

// ---------------------------------------------------------------------------
// Legend placement
// ---------------------------------------------------------------------------

/// Legend corner, with `Best` picking the emptiest corner per chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendPosition {
    #[default]
    Best,
    UpperRight,
    UpperLeft,
    LowerRight,
    LowerLeft,
}

impl LegendPosition {
    pub const ALL: [LegendPosition; 5] = [
        LegendPosition::Best,
        LegendPosition::UpperRight,
        LegendPosition::UpperLeft,
        LegendPosition::LowerRight,
        LegendPosition::LowerLeft,
    ];

    /// Tie-break order when resolving `Best`.
    const CORNERS: [LegendPosition; 4] = [
        LegendPosition::UpperRight,
        LegendPosition::UpperLeft,
        LegendPosition::LowerLeft,
        LegendPosition::LowerRight,
    ];

    /// Resolve `Best` to a concrete corner for the given chart.
    ///
    /// Each quadrant of the visible area is scored by how many samples fall in
    /// it; the least crowded wins. Concrete positions are returned unchanged.
    pub fn resolve<'a>(
        self,
        series: impl IntoIterator<Item = &'a Series>,
        x_bounds: (f64, f64),
        y_bounds: (f64, f64),
    ) -> LegendPosition {
        if self != LegendPosition::Best {
            return self;
        }

        let x_mid = (x_bounds.0 + x_bounds.1) / 2.0;
        let y_mid = (y_bounds.0 + y_bounds.1) / 2.0;
        let mut counts = [0usize; 4];
        for (x, y) in series.into_iter().flat_map(|s| s.points()) {
            if x.is_nan() || y.is_nan() {
                continue;
            }
            let idx = match (x >= x_mid, y >= y_mid) {
                (true, true) => 0,
                (false, true) => 1,
                (false, false) => 2,
                (true, false) => 3,
            };
            counts[idx] += 1;
        }

        let mut best = 0;
        for (i, &n) in counts.iter().enumerate() {
            if n < counts[best] {
                best = i;
            }
        }
        Self::CORNERS[best]
    }
}

impl fmt::Display for LegendPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LegendPosition::Best => "best",
            LegendPosition::UpperRight => "upper right",
            LegendPosition::UpperLeft => "upper left",
            LegendPosition::LowerRight => "lower right",
            LegendPosition::LowerLeft => "lower left",
        })
    }
}

// ---------------------------------------------------------------------------
// Session – everything a Generate request needs
// ---------------------------------------------------------------------------

/// Appearance settings shared by the composite grid and the PNG export.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotStyle {
    pub baseline_color: Color32,
    pub variant_colors: VariantColors,
    pub show_grid: bool,
    pub legend: LegendPosition,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            baseline_color: Color32::BLACK,
            variant_colors: VariantColors::default(),
            show_grid: true,
            legend: LegendPosition::Best,
        }
    }
}

/// The user's current selection, handed to the pipeline on Generate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub files: Vec<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub style: PlotStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concrete_positions_pass_through() {
        let s: Series = [(0.0, 0.0)].into_iter().collect();
        assert_eq!(
            LegendPosition::LowerLeft.resolve([&s], (0.0, 1.0), (0.0, 1.0)),
            LegendPosition::LowerLeft
        );
    }

    #[test]
    fn best_avoids_the_data() {
        // Rising line: lower-left and upper-right are crowded.
        let rising: Series = (0..100).map(|i| (i as f64, i as f64)).collect();
        let corner = LegendPosition::Best.resolve([&rising], (0.0, 100.0), (0.0, 100.0));
        assert_eq!(corner, LegendPosition::UpperLeft);

        // Data hugging the top edge pushes the legend down.
        let high: Series = (0..100).map(|i| (i as f64, 95.0)).collect();
        let corner = LegendPosition::Best.resolve([&high], (0.0, 100.0), (0.0, 100.0));
        assert_eq!(corner, LegendPosition::LowerLeft);
    }

    #[test]
    fn best_without_data_prefers_upper_right() {
        let corner = LegendPosition::Best.resolve(std::iter::empty(), (0.0, 1.0), (0.0, 1.0));
        assert_eq!(corner, LegendPosition::UpperRight);
    }

    #[test]
    fn display_names() {
        let names: Vec<String> = LegendPosition::ALL.iter().map(|p| p.to_string()).collect();
        assert_eq!(
            names,
            ["best", "upper right", "upper left", "lower right", "lower left"]
        );
    }
}
