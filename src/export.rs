//! Standalone PNG export of comparison charts.
//!
//! Charts are drawn with the [`plotters`] bitmap backend, so export works
//! without a window or GPU.

use std::path::Path;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use thiserror::Error;

use crate::color::to_rgb;
use crate::pipeline::ChartData;
use crate::session::{LegendPosition, PlotStyle};

/// Output resolution of a standalone chart.
pub const IMAGE_SIZE: (u32, u32) = (1600, 1200);

const BASELINE_WIDTH: u32 = 3;
const VARIANT_WIDTH: u32 = 2;
const DASH: u32 = 14;
const DASH_GAP: u32 = 8;

/// Errors raised while drawing or encoding a chart.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),
}

type Result<T> = core::result::Result<T, ExportError>;

/// Draw `chart` and write it to `path` as PNG.
///
/// WT is a solid line, each mutant a dashed line in its own colour. The
/// x range is exactly `chart.x_bounds` and the y range `chart.y_bounds`.
pub fn save_chart(chart: &ChartData, style: &PlotStyle, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, IMAGE_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ExportError::DrawingArea(e.to_string()))?;

    let (x_lo, x_hi) = chart.x_bounds;
    let (y_lo, y_hi) = chart.y_bounds;
    let title = format!("{}: WT vs Mutants", chart.kind.label());

    let mut ctx = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 44))
        .margin(24)
        .x_label_area_size(80)
        .y_label_area_size(110)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
        .map_err(|e| ExportError::ChartConfig(e.to_string()))?;

    let mut mesh = ctx.configure_mesh();
    mesh.x_desc(chart.kind.x_axis_label())
        .y_desc(chart.kind.y_axis_label())
        .axis_desc_style(("sans-serif", 32))
        .label_style(("sans-serif", 26));
    if style.show_grid {
        mesh.light_line_style(WHITE).bold_line_style(BLACK.mix(0.15));
    } else {
        mesh.disable_mesh();
    }
    mesh.draw().map_err(|e| ExportError::Drawing(e.to_string()))?;

    let wt_style = to_rgb(style.baseline_color).stroke_width(BASELINE_WIDTH);
    ctx.draw_series(LineSeries::new(chart.baseline.points(), wt_style))
        .map_err(|e| ExportError::Drawing(e.to_string()))?
        .label("WT")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], wt_style));

    for variant in &chart.variants {
        let line = to_rgb(style.variant_colors.color_for(&variant.label)).stroke_width(VARIANT_WIDTH);
        ctx.draw_series(DashedLineSeries::new(
            variant.series.points(),
            DASH,
            DASH_GAP,
            line,
        ))
        .map_err(|e| ExportError::Drawing(e.to_string()))?
        .label(variant.label.as_str())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], line));
    }

    ctx.configure_series_labels()
        .position(series_label_position(chart.legend))
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .label_font(("sans-serif", 26))
        .draw()
        .map_err(|e| ExportError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| ExportError::Drawing(e.to_string()))?;

    Ok(())
}

fn series_label_position(legend: LegendPosition) -> SeriesLabelPosition {
    match legend {
        LegendPosition::UpperLeft => SeriesLabelPosition::UpperLeft,
        LegendPosition::LowerRight => SeriesLabelPosition::LowerRight,
        LegendPosition::LowerLeft => SeriesLabelPosition::LowerLeft,
        LegendPosition::UpperRight | LegendPosition::Best => SeriesLabelPosition::UpperRight,
    }
}
