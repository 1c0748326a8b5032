use eframe::egui::{self, ScrollArea, Ui};
use egui_plot::{Corner, Legend, Line, LineStyle, Plot, PlotBounds, PlotPoints};

use crate::pipeline::{ChartData, PanelContent};
use crate::session::{LegendPosition, PlotStyle};
use crate::state::AppState;

const TITLE_HEIGHT: f32 = 22.0;

// ---------------------------------------------------------------------------
// Composite grid (central panel)
// ---------------------------------------------------------------------------

/// Columns of the composite grid for `n` panels.
pub fn grid_columns(n: usize) -> usize {
    if n > 4 {
        3
    } else {
        2
    }
}

/// Render every panel of the last report as a grid of overlay plots.
pub fn composite_grid(ui: &mut Ui, state: &AppState) {
    let report = match &state.report {
        Some(r) => r,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Select XVG files and a save folder, then press Generate");
            });
            return;
        }
    };

    let ncols = grid_columns(report.panels.len());
    let gap = ui.spacing().item_spacing.x;
    let cell_w = ((ui.available_width() - gap * (ncols as f32 - 1.0)) / ncols as f32).max(160.0);
    let cell_h = cell_w * 0.8;
    // Same appearance as the saved images, not the live controls.
    let style = &report.style;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            egui::Grid::new("composite_grid")
                .num_columns(ncols)
                .spacing([gap, gap])
                .show(ui, |ui: &mut Ui| {
                    for (i, panel) in report.panels.iter().enumerate() {
                        ui.allocate_ui(egui::vec2(cell_w, cell_h), |ui: &mut Ui| {
                            match &panel.content {
                                PanelContent::Chart(chart) => {
                                    chart_cell(ui, chart, style, cell_w, cell_h)
                                }
                                PanelContent::Placeholder(text) => {
                                    ui.set_min_size(egui::vec2(cell_w, cell_h));
                                    ui.centered_and_justified(|ui: &mut Ui| {
                                        ui.label(text);
                                    });
                                }
                            }
                        });
                        if (i + 1) % ncols == 0 {
                            ui.end_row();
                        }
                    }
                });
        });
}

fn chart_cell(ui: &mut Ui, chart: &ChartData, style: &PlotStyle, width: f32, height: f32) {
    let kind = chart.kind;

    ui.vertical(|ui: &mut Ui| {
        ui.set_width(width);
        ui.vertical_centered(|ui: &mut Ui| {
            ui.strong(kind.label());
        });

        Plot::new(("panel", kind.key()))
            .width(width)
            .height(height - TITLE_HEIGHT)
            .legend(Legend::default().position(legend_corner(chart.legend)))
            .x_axis_label(kind.x_axis_label())
            .y_axis_label(kind.y_axis_label())
            .show_grid(style.show_grid)
            .allow_boxed_zoom(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_double_click_reset(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(plot_bounds(chart));
                let wt: PlotPoints = chart.baseline.points().map(|(x, y)| [x, y]).collect();
                plot_ui.line(
                    Line::new(wt)
                        .name("WT")
                        .color(style.baseline_color)
                        .width(1.8),
                );

                for variant in &chart.variants {
                    let points: PlotPoints = variant.series.points().map(|(x, y)| [x, y]).collect();
                    plot_ui.line(
                        Line::new(points)
                            .name(&variant.label)
                            .color(style.variant_colors.color_for(&variant.label))
                            .style(LineStyle::dashed_loose())
                            .width(1.3),
                    );
                }
            });
    });
}

/// Fixed view matching the PNG: x from zero to the last sample, padded y.
fn plot_bounds(chart: &ChartData) -> PlotBounds {
    let (x_lo, x_hi) = chart.x_bounds;
    let (y_lo, y_hi) = chart.y_bounds;
    PlotBounds::from_min_max([x_lo, y_lo], [x_hi, y_hi])
}

fn legend_corner(legend: LegendPosition) -> Corner {
    match legend {
        LegendPosition::UpperLeft => Corner::LeftTop,
        LegendPosition::LowerRight => Corner::RightBottom,
        LegendPosition::LowerLeft => Corner::LeftBottom,
        LegendPosition::UpperRight | LegendPosition::Best => Corner::RightTop,
    }
}
