use std::path::Path;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::session::LegendPosition;
use crate::state::{AppState, Status};

/// Thumbnail width in the saved-images list.
const THUMB_WIDTH: f32 = 220.0;

// ---------------------------------------------------------------------------
// Left side panel – inputs, appearance, generate
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("1. Input files and output folder");
            ui.separator();

            if ui.button("📂 Select XVG files…").clicked() {
                select_files_dialog(state);
            }
            let n_files = state.session.files.len();
            if n_files == 0 {
                ui.label(RichText::new("No files selected").italics());
            } else {
                ui.strong(format!("{n_files} files selected."));
            }

            ui.add_space(6.0);
            if ui.button("💾 Choose save folder…").clicked() {
                select_output_dialog(state);
            }
            match &state.session.output_dir {
                Some(dir) => ui.label(format!("Save to: {}", dir.display())),
                None => ui.label(RichText::new("Save to: not selected").italics()),
            };

            ui.add_space(10.0);
            ui.heading("2. Plot appearance");
            ui.separator();

            let style = &mut state.session.style;
            ui.horizontal(|ui: &mut Ui| {
                ui.color_edit_button_srgba(&mut style.baseline_color);
                ui.label("WT color");
            });
            ui.checkbox(&mut style.show_grid, "Show grid");

            ui.horizontal(|ui: &mut Ui| {
                ui.label("Legend position");
                egui::ComboBox::from_id_salt("legend_position")
                    .selected_text(style.legend.to_string())
                    .show_ui(ui, |ui: &mut Ui| {
                        for pos in LegendPosition::ALL {
                            ui.selectable_value(&mut style.legend, pos, pos.to_string());
                        }
                    });
            });

            if !style.variant_colors.is_empty() {
                ui.add_space(6.0);
                ui.strong("Mutant colors");
                for (label, color) in style.variant_colors.entries_mut() {
                    ui.horizontal(|ui: &mut Ui| {
                        ui.color_edit_button_srgba(color);
                        ui.label(format!("Color for {label}"));
                    });
                }
            }

            ui.add_space(10.0);
            ui.separator();
            if ui
                .button(RichText::new("🚀 Generate all detected plots").strong())
                .clicked()
            {
                run_generate(ui, state);
            }

            saved_images(ui, state);
        });
}

fn run_generate(ui: &Ui, state: &mut AppState) {
    state.generate();
    // Images overwritten by this run must be re-read.
    if let Some(report) = &state.report {
        for path in &report.saved {
            ui.ctx().forget_image(&file_uri(path));
        }
    }
}

/// Thumbnails of the PNGs written by the last Generate.
fn saved_images(ui: &mut Ui, state: &AppState) {
    let Some(report) = &state.report else {
        return;
    };
    if report.saved.is_empty() {
        return;
    }

    ui.add_space(10.0);
    egui::CollapsingHeader::new(RichText::new(format!("Saved images ({})", report.saved.len())).strong())
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            for path in &report.saved {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                ui.label(name);
                ui.add(
                    egui::Image::new(file_uri(path))
                        .max_width(THUMB_WIDTH)
                        .corner_radius(4.0),
                );
            }
        });
}

fn file_uri(path: &Path) -> String {
    format!("file://{}", path.display())
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Select XVG files…").clicked() {
                select_files_dialog(state);
                ui.close_menu();
            }
            if ui.button("Choose save folder…").clicked() {
                select_output_dialog(state);
                ui.close_menu();
            }
            if ui.button("Generate").clicked() {
                run_generate(ui, state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(report) = &state.report {
            let charts = report.saved.len();
            ui.label(format!(
                "{} properties detected, {} charts",
                report.panels.len(),
                charts
            ));
            ui.separator();
        }

        match &state.status {
            Some(Status::Info(msg)) => {
                ui.label(RichText::new(format!("✅ {msg}")).color(Color32::DARK_GREEN));
            }
            Some(Status::Error(msg)) => {
                ui.label(RichText::new(msg).color(Color32::RED));
            }
            None => {}
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn select_files_dialog(state: &mut AppState) {
    let mut dialog = rfd::FileDialog::new()
        .set_title("Select all .xvg files")
        .add_filter("XVG files", &["xvg"]);
    if let Some(dir) = state.session.files.first().and_then(|f| f.parent()) {
        dialog = dialog.set_directory(dir);
    }

    if let Some(files) = dialog.pick_files() {
        state.set_files(files);
    }
}

pub fn select_output_dialog(state: &mut AppState) {
    let mut dialog = rfd::FileDialog::new().set_title("Select output folder");
    if let Some(dir) = &state.session.output_dir {
        dialog = dialog.set_directory(dir);
    }

    if let Some(dir) = dialog.pick_folder() {
        state.set_output_dir(dir);
    }
}
