use std::path::PathBuf;

use crate::data::classify::variant_labels;
use crate::pipeline::{self, Report};
use crate::session::Session;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Message shown in the top bar after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Current selection and appearance; passed to the pipeline as-is.
    pub session: Session,

    /// Outcome of the last successful Generate.
    pub report: Option<Report>,

    /// Status / error message shown in the UI.
    pub status: Option<Status>,
}

impl AppState {
    /// Replace the file selection and refresh the per-mutant colour slots.
    pub fn set_files(&mut self, files: Vec<PathBuf>) {
        let labels = variant_labels(files.iter().map(PathBuf::as_path));
        log::info!(
            "Selected {} files, mutants {:?}",
            files.len(),
            labels
        );
        self.session.style.variant_colors.sync(&labels);
        self.session.files = files;
    }

    pub fn set_output_dir(&mut self, dir: PathBuf) {
        log::info!("Output folder {}", dir.display());
        self.session.output_dir = Some(dir);
    }

    /// Run the pipeline for the current session.
    ///
    /// A blocking error keeps the previous report on screen.
    pub fn generate(&mut self) {
        match pipeline::generate(&self.session) {
            Ok(report) => {
                self.status = Some(Status::Info(format!(
                    "{} plots generated, {} saved in: {}",
                    report.panels.len(),
                    report.saved.len(),
                    report.output_dir.display()
                )));
                self.report = Some(report);
            }
            Err(e) => {
                let e = anyhow::Error::new(e);
                log::error!("Generate failed: {e:#}");
                self.status = Some(Status::Error(format!("{e:#}")));
            }
        }
    }
}
