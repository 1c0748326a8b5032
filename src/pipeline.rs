use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::data::classify::{classify, role};
use crate::data::group::group;
use crate::data::loader::load_xvg;
use crate::data::model::{Group, PropertyKind, Role, Series, VariantSeries};
use crate::data::normalize::normalize;
use crate::data::range::y_limits;
use crate::export::{self, ExportError};
use crate::session::{LegendPosition, PlotStyle, Session};

// ---------------------------------------------------------------------------
// Errors that stop a Generate request
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Please select .xvg files first.")]
    NoFiles,

    #[error("Please select a valid output folder.")]
    InvalidOutputDir,

    #[error("No recognized property files found.")]
    NoRecognizedFiles,

    #[error("Failed to save {kind} comparison")]
    Export {
        kind: PropertyKind,
        #[source]
        source: ExportError,
    },
}

// ---------------------------------------------------------------------------
// Result of a Generate request
// ---------------------------------------------------------------------------

/// Everything needed to draw one overlay chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub kind: PropertyKind,
    pub baseline: Series,
    /// Mutants with at least one finite sample.
    pub variants: Vec<VariantSeries>,
    /// x starts at zero and ends at the last sample, no margin.
    pub x_bounds: (f64, f64),
    pub y_bounds: (f64, f64),
    /// Concrete legend corner (never `Best`).
    pub legend: LegendPosition,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelContent {
    Chart(ChartData),
    Placeholder(String),
}

/// One cell of the composite grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub kind: PropertyKind,
    pub content: PanelContent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub panels: Vec<Panel>,
    /// Standalone images written, in panel order.
    pub saved: Vec<PathBuf>,
    pub output_dir: PathBuf,
    /// Appearance the images were drawn with; the grid reuses it.
    pub style: PlotStyle,
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Run classify → load → normalize → group → export for the session.
///
/// Unclassified files are skipped, unplottable groups become placeholder
/// panels. Only the conditions in [`GenerateError`] abort the batch.
pub fn generate(session: &Session) -> Result<Report, GenerateError> {
    if session.files.is_empty() {
        return Err(GenerateError::NoFiles);
    }
    let output_dir = match &session.output_dir {
        Some(dir) if dir.is_dir() => dir.clone(),
        _ => return Err(GenerateError::InvalidOutputDir),
    };

    let groups = group(load_classified(&session.files));
    if groups.is_empty() {
        return Err(GenerateError::NoRecognizedFiles);
    }

    let panels = build_panels(&groups, &session.style);

    let mut saved = Vec::new();
    for panel in &panels {
        let PanelContent::Chart(chart) = &panel.content else {
            continue;
        };
        let path = image_path(&output_dir, chart.kind);
        export::save_chart(chart, &session.style, &path).map_err(|source| {
            GenerateError::Export {
                kind: chart.kind,
                source,
            }
        })?;
        log::info!("Saved {}", path.display());
        saved.push(path);
    }

    log::info!(
        "{} panels generated, {} images saved in {}",
        panels.len(),
        saved.len(),
        output_dir.display()
    );

    Ok(Report {
        panels,
        saved,
        output_dir,
        style: session.style.clone(),
    })
}

/// Classify, read and normalize every recognised file.
///
/// An unreadable WT file becomes an empty series (reported as "Empty data");
/// an unreadable mutant file is left out.
fn load_classified(files: &[PathBuf]) -> Vec<(PropertyKind, Role, Series)> {
    files
        .iter()
        .filter_map(|path| {
            let Some(kind) = classify(path) else {
                log::debug!("Skipping unrecognised file {}", path.display());
                return None;
            };
            let role = role(path);
            let series = match (load_xvg(path), &role) {
                (Ok(series), _) => series,
                (Err(e), Role::Baseline) => {
                    log::warn!("Cannot read {}: {e}", path.display());
                    Series::default()
                }
                (Err(e), Role::Variant(_)) => {
                    log::warn!("Skipping unreadable {}: {e}", path.display());
                    return None;
                }
            };
            Some((kind, role, normalize(&series, kind)))
        })
        .collect()
}

/// Turn groups into grid panels: a chart when the group is complete, a
/// placeholder notice otherwise.
pub fn build_panels(groups: &[Group], style: &PlotStyle) -> Vec<Panel> {
    groups
        .iter()
        .map(|g| {
            let content = match g.plottable_baseline() {
                Ok(baseline) => PanelContent::Chart(chart_data(g.kind, baseline, &g.variants, style)),
                Err(reason) => PanelContent::Placeholder(reason.notice(g.kind)),
            };
            Panel {
                kind: g.kind,
                content,
            }
        })
        .collect()
}

fn chart_data(
    kind: PropertyKind,
    baseline: &Series,
    variants: &[VariantSeries],
    style: &PlotStyle,
) -> ChartData {
    // Non-finite samples cannot be placed on an axis.
    let baseline = baseline.finite();
    let variants: Vec<VariantSeries> = variants
        .iter()
        .map(|v| VariantSeries {
            label: v.label.clone(),
            series: v.series.finite(),
        })
        .filter(|v| !v.series.is_empty())
        .collect();

    let all_series = || std::iter::once(&baseline).chain(variants.iter().map(|v| &v.series));

    let y_arrays: Vec<&[f64]> = all_series().map(|s| s.y.as_slice()).collect();
    let y_bounds = y_limits(&y_arrays);

    let x_max = all_series()
        .flat_map(|s| s.x.iter().copied())
        .fold(f64::NEG_INFINITY, f64::max);
    let x_bounds = (0.0, if x_max > 0.0 { x_max } else { 1.0 });

    let legend = style.legend.resolve(all_series(), x_bounds, y_bounds);

    ChartData {
        kind,
        baseline,
        variants,
        x_bounds,
        y_bounds,
        legend,
    }
}

/// Output path of the standalone image for `kind`.
pub fn image_path(output_dir: &Path, kind: PropertyKind) -> PathBuf {
    output_dir.join(kind.image_file_name())
}
