use super::model::{PropertyKind, Series};

/// A final x value above this is taken to mean the time axis is in ps.
pub const PS_THRESHOLD: f64 = 500.0;

const PS_PER_NS: f64 = 1000.0;
const AREA_SCALE: f64 = 100.0;
const LENGTH_SCALE: f64 = 10.0;

/// Return a unit-converted copy of `series` for display.
///
/// * time axis: ps → ns when the last sample is past [`PS_THRESHOLD`]
///   (per-residue kinds are never rescaled on x)
/// * area kinds: nm² → Å²
/// * other Å kinds: nm → Å
///
/// Only the last sample decides the time conversion, so normalizing an
/// already-normalized series can rescale it again.
pub fn normalize(series: &Series, kind: PropertyKind) -> Series {
    let mut out = series.clone();
    let Some(&last_x) = out.x.last() else {
        return out;
    };

    if !kind.is_per_residue() && last_x > PS_THRESHOLD {
        out.x.iter_mut().for_each(|x| *x /= PS_PER_NS);
    }

    let y_scale = if kind.is_area_scaled() {
        Some(AREA_SCALE)
    } else if kind.unit() == "Å" {
        Some(LENGTH_SCALE)
    } else {
        None
    };
    if let Some(scale) = y_scale {
        out.y.iter_mut().for_each(|y| *y *= scale);
    }

    out
}
