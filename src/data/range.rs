/// Fraction of the data span added above and below.
pub const PAD_FRACTION: f64 = 0.1;
/// Smallest padding, so flat series still get a visible band.
pub const MIN_PAD: f64 = 0.05;

/// Bounds used when there is nothing to measure.
const DEFAULT_LIMITS: (f64, f64) = (0.0, 1.0);

/// Padded y-axis limits covering every value in `arrays`.
///
/// NaN and infinite values are ignored. With no values at all the default
/// `(0, 1)` is returned.
pub fn y_limits(arrays: &[&[f64]]) -> (f64, f64) {
    let (min, max) = arrays
        .iter()
        .flat_map(|arr| arr.iter().copied())
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if min > max {
        return DEFAULT_LIMITS;
    }

    let pad = if is_close(min, max) {
        (max.abs() * PAD_FRACTION).max(MIN_PAD)
    } else {
        ((max - min) * PAD_FRACTION).max(MIN_PAD)
    };
    (min - pad, max + pad)
}

/// `numpy.isclose` with its default tolerances.
fn is_close(a: f64, b: f64) -> bool {
    const RTOL: f64 = 1e-5;
    const ATOL: f64 = 1e-8;
    (a - b).abs() <= ATOL + RTOL * b.abs()
}
