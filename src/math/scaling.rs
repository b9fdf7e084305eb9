//! Linear range mapping and complex bounding boxes

use num_complex::Complex64;

/// Map `value` from `[in_min, in_max]` onto `[out_min, out_max]`
///
/// No clamping: values outside the input range land outside the output range.
pub fn scale_between_ranges(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let ratio = (value - in_min) / (in_max - in_min);
    ratio.mul_add(out_max - out_min, out_min)
}

/// Grow `bounds` so it also holds `value`
///
/// Non-finite values leave the bounds unchanged.
pub fn extend_bounds(
    bounds: Option<(Complex64, Complex64)>,
    value: Complex64,
) -> Option<(Complex64, Complex64)> {
    if !value.is_finite() {
        return bounds;
    }
    match bounds {
        None => Some((value, value)),
        Some((min, max)) => Some((
            Complex64::new(min.re.min(value.re), min.im.min(value.im)),
            Complex64::new(max.re.max(value.re), max.im.max(value.im)),
        )),
    }
}

/// Smallest axis-aligned box holding every finite value
///
/// Returns `(min, max)` corners, or `None` when no finite value is present.
pub fn bounding_box<'a, I>(values: I) -> Option<(Complex64, Complex64)>
where
    I: IntoIterator<Item = &'a Complex64>,
{
    values
        .into_iter()
        .fold(None, |bounds, value| extend_bounds(bounds, *value))
}
