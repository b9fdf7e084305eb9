//! Output-pixel to sample-point mapping and grid-wide formula evaluation
//!
//! Pixel `(x, y)` of a `width × height` output maps linearly onto the
//! complex rectangle `[min, max]`, with `x` along the real axis and `y`
//! along the imaginary axis. Rows of the transformed grid follow `y`.

use crate::formula::pattern::Formula;
use crate::io::configuration::MAX_OUTPUT_DIMENSION;
use crate::io::error::{Result, invalid_parameter};
use crate::math::scaling::{bounding_box, extend_bounds, scale_between_ranges};
use ndarray::Array2;
use num_complex::Complex64;

/// Rectangle of the complex plane the output image samples
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSpace {
    min: Complex64,
    max: Complex64,
}

impl SampleSpace {
    /// Create a sample space from opposite corners
    ///
    /// # Errors
    ///
    /// Returns [`crate::PatternError::InvalidParameter`] if a corner is not
    /// finite or the rectangle has no width or height
    pub fn new(min: Complex64, max: Complex64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(invalid_parameter(
                "sample_space",
                &format!("{min} .. {max}"),
                &"corners must be finite",
            ));
        }
        if min.re >= max.re || min.im >= max.im {
            return Err(invalid_parameter(
                "sample_space",
                &format!("{min} .. {max}"),
                &"min must be below max on both axes",
            ));
        }
        Ok(Self { min, max })
    }

    /// Lower corner
    pub const fn min(&self) -> Complex64 {
        self.min
    }

    /// Upper corner
    pub const fn max(&self) -> Complex64 {
        self.max
    }

    /// Sample point for output pixel `(x, y)`
    pub fn sample_point(&self, x: u32, y: u32, width: u32, height: u32) -> Complex64 {
        Complex64::new(
            scale_between_ranges(
                f64::from(x),
                0.0,
                f64::from(width),
                self.min.re,
                self.max.re,
            ),
            scale_between_ranges(
                f64::from(y),
                0.0,
                f64::from(height),
                self.min.im,
                self.max.im,
            ),
        )
    }
}

/// Formula totals over the output grid with per-term value ranges
#[derive(Debug, Clone)]
pub struct TransformedGrid {
    /// Total at each output pixel, indexed `[row, col]`
    pub values: Array2<Complex64>,
    /// Bounding box of each top-level term's contributions, `None` if never finite
    pub term_ranges: Vec<Option<(Complex64, Complex64)>>,
}

impl TransformedGrid {
    /// Bounding box of every finite total
    pub fn total_range(&self) -> Option<(Complex64, Complex64)> {
        bounding_box(&self.values)
    }
}

fn validate_dimension(parameter: &'static str, value: u32) -> Result<()> {
    if value == 0 || value > MAX_OUTPUT_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must be between 1 and {MAX_OUTPUT_DIMENSION}"),
        ));
    }
    Ok(())
}

/// Evaluate `formula` at every output pixel
///
/// # Errors
///
/// Returns [`crate::PatternError::InvalidParameter`] if either dimension is
/// zero or larger than the supported maximum
pub fn transform_samples<F>(
    formula: &F,
    space: &SampleSpace,
    width: u32,
    height: u32,
) -> Result<TransformedGrid>
where
    F: Formula + ?Sized,
{
    transform_samples_with_progress(formula, space, width, height, |_| {})
}

/// Evaluate `formula` at every output pixel, reporting each finished row
///
/// `on_row` receives the number of rows completed so far.
///
/// # Errors
///
/// Returns [`crate::PatternError::InvalidParameter`] if either dimension is
/// zero or larger than the supported maximum
pub fn transform_samples_with_progress<F, P>(
    formula: &F,
    space: &SampleSpace,
    width: u32,
    height: u32,
    mut on_row: P,
) -> Result<TransformedGrid>
where
    F: Formula + ?Sized,
    P: FnMut(u32),
{
    validate_dimension("width", width)?;
    validate_dimension("height", height)?;

    let mut values = Vec::with_capacity(width as usize * height as usize);
    let mut term_ranges: Vec<Option<(Complex64, Complex64)>> = Vec::new();

    for y in 0..height {
        for x in 0..width {
            let result = formula.calculate(space.sample_point(x, y, width, height));

            if term_ranges.len() < result.contribution_by_term.len() {
                term_ranges.resize(result.contribution_by_term.len(), None);
            }
            for (range, contribution) in term_ranges
                .iter_mut()
                .zip(&result.contribution_by_term)
            {
                *range = extend_bounds(*range, *contribution);
            }

            values.push(result.total);
        }
        on_row(y + 1);
    }

    let values = Array2::from_shape_vec((height as usize, width as usize), values)
        .map_err(|e| invalid_parameter("dimensions", &format!("{width}x{height}"), &e))?;

    Ok(TransformedGrid {
        values,
        term_ranges,
    })
}
