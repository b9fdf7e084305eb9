//! Source-image recolouring and PNG export

use crate::io::error::{PatternError, Result, invalid_parameter};
use crate::math::scaling::scale_between_ranges;
use image::{ImageBuffer, Rgba, RgbaImage};
use ndarray::Array2;
use num_complex::Complex64;
use std::path::Path;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Window of transformed values that pick a colour from the source image
///
/// The window's real axis spans the source image's width and the imaginary
/// axis its height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorBounds {
    min: Complex64,
    max: Complex64,
}

impl ColorBounds {
    /// Create a colour window from opposite corners
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidParameter`] if the window has no width or height
    pub fn new(min: Complex64, max: Complex64) -> Result<Self> {
        if !(min.re < max.re && min.im < max.im) {
            return Err(invalid_parameter(
                "color_bounds",
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

    /// Whether `value` is finite and inside the window, edges included
    pub fn contains(&self, value: Complex64) -> bool {
        value.is_finite()
            && value.re >= self.min.re
            && value.re <= self.max.re
            && value.im >= self.min.im
            && value.im <= self.max.im
    }

    // Source pixel for a value inside the window, clamped to the image
    fn source_pixel(&self, value: Complex64, width: u32, height: u32) -> (u32, u32) {
        let x = scale_between_ranges(value.re, self.min.re, self.max.re, 0.0, f64::from(width));
        let y = scale_between_ranges(value.im, self.min.im, self.max.im, 0.0, f64::from(height));
        (
            (x.floor().max(0.0) as u32).min(width.saturating_sub(1)),
            (y.floor().max(0.0) as u32).min(height.saturating_sub(1)),
        )
    }
}

/// Load the colour source image as RGBA
///
/// # Errors
///
/// Returns [`PatternError::ImageLoad`] if the file cannot be opened or decoded
pub fn load_source(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|e| PatternError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgba8())
}

/// Colour every output pixel from the source image
///
/// The output has one pixel per entry of `transformed`, with rows along
/// `y`. Values outside `bounds` or not finite become transparent.
pub fn recolor(source: &RgbaImage, transformed: &Array2<Complex64>, bounds: &ColorBounds) -> RgbaImage {
    let (rows, cols) = transformed.dim();
    let (source_width, source_height) = source.dimensions();
    let mut output = ImageBuffer::new(cols as u32, rows as u32);

    for ((row, col), value) in transformed.indexed_iter() {
        let color = if bounds.contains(*value) {
            let (x, y) = bounds.source_pixel(*value, source_width, source_height);
            source.get_pixel_checked(x, y).copied().unwrap_or(TRANSPARENT)
        } else {
            TRANSPARENT
        };
        output.put_pixel(col as u32, row as u32, color);
    }

    output
}

/// Save an image as PNG, creating missing parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_png(img: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| PatternError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| PatternError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
