//! Pixel grid geometry and the pixel to complex-plane mapping
//!
//! A geometry is fixed at construction: the plane bounds and resolution
//! determine the pixel dimensions and the step between neighbouring pixels.
//! Both axes share the horizontal step, so pixels are square in plane units.

use crate::io::error::{Result, invalid_parameter};

/// Point of the complex plane as explicit real and imaginary parts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexPoint {
    /// Real component
    pub real: f64,
    /// Imaginary component
    pub imag: f64,
}

/// Axis-aligned plane region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneBounds {
    /// Lower bound of the real axis
    pub min_x: f64,
    /// Upper bound of the real axis
    pub max_x: f64,
    /// Lower bound of the imaginary axis
    pub min_y: f64,
    /// Upper bound of the imaginary axis
    pub max_y: f64,
}

impl PlaneBounds {
    /// Extent along the real axis
    pub fn span_x(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Extent along the imaginary axis
    pub fn span_y(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Immutable mapping between pixel coordinates and plane coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    bounds: PlaneBounds,
    resolution: u32,
    width: usize,
    height: usize,
    step: f64,
}

impl GridGeometry {
    /// Derive pixel dimensions and step from plane bounds and a resolution
    ///
    /// `width = span_x * resolution`, `height = span_y * resolution` and
    /// `step = span_x / width`.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is not finite, a span is not positive, the
    /// resolution is zero or either derived dimension rounds to zero pixels
    pub fn new(bounds: PlaneBounds, resolution: u32) -> Result<Self> {
        let named = [
            ("min_x", bounds.min_x),
            ("max_x", bounds.max_x),
            ("min_y", bounds.min_y),
            ("max_y", bounds.max_y),
        ];
        for (parameter, value) in named {
            if !value.is_finite() {
                return Err(invalid_parameter(parameter, &value, &"must be finite"));
            }
        }

        if bounds.span_x() <= 0.0 {
            return Err(invalid_parameter(
                "max_x",
                &bounds.max_x,
                &format!("must exceed min_x ({})", bounds.min_x),
            ));
        }
        if bounds.span_y() <= 0.0 {
            return Err(invalid_parameter(
                "max_y",
                &bounds.max_y,
                &format!("must exceed min_y ({})", bounds.min_y),
            ));
        }
        if resolution == 0 {
            return Err(invalid_parameter(
                "resolution",
                &resolution,
                &"must be positive",
            ));
        }

        let width = pixel_extent(bounds.span_x(), resolution);
        let height = pixel_extent(bounds.span_y(), resolution);
        if width == 0 || height == 0 {
            return Err(invalid_parameter(
                "resolution",
                &resolution,
                &format!("produces an empty {width}x{height} grid"),
            ));
        }

        Ok(Self {
            bounds,
            resolution,
            width,
            height,
            step: bounds.span_x() / width as f64,
        })
    }

    /// Plane region covered by the grid
    pub const fn bounds(&self) -> PlaneBounds {
        self.bounds
    }

    /// Pixels per plane unit
    pub const fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Plane distance between neighbouring pixels
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// Total number of pixels
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Real coordinate of a column
    #[inline]
    pub fn real_at(&self, col: usize) -> f64 {
        col as f64 * self.step + self.bounds.min_x
    }

    /// Imaginary coordinate of a row
    #[inline]
    pub fn imag_at(&self, row: usize) -> f64 {
        row as f64 * self.step + self.bounds.min_y
    }

    /// Plane point sampled by pixel `(row, col)`
    ///
    /// Row 0 sits on `min_y` and column 0 on `min_x`.
    #[inline]
    pub fn map_pixel(&self, row: usize, col: usize) -> ComplexPoint {
        ComplexPoint {
            real: self.real_at(col),
            imag: self.imag_at(row),
        }
    }
}

fn pixel_extent(span: f64, resolution: u32) -> usize {
    (span * f64::from(resolution)).round() as usize
}
