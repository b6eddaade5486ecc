//! Escape-time iteration of the quadratic map z -> z^2 + c

use crate::fractal::geometry::ComplexPoint;
use crate::io::configuration::ESCAPE_RADIUS_SQUARED;

/// Positive cap on the number of orbit steps evaluated per point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationBudget(u32);

impl IterationBudget {
    /// Create a budget, rejecting zero
    pub const fn new(limit: u32) -> Option<Self> {
        if limit == 0 { None } else { Some(Self(limit)) }
    }

    /// Maximum number of steps
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Iteration at which the orbit of `c` first reaches |z|^2 >= 4, or 0 if it
/// stays bounded for the whole budget
///
/// Steps are 1-based: a point whose first iterate already escapes returns 1.
/// Real and imaginary parts are updated explicitly so the loop body stays a
/// handful of multiply-adds.
#[inline]
pub fn escape_time(c: ComplexPoint, budget: IterationBudget) -> u32 {
    let mut real = 0.0_f64;
    let mut imag = 0.0_f64;

    for step in 1..=budget.get() {
        let real_next = real * real - imag * imag + c.real;
        let imag_next = 2.0 * real * imag + c.imag;
        real = real_next;
        imag = imag_next;

        if real * real + imag * imag >= ESCAPE_RADIUS_SQUARED {
            return step;
        }
    }

    0
}
