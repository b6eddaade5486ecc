//! Parallel escape-time evaluation of the quadratic Mandelbrot map
//!
//! A fixed rectangle of the complex plane is sampled on a square pixel grid.
//! Every pixel records the iteration at which its orbit escapes, or 0 if it
//! stays bounded, and the resulting matrix is written as comma-separated text.

#![forbid(unsafe_code)]

/// Grid mapping, escape-time iteration and parallel field evaluation
pub mod fractal;
/// Command-line interface, configuration, errors and output
pub mod io;

pub use io::error::{FieldError, Result};
