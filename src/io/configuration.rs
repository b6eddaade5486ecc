//! Fixed field parameters and process-level constants

// Plane region of the rendered field
/// Lower bound of the real axis
pub const MIN_X: f64 = -2.0;
/// Upper bound of the real axis
pub const MAX_X: f64 = 1.0;
/// Lower bound of the imaginary axis
pub const MIN_Y: f64 = -1.0;
/// Upper bound of the imaginary axis
pub const MAX_Y: f64 = 1.0;

/// Pixels per plane unit along both axes
pub const RESOLUTION: u32 = 3000;

/// Escape-time iteration cap per point
pub const ITERATIONS: u32 = 3000;

// Large enough to amortize task dispatch, small enough that a slow band of
// interior rows does not leave other workers idle
/// Rows claimed by a worker per scheduling step
pub const CHUNK_ROWS: usize = 128;

/// Squared modulus at which an orbit counts as escaped (|z| >= 2)
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

// Exit codes, kept distinct per failure class
/// Missing or malformed command-line arguments
pub const USAGE_EXIT_CODE: u8 = 2;
/// Output matrix could not be opened or written
pub const OUTPUT_EXIT_CODE: u8 = 3;
/// Result buffer allocation failed
pub const ALLOCATION_EXIT_CODE: u8 = 4;
/// Invalid field parameters or worker pool failure
pub const CONFIGURATION_EXIT_CODE: u8 = 5;

// Output settings
/// Separator between values on a matrix line
pub const VALUE_SEPARATOR: u8 = b',';
/// Separator between matrix lines
pub const LINE_SEPARATOR: u8 = b'\n';

/// Template for the row progress bar
pub const PROGRESS_TEMPLATE: &str = "[{elapsed_precise}] Rows: [{bar:40.cyan/blue}] {pos}/{len}";
