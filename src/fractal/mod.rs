//! Escape-time field computation
//!
//! - Pixel to plane mapping
//! - Per-point escape-time iteration
//! - Chunked parallel scheduling of rows
//! - Result buffer lifecycle

/// Per-point escape-time iteration
pub mod escape;
/// Field evaluation and the evaluated matrix
pub mod field;
/// Grid geometry and pixel mapping
pub mod geometry;
/// Row scheduling across the worker pool
pub mod scheduler;

pub use escape::{IterationBudget, escape_time};
pub use field::{FieldConfig, FieldEvaluator, IterationField, evaluate_sequential};
pub use geometry::{ComplexPoint, GridGeometry, PlaneBounds};
pub use scheduler::{RowScheduler, ScheduleConfig};
