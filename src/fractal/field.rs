//! Field evaluation: buffer lifecycle, parallel fill and the evaluated matrix

use log::debug;
use ndarray::{Array2, ArrayView2};

use crate::fractal::escape::{IterationBudget, escape_time};
use crate::fractal::geometry::{GridGeometry, PlaneBounds};
use crate::fractal::scheduler::{RowScheduler, ScheduleConfig};
use crate::io::configuration::{ITERATIONS, MAX_X, MAX_Y, MIN_X, MIN_Y, RESOLUTION};
use crate::io::error::{FieldError, Result, invalid_parameter};

/// Everything that determines one evaluation run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    /// Pixel grid and plane mapping
    pub geometry: GridGeometry,
    /// Iteration cap per point
    pub budget: IterationBudget,
    /// Worker count and chunk size
    pub schedule: ScheduleConfig,
}

impl FieldConfig {
    /// The fixed field the command-line tool renders, using every hardware thread
    ///
    /// # Errors
    ///
    /// Returns an error if the compiled-in constants describe an invalid grid
    pub fn standard() -> Result<Self> {
        let bounds = PlaneBounds {
            min_x: MIN_X,
            max_x: MAX_X,
            min_y: MIN_Y,
            max_y: MAX_Y,
        };
        let budget = IterationBudget::new(ITERATIONS)
            .ok_or_else(|| invalid_parameter("iterations", &ITERATIONS, &"must be positive"))?;

        Ok(Self {
            geometry: GridGeometry::new(bounds, RESOLUTION)?,
            budget,
            schedule: ScheduleConfig::for_available_parallelism(),
        })
    }
}

/// Dense matrix of escape times, row 0 at `min_y` and column 0 at `min_x`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationField {
    counts: Array2<u32>,
    budget: IterationBudget,
}

impl IterationField {
    /// Wrap a row-major buffer of `height * width` counts
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer length does not match the dimensions
    pub fn from_counts(
        counts: Vec<u32>,
        height: usize,
        width: usize,
        budget: IterationBudget,
    ) -> Result<Self> {
        let counts = Array2::from_shape_vec((height, width), counts).map_err(|shape_error| {
            FieldError::Shape {
                reason: format!("{height}x{width}: {shape_error}"),
            }
        })?;
        Ok(Self { counts, budget })
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.counts.nrows()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.counts.ncols()
    }

    /// Budget the field was evaluated with
    pub const fn budget(&self) -> IterationBudget {
        self.budget
    }

    /// Escape time at a pixel, `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.counts.get([row, col]).copied()
    }

    /// Read-only 2-D view of the counts
    pub fn view(&self) -> ArrayView2<'_, u32> {
        self.counts.view()
    }

    /// Rows in output order
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.counts
            .as_slice()
            .unwrap_or_default()
            .chunks_exact(self.width().max(1))
    }

    /// Counts as one row-major slice
    pub fn as_slice(&self) -> &[u32] {
        self.counts.as_slice().unwrap_or_default()
    }

    /// Number of pixels whose orbit never escaped
    pub fn bounded_count(&self) -> usize {
        self.counts.iter().filter(|&&count| count == 0).count()
    }
}

/// Owns the worker pool and evaluates fields on it
pub struct FieldEvaluator {
    config: FieldConfig,
    scheduler: RowScheduler,
}

impl FieldEvaluator {
    /// Start the worker pool for `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the worker threads cannot be spawned
    pub fn new(config: FieldConfig) -> Result<Self> {
        let scheduler = RowScheduler::new(config.schedule)?;
        Ok(Self { config, scheduler })
    }

    /// Configuration this evaluator runs
    pub const fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Number of worker threads in use
    pub fn workers(&self) -> usize {
        self.scheduler.workers()
    }

    /// Evaluate the whole field
    ///
    /// # Errors
    ///
    /// Returns an error if the result buffer cannot be allocated
    pub fn evaluate(&self) -> Result<IterationField> {
        self.evaluate_with_progress(|_rows| {})
    }

    /// Evaluate the whole field, reporting finished rows to `on_rows_done`
    ///
    /// # Errors
    ///
    /// Returns an error if the result buffer cannot be allocated
    pub fn evaluate_with_progress<F>(&self, on_rows_done: F) -> Result<IterationField>
    where
        F: Fn(usize) + Sync,
    {
        let geometry = &self.config.geometry;
        let mut cells = self.scheduler.allocate_zeroed(geometry.cell_count())?;
        self.scheduler
            .fill(&mut cells, geometry, self.config.budget, on_rows_done)?;

        let field = IterationField::from_counts(
            cells,
            geometry.height(),
            geometry.width(),
            self.config.budget,
        )?;
        debug!(
            "evaluated {}x{} field, {} bounded points",
            field.height(),
            field.width(),
            field.bounded_count()
        );
        Ok(field)
    }
}

/// Single-threaded pixel-by-pixel evaluation of the same field
///
/// Serves as the reference the parallel schedule must reproduce exactly.
///
/// # Errors
///
/// Returns an error if the result buffer cannot be allocated
pub fn evaluate_sequential(
    geometry: &GridGeometry,
    budget: IterationBudget,
) -> Result<IterationField> {
    let cells = geometry.cell_count();
    let mut counts = Vec::new();
    counts
        .try_reserve_exact(cells)
        .map_err(|_reserve_error| FieldError::Allocation { cells })?;

    for row in 0..geometry.height() {
        for col in 0..geometry.width() {
            counts.push(escape_time(geometry.map_pixel(row, col), budget));
        }
    }

    IterationField::from_counts(counts, geometry.height(), geometry.width(), budget)
}
