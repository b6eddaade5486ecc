//! Work distribution of field rows over a fixed worker pool
//!
//! The result buffer is cut into disjoint chunks of whole rows before any
//! work is dispatched. Each chunk becomes its own task on a work-stealing
//! pool, so a worker that finishes a band of fast-escaping rows immediately
//! claims the next unclaimed chunk instead of waiting on a slow band of
//! interior rows. Because every chunk is an exclusive `&mut` slice, no lock
//! or atomic touches the buffer, and the result cannot depend on which
//! worker ran which chunk.

use std::num::NonZeroUsize;

use log::{debug, trace};
use rayon::prelude::{
    IndexedParallelIterator, IntoParallelIterator, ParallelExtend, ParallelIterator,
    ParallelSliceMut,
};
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::fractal::escape::{IterationBudget, escape_time};
use crate::fractal::geometry::GridGeometry;
use crate::io::configuration::CHUNK_ROWS;
use crate::io::error::{FieldError, Result, invalid_parameter};

/// Worker count and chunk granularity for the parallel fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleConfig {
    workers: usize,
    chunk_rows: usize,
}

impl ScheduleConfig {
    /// Create a schedule with an explicit worker count and chunk size
    ///
    /// # Errors
    ///
    /// Returns an error if either value is zero
    pub fn new(workers: usize, chunk_rows: usize) -> Result<Self> {
        if workers == 0 {
            return Err(invalid_parameter("workers", &workers, &"must be positive"));
        }
        if chunk_rows == 0 {
            return Err(invalid_parameter(
                "chunk_rows",
                &chunk_rows,
                &"must be positive",
            ));
        }
        Ok(Self {
            workers,
            chunk_rows,
        })
    }

    /// One worker per hardware thread with the default chunk size
    pub fn for_available_parallelism() -> Self {
        let workers = std::thread::available_parallelism().map_or(1, NonZeroUsize::get);
        Self {
            workers,
            chunk_rows: CHUNK_ROWS,
        }
    }

    /// Number of worker threads
    pub const fn workers(&self) -> usize {
        self.workers
    }

    /// Rows per scheduling chunk
    pub const fn chunk_rows(&self) -> usize {
        self.chunk_rows
    }
}

/// Fixed-size pool that owns the worker threads for one evaluation run
pub struct RowScheduler {
    pool: ThreadPool,
    config: ScheduleConfig,
}

impl RowScheduler {
    /// Start the worker threads
    ///
    /// # Errors
    ///
    /// Returns an error if the operating system refuses to spawn the threads
    pub fn new(config: ScheduleConfig) -> Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.workers())
            .thread_name(|index| format!("escapefield-worker-{index}"))
            .build()?;
        debug!(
            "started {} workers, {} rows per chunk",
            config.workers(),
            config.chunk_rows()
        );
        Ok(Self { pool, config })
    }

    /// Schedule this pool was built from
    pub const fn config(&self) -> ScheduleConfig {
        self.config
    }

    /// Number of threads actually running in the pool
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Allocate a zeroed buffer of `cells` counts
    ///
    /// The allocation is requested up front so a failure surfaces as an
    /// error rather than an abort; zeroing then runs as a parallel pass.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::Allocation`] if the buffer cannot be reserved
    pub fn allocate_zeroed(&self, cells: usize) -> Result<Vec<u32>> {
        let mut buffer: Vec<u32> = Vec::new();
        buffer
            .try_reserve_exact(cells)
            .map_err(|_reserve_error| FieldError::Allocation { cells })?;

        self.pool
            .install(|| buffer.par_extend((0..cells).into_par_iter().map(|_cell| 0_u32)));
        trace!("zeroed {cells} cells");
        Ok(buffer)
    }

    /// Write the escape time of every pixel of `geometry` into `cells`
    ///
    /// `cells` is laid out row-major with `geometry.width()` columns. After
    /// each chunk completes, `on_rows_done` receives the number of rows it
    /// held; it may be called from any worker.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::Shape`] if `cells` does not hold exactly one
    /// slot per pixel
    pub fn fill<F>(
        &self,
        cells: &mut [u32],
        geometry: &GridGeometry,
        budget: IterationBudget,
        on_rows_done: F,
    ) -> Result<()>
    where
        F: Fn(usize) + Sync,
    {
        if cells.len() != geometry.cell_count() {
            return Err(FieldError::Shape {
                reason: format!(
                    "buffer holds {} cells, grid {}x{} needs {}",
                    cells.len(),
                    geometry.height(),
                    geometry.width(),
                    geometry.cell_count()
                ),
            });
        }

        let width = geometry.width();
        let chunk_rows = self.config.chunk_rows();
        let chunk_len = width.saturating_mul(chunk_rows);

        self.pool.install(|| {
            cells
                .par_chunks_mut(chunk_len)
                .with_max_len(1)
                .enumerate()
                .for_each(|(chunk_index, chunk)| {
                    let first_row = chunk_index * chunk_rows;
                    let mut rows_done = 0;
                    for (offset, row) in chunk.chunks_exact_mut(width).enumerate() {
                        fill_row(row, first_row + offset, geometry, budget);
                        rows_done += 1;
                    }
                    on_rows_done(rows_done);
                });
        });

        Ok(())
    }
}

/// Evaluate one row of pixels in place
///
/// Columns are independent; the loop carries no state between them.
#[inline]
pub fn fill_row(
    row: &mut [u32],
    row_index: usize,
    geometry: &GridGeometry,
    budget: IterationBudget,
) {
    for (col, slot) in row.iter_mut().enumerate() {
        *slot = escape_time(geometry.map_pixel(row_index, col), budget);
    }
}
