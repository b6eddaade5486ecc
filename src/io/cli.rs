//! Command-line interface for rendering the escape-time field to a matrix file

use crate::fractal::field::{FieldConfig, FieldEvaluator, IterationField};
use crate::io::error::{FieldError, Result};
use crate::io::matrix::save_matrix;
use crate::io::progress::RowProgress;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "escapefield")]
#[command(
    author,
    version,
    about = "Compute an escape-time fractal field and save it as a text matrix"
)]
/// Command-line arguments for the field renderer
pub struct Cli {
    /// Destination of the comma-separated iteration matrix
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Suppress status lines and progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Output path, required for every run
    ///
    /// # Errors
    ///
    /// Returns a usage error if no output path was given
    pub fn output_path(&self) -> Result<&Path> {
        self.output.as_deref().ok_or_else(|| FieldError::Usage {
            reason: "Please specify the output file as a parameter.".to_string(),
        })
    }

    /// Check if status and progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Timing and shape of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Worker threads used for the computation
    pub workers: usize,
    /// Wall-clock time of the computation, excluding output
    pub elapsed: Duration,
    /// Rows written
    pub height: usize,
    /// Values per row
    pub width: usize,
}

/// Runs one evaluation and writes its matrix
pub struct FieldProcessor {
    cli: Cli,
    config: FieldConfig,
}

impl FieldProcessor {
    /// Create a processor for the given arguments and field configuration
    pub const fn new(cli: Cli, config: FieldConfig) -> Self {
        Self { cli, config }
    }

    /// Evaluate the field and save it to the output path
    ///
    /// The output path is checked before any computation starts. The file is
    /// only opened once the field is complete.
    ///
    /// # Errors
    ///
    /// Returns an error if no output path was given, the worker pool or
    /// result buffer cannot be set up, or the output file cannot be written
    pub fn process(&self) -> Result<RunSummary> {
        let output = self.cli.output_path()?;

        let evaluator = FieldEvaluator::new(self.config)?;
        self.status(&format!("Using {} worker threads", evaluator.workers()));

        let start = Instant::now();
        let field = self.evaluate(&evaluator)?;
        let elapsed = start.elapsed();
        self.status(&format!("Time elapsed: {} seconds.", elapsed.as_secs()));

        save_matrix(&field, output)?;

        Ok(RunSummary {
            workers: evaluator.workers(),
            elapsed,
            height: field.height(),
            width: field.width(),
        })
    }

    fn evaluate(&self, evaluator: &FieldEvaluator) -> Result<IterationField> {
        let progress = RowProgress::new(
            self.config.geometry.height(),
            self.cli.should_show_progress(),
        );
        let field = evaluator.evaluate_with_progress(|rows| progress.advance(rows));
        progress.finish();
        field
    }

    // Allow print for user-facing status lines
    #[allow(clippy::print_stdout)]
    fn status(&self, line: &str) {
        if self.cli.should_show_progress() {
            println!("{line}");
        }
    }
}
