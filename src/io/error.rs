//! Error types and exit code mapping for field evaluation and output

use std::fmt;
use std::path::PathBuf;

use crate::io::configuration::{
    ALLOCATION_EXIT_CODE, CONFIGURATION_EXIT_CODE, OUTPUT_EXIT_CODE, USAGE_EXIT_CODE,
};

/// Main error type for all field operations
#[derive(Debug)]
pub enum FieldError {
    /// Command line did not supply what the run needs
    Usage {
        /// Description of the missing or malformed input
        reason: String,
    },

    /// File system operation on the output matrix failed
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Result buffer could not be allocated
    Allocation {
        /// Number of cells requested
        cells: usize,
    },

    /// Grid geometry, budget or schedule parameter failed validation
    InvalidGeometry {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Worker thread pool could not be started
    WorkerPool {
        /// Underlying pool construction error
        source: rayon::ThreadPoolBuildError,
    },

    /// Result buffer does not match the grid dimensions
    Shape {
        /// Description of the mismatch
        reason: String,
    },
}

impl FieldError {
    /// Process exit code reported for this error
    ///
    /// Usage and output failures keep distinct codes so callers can tell them apart.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Usage { .. } => USAGE_EXIT_CODE,
            Self::FileSystem { .. } => OUTPUT_EXIT_CODE,
            Self::Allocation { .. } => ALLOCATION_EXIT_CODE,
            Self::InvalidGeometry { .. } | Self::WorkerPool { .. } | Self::Shape { .. } => {
                CONFIGURATION_EXIT_CODE
            }
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage { reason } => write!(f, "Usage error: {reason}"),
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Allocation { cells } => {
                write!(f, "Unable to allocate result buffer of {cells} cells")
            }
            Self::InvalidGeometry {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::WorkerPool { source } => {
                write!(f, "Failed to start worker pool: {source}")
            }
            Self::Shape { reason } => write!(f, "Result buffer shape mismatch: {reason}"),
        }
    }
}

impl std::error::Error for FieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::WorkerPool { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for field results
pub type Result<T> = std::result::Result<T, FieldError>;

impl From<std::io::Error> for FieldError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<rayon::ThreadPoolBuildError> for FieldError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::WorkerPool { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> FieldError {
    FieldError::InvalidGeometry {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Wrap an I/O error with the path and operation it came from
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> FieldError {
    FieldError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
