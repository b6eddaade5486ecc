//! Plain-text matrix export of an evaluated field
//!
//! One line per row, values separated by commas, no trailing separator on a
//! line and no newline after the last line.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::fractal::field::IterationField;
use crate::io::configuration::{LINE_SEPARATOR, VALUE_SEPARATOR};
use crate::io::error::{Result, file_system_error};

/// Serialize `field` into `out`
///
/// # Errors
///
/// Returns any error produced by the underlying writer
pub fn write_matrix<W: Write>(field: &IterationField, out: &mut W) -> std::io::Result<()> {
    for (row_index, row) in field.rows().enumerate() {
        if row_index > 0 {
            out.write_all(&[LINE_SEPARATOR])?;
        }
        for (col, count) in row.iter().enumerate() {
            if col > 0 {
                out.write_all(&[VALUE_SEPARATOR])?;
            }
            write!(out, "{count}")?;
        }
    }
    Ok(())
}

/// Write `field` to `path`, replacing any existing file
///
/// # Errors
///
/// Returns an error if the file cannot be created or written
pub fn save_matrix(field: &IterationField, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| file_system_error(path, "create file", e))?;

    let mut writer = BufWriter::new(file);
    write_matrix(field, &mut writer).map_err(|e| file_system_error(path, "write matrix", e))?;
    writer
        .flush()
        .map_err(|e| file_system_error(path, "flush matrix", e))?;

    Ok(())
}
