//! Core matrix abstraction traits
//!
//! These traits describe the consumer-facing contract of a string matrix.
//! Implementations live in the `csvmatrix` crate.

use alloc::{string::String, vec::Vec};

use crate::{CsvMatrixError, Result};

/// Two-dimensional matrix of text fields
pub trait StringMatrix {
    /// Get the field at the specified position
    ///
    /// Returns `Ok(None)` when `col` lies beyond the fields actually present
    /// in that row. A row outside the matrix is an error.
    fn get_field(&self, row: usize, col: usize) -> Result<Option<String>>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Store a field. Read-only matrices reject every write.
    fn set_field(&self, _value: &str, _row: usize, _col: usize) -> Result<()> {
        Err(CsvMatrixError::ReadOnly)
    }

    /// Whether the matrix rejects writes
    fn is_read_only(&self) -> bool {
        true
    }
}

/// Extension trait for whole-row and whole-column access
pub trait MatrixOperations: StringMatrix {
    /// Get every field of a row, padded with `None` to the column count
    fn get_row(&self, row_index: usize) -> Result<Vec<Option<String>>> {
        let (_, cols) = self.dimensions();
        (0..cols).map(|col| self.get_field(row_index, col)).collect()
    }

    /// Get one field per row for the given column, in row order
    fn get_col(&self, col_index: usize) -> Result<Vec<Option<String>>> {
        let (rows, _) = self.dimensions();
        (0..rows).map(|row| self.get_field(row, col_index)).collect()
    }
}

impl<M: StringMatrix + ?Sized> MatrixOperations for M {}
