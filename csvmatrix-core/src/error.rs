//! Error types for csvmatrix operations

/// Errors that can occur while reading a delimited-text matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvMatrixError {
    /// Logical byte offset (or offset + count) outside the concatenated regions
    OffsetOutOfBounds { offset: u64, len: u64 },
    /// Row index at or beyond the matrix row count
    RowOutOfBounds { row: usize, rows: usize },
    /// Attempt to mutate a read-only matrix
    ReadOnly,
    /// Destination buffer smaller than the requested byte count
    InsufficientBuffer,
    /// Delimiter or quote that is not a single byte
    InvalidDelimiter,
    /// Row span does not fit into addressable memory
    RowTooLarge,
}

impl core::fmt::Display for CsvMatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CsvMatrixError::OffsetOutOfBounds { offset, len } => {
                write!(f, "Byte offset {offset} out of bounds for length {len}")
            }
            CsvMatrixError::RowOutOfBounds { row, rows } => {
                write!(f, "Row {row} out of bounds for {rows} rows")
            }
            CsvMatrixError::ReadOnly => write!(f, "Matrix is read only"),
            CsvMatrixError::InsufficientBuffer => write!(f, "Insufficient buffer space"),
            CsvMatrixError::InvalidDelimiter => write!(f, "Delimiter must be a single byte"),
            CsvMatrixError::RowTooLarge => write!(f, "Row too large to address"),
        }
    }
}

impl core::error::Error for CsvMatrixError {}

/// Result type for csvmatrix operations
pub type Result<T> = core::result::Result<T, CsvMatrixError>;
