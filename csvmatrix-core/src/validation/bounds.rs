//! Byte-range bounds validation
//!
//! Pure arithmetic checks with overflow protection, no I/O.

use crate::CsvMatrixError;

/// Validate that `offset .. offset + count` lies inside `[0, len)`
///
/// Returns the exclusive end of the range.
pub const fn validate_byte_range(offset: u64, count: u64, len: u64) -> Result<u64, CsvMatrixError> {
    let end = match offset.checked_add(count) {
        Some(end) => end,
        None => return Err(CsvMatrixError::OffsetOutOfBounds { offset, len }),
    };

    if end > len {
        return Err(CsvMatrixError::OffsetOutOfBounds { offset, len });
    }

    Ok(end)
}

/// Validate a single byte offset
pub const fn validate_offset(offset: u64, len: u64) -> Result<(), CsvMatrixError> {
    if offset >= len {
        return Err(CsvMatrixError::OffsetOutOfBounds { offset, len });
    }
    Ok(())
}

/// Convert a logical byte length into an in-memory buffer length
pub fn checked_buffer_len(len: u64) -> Result<usize, CsvMatrixError> {
    usize::try_from(len).map_err(|_| CsvMatrixError::RowTooLarge)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_byte_range() {
        assert_eq!(validate_byte_range(0, 10, 10), Ok(10));
        assert_eq!(validate_byte_range(4, 0, 10), Ok(4));
        assert_eq!(validate_byte_range(10, 0, 10), Ok(10));

        assert_eq!(
            validate_byte_range(5, 6, 10),
            Err(CsvMatrixError::OffsetOutOfBounds { offset: 5, len: 10 })
        );
        assert_eq!(
            validate_byte_range(u64::MAX, 2, 10),
            Err(CsvMatrixError::OffsetOutOfBounds {
                offset: u64::MAX,
                len: 10
            })
        );
    }

    #[test]
    fn test_validate_offset() {
        assert_eq!(validate_offset(0, 1), Ok(()));
        assert!(validate_offset(1, 1).is_err());
        assert!(validate_offset(0, 0).is_err());
    }
}
