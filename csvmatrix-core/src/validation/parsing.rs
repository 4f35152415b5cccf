//! Parsing utilities for user-supplied delimiter and quote names
//!
//! Pure string parsing with no I/O dependencies.

use crate::format::constants::candidates;
use crate::CsvMatrixError;

/// Parse a delimiter name
///
/// Accepts `auto` (returns `None`), the names `tab`, `comma`, `semicolon`,
/// `space`, the escape `\t`, or a single ASCII character.
pub fn parse_delimiter(s: &str) -> Result<Option<u8>, CsvMatrixError> {
    match s {
        "auto" => Ok(None),
        "tab" | "\\t" => Ok(Some(candidates::TAB)),
        "comma" => Ok(Some(candidates::COMMA)),
        "semicolon" => Ok(Some(candidates::SEMICOLON)),
        "space" => Ok(Some(candidates::SPACE)),
        _ => parse_single_byte(s).map(Some),
    }
}

/// Parse a quote name
///
/// Accepts `none` (returns `None`), `double`, `single`, or a single ASCII
/// character.
pub fn parse_quote(s: &str) -> Result<Option<u8>, CsvMatrixError> {
    match s {
        "none" => Ok(None),
        "double" => Ok(Some(b'"')),
        "single" => Ok(Some(b'\'')),
        _ => parse_single_byte(s).map(Some),
    }
}

/// Convert a char into the single byte the scanner works on
pub fn char_to_byte(c: char) -> Result<u8, CsvMatrixError> {
    if c.is_ascii() {
        Ok(c as u8)
    } else {
        Err(CsvMatrixError::InvalidDelimiter)
    }
}

fn parse_single_byte(s: &str) -> Result<u8, CsvMatrixError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => char_to_byte(c),
        _ => Err(CsvMatrixError::InvalidDelimiter),
    }
}
