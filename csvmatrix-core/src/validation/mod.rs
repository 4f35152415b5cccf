//! Validation and parsing utilities
//!
//! Pure functions with no I/O dependencies.

pub mod bounds;
pub mod parsing;

pub use bounds::{checked_buffer_len, validate_byte_range, validate_offset};
pub use parsing::{char_to_byte, parse_delimiter, parse_quote};
