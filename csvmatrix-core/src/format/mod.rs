//! Delimited-text format definitions
//!
//! Pure data definitions shared by the scanner and the splitter.

pub mod constants;
pub mod dialect;

pub use constants::{DEFAULT_REGION_SIZE, ESCAPE, NEWLINE};
pub use dialect::Dialect;
