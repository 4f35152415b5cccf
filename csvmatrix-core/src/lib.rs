#![no_std]

//! csvmatrix core - delimited-text matrix definitions
//!
//! This crate provides the pure building blocks of a read-only matrix view
//! over CSV/TSV data: byte-region concatenation, the single-pass row scanner
//! with delimiter detection, the field splitter and the one-row cache. It
//! performs no I/O and no synchronisation; see the `csvmatrix` crate for the
//! file-backed implementation.

extern crate alloc;

pub mod cache;
pub mod error;
pub mod format;
pub mod region;
pub mod scan;
pub mod split;
pub mod traits;
pub mod validation;

pub use cache::RowCache;
pub use error::*;
pub use format::{Dialect, DEFAULT_REGION_SIZE};
pub use region::RegionConcat;
pub use scan::{scan_rows, CandidateCount, DelimiterStats, RowLayout, RowScanner};
pub use split::split_fields;
pub use traits::*;
pub use validation::{parse_delimiter, parse_quote};
