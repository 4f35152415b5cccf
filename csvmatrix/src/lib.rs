//! csvmatrix - read-only matrix view over large delimited-text files
//!
//! This library exposes a CSV/TSV-like file as a two-dimensional matrix of
//! text fields without loading it into memory. The file is memory mapped in
//! bounded regions, scanned once on first access to index rows and detect the
//! delimiter, and individual fields are split on demand.
//!
//! ## Architecture
//!
//! csvmatrix follows a clean specification/implementation separation:
//!
//! - **csvmatrix-core**: pure algorithms and traits (no I/O, `no_std`)
//! - **csvmatrix**: the lazily indexed facade, memory mapping and configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use csvmatrix::{CsvMatrix, MatrixConfig};
//!
//! fn example() -> csvmatrix::Result<()> {
//!     let config = MatrixConfig::default().with_quote('"');
//!     let matrix = CsvMatrix::open_with_config("data.csv", &config)?;
//!
//!     let (rows, cols) = matrix.dimensions();
//!     println!("{rows} x {cols}, delimiter {:?}", matrix.delimiter() as char);
//!     if let Some(value) = matrix.get_field(0, 1)? {
//!         println!("matrix[0, 1] = {value}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **mmap**: open files through memory-mapped regions (default 32 MiB each)
//! - **serde**: JSON configuration files
//! - **cli**: dependencies of the `csv_inspect` example

// Re-export core abstractions
pub use csvmatrix_core::{
    // Core traits
    ByteRegion, MatrixOperations, StringMatrix,
    // Format definitions
    Dialect, DEFAULT_REGION_SIZE,
    // Error handling
    CsvMatrixError,
    // Parsing utilities
    parse_delimiter, parse_quote,
};

// Implementation modules
pub mod config;
pub mod error;
pub mod matrix;
#[cfg(feature = "mmap")]
pub mod mmap_backend;

// Public exports
pub use config::MatrixConfig;
pub use error::{Error, Result};
pub use matrix::{AccessStats, CsvMatrix};

// Memory mapping features
#[cfg(feature = "mmap")]
pub use mmap_backend::{map_file_regions, MappedRegion};
