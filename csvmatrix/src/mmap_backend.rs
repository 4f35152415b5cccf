//! Memory-mapped file backend
//!
//! Maps delimited-text files as a sequence of bounded regions and opens them
//! as [`CsvMatrix`](crate::CsvMatrix) instances.

mod file_io;
mod mmap_core;

pub use mmap_core::{map_file_regions, MappedRegion};
