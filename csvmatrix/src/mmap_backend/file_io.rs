//! Opening delimited-text files as matrices

use std::path::Path;

use super::mmap_core::{map_file_regions, MappedRegion};
use crate::config::MatrixConfig;
use crate::matrix::CsvMatrix;
use crate::Result;

impl CsvMatrix<MappedRegion> {
    /// Open a file with default settings: detected delimiter, no quoting
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_config(path, &MatrixConfig::default())
    }

    /// Open a file using the given configuration
    ///
    /// The file is mapped immediately; rows are indexed on first access.
    pub fn open_with_config<P: AsRef<Path>>(path: P, config: &MatrixConfig) -> Result<Self> {
        let path = path.as_ref();
        let dialect = config.dialect()?;
        let regions = map_file_regions(path, config.region_size_bytes())?;

        tracing::info!(
            path = %path.display(),
            regions = regions.len(),
            "Opened delimited file"
        );
        Ok(Self::from_regions(regions, dialect))
    }
}
