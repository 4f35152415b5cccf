//! Matrix configuration
//!
//! Collects the dialect and the mapping granularity used when opening a file.

use csvmatrix_core::validation::char_to_byte;
use csvmatrix_core::{Dialect, DEFAULT_REGION_SIZE};

/// Configuration for opening a delimited-text matrix
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MatrixConfig {
    /// Column separator; `None` detects it from the data
    pub delimiter: Option<char>,
    /// Enclosing character; `None` disables quoting
    pub quote: Option<char>,
    /// Maximum size of one mapped region in MB
    pub region_size_mb: usize,
}

impl MatrixConfig {
    /// Set a fixed delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Set the quote character
    pub fn with_quote(mut self, quote: char) -> Self {
        self.quote = Some(quote);
        self
    }

    /// Set the mapped region size in MB
    pub fn with_region_size_mb(mut self, region_size_mb: usize) -> Self {
        self.region_size_mb = region_size_mb;
        self
    }

    /// Region size in bytes, at least one byte
    pub fn region_size_bytes(&self) -> usize {
        self.region_size_mb.saturating_mul(1024 * 1024).max(1)
    }

    /// Byte-level dialect; fails for characters wider than one byte
    pub fn dialect(&self) -> csvmatrix_core::Result<Dialect> {
        Ok(Dialect {
            delimiter: self.delimiter.map(char_to_byte).transpose()?,
            quote: self.quote.map(char_to_byte).transpose()?,
        })
    }

    /// Parse a JSON configuration document
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON configuration file
    #[cfg(feature = "serde")]
    pub fn from_json_file<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| crate::Error::io("Failed to read config", path, e))?;
        Self::from_json_str(&text)
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            quote: None,
            region_size_mb: DEFAULT_REGION_SIZE / (1024 * 1024),
        }
    }
}
