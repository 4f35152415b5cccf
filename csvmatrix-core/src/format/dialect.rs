//! Dialect: which bytes separate and enclose fields

use super::constants::candidates;

/// Delimiter and quoting configuration for one matrix
///
/// `delimiter: None` asks the row scanner to detect the delimiter;
/// `quote: None` disables quoting entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dialect {
    pub delimiter: Option<u8>,
    pub quote: Option<u8>,
}

impl Dialect {
    /// Auto-detect the delimiter, no quoting
    pub const fn auto() -> Self {
        Self {
            delimiter: None,
            quote: None,
        }
    }

    /// Fixed delimiter, no quoting
    pub const fn with_delimiter(delimiter: u8) -> Self {
        Self {
            delimiter: Some(delimiter),
            quote: None,
        }
    }

    /// Set the quote byte
    pub const fn quoted(mut self, quote: u8) -> Self {
        self.quote = Some(quote);
        self
    }

    /// Comma separated, double-quote enclosed
    pub const fn csv() -> Self {
        Self::with_delimiter(candidates::COMMA).quoted(b'"')
    }

    /// Tab separated, no quoting
    pub const fn tsv() -> Self {
        Self::with_delimiter(candidates::TAB)
    }
}
