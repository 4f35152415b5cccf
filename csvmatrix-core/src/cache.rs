//! Single-row cache of split fields

use alloc::{string::String, vec::Vec};

/// Holds the fields of the most recently split row
///
/// Capacity is exactly one row; storing a row evicts whatever was there.
#[derive(Debug, Default)]
pub struct RowCache {
    entry: Option<(usize, Vec<String>)>,
}

impl RowCache {
    pub const fn new() -> Self {
        Self { entry: None }
    }

    /// Fields of `row` if it is the cached row
    pub fn lookup(&self, row: usize) -> Option<&[String]> {
        match &self.entry {
            Some((cached, fields)) if *cached == row => Some(fields),
            _ => None,
        }
    }

    /// Replace the cached row and return its fields
    pub fn store(&mut self, row: usize, fields: Vec<String>) -> &[String] {
        let (_, fields) = self.entry.insert((row, fields));
        fields
    }

    /// Index of the cached row, if any
    pub fn cached_row(&self) -> Option<usize> {
        self.entry.as_ref().map(|(row, _)| *row)
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }
}
