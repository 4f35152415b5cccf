//! Byte-region storage trait
//!
//! A region is one independently backed, immutable run of bytes: an in-memory
//! buffer, a slice, or one chunk of a memory-mapped file. Several regions are
//! stitched together by [`crate::RegionConcat`].

use alloc::{boxed::Box, sync::Arc, vec::Vec};

/// Trait for backends that hold one region of delimited text
///
/// This trait provides a minimal interface for accessing the underlying
/// bytes regardless of how they are stored.
pub trait ByteRegion {
    /// Get a slice of the underlying data
    fn as_slice(&self) -> &[u8];

    /// Get the size of the data in bytes
    ///
    /// Default implementation uses the slice length.
    fn size(&self) -> usize {
        self.as_slice().len()
    }
}

impl ByteRegion for Vec<u8> {
    fn as_slice(&self) -> &[u8] {
        self
    }
}

impl ByteRegion for Box<[u8]> {
    fn as_slice(&self) -> &[u8] {
        self
    }
}

impl ByteRegion for Arc<[u8]> {
    fn as_slice(&self) -> &[u8] {
        self
    }
}

impl ByteRegion for &[u8] {
    fn as_slice(&self) -> &[u8] {
        self
    }
}
