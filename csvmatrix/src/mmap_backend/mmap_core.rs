//! Core memory-mapped region type
//!
//! A file is mapped as consecutive read-only chunks so that files larger than
//! a practical single mapping can still be addressed as one byte sequence.

use std::{fs::File, path::Path};

use csvmatrix_core::ByteRegion;
use memmap2::{Mmap, MmapOptions};

use crate::{Error, Result};

/// One read-only mapped chunk of a file
pub struct MappedRegion {
    mmap: Mmap,
    /// Offset of this chunk within the file
    file_offset: u64,
}

impl MappedRegion {
    pub fn file_offset(&self) -> u64 {
        self.file_offset
    }
}

impl ByteRegion for MappedRegion {
    fn as_slice(&self) -> &[u8] {
        &self.mmap
    }
}

impl std::fmt::Debug for MappedRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MappedRegion")
            .field("file_offset", &self.file_offset)
            .field("len", &self.mmap.len())
            .finish()
    }
}

/// Map a file as chunks of at most `region_size` bytes
///
/// An empty file yields no regions.
pub fn map_file_regions<P: AsRef<Path>>(path: P, region_size: usize) -> Result<Vec<MappedRegion>> {
    let path = path.as_ref();
    let region_size = region_size.max(1) as u64;

    let file = File::open(path).map_err(|e| Error::io("Failed to open file", path, e))?;
    let file_len = file
        .metadata()
        .map_err(|e| Error::io("Failed to read metadata of", path, e))?
        .len();

    let mut regions = Vec::with_capacity(file_len.div_ceil(region_size) as usize);
    let mut file_offset = 0u64;
    while file_offset < file_len {
        let len = region_size.min(file_len - file_offset) as usize;

        // SAFETY: Read-only mapping; the file is expected not to be truncated while mapped
        let mmap = unsafe {
            MmapOptions::new()
                .offset(file_offset)
                .len(len)
                .map(&file)
                .map_err(|e| Error::io("Failed to memory map", path, e))?
        };

        tracing::debug!(offset = file_offset, len, "Mapped region");
        regions.push(MappedRegion { mmap, file_offset });
        file_offset += len as u64;
    }

    Ok(regions)
}
