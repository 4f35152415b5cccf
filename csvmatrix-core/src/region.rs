//! Byte-region concatenation
//!
//! Presents an ordered list of independently backed regions as one logical,
//! bounds-checked byte sequence `[0, len)`. Offsets are resolved with a
//! prefix-sum table and a binary search, so lookups stay `O(log regions)`
//! however large the underlying file is.

use alloc::vec::Vec;

use crate::traits::ByteRegion;
use crate::validation::{validate_byte_range, validate_offset};
use crate::{CsvMatrixError, Result};

/// Ordered regions addressed as one byte sequence
pub struct RegionConcat<R> {
    regions: Vec<R>,
    /// `starts[i]` is the logical offset of region `i`; one entry per region
    starts: Vec<u64>,
    len: u64,
}

impl<R: ByteRegion> RegionConcat<R> {
    /// Take ownership of the regions in logical order
    pub fn new(regions: Vec<R>) -> Self {
        let mut starts = Vec::with_capacity(regions.len());
        let mut len = 0u64;
        for region in &regions {
            starts.push(len);
            len += region.size() as u64;
        }

        Self {
            regions,
            starts,
            len,
        }
    }

    /// Total length in bytes
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Region slices in logical order
    pub fn chunks(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.regions.iter().map(ByteRegion::as_slice)
    }

    /// Resolve a logical offset to `(region, local offset)`
    ///
    /// The caller guarantees `offset < len`. Empty regions share their start
    /// with the following region, so the search lands on the last region whose
    /// start is not past `offset`, which is always the non-empty one.
    fn locate(&self, offset: u64) -> (usize, usize) {
        let index = self.starts.partition_point(|&start| start <= offset) - 1;
        (index, (offset - self.starts[index]) as usize)
    }

    /// Get a single byte
    pub fn byte_at(&self, offset: u64) -> Result<u8> {
        validate_offset(offset, self.len)?;
        let (index, local) = self.locate(offset);
        Ok(self.regions[index].as_slice()[local])
    }

    /// Copy `count` bytes starting at `offset` into the front of `buf`
    pub fn read_into(&self, buf: &mut [u8], offset: u64, count: usize) -> Result<()> {
        if count > buf.len() {
            return Err(CsvMatrixError::InsufficientBuffer);
        }
        validate_byte_range(offset, count as u64, self.len)?;
        if count == 0 {
            return Ok(());
        }

        let (mut index, mut local) = self.locate(offset);
        let mut written = 0;
        while written < count {
            let slice = self.regions[index].as_slice();
            let take = (slice.len() - local).min(count - written);
            buf[written..written + take].copy_from_slice(&slice[local..local + take]);
            written += take;
            index += 1;
            local = 0;
        }

        Ok(())
    }

    /// Copy a byte range into a new vector
    pub fn read_range(&self, offset: u64, count: usize) -> Result<Vec<u8>> {
        let mut buf = alloc::vec![0u8; count];
        self.read_into(&mut buf, offset, count)?;
        Ok(buf)
    }
}
