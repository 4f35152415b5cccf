//! Read-only matrix facade over delimited text
//!
//! [`CsvMatrix`] ties the core pieces together: the first call that needs the
//! size or a field runs the row scanner over all regions exactly once, and
//! field lookups go through a one-row cache so that reading a row column by
//! column splits it only once.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use std::time::Instant;

use csvmatrix_core::validation::checked_buffer_len;
use csvmatrix_core::{
    scan_rows, split_fields, ByteRegion, CsvMatrixError, Dialect, RegionConcat, Result, RowCache,
    RowLayout, StringMatrix,
};

/// Access counters, mostly useful for diagnostics and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccessStats {
    /// Full scans of the byte regions
    pub index_scans: usize,
    /// Rows read back from the regions after a cache miss
    pub row_reads: usize,
    /// Row currently held by the row cache
    pub cached_row: Option<usize>,
}

/// Lazily indexed, read-only view of delimited text as a matrix of strings
pub struct CsvMatrix<R> {
    bytes: RegionConcat<R>,
    dialect: Dialect,
    layout: OnceLock<RowLayout>,
    cache: Mutex<RowCache>,
    index_scans: AtomicUsize,
    row_reads: AtomicUsize,
}

impl<R: ByteRegion> CsvMatrix<R> {
    /// Build a matrix over regions given in logical order
    ///
    /// Nothing is scanned until the size or a field is requested.
    pub fn from_regions(regions: Vec<R>, dialect: Dialect) -> Self {
        Self {
            bytes: RegionConcat::new(regions),
            dialect,
            layout: OnceLock::new(),
            cache: Mutex::new(RowCache::new()),
            index_scans: AtomicUsize::new(0),
            row_reads: AtomicUsize::new(0),
        }
    }

    /// Row offsets, size and effective delimiter; scans on first use
    pub fn layout(&self) -> &RowLayout {
        self.layout.get_or_init(|| self.build_layout())
    }

    fn build_layout(&self) -> RowLayout {
        self.index_scans.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(
            regions = self.bytes.region_count(),
            bytes = self.bytes.len(),
            "Scanning rows"
        );

        let start = Instant::now();
        let layout = scan_rows(&self.bytes, self.dialect);

        tracing::info!(
            rows = layout.rows(),
            columns = layout.columns(),
            delimiter = %char::from(layout.delimiter()).escape_default(),
            detected = self.dialect.delimiter.is_none(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Row index built"
        );
        layout
    }

    /// Matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.layout().dimensions()
    }

    /// Effective column separator, explicit or detected
    pub fn delimiter(&self) -> u8 {
        self.layout().delimiter()
    }

    /// Dialect the matrix was constructed with
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Total length of the underlying text in bytes
    pub fn byte_len(&self) -> u64 {
        self.bytes.len()
    }

    pub fn stats(&self) -> AccessStats {
        AccessStats {
            index_scans: self.index_scans.load(Ordering::Relaxed),
            row_reads: self.row_reads.load(Ordering::Relaxed),
            cached_row: self.lock_cache().cached_row(),
        }
    }

    /// Drop the cached row; the row index is kept
    pub fn clear_cache(&self) {
        self.lock_cache().clear();
    }

    fn lock_cache(&self) -> MutexGuard<'_, RowCache> {
        // The cache is replaced wholesale, so a panicking holder cannot leave it half written.
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_row(&self, layout: &RowLayout, row: usize) -> Result<Vec<String>> {
        let (start, end) = layout.row_span(row).ok_or(CsvMatrixError::RowOutOfBounds {
            row,
            rows: layout.rows(),
        })?;
        let len = checked_buffer_len(end - start)?;
        let bytes = self.bytes.read_range(start, len)?;
        self.row_reads.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(row, bytes = len, "Row cache miss");

        Ok(split_fields(&bytes, layout.delimiter(), self.dialect.quote))
    }

    /// Run `f` on the split fields of `row`, filling the cache on a miss
    fn with_row<T>(&self, row: usize, f: impl FnOnce(&[String]) -> T) -> Result<T> {
        let layout = self.layout();
        if row >= layout.rows() {
            return Err(CsvMatrixError::RowOutOfBounds {
                row,
                rows: layout.rows(),
            });
        }

        let mut cache = self.lock_cache();
        if let Some(fields) = cache.lookup(row) {
            return Ok(f(fields));
        }
        let fields = self.read_row(layout, row)?;
        Ok(f(cache.store(row, fields)))
    }

    /// Field at (row, col); `None` when the row has fewer fields
    pub fn get_field(&self, row: usize, col: usize) -> Result<Option<String>> {
        self.with_row(row, |fields| fields.get(col).cloned())
    }

    /// All fields actually present in a row
    pub fn row_fields(&self, row: usize) -> Result<Vec<String>> {
        self.with_row(row, <[String]>::to_vec)
    }

    /// Number of fields actually present in a row
    pub fn row_len(&self, row: usize) -> Result<usize> {
        self.with_row(row, <[String]>::len)
    }
}

impl CsvMatrix<Vec<u8>> {
    /// Matrix over a single in-memory buffer
    pub fn from_bytes(bytes: impl Into<Vec<u8>>, dialect: Dialect) -> Self {
        Self::from_regions(vec![bytes.into()], dialect)
    }
}

impl<R: ByteRegion> StringMatrix for CsvMatrix<R> {
    fn get_field(&self, row: usize, col: usize) -> Result<Option<String>> {
        CsvMatrix::get_field(self, row, col)
    }

    fn dimensions(&self) -> (usize, usize) {
        CsvMatrix::dimensions(self)
    }
}

impl<R: ByteRegion> std::fmt::Debug for CsvMatrix<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CsvMatrix")
            .field("bytes", &self.bytes.len())
            .field("dialect", &self.dialect)
            .field("layout", &self.layout.get().map(RowLayout::dimensions))
            .field("cached_row", &self.lock_cache().cached_row())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csvmatrix_core::MatrixOperations;
    use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

    fn matrix(text: &str) -> CsvMatrix<Vec<u8>> {
        CsvMatrix::from_bytes(text, Dialect::auto())
    }

    #[test]
    fn test_basic_example() {
        let m = matrix("1,2,3\n4,5,6\n7,8,9");
        assert_eq!(m.dimensions(), (3, 3));
        assert_eq!(m.get_field(2, 2).unwrap().as_deref(), Some("9"));
        assert_eq!(m.get_field(0, 0).unwrap().as_deref(), Some("1"));
        assert_eq!(m.get_field(0, 3).unwrap(), None);
        assert_eq!(m.set_field("x", 0, 0), Err(CsvMatrixError::ReadOnly));
        assert_eq!(m.get_field(0, 0).unwrap().as_deref(), Some("1"));
        assert!(m.is_read_only());
        assert_eq!(m.delimiter(), b',');
    }

    #[test]
    fn test_row_out_of_bounds_is_error() {
        let m = matrix("a,b\nc,d\n");
        assert_eq!(m.dimensions(), (2, 2));
        assert_eq!(
            m.get_field(2, 0),
            Err(CsvMatrixError::RowOutOfBounds { row: 2, rows: 2 })
        );
    }

    #[test]
    fn test_short_row_reports_absent() {
        let m = CsvMatrix::from_bytes("a,b,c\nd\n", Dialect::with_delimiter(b','));
        assert_eq!(m.dimensions(), (2, 3));
        assert_eq!(m.row_len(1).unwrap(), 1);
        assert_eq!(m.get_field(1, 0).unwrap().as_deref(), Some("d"));
        assert_eq!(m.get_field(1, 1).unwrap(), None);
        assert_eq!(
            m.get_row(1).unwrap(),
            vec![Some("d".to_string()), None, None]
        );
    }

    #[test]
    fn test_scan_runs_once() {
        let m = matrix("a\tb\nc\td\n");
        assert_eq!(m.stats().index_scans, 0);

        for _ in 0..5 {
            assert_eq!(m.dimensions(), (2, 2));
            assert_eq!(m.get_field(1, 1).unwrap().as_deref(), Some("d"));
        }
        assert_eq!(m.stats().index_scans, 1);
    }

    #[test]
    fn test_concurrent_first_access_scans_once() {
        let text: String = (0..500).map(|i| format!("{i};{};{}\n", i * 2, i * 3)).collect();
        let m = matrix(&text);

        std::thread::scope(|s| {
            for t in 0..8 {
                let m = &m;
                s.spawn(move || {
                    assert_eq!(m.dimensions(), (500, 3));
                    let row = t * 50;
                    assert_eq!(m.get_field(row, 1).unwrap(), Some((row * 2).to_string()));
                });
            }
        });

        assert_eq!(m.stats().index_scans, 1);
    }

    #[test]
    fn test_row_cache_reads() {
        let m = matrix("1,2,3\n4,5,6\n7,8,9\n");
        for col in 0..3 {
            m.get_field(0, col).unwrap();
        }
        assert_eq!(m.stats().row_reads, 1);

        m.get_field(0, 7).unwrap();
        assert_eq!(m.stats().row_reads, 1);

        m.get_field(1, 0).unwrap();
        assert_eq!(m.stats().row_reads, 2);

        m.get_field(0, 0).unwrap();
        assert_eq!(m.stats().row_reads, 3);
        assert_eq!(m.stats().cached_row, Some(0));
    }

    #[test]
    fn test_clear_cache_forces_reread() {
        let m = matrix("a,b\nc,d\n");
        assert_eq!(m.stats().cached_row, None);

        m.get_field(1, 0).unwrap();
        assert_eq!(m.stats().cached_row, Some(1));
        assert!(format!("{m:?}").contains("cached_row: Some(1)"));

        m.clear_cache();
        assert_eq!(
            m.stats(),
            AccessStats {
                index_scans: 1,
                row_reads: 1,
                cached_row: None,
            }
        );

        assert_eq!(m.get_field(1, 1).unwrap().as_deref(), Some("d"));
        assert_eq!(m.stats().row_reads, 2);
        assert_eq!(m.stats().index_scans, 1);
    }

    #[test]
    fn test_escaped_and_quoted_fields() {
        let m = CsvMatrix::from_bytes(
            "a\\,b,c\n\"x,y\",z\n",
            Dialect::with_delimiter(b',').quoted(b'"'),
        );
        assert_eq!(m.dimensions(), (2, 2));
        assert_eq!(m.row_fields(0).unwrap(), vec!["a,b", "c"]);
        assert_eq!(m.row_fields(1).unwrap(), vec!["x,y", "z"]);
    }

    #[test]
    fn test_quoted_newline_stays_in_field() {
        let m = CsvMatrix::from_bytes(
            "\"multi\nline\",1\nplain,2\n",
            Dialect::auto().quoted(b'"'),
        );
        assert_eq!(m.dimensions(), (2, 2));
        assert_eq!(m.get_field(0, 0).unwrap().as_deref(), Some("multi\nline"));
        assert_eq!(m.get_field(1, 1).unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_detect_fallback_single_column() {
        let m = matrix("one\ntwo\nthree\n");
        assert_eq!(m.dimensions(), (3, 1));
        assert_eq!(m.delimiter(), b'\t');
        assert_eq!(m.get_col(0).unwrap(), vec![
            Some("one".to_string()),
            Some("two".to_string()),
            Some("three".to_string()),
        ]);
    }

    #[test]
    fn test_empty_input() {
        let m = matrix("");
        assert_eq!(m.dimensions(), (0, 0));
        assert!(m.get_field(0, 0).is_err());
    }

    #[test]
    fn test_many_regions_match_single_region() {
        let text = "id;name;score\n1;ann;3.5\n2;bob;4\n3;\"c;d\";1\n";
        let dialect = Dialect::auto().quoted(b'"');
        let whole = CsvMatrix::from_bytes(text, dialect);
        let regions: Vec<Vec<u8>> = text.as_bytes().chunks(3).map(<[u8]>::to_vec).collect();
        let split = CsvMatrix::from_regions(regions, dialect);

        assert_eq!(split.dimensions(), whole.dimensions());
        assert_eq!(split.dimensions(), (4, 3));
        for row in 0..4 {
            assert_eq!(split.row_fields(row).unwrap(), whole.row_fields(row).unwrap());
        }
        assert_eq!(split.get_field(3, 1).unwrap().as_deref(), Some("c;d"));
    }

    #[test]
    fn test_random_access_matches_reference() {
        let rows: Vec<Vec<String>> = (0..40)
            .map(|r| (0..6).map(|c| format!("r{r}c{c}")).collect())
            .collect();
        let text: String = rows.iter().map(|r| r.join(",") + "\n").collect();
        let m = matrix(&text);
        assert_eq!(m.dimensions(), (40, 6));

        let mut positions: Vec<(usize, usize)> =
            (0..40).flat_map(|r| (0..6).map(move |c| (r, c))).collect();
        positions.shuffle(&mut StdRng::seed_from_u64(7));

        for (r, c) in positions {
            assert_eq!(m.get_field(r, c).unwrap().as_ref(), Some(&rows[r][c]));
        }
        assert_eq!(m.stats().index_scans, 1);
    }
}
