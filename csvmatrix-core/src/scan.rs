//! Row indexing and delimiter detection
//!
//! One forward pass over the whole byte sequence records where every row
//! starts and, at the same time, counts delimiter candidates per row. The
//! scanner is fed region by region so it never needs a contiguous copy of the
//! file; quote and escape state carry across region boundaries.

use alloc::vec::Vec;

use crate::format::constants::{candidates, ESCAPE, NEWLINE};
use crate::format::Dialect;
use crate::region::RegionConcat;
use crate::traits::ByteRegion;

/// Running per-row occurrence counts of one delimiter candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateCount {
    pub current: u64,
    pub min: u64,
    pub max: u64,
}

impl CandidateCount {
    const fn new() -> Self {
        Self {
            current: 0,
            min: u64::MAX,
            max: 0,
        }
    }

    fn finish_row(&mut self) {
        self.min = self.min.min(self.current);
        self.max = self.max.max(self.current);
        self.current = 0;
    }

    /// Same positive count on every finalized row
    pub fn is_uniform(&self) -> bool {
        self.min == self.max && self.min > 0
    }
}

/// Delimiter candidate statistics gathered during the scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterStats {
    pub tab: CandidateCount,
    pub comma: CandidateCount,
    pub semicolon: CandidateCount,
    pub space: CandidateCount,
    /// Occurrences of the explicitly configured delimiter, if any
    pub explicit: CandidateCount,
}

impl DelimiterStats {
    const fn new() -> Self {
        Self {
            tab: CandidateCount::new(),
            comma: CandidateCount::new(),
            semicolon: CandidateCount::new(),
            space: CandidateCount::new(),
            explicit: CandidateCount::new(),
        }
    }

    fn all_mut(&mut self) -> [&mut CandidateCount; 5] {
        [
            &mut self.tab,
            &mut self.comma,
            &mut self.semicolon,
            &mut self.space,
            &mut self.explicit,
        ]
    }

    fn finish_row(&mut self) {
        for count in self.all_mut() {
            count.finish_row();
        }
    }

    fn has_residual(&self) -> bool {
        self.tab.current > 0
            || self.comma.current > 0
            || self.semicolon.current > 0
            || self.space.current > 0
            || self.explicit.current > 0
    }

    /// Pick a delimiter from the collected counts
    ///
    /// Any tab wins. Otherwise the first of semicolon, comma and space that
    /// occurs the same positive number of times on every row. Falls back to
    /// tab when nothing qualifies.
    pub fn detect(&self) -> u8 {
        if self.tab.max > 0 {
            candidates::TAB
        } else if self.semicolon.is_uniform() {
            candidates::SEMICOLON
        } else if self.comma.is_uniform() {
            candidates::COMMA
        } else if self.space.is_uniform() {
            candidates::SPACE
        } else {
            candidates::TAB
        }
    }

    /// Maximum per-row count for a built-in candidate
    fn max_for(&self, delimiter: u8) -> u64 {
        match delimiter {
            candidates::TAB => self.tab.max,
            candidates::COMMA => self.comma.max,
            candidates::SEMICOLON => self.semicolon.max,
            candidates::SPACE => self.space.max,
            _ => 0,
        }
    }
}

/// Result of a completed scan: row offsets, effective delimiter and size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowLayout {
    /// Start offset of every row, plus the offset after a trailing newline
    row_starts: Vec<u64>,
    rows: usize,
    columns: usize,
    delimiter: u8,
    total_len: u64,
}

impl RowLayout {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// The explicit delimiter, or the detected one
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    pub fn row_starts(&self) -> &[u64] {
        &self.row_starts
    }

    /// Byte range of a row, excluding its terminating newline
    pub fn row_span(&self, row: usize) -> Option<(u64, u64)> {
        if row >= self.rows {
            return None;
        }
        let start = self.row_starts[row];
        let end = match self.row_starts.get(row + 1) {
            Some(&next) => next - 1,
            None => self.total_len,
        };
        Some((start, end))
    }
}

/// Incremental row scanner
///
/// Feed every region in order with [`RowScanner::feed`], then call
/// [`RowScanner::finish`].
#[derive(Debug, Clone)]
pub struct RowScanner {
    dialect: Dialect,
    row_starts: Vec<u64>,
    stats: DelimiterStats,
    /// Logical offset of the next byte to be fed
    position: u64,
    /// `true` outside quotes
    active: bool,
    skip_next: bool,
}

impl RowScanner {
    pub fn new(dialect: Dialect) -> Self {
        let mut row_starts = Vec::with_capacity(4096);
        row_starts.push(0);
        Self {
            dialect,
            row_starts,
            stats: DelimiterStats::new(),
            position: 0,
            active: true,
            skip_next: false,
        }
    }

    /// Scan the next consecutive run of bytes
    pub fn feed(&mut self, chunk: &[u8]) {
        let quote = self.dialect.quote;
        let explicit = self.dialect.delimiter;

        for (i, &b) in chunk.iter().enumerate() {
            if self.skip_next {
                self.skip_next = false;
                continue;
            }

            if Some(b) == quote {
                self.active = !self.active;
            } else if self.active {
                if b == ESCAPE {
                    self.skip_next = true;
                } else if b == NEWLINE {
                    self.stats.finish_row();
                    self.row_starts.push(self.position + i as u64 + 1);
                } else if Some(b) == explicit {
                    self.stats.explicit.current += 1;
                } else {
                    match b {
                        candidates::TAB => self.stats.tab.current += 1,
                        candidates::SEMICOLON => self.stats.semicolon.current += 1,
                        candidates::COMMA => self.stats.comma.current += 1,
                        candidates::SPACE => self.stats.space.current += 1,
                        _ => {}
                    }
                }
            }
        }

        self.position += chunk.len() as u64;
    }

    /// Statistics collected so far
    pub fn stats(&self) -> &DelimiterStats {
        &self.stats
    }

    /// Close the scan and compute the layout
    pub fn finish(mut self) -> RowLayout {
        let total_len = self.position;

        // Every recorded start opens a row except one sitting exactly at the
        // end. An escaped or quoted final newline records no start, so the
        // open row still counts.
        let mut rows = self.row_starts.len();
        if self.row_starts.last() == Some(&total_len) {
            rows -= 1;
        }

        if self.stats.has_residual() {
            self.stats.finish_row();
        }

        let (delimiter, max_count) = match self.dialect.delimiter {
            Some(delimiter) => (delimiter, self.stats.explicit.max),
            None => {
                let delimiter = self.stats.detect();
                (delimiter, self.stats.max_for(delimiter))
            }
        };

        let columns = if rows == 0 { 0 } else { max_count as usize + 1 };

        RowLayout {
            row_starts: self.row_starts,
            rows,
            columns,
            delimiter,
            total_len,
        }
    }
}

/// Scan a whole concatenation in one pass
pub fn scan_rows<R: ByteRegion>(bytes: &RegionConcat<R>, dialect: Dialect) -> RowLayout {
    let mut scanner = RowScanner::new(dialect);
    for chunk in bytes.chunks() {
        scanner.feed(chunk);
    }
    scanner.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn scan(data: &[u8], dialect: Dialect) -> RowLayout {
        scan_rows(&RegionConcat::new(vec![data]), dialect)
    }

    #[test]
    fn test_scan_without_trailing_newline() {
        let layout = scan(b"1,2,3\n4,5,6\n7,8,9", Dialect::auto());
        assert_eq!(layout.dimensions(), (3, 3));
        assert_eq!(layout.delimiter(), b',');
        assert_eq!(layout.row_starts(), &[0, 6, 12]);
        assert_eq!(layout.row_span(0), Some((0, 5)));
        assert_eq!(layout.row_span(2), Some((12, 17)));
        assert_eq!(layout.row_span(3), None);
    }

    #[test]
    fn test_scan_with_trailing_newline() {
        let layout = scan(b"a;b\nc;d\n", Dialect::auto());
        assert_eq!(layout.dimensions(), (2, 2));
        assert_eq!(layout.delimiter(), b';');
        assert_eq!(layout.row_span(1), Some((4, 7)));
    }

    #[test]
    fn test_detect_tab_wins() {
        let layout = scan(b"a\tb,c\nd\te,f,g\n", Dialect::auto());
        assert_eq!(layout.delimiter(), b'\t');
        assert_eq!(layout.columns(), 2);
    }

    #[test]
    fn test_detect_tab_on_any_row() {
        // Only the first row has a tab; detection still picks tab.
        let layout = scan(b"a\tb\nc\nd\n", Dialect::auto());
        assert_eq!(layout.delimiter(), b'\t');
        assert_eq!(layout.dimensions(), (3, 2));
    }

    #[test]
    fn test_detect_priority_semicolon_over_comma() {
        let layout = scan(b"a;b,c\nd;e,f\n", Dialect::auto());
        assert_eq!(layout.delimiter(), b';');
        assert_eq!(layout.columns(), 2);
    }

    #[test]
    fn test_ragged_comma_falls_back_to_tab() {
        let layout = scan(b"a,b\nc,d,e\n", Dialect::auto());
        assert_eq!(layout.delimiter(), b'\t');
        assert_eq!(layout.columns(), 1);
    }

    #[test]
    fn test_no_delimiters_falls_back_to_tab() {
        let layout = scan(b"alpha\nbeta\ngamma", Dialect::auto());
        assert_eq!(layout.delimiter(), b'\t');
        assert_eq!(layout.dimensions(), (3, 1));
    }

    #[test]
    fn test_detect_space() {
        let layout = scan(b"1 2 3\n4 5 6\n", Dialect::auto());
        assert_eq!(layout.delimiter(), b' ');
        assert_eq!(layout.columns(), 3);
    }

    #[test]
    fn test_explicit_delimiter_counts() {
        let layout = scan(b"a|b|c\nd|e\n", Dialect::with_delimiter(b'|'));
        assert_eq!(layout.delimiter(), b'|');
        assert_eq!(layout.dimensions(), (2, 3));
    }

    #[test]
    fn test_explicit_comma_uses_explicit_slot() {
        let layout = scan(b"a,b,c\nd,e\n", Dialect::with_delimiter(b','));
        assert_eq!(layout.dimensions(), (2, 3));
    }

    #[test]
    fn test_escaped_newline_does_not_end_row() {
        let layout = scan(b"a,b\\\nc\nd,e\n", Dialect::auto());
        assert_eq!(layout.rows(), 2);
        assert_eq!(layout.row_starts(), &[0, 7, 11]);
    }

    #[test]
    fn test_quoted_newline_and_delimiter() {
        let layout = scan(b"\"a\nb,c\",d\ne,f\n", Dialect::auto().quoted(b'"'));
        assert_eq!(layout.rows(), 2);
        assert_eq!(layout.delimiter(), b',');
        assert_eq!(layout.columns(), 2);
    }

    #[test]
    fn test_escape_carries_across_regions() {
        let regions = vec![&b"a,b\\"[..], &b"\nc\nd,e"[..]];
        let layout = scan_rows(&RegionConcat::new(regions), Dialect::auto());
        assert_eq!(layout.rows(), 2);
        assert_eq!(layout.row_starts(), &[0, 7]);
        assert_eq!(layout.row_span(1), Some((7, 10)));
    }

    #[test]
    fn test_residual_row_without_delimiters_is_ignored() {
        // The unterminated last row has no commas and is left out of the
        // statistics, so comma stays uniform.
        let layout = scan(b"a,b\nc,d\ne", Dialect::auto());
        assert_eq!(layout.delimiter(), b',');
        assert_eq!(layout.dimensions(), (3, 2));
    }

    #[test]
    fn test_dangling_backslash_at_end() {
        let mut scanner = RowScanner::new(Dialect::auto());
        scanner.feed(b"a,b\nc,d\\");
        assert!(scanner.skip_next);
        assert_eq!(scanner.stats().comma.current, 1);
        assert_eq!(scanner.stats().comma.max, 1);

        let layout = scanner.finish();
        assert_eq!(layout.row_starts(), &[0, 4]);
        assert_eq!(layout.rows(), 2);
        assert_eq!(layout.delimiter(), b',');
        assert_eq!(layout.columns(), 2);
        assert_eq!(layout.row_span(1), Some((4, 8)));
    }

    #[test]
    fn test_unterminated_quote_keeps_rest_in_one_row() {
        let mut scanner = RowScanner::new(Dialect::auto().quoted(b'"'));
        scanner.feed(b"x,y\n\"open,z\nw");
        assert!(!scanner.active);
        // Quoted bytes are not counted, so nothing is left over for the open row.
        assert!(!scanner.stats().has_residual());

        let layout = scanner.finish();
        assert_eq!(layout.row_starts(), &[0, 4]);
        assert_eq!(layout.dimensions(), (2, 2));
        assert_eq!(layout.delimiter(), b',');
        assert_eq!(layout.row_span(1), Some((4, 13)));
    }

    #[test]
    fn test_escaped_final_newline_leaves_open_row() {
        // No start is recorded after the escaped newline, so the only row
        // runs to the end of input.
        let layout = scan(b"a,b\\\n", Dialect::auto());
        assert_eq!(layout.row_starts(), &[0]);
        assert_eq!(layout.dimensions(), (1, 2));
        assert_eq!(layout.row_span(0), Some((0, 5)));
    }

    #[test]
    fn test_quoted_final_newline_leaves_open_row() {
        let layout = scan(b"x\n\"y\n", Dialect::auto().quoted(b'"'));
        assert_eq!(layout.row_starts(), &[0, 2]);
        assert_eq!(layout.rows(), 2);
        assert_eq!(layout.row_span(1), Some((2, 5)));
    }

    #[test]
    fn test_empty_input() {
        let layout = scan(b"", Dialect::auto());
        assert_eq!(layout.dimensions(), (0, 0));
        assert_eq!(layout.delimiter(), b'\t');
        assert_eq!(layout.row_span(0), None);
    }

    #[test]
    fn test_single_newline() {
        let layout = scan(b"\n", Dialect::auto());
        assert_eq!(layout.dimensions(), (1, 1));
        assert_eq!(layout.row_span(0), Some((0, 0)));
    }
}
