//! Byte offset to line/column mapping.
//!
//! Tokens carry byte offsets only. [`LineIndex`] records where every line
//! starts so callers that print positions can turn an offset into a 1-based
//! `(line, column)` with a binary search.

/// Pre-computed line start table.
#[derive(Clone, Debug, Default)]
pub struct LineIndex {
    /// Byte offset of each line start. `starts[0] == 0`.
    starts: Vec<u32>,
}

impl LineIndex {
    /// Build the table with one `memchr` pass over `source`.
    pub fn new(source: &[u8]) -> Self {
        let mut starts = vec![0u32];
        starts.extend(
            memchr::memchr_iter(b'\n', source)
                .filter_map(|nl| u32::try_from(nl + 1).ok()),
        );
        Self { starts }
    }

    /// 1-based line containing `offset`.
    #[inline]
    pub fn line(&self, offset: u32) -> u32 {
        let idx = match self.starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// 1-based `(line, column)` for `offset`. Columns count bytes, so the
    /// result is meaningful for any input, valid UTF-8 or not.
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        let line = self.line(offset);
        let line_start = self.starts[(line - 1) as usize];
        (line, offset - line_start + 1)
    }

    /// Number of lines (a trailing newline opens one more, empty line).
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }
}
