//! Sentinel-terminated source buffer.
//!
//! The buffer keeps a `0x00` sentinel byte after the source content so the
//! cursor can always read the byte at `len()` without a bounds check. The
//! total buffer size is rounded up to the next 64-byte boundary.
//!
//! The content is treated as raw bytes. No encoding validation happens here:
//! bytes the grammar does not accept surface later as `invalid` tokens.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Immutable, sentinel-terminated copy of the source text.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
///
/// A `0x00` at a position below `source_len` is an interior NUL and is
/// tokenized like any other unexpected byte.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Create a sentinel-terminated buffer from source text or raw bytes.
    ///
    /// Sources longer than `u32::MAX` bytes are truncated to `u32::MAX`;
    /// token offsets are `u32` throughout.
    pub fn new(source: impl AsRef<[u8]>) -> Self {
        let bytes = source.as_ref();
        let source_len_u32 = u32::try_from(bytes.len()).unwrap_or(u32::MAX);
        let source_len = source_len_u32 as usize;

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Sentinel and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(&bytes[..source_len]);

        Self {
            buf,
            source_len: source_len_u32,
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the full buffer including sentinel and padding.
    #[cfg(test)]
    pub(crate) fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub(crate) fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}
