//! Byte cursor over a sentinel-terminated buffer.
//!
//! The cursor moves through the buffer one byte at a time. EOF is detected
//! when the current byte equals the sentinel (`0x00`) and the position has
//! reached the source length. A `0x00` at `pos < source_len` is an interior
//! NUL, which [`Cursor::peek_input`] reports as `Some(0)`.

/// Cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so callers can snapshot it cheaply.
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and every byte after it is `0x00`. This is
/// guaranteed by [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0 over a sentinel-terminated buffer.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position (`0x00` at EOF).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// The automaton input at the current position: the byte, or `None`
    /// for the virtual terminator at the end of the source.
    #[inline]
    pub fn peek_input(&self) -> Option<u8> {
        if self.is_eof() {
            None
        } else {
            Some(self.current())
        }
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        debug_assert!(self.pos < self.source_len, "advance past end of source");
        self.pos += 1;
    }

    /// Step back by one byte.
    #[inline]
    pub fn retreat(&mut self) {
        debug_assert!(self.pos > 0, "retreat before start of source");
        self.pos -= 1;
    }

    /// Returns `true` if the cursor has reached the end of the source.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Source bytes in `start..end`.
    ///
    /// `end` must not exceed `source_len`.
    #[inline]
    pub fn slice(&self, start: u32, end: u32) -> &'a [u8] {
        debug_assert!(start <= end && end <= self.source_len);
        &self.buf[start as usize..end as usize]
    }
}
