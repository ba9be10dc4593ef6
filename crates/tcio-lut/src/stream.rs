//! Cursor-based byte-buffer reader.
//!
//! [`StreamReader`] wraps a fixed byte slice and a cursor, and is the
//! substrate the token-oriented format parsers are built on. Every
//! operation reports failure through its return value; nothing here
//! panics or allocates beyond the returned token.

/// Whitespace set recognized by [`StreamReader::read_token`]:
/// space, tab, CR, LF and vertical tab.
#[inline]
fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\r' | b'\n' | b'\x0b')
}

/// A cursor over an in-memory byte buffer.
///
/// Supports bounded reads, single-byte reads, seeking and
/// whitespace-delimited token extraction. The cursor is internal mutable
/// state; readers are shared by handing out `&mut` references so that
/// position advancement is visible across calls.
///
/// # Example
///
/// ```rust
/// use tcio_lut::StreamReader;
///
/// let mut sr = StreamReader::new(b"Version 1");
/// assert_eq!(sr.read_token().as_deref(), Some("Version"));
/// assert_eq!(sr.read_token().as_deref(), Some("1"));
/// assert!(sr.eof());
/// ```
#[derive(Debug)]
pub struct StreamReader<'a> {
    buf: &'a [u8],
    idx: u64,
}

impl<'a> StreamReader<'a> {
    /// Creates a reader over `buf` with the cursor at 0.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, idx: 0 }
    }

    /// Moves the cursor to an absolute offset.
    ///
    /// Returns `false` (cursor unchanged) if `offset` is past the end of
    /// the buffer. Seeking exactly to the end is allowed.
    pub fn seek_set(&mut self, offset: u64) -> bool {
        if offset > self.buf.len() as u64 {
            return false;
        }
        self.idx = offset;
        true
    }

    /// Moves the cursor relative to its current position.
    ///
    /// Returns `false` (cursor unchanged) if the resulting position would
    /// be negative or past the end of the buffer.
    pub fn seek_from_current(&mut self, delta: i64) -> bool {
        let pos = self.idx as i64 + delta;
        if pos < 0 || pos as u64 > self.buf.len() as u64 {
            return false;
        }
        self.idx = pos as u64;
        true
    }

    /// Copies up to `min(n, remaining)` bytes into `dst` and advances the
    /// cursor by the number of bytes copied.
    ///
    /// Returns 0 without copying anything if `dst` is smaller than the
    /// clamped length; no partial copy is made in that case.
    pub fn read(&mut self, n: u64, dst: &mut [u8]) -> u64 {
        let remaining = self.buf.len() as u64 - self.idx;
        let len = n.min(remaining);
        if len == 0 {
            return 0;
        }
        if (dst.len() as u64) < len {
            // dst does not have enough space.
            return 0;
        }
        let start = self.idx as usize;
        let nbytes = len as usize;
        dst[..nbytes].copy_from_slice(&self.buf[start..start + nbytes]);
        self.idx += len;
        len
    }

    /// Reads exactly one byte. Fails at end-of-buffer.
    pub fn read1(&mut self) -> Option<u8> {
        if self.idx >= self.buf.len() as u64 {
            return None;
        }
        let val = self.buf[self.idx as usize];
        self.idx += 1;
        Some(val)
    }

    /// Reads a whitespace-delimited token.
    ///
    /// Skips leading whitespace, then accumulates bytes until the next
    /// whitespace or end-of-buffer. The terminating whitespace byte is
    /// consumed but not included in the token. Fails if the buffer is
    /// exhausted before a token started, or on a NUL byte.
    pub fn read_token(&mut self) -> Option<String> {
        // skip white spaces and newlines
        let mut c;
        loop {
            c = self.read1()?;
            if c == 0 {
                return None;
            }
            if !is_space(c) {
                break;
            }
        }

        let mut tok = String::new();
        tok.push(c as char);

        // read chars until whitespace or end-of-buffer
        while let Some(c) = self.read1() {
            if c == 0 {
                return None;
            }
            if is_space(c) {
                break;
            }
            tok.push(c as char);
        }

        Some(tok)
    }

    /// Current cursor position.
    pub fn tell(&self) -> u64 {
        self.idx
    }

    /// True when the cursor is at or past the end of the buffer.
    pub fn eof(&self) -> bool {
        self.idx >= self.buf.len() as u64
    }

    /// Total buffer length in bytes.
    pub fn len(&self) -> u64 {
        self.buf.len() as u64
    }

    /// True if the underlying buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seek() {
        let mut sr = StreamReader::new(b"abcdef");
        assert!(sr.seek_set(6));
        assert!(sr.eof());
        assert!(!sr.seek_set(7));
        assert_eq!(sr.tell(), 6);

        assert!(sr.seek_from_current(-6));
        assert_eq!(sr.tell(), 0);
        assert!(!sr.seek_from_current(-1));
        assert!(!sr.seek_from_current(7));
        assert_eq!(sr.tell(), 0);
    }

    #[test]
    fn test_read_clamps_to_remaining() {
        let mut sr = StreamReader::new(b"abcdef");
        let mut dst = [0u8; 8];
        assert_eq!(sr.read(16, &mut dst), 6);
        assert_eq!(&dst[..6], b"abcdef");
        assert!(sr.eof());
        assert_eq!(sr.read(1, &mut dst), 0);
    }

    #[test]
    fn test_read_rejects_small_dst() {
        let mut sr = StreamReader::new(b"abcdef");
        let mut dst = [0u8; 2];
        // clamped length 6 > dst capacity 2 -> no partial copy
        assert_eq!(sr.read(6, &mut dst), 0);
        assert_eq!(sr.tell(), 0);
        assert_eq!(sr.read(2, &mut dst), 2);
        assert_eq!(&dst, b"ab");
        assert_eq!(sr.tell(), 2);
    }

    #[test]
    fn test_read1() {
        let mut sr = StreamReader::new(b"x");
        assert_eq!(sr.read1(), Some(b'x'));
        assert_eq!(sr.read1(), None);
    }

    #[test]
    fn test_read_token() {
        let mut sr = StreamReader::new(b"  Version\t1\r\n end");
        assert_eq!(sr.read_token().as_deref(), Some("Version"));
        assert_eq!(sr.read_token().as_deref(), Some("1"));
        assert_eq!(sr.read_token().as_deref(), Some("end"));
        assert_eq!(sr.read_token(), None);
    }

    #[test]
    fn test_read_token_at_eof_without_trailing_space() {
        // token terminated by end-of-buffer is still a token
        let mut sr = StreamReader::new(b"last");
        assert_eq!(sr.read_token().as_deref(), Some("last"));
        assert!(sr.eof());
    }

    #[test]
    fn test_read_token_whitespace_only() {
        let mut sr = StreamReader::new(b" \t\n ");
        assert_eq!(sr.read_token(), None);
    }

    #[test]
    fn test_read_token_nul_fails() {
        let mut sr = StreamReader::new(b"\0abc");
        assert_eq!(sr.read_token(), None);
    }
}
