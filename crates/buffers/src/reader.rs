//! Binary buffer reader with cursor tracking.

use crate::BufferError;

/// A cursor over a byte slice with bounds-checked reads.
///
/// Every read returns `Err(BufferError::EndOfBuffer)` instead of
/// panicking when the slice runs out, which makes the reader safe to
/// point at externally supplied data.
///
/// # Example
///
/// ```
/// use steam_kv_buffers::Reader;
///
/// let data = [0x2A, 0x00, 0x00, 0x00];
/// let mut reader = Reader::new(&data);
/// assert_eq!(reader.u32_le(), Ok(42));
/// assert_eq!(reader.remaining(), 0);
/// ```
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader over the given byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns `true` when all bytes have been consumed.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Peeks at the next byte without advancing the cursor.
    pub fn peek(&self) -> Result<u8, BufferError> {
        self.data
            .get(self.pos)
            .copied()
            .ok_or(BufferError::EndOfBuffer)
    }

    /// Reads a single byte.
    pub fn u8(&mut self) -> Result<u8, BufferError> {
        let byte = self.peek()?;
        self.pos += 1;
        Ok(byte)
    }

    /// Reads an unsigned 32-bit integer, little-endian.
    pub fn u32_le(&mut self) -> Result<u32, BufferError> {
        if self.remaining() < 4 {
            return Err(BufferError::EndOfBuffer);
        }
        let bytes = [
            self.data[self.pos],
            self.data[self.pos + 1],
            self.data[self.pos + 2],
            self.data[self.pos + 3],
        ];
        self.pos += 4;
        Ok(u32::from_le_bytes(bytes))
    }

    /// Reads bytes up to (but not including) the next NUL and consumes
    /// the terminator. Fails when the buffer ends before a NUL is seen.
    pub fn cstr(&mut self) -> Result<&'a [u8], BufferError> {
        let start = self.pos;
        match self.data[start..].iter().position(|&b| b == 0x00) {
            Some(offset) => {
                self.pos = start + offset + 1;
                Ok(&self.data[start..start + offset])
            }
            None => Err(BufferError::EndOfBuffer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_advance_the_cursor() {
        let data = [0x01, 0x02, 0x00, 0x00, 0x00, 0x05];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.u8(), Ok(0x01));
        assert_eq!(reader.u32_le(), Ok(2));
        assert_eq!(reader.remaining(), 1);
        assert_eq!(reader.peek(), Ok(0x05));
        assert_eq!(reader.u8(), Ok(0x05));
        assert!(reader.is_empty());
        assert_eq!(reader.u8(), Err(BufferError::EndOfBuffer));
    }

    #[test]
    fn cstr_stops_at_nul() {
        let data = [b'a', b'b', 0x00, b'c'];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.cstr(), Ok(&b"ab"[..]));
        assert_eq!(reader.remaining(), 1);
    }

    #[test]
    fn cstr_requires_a_terminator() {
        let data = [b'a', b'b'];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.cstr(), Err(BufferError::EndOfBuffer));
    }

    #[test]
    fn truncated_u32_fails() {
        let data = [0x01, 0x02, 0x03];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.u32_le(), Err(BufferError::EndOfBuffer));
    }

    #[test]
    fn empty_cstr_is_valid() {
        let data = [0x00];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.cstr(), Ok(&b""[..]));
        assert!(reader.is_empty());
    }
}
