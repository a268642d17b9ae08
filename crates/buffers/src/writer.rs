//! Binary buffer writer.

/// An append-only byte sink used by the binary encoder.
///
/// # Example
///
/// ```
/// use steam_kv_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(0x01);
/// writer.cstr("hi");
/// assert_eq!(writer.flush(), [0x01, b'h', b'i', 0x00]);
/// ```
#[derive(Default)]
pub struct Writer {
    out: Vec<u8>,
}

impl Writer {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bytes written since the last flush.
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Returns `true` when nothing has been written since the last flush.
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Discards everything written since the last flush.
    pub fn reset(&mut self) {
        self.out.clear();
    }

    /// Writes a single byte.
    pub fn u8(&mut self, byte: u8) {
        self.out.push(byte);
    }

    /// Writes an unsigned 32-bit integer, little-endian.
    pub fn u32_le(&mut self, value: u32) {
        self.out.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes raw bytes verbatim.
    pub fn buf(&mut self, bytes: &[u8]) {
        self.out.extend_from_slice(bytes);
    }

    /// Writes a string followed by a NUL terminator.
    pub fn cstr(&mut self, s: &str) {
        self.out.extend_from_slice(s.as_bytes());
        self.out.push(0x00);
    }

    /// Returns the written bytes and leaves the writer empty.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.out)
    }
}
