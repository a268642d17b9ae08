//! Wire constants for the binary VDF format.

/// Tag byte identifying the kind of the element that follows.
///
/// The numeric values are fixed by the on-disk format and must not
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum VdfTag {
    Set = 0x00,
    Str = 0x01,
    Int = 0x02,
    EndSet = 0x08,
}

impl VdfTag {
    /// Maps a raw byte to a tag, or `None` for unknown bytes.
    pub fn from_u8(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(VdfTag::Set),
            0x01 => Some(VdfTag::Str),
            0x02 => Some(VdfTag::Int),
            0x08 => Some(VdfTag::EndSet),
            _ => None,
        }
    }
}

/// Default nesting-depth limit for the decoder.
pub const DEFAULT_MAX_DEPTH: usize = 128;
