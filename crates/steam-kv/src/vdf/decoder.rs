//! `VdfDecoder` — binary VDF decoder.
//!
//! A single forward pass over the input with no backtracking. Recursion
//! depth equals document nesting depth and is capped by `max_depth`.

use steam_kv_buffers::Reader;

use super::constants::{VdfTag, DEFAULT_MAX_DEPTH};
use super::error::VdfError;
use super::value::{Set, Value};

/// Stateless binary VDF decoder.
#[derive(Debug, Clone)]
pub struct VdfDecoder {
    max_depth: usize,
}

impl Default for VdfDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl VdfDecoder {
    /// Creates a decoder with the default nesting limit.
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Creates a decoder with a custom nesting limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Decodes a whole document from raw bytes.
    ///
    /// The root loop stops without error on an `EndSet` tag, mirroring
    /// the terminator the encoder appends after the unnamed root set.
    pub fn decode(&self, input: &[u8]) -> Result<Set, VdfError> {
        let mut reader = Reader::new(input);
        let mut root = Set::new();
        while !reader.is_empty() {
            let byte = reader.u8().map_err(|_| VdfError::UnterminatedSet)?;
            let tag = VdfTag::from_u8(byte).ok_or(VdfError::MalformedTag(byte))?;
            if tag == VdfTag::EndSet {
                break;
            }
            let (key, value) = self.read_element(&mut reader, tag, 0)?;
            root.insert(key, value);
        }
        Ok(root)
    }

    /// Reads one element whose tag byte has already been consumed.
    fn read_element(
        &self,
        reader: &mut Reader<'_>,
        tag: VdfTag,
        depth: usize,
    ) -> Result<(String, Value), VdfError> {
        let key = read_string(reader)?;
        let value = match tag {
            VdfTag::Set => Value::Set(self.read_set_body(reader, depth + 1)?),
            VdfTag::Str => Value::Str(read_string(reader)?),
            VdfTag::Int => {
                let int = reader
                    .u32_le()
                    .map_err(|_| VdfError::TruncatedInteger)?;
                Value::Int(int)
            }
            // The caller filters EndSet before dispatching here.
            VdfTag::EndSet => unreachable!("EndSet is handled by the set loop"),
        };
        Ok((key, value))
    }

    /// Reads a set's children up to and including its `EndSet` tag.
    fn read_set_body(&self, reader: &mut Reader<'_>, depth: usize) -> Result<Set, VdfError> {
        if depth > self.max_depth {
            return Err(VdfError::TooDeep(self.max_depth));
        }
        let mut set = Set::new();
        loop {
            let byte = reader.u8().map_err(|_| VdfError::UnterminatedSet)?;
            let tag = VdfTag::from_u8(byte).ok_or(VdfError::MalformedTag(byte))?;
            if tag == VdfTag::EndSet {
                return Ok(set);
            }
            let (key, value) = self.read_element(reader, tag, depth)?;
            set.insert(key, value);
        }
    }
}

fn read_string(reader: &mut Reader<'_>) -> Result<String, VdfError> {
    let bytes = reader.cstr().map_err(|_| VdfError::UnterminatedString)?;
    String::from_utf8(bytes.to_vec()).map_err(|_| VdfError::InvalidUtf8)
}

/// Decodes a binary VDF document with the default nesting limit.
pub fn decode(input: &[u8]) -> Result<Set, VdfError> {
    VdfDecoder::new().decode(input)
}
