//! `VdfEncoder` — binary VDF encoder.
//!
//! Depth-first pre-order walk in key-sorted order. The root set is
//! unnamed: its entries are written directly and a single `EndSet` tag
//! closes the document.

use steam_kv_buffers::Writer;

use super::constants::VdfTag;
use super::value::{Set, Value};

pub struct VdfEncoder {
    pub writer: Writer,
}

impl Default for VdfEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl VdfEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Encodes a whole document to bytes.
    pub fn encode(&mut self, doc: &Set) -> Vec<u8> {
        self.writer.reset();
        for (key, value) in doc {
            self.write_element(key, value);
        }
        self.writer.u8(VdfTag::EndSet as u8);
        self.writer.flush()
    }

    fn write_element(&mut self, key: &str, value: &Value) {
        match value {
            Value::Str(s) => {
                self.write_key(VdfTag::Str, key);
                self.writer.cstr(s);
            }
            Value::Int(i) => {
                self.write_key(VdfTag::Int, key);
                self.writer.u32_le(*i);
            }
            Value::Set(set) => {
                self.write_key(VdfTag::Set, key);
                for (child_key, child) in set {
                    self.write_element(child_key, child);
                }
                self.writer.u8(VdfTag::EndSet as u8);
            }
        }
    }

    fn write_key(&mut self, tag: VdfTag, key: &str) {
        self.writer.u8(tag as u8);
        self.writer.cstr(key);
    }
}

/// Encodes a binary VDF document.
pub fn encode(doc: &Set) -> Vec<u8> {
    VdfEncoder::new().encode(doc)
}
