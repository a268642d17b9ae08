//! `KeyValuesEncoder` — text KeyValues encoder.
//!
//! Depth-first walk in key-sorted order. String entries put two tabs
//! between key and value; set entries open a brace block indented by
//! four extra spaces per nesting level. Top-level entries sit at indent
//! zero with no enclosing braces.

use std::fmt::Write as _;

use super::value::{Set, Value};

#[derive(Debug, Default, Clone)]
pub struct KeyValuesEncoder;

impl KeyValuesEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Encodes a whole document to text.
    pub fn encode(&self, doc: &Set) -> String {
        let mut out = String::new();
        for (key, value) in doc {
            self.write_element(&mut out, key, value, 0);
        }
        out
    }

    fn write_element(&self, out: &mut String, key: &str, value: &Value, indent: usize) {
        let _ = write!(out, "{:indent$}{}", "", escape(key));
        match value {
            Value::Str(s) => {
                let _ = writeln!(out, "\t\t{}", escape(s));
            }
            Value::Set(set) => {
                let _ = write!(out, "\n{:indent$}{{\n", "");
                for (child_key, child) in set {
                    self.write_element(out, child_key, child, indent + 4);
                }
                let _ = writeln!(out, "{:indent$}}}", "");
            }
        }
    }
}

/// Escapes and quotes a string token: `\`, `"`, tab, and newline get a
/// backslash escape; everything else (including code points at or above
/// U+007F) is emitted verbatim.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

/// Encodes a text KeyValues document.
pub fn encode(doc: &Set) -> String {
    KeyValuesEncoder::new().encode(doc)
}
