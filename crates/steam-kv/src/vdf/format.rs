//! Diagnostic pretty-printer for binary VDF documents.
//!
//! One-way, JSON-like rendering for debugging. There is no matching
//! parser and the output is not required to round-trip.

use std::fmt::Write as _;

use super::value::{Set, Value};

/// Renders a document as an indented, JSON-like string.
pub fn format(doc: &Set) -> String {
    let body = format_set_body(doc, 4);
    if body.is_empty() {
        return "{\n}".to_owned();
    }
    // Each entry is prefixed with ",\n"; drop the leading comma.
    format!("{{{}\n}}", &body[1..])
}

fn format_set_body(doc: &Set, indent: usize) -> String {
    let mut out = String::new();
    for (key, value) in doc {
        let _ = write!(out, ",\n{:indent$}\"{key}\": ", "");
        match value {
            Value::Str(s) => {
                let _ = write!(out, "\"{s}\"");
            }
            Value::Int(i) => {
                let _ = write!(out, "{i}");
            }
            Value::Set(set) => {
                out.push('{');
                let body = format_set_body(set, indent + 4);
                if !body.is_empty() {
                    out.push_str(&body[1..]);
                }
                let _ = write!(out, "\n{:indent$}}}", "");
            }
        }
    }
    out
}
