//! Codecs for Valve's Steam configuration formats.
//!
//! Two formats share one document shape (an ordered map whose values are
//! leaves or nested maps):
//!
//! - [`vdf`] — the binary container (`shortcuts.vdf` and friends):
//!   single-byte tags, NUL-terminated strings, little-endian `u32`
//!   integers, sets closed by a sentinel tag.
//! - [`keyvalues`] — the text container (`config.vdf` and friends):
//!   quoted-string tokens and brace-delimited sets, strings only.
//!
//! Both codecs are all-or-nothing: any structural error anywhere in the
//! input fails the whole parse. Output is always in key-sorted order,
//! which is the canonical form for both formats.
//!
//! # Example
//!
//! ```
//! use steam_kv::vdf;
//!
//! let mut doc = vdf::Set::new();
//! doc.insert("appid", vdf::Value::Int(42));
//! doc.insert("name", vdf::Value::Str("Half-Life".into()));
//!
//! let bytes = vdf::encode(&doc);
//! let back = vdf::decode(&bytes)?;
//! assert_eq!(back, doc);
//! # Ok::<(), vdf::VdfError>(())
//! ```

pub mod document;
pub mod keyvalues;
pub mod vdf;

mod convert;

pub use document::{AccessError, Document, Kind};

/// Returns the crate version at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
