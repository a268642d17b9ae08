//! Binary VDF codec.
//!
//! Wire grammar, byte-oriented, no padding:
//!
//! ```text
//! element := 0x00 key children* 0x08      nested set
//!          | 0x01 key payload            string leaf
//!          | 0x02 key u32-le             integer leaf
//! key, payload := bytes* 0x00
//! ```
//!
//! The top level is an unnamed set: entries are written directly,
//! followed by a single closing `0x08`, and the decoder's root loop
//! stops (without error) on a leading `0x08` tag.

pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod format;
pub mod value;

pub use constants::{VdfTag, DEFAULT_MAX_DEPTH};
pub use decoder::{decode, VdfDecoder};
pub use encoder::{encode, VdfEncoder};
pub use error::VdfError;
pub use format::format;
pub use value::{Set, Value};
