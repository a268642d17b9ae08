//! Text KeyValues codec.
//!
//! Grammar (whitespace = space, tab, LF, CR, freely interspersed):
//!
//! ```text
//! document := element*
//! element  := string string        key, then string leaf
//!           | string set           key, then nested set
//! set      := '{' element* '}'
//! string   := '"' (escape | char)* '"'
//! escape   := '\' ('n' | 't' | '\' | '"')
//! ```
//!
//! All leaves are strings; the format has no integer type. Indentation
//! is cosmetic on output and insignificant on input.

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod value;

pub use decoder::{decode, KeyValuesDecoder, DEFAULT_MAX_DEPTH};
pub use encoder::{encode, KeyValuesEncoder};
pub use error::KeyValuesError;
pub use value::{Set, Value};
