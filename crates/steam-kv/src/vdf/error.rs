//! Binary VDF decoder error type.

use thiserror::Error;

/// Errors produced while decoding binary VDF data.
///
/// Any of these aborts the whole parse; partial documents are never
/// returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VdfError {
    #[error("unknown tag byte: 0x{0:02x}")]
    MalformedTag(u8),
    #[error("string not NUL-terminated before end of input")]
    UnterminatedString,
    #[error("set not closed before end of input")]
    UnterminatedSet,
    #[error("integer payload shorter than 4 bytes")]
    TruncatedInteger,
    #[error("string payload is not valid UTF-8")]
    InvalidUtf8,
    #[error("nesting deeper than {0} levels")]
    TooDeep(usize),
}
