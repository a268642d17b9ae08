//! Text KeyValues decoder error type.

use thiserror::Error;

/// Errors produced while decoding text KeyValues data.
///
/// Any of these aborts the whole parse; partial documents are never
/// returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyValuesError {
    #[error("string missing its closing quote")]
    UnterminatedString,
    #[error("set missing its closing brace")]
    UnterminatedSet,
    #[error("invalid escape sequence: \\{0}")]
    InvalidEscape(char),
    #[error("unexpected character: {0:?}")]
    UnexpectedCharacter(char),
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("nesting deeper than {0} levels")]
    TooDeep(usize),
}
