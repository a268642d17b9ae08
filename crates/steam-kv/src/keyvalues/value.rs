//! Value type for the text KeyValues format.

use crate::document::{AccessError, Document, Kind};

/// A KeyValues document: an ordered map of keys to [`Value`]s.
pub type Set = Document<Value>;

/// A single KeyValues value: a string leaf or a nested set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Str(String),
    Set(Set),
}

impl Value {
    /// The kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Str(_) => Kind::Str,
            Value::Set(_) => Kind::Set,
        }
    }

    fn mismatch(&self, expected: Kind) -> AccessError {
        AccessError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }

    /// Borrows the string leaf, failing on a set.
    pub fn as_str(&self) -> Result<&str, AccessError> {
        match self {
            Value::Str(s) => Ok(s),
            other => Err(other.mismatch(Kind::Str)),
        }
    }

    /// Borrows the nested set, failing on a string.
    pub fn as_set(&self) -> Result<&Set, AccessError> {
        match self {
            Value::Set(set) => Ok(set),
            other => Err(other.mismatch(Kind::Set)),
        }
    }

    /// Borrows the nested set mutably, failing on a string.
    pub fn as_set_mut(&mut self) -> Result<&mut Set, AccessError> {
        match self {
            Value::Set(set) => Ok(set),
            other => Err(other.mismatch(Kind::Set)),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<Set> for Value {
    fn from(set: Set) -> Self {
        Value::Set(set)
    }
}
