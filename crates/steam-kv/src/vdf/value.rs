//! Value type for the binary VDF format.

use crate::document::{AccessError, Document, Kind};

/// A VDF document: an ordered map of keys to [`Value`]s.
pub type Set = Document<Value>;

/// A single VDF value: a string leaf, a `u32` leaf, or a nested set.
///
/// Strings must not contain embedded NUL bytes; a NUL would terminate
/// the string early on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Str(String),
    Int(u32),
    Set(Set),
}

impl Value {
    /// The kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Str(_) => Kind::Str,
            Value::Int(_) => Kind::Int,
            Value::Set(_) => Kind::Set,
        }
    }

    fn mismatch(&self, expected: Kind) -> AccessError {
        AccessError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }

    /// Borrows the string leaf, failing on any other kind.
    pub fn as_str(&self) -> Result<&str, AccessError> {
        match self {
            Value::Str(s) => Ok(s),
            other => Err(other.mismatch(Kind::Str)),
        }
    }

    /// Reads the integer leaf, failing on any other kind.
    pub fn as_int(&self) -> Result<u32, AccessError> {
        match self {
            Value::Int(i) => Ok(*i),
            other => Err(other.mismatch(Kind::Int)),
        }
    }

    /// Borrows the nested set, failing on a leaf.
    pub fn as_set(&self) -> Result<&Set, AccessError> {
        match self {
            Value::Set(set) => Ok(set),
            other => Err(other.mismatch(Kind::Set)),
        }
    }

    /// Borrows the nested set mutably, failing on a leaf.
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

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i)
    }
}

impl From<Set> for Value {
    fn from(set: Set) -> Self {
        Value::Set(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_accessors_enforce_the_kind() {
        let value = Value::Int(7);
        assert_eq!(value.as_int(), Ok(7));
        assert_eq!(
            value.as_str(),
            Err(AccessError::TypeMismatch {
                expected: Kind::Str,
                found: Kind::Int,
            })
        );
        assert_eq!(
            value.as_set(),
            Err(AccessError::TypeMismatch {
                expected: Kind::Set,
                found: Kind::Int,
            })
        );
    }

    #[test]
    fn accessor_failure_leaves_the_value_usable() {
        let mut value = Value::Str("hi".into());
        assert!(value.as_set_mut().is_err());
        assert_eq!(value.as_str(), Ok("hi"));
    }
}
