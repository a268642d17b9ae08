//! `KeyValuesDecoder` — text KeyValues decoder.
//!
//! Operates on Unicode scalar values rather than raw bytes, so
//! multi-byte characters pass through atomically. All control
//! characters of the format (quote, backslash, braces) are ASCII;
//! anything at or above U+007F is copied verbatim.

use super::error::KeyValuesError;
use super::value::{Set, Value};

/// Default nesting-depth limit for the decoder.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Internal cursor over the decoded code points.
struct Cur<'a> {
    data: &'a [char],
    pos: usize,
}

impl Cur<'_> {
    fn peek(&self) -> Option<char> {
        self.data.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\n' | '\r') = self.peek() {
            self.pos += 1;
        }
    }

    fn is_done(&self) -> bool {
        self.pos >= self.data.len()
    }
}

/// Stateless text KeyValues decoder.
#[derive(Debug, Clone)]
pub struct KeyValuesDecoder {
    max_depth: usize,
}

impl Default for KeyValuesDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValuesDecoder {
    /// Creates a decoder with the default nesting limit.
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Creates a decoder with a custom nesting limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Decodes a whole document from text.
    pub fn decode(&self, input: &str) -> Result<Set, KeyValuesError> {
        let chars: Vec<char> = input.chars().collect();
        let mut cur = Cur {
            data: &chars,
            pos: 0,
        };
        let mut root = Set::new();
        cur.skip_whitespace();
        while !cur.is_done() {
            let (key, value) = self.read_element(&mut cur, 0)?;
            root.insert(key, value);
            cur.skip_whitespace();
        }
        Ok(root)
    }

    /// Reads one `key value` element, where the value is a string or a
    /// brace-delimited set.
    fn read_element(&self, cur: &mut Cur<'_>, depth: usize) -> Result<(String, Value), KeyValuesError> {
        let key = read_string(cur)?;
        cur.skip_whitespace();
        let value = match cur.peek() {
            Some('"') => Value::Str(read_string(cur)?),
            Some('{') => Value::Set(self.read_set(cur, depth + 1)?),
            Some(ch) => return Err(KeyValuesError::UnexpectedCharacter(ch)),
            None => return Err(KeyValuesError::UnexpectedEnd),
        };
        Ok((key, value))
    }

    fn read_set(&self, cur: &mut Cur<'_>, depth: usize) -> Result<Set, KeyValuesError> {
        if depth > self.max_depth {
            return Err(KeyValuesError::TooDeep(self.max_depth));
        }
        // Caller has already peeked the opening brace.
        cur.next();
        let mut set = Set::new();
        loop {
            cur.skip_whitespace();
            match cur.peek() {
                Some('}') => {
                    cur.next();
                    return Ok(set);
                }
                Some(_) => {
                    let (key, value) = self.read_element(cur, depth)?;
                    set.insert(key, value);
                }
                None => return Err(KeyValuesError::UnterminatedSet),
            }
        }
    }
}

/// Reads a quoted string token, unescaping `\\`, `\"`, `\t`, and `\n`.
fn read_string(cur: &mut Cur<'_>) -> Result<String, KeyValuesError> {
    match cur.next() {
        Some('"') => {}
        Some(ch) => return Err(KeyValuesError::UnexpectedCharacter(ch)),
        None => return Err(KeyValuesError::UnexpectedEnd),
    }
    let mut out = String::new();
    loop {
        match cur.next() {
            Some('"') => return Ok(out),
            Some('\\') => match cur.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('\\') => out.push('\\'),
                Some('"') => out.push('"'),
                Some(ch) => return Err(KeyValuesError::InvalidEscape(ch)),
                None => return Err(KeyValuesError::UnterminatedString),
            },
            Some(ch) => out.push(ch),
            None => return Err(KeyValuesError::UnterminatedString),
        }
    }
}

/// Decodes a text KeyValues document with the default nesting limit.
pub fn decode(input: &str) -> Result<Set, KeyValuesError> {
    KeyValuesDecoder::new().decode(input)
}
