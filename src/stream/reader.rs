/// Typed token reader over a verification input stream
///
/// Token semantics follow the judging pipeline's conventions: a word is a
/// maximal run of non-blank bytes, blanks between tokens are space, tab,
/// CR and LF, and an explicit end-of-line read consumes exactly `\r?\n`.
/// The reader is position-tracking over an in-memory buffer; verification
/// inputs are small files supplied by the harness.
use std::io::{self, Read};
use thiserror::Error;

/// Blank separators between tokens.
const BLANKS: [u8; 4] = [b' ', b'\t', b'\r', b'\n'];

/// Stream-level read failures. Outcome attribution (contestant vs
/// reference data) is layered on top by [`crate::stream::Source`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    #[error("unexpected end of stream while reading {0}")]
    UnexpectedEof(String),

    #[error("expected integer for {name}, but '{found}' found")]
    NotAnInteger { name: String, found: String },

    #[error("{name} = {value} violates the range [{min}, {max}]")]
    OutOfRange {
        name: String,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("end of line expected, but '{found}' found")]
    ExpectedEoln { found: String },
}

/// Position-tracking token reader.
pub struct TokenReader {
    buf: Vec<u8>,
    pos: usize,
}

impl TokenReader {
    /// Read the whole source into memory and start at the beginning.
    pub fn new<R: Read>(mut source: R) -> io::Result<Self> {
        let mut buf = Vec::new();
        source.read_to_end(&mut buf)?;
        Ok(TokenReader { buf, pos: 0 })
    }

    pub fn from_str(s: &str) -> Self {
        TokenReader {
            buf: s.as_bytes().to_vec(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    fn skip_blanks(&mut self) {
        while let Some(b) = self.peek() {
            if BLANKS.contains(&b) {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Read the next whitespace-delimited word.
    pub fn read_word(&mut self, name: &str) -> Result<String, StreamError> {
        self.skip_blanks();
        let start = self.pos;
        while let Some(b) = self.peek() {
            if BLANKS.contains(&b) {
                break;
            }
            self.pos += 1;
        }
        if self.pos == start {
            return Err(StreamError::UnexpectedEof(name.to_string()));
        }
        Ok(String::from_utf8_lossy(&self.buf[start..self.pos]).into_owned())
    }

    /// Read a signed 64-bit integer token.
    pub fn read_long(&mut self, name: &str) -> Result<i64, StreamError> {
        let word = self.read_word(name)?;
        word.parse::<i64>().map_err(|_| StreamError::NotAnInteger {
            name: name.to_string(),
            found: word,
        })
    }

    /// Read a signed 64-bit integer token and enforce an inclusive range.
    pub fn read_long_in(
        &mut self,
        name: &str,
        min: i64,
        max: i64,
    ) -> Result<i64, StreamError> {
        let value = self.read_long(name)?;
        if value < min || value > max {
            return Err(StreamError::OutOfRange {
                name: name.to_string(),
                value,
                min,
                max,
            });
        }
        Ok(value)
    }

    /// Read a 32-bit integer token.
    pub fn read_int(&mut self, name: &str) -> Result<i32, StreamError> {
        let value = self.read_long(name)?;
        i32::try_from(value).map_err(|_| StreamError::OutOfRange {
            name: name.to_string(),
            value,
            min: i32::MIN as i64,
            max: i32::MAX as i64,
        })
    }

    /// Consume exactly one `\r?\n` at the current position.
    pub fn read_eoln(&mut self) -> Result<(), StreamError> {
        if self.peek() == Some(b'\r') {
            self.pos += 1;
        }
        match self.peek() {
            Some(b'\n') => {
                self.pos += 1;
                Ok(())
            }
            Some(b) => Err(StreamError::ExpectedEoln {
                found: (b as char).to_string(),
            }),
            None => Err(StreamError::ExpectedEoln {
                found: "end of stream".to_string(),
            }),
        }
    }

    /// Read the rest of the current line (trailing CR stripped, EOL
    /// consumed). Empty remainder at end of stream is an error.
    pub fn read_line(&mut self, name: &str) -> Result<String, StreamError> {
        if self.pos >= self.buf.len() {
            return Err(StreamError::UnexpectedEof(name.to_string()));
        }
        let start = self.pos;
        while let Some(b) = self.peek() {
            if b == b'\n' {
                break;
            }
            self.pos += 1;
        }
        let mut end = self.pos;
        if self.peek() == Some(b'\n') {
            self.pos += 1;
        }
        if end > start && self.buf[end - 1] == b'\r' {
            end -= 1;
        }
        Ok(String::from_utf8_lossy(&self.buf[start..end]).into_owned())
    }
}
