/// Trust-scoped stream access
///
/// The engine reads three streams with asymmetric trust: the instance and
/// reference streams are reference data (a malformed read there is a
/// defect in the judge's own data), the submission stream is contestant
/// output (a malformed read there is the contestant's formatting fault).
/// `Source` encodes that attribution once so the engine never maps a read
/// failure to the wrong party.
use crate::stream::reader::{StreamError, TokenReader};
use crate::verdict::outcome::Rejection;
use std::io::{self, Read};

/// Failure attribution for a stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trust {
    /// Reference data: read failures become internal-failure.
    Trusted,
    /// Contestant output: read failures become presentation-error.
    Untrusted,
}

/// A token reader bound to a trust level and a stream label for messages.
pub struct Source {
    tokens: TokenReader,
    trust: Trust,
    label: &'static str,
}

impl Source {
    pub fn trusted<R: Read>(source: R, label: &'static str) -> io::Result<Self> {
        Ok(Source {
            tokens: TokenReader::new(source)?,
            trust: Trust::Trusted,
            label,
        })
    }

    pub fn untrusted<R: Read>(source: R, label: &'static str) -> io::Result<Self> {
        Ok(Source {
            tokens: TokenReader::new(source)?,
            trust: Trust::Untrusted,
            label,
        })
    }

    pub fn trusted_str(s: &str, label: &'static str) -> Self {
        Source {
            tokens: TokenReader::from_str(s),
            trust: Trust::Trusted,
            label,
        }
    }

    pub fn untrusted_str(s: &str, label: &'static str) -> Self {
        Source {
            tokens: TokenReader::from_str(s),
            trust: Trust::Untrusted,
            label,
        }
    }

    fn reject(&self, err: StreamError) -> Rejection {
        match self.trust {
            Trust::Trusted => Rejection::internal(format!("{} stream: {}", self.label, err)),
            // A contestant value outside a declared range is a wrong
            // answer; only a token that fails to parse at all is a
            // formatting fault.
            Trust::Untrusted => match err {
                StreamError::OutOfRange { .. } => Rejection::wrong_answer(err.to_string()),
                _ => Rejection::presentation(err.to_string()),
            },
        }
    }

    pub fn read_word(&mut self, name: &str) -> Result<String, Rejection> {
        self.tokens.read_word(name).map_err(|e| self.reject(e))
    }

    pub fn read_int(&mut self, name: &str) -> Result<i32, Rejection> {
        self.tokens.read_int(name).map_err(|e| self.reject(e))
    }

    pub fn read_long(&mut self, name: &str) -> Result<i64, Rejection> {
        self.tokens.read_long(name).map_err(|e| self.reject(e))
    }

    pub fn read_long_in(
        &mut self,
        name: &str,
        min: i64,
        max: i64,
    ) -> Result<i64, Rejection> {
        self.tokens
            .read_long_in(name, min, max)
            .map_err(|e| self.reject(e))
    }

    pub fn read_eoln(&mut self) -> Result<(), Rejection> {
        self.tokens.read_eoln().map_err(|e| self.reject(e))
    }

    pub fn read_line(&mut self, name: &str) -> Result<String, Rejection> {
        self.tokens.read_line(name).map_err(|e| self.reject(e))
    }
}
