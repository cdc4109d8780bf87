/// Normalized verdict claims
///
/// A claim is a case-normalized YES/NO word plus, only for YES, the
/// attached fraction. Claims render in diagnostics exactly as they appear
/// on the wire after normalization: `YES 1 2` or `NO`.
use crate::fraction::Fraction;
use std::fmt;

/// The recognized verdict tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Word {
    Yes,
    No,
}

impl Word {
    /// Parse a case-normalized token. Anything but `YES`/`NO` is not a
    /// word; the caller decides whose fault that is.
    pub fn parse(normalized: &str) -> Option<Word> {
        match normalized {
            "YES" => Some(Word::Yes),
            "NO" => Some(Word::No),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Word::Yes => "YES",
            Word::No => "NO",
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A verdict word with its attached fraction, when the word is YES.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Claim {
    pub word: Word,
    pub fraction: Option<Fraction>,
}

impl Claim {
    pub fn no() -> Self {
        Claim {
            word: Word::No,
            fraction: None,
        }
    }

    pub fn yes(fraction: Fraction) -> Self {
        Claim {
            word: Word::Yes,
            fraction: Some(fraction),
        }
    }
}

impl fmt::Display for Claim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fraction {
            Some(fraction) => write!(f, "{} {}", self.word, fraction),
            None => write!(f, "{}", self.word),
        }
    }
}
