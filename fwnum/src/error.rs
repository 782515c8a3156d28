use std::fmt::{Debug, Display, Formatter};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ParseErrorKind {
    /// The input had no digits (empty, or only a sign)
    Empty,
    /// A character is not a digit of the requested base, or is a letter of the wrong case
    InvalidDigit { index: usize, ch: char },
    /// The base is outside of [2, 36]
    InvalidBase(u32),
}

/// Error returned when text cannot be decoded into an integer.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ParseError {
    kind: ParseErrorKind,
}

impl ParseError {
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind() {
            ParseErrorKind::Empty => write!(f, "cannot parse integer from empty string"),
            ParseErrorKind::InvalidDigit { index, ch } => {
                write!(f, "invalid digit {ch:?} found at index {index}")
            }
            ParseErrorKind::InvalidBase(base) => {
                write!(f, "base must be in the range [2, 36], got {base}")
            }
        }
    }
}

impl From<ParseErrorKind> for ParseError {
    fn from(kind: ParseErrorKind) -> Self {
        Self { kind }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ParseError::from(ParseErrorKind::InvalidDigit { index: 3, ch: 'z' });
        assert_eq!(err.to_string(), "invalid digit 'z' found at index 3");
        assert_eq!(
            ParseError::from(ParseErrorKind::InvalidBase(37)).to_string(),
            "base must be in the range [2, 36], got 37"
        );
        assert_eq!(err.kind(), &ParseErrorKind::InvalidDigit { index: 3, ch: 'z' });
    }
}
