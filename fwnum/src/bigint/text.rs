//! Text encoding and decoding of [`U128`] in bases 2 to 36.
//!
//! Encoding repeatedly divides by the base through the single-word division path. Decoding
//! accumulates `acc * base + digit` with wrapping arithmetic, so oversized inputs silently wrap
//! modulo 2^128, and a leading `-` negates the result.

use std::fmt;
use std::str::FromStr;

use super::{algorithms, U128};
use crate::error::{ParseError, ParseErrorKind};

const DIGITS_LOWER: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const DIGITS_UPPER: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

const MIN_BASE: u32 = 2;
const MAX_BASE: u32 = 36;

// Enough for MAX in base 2
const BUFFER_LEN: usize = 128;

/// Which letter case digits above 9 may use.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum LetterCase {
    Any,
    Lower,
    Upper,
}

fn reject(kind: ParseErrorKind) -> ParseError {
    tracing::trace!(?kind, "rejected integer text");
    ParseError::from(kind)
}

fn digit_value(ch: char, base: u32, case: LetterCase) -> Option<u32> {
    let value = match ch {
        '0'..='9' => ch as u32 - '0' as u32,
        'a'..='z' if case != LetterCase::Upper => ch as u32 - 'a' as u32 + 10,
        'A'..='Z' if case != LetterCase::Lower => ch as u32 - 'A' as u32 + 10,
        _ => return None,
    };
    (value < base).then_some(value)
}

fn check_base(base: u32) -> Result<(), ParseError> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(reject(ParseErrorKind::InvalidBase(base)))
    }
}

/// Splits an optional leading `+` or `-`, returning whether the value is negated and the offset
/// of the first digit.
fn split_sign(s: &str) -> (bool, usize) {
    match s.as_bytes().first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    }
}

fn finish(mut acc: [u64; 2], negative: bool) -> U128 {
    if negative {
        algorithms::neg_assign(&mut acc);
    }
    U128(acc)
}

impl U128 {
    /// Writes the digits into the tail of `buffer` and returns them.
    fn encode<'a>(self, base: u32, uppercase: bool, buffer: &'a mut [u8; BUFFER_LEN]) -> &'a str {
        assert!(
            (MIN_BASE..=MAX_BASE).contains(&base),
            "base must be in the range [2, 36], got {base}"
        );
        let digits = if uppercase { DIGITS_UPPER } else { DIGITS_LOWER };

        let mut words = self.0;
        let mut start = BUFFER_LEN;
        loop {
            let (quotient, remainder) = algorithms::div_rem_word(&words, u64::from(base));
            start -= 1;
            buffer[start] = digits[remainder as usize];
            words = quotient;
            if words == [0, 0] {
                break;
            }
        }

        // Only ASCII digits were written
        std::str::from_utf8(&buffer[start..]).unwrap_or_default()
    }

    /// Encodes the value in `base`, using uppercase letters for digits above 9 if `uppercase`.
    ///
    /// Zero encodes as `"0"` and no sign or prefix is ever written.
    ///
    /// # Panics
    ///
    /// Panics if `base` is not in `[2, 36]`.
    pub fn to_string_radix(self, base: u32, uppercase: bool) -> String {
        let mut buffer = [0u8; BUFFER_LEN];
        self.encode(base, uppercase, &mut buffer).to_owned()
    }

    fn decode(s: &str, base: u32, case: LetterCase) -> Result<Self, ParseError> {
        check_base(base)?;
        let (negative, offset) = split_sign(s);
        if s.len() == offset {
            return Err(reject(ParseErrorKind::Empty));
        }

        let mut acc = [0u64; 2];
        for (index, ch) in s.char_indices().skip(offset) {
            let digit = digit_value(ch, base, case)
                .ok_or_else(|| reject(ParseErrorKind::InvalidDigit { index, ch }))?;
            algorithms::mul_assign_word(&mut acc, u64::from(base));
            algorithms::add_assign_word(&mut acc, u64::from(digit));
        }

        Ok(finish(acc, negative))
    }

    /// Decodes `s` in `base`, accepting letters of either case.
    ///
    /// The input is an optional `+` or `-` followed by at least one digit. Values that do not fit
    /// wrap modulo 2^128 and a `-` sign yields the two's complement of the magnitude.
    ///
    /// ```
    /// use fwnum::U128;
    ///
    /// assert_eq!(U128::from_str_radix("-1", 10).unwrap(), U128::MAX);
    /// assert_eq!(U128::from_str_radix("fF", 16).unwrap(), U128::from(255u32));
    /// ```
    pub fn from_str_radix(s: &str, base: u32) -> Result<Self, ParseError> {
        Self::decode(s, base, LetterCase::Any)
    }

    /// Same as [`from_str_radix`](Self::from_str_radix) but letters must all be uppercase if
    /// `uppercase` is set, lowercase otherwise.
    pub fn parse(s: &str, base: u32, uppercase: bool) -> Result<Self, ParseError> {
        let case = if uppercase {
            LetterCase::Upper
        } else {
            LetterCase::Lower
        };
        Self::decode(s, base, case)
    }

    /// Decodes the longest integer at the start of `s`, stream extraction style.
    ///
    /// Leading ASCII whitespace is skipped, then an optional sign and as many digits of `base` as
    /// possible are consumed. Returns the value and the number of bytes consumed, whitespace
    /// included. Fails if no digit follows the whitespace and sign.
    pub fn parse_prefix(s: &str, base: u32) -> Result<(Self, usize), ParseError> {
        check_base(base)?;
        let start = s.len() - s.trim_start_matches(|c: char| c.is_ascii_whitespace()).len();
        let (negative, sign_len) = split_sign(&s[start..]);
        let digits_start = start + sign_len;

        let mut acc = [0u64; 2];
        let mut end = digits_start;
        for (index, ch) in s[digits_start..].char_indices() {
            let Some(digit) = digit_value(ch, base, LetterCase::Any) else {
                break;
            };
            algorithms::mul_assign_word(&mut acc, u64::from(base));
            algorithms::add_assign_word(&mut acc, u64::from(digit));
            end = digits_start + index + ch.len_utf8();
        }

        if end == digits_start {
            let kind = match s[digits_start..].chars().next() {
                Some(ch) => ParseErrorKind::InvalidDigit {
                    index: digits_start,
                    ch,
                },
                None => ParseErrorKind::Empty,
            };
            return Err(reject(kind));
        }

        Ok((finish(acc, negative), end))
    }
}

impl FromStr for U128 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 10)
    }
}

macro_rules! impl_fmt {
    ($Trait: ident, $base: expr, $uppercase: expr, $prefix: expr) => {
        impl fmt::$Trait for U128 {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut buffer = [0u8; BUFFER_LEN];
                f.pad_integral(true, $prefix, self.encode($base, $uppercase, &mut buffer))
            }
        }
    };
}

impl_fmt!(Display, 10, false, "");
impl_fmt!(Binary, 2, false, "0b");
impl_fmt!(Octal, 8, false, "0o");
impl_fmt!(LowerHex, 16, false, "0x");
impl_fmt!(UpperHex, 16, true, "0x");
