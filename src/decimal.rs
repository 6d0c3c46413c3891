//! Decimal text conversion.
//!
//! Parsing accepts an optional leading `-` followed by ASCII digits and
//! nothing else. Rendering divides a scratch copy by ten one word-pass at a
//! time, prepending each digit.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use tracing::{debug, error};

use crate::big_int::{BigInt, Sign};
use crate::big_num_constants::*;
use crate::division::div_rem_word_in_place;
use crate::error::{BigIntError, Result};
use crate::magnitude::{add_small_assign, mul_small_assign};
use crate::word_buf::WordBuf;

/// Limits applied while parsing decimal text.
///
/// The default caps input at one million digits so that untrusted text
/// cannot force an unbounded allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalLimits {
    max_digits: Option<usize>,
}

impl Default for DecimalLimits {
    fn default() -> Self {
        DecimalLimits { max_digits: Some(DEFAULT_MAX_DECIMAL_DIGITS) }
    }
}

impl DecimalLimits {
    /// No cap; the input size is bounded only by available memory.
    pub const fn unbounded() -> Self {
        DecimalLimits { max_digits: None }
    }

    /// Accepts at most `max` digits, not counting the sign.
    pub const fn with_max_digits(max: usize) -> Self {
        DecimalLimits { max_digits: Some(max) }
    }

    pub fn max_digits(&self) -> Option<usize> {
        self.max_digits
    }
}

fn invalid(input: &str, reason: &'static str) -> BigIntError {
    debug!(input_len = input.len(), reason, "rejected decimal input");
    BigIntError::InvalidFormat { input: input.to_owned(), reason }
}

// 实现解析
impl BigInt {
    /// Parses decimal text under [`DecimalLimits::default`].
    pub fn from_decimal_str(s: &str) -> Result<BigInt> {
        BigInt::from_decimal_str_with(s, &DecimalLimits::default())
    }

    pub fn from_decimal_str_with(s: &str, limits: &DecimalLimits) -> Result<BigInt> {
        let (sign, digits) = match s.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, s),
        };
        if digits.is_empty() {
            return Err(invalid(s, "no digits"));
        }
        if let Some(max) = limits.max_digits {
            if digits.len() > max {
                debug!(digits = digits.len(), max, "decimal input over limit");
                return Err(BigIntError::TooManyDigits { digits: digits.len(), max });
            }
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid(s, "expected only ASCII digits after an optional '-'"));
        }

        let num_bits = (digits.len().saturating_mul(BITS_PER_DECIMAL_DIGIT) >> 10) + 1;
        let num_words = (num_bits + WORD_BITS - 1) / WORD_BITS;
        let mut value = BigInt::with_capacity(num_words)?;

        let mag = value.mag_buf_mut();
        for b in digits.bytes() {
            mul_small_assign(mag, 10)?;
            add_small_assign(mag, (b - b'0') as u32)?;
        }

        Ok(match sign {
            Sign::Negative => -value,
            Sign::Positive => value,
        })
    }

    /// Replaces the value with the parsed text. On error the value is left
    /// as it was.
    pub fn set_decimal_str(&mut self, s: &str) -> Result<&mut Self> {
        *self = BigInt::from_decimal_str(s)?;
        Ok(self)
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self> {
        BigInt::from_decimal_str(s)
    }
}

// 实现打印
impl BigInt {
    pub fn to_decimal_string(&self) -> Result<String> {
        self.render_decimal(true)
    }

    fn render_decimal(&self, with_sign: bool) -> Result<String> {
        if self.is_zero() {
            return Ok(String::from("0"));
        }

        // log10(2) ~ 1233 / 4096
        let max_digits = ((self.bit_length() * 1233) >> 12) + 2;
        let mut digits: VecDeque<u8> = VecDeque::new();
        digits.try_reserve(max_digits).map_err(|_| {
            error!(digits = max_digits, "couldn't allocate digit buffer");
            BigIntError::AllocationFailure { words: max_digits / 4 + 1 }
        })?;

        let mut work = WordBuf::from_slice(self.mag())?;
        while !work.is_empty() {
            let digit = div_rem_word_in_place(&mut work, 10);
            digits.push_front(b'0' + digit as u8);
        }
        if with_sign && self.is_negative() {
            digits.push_front(b'-');
        }

        Ok(digits.into_iter().map(char::from).collect())
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.render_decimal(false).map_err(|_| fmt::Error)?;
        f.pad_integral(!self.is_negative(), "", &digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(s: &str) -> String {
        BigInt::from_decimal_str(s).unwrap().to_decimal_string().unwrap()
    }

    #[test]
    fn parse_and_render() {
        assert_eq!(round_trip("0"), "0");
        assert_eq!(round_trip("-0"), "0");
        assert_eq!(round_trip("-000"), "0");
        assert_eq!(round_trip("000123"), "123");
        assert_eq!(round_trip("-4294967296"), "-4294967296");
        assert_eq!(
            round_trip("12345678909876523784950683472613487560983287654321"),
            "12345678909876523784950683472613487560983287654321"
        );

        let a = BigInt::from_decimal_str("4294967296").unwrap();
        assert_eq!(a.mag(), &[0, 1]);
        let a = BigInt::from_decimal_str("-18446744073709551615").unwrap();
        assert_eq!(a.mag(), &[u32::MAX, u32::MAX]);
        assert!(a.is_negative());
    }

    #[test]
    fn negative_zero_is_positive() {
        let z = BigInt::from_decimal_str("-0").unwrap();
        assert!(z.is_zero());
        assert_eq!(z.sign(), Sign::Positive);
    }

    #[test]
    fn rejects_malformed_text() {
        for bad in ["", "-", "+5", "12a", "--1", " 1", "1 ", "1_000", "٣", "-x"] {
            assert!(
                matches!(BigInt::from_decimal_str(bad), Err(BigIntError::InvalidFormat { .. })),
                "{:?} should be rejected",
                bad
            );
        }
        assert_eq!(
            "-".parse::<BigInt>(),
            Err(BigIntError::InvalidFormat { input: "-".to_owned(), reason: "no digits" })
        );
    }

    #[test]
    fn digit_limit() {
        let limits = DecimalLimits::with_max_digits(3);
        assert!(BigInt::from_decimal_str_with("-999", &limits).is_ok());
        assert_eq!(
            BigInt::from_decimal_str_with("1000", &limits),
            Err(BigIntError::TooManyDigits { digits: 4, max: 3 })
        );

        let long = "9".repeat(DEFAULT_MAX_DECIMAL_DIGITS + 1);
        assert!(matches!(
            BigInt::from_decimal_str(&long),
            Err(BigIntError::TooManyDigits { .. })
        ));
        let long = "7".repeat(2000);
        let parsed = BigInt::from_decimal_str_with(&long, &DecimalLimits::unbounded()).unwrap();
        assert_eq!(parsed.to_decimal_string().unwrap(), long);
        assert_eq!(DecimalLimits::default().max_digits(), Some(DEFAULT_MAX_DECIMAL_DIGITS));
    }

    #[test]
    fn parse_presizes_buffer() {
        let a = BigInt::from_decimal_str("340282366920938463463374607431768211455").unwrap();
        assert_eq!(a.word_len(), 4);
        assert!(a.capacity() >= 4);
    }

    #[test]
    fn set_decimal_str_keeps_value_on_error() {
        let mut a = BigInt::from_int(42);
        assert!(a.set_decimal_str("4x2").is_err());
        assert_eq!(a.to_decimal_string().unwrap(), "42");
        a.set_decimal_str("-77777777777777777777").unwrap();
        assert_eq!(a.to_string(), "-77777777777777777777");
    }

    #[test]
    fn display_honours_format_flags() {
        let a = BigInt::from_int(-42);
        assert_eq!(format!("{}", a), "-42");
        assert_eq!(format!("{:>6}", a), "   -42");
        assert_eq!(format!("{:+}", BigInt::from_int(42)), "+42");
        assert_eq!(format!("{:05}", a), "-0042");
        assert_eq!(format!("{:?}", a), "BigInt(-42)");
        assert_eq!(BigInt::default().to_string(), "0");
    }
}
