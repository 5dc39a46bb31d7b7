use super::Rational;
use crate::error::{Error, Result};
use core::str::FromStr;
use num_bigint::BigInt;

impl FromStr for Rational {
    type Err = Error;

    /// Parse from `"a/b"` or `"(a/b)"`, see [Rational::parse]
    #[inline]
    fn from_str(s: &str) -> Result<Self> {
        Rational::parse(s)
    }
}

impl Rational {
    /// Parse a fraction written as `"a/b"` or `"(a/b)"`.
    ///
    /// Whitespace is allowed around the numbers, so the output of `Display`
    /// parses back. Only the numerator may carry a leading `-`. Decimal points,
    /// exponents and other shapes are rejected with [Error::Format], a zero
    /// denominator gives [Error::DivideByZero].
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let inner = match trimmed.strip_prefix('(') {
            Some(rest) => rest
                .strip_suffix(')')
                .ok_or_else(|| invalid(s, "unbalanced parenthesis"))?,
            None => trimmed,
        };

        let (numer, denom) = inner
            .split_once('/')
            .ok_or_else(|| invalid(s, "expected a '/' separator"))?;
        let numer = parse_integer(numer.trim(), true).ok_or_else(|| invalid(s, "bad numerator"))?;
        let denom = parse_integer(denom.trim(), false).ok_or_else(|| invalid(s, "bad denominator"))?;
        Rational::new(numer, denom)
    }

    /// Parse without failing. Returns `(true, value)` on success, and
    /// `(false, Rational::identity())` for any input [Rational::parse] rejects.
    pub fn try_parse(s: &str) -> (bool, Rational) {
        match Rational::parse(s) {
            Ok(v) => (true, v),
            Err(e) => {
                log::debug!("failed to parse {:?} as a fraction: {}", s, e);
                (false, Rational::identity())
            }
        }
    }
}

#[inline]
fn invalid(s: &str, reason: &str) -> Error {
    Error::Format(format!("cannot parse {:?} as a fraction: {}", s, reason))
}

// Only plain decimal digits, BigInt::from_str would also take '+' and '_'
fn parse_integer(s: &str, signed: bool) -> Option<BigInt> {
    let digits = match s.strip_prefix('-') {
        Some(rest) if signed => rest,
        Some(_) => return None,
        None => s,
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    BigInt::from_str(s).ok()
}
