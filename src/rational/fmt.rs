use super::Rational;
use crate::error::{Error, Result};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};
use std::fmt;

/// Number of fractional digits rendered by [Rational::approximate_default]
pub const DEFAULT_DECIMAL_DIGITS: usize = 18;

impl fmt::Display for Rational {
    /// Formats as `(N / D)`, or as the mixed number `(Q + R / D)` with the
    /// alternate flag (`{:#}`)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            let (quo, rem) = self.numer.div_rem(&self.denom);
            write!(f, "({} + {} / {})", quo, rem, self.denom)
        } else {
            write!(f, "({} / {})", self.numer, self.denom)
        }
    }
}

impl Rational {
    /// Format as a mixed number `(Q + R / D)`, where the integer part and
    /// the remainder are truncated towards zero
    #[inline]
    pub fn to_string_mixed(&self) -> String {
        format!("{:#}", self)
    }

    /// Format with a named style (case insensitive):
    /// - `""`, `"G"` or `"S"`: `(N / D)`
    /// - `"B"`: `(Q + R / D)`
    /// - `"H"`: only the integer part
    pub fn format_with(&self, spec: &str) -> Result<String> {
        match spec.to_ascii_uppercase().as_str() {
            "" | "G" | "S" => Ok(self.to_string()),
            "B" => Ok(self.to_string_mixed()),
            "H" => Ok(self.to_integer().to_string()),
            _ => Err(Error::Format(format!(
                "the format specifier {:?} is not supported",
                spec
            ))),
        }
    }

    /// Render a decimal approximation with at most `digits` fractional digits.
    ///
    /// The digits come from long division on the exact value, so the output is
    /// truncated rather than rounded. Expansion stops early when it terminates.
    pub fn approximate(&self, digits: usize) -> String {
        let mut result = String::with_capacity(digits + 4);
        if self.numer.is_negative() {
            result.push('-');
        }

        let (quo, mut rem) = self.numer.abs().div_rem(&self.denom);
        result.push_str(&quo.to_string());
        if rem.is_zero() || digits == 0 {
            return result;
        }

        result.push('.');
        let ten = BigInt::from(10u8);
        for _ in 0..digits {
            if rem.is_zero() {
                break;
            }
            let (digit, next) = (rem * &ten).div_rem(&self.denom);
            result.push_str(&digit.to_string());
            rem = next;
        }
        result
    }

    /// [Rational::approximate] with [DEFAULT_DECIMAL_DIGITS] digits
    #[inline]
    pub fn approximate_default(&self) -> String {
        self.approximate(DEFAULT_DECIMAL_DIGITS)
    }
}
