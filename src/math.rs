//! Powers and square roots of rationals
//!
//! Square roots are approximated by the convergents of the periodic continued
//! fraction of `sqrt(n)`, see [sqrt_as_continued_fraction](crate::sqrt_as_continued_fraction).

use crate::cont_frac::sqrt_as_continued_fraction_bounded;
use crate::error::{Error, Result};
use crate::rational::Rational;
use crate::traits::{Approximation, FromSqrt};
use num_bigint::BigInt;
use num_traits::{Pow, ToPrimitive, Zero};

/// Number of continued fraction terms used by [sqrt] and [sqrt_rational]
pub const DEFAULT_SQRT_STEPS: usize = 30;

/// Raise `f` to an integer power with binary exponentiation.
///
/// `f^0` is the identity, every other result is simplified. A negative
/// exponent gives the reciprocal of `f^-n`.
///
/// Returns [Error::DivideByZero] for a zero base with a negative exponent.
pub fn pow(f: &Rational, n: i32) -> Result<Rational> {
    match n {
        0 => Ok(Rational::identity()),
        1 => Ok(f.simplify()),
        n if n < 0 => pow_unsigned(f, n.unsigned_abs()).checked_recip(),
        n => Ok(pow_unsigned(f, n as u32)),
    }
}

fn pow_unsigned(f: &Rational, mut exp: u32) -> Rational {
    let mut base = f.simplify();
    let mut acc = Rational::identity();
    while exp > 0 {
        if exp & 1 == 1 {
            acc = &acc * &base;
        }
        exp >>= 1;
        if exp > 0 {
            base = &base * &base;
        }
    }
    acc.simplify()
}

/// Approximate `sqrt(n)` with the convergent after [DEFAULT_SQRT_STEPS] terms.
/// Perfect squares give the exact root.
#[inline]
pub fn sqrt<N: Into<BigInt>>(n: N) -> Result<Rational> {
    sqrt_with_steps(n, DEFAULT_SQRT_STEPS)
}

/// Approximate `sqrt(n)` with the convergent after `steps` terms.
///
/// Returns [Error::InvalidArgument] if `n` is negative.
pub fn sqrt_with_steps<N: Into<BigInt>>(n: N, steps: usize) -> Result<Rational> {
    // the convergent never reads past `steps` terms, so a longer period
    // doesn't have to be expanded completely
    sqrt_as_continued_fraction_bounded(n, steps)?.convergent(steps)
}

/// Approximate `sqrt(r)` as `sqrt(numer) / sqrt(denom)`, see [sqrt_rational_with_steps]
#[inline]
pub fn sqrt_rational(r: &Rational) -> Result<Rational> {
    sqrt_rational_with_steps(r, DEFAULT_SQRT_STEPS)
}

/// Approximate `sqrt(r)` as `sqrt(numer) / sqrt(denom)`, rooting both parts
/// with `steps` continued fraction terms.
///
/// Both the numerator and the denominator have to fit in an `i32`, otherwise
/// [Error::Overflow] names the offending operand. Use [FromSqrt] on
/// [Rational] to root arbitrary large fractions. A negative `r` gives
/// [Error::InvalidArgument].
pub fn sqrt_rational_with_steps(r: &Rational, steps: usize) -> Result<Rational> {
    if r.is_negative() {
        return Err(Error::InvalidArgument(format!(
            "cannot take the square root of negative fraction {}",
            r
        )));
    }
    if r.numer() == r.denom() {
        return Ok(Rational::identity());
    }
    if r.numer().is_zero() {
        return Ok(Rational::zero());
    }

    let numer = narrow(r.numer(), "numerator", r)?;
    let denom = narrow(r.denom(), "denominator", r)?;
    sqrt_with_steps(numer, steps)?.checked_div(&sqrt_with_steps(denom, steps)?)
}

#[inline]
fn narrow(v: &BigInt, operand: &str, r: &Rational) -> Result<i32> {
    v.to_i32()
        .ok_or_else(|| Error::overflow(format!("{} {} of {}", operand, v, r), "i32"))
}

impl Rational {
    /// See [pow](crate::pow)
    #[inline]
    pub fn pow(&self, n: i32) -> Result<Rational> {
        pow(self, n)
    }

    /// See [sqrt_rational](crate::sqrt_rational)
    #[inline]
    pub fn sqrt(&self) -> Result<Rational> {
        sqrt_rational(self)
    }
}

impl Pow<i32> for &Rational {
    type Output = Rational;

    /// # Panics
    /// Panics on a zero base with a negative exponent, use [Rational::pow] to handle it.
    fn pow(self, n: i32) -> Rational {
        match pow(self, n) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

impl FromSqrt<BigInt> for Rational {
    type Error = Error;

    /// The exact root of a perfect square, otherwise the convergent after
    /// [DEFAULT_SQRT_STEPS] terms. Only those terms are expanded, so the cost
    /// doesn't grow with the period of large inputs.
    fn from_sqrt(t: BigInt) -> Result<Approximation<Self>> {
        let cf = sqrt_as_continued_fraction_bounded(t, DEFAULT_SQRT_STEPS)?;
        if cf.is_integer() {
            return Ok(Approximation::Exact(Rational::from_integer(cf.initial().clone())));
        }
        Ok(Approximation::Approximated(cf.convergent(DEFAULT_SQRT_STEPS)?))
    }
}

macro_rules! impl_from_sqrt_int {
    ($($T:ty),*) => {$(
        impl FromSqrt<$T> for Rational {
            type Error = Error;

            #[inline]
            fn from_sqrt(t: $T) -> Result<Approximation<Self>> {
                Rational::from_sqrt(BigInt::from(t))
            }
        }
    )*};
}
impl_from_sqrt_int!(i32, i64, u32, u64);

impl FromSqrt<&Rational> for Rational {
    type Error = Error;

    /// Root the reduced numerator and denominator separately. The result is
    /// exact only if both of them are perfect squares.
    fn from_sqrt(t: &Rational) -> Result<Approximation<Self>> {
        if t.is_negative() {
            return Err(Error::InvalidArgument(format!(
                "cannot take the square root of negative fraction {}",
                t
            )));
        }

        let (numer, denom) = t.simplify().into_parts();
        let n = Rational::from_sqrt(numer)?;
        let d = Rational::from_sqrt(denom)?;
        let exact = n.is_exact() && d.is_exact();
        let value = n.value().checked_div(&d.value())?;
        Ok(if exact {
            Approximation::Exact(value)
        } else {
            Approximation::Approximated(value)
        })
    }
}

impl FromSqrt<Rational> for Rational {
    type Error = Error;

    #[inline]
    fn from_sqrt(t: Rational) -> Result<Approximation<Self>> {
        Rational::from_sqrt(&t)
    }
}
