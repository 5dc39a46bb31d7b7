//! Exact rational numbers over arbitrary precision integers
//!
//! A [Rational] keeps its sign on the numerator and always has a positive
//! denominator. Arithmetic never reduces the result implicitly, call
//! [Rational::simplify] when a reduced representation is needed. Equality,
//! hashing and ordering are all defined on the value, so `1/2 == 2/4`.

mod fmt;
mod ops;
mod parse;
#[cfg(feature = "serde")]
mod serialize;

pub use fmt::DEFAULT_DECIMAL_DIGITS;

use crate::cont_frac::ContinuedFraction;
use crate::error::{Error, Result};
use core::cmp::Ordering;
use core::convert::TryFrom;
use core::hash::{Hash, Hasher};
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// An exact fraction `numer / denom` with `denom > 0`
#[derive(Clone, Debug)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

impl Rational {
    /// Create a rational number, moving the sign of the denominator to the numerator.
    ///
    /// Returns [Error::DivideByZero] if the denominator is zero.
    pub fn new<N: Into<BigInt>, D: Into<BigInt>>(numer: N, denom: D) -> Result<Self> {
        let (numer, denom) = (numer.into(), denom.into());
        if denom.is_zero() {
            return Err(Error::divide_by_zero(format!(
                "denominator of {}/{}",
                numer, denom
            )));
        }

        if denom.is_negative() {
            Ok(Rational::new_raw(-numer, -denom))
        } else {
            Ok(Rational::new_raw(numer, denom))
        }
    }

    /// Create without checking the denominator, the caller makes sure `denom > 0`
    #[inline]
    pub(crate) fn new_raw(numer: BigInt, denom: BigInt) -> Self {
        debug_assert!(denom.is_positive());
        Rational { numer, denom }
    }

    /// Create the rational `n / 1`
    #[inline]
    pub fn from_integer<N: Into<BigInt>>(n: N) -> Self {
        Rational::new_raw(n.into(), BigInt::one())
    }

    /// The multiplicative identity `1 / 1`
    #[inline]
    pub fn identity() -> Self {
        Rational::new_raw(BigInt::one(), BigInt::one())
    }

    /// Build the convergent of a continued fraction after `steps` terms.
    ///
    /// The terms are consumed from the back, with index `steps - 1` down to `0`
    /// taken modulo the number of terms, so a repeating expansion can be
    /// evaluated to any depth. When the expansion has no terms (an exact root),
    /// the result is just the initial value.
    ///
    /// Returns [Error::DivideByZero] if any term is zero.
    pub fn from_continued_fraction(cf: &ContinuedFraction, steps: usize) -> Result<Self> {
        let terms = cf.terms();
        let initial = Rational::from_integer(cf.initial().clone());
        let steps = if terms.is_empty() { 0 } else { steps };
        if steps == 0 {
            return Ok(initial);
        }

        if let Some(pos) = terms.iter().position(Zero::is_zero) {
            return Err(Error::divide_by_zero(format!(
                "term {} of continued fraction {}",
                pos + 1,
                cf
            )));
        }

        let len = terms.len();
        let mut idx = steps - 1;
        let mut r = Rational::new(BigInt::one(), terms[idx % len].clone())?;
        while idx > 0 {
            idx -= 1;
            // r = 1 / (a_idx + r)
            r = (r + &terms[idx % len]).checked_recip()?;
        }

        let convergent = initial + r;
        log::trace!("convergent of {} with {} steps: {}", cf, steps, convergent);
        Ok(convergent)
    }

    #[inline]
    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    #[inline]
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    /// Replace the numerator, keeping the denominator
    #[inline]
    pub fn set_numer<N: Into<BigInt>>(&mut self, numer: N) {
        self.numer = numer.into();
    }

    /// Replace the denominator. A negative value flips the sign of both fields.
    pub fn set_denom<D: Into<BigInt>>(&mut self, denom: D) -> Result<()> {
        let denom = denom.into();
        if denom.is_zero() {
            return Err(Error::divide_by_zero("setting the denominator to zero"));
        }
        if denom.is_negative() {
            self.numer = -core::mem::take(&mut self.numer);
            self.denom = -denom;
        } else {
            self.denom = denom;
        }
        Ok(())
    }

    /// Decompose into `(numer, denom)`
    #[inline]
    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numer, self.denom)
    }

    /// A proper fraction has an absolute value less than one
    #[inline]
    pub fn is_proper(&self) -> bool {
        self.numer.abs() < self.denom
    }

    /// Whether the numerator and denominator have no common factor
    #[inline]
    pub fn is_reduced(&self) -> bool {
        gcd(&self.numer, &self.denom).is_one()
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denom.is_one() || self.numer.is_multiple_of(&self.denom)
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numer.is_negative()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.numer.is_positive()
    }

    #[inline]
    pub fn abs(&self) -> Self {
        Rational::new_raw(self.numer.abs(), self.denom.clone())
    }

    /// Divide numerator and denominator by their greatest common divisor
    pub fn simplify(&self) -> Self {
        let g = gcd(&self.numer, &self.denom);
        if g.is_one() {
            return self.clone();
        }
        Rational::new_raw(&self.numer / &g, &self.denom / &g)
    }

    /// Truncate towards zero
    #[inline]
    pub fn to_integer(&self) -> BigInt {
        &self.numer / &self.denom
    }

    /// Compare by value without converting to floating point.
    ///
    /// Equal denominators only need the numerators compared. Otherwise the
    /// truncated quotients decide, and a tie is broken by the cross multiplied
    /// remainders.
    pub fn compare(&self, other: &Self) -> Ordering {
        if self.denom == other.denom {
            return self.numer.cmp(&other.numer);
        }

        let (lq, lr) = self.numer.div_rem(&self.denom);
        let (rq, rr) = other.numer.div_rem(&other.denom);
        match lq.cmp(&rq) {
            Ordering::Equal => (lr * &other.denom).cmp(&(rr * &self.denom)),
            ord => ord,
        }
    }

    /// Returns the reciprocal, or [Error::DivideByZero] if the value is zero
    pub fn checked_recip(&self) -> Result<Self> {
        if self.numer.is_zero() {
            return Err(Error::divide_by_zero(format!("inverting {}", self)));
        }
        Rational::new(self.denom.clone(), self.numer.clone())
    }

    /// Returns the reciprocal.
    ///
    /// # Panics
    /// Panics if the value is zero, use [Rational::checked_recip] to handle it.
    #[inline]
    pub fn recip(&self) -> Self {
        match self.checked_recip() {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }

    /// Alias of [Rational::checked_recip]
    #[inline]
    pub fn invert(&self) -> Result<Self> {
        self.checked_recip()
    }

    /// Alias of [Rational::checked_recip]
    #[inline]
    pub fn try_invert(&self) -> Result<Self> {
        self.checked_recip()
    }

    /// Returns `self / rhs`, or [Error::DivideByZero] if `rhs` is zero
    #[inline]
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        Ok(self * &rhs.checked_recip()?)
    }

    /// Approximate as `f64` by parsing the decimal expansion.
    ///
    /// Only the first [DEFAULT_DECIMAL_DIGITS] fractional digits are used.
    pub fn to_f64(&self) -> Option<f64> {
        self.approximate(DEFAULT_DECIMAL_DIGITS).parse().ok()
    }

    /// The continued fraction expansion of this rational
    #[inline]
    pub fn to_continued_fraction(&self) -> ContinuedFraction {
        ContinuedFraction::from(self)
    }
}

/// Greatest common divisor of `|a|` and `b` with Euclid's algorithm, `gcd(0, b) = |b|`
pub(crate) fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let (mut a, mut b) = (a.abs(), b.abs());
    while !a.is_zero() {
        let r = &b % &a;
        b = a;
        a = r;
    }
    b
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        if self.denom == other.denom {
            return self.numer == other.numer;
        }
        let (l, r) = (self.simplify(), other.simplify());
        l.numer == r.numer && l.denom == r.denom
    }
}

impl Eq for Rational {}

impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let reduced = self.simplify();
        reduced.numer.hash(state);
        reduced.denom.hash(state);
    }
}

impl PartialOrd for Rational {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for Rational {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Default for Rational {
    /// The default value is zero
    #[inline]
    fn default() -> Self {
        Rational::zero()
    }
}

impl Zero for Rational {
    #[inline]
    fn zero() -> Self {
        Rational::new_raw(BigInt::zero(), BigInt::one())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl One for Rational {
    #[inline]
    fn one() -> Self {
        Rational::identity()
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.numer == self.denom
    }
}

macro_rules! impl_from_integer {
    ($($T:ty),*) => {$(
        impl From<$T> for Rational {
            #[inline]
            fn from(n: $T) -> Self {
                Rational::from_integer(n)
            }
        }
    )*};
}
impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, BigInt);

impl From<Ratio<BigInt>> for Rational {
    #[inline]
    fn from(r: Ratio<BigInt>) -> Self {
        // Ratio keeps a positive denominator as well
        let (numer, denom) = r.into_raw();
        Rational::new_raw(numer, denom)
    }
}

impl From<Rational> for Ratio<BigInt> {
    #[inline]
    fn from(r: Rational) -> Self {
        Ratio::new(r.numer, r.denom)
    }
}

impl TryFrom<(BigInt, BigInt)> for Rational {
    type Error = Error;

    #[inline]
    fn try_from((numer, denom): (BigInt, BigInt)) -> Result<Self> {
        Rational::new(numer, denom)
    }
}

macro_rules! impl_try_into_primitive {
    ($($T:ident => $method:ident),*) => {$(
        impl TryFrom<&Rational> for $T {
            type Error = Error;

            /// Truncate towards zero
            fn try_from(r: &Rational) -> Result<$T> {
                let i = r.to_integer();
                i.$method()
                    .ok_or_else(|| Error::overflow(format!("{} (from {})", i, r), stringify!($T)))
            }
        }
    )*};
}
impl_try_into_primitive!(i32 => to_i32, i64 => to_i64, u64 => to_u64);

impl ToPrimitive for Rational {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        self.to_integer().to_i64()
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        self.to_integer().to_u64()
    }

    #[inline]
    fn to_f64(&self) -> Option<f64> {
        Rational::to_f64(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64, d: i64) -> Rational {
        Rational::new(n, d).unwrap()
    }

    #[test]
    fn creation_test() {
        let neg = r(1, -5);
        assert_eq!(neg.numer(), &BigInt::from(-1));
        assert_eq!(neg.denom(), &BigInt::from(5));

        let pos = r(-3, -9);
        assert_eq!(pos.numer(), &BigInt::from(3));
        assert_eq!(pos.denom(), &BigInt::from(9));

        assert!(matches!(Rational::new(1, 0), Err(Error::DivideByZero { .. })));
        assert_eq!(Rational::from(7u8), r(7, 1));
        assert_eq!(Rational::identity(), r(1, 1));
        assert_eq!(
            Rational::try_from((BigInt::from(2), BigInt::from(-4))).unwrap(),
            r(-1, 2)
        );
    }

    #[test]
    fn set_denom_test() {
        let mut f = r(2, 3);
        f.set_denom(-7).unwrap();
        assert_eq!((f.numer().clone(), f.denom().clone()), (BigInt::from(-2), BigInt::from(7)));
        assert!(f.set_denom(0).is_err());
        f.set_numer(14);
        assert_eq!(f, r(2, 1));
    }

    #[test]
    fn simplify_test() {
        let f = r(-3, -9).simplify();
        assert_eq!(f.to_string(), "(1 / 3)");
        assert!(f.is_reduced());
        assert!(!r(4, 2).is_reduced());
        assert_eq!(r(-6, 4).simplify().into_parts(), (BigInt::from(-3), BigInt::from(2)));
        assert_eq!(r(0, 5).simplify().into_parts(), (BigInt::from(0), BigInt::from(1)));
    }

    #[test]
    fn predicate_test() {
        assert!(r(1, 2).is_proper());
        assert!(r(-1, 2).is_proper());
        assert!(!r(3, 2).is_proper());
        assert!(!r(-2, 2).is_proper());
        assert!(r(4, 2).is_integer());
        assert!(!r(3, 2).is_integer());
        assert!(r(2, 2).is_one());
        assert!(r(0, 3).is_zero());
    }

    #[test]
    fn gcd_test() {
        assert_eq!(gcd(&BigInt::from(0), &BigInt::from(7)), BigInt::from(7));
        assert_eq!(gcd(&BigInt::from(-12), &BigInt::from(18)), BigInt::from(6));
        assert_eq!(gcd(&BigInt::from(17), &BigInt::from(5)), BigInt::from(1));
    }

    #[test]
    fn equality_test() {
        assert_eq!(r(1, 2), r(2, 4));
        assert_eq!(r(-1, 2), r(2, -4));
        assert_ne!(r(1, 2), r(1, 3));

        use std::collections::HashSet;
        let set: HashSet<Rational> = vec![r(1, 2), r(2, 4), r(3, 6)].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn compare_test() {
        assert_eq!(r(1, 3).compare(&r(2, 3)), Ordering::Less);
        assert_eq!(r(1, 2).compare(&r(1, 3)), Ordering::Greater);
        assert_eq!(r(7, 3).compare(&r(9, 4)), Ordering::Greater); // 2.33 > 2.25
        assert_eq!(r(-1, 2).compare(&r(1, 3)), Ordering::Less);
        assert_eq!(r(-1, 2).compare(&r(-1, 3)), Ordering::Less);
        assert_eq!(r(2, 4).compare(&r(1, 2)), Ordering::Equal);
        assert!(r(3, 7) > r(2, 5));
        assert!(r(1, 3) < r(1, 2));
        assert!(r(-5, 2) < r(-2, 1));
    }

    #[test]
    fn recip_test() {
        assert_eq!(r(2, 3).recip(), r(3, 2));
        assert_eq!(r(-2, 3).recip(), r(-3, 2));
        assert_eq!(r(2, 3).recip().denom(), &BigInt::from(2));
        assert!(matches!(r(0, 3).checked_recip(), Err(Error::DivideByZero { .. })));
        assert!(matches!(r(1, 3).checked_div(&Rational::zero()), Err(Error::DivideByZero { .. })));

        assert_eq!(r(-4, 6).try_invert().unwrap().into_parts(), (BigInt::from(-6), BigInt::from(4)));
        assert!(matches!(Rational::zero().try_invert(), Err(Error::DivideByZero { .. })));
    }

    #[test]
    fn conversion_test() {
        assert_eq!(r(7, 2).to_integer(), BigInt::from(3));
        assert_eq!(r(-7, 2).to_integer(), BigInt::from(-3));
        assert_eq!(i32::try_from(&r(9, 4)).unwrap(), 2);
        assert!(matches!(
            i32::try_from(&Rational::from(1i64 << 40)),
            Err(Error::Overflow { target: "i32", .. })
        ));
        assert!(u64::try_from(&r(-3, 1)).is_err());

        assert!(matches!(r(1, 4).to_f64(), Some(v) if (v - 0.25).abs() < 1e-15));
        assert!(matches!(r(-1, 3).to_f64(), Some(v) if (v + 1.0 / 3.0).abs() < 1e-15));

        let ratio: Ratio<BigInt> = r(2, -4).into();
        assert_eq!(ratio, Ratio::new(BigInt::from(-1), BigInt::from(2)));
        assert_eq!(Rational::from(ratio), r(-1, 2));
    }
}
