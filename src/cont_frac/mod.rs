//! Simple continued fractions `a0 + 1/(a1 + 1/(a2 + ...))` over big integers
//!
//! A [ContinuedFraction] stores the integer part `a0` and the denominator
//! sequence `a1, a2, ..`. When it `repeats()`, the sequence is one full period
//! of an infinite periodic expansion, which is what square roots of non-square
//! integers produce (see [sqrt_as_continued_fraction]).
//!
//! # References:
//! - <https://pi.math.cornell.edu/~gautam/ContinuedFractions.pdf>
//! - <https://crypto.stanford.edu/pbc/notes/contfrac/>
//! - <http://www.numbertheory.org/continued_fractions.html>

mod block;
mod sqrt;

pub use sqrt::{sqrt_as_continued_fraction, sqrt_as_continued_fraction_bounded};

use crate::error::Result;
use crate::rational::Rational;
use crate::traits::Approximation;
use block::Block;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;
use std::fmt;

/// A simple continued fraction `[initial; terms..]`, see the [module docs](self)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContinuedFraction {
    /// The integer part
    initial: BigInt,

    /// Denominator sequence following the integer part
    terms: Vec<BigInt>,

    /// Whether `terms` is a complete period of a repeating expansion
    repeats: bool,
}

impl ContinuedFraction {
    #[inline]
    pub fn new(initial: BigInt, terms: Vec<BigInt>, repeats: bool) -> Self {
        ContinuedFraction {
            initial,
            terms,
            repeats,
        }
    }

    #[inline]
    pub fn initial(&self) -> &BigInt {
        &self.initial
    }

    #[inline]
    pub fn terms(&self) -> &[BigInt] {
        &self.terms[..]
    }

    #[inline]
    pub fn repeats(&self) -> bool {
        self.repeats
    }

    /// Length of the repeating part, `None` if the expansion doesn't repeat
    #[inline]
    pub fn period(&self) -> Option<usize> {
        if self.repeats {
            Some(self.terms.len())
        } else {
            None
        }
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.terms.is_empty()
    }

    #[inline]
    pub fn into_parts(self) -> (BigInt, Vec<BigInt>, bool) {
        (self.initial, self.terms, self.repeats)
    }

    /// Returns an iterator of the coefficients, starting with the initial value.
    /// The iterator is infinite if the expansion repeats.
    pub fn coeffs(&self) -> Coefficients {
        Coefficients {
            initial: Some(&self.initial),
            terms: &self.terms,
            pos: 0,
            cyclic: self.repeats,
        }
    }

    /// Returns an iterator of the convergents `p_k / q_k`, the first one being
    /// the initial value. The iterator stops early if a zero term makes a
    /// denominator vanish.
    pub fn convergents(&self) -> Convergents {
        Convergents {
            coeffs: self.coeffs(),
            block: Block::identity(),
        }
    }

    /// The convergent after `steps` terms, see [Rational::from_continued_fraction]
    #[inline]
    pub fn convergent(&self, steps: usize) -> Result<Rational> {
        Rational::from_continued_fraction(self, steps)
    }

    /// Evaluate the continued fraction. A finite expansion gives the exact
    /// value, a repeating one gives the convergent after one full period.
    pub fn to_rational(&self) -> Result<Approximation<Rational>> {
        let value = self.convergent(self.terms.len())?;
        if self.repeats {
            Ok(Approximation::Approximated(value))
        } else {
            Ok(Approximation::Exact(value))
        }
    }
}

/// Iterator of coefficients in a [ContinuedFraction]
#[derive(Debug, Clone)]
pub struct Coefficients<'a> {
    initial: Option<&'a BigInt>, // None once the initial value is consumed
    terms: &'a [BigInt],
    pos: usize,
    cyclic: bool,
}

impl<'a> Iterator for Coefficients<'a> {
    type Item = &'a BigInt;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(i) = self.initial.take() {
            return Some(i);
        }

        if self.pos == self.terms.len() {
            if self.cyclic && !self.terms.is_empty() {
                self.pos = 0;
            } else {
                return None;
            }
        }
        let v = &self.terms[self.pos];
        self.pos += 1;
        Some(v)
    }
}

/// Iterator of convergents of a [ContinuedFraction]
#[derive(Debug, Clone)]
pub struct Convergents<'a> {
    coeffs: Coefficients<'a>,
    block: Block,
}

impl<'a> Iterator for Convergents<'a> {
    type Item = Rational;

    fn next(&mut self) -> Option<Self::Item> {
        let a = self.coeffs.next()?;
        let (p, q) = self.block.push(a);
        Rational::new(p, q).ok()
    }
}

impl From<&Rational> for ContinuedFraction {
    /// Expand a rational number with the Euclidean algorithm. The integer
    /// part is floored so that every following term is positive.
    fn from(r: &Rational) -> Self {
        let (initial, mut rem) = r.numer().div_mod_floor(r.denom());
        let mut terms = Vec::new();
        let mut d = r.denom().clone();
        while !rem.is_zero() {
            let (quo, next) = d.div_rem(&rem);
            terms.push(quo);
            d = rem;
            rem = next;
        }
        ContinuedFraction::new(initial, terms, false)
    }
}

impl From<Rational> for ContinuedFraction {
    #[inline]
    fn from(r: Rational) -> Self {
        ContinuedFraction::from(&r)
    }
}

impl fmt::Display for ContinuedFraction {
    /// Formats as `[a0]`, `[a0; a1, a2]` or `[a0; (a1, a2)]` when repeating
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}", self.initial)?;
        if self.terms.is_empty() {
            return write!(f, "]");
        }

        write!(f, "; ")?;
        if self.repeats {
            write!(f, "(")?;
        }
        let mut iter = self.terms.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
        }
        for v in iter {
            write!(f, ", {}", v)?;
        }
        if self.repeats {
            write!(f, ")")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn cf(initial: i64, terms: &[i64], repeats: bool) -> ContinuedFraction {
        ContinuedFraction::new(
            BigInt::from(initial),
            terms.iter().map(|&t| BigInt::from(t)).collect(),
            repeats,
        )
    }

    fn r(n: i64, d: i64) -> Rational {
        Rational::new(n, d).unwrap()
    }

    #[test]
    fn cont_frac_iter_test() {
        let one = cf(1, &[], false);
        assert_eq!(one.coeffs().cloned().collect::<Vec<_>>(), vec![BigInt::from(1)]);
        assert_eq!(one.convergents().collect::<Vec<_>>(), vec![r(1, 1)]);

        let sq2 = cf(1, &[2], true);
        assert_eq!(
            sq2.coeffs().take(5).cloned().collect::<Vec<_>>(),
            [1, 2, 2, 2, 2].iter().map(|&v| BigInt::from(v)).collect::<Vec<_>>()
        );
        assert_eq!(
            sq2.convergents().take(5).collect::<Vec<_>>(),
            vec![r(1, 1), r(3, 2), r(7, 5), r(17, 12), r(41, 29)]
        );

        // a finite expansion is not cycled by the iterators
        let pi = cf(3, &[7, 16], false);
        assert_eq!(pi.coeffs().count(), 3);
        assert_eq!(pi.convergents().last().unwrap(), r(355, 113));
    }

    #[test]
    fn convergent_test() {
        let sq3 = cf(1, &[1, 2], true);
        for steps in 0..12 {
            let forward = sq3.convergents().nth(steps).unwrap();
            assert_eq!(sq3.convergent(steps).unwrap(), forward, "steps = {}", steps);
        }

        // more steps than terms keeps cycling through the terms
        assert_eq!(cf(3, &[7, 16], false).convergent(2).unwrap(), r(355, 113));
        assert_eq!(cf(0, &[2], false).convergent(3).unwrap(), r(5, 12));
    }

    #[test]
    fn zero_term_test() {
        assert!(matches!(
            cf(1, &[2, 0, 3], false).convergent(3),
            Err(Error::DivideByZero { .. })
        ));
        assert!(matches!(cf(1, &[0], true).convergent(1), Err(Error::DivideByZero { .. })));
        // zero steps never reads the terms
        assert_eq!(cf(1, &[0], true).convergent(0).unwrap(), r(1, 1));
    }

    #[test]
    fn to_rational_test() {
        assert_eq!(
            cf(3, &[7, 16], false).to_rational().unwrap(),
            Approximation::Exact(r(355, 113))
        );
        assert_eq!(
            cf(1, &[1, 2], true).to_rational().unwrap(),
            Approximation::Approximated(r(5, 3))
        );
    }

    #[test]
    fn cont_frac_conversion_test() {
        assert_eq!(ContinuedFraction::from(r(3, 1)), cf(3, &[], false));
        assert_eq!(ContinuedFraction::from(r(22, 7)), cf(3, &[7], false));
        assert_eq!(ContinuedFraction::from(r(355, 113)), cf(3, &[7, 16], false));
        assert_eq!(ContinuedFraction::from(r(7, 22)), cf(0, &[3, 7], false));
        assert_eq!(ContinuedFraction::from(r(-7, 3)), cf(-3, &[1, 2], false));

        for &(n, d) in &[(415, 93), (-22, 7), (1, 9), (0, 5), (144, 89)] {
            let v = r(n, d);
            let expanded = v.to_continued_fraction();
            assert_eq!(expanded.to_rational().unwrap(), Approximation::Exact(v));
        }
    }

    #[test]
    fn fmt_test() {
        assert_eq!(format!("{}", cf(1, &[], false)), "[1]");
        assert_eq!(format!("{}", cf(1, &[2, 3], false)), "[1; 2, 3]");
        assert_eq!(format!("{}", cf(1, &[2], true)), "[1; (2)]");
        assert_eq!(format!("{}", cf(4, &[1, 3, 1, 8], true)), "[4; (1, 3, 1, 8)]");
    }

    #[test]
    fn period_test() {
        assert_eq!(cf(4, &[1, 3, 1, 8], true).period(), Some(4));
        assert_eq!(cf(3, &[7, 16], false).period(), None);
        assert!(cf(3, &[], false).is_integer());
    }
}
