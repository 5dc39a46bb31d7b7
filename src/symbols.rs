//! Predefined irrational constants approximated by continued fraction convergents

use crate::cont_frac::ContinuedFraction;
use crate::rational::Rational;
use lazy_static::lazy_static;
use num_bigint::BigInt;
use num_traits::One;

/// Leading coefficients of π (OEIS A001203) after the integer part 3
const PI_TERMS: [u32; 27] = [
    7, 15, 1, 292, 1, 1, 1, 2, 1, 3, 1, 14, 2, 1, 1, 2, 2, 2, 2, 1, 84, 2, 1, 1, 15, 3, 13,
];

/// Number of terms used for [struct@PI], all of [pi_continued_fraction]
pub const PI_DEPTH: usize = PI_TERMS.len();

/// Number of terms used for [struct@E]
pub const E_DEPTH: usize = 30;

/// Number of terms used for [struct@GOLDEN_RATIO]
pub const GOLDEN_RATIO_DEPTH: usize = 100;

/// The known leading part of the continued fraction of π
pub fn pi_continued_fraction() -> ContinuedFraction {
    let terms = PI_TERMS.iter().map(|&t| BigInt::from(t)).collect();
    ContinuedFraction::new(BigInt::from(3), terms, false)
}

/// The first [E_DEPTH] terms of the continued fraction of e
pub fn e_continued_fraction() -> ContinuedFraction {
    let mut coeffs = e_coefficients();
    let initial = coeffs.next().unwrap_or_else(|| BigInt::from(2));
    ContinuedFraction::new(initial, coeffs.take(E_DEPTH).collect(), false)
}

/// The golden ratio `[1; (1)]`
pub fn golden_ratio_continued_fraction() -> ContinuedFraction {
    ContinuedFraction::new(BigInt::one(), vec![BigInt::one()], true)
}

/// Coefficients of e, `[2; 1, 2, 1, 1, 4, 1, 1, 6, ..]`
pub fn e_coefficients() -> ECoefficients {
    ECoefficients {
        i: BigInt::from(2),
        m: None,
    }
}

/// Infinite iterator of the coefficients of e, see [e_coefficients]
#[derive(Debug, Clone)]
pub struct ECoefficients {
    i: BigInt,
    m: Option<u8>, // position in the (1, 2k, 1) group, None before the initial 2
}

impl Iterator for ECoefficients {
    type Item = BigInt;

    fn next(&mut self) -> Option<BigInt> {
        let m = match self.m {
            None => {
                self.m = Some(0);
                return Some(BigInt::from(2));
            }
            Some(m) => m,
        };

        let result = if m == 1 { self.i.clone() } else { BigInt::one() };
        if m == 2 {
            self.m = Some(0);
            self.i += 2;
        } else {
            self.m = Some(m + 1);
        }
        Some(result)
    }
}

fn evaluate(cf: &ContinuedFraction, depth: usize) -> Rational {
    cf.convergent(depth)
        .expect("constant expansions contain no zero term")
}

lazy_static! {
    /// π approximated with [PI_DEPTH] terms
    pub static ref PI: Rational = evaluate(&pi_continued_fraction(), PI_DEPTH);

    /// e approximated with [E_DEPTH] terms
    pub static ref E: Rational = evaluate(&e_continued_fraction(), E_DEPTH);

    /// φ approximated with [GOLDEN_RATIO_DEPTH] terms
    pub static ref GOLDEN_RATIO: Rational =
        evaluate(&golden_ratio_continued_fraction(), GOLDEN_RATIO_DEPTH);
}
