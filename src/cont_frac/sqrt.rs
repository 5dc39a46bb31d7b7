//! Continued fraction expansion of square roots
//!
//! For a non-square `n`, `sqrt(n) = [a0; (a1, a2, ..)]` is periodic. The
//! coefficients come from the recurrence on the complete quotients
//! `(sqrt(n) + m) / d`:
//!
//! ```text
//! m' = d * a - m
//! d' = (n - m'^2) / d
//! a' = (a0 + m') / d'
//! ```
//!
//! All the quantities are exact integers, and the state `(a, m, d)` is bounded,
//! so it must repeat eventually. The period is closed as soon as a state shows
//! up the second time.
//!
//! # References:
//! - <http://www.numbertheory.org/courses/MP313/lectures/lecture17/page5.html>
//! - <https://en.wikipedia.org/wiki/Methods_of_computing_square_roots#Continued_fraction_expansion>

use super::ContinuedFraction;
use crate::error::{Error, Result};
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use std::collections::HashSet;

/// State of the recurrence after producing one coefficient
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Signature {
    a: BigInt,
    m: BigInt,
    d: BigInt,
}

/// Compute the continued fraction of `sqrt(n)`.
///
/// A perfect square gives `(root, [], false)`. Otherwise the returned terms
/// contain exactly one period and `repeats()` is true.
///
/// Returns [Error::InvalidArgument] if `n` is negative. The period of `sqrt(n)`
/// can grow roughly like `sqrt(n)`, use [sqrt_as_continued_fraction_bounded] for
/// untrusted input.
#[inline]
pub fn sqrt_as_continued_fraction<N: Into<BigInt>>(n: N) -> Result<ContinuedFraction> {
    expand(&n.into(), None)
}

/// Same as [sqrt_as_continued_fraction], but stop after at most `max_steps`
/// terms. If the period didn't close within the limit, the result has
/// `repeats() == false`.
#[inline]
pub fn sqrt_as_continued_fraction_bounded<N: Into<BigInt>>(
    n: N,
    max_steps: usize,
) -> Result<ContinuedFraction> {
    expand(&n.into(), Some(max_steps))
}

fn expand(n: &BigInt, limit: Option<usize>) -> Result<ContinuedFraction> {
    if n.is_negative() {
        return Err(Error::InvalidArgument(format!(
            "cannot take the square root of negative number {}",
            n
        )));
    }

    let a0 = n.sqrt();
    if &a0 * &a0 == *n {
        log::debug!("{} is a perfect square of {}", n, a0);
        return Ok(ContinuedFraction::new(a0, Vec::new(), false));
    }

    let mut terms = Vec::new();
    let mut signatures = HashSet::new();
    let (mut a, mut m, mut d) = (a0.clone(), BigInt::zero(), BigInt::one());
    loop {
        if matches!(limit, Some(max) if terms.len() >= max) {
            log::debug!(
                "expansion of sqrt({}) stopped after {} terms before the period closed",
                n,
                terms.len()
            );
            return Ok(ContinuedFraction::new(a0, terms, false));
        }

        let m1 = &d * &a - &m;
        let d1 = (n - &m1 * &m1) / &d;
        let a1 = (&a0 + &m1) / &d1;
        log::trace!("sqrt({}) step {}: a = {}, m = {}, d = {}", n, terms.len() + 1, a1, m1, d1);

        let signature = Signature {
            a: a1.clone(),
            m: m1.clone(),
            d: d1.clone(),
        };
        if !signatures.insert(signature) {
            log::debug!("period of sqrt({}) closed with length {}", n, terms.len());
            return Ok(ContinuedFraction::new(a0, terms, true));
        }

        terms.push(a1.clone());
        a = a1;
        m = m1;
        d = d1;
    }
}
