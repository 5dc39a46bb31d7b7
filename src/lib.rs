//! Exact big rational arithmetic, and rational approximations of square roots
//! and other irrational constants through continued fraction convergents.
//!
//! ```
//! use num_convergents::{sqrt_as_continued_fraction, Rational};
//!
//! let cf = sqrt_as_continued_fraction(2).unwrap();
//! assert_eq!(cf.to_string(), "[1; (2)]");
//! assert_eq!(cf.convergent(5).unwrap(), Rational::new(99, 70).unwrap());
//! ```

mod cont_frac;
mod error;
mod math;
mod rational;
pub mod symbols;
pub mod traits;

pub use cont_frac::{
    sqrt_as_continued_fraction, sqrt_as_continued_fraction_bounded, Coefficients,
    ContinuedFraction, Convergents,
};
pub use error::{Error, Result};
pub use math::{
    pow, sqrt, sqrt_rational, sqrt_rational_with_steps, sqrt_with_steps, DEFAULT_SQRT_STEPS,
};
pub use rational::{Rational, DEFAULT_DECIMAL_DIGITS};
pub use traits::{Approximation, FromSqrt};
