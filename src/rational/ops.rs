//! Arithmetic operators. Results are exact and never reduced implicitly.

use super::Rational;
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Not, Sub, SubAssign};
use num_bigint::BigInt;
use num_traits::{Inv, One, Zero};

// a/b + c/d = (a*d + c*b) / (b*d)
#[inline]
fn add(lhs: &Rational, rhs: &Rational) -> Rational {
    Rational::new_raw(
        &lhs.numer * &rhs.denom + &rhs.numer * &lhs.denom,
        &lhs.denom * &rhs.denom,
    )
}

// a/b - c/d = (a*d - b*c) / (b*d)
#[inline]
fn sub(lhs: &Rational, rhs: &Rational) -> Rational {
    Rational::new_raw(
        &lhs.numer * &rhs.denom - &lhs.denom * &rhs.numer,
        &lhs.denom * &rhs.denom,
    )
}

#[inline]
fn mul(lhs: &Rational, rhs: &Rational) -> Rational {
    Rational::new_raw(&lhs.numer * &rhs.numer, &lhs.denom * &rhs.denom)
}

#[inline]
fn div(lhs: &Rational, rhs: &Rational) -> Rational {
    match lhs.checked_div(rhs) {
        Ok(v) => v,
        Err(e) => panic!("{}", e),
    }
}

// a/b + c = (a + b*c) / b
#[inline]
fn add_int(lhs: &Rational, rhs: &BigInt) -> Rational {
    Rational::new_raw(&lhs.numer + &lhs.denom * rhs, lhs.denom.clone())
}

#[inline]
fn sub_int(lhs: &Rational, rhs: &BigInt) -> Rational {
    Rational::new_raw(&lhs.numer - &lhs.denom * rhs, lhs.denom.clone())
}

#[inline]
fn mul_int(lhs: &Rational, rhs: &BigInt) -> Rational {
    Rational::new_raw(&lhs.numer * rhs, lhs.denom.clone())
}

#[inline]
fn div_int(lhs: &Rational, rhs: &BigInt) -> Rational {
    match Rational::new(lhs.numer.clone(), &lhs.denom * rhs) {
        Ok(v) => v,
        Err(e) => panic!("{}", e),
    }
}

macro_rules! arith_impl {
    (impl $imp:ident, $method:ident, $func:ident, $func_int:ident) => {
        impl<'a, 'b> $imp<&'b Rational> for &'a Rational {
            type Output = Rational;
            #[inline]
            fn $method(self, rhs: &'b Rational) -> Rational {
                $func(self, rhs)
            }
        }
        impl<'a> $imp<&'a Rational> for Rational {
            type Output = Rational;
            #[inline]
            fn $method(self, rhs: &'a Rational) -> Rational {
                $func(&self, rhs)
            }
        }
        impl<'a> $imp<Rational> for &'a Rational {
            type Output = Rational;
            #[inline]
            fn $method(self, rhs: Rational) -> Rational {
                $func(self, &rhs)
            }
        }
        impl $imp<Rational> for Rational {
            type Output = Rational;
            #[inline]
            fn $method(self, rhs: Rational) -> Rational {
                $func(&self, &rhs)
            }
        }

        impl<'a, 'b> $imp<&'b BigInt> for &'a Rational {
            type Output = Rational;
            #[inline]
            fn $method(self, rhs: &'b BigInt) -> Rational {
                $func_int(self, rhs)
            }
        }
        impl<'a> $imp<&'a BigInt> for Rational {
            type Output = Rational;
            #[inline]
            fn $method(self, rhs: &'a BigInt) -> Rational {
                $func_int(&self, rhs)
            }
        }
        impl $imp<BigInt> for Rational {
            type Output = Rational;
            #[inline]
            fn $method(self, rhs: BigInt) -> Rational {
                $func_int(&self, &rhs)
            }
        }
    };
}

arith_impl!(impl Add, add, add, add_int);
arith_impl!(impl Sub, sub, sub, sub_int);
arith_impl!(impl Mul, mul, mul, mul_int);
arith_impl!(impl Div, div, div, div_int);

// Abstracts `Rational op primitive` by widening the primitive to BigInt
macro_rules! arith_primitive_impl {
    ($($T:ty),*) => {$(
        impl Add<$T> for Rational {
            type Output = Rational;
            #[inline]
            fn add(self, rhs: $T) -> Rational { add_int(&self, &BigInt::from(rhs)) }
        }
        impl Sub<$T> for Rational {
            type Output = Rational;
            #[inline]
            fn sub(self, rhs: $T) -> Rational { sub_int(&self, &BigInt::from(rhs)) }
        }
        impl Mul<$T> for Rational {
            type Output = Rational;
            #[inline]
            fn mul(self, rhs: $T) -> Rational { mul_int(&self, &BigInt::from(rhs)) }
        }
        impl Div<$T> for Rational {
            type Output = Rational;
            #[inline]
            fn div(self, rhs: $T) -> Rational { div_int(&self, &BigInt::from(rhs)) }
        }
        impl<'a> Add<$T> for &'a Rational {
            type Output = Rational;
            #[inline]
            fn add(self, rhs: $T) -> Rational { add_int(self, &BigInt::from(rhs)) }
        }
        impl<'a> Sub<$T> for &'a Rational {
            type Output = Rational;
            #[inline]
            fn sub(self, rhs: $T) -> Rational { sub_int(self, &BigInt::from(rhs)) }
        }
        impl<'a> Mul<$T> for &'a Rational {
            type Output = Rational;
            #[inline]
            fn mul(self, rhs: $T) -> Rational { mul_int(self, &BigInt::from(rhs)) }
        }
        impl<'a> Div<$T> for &'a Rational {
            type Output = Rational;
            #[inline]
            fn div(self, rhs: $T) -> Rational { div_int(self, &BigInt::from(rhs)) }
        }
    )*};
}
arith_primitive_impl!(i32, i64, u32, u64);

macro_rules! arith_assign_impl {
    (impl $imp:ident, $method:ident, $func:ident) => {
        impl $imp<Rational> for Rational {
            #[inline]
            fn $method(&mut self, rhs: Rational) {
                *self = $func(self, &rhs);
            }
        }
        impl<'a> $imp<&'a Rational> for Rational {
            #[inline]
            fn $method(&mut self, rhs: &'a Rational) {
                *self = $func(self, rhs);
            }
        }
    };
}

arith_assign_impl!(impl AddAssign, add_assign, add);
arith_assign_impl!(impl SubAssign, sub_assign, sub);
arith_assign_impl!(impl MulAssign, mul_assign, mul);
arith_assign_impl!(impl DivAssign, div_assign, div);

impl Neg for Rational {
    type Output = Rational;
    #[inline]
    fn neg(self) -> Rational {
        Rational::new_raw(-self.numer, self.denom)
    }
}

impl<'a> Neg for &'a Rational {
    type Output = Rational;
    #[inline]
    fn neg(self) -> Rational {
        Rational::new_raw(-&self.numer, self.denom.clone())
    }
}

impl Inv for Rational {
    type Output = Rational;
    #[inline]
    fn inv(self) -> Rational {
        self.recip()
    }
}

impl<'a> Inv for &'a Rational {
    type Output = Rational;
    #[inline]
    fn inv(self) -> Rational {
        self.recip()
    }
}

// `!x` is the reciprocal
impl Not for Rational {
    type Output = Rational;
    #[inline]
    fn not(self) -> Rational {
        self.recip()
    }
}

impl<'a> Not for &'a Rational {
    type Output = Rational;
    #[inline]
    fn not(self) -> Rational {
        self.recip()
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |acc, v| add(&acc, &v))
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |acc, v| add(&acc, v))
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::one(), |acc, v| mul(&acc, &v))
    }
}

impl<'a> Product<&'a Rational> for Rational {
    fn product<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.fold(Rational::one(), |acc, v| mul(&acc, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64, d: i64) -> Rational {
        Rational::new(n, d).unwrap()
    }

    #[test]
    fn add_sub_test() {
        assert_eq!(r(1, 2) + r(1, 2), Rational::identity());
        assert_eq!(r(1, 2) + r(1, 2) + r(1, 3), r(1, 3) + Rational::identity());
        assert_eq!(r(3, 2) - r(1, 2), Rational::identity());
        assert_eq!((r(3, 2) - r(1, 2)) + r(1, 2), r(3, 2));
        assert_eq!(&r(1, 4) - &r(1, 2), r(-1, 4));

        // not reduced implicitly
        let sum = r(1, 2) + r(1, 2);
        assert_eq!(sum.clone().into_parts(), (BigInt::from(4), BigInt::from(4)));
        assert!(!sum.is_reduced());
    }

    #[test]
    fn mul_div_test() {
        let (x, y, z) = (r(1, 2), r(1, 3), r(1, 5));
        assert_eq!(&x * &y, r(1, 6));
        assert_eq!(&x * &y, &y * &x);
        assert_eq!((&x * &y) * &z, &x * (&y * &z));
        assert_eq!(Rational::from(1) / r(2, 1), r(1, 2));
        assert_eq!(r(1, 2) / r(-1, 4), r(-2, 1));
        assert_eq!((r(1, 2) / r(-1, 4)).denom(), &BigInt::from(2));
    }

    #[test]
    #[should_panic]
    fn div_by_zero_test() {
        let _ = r(1, 2) / Rational::zero();
    }

    #[test]
    fn integer_operand_test() {
        assert_eq!(r(1, 2) + 1, r(3, 2));
        assert_eq!(r(1, 2) - 1, r(-1, 2));
        assert_eq!(r(1, 2) * 4, r(2, 1));
        assert_eq!(r(1, 2) / -2, r(-1, 4));
        assert_eq!(&r(2, 3) + &BigInt::from(1), r(5, 3));
        assert_eq!((r(2, 3) * 3u64).denom(), &BigInt::from(3));
    }

    #[test]
    fn assign_test() {
        let mut v = r(1, 3);
        v += r(1, 3);
        assert_eq!(v, r(2, 3));
        v -= &r(1, 3);
        assert_eq!(v, r(1, 3));
        v *= r(3, 1);
        assert_eq!(v, Rational::one());
        v /= r(4, 1);
        assert_eq!(v, r(1, 4));
    }

    #[test]
    fn unary_test() {
        assert_eq!(-r(1, 5), r(-1, 5));
        assert_eq!(-&r(-1, 5), r(1, 5));
        assert_eq!(r(1, 5).inv(), r(5, 1));
        assert_eq!(r(1, 5).inv().inv(), r(1, 5));

        assert_eq!(!r(2, -7), r(-7, 2));
        assert_eq!((!&r(2, -7)).into_parts(), (BigInt::from(-7), BigInt::from(2)));
        assert_eq!(!!r(3, 8), r(3, 8));
    }

    #[test]
    #[should_panic]
    fn not_zero_test() {
        let _ = !Rational::zero();
    }

    #[test]
    fn iter_test() {
        let halves = vec![r(1, 2), r(1, 4), r(1, 8)];
        assert_eq!(halves.iter().sum::<Rational>(), r(7, 8));
        assert_eq!(halves.iter().product::<Rational>(), r(1, 64));
        assert_eq!(Vec::<Rational>::new().into_iter().product::<Rational>(), Rational::one());
    }
}
