/// Result of an operation that is either exact or an approximation
#[derive(PartialEq, Debug, Clone)]
pub enum Approximation<T> {
    Approximated(T),
    Exact(T),
}

impl<T> Approximation<T> {
    /// Get the computed value regardless of whether it's exact
    #[inline]
    pub fn value(self) -> T {
        match self {
            Approximation::Approximated(v) => v,
            Approximation::Exact(v) => v,
        }
    }

    #[inline]
    pub fn value_ref(&self) -> &T {
        match self {
            Approximation::Approximated(v) => v,
            Approximation::Exact(v) => v,
        }
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        matches!(self, Approximation::Exact(_))
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Approximation<U> {
        match self {
            Approximation::Approximated(v) => Approximation::Approximated(f(v)),
            Approximation::Exact(v) => Approximation::Exact(f(v)),
        }
    }
}

/// In case there are multiple solution for square root,
/// only the canonical (non-negative) result will be returned
pub trait FromSqrt<T>: Sized {
    type Error;

    fn from_sqrt(t: T) -> Result<Approximation<Self>, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approximation_test() {
        let exact = Approximation::Exact(2);
        let approx = Approximation::Approximated(3);
        assert!(exact.is_exact());
        assert!(!approx.is_exact());
        assert_eq!(approx.value_ref(), &3);
        assert_eq!(exact.map(|v| v * 10), Approximation::Exact(20));
        assert_eq!(approx.value(), 3);
    }
}
