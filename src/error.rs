//! Errors reported by rational arithmetic and continued fraction expansion

use thiserror::Error;

/// Result type used across the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure is local and deterministic, retrying with the same inputs gives the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A denominator would become zero
    #[error("division by zero: {context}")]
    DivideByZero { context: String },

    /// Negative input to a square root
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A value does not fit into the target type
    #[error("overflow: {operand} does not fit into {target}")]
    Overflow {
        operand: String,
        target: &'static str,
    },

    /// Unsupported format specifier or unparsable input
    #[error("format error: {0}")]
    Format(String),
}

impl Error {
    #[inline]
    pub(crate) fn divide_by_zero<S: Into<String>>(context: S) -> Self {
        Error::DivideByZero {
            context: context.into(),
        }
    }

    #[inline]
    pub(crate) fn overflow<S: Into<String>>(operand: S, target: &'static str) -> Self {
        Error::Overflow {
            operand: operand.into(),
            target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_test() {
        assert_eq!(
            Error::divide_by_zero("denominator of 1/0").to_string(),
            "division by zero: denominator of 1/0"
        );
        assert_eq!(
            Error::overflow("numerator 4294967296", "i32").to_string(),
            "overflow: numerator 4294967296 does not fit into i32"
        );
        assert_eq!(
            Error::InvalidArgument("-1".into()).to_string(),
            "invalid argument: -1"
        );
    }
}
