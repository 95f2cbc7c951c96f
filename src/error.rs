//! Error type shared by every component of the toolkit
//!
//! Only true precondition violations are errors. Range exhaustion of a
//! log-domain value is a checkable numeric condition and is reported through
//! `Lg::would_overflow` / `Lg::would_underflow` instead.

use thiserror::Error;

/// Result alias used throughout the crate
pub type NumericResult<T> = Result<T, NumericError>;

/// Errors raised by mathematically restricted operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericError {
    /// Input lies outside the domain of the operation
    #[error("domain error in {operation}: {reason}")]
    Domain {
        /// Operation that rejected its input
        operation: &'static str,
        /// Why the input was rejected
        reason: String,
    },

    /// A moment was requested before enough observations were inserted
    #[error("{operation} requires at least {required} observations, got {actual}")]
    InsufficientSamples {
        /// Accessor that was called
        operation: &'static str,
        /// Minimum observation count
        required: usize,
        /// Observations inserted so far
        actual: usize,
    },

    /// The operation has no supported implementation in this representation
    #[error("{operation} is not supported in the log domain")]
    NotImplemented {
        /// Unsupported operation
        operation: &'static str,
    },
}

impl NumericError {
    /// Convenience constructor for [`NumericError::Domain`]
    pub fn domain(operation: &'static str, reason: impl Into<String>) -> Self {
        NumericError::Domain {
            operation,
            reason: reason.into(),
        }
    }

    /// Returns true for the domain and insufficient-sample cases
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            NumericError::Domain { .. } | NumericError::InsufficientSamples { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = NumericError::domain("Lg::new", "value must be positive, got -1");
        assert_eq!(
            err.to_string(),
            "domain error in Lg::new: value must be positive, got -1"
        );

        let err = NumericError::InsufficientSamples {
            operation: "sample_variance",
            required: 2,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "sample_variance requires at least 2 observations, got 1"
        );
        assert!(err.is_domain_error());

        let err = NumericError::NotImplemented { operation: "floor" };
        assert!(!err.is_domain_error());
    }
}
