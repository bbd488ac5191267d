//! Error types for the core date and convention types.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The error type for core date and convention operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Malformed date or date arithmetic outside the supported calendar range.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Coupon frequency outside {1, 2, 4}.
    #[error("Invalid frequency: {value} (expected 1, 2 or 4)")]
    InvalidFrequency {
        /// The rejected value.
        value: String,
    },

    /// Day count basis outside {0, 1, 2, 3, 4}.
    #[error("Invalid basis: {value} (expected 0, 1, 2, 3 or 4)")]
    InvalidBasis {
        /// The rejected value.
        value: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid frequency error.
    #[must_use]
    pub fn invalid_frequency(value: impl ToString) -> Self {
        Self::InvalidFrequency {
            value: value.to_string(),
        }
    }

    /// Creates an invalid basis error.
    #[must_use]
    pub fn invalid_basis(value: impl ToString) -> Self {
        Self::InvalidBasis {
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_date("2024-02-30 is not a valid date");
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_frequency_error() {
        let err = CoreError::invalid_frequency(3);
        assert_eq!(err.to_string(), "Invalid frequency: 3 (expected 1, 2 or 4)");
    }

    #[test]
    fn test_basis_error() {
        let err = CoreError::invalid_basis("ACT/366");
        assert!(err.to_string().contains("ACT/366"));
    }
}
