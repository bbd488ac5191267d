//! Error types for coupon schedule calculations.

use cadence_core::{CoreError, Date};
use thiserror::Error;

use crate::function::{Argument, CouponFunction};

/// A specialized Result type for coupon schedule calculations.
pub type CouponResult<T> = Result<T, CouponError>;

/// Errors raised by the coupon functions.
///
/// Every variant names the function that raised it; the message starts
/// with the function's canonical name, e.g. `COUPPCD: ...`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CouponError {
    /// Settlement, maturity, or frequency was not supplied.
    #[error("{function}: missing required argument '{argument}'")]
    MissingArgument {
        /// Function that was called.
        function: CouponFunction,
        /// The absent argument.
        argument: Argument,
    },

    /// Settlement or maturity is not a well-formed calendar date.
    #[error("{function}: invalid {argument} date '{value}'")]
    InvalidDate {
        /// Function that was called.
        function: CouponFunction,
        /// Which date argument was rejected.
        argument: Argument,
        /// The rejected input.
        value: String,
    },

    /// Frequency outside {1, 2, 4}.
    #[error("{function}: invalid frequency {value} (expected 1, 2 or 4)")]
    InvalidFrequency {
        /// Function that was called.
        function: CouponFunction,
        /// The rejected value.
        value: i64,
    },

    /// Basis outside {0, 1, 2, 3, 4}.
    #[error("{function}: invalid basis {value} (expected 0, 1, 2, 3 or 4)")]
    InvalidBasis {
        /// Function that was called.
        function: CouponFunction,
        /// The rejected value.
        value: i64,
    },

    /// Settlement is not strictly before maturity.
    #[error("{function}: settlement {settlement} must be before maturity {maturity}")]
    InvalidDateRange {
        /// Function that was called.
        function: CouponFunction,
        /// Settlement date.
        settlement: Date,
        /// Maturity date.
        maturity: Date,
    },

    /// A coupon date fell outside the supported calendar range.
    #[error("{function}: {source}")]
    DateArithmetic {
        /// Function that was called.
        function: CouponFunction,
        /// Underlying date error.
        #[source]
        source: CoreError,
    },
}

impl CouponError {
    /// Returns the function that raised the error.
    #[must_use]
    pub fn function(&self) -> CouponFunction {
        match self {
            Self::MissingArgument { function, .. }
            | Self::InvalidDate { function, .. }
            | Self::InvalidFrequency { function, .. }
            | Self::InvalidBasis { function, .. }
            | Self::InvalidDateRange { function, .. }
            | Self::DateArithmetic { function, .. } => *function,
        }
    }

    pub(crate) fn date_arithmetic(function: CouponFunction) -> impl Fn(CoreError) -> Self + Copy {
        move |source| Self::DateArithmetic { function, source }
    }
}

/// Errors loading a [`CouponConfig`](crate::CouponConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read configuration file '{path}': {source}")]
    Io {
        /// Path that was read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid TOML for this schema.
    #[error("Deserialization error: {0}")]
    Deserialization(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_prefixed_with_function_name() {
        let err = CouponError::InvalidFrequency {
            function: CouponFunction::NextCouponDate,
            value: 3,
        };
        assert_eq!(
            err.to_string(),
            "COUPNCD: invalid frequency 3 (expected 1, 2 or 4)"
        );
        assert_eq!(err.function(), CouponFunction::NextCouponDate);
    }

    #[test]
    fn test_missing_argument_message() {
        let err = CouponError::MissingArgument {
            function: CouponFunction::DaysInPeriod,
            argument: Argument::Maturity,
        };
        assert_eq!(err.to_string(), "COUPDAYS: missing required argument 'maturity'");
    }

    #[test]
    fn test_date_range_message_names_both_dates() {
        let d = Date::from_ymd(2024, 6, 30).unwrap();
        let err = CouponError::InvalidDateRange {
            function: CouponFunction::PreviousCouponDate,
            settlement: d,
            maturity: d,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("COUPPCD:"));
        assert_eq!(msg.matches("2024-06-30").count(), 2);
    }
}
