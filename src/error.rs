// src/error.rs
use crate::options::option_type::OptionType;
use chrono::NaiveDate;
use thiserror::Error;

/// Error types for the fast-digital library
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Valuation requested after the contract has expired
    #[error("Value date {value_date} after expiry date {expiry_date}.")]
    TemporalError {
        value_date: NaiveDate,
        expiry_date: NaiveDate,
    },

    /// Option type tag that the digital pricers do not handle
    #[error("Unknown option type: {option_type}.")]
    UnsupportedOptionType { option_type: OptionType },

    /// Invalid parameter values
    #[error("Invalid parameter '{parameter}' = {value}: {constraint}")]
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid configuration
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfiguration { field: String, reason: String },

    /// Numerical instability or non-finite result
    #[error("Numerical instability in {method}: {reason}")]
    NumericalInstability { method: String, reason: String },
}

/// Result type alias for fast-digital operations
pub type PricingResult<T> = Result<T, PricingError>;

/// Validation utilities
pub mod validation {
    use super::{PricingError, PricingResult};
    use chrono::NaiveDate;

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> PricingResult<()> {
        // NaN fails the comparison, so it is rejected here too
        if value > 0.0 {
            Ok(())
        } else {
            Err(PricingError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> PricingResult<()> {
        if !value.is_finite() {
            Err(PricingError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate paths count
    pub fn validate_paths(paths: usize) -> PricingResult<()> {
        if paths == 0 {
            Err(PricingError::InvalidConfiguration {
                field: "num_paths".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else if paths > 1_000_000_000 {
            Err(PricingError::InvalidConfiguration {
                field: "num_paths".to_string(),
                reason: "exceeds maximum allowed (1 billion)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that the valuation date does not fall after expiry
    pub fn validate_not_expired(
        value_date: NaiveDate,
        expiry_date: NaiveDate,
    ) -> PricingResult<()> {
        if value_date > expiry_date {
            Err(PricingError::TemporalError {
                value_date,
                expiry_date,
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("strike", 100.0).is_ok());
        assert!(validate_positive("strike", 0.0).is_err());
        assert!(validate_positive("strike", -1.0).is_err());
        assert!(validate_positive("strike", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("value", 1.0).is_ok());
        assert!(validate_finite("value", f64::NAN).is_err());
        assert!(validate_finite("value", f64::INFINITY).is_err());
        assert!(validate_finite("value", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_paths() {
        assert!(validate_paths(1).is_ok());
        assert!(validate_paths(10_000).is_ok());
        assert!(matches!(
            validate_paths(0),
            Err(PricingError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_validate_not_expired() {
        let expiry = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let before = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        let after = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();

        assert!(validate_not_expired(before, expiry).is_ok());
        assert!(validate_not_expired(expiry, expiry).is_ok());
        assert_eq!(
            validate_not_expired(after, expiry),
            Err(PricingError::TemporalError {
                value_date: after,
                expiry_date: expiry,
            })
        );
    }

    #[test]
    fn test_error_display() {
        let error = PricingError::InvalidParameters {
            parameter: "strike_price".to_string(),
            value: -5.0,
            constraint: "must be positive".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("strike_price"));
        assert!(display.contains("-5"));
        assert!(display.contains("positive"));
    }

    #[test]
    fn test_temporal_error_display() {
        let error = PricingError::TemporalError {
            value_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            expiry_date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
        };

        let display = format!("{}", error);
        assert!(display.contains("2025-07-01"));
        assert!(display.contains("2025-06-30"));
    }

    #[test]
    fn test_unsupported_type_display() {
        let error = PricingError::UnsupportedOptionType {
            option_type: OptionType::AmericanPut,
        };
        assert!(format!("{}", error).contains("AMERICAN_PUT"));
    }
}
