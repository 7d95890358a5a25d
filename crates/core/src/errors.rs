//! Core error types for the allocation engine.
//!
//! Bad inputs never surface here: the calculators clamp or default them.
//! What remains are invariant violations (defects in the engine itself) and
//! failures while loading scenario configuration.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::parties::Party;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the allocation engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Split calculation failed: {0}")]
    Calculation(#[from] CalculatorError),

    #[error("Export failed: {0}")]
    Export(String),
}

/// Invariant violations raised by the calculators.
///
/// Any of these indicates an implementation defect, never a user error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("Distributed total {distributed} does not match pool {expected}")]
    ConservationViolated {
        expected: Decimal,
        distributed: Decimal,
    },

    #[error("Founders collected {collected} in carry but investors paid {paid}")]
    CarryRoutingMismatch { collected: Decimal, paid: Decimal },

    #[error("Founders collected {collected} in fees but investors paid {paid}")]
    FeeRoutingMismatch { collected: Decimal, paid: Decimal },

    #[error("Weights sum to {0} instead of 1")]
    WeightsNotNormalized(Decimal),

    #[error("Negative amount {amount} computed for {party}")]
    NegativeAmount { party: Party, amount: Decimal },
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidConfigValue(err.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Export(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_calculator_errors_convert_to_root_error() {
        let err: Error = CalculatorError::WeightsNotNormalized(dec!(0.9)).into();
        assert!(matches!(
            err,
            Error::Calculation(CalculatorError::WeightsNotNormalized(_))
        ));
        assert_eq!(
            err.to_string(),
            "Split calculation failed: Weights sum to 0.9 instead of 1"
        );
    }

    #[test]
    fn test_json_errors_are_config_errors() {
        let err: Error = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, Error::InvalidConfigValue(_)));
    }
}
