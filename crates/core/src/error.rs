//! Money error types.

use thiserror::Error;

use crate::types::CurrencyCode;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors that can occur when constructing or combining monetary values.
///
/// All errors are raised synchronously at the point of violation; nothing is
/// swallowed and nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Currency code is not exactly three ASCII letters.
    #[error("Invalid currency code: {0}")]
    InvalidCurrency(String),

    /// Money literal could not be parsed.
    #[error("Cannot parse money literal: {0}")]
    Parse(String),

    /// Arithmetic or comparison across mismatched currencies.
    #[error("Currencies don't match: {left}, {right}")]
    DifferentCurrency {
        /// Currency of the left operand.
        left: CurrencyCode,
        /// Currency of the right operand.
        right: CurrencyCode,
    },
}
