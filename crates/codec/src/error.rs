//! Codec error types.

use moneta_core::MoneyError;
use thiserror::Error;

/// Result type alias using `CodecError`.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while encoding or decoding document values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The serializer hook received a value it does not recognize.
    #[error("Object of type {0} is not JSON serializable")]
    UnsupportedType(String),

    /// A Money-tagged map is missing a required string field.
    #[error("Money object missing field: {0}")]
    MissingField(&'static str),

    /// Reconstructing the Money value failed.
    #[error(transparent)]
    Money(#[from] MoneyError),
}
