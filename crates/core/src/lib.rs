//! Currency-aware monetary values for Moneta.
//!
//! This crate provides the exact-decimal money types used across all other
//! crates:
//! - `Money` - an immutable amount-plus-currency pair
//! - `CurrencyCode` - a validated ISO 4217-style currency code
//! - Library-wide error types
//!
//! CRITICAL: Never use floating-point for money calculations. All amounts
//! are `rust_decimal::Decimal`.

pub mod error;
pub mod types;

pub use error::{MoneyError, MoneyResult};
pub use types::{CurrencyCode, Money};
