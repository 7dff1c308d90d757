//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for exact decimal arithmetic.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Mul, Neg};
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{MoneyError, MoneyResult};
use crate::types::currency::CurrencyCode;

/// Represents a monetary amount with currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
/// Values are immutable: every operation returns a new `Money`.
///
/// Two equality semantics coexist, deliberately:
/// - The derived `PartialEq`/`Eq`/`Hash` compare `(amount, currency)` without
///   failing, so `Money` works as a key in hash-based containers, where
///   unlike-currency values must compare as "not equal" rather than error.
/// - Direct comparisons that must reject a currency mismatch go through
///   [`Money::try_eq`] and [`Money::try_cmp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    /// The exact decimal amount.
    pub amount: Decimal,
    /// ISO 4217-style currency code (e.g., "USD", "IDR").
    pub currency: CurrencyCode,
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: CurrencyCode) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative()
    }

    fn require_same_currency(&self, other: &Self) -> MoneyResult<()> {
        if self.currency != other.currency {
            return Err(MoneyError::DifferentCurrency {
                left: self.currency,
                right: other.currency,
            });
        }
        Ok(())
    }

    /// Adds two amounts of the same currency.
    ///
    /// The sum is exact; no rounding is applied.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::DifferentCurrency`] if the currencies differ.
    pub fn try_add(self, other: Self) -> MoneyResult<Self> {
        self.require_same_currency(&other)?;
        Ok(Self::new(self.amount + other.amount, self.currency))
    }

    /// Subtracts an amount of the same currency.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::DifferentCurrency`] if the currencies differ.
    pub fn try_sub(self, other: Self) -> MoneyResult<Self> {
        self.require_same_currency(&other)?;
        Ok(Self::new(self.amount - other.amount, self.currency))
    }

    /// Compares two amounts of the same currency.
    ///
    /// This is the seam for all four ordering operators: match on the
    /// returned [`Ordering`] for `<`, `<=`, `>`, and `>=`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::DifferentCurrency`] if the currencies differ.
    pub fn try_cmp(&self, other: &Self) -> MoneyResult<Ordering> {
        self.require_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// Equality that rejects a currency mismatch instead of returning false.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::DifferentCurrency`] if the currencies differ.
    pub fn try_eq(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.try_cmp(other)? == Ordering::Equal)
    }

    /// Converts to another currency using a caller-supplied exchange rate.
    ///
    /// Purely the linear transform `amount * rate` with the currency
    /// replaced; no rate lookup and no rounding. Compose with
    /// [`Money::round_to`] to land on the target currency's decimal places.
    #[must_use]
    pub fn convert(self, target: CurrencyCode, rate: Decimal) -> Self {
        Self::new(self.amount * rate, target)
    }

    /// Rounds the amount to the given number of fractional digits.
    ///
    /// Uses banker's rounding (`MidpointNearestEven`) to minimize cumulative
    /// errors: 10.567 rounds to 10.57 at two digits and to 11 at zero.
    #[must_use]
    pub fn round_to(self, decimal_places: u32) -> Self {
        Self::new(
            self.amount
                .round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven),
            self.currency,
        )
    }
}

impl fmt::Display for Money {
    /// Formats as `"<CODE> <amount>"` with exactly two fractional digits.
    ///
    /// Display-only transform; the stored amount keeps full precision.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
        write!(f, "{} {display:.2}", self.currency)
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    /// Parses `"<CODE> <amount>"` literals such as `"USD 10,000.00"`.
    ///
    /// Any run of whitespace separates the two tokens; thousands-separator
    /// commas in the amount are stripped before decimal parsing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let (Some(code), Some(amount), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            return Err(MoneyError::Parse(s.to_string()));
        };
        let currency = CurrencyCode::new(code)?;
        let amount = amount
            .replace(',', "")
            .parse::<Decimal>()
            .map_err(|_| MoneyError::Parse(s.to_string()))?;
        Ok(Self::new(amount, currency))
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.amount, self.currency)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    /// Scales the amount by a decimal factor, keeping the currency.
    fn mul(self, factor: Decimal) -> Self {
        Self::new(self.amount * factor, self.currency)
    }
}

impl Mul<Money> for Decimal {
    type Output = Money;

    fn mul(self, money: Money) -> Money {
        money * self
    }
}
