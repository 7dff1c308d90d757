//! Property-based tests for money arithmetic.
//!
//! - Exactness of addition and subtraction
//! - Currency preservation across transforms
//! - Banker's rounding determinism
//! - Parse/format round trips

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::currency::CurrencyCode;
use super::money::Money;

/// Strategy to generate decimal amounts (-1,000,000.00 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate 3-letter uppercase currency codes.
fn currency() -> impl Strategy<Value = CurrencyCode> {
    "[A-Z]{3}".prop_map(|code| CurrencyCode::new(&code).expect("generated code is valid"))
}

/// Strategy to generate money values.
fn money() -> impl Strategy<Value = Money> {
    (amount(), currency()).prop_map(|(amount, currency)| Money::new(amount, currency))
}

/// Strategy to generate decimal places (0 to 4).
fn decimal_places() -> impl Strategy<Value = u32> {
    0u32..=4
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* two same-currency amounts, addition is the exact decimal
    /// sum and subtraction undoes it.
    #[test]
    fn prop_add_exact_and_sub_inverts(
        a in amount(),
        b in amount(),
        currency in currency(),
    ) {
        let left = Money::new(a, currency);
        let right = Money::new(b, currency);

        let sum = left.try_add(right).expect("same currency");
        prop_assert_eq!(sum.amount, a + b);

        let back = sum.try_sub(right).expect("same currency");
        prop_assert_eq!(back, left);
    }

    /// *For any* two unlike currencies, every checked operation reports the
    /// mismatch instead of producing a number.
    #[test]
    fn prop_unlike_currencies_are_rejected(
        a in money(),
        b in money(),
    ) {
        prop_assume!(a.currency != b.currency);
        prop_assert!(a.try_add(b).is_err());
        prop_assert!(a.try_sub(b).is_err());
        prop_assert!(a.try_cmp(&b).is_err());
        prop_assert!(a.try_eq(&b).is_err());
    }

    /// *For any* money value, negation is an involution and preserves the
    /// currency.
    #[test]
    fn prop_neg_is_involution(m in money()) {
        let negated = -m;
        prop_assert_eq!(negated.currency, m.currency);
        prop_assert_eq!(-negated, m);
    }

    /// *For any* money value and factor, scalar multiplication is
    /// commutative and preserves the currency.
    #[test]
    fn prop_mul_commutes(m in money(), factor in amount()) {
        prop_assert_eq!(m * factor, factor * m);
        prop_assert_eq!((m * factor).currency, m.currency);
    }

    /// *For any* money value, rounding is deterministic and idempotent, and
    /// the result carries at most the requested number of fractional digits.
    #[test]
    fn prop_round_to_is_idempotent(m in money(), places in decimal_places()) {
        let rounded = m.round_to(places);
        prop_assert_eq!(rounded, m.round_to(places));
        prop_assert_eq!(rounded.round_to(places), rounded);

        let scaled = rounded.amount * Decimal::from(10u32.pow(places));
        prop_assert_eq!(scaled.round(), scaled);
    }

    /// *For any* money value, formatting the full-precision amount with its
    /// code parses back to an equal value.
    #[test]
    fn prop_canonical_string_round_trips(m in money()) {
        let canonical = format!("{} {}", m.currency, m.amount);
        let parsed: Money = canonical.parse().expect("canonical form parses");
        prop_assert_eq!(parsed, m);
    }

    /// *For any* money value, the display form shows exactly two fractional
    /// digits.
    #[test]
    fn prop_display_has_two_fraction_digits(m in money()) {
        let rendered = m.to_string();
        let (_, fraction) = rendered.rsplit_once('.').expect("display has a fraction");
        prop_assert_eq!(fraction.len(), 2);
    }
}
