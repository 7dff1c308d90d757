//! Hook functions for embedding money values in JSON documents.
//!
//! The serialized form is a tagged map:
//!
//! ```json
//! { "_type": "Money", "amount": "10.30", "currency": "USD" }
//! ```
//!
//! The amount travels as its canonical decimal string, never as a binary
//! float.

use rust_decimal::Decimal;
use serde_json::{Map, Value};

use moneta_core::{CurrencyCode, Money, MoneyError};

use crate::error::{CodecError, CodecResult};

/// Reserved key marking a typed map.
pub const TYPE_KEY: &str = "_type";

/// Type discriminator for serialized `Money` values.
pub const MONEY_TYPE: &str = "Money";

/// A value handed to the serializer hook by the document encoder.
///
/// The encoder calls the hook for any node it cannot lower natively; the
/// hook recognizes the domain types and rejects everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookInput {
    /// A currency-tagged monetary amount.
    Money(Money),
    /// A bare exact-decimal number.
    Decimal(Decimal),
    /// Anything else, identified by the type name the encoder reports.
    Unknown(String),
}

/// Outcome of the deserializer hook for a single document node.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// The node carried the Money tag and was reconstructed.
    Money(Money),
    /// The node was not Money-tagged and passes through unchanged.
    Passthrough(Value),
}

/// Lowers a domain value into its JSON document representation.
///
/// `Money` becomes a `_type`-tagged map carrying the amount as its canonical
/// decimal string; a bare `Decimal` becomes that string directly.
///
/// # Errors
///
/// Returns [`CodecError::UnsupportedType`] for anything the codec does not
/// recognize, naming the offending type.
pub fn serialize(value: &HookInput) -> CodecResult<Value> {
    match value {
        HookInput::Money(money) => {
            let mut map = Map::new();
            map.insert(TYPE_KEY.to_string(), Value::String(MONEY_TYPE.to_string()));
            map.insert(
                "amount".to_string(),
                Value::String(money.amount.to_string()),
            );
            map.insert(
                "currency".to_string(),
                Value::String(money.currency.to_string()),
            );
            Ok(Value::Object(map))
        }
        HookInput::Decimal(decimal) => Ok(Value::String(decimal.to_string())),
        HookInput::Unknown(type_name) => Err(CodecError::UnsupportedType(type_name.clone())),
    }
}

/// Reconstructs typed values from a parsed document node.
///
/// A map whose `_type` is `"Money"` is rebuilt into a [`Money`]; every other
/// node passes through unchanged, so the hook can run over an entire parsed
/// document tree where most nodes are not money.
///
/// # Errors
///
/// Fails when a Money-tagged map is missing a required string field or
/// carries a malformed amount or currency.
pub fn deserialize(value: Value) -> CodecResult<Decoded> {
    match value {
        Value::Object(ref map) if map.get(TYPE_KEY).and_then(Value::as_str) == Some(MONEY_TYPE) => {
            let raw_amount = string_field(map, "amount")?;
            let currency = CurrencyCode::new(string_field(map, "currency")?)?;
            let amount = raw_amount
                .parse::<Decimal>()
                .map_err(|_| MoneyError::Parse(raw_amount.to_string()))?;
            Ok(Decoded::Money(Money::new(amount, currency)))
        }
        other => Ok(Decoded::Passthrough(other)),
    }
}

fn string_field<'a>(map: &'a Map<String, Value>, field: &'static str) -> CodecResult<&'a str> {
    map.get(field)
        .and_then(Value::as_str)
        .ok_or(CodecError::MissingField(field))
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;

    fn money(literal: &str) -> Money {
        literal.parse().unwrap()
    }

    #[test]
    fn test_serialize_money() {
        let value = serialize(&HookInput::Money(money("USD 10.30"))).unwrap();
        assert_eq!(
            value,
            json!({ "_type": "Money", "amount": "10.30", "currency": "USD" })
        );
    }

    #[test]
    fn test_serialize_money_keeps_full_precision() {
        let value = serialize(&HookInput::Money(money("EUR 10.567"))).unwrap();
        assert_eq!(value["amount"], json!("10.567"));
    }

    #[test]
    fn test_serialize_decimal_as_canonical_string() {
        let value = serialize(&HookInput::Decimal(dec!(0.30))).unwrap();
        assert_eq!(value, json!("0.30"));
    }

    #[test]
    fn test_serialize_rejects_unknown_type() {
        let result = serialize(&HookInput::Unknown("Budget".into()));
        assert_eq!(result, Err(CodecError::UnsupportedType("Budget".into())));
    }

    #[test]
    fn test_deserialize_money() {
        let decoded = deserialize(json!({
            "_type": "Money",
            "amount": "10.30",
            "currency": "USD",
        }))
        .unwrap();
        assert_eq!(decoded, Decoded::Money(money("USD 10.30")));
    }

    #[test]
    fn test_deserialize_untagged_map_passes_through() {
        let map = json!({ "amount": "10.30", "currency": "USD" });
        let decoded = deserialize(map.clone()).unwrap();
        assert_eq!(decoded, Decoded::Passthrough(map));
    }

    #[test]
    fn test_deserialize_other_tag_passes_through() {
        let map = json!({ "_type": "Budget", "amount": "10.30" });
        let decoded = deserialize(map.clone()).unwrap();
        assert_eq!(decoded, Decoded::Passthrough(map));
    }

    #[test]
    fn test_deserialize_non_map_passes_through() {
        for node in [json!("10.30"), json!(3), json!([1, 2]), json!(null)] {
            let decoded = deserialize(node.clone()).unwrap();
            assert_eq!(decoded, Decoded::Passthrough(node));
        }
    }

    #[test]
    fn test_deserialize_rejects_missing_fields() {
        let result = deserialize(json!({ "_type": "Money", "currency": "USD" }));
        assert_eq!(result, Err(CodecError::MissingField("amount")));

        let result = deserialize(json!({ "_type": "Money", "amount": "10.30" }));
        assert_eq!(result, Err(CodecError::MissingField("currency")));
    }

    #[test]
    fn test_deserialize_rejects_numeric_amount() {
        // The canonical amount form is a decimal string, not a JSON number.
        let result = deserialize(json!({
            "_type": "Money",
            "amount": 10.30,
            "currency": "USD",
        }));
        assert_eq!(result, Err(CodecError::MissingField("amount")));
    }

    #[test]
    fn test_deserialize_rejects_malformed_amount() {
        let result = deserialize(json!({
            "_type": "Money",
            "amount": "ten",
            "currency": "USD",
        }));
        assert_eq!(result, Err(CodecError::Money(MoneyError::Parse("ten".into()))));
    }

    #[test]
    fn test_deserialize_rejects_bad_currency() {
        let result = deserialize(json!({
            "_type": "Money",
            "amount": "10.30",
            "currency": "US",
        }));
        assert_eq!(
            result,
            Err(CodecError::Money(MoneyError::InvalidCurrency("US".into())))
        );
    }

    #[test]
    fn test_round_trip_preserves_value() {
        let original = money("IDR 1,500,000.25");
        let value = serialize(&HookInput::Money(original)).unwrap();
        let decoded = deserialize(value).unwrap();
        assert_eq!(decoded, Decoded::Money(original));
    }
}
