//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::validation::{MAX_NAME_LEN, not_blank};

/// Product entity
///
/// `value` is an exact decimal. It is written to JSON as a number literal
/// carrying every digit and scale, and read back from either a number or a
/// numeric string without passing through a float.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: Uuid,
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub value: Decimal,
}

/// Create / update product payload (updates always overwrite every field)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ProductPayload {
    #[validate(
        custom(function = "not_blank"),
        length(max = MAX_NAME_LEN, message = "is too long")
    )]
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub value: Decimal,
}

impl ProductPayload {
    pub fn new(name: impl Into<String>, value: Decimal) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_product_value_is_json_number() {
        let product = Product {
            product_id: Uuid::nil(),
            name: "Coffee".into(),
            value: Decimal::from_str("2.50").unwrap(),
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["productId"], "00000000-0000-0000-0000-000000000000");
        assert!(json["value"].is_number());
        assert_eq!(json["value"].to_string(), "2.50");
    }

    #[test]
    fn test_payload_accepts_number_or_string_value() {
        let from_number: ProductPayload =
            serde_json::from_str(r#"{"name":"Tea","value":19.99}"#).unwrap();
        let from_string: ProductPayload =
            serde_json::from_str(r#"{"name":"Tea","value":"19.99"}"#).unwrap();
        assert_eq!(from_number.value, Decimal::from_str("19.99").unwrap());
        assert_eq!(from_number, from_string);
    }

    #[test]
    fn test_long_value_keeps_every_digit() {
        let payload: ProductPayload =
            serde_json::from_str(r#"{"name":"Gold","value":12345678901234567.89}"#).unwrap();
        assert_eq!(payload.value, Decimal::from_str("12345678901234567.89").unwrap());

        let product = Product {
            product_id: Uuid::nil(),
            name: payload.name,
            value: payload.value,
        };
        let text = serde_json::to_string(&product).unwrap();
        assert!(text.contains(r#""value":12345678901234567.89"#), "{text}");

        let back: Product = serde_json::from_str(&text).unwrap();
        assert_eq!(back, product);
    }

    #[test]
    fn test_small_fraction_is_not_rounded() {
        let payload: ProductPayload =
            serde_json::from_str(r#"{"name":"Dust","value":0.1234567890123456789}"#).unwrap();
        assert_eq!(payload.value, Decimal::from_str("0.1234567890123456789").unwrap());
        assert_eq!(
            serde_json::to_value(&payload).unwrap()["value"].to_string(),
            "0.1234567890123456789"
        );
    }

    #[test]
    fn test_payload_requires_value() {
        assert!(serde_json::from_str::<ProductPayload>(r#"{"name":"Tea"}"#).is_err());
    }

    #[test]
    fn test_payload_rejects_blank_name() {
        let payload = ProductPayload::new(" ", Decimal::ONE);
        assert!(payload.validate().is_err());
    }
}
