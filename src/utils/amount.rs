//! Serde helpers for monetary values crossing the admin API boundary.
//!
//! The backend speaks JSON numbers for amount fields while the crate keeps
//! `BigDecimal` internally so decimal comparisons stay exact. Deserialization
//! also accepts string-encoded amounts since the shortest decimal form of a
//! wire number round-trips through text without float residue.

use bigdecimal::{BigDecimal, ToPrimitive};
use serde::de::{self, Deserializer};
use serde::ser::{self, Serializer};
use serde::Deserialize;
use std::str::FromStr;

pub fn serialize<S>(value: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let as_f64 = value
        .to_f64()
        .ok_or_else(|| ser::Error::custom("amount out of numeric range"))?;
    // Integral amounts go out as JSON integers, matching what the backend
    // stores and what its other clients send.
    if as_f64.fract() == 0.0 && as_f64.abs() < i64::MAX as f64 {
        serializer.serialize_i64(as_f64 as i64)
    } else {
        serializer.serialize_f64(as_f64)
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<BigDecimal, D::Error>
where
    D: Deserializer<'de>,
{
    decode(serde_json::Value::deserialize(deserializer)?)
}

fn decode<E: de::Error>(value: serde_json::Value) -> Result<BigDecimal, E> {
    let raw = match value {
        serde_json::Value::Number(number) => number.to_string(),
        serde_json::Value::String(text) => text,
        other => {
            return Err(de::Error::custom(format!(
                "expected a numeric amount, got {other}"
            )))
        }
    };
    BigDecimal::from_str(raw.trim()).map_err(de::Error::custom)
}

/// Same codec for `Option<BigDecimal>` fields.
pub mod option {
    use bigdecimal::BigDecimal;
    use serde::de::Deserializer;
    use serde::ser::Serializer;
    use serde::Deserialize;

    pub fn serialize<S>(value: &Option<BigDecimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(amount) => super::serialize(amount, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<BigDecimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<serde_json::Value>::deserialize(deserializer)? {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(value) => super::decode(value).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use bigdecimal::BigDecimal;
    use serde::{Deserialize, Serialize};
    use serde_json::json;
    use std::str::FromStr;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Payload {
        #[serde(with = "super")]
        amount: BigDecimal,
    }

    #[test]
    fn serializes_integral_amounts_as_integers() {
        let payload = Payload {
            amount: BigDecimal::from_str("600").unwrap(),
        };
        assert_eq!(serde_json::to_value(&payload).unwrap(), json!({"amount": 600}));
    }

    #[test]
    fn serializes_fractional_amounts_as_floats() {
        let payload = Payload {
            amount: BigDecimal::from_str("0.25").unwrap(),
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"amount": 0.25})
        );
    }

    #[test]
    fn deserializes_numbers_without_float_residue() {
        let payload: Payload = serde_json::from_value(json!({"amount": 0.01})).unwrap();
        assert_eq!(payload.amount, BigDecimal::from_str("0.01").unwrap());
    }

    #[test]
    fn deserializes_string_encoded_amounts() {
        let payload: Payload = serde_json::from_value(json!({"amount": "1000.00"})).unwrap();
        assert_eq!(payload.amount, BigDecimal::from_str("1000.00").unwrap());
    }

    #[test]
    fn rejects_non_numeric_amounts() {
        assert!(serde_json::from_value::<Payload>(json!({"amount": true})).is_err());
        assert!(serde_json::from_value::<Payload>(json!({"amount": "12x"})).is_err());
    }
}
