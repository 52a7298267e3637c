//! Serde integration and pruning of `serde_json` trees.
//!
//! This module connects [`Value`] with serde so pruned trees can be handed
//! straight to a serializer, and offers [`sanitize_json`] for callers that
//! already hold a `serde_json::Value`.
//!
//! Serialization rules:
//! - `Null` and `Callable` serialize as unit (`null` in JSON).
//! - `Temporal` serializes as an RFC 3339 string.
//! - `Mapping` serializes as a map in key order.
//!
//! Deserialization never produces `Temporal` or `Callable`: strings stay
//! `Text`.

use std::fmt;

use serde::{
    de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor},
    ser::{Serialize, SerializeMap, SerializeSeq, Serializer},
};
use serde_json::{Map as JsonMap, Number as JsonNumber, Value as JsonValue};

use crate::{
    prune::sanitize,
    value::{Mapping, Number, Value},
};

/// Prunes a JSON tree with the same rules as [`sanitize`].
///
/// Top-level `null` becomes `{}`.
///
/// ```rust
/// use serde_json::json;
///
/// let cleaned = deep_prune::sanitize_json(&json!({
///     "items": [null, {}, ""],
///     "count": 0,
/// }));
/// assert_eq!(cleaned, json!({ "count": 0 }));
/// ```
pub fn sanitize_json(value: &JsonValue) -> JsonValue {
    JsonValue::from(sanitize(&Value::from(value.clone())))
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null | Self::Callable(_) => serializer.serialize_unit(),
            Self::Text(text) => serializer.serialize_str(text),
            Self::Number(number) => number.serialize(serializer),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Temporal(temporal) => serializer.serialize_str(&temporal.to_rfc3339()),
            Self::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Mapping(mapping) => mapping.serialize(serializer),
        }
    }
}

impl Serialize for Mapping {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Self::PosInt(value) => serializer.serialize_u64(value),
            Self::NegInt(value) => serializer.serialize_i64(value),
            Self::Float(value) => serializer.serialize_f64(value),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

/// Builds a [`Value`] directly from the input, so mapping keys keep document
/// order whatever map type the format would otherwise use.
struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("any JSON-like value")
    }

    fn visit_bool<E>(self, value: bool) -> Result<Value, E> {
        Ok(Value::Bool(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Value, E> {
        Ok(Value::Number(Number::from(value)))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Value, E> {
        Ok(Value::Number(Number::from(value)))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Value, E> {
        Ok(Value::Number(Number::from(value)))
    }

    fn visit_str<E>(self, value: &str) -> Result<Value, E> {
        Ok(Value::Text(value.to_owned()))
    }

    fn visit_string<E>(self, value: String) -> Result<Value, E> {
        Ok(Value::Text(value))
    }

    fn visit_unit<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(item) = access.next_element()? {
            items.push(item);
        }
        Ok(Value::Sequence(items))
    }

    fn visit_map<A>(self, mut access: A) -> Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut mapping = Mapping::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            mapping.insert(key, value);
        }
        Ok(Value::Mapping(mapping))
    }
}

impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(value) => Self::Bool(value),
            JsonValue::Number(number) => Self::Number(Number::from(&number)),
            JsonValue::String(text) => Self::Text(text),
            JsonValue::Array(items) => Self::Sequence(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(fields) => Self::Mapping(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&JsonNumber> for Number {
    fn from(number: &JsonNumber) -> Self {
        if let Some(value) = number.as_u64() {
            Self::PosInt(value)
        } else if let Some(value) = number.as_i64() {
            Self::NegInt(value)
        } else {
            Self::Float(number.as_f64().unwrap_or(f64::NAN))
        }
    }
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null | Value::Callable(_) => Self::Null,
            Value::Text(text) => Self::String(text),
            Value::Number(number) => number_to_json(number),
            Value::Bool(value) => Self::Bool(value),
            Value::Temporal(temporal) => Self::String(temporal.to_rfc3339()),
            Value::Sequence(items) => Self::Array(items.into_iter().map(JsonValue::from).collect()),
            Value::Mapping(mapping) => Self::Object(
                mapping
                    .into_iter()
                    .map(|(key, value)| (key, JsonValue::from(value)))
                    .collect::<JsonMap<String, JsonValue>>(),
            ),
        }
    }
}

/// Non-finite floats have no JSON form and become `null`.
fn number_to_json(number: Number) -> JsonValue {
    match number {
        Number::PosInt(value) => JsonValue::Number(value.into()),
        Number::NegInt(value) => JsonValue::Number(value.into()),
        Number::Float(value) => JsonNumber::from_f64(value).map_or(JsonValue::Null, JsonValue::Number),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use super::sanitize_json;
    use crate::value::{Callable, Mapping, Number, Temporal, Value};

    #[test]
    fn temporal_serializes_as_rfc3339() {
        let instant = Utc.with_ymd_and_hms(2023, 3, 4, 5, 6, 7).unwrap();
        let value = Value::from(Mapping::from([("at", Temporal::new(instant))]));
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json, json!({ "at": "2023-03-04T05:06:07+00:00" }));
    }

    #[test]
    fn callable_serializes_as_null() {
        let value = Value::Callable(Callable::new("f", |_| Value::Null));
        assert_eq!(serde_json::to_string(&value).unwrap(), "null");
    }

    #[test]
    fn mapping_serializes_in_key_order() {
        let value = Value::from(Mapping::from([("b", 1), ("a", 2)]));
        assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"b":1,"a":2}"#);
    }

    #[test]
    fn json_numbers_keep_sign_class() {
        let value = Value::from(json!([1, -1, 1.5]));
        assert_eq!(
            value,
            Value::Sequence(vec![
                Value::Number(Number::PosInt(1)),
                Value::Number(Number::NegInt(-1)),
                Value::Number(Number::Float(1.5)),
            ])
        );
    }

    #[test]
    fn non_finite_float_becomes_null() {
        assert_eq!(serde_json::Value::from(Value::from(f64::NAN)), json!(null));
    }

    #[test]
    fn deserialize_keeps_strings_as_text() {
        let value: Value = serde_json::from_str(r#"{"at":"2023-03-04T05:06:07Z"}"#).unwrap();
        assert_eq!(value.get("at"), Some(&Value::from("2023-03-04T05:06:07Z")));
    }

    #[test]
    fn deserialize_keeps_document_key_order() {
        let value: Value =
            serde_json::from_str(r#"{"zeta":1,"alpha":2,"mid":{"z":0,"a":0}}"#).unwrap();
        let mapping = value.as_mapping().unwrap();
        assert_eq!(mapping.keys().collect::<Vec<_>>(), ["zeta", "alpha", "mid"]);
        let nested = value.get("mid").and_then(Value::as_mapping).unwrap();
        assert_eq!(nested.keys().collect::<Vec<_>>(), ["z", "a"]);
    }

    #[test]
    fn sanitize_json_keeps_key_order() {
        let input: serde_json::Value =
            serde_json::from_str(r#"{"zeta":1,"gone":null,"alpha":2}"#).unwrap();
        let cleaned = sanitize_json(&input);
        assert_eq!(
            serde_json::to_string(&cleaned).unwrap(),
            r#"{"zeta":1,"alpha":2}"#
        );
    }

    #[test]
    fn sanitize_json_top_level_null() {
        assert_eq!(sanitize_json(&json!(null)), json!({}));
    }
}
