//! Integration tests for the `serde_json` bridge.
//!
//! These tests run realistic JSON payloads through `sanitize_json` and check
//! the serde implementations on `Value`.

#![cfg(feature = "serde")]

use chrono::{TimeZone, Utc};
use deep_prune::{sanitize, sanitize_json, Callable, Mapping, Temporal, Value};
use serde_json::{json, Value as JsonValue};

// =============================================================================
// sanitize_json
// =============================================================================

#[test]
fn test_api_response_cleanup() {
    let response = json!({
        "id": 17,
        "name": "Widget",
        "description": "",
        "price": 0.0,
        "discount": null,
        "inStock": false,
        "tags": ["", "  ", null],
        "dimensions": { "width": 10, "height": null, "depth": {} },
        "variants": [
            { "sku": "W-1", "color": "" },
            { "sku": "", "color": null },
            []
        ],
        "metadata": { "internal": { "notes": [] } }
    });

    let expected = json!({
        "id": 17,
        "name": "Widget",
        "price": 0.0,
        "inStock": false,
        "dimensions": { "width": 10 },
        "variants": [ { "sku": "W-1" } ]
    });

    assert_eq!(sanitize_json(&response), expected);
}

#[test]
fn test_form_submission_cleanup() {
    let form = json!({
        "firstName": "Ada",
        "lastName": "   ",
        "email": "ada@example.com",
        "phone": "",
        "address": {
            "street": "",
            "city": "London",
            "zip": null
        },
        "interests": ["math", "", "engines"],
        "newsletter": false
    });

    let expected = json!({
        "firstName": "Ada",
        "email": "ada@example.com",
        "address": { "city": "London" },
        "interests": ["math", "engines"],
        "newsletter": false
    });

    assert_eq!(sanitize_json(&form), expected);
}

#[test]
fn test_json_top_level_shapes() {
    assert_eq!(sanitize_json(&JsonValue::Null), json!({}));
    assert_eq!(sanitize_json(&json!([null, "", {}, []])), json!([]));
    assert_eq!(sanitize_json(&json!("  ")), json!("  "));
    assert_eq!(sanitize_json(&json!(0)), json!(0));
    assert_eq!(sanitize_json(&json!(false)), json!(false));
}

#[test]
fn test_json_numbers_survive_exactly() {
    let data = json!({
        "big": u64::MAX,
        "negative": i64::MIN,
        "fraction": -0.5
    });
    assert_eq!(sanitize_json(&data), data);
}

#[test]
fn test_json_is_idempotent() {
    let data = json!({
        "a": { "b": { "c": null } },
        "d": [[], [null], [1, ""]],
        "e": " x "
    });
    let once = sanitize_json(&data);
    assert_eq!(once, json!({ "d": [[1]], "e": " x " }));
    assert_eq!(sanitize_json(&once), once);
}

// =============================================================================
// Serialize / Deserialize
// =============================================================================

#[test]
fn test_serialize_pruned_value() {
    let created = Temporal::new(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap());
    let value = Value::from(Mapping::from([
        ("name", Value::from("John")),
        ("created", Value::from(created)),
        ("handler", Value::from(Callable::new("noop", |_| Value::Null))),
        ("scores", Value::from(vec![Value::from(1), Value::from(2.5)])),
    ]));

    let serialized = serde_json::to_value(&value).unwrap();
    assert_eq!(
        serialized,
        json!({
            "name": "John",
            "created": "2024-01-02T03:04:05+00:00",
            "handler": null,
            "scores": [1, 2.5]
        })
    );

    let pruned = serde_json::to_value(sanitize(&value)).unwrap();
    assert_eq!(
        pruned,
        json!({
            "name": "John",
            "created": "2024-01-02T03:04:05+00:00",
            "scores": [1, 2.5]
        })
    );
}

#[test]
fn test_serialize_keeps_mapping_order() {
    let value = Value::from(Mapping::from([
        ("zeta", Value::from(1)),
        ("alpha", Value::from(2)),
    ]));
    assert_eq!(
        serde_json::to_string(&value).unwrap(),
        r#"{"zeta":1,"alpha":2}"#
    );
}

#[test]
fn test_deserialize_into_value() {
    let value: Value = serde_json::from_str(r#"{"a": [1, -2, 3.5, "x", true, null]}"#).unwrap();
    let items = value.get("a").and_then(Value::as_sequence).unwrap();

    assert_eq!(items[0].as_u64(), Some(1));
    assert_eq!(items[1].as_i64(), Some(-2));
    assert_eq!(items[2].as_f64(), Some(3.5));
    assert_eq!(items[3].as_str(), Some("x"));
    assert_eq!(items[4].as_bool(), Some(true));
    assert!(items[5].is_null());
}

#[test]
fn test_deserialize_keeps_document_order() {
    let value: Value = serde_json::from_str(r#"{"zeta":1,"alpha":2}"#).unwrap();
    let keys: Vec<_> = value.as_mapping().unwrap().keys().collect();
    assert_eq!(keys, ["zeta", "alpha"]);
}

#[test]
fn test_sanitize_json_keeps_document_order() {
    let data: JsonValue =
        serde_json::from_str(r#"{"zeta":1,"empty":"","alpha":{"b":2,"a":null}}"#).unwrap();
    assert_eq!(
        serde_json::to_string(&sanitize_json(&data)).unwrap(),
        r#"{"zeta":1,"alpha":{"b":2}}"#
    );
}

#[test]
fn test_deserialized_dates_stay_text() {
    let value: Value = serde_json::from_str(r#"{"created": "2024-01-02T03:04:05Z"}"#).unwrap();
    assert_eq!(
        value.get("created").and_then(Value::as_str),
        Some("2024-01-02T03:04:05Z")
    );
}

#[test]
fn test_non_finite_float_becomes_null() {
    let json = JsonValue::from(Value::from(f64::NAN));
    assert_eq!(json, JsonValue::Null);
}
