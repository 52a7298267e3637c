//! Adapters for emitting pruned values through `slog`.
//!
//! This module exists to connect [`crate::ToValue`] with `slog` by providing
//! `slog::Value` implementations that serialize pruned outputs as structured
//! JSON via `slog`'s nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation is the pruned tree, not the original
//!   value.
//! - Avoiding fallible logging APIs: every pruned tree has a JSON form, so
//!   building the payload cannot fail.
//!
//! It does not configure `slog` or decide which values should be logged.

use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::convert::{Prunable, ToValue};

/// A `slog::Value` that emits an owned pruned payload as structured JSON.
///
/// The payload is stored as a `serde_json::Value` and emitted via
/// `slog`'s nested-value support.
pub struct PrunedJson {
    value: JsonValue,
}

impl PrunedJson {
    fn new(value: JsonValue) -> Self {
        Self { value }
    }

    /// The JSON payload that will be logged.
    pub fn as_json(&self) -> &JsonValue {
        &self.value
    }
}

impl SlogValue for PrunedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts values into a `slog::Value` that logs their pruned form as JSON.
///
/// ## Example
/// ```ignore
/// use deep_prune::slog::ToPrunedJson;
///
/// info!(logger, "event"; "payload" => event.to_pruned_json());
/// ```
pub trait ToPrunedJson: ToValue {
    /// Prunes `self` and returns a `slog::Value` that serializes as structured JSON.
    ///
    /// The conversion is infallible: non-finite floats are logged as `null`.
    fn to_pruned_json(&self) -> PrunedJson {
        PrunedJson::new(JsonValue::from(self.prune()))
    }
}

impl<T> ToPrunedJson for T where T: ToValue + ?Sized {}
