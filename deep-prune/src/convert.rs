//! Conversion of Rust data into prunable [`Value`] trees.
//!
//! - [`ToValue`]: types that can describe themselves as a `Value`. Implemented
//!   here for std containers, primitives, and chrono timestamps, and generated
//!   for user types by `#[derive(Prune)]`.
//! - [`Prunable`]: user-facing `.prune()`, blanket-implemented for every
//!   `ToValue` type.
//!
//! ## Mapping of Rust types
//!
//! | Rust type | Value |
//! |-----------|-------|
//! | `()` , `None` | `Null` |
//! | `String`, `&str`, `Cow<str>`, `char` | `Text` |
//! | integers, floats | `Number` |
//! | `bool` | `Bool` |
//! | `DateTime<Tz>`, `SystemTime` | `Temporal` |
//! | `Vec<T>`, slices, arrays, `VecDeque<T>`, `BTreeSet<T>` | `Sequence` |
//! | `BTreeMap<K, V>`, `HashMap<K, V>` | `Mapping` |
//! | `Box<T>`, `Rc<T>`, `Arc<T>`, `&T` | whatever `T` converts to |
//!
//! `HashMap` has no stable iteration order, so its keys are emitted sorted.

use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, VecDeque},
    hash::BuildHasher,
    rc::Rc,
    sync::Arc,
    time::SystemTime,
};

use chrono::{DateTime, TimeZone};

use crate::{
    prune::{sanitize, Result, Sanitizer},
    value::{temporal_from_datetime, Callable, Mapping, Number, Temporal, Value},
};

/// A type that can be converted into a prunable [`Value`] tree.
///
/// Derive it with `#[derive(Prune)]` or implement it by hand for types that
/// need a custom shape:
///
/// ```rust
/// use deep_prune::{Mapping, ToValue, Value};
///
/// struct Celsius(f64);
///
/// impl ToValue for Celsius {
///     fn to_value(&self) -> Value {
///         Value::from(Mapping::from([("celsius", self.0)]))
///     }
/// }
///
/// assert_eq!(Celsius(0.0).to_value().get("celsius"), Some(&Value::from(0.0)));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be converted into a prunable value",
    label = "this type does not implement `ToValue`",
    note = "use `#[derive(Prune)]` on the type definition",
    note = "or mark the field with `#[prune(skip)]` or `#[prune(with = path)]`"
)]
pub trait ToValue {
    /// Builds the value tree for `self`.
    fn to_value(&self) -> Value;
}

/// Public entrypoint for pruning Rust data.
///
/// Blanket-implemented for every [`ToValue`] type.
pub trait Prunable: ToValue {
    /// Converts `self` and removes every empty member.
    #[must_use]
    fn prune(&self) -> Value {
        sanitize(&self.to_value())
    }

    /// Like [`Prunable::prune`], bounded by the sanitizer's depth limit.
    fn try_prune(&self, sanitizer: &Sanitizer) -> Result<Value> {
        sanitizer.sanitize(&self.to_value())
    }
}

impl<T> Prunable for T where T: ToValue + ?Sized {}

// =============================================================================
// ToValue implementations for the value model
// =============================================================================

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl ToValue for Mapping {
    fn to_value(&self) -> Value {
        Value::Mapping(self.clone())
    }
}

impl ToValue for Number {
    fn to_value(&self) -> Value {
        Value::Number(*self)
    }
}

impl ToValue for Temporal {
    fn to_value(&self) -> Value {
        Value::Temporal(self.clone())
    }
}

impl ToValue for Callable {
    fn to_value(&self) -> Value {
        Value::Callable(self.clone())
    }
}

// =============================================================================
// ToValue implementations for standard library types
// =============================================================================

macro_rules! impl_to_value_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToValue for $ty {
                fn to_value(&self) -> Value {
                    Value::Number(Number::from(*self))
                }
            }
        )*
    };
}

impl_to_value_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl ToValue for () {
    fn to_value(&self) -> Value {
        Value::Null
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::Text(self.to_owned())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl ToValue for Cow<'_, str> {
    fn to_value(&self) -> Value {
        Value::Text(self.as_ref().to_owned())
    }
}

impl ToValue for char {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl ToValue for SystemTime {
    fn to_value(&self) -> Value {
        Value::Temporal(Temporal::from(*self))
    }
}

impl<Tz> ToValue for DateTime<Tz>
where
    Tz: TimeZone,
{
    fn to_value(&self) -> Value {
        Value::Temporal(temporal_from_datetime(self))
    }
}

impl<T> ToValue for &T
where
    T: ToValue + ?Sized,
{
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T> ToValue for Option<T>
where
    T: ToValue,
{
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, ToValue::to_value)
    }
}

impl<T> ToValue for Box<T>
where
    T: ToValue + ?Sized,
{
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T> ToValue for Rc<T>
where
    T: ToValue + ?Sized,
{
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T> ToValue for Arc<T>
where
    T: ToValue + ?Sized,
{
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T> ToValue for [T]
where
    T: ToValue,
{
    fn to_value(&self) -> Value {
        Value::Sequence(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T, const N: usize> ToValue for [T; N]
where
    T: ToValue,
{
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T> ToValue for Vec<T>
where
    T: ToValue,
{
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T> ToValue for VecDeque<T>
where
    T: ToValue,
{
    fn to_value(&self) -> Value {
        Value::Sequence(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T> ToValue for BTreeSet<T>
where
    T: ToValue,
{
    fn to_value(&self) -> Value {
        Value::Sequence(self.iter().map(ToValue::to_value).collect())
    }
}

impl<K, V> ToValue for BTreeMap<K, V>
where
    K: AsRef<str>,
    V: ToValue,
{
    fn to_value(&self) -> Value {
        Value::Mapping(
            self.iter()
                .map(|(key, value)| (key.as_ref(), value.to_value()))
                .collect(),
        )
    }
}

impl<K, V, S> ToValue for HashMap<K, V, S>
where
    K: AsRef<str>,
    V: ToValue,
    S: BuildHasher,
{
    fn to_value(&self) -> Value {
        let mut entries: Vec<(&str, &V)> = self
            .iter()
            .map(|(key, value)| (key.as_ref(), value))
            .collect();
        entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        Value::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key, value.to_value()))
                .collect(),
        )
    }
}
