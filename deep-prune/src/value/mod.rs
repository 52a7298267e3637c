//! The tree model that pruning operates on.
//!
//! A [`Value`] is a tagged union over every node kind the sanitizer knows
//! about:
//!
//! - **Leaves**: `Null`, `Text`, `Number`, `Bool`
//! - **Atomic handles**: `Temporal` (a shared timestamp) and `Callable`
//!   (a shared function)
//! - **Containers**: `Sequence` and `Mapping`
//!
//! Containers own their children, so a tree is acyclic by construction.
//! `Temporal` and `Callable` are reference-counted handles: cloning a value
//! shares them rather than copying what they point to.

mod callable;
mod mapping;
mod number;
mod temporal;

use std::fmt;

pub use callable::Callable;
pub use mapping::{IntoIter, Iter, Mapping};
pub use number::Number;
pub use temporal::Temporal;
pub(crate) use temporal::from_datetime as temporal_from_datetime;

/// A node in a prunable data tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// Absent marker.
    #[default]
    Null,
    /// A string.
    Text(String),
    /// An integer or float.
    Number(Number),
    /// A boolean.
    Bool(bool),
    /// An opaque timestamp, passed through verbatim.
    Temporal(Temporal),
    /// An ordered list.
    Sequence(Vec<Value>),
    /// An ordered, string-keyed map.
    Mapping(Mapping),
    /// A function reference. Always considered empty.
    Callable(Callable),
}

/// The kind of a [`Value`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Text,
    Number,
    Bool,
    Temporal,
    Sequence,
    Mapping,
    Callable,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Text => "text",
            Self::Number => "number",
            Self::Bool => "bool",
            Self::Temporal => "temporal",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
            Self::Callable => "callable",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Returns the kind tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Text(_) => ValueKind::Text,
            Self::Number(_) => ValueKind::Number,
            Self::Bool(_) => ValueKind::Bool,
            Self::Temporal(_) => ValueKind::Temporal,
            Self::Sequence(_) => ValueKind::Sequence,
            Self::Mapping(_) => ValueKind::Mapping,
            Self::Callable(_) => ValueKind::Callable,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(number) => number.as_i64(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Number(number) => number.as_u64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(number.as_f64()),
            _ => None,
        }
    }

    pub fn as_temporal(&self) -> Option<&Temporal> {
        match self {
            Self::Temporal(temporal) => Some(temporal),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    pub fn as_callable(&self) -> Option<&Callable> {
        match self {
            Self::Callable(callable) => Some(callable),
            _ => None,
        }
    }

    /// Looks up a field when this value is a mapping.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping().and_then(|mapping| mapping.get(key))
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Number(Number::from(value))
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<Temporal> for Value {
    fn from(value: Temporal) -> Self {
        Self::Temporal(value)
    }
}

impl From<Callable> for Value {
    fn from(value: Callable) -> Self {
        Self::Callable(value)
    }
}

impl From<Mapping> for Value {
    fn from(value: Mapping) -> Self {
        Self::Mapping(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::Sequence(value)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T> FromIterator<T> for Value
where
    T: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Sequence(iter.into_iter().map(Into::into).collect())
    }
}
