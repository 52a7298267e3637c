//! Insertion-ordered, string-keyed map.
//!
//! Output key order must follow input iteration order, so this is backed by
//! an [`IndexMap`]: lookups and inserts are constant time and iteration follows
//! insertion order. Keys are unique: inserting an existing key replaces its
//! value in place.

use indexmap::{map, IndexMap};

use super::Value;

/// An ordered collection of unique `String` keys mapped to [`Value`]s.
///
/// Equality is order-sensitive: two mappings are equal only when they hold the
/// same fields in the same order.
#[derive(Clone, Debug, Default)]
pub struct Mapping {
    entries: IndexMap<String, Value>,
}

impl Mapping {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts a field.
    ///
    /// If the key is already present its value is replaced without moving it,
    /// and the previous value is returned.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes a field, keeping the remaining keys in order.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

/// Borrowing iterator over the fields of a [`Mapping`], in order.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    inner: map::Iter<'a, String, Value>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key.as_str(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// Owning iterator over the fields of a [`Mapping`], in order.
#[derive(Debug)]
pub struct IntoIter {
    inner: map::IntoIter<String, Value>,
}

impl Iterator for IntoIter {
    type Item = (String, Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for IntoIter {}

impl IntoIterator for Mapping {
    type Item = (String, Value);
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_iter(),
        }
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> Extend<(K, V)> for Mapping
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Mapping
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        mapping.extend(iter);
        mapping
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Mapping
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Mapping;
    use crate::Value;

    #[test]
    fn insert_keeps_first_position_on_replace() {
        let mut mapping = Mapping::new();
        mapping.insert("a", 1);
        mapping.insert("b", 2);
        let previous = mapping.insert("a", 3);

        assert_eq!(previous, Some(Value::from(1)));
        assert_eq!(mapping.keys().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(mapping.get("a"), Some(&Value::from(3)));
    }

    #[test]
    fn remove_preserves_order_of_rest() {
        let mut mapping = Mapping::from([("a", 1), ("b", 2), ("c", 3)]);
        assert_eq!(mapping.remove("b"), Some(Value::from(2)));
        assert_eq!(mapping.remove("b"), None);
        assert_eq!(mapping.keys().collect::<Vec<_>>(), ["a", "c"]);
    }

    #[test]
    fn duplicate_keys_collapse_when_collecting() {
        let mapping: Mapping = vec![("k", 1), ("k", 2)].into_iter().collect();
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("k"), Some(&Value::from(2)));
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut mapping = Mapping::from([("count", 0)]);
        if let Some(value) = mapping.get_mut("count") {
            *value = Value::from(10);
        }
        assert_eq!(mapping.get("count").and_then(Value::as_i64), Some(10));
        assert!(mapping.contains_key("count"));
        assert!(!mapping.contains_key("other"));
    }

    #[test]
    fn equality_is_order_sensitive() {
        let forward = Mapping::from([("a", 1), ("b", 2)]);
        let reverse = Mapping::from([("b", 2), ("a", 1)]);
        assert_eq!(forward, Mapping::from([("a", 1), ("b", 2)]));
        assert_ne!(forward, reverse);
    }

    #[test]
    fn wide_mapping_keeps_every_key_in_order() {
        let mapping: Mapping = (0..100_000).map(|i| (format!("k{i}"), i)).collect();
        assert_eq!(mapping.len(), 100_000);
        assert_eq!(mapping.keys().next(), Some("k0"));
        assert_eq!(mapping.keys().last(), Some("k99999"));
        assert_eq!(mapping.get("k50000"), Some(&Value::from(50_000)));
    }

    #[test]
    fn iterators_yield_in_insertion_order() {
        let mapping = Mapping::from([("z", "last"), ("a", "first")]);
        let pairs: Vec<_> = mapping.iter().map(|(k, v)| (k, v.as_str())).collect();
        assert_eq!(pairs, [("z", Some("last")), ("a", Some("first"))]);

        let owned: Vec<_> = mapping.into_iter().map(|(k, _)| k).collect();
        assert_eq!(owned, ["z", "a"]);
    }
}
