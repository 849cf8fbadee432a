//! Ordered key/value collection.

use crate::data::KeyedValues;

/// Ordered sequence of `(key, optional value)` pairs.
///
/// Insertion order defines position. [`add_value`](Self::add_value)
/// replaces the value of an existing key in place, so keys stay unique
/// when the collection is built through it; [`push`](Self::push) appends
/// unconditionally.
///
/// # Examples
/// ```
/// use u_tabular::collections::DefaultKeyedValues;
/// use u_tabular::data::KeyedValues;
///
/// let mut kv = DefaultKeyedValues::new();
/// kv.add_value("a", Some(5.0));
/// kv.add_value("b", None);
/// kv.add_value("a", Some(6.0));
/// assert_eq!(kv.item_count(), 2);
/// assert_eq!(kv.get_value_by_key(&"a"), Some(6.0));
/// assert_eq!(kv.index_of(&"b"), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefaultKeyedValues<K> {
    keys: Vec<K>,
    values: Vec<Option<f64>>,
}

impl<K> DefaultKeyedValues<K> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Creates an empty collection with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Appends an item without checking for an existing key.
    pub fn push(&mut self, key: K, value: Option<f64>) {
        self.keys.push(key);
        self.values.push(value);
    }

    /// Keys in position order.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Values in position order.
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterates over `(key, value)` pairs in position order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, Option<f64>)> + '_ {
        self.keys.iter().zip(self.values.iter().copied())
    }
}

impl<K: PartialEq> DefaultKeyedValues<K> {
    /// Position of `key`, or `None` if it is not present.
    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    /// Value stored under `key`. Returns `None` both for an unknown key and
    /// for a key whose value is absent.
    pub fn get_value_by_key(&self, key: &K) -> Option<f64> {
        self.index_of(key).and_then(|i| self.values[i])
    }

    /// Sets the value for `key`, replacing it in place if the key exists
    /// and appending otherwise.
    pub fn add_value(&mut self, key: K, value: Option<f64>) {
        match self.index_of(&key) {
            Some(i) => self.values[i] = value,
            None => self.push(key, value),
        }
    }
}

impl<K> Default for DefaultKeyedValues<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> FromIterator<(K, Option<f64>)> for DefaultKeyedValues<K> {
    fn from_iter<I: IntoIterator<Item = (K, Option<f64>)>>(iter: I) -> Self {
        let (keys, values) = iter.into_iter().unzip();
        Self { keys, values }
    }
}

impl<K: Clone> KeyedValues for DefaultKeyedValues<K> {
    type Key = K;

    fn item_count(&self) -> usize {
        self.keys.len()
    }

    fn key(&self, index: usize) -> K {
        self.keys[index].clone()
    }

    fn value(&self, index: usize) -> Option<f64> {
        self.values[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_empty() {
        let kv: DefaultKeyedValues<u32> = DefaultKeyedValues::new();
        assert!(kv.is_empty());
        assert_eq!(kv.item_count(), 0);
    }

    #[test]
    fn test_push_keeps_duplicates() {
        let mut kv = DefaultKeyedValues::with_capacity(2);
        kv.push(1, Some(1.0));
        kv.push(1, Some(2.0));
        assert_eq!(kv.len(), 2);
        assert_eq!(kv.index_of(&1), Some(0));
    }

    #[test]
    fn test_add_value_replaces_in_place() {
        let mut kv = DefaultKeyedValues::new();
        kv.add_value('x', Some(1.0));
        kv.add_value('y', Some(2.0));
        kv.add_value('x', None);
        assert_eq!(kv.keys(), &['x', 'y']);
        assert_eq!(kv.values(), &[None, Some(2.0)]);
    }

    #[test]
    fn test_get_value_by_unknown_key() {
        let kv: DefaultKeyedValues<&str> = [("a", Some(1.0))].into_iter().collect();
        assert_eq!(kv.get_value_by_key(&"z"), None);
        assert_eq!(kv.index_of(&"z"), None);
    }

    #[test]
    fn test_trait_access() {
        let kv: DefaultKeyedValues<String> = vec![
            ("first".to_string(), Some(1.5)),
            ("second".to_string(), None),
        ]
        .into_iter()
        .collect();
        assert_eq!(kv.key(1), "second");
        assert_eq!(KeyedValues::value(&kv, 0), Some(1.5));
        assert_eq!(KeyedValues::value(&kv, 1), None);
        let pairs: Vec<_> = kv.iter().collect();
        assert_eq!(pairs[0], (&"first".to_string(), Some(1.5)));
    }
}
