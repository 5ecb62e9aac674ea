//! Insertion-ordered map of string keys to values.

use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};

use super::value::{Value, write_json_string};

/// A string-keyed map of [`Value`]s with insertion order preserved.
///
/// `Map` is the tree root type and the branch type for nested structure:
/// a tree is a `Map` whose values are scalars, [`List`](super::List)s, or
/// further `Map`s. Iteration yields keys in first-insertion order;
/// overwriting a key keeps its position, and removing a key preserves the
/// order of the survivors. Equality compares entries in order.
///
/// Storage is a plain `Vec<(String, Value)>` with linear key lookup: the
/// trees this engine works on are small and shallow, and the ordering
/// guarantee matters more than lookup complexity.
///
/// The path-addressed operations (`fetch`, `ping`, `extend`, `touch`,
/// `exclude`, `normalize`) live in [the engine](Map::fetch) and never
/// mutate in place; the plain container operations below do.
///
/// # Examples
///
/// ```
/// # use dotpath::{Map, Value};
/// let mut map = Map::new();
/// map.insert("name", "Alice");
/// map.insert("age", 30);
///
/// assert_eq!(map.get("name"), Some(&Value::Text("Alice".to_string())));
/// assert_eq!(map.keys().collect::<Vec<_>>(), vec!["name", "age"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Map {
    entries: Vec<(String, Value)>,
}

impl Map {
    /// Creates a new empty map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the map contains `key` as a direct entry.
    ///
    /// This is a flat lookup; for dotted-path presence checks use
    /// [`Map::ping`].
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Gets a value by direct key (immutable reference).
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Gets a mutable reference to a value by direct key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Sets a value at a direct key, returning the old value if present.
    ///
    /// An existing key keeps its position; a new key is appended. The key
    /// is stored verbatim, dots included — [`Map::extend`] is the
    /// path-aware write.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Removes a direct key, returning its value if present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Returns an iterator over all key-value pairs, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns an iterator over all keys, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Returns an iterator over all values, in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Builder method to set a value and return self.
    ///
    /// ```
    /// # use dotpath::Map;
    /// let map = Map::new().with("name", "Alice").with("age", 30);
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Converts to a JSON string for human-readable output, keys in
    /// insertion order.
    ///
    /// ```
    /// # use dotpath::Map;
    /// let map = Map::new().with("b", 2).with("a", 1);
    /// assert_eq!(map.to_json_string(), r#"{"b":2,"a":1}"#);
    /// ```
    pub fn to_json_string(&self) -> String {
        let mut result = String::with_capacity(self.entries.len() * 16);
        result.push('{');
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                result.push(',');
            }
            write_json_string(key, &mut result);
            result.push(':');
            result.push_str(&value.to_json_string());
            first = false;
        }
        result.push('}');
        result
    }

    /// Parses a map from a JSON object string, keys in document order.
    ///
    /// # Errors
    /// Fails if the input is not a JSON object or contains numbers that do
    /// not fit an `i64` (floats are not representable, see [`Value`]).
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json).map_err(Into::into)
    }
}

impl Serialize for Map {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Map {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MapVisitor;

        impl<'de> Visitor<'de> for MapVisitor {
            type Value = Map;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string-keyed map")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Map, A::Error> {
                let mut out = Map::new();
                while let Some((key, value)) = access.next_entry::<String, Value>()? {
                    out.insert(key, value);
                }
                Ok(out)
            }
        }

        deserializer.deserialize_map(MapVisitor)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Map::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
            first = false;
        }
        write!(f, "}}")
    }
}
