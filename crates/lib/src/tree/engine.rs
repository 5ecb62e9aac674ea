//! Path-addressed operations over [`Map`] trees.
//!
//! Every operation tokenizes its path into a segment stack and walks the
//! tree recursively, consuming one segment per level. The read operations
//! borrow; the mutating operations take `&self` and return a freshly built
//! root, so the input tree is never modified and unmodified siblings are
//! carried over by clone. All of them resolve type conflicts by policy
//! rather than by erroring:
//!
//! - a position that should be a map but holds something else is
//!   non-traversable: `fetch` substitutes the default, `ping` reports
//!   `false`, `exclude` leaves the tree alone, and `extend` overwrites the
//!   value with a fresh map (or a fresh list at a trailing-dot append);
//! - a missing key behaves the same as a non-traversable one.
//!
//! `extend` and `normalize` are mutually recursive: `normalize` explodes
//! dotted keys through `extend`, and `extend` normalizes any map it stores
//! at a final segment so inserted subtrees are always in canonical form.

use tracing::warn;

use super::{list::List, map::Map, path::Path, value::Value};
use crate::constants::MAX_PATH_SEGMENTS;
use crate::tree::TreeError;

impl Map {
    /// Reads the value at `path`, or `default` when the path does not
    /// resolve.
    ///
    /// The empty path is the whole tree: it returns `self` wrapped in
    /// [`Value::Map`]. A path whose final segment is blank (empty or
    /// all-whitespace, as produced by a trailing dot) addresses the node
    /// reached so far rather than a key inside it, so `"a."` fetches the
    /// same value as `"a"`.
    ///
    /// A missing key and a non-map value in the middle of the path both
    /// yield `default`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dotpath::{Map, Value};
    /// let tree = Map::new().with("a", Map::new().with("b", 2));
    ///
    /// assert_eq!(tree.fetch("a.b", 0), 2);
    /// assert_eq!(tree.fetch("a.x", 0), 0); // missing key
    /// assert_eq!(tree.fetch("a.b.c", 0), 0); // cannot descend into 2
    /// assert_eq!(tree.fetch("", Value::Null), Value::Map(tree.clone()));
    /// ```
    pub fn fetch(&self, path: impl AsRef<Path>, default: impl Into<Value>) -> Value {
        let path = path.as_ref();
        if path.is_empty() {
            return Value::Map(self.clone());
        }
        let default = default.into();
        let segments: Vec<&str> = path.segments().collect();
        if segments.len() > MAX_PATH_SEGMENTS {
            warn!(%path, limit = MAX_PATH_SEGMENTS, "path exceeds segment limit, substituting default");
            return default;
        }
        let Some((current, rest)) = segments.split_first() else {
            return Value::Map(self.clone());
        };
        if current.trim().is_empty() && rest.is_empty() {
            // a lone blank segment addresses the tree itself
            return Value::Map(self.clone());
        }
        let found = match self.get(current) {
            Some(value) if !rest.is_empty() => capture(value, rest),
            found => found,
        };
        match found {
            Some(value) => value.clone(),
            None => default,
        }
    }

    /// Borrowing variant of [`Map::fetch`]: returns a reference to the
    /// value at `path`, or `None` when the path does not resolve.
    ///
    /// Unlike `fetch`, the empty path and the lone blank segment return
    /// `None` — the tree root is not itself stored as a [`Value`] and has
    /// nothing to borrow.
    pub fn fetch_ref(&self, path: impl AsRef<Path>) -> Option<&Value> {
        let path = path.as_ref();
        if path.is_empty() {
            return None;
        }
        let segments: Vec<&str> = path.segments().collect();
        if segments.len() > MAX_PATH_SEGMENTS {
            warn!(%path, limit = MAX_PATH_SEGMENTS, "path exceeds segment limit");
            return None;
        }
        let (current, rest) = segments.split_first()?;
        if current.trim().is_empty() && rest.is_empty() {
            return None;
        }
        match self.get(current) {
            Some(value) if !rest.is_empty() => capture(value, rest),
            found => found,
        }
    }

    /// Reads the value at `path` with typed extraction.
    ///
    /// Returns `Some(T)` when the path resolves and the value has the
    /// requested shape, `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dotpath::Map;
    /// let tree = Map::new().with("user", Map::new().with("name", "Alice"));
    ///
    /// assert_eq!(tree.fetch_as::<&str>("user.name"), Some("Alice"));
    /// assert_eq!(tree.fetch_as::<i64>("user.name"), None); // wrong type
    /// assert_eq!(tree.fetch_as::<i64>("user.age"), None); // missing
    /// ```
    pub fn fetch_as<'a, T>(&'a self, path: impl AsRef<Path>) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = TreeError>,
    {
        let value = self.fetch_ref(path)?;
        T::try_from(value).ok()
    }

    /// Checks whether `path` resolves to a present entry.
    ///
    /// The empty path is never present. Every segment, the final one
    /// included, must exist as a key in a map along the way; blank
    /// segments get no special treatment here, so a trailing-dot path is
    /// present only if a literal `""` key exists.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dotpath::Map;
    /// let tree = Map::new().with("a", Map::new().with("b", 2));
    ///
    /// assert!(tree.ping("a"));
    /// assert!(tree.ping("a.b"));
    /// assert!(!tree.ping("a.x"));
    /// assert!(!tree.ping("a.b.c")); // 2 is not traversable
    /// assert!(!tree.ping(""));
    /// ```
    pub fn ping(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        if path.is_empty() {
            return false;
        }
        let segments: Vec<&str> = path.segments().collect();
        if segments.len() > MAX_PATH_SEGMENTS {
            warn!(%path, limit = MAX_PATH_SEGMENTS, "path exceeds segment limit");
            return false;
        }
        probe(self, &segments)
    }

    /// Writes `value` at `path`, returning the new tree.
    ///
    /// The path is built on demand: missing intermediate levels become
    /// empty maps, and existing non-map intermediates are overwritten with
    /// fresh maps. A map stored at the final segment is normalized first,
    /// so dotted keys inside an inserted subtree are exploded before
    /// storage.
    ///
    /// A blank final segment (trailing dot) requests a list append at the
    /// addressed position instead of a keyed write: an existing list gains
    /// the value at its end, anything else is replaced by a fresh
    /// single-element list. Because the tree root is a map, an append
    /// addressed at the root itself (the empty or all-blank path) cannot
    /// be represented and leaves the tree unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dotpath::{Map, Value};
    /// let tree = Map::new().extend("a.b", 5);
    /// assert_eq!(tree.fetch("a.b", 0), 5);
    ///
    /// // trailing-dot append
    /// let tree = Map::new()
    ///     .with("items", vec![1, 2])
    ///     .extend("items.", 3);
    /// assert_eq!(tree.fetch("items", Value::Null), Value::from(vec![1, 2, 3]));
    /// ```
    pub fn extend(&self, path: impl AsRef<Path>, value: impl Into<Value>) -> Map {
        let path = path.as_ref();
        let value = value.into();
        let segments: Vec<&str> = path.segments().collect();
        if segments.len() > MAX_PATH_SEGMENTS {
            warn!(%path, limit = MAX_PATH_SEGMENTS, "path exceeds segment limit, returning tree unchanged");
            return self.clone();
        }
        let Some((current, rest)) = segments.split_first() else {
            return self.clone();
        };
        if current.trim().is_empty() && rest.is_empty() {
            warn!(%path, "cannot list-append at the tree root, returning tree unchanged");
            return self.clone();
        }
        implant_into(self.clone(), current, rest, &value)
    }

    /// Ensures `path` denotes a map, returning the new tree.
    ///
    /// Equivalent to `extend(path, Map::new())`: missing levels are
    /// created, and whatever currently sits at the final segment is
    /// overwritten with an empty map. Idempotent.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dotpath::{Map, Value};
    /// let tree = Map::new().touch("a.b");
    /// assert_eq!(tree.fetch("a.b", Value::Null), Value::Map(Map::new()));
    /// ```
    pub fn touch(&self, path: impl AsRef<Path>) -> Map {
        self.extend(path, Map::new())
    }

    /// Removes the entry at `path`, returning the new tree.
    ///
    /// Removing an absent path is a no-op, as is a path that would have to
    /// descend through a non-map value; `exclude` is therefore idempotent
    /// and safe to call repeatedly.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dotpath::Map;
    /// let tree = Map::new().with("a", Map::new().with("b", 5).with("c", 6));
    ///
    /// let pruned = tree.exclude("a.b");
    /// assert!(!pruned.ping("a.b"));
    /// assert_eq!(pruned.fetch("a.c", 0), 6);
    ///
    /// assert_eq!(pruned.exclude("a.b"), pruned); // already gone
    /// ```
    pub fn exclude(&self, path: impl AsRef<Path>) -> Map {
        let path = path.as_ref();
        let segments: Vec<&str> = path.segments().collect();
        if segments.len() > MAX_PATH_SEGMENTS {
            warn!(%path, limit = MAX_PATH_SEGMENTS, "path exceeds segment limit, returning tree unchanged");
            return self.clone();
        }
        destroy(self, &segments)
    }

    /// Rewrites the tree so no key contains a dot, returning the new tree.
    ///
    /// Keys containing `.` are treated as paths and exploded into nested
    /// structure through [`Map::extend`]; all other keys keep their values
    /// (maps normalized recursively, everything else untouched — lists
    /// pass through as-is). Sibling keys are never dropped or reordered:
    /// explosion only adds nested structure next to the non-dotted
    /// siblings. A dotted key with more segments than
    /// [`MAX_PATH_SEGMENTS`](crate::constants::MAX_PATH_SEGMENTS) cannot be
    /// exploded and is kept verbatim rather than lost. Idempotent.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dotpath::Map;
    /// let flat = Map::new().with("a.b.c", 1).with("d", 2);
    /// let nested = flat.normalize();
    ///
    /// assert_eq!(nested.fetch("a.b.c", 0), 1);
    /// assert_eq!(nested.fetch("d", 0), 2);
    /// assert_eq!(nested.normalize(), nested);
    /// ```
    pub fn normalize(&self) -> Map {
        let mut out = Map::new();
        for (key, value) in self.iter() {
            if !key.contains('.') {
                out.insert(key, normalized(value));
            } else if Path::new(key).segment_count() > MAX_PATH_SEGMENTS {
                warn!(key, limit = MAX_PATH_SEGMENTS, "key exceeds segment limit, kept verbatim");
                out.insert(key, normalized(value));
            } else {
                out = out.extend(key, value.clone());
            }
        }
        out
    }
}

/// Recursive lookup: `None` means "does not resolve, use the default".
fn capture<'a>(inbound: &'a Value, stack: &[&str]) -> Option<&'a Value> {
    let (current, rest) = stack.split_first()?;
    if current.trim().is_empty() && rest.is_empty() {
        return Some(inbound);
    }
    let Value::Map(map) = inbound else {
        return None;
    };
    match map.get(current) {
        Some(value) if !rest.is_empty() => capture(value, rest),
        found => found,
    }
}

/// Recursive presence check over a map level.
fn probe(map: &Map, stack: &[&str]) -> bool {
    let Some((current, rest)) = stack.split_first() else {
        return false;
    };
    match map.get(current) {
        None => false,
        Some(_) if rest.is_empty() => true,
        Some(Value::Map(child)) => probe(child, rest),
        Some(_) => false,
    }
}

/// Recursive implant of `value` below an arbitrary position.
fn implant(inbound: &Value, stack: &[&str], value: &Value) -> Value {
    let Some((current, rest)) = stack.split_first() else {
        return inbound.clone();
    };
    if current.trim().is_empty() && rest.is_empty() {
        // trailing-dot append: this position is a list
        let mut items = match inbound {
            Value::List(list) => list.clone(),
            _ => List::new(),
        };
        items.push(value.clone());
        return Value::List(items);
    }
    let map = match inbound {
        Value::Map(map) => map.clone(),
        _ => Map::new(),
    };
    Value::Map(implant_into(map, current, rest, value))
}

/// Keyed-write step of the implant: one map level, already split.
fn implant_into(mut map: Map, current: &str, rest: &[&str], value: &Value) -> Map {
    if rest.is_empty() {
        let stored = match value {
            Value::Map(inner) => Value::Map(inner.normalize()),
            other => other.clone(),
        };
        map.insert(current, stored);
        return map;
    }
    let next = map
        .get(current)
        .cloned()
        .unwrap_or_else(|| Value::Map(Map::new()));
    let child = implant(&next, rest, value);
    map.insert(current, child);
    map
}

/// Recursive removal over a map level.
fn destroy(map: &Map, stack: &[&str]) -> Map {
    let Some((current, rest)) = stack.split_first() else {
        return map.clone();
    };
    let mut out = map.clone();
    if rest.is_empty() {
        out.remove(current);
        return out;
    }
    if let Some(Value::Map(child)) = map.get(current) {
        out.insert(*current, Value::Map(destroy(child, rest)));
    }
    out
}

/// Value hook of the normalize pass: maps recurse, everything else is
/// carried over unchanged.
fn normalized(value: &Value) -> Value {
    match value {
        Value::Map(map) => Value::Map(map.normalize()),
        other => other.clone(),
    }
}
