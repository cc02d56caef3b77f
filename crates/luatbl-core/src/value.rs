//! The decoded value model for Lua table literals.
//!
//! Tables come in two shapes: a `Seq` for literals with only positional
//! fields, and a `Map` for literals with at least one explicit key. The map
//! keeps insertion order (a plain `Vec` of pairs, no hash map) so that
//! serialization output is deterministic and testable.

/// A decoded Lua value. Always a finite tree; the literal grammar cannot
/// express cycles or shared references.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Nil,
    Bool(bool),
    Number(Number),
    Str(String),
    Table(Table),
}

/// A Lua number. Integers and floats are kept distinct so that `0x1F` and
/// `31.0` round-trip to different literals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

/// The two decoded shapes of a table literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Table {
    /// Positional fields only. Conceptually 1-based; element `i` of the Vec
    /// holds the value at Lua index `i + 1`.
    Seq(Vec<Value>),
    /// At least one field used an explicit key.
    Map(Map),
}

/// A table key. Only numbers and strings survive as keys; nil, boolean, and
/// table keys are rejected or dropped during parsing and bridging.
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    Int(i64),
    Float(f64),
    Str(String),
}

impl Key {
    /// Key equality follows Lua: `1` and `1.0` are the same key.
    fn same(&self, other: &Key) -> bool {
        match (self, other) {
            (Key::Int(a), Key::Int(b)) => a == b,
            (Key::Float(a), Key::Float(b)) => a == b,
            (Key::Int(a), Key::Float(b)) | (Key::Float(b), Key::Int(a)) => *a as f64 == *b,
            (Key::Str(a), Key::Str(b)) => a == b,
            _ => false,
        }
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Key::Int(n)
    }
}

impl From<f64> for Key {
    fn from(n: f64) -> Self {
        Key::Float(n)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

/// An insertion-ordered map with unique keys. Overwriting an existing key
/// replaces the value in place, keeping the original position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Map {
    entries: Vec<(Key, Value)>,
}

impl Map {
    pub fn new() -> Self {
        Map::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or overwrite. An overwrite keeps the entry's original position.
    pub fn insert(&mut self, key: Key, value: Value) {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| k.same(&key)) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k.same(key))
            .map(|(_, v)| v)
    }

    /// Drop every entry whose value is nil. Assigning nil removes the key.
    pub fn purge_nil(&mut self) {
        self.entries.retain(|(_, v)| !matches!(v, Value::Nil));
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Key, Value)> {
        self.entries.iter()
    }

    /// The values in insertion order, discarding the keys.
    pub fn into_values(self) -> Vec<Value> {
        self.entries.into_iter().map(|(_, v)| v).collect()
    }
}

impl FromIterator<(Key, Value)> for Map {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        let mut map = Map::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl Value {
    /// An empty table decodes to an empty sequence.
    pub fn empty_table() -> Value {
        Value::Table(Table::Seq(Vec::new()))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Value::Table(t) => Some(t),
            _ => None,
        }
    }
}
