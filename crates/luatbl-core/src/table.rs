//! The `LuaTable` document type: a value tree with load/dump entry points,
//! file wrappers, bridge wrappers, and restricted indexed access.

use std::path::Path;

use crate::bridge::{from_json, key_string, to_json};
use crate::decoder::decode;
use crate::encoder::encode;
use crate::error::LuaError;
use crate::value::{Key, Table, Value};

/// A parsed table document. Starts empty; `load` replaces the content
/// atomically, so a failed parse leaves the previous state untouched.
#[derive(Debug, Clone)]
pub struct LuaTable {
    root: Value,
}

impl Default for LuaTable {
    fn default() -> Self {
        LuaTable {
            root: Value::empty_table(),
        }
    }
}

impl LuaTable {
    pub fn new() -> Self {
        LuaTable::default()
    }

    /// Parse one table literal and install it as the document content.
    /// On error the previous content is kept.
    pub fn load(&mut self, text: &str) -> Result<(), LuaError> {
        let root = decode(text)?;
        self.root = root;
        Ok(())
    }

    /// Render the current content as canonical literal text.
    pub fn dump(&self) -> String {
        encode(&self.root)
    }

    /// `load` from a file. IO errors pass through untranslated.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), LuaError> {
        let text = std::fs::read_to_string(path)?;
        self.load(&text)
    }

    /// `dump` to a file, truncating and overwriting an existing one.
    pub fn dump_file(&self, path: impl AsRef<Path>) -> Result<(), LuaError> {
        std::fs::write(path, self.dump())?;
        Ok(())
    }

    /// Replace the content from a host container (see [`from_json`]).
    pub fn load_value(&mut self, json: &serde_json::Value) {
        self.root = from_json(json);
    }

    /// The content as a host container; a fresh deep copy every call.
    pub fn dump_value(&self) -> serde_json::Value {
        to_json(&self.root)
    }

    /// Borrow the decoded value tree.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Look up a top-level entry. Sequence roots index 1-based with integer
    /// keys; mapping roots look keys up directly.
    pub fn get(&self, key: impl Into<Key>) -> Result<Value, LuaError> {
        let key = key.into();
        let found = match &self.root {
            Value::Table(Table::Seq(items)) => match &key {
                Key::Int(i) if *i >= 1 && (*i as usize) <= items.len() => {
                    Some(items[*i as usize - 1].clone())
                }
                _ => None,
            },
            Value::Table(Table::Map(map)) => map.get(&key).cloned(),
            _ => None,
        };
        found.ok_or_else(|| LuaError::KeyNotFound(key_string(&key)))
    }

    /// Set a top-level entry. Only number and string keys with non-nil
    /// values are accepted; anything else is a silent no-op, matching the
    /// nil-drop philosophy of the bridge. On a sequence root an integer key
    /// within `1..=len` replaces that element and `len + 1` appends.
    pub fn set(&mut self, key: impl Into<Key>, value: Value) {
        if value.is_nil() {
            return;
        }
        let key = key.into();
        match &mut self.root {
            // An empty table is shapeless; the first keyed set turns it
            // into a mapping.
            Value::Table(Table::Seq(items)) if items.is_empty() => {
                let mut map = crate::value::Map::new();
                map.insert(key, value);
                self.root = Value::Table(Table::Map(map));
            }
            Value::Table(Table::Seq(items)) => {
                if let Key::Int(i) = key {
                    if i >= 1 && (i as usize) <= items.len() {
                        items[i as usize - 1] = value;
                    } else if i as usize == items.len() + 1 {
                        items.push(value);
                    }
                }
            }
            Value::Table(Table::Map(map)) => map.insert(key, value),
            _ => {}
        }
    }

    /// Apply `set` for each entry of a JSON object, like a dict update.
    /// Null entries and non-object arguments are ignored.
    pub fn update(&mut self, entries: &serde_json::Value) {
        if let serde_json::Value::Object(obj) = entries {
            for (key, value) in obj {
                if value.is_null() {
                    continue;
                }
                self.set(key.as_str(), from_json(value));
            }
        }
    }
}
