//! Bridge between the decoded value tree and `serde_json::Value`, the
//! host-side interchange container.
//!
//! Both directions produce fresh, independent trees; nothing aliases the
//! document's internal state. The nil-drop rule applies on the way in:
//! object entries holding `null` vanish, the same way assigning nil removes
//! a key from a table. JSON objects can only carry string keys, so on the
//! way out integer and float keys render as their canonical decimal
//! strings.

use crate::value::{Key, Map, Number, Table, Value};

/// Convert a host container into a value tree.
pub fn from_json(json: &serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Nil,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => Value::Number(from_json_number(n)),
        serde_json::Value::String(s) => Value::Str(s.clone()),
        serde_json::Value::Array(items) => {
            Value::Table(Table::Seq(items.iter().map(from_json).collect()))
        }
        serde_json::Value::Object(obj) => {
            let mut map = Map::new();
            for (key, value) in obj {
                if value.is_null() {
                    continue;
                }
                map.insert(Key::Str(key.clone()), from_json(value));
            }
            Value::Table(Table::Map(map))
        }
    }
}

fn from_json_number(n: &serde_json::Number) -> Number {
    if let Some(i) = n.as_i64() {
        return Number::Int(i);
    }
    if let Some(u) = n.as_u64() {
        // beyond i64 range; degrade to float
        return Number::Float(u as f64);
    }
    Number::Float(n.as_f64().unwrap_or(0.0))
}

/// Convert a value tree into a host container. Deep copy every call.
pub fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Nil => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(Number::Int(i)) => serde_json::Value::Number((*i).into()),
        Value::Number(Number::Float(f)) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Str(s) => serde_json::Value::String(s.clone()),
        Value::Table(Table::Seq(items)) => {
            serde_json::Value::Array(items.iter().map(to_json).collect())
        }
        Value::Table(Table::Map(map)) => {
            let mut obj = serde_json::Map::new();
            for (key, value) in map.iter() {
                obj.insert(key_string(key), to_json(value));
            }
            serde_json::Value::Object(obj)
        }
    }
}

/// The canonical string form of a map key for the JSON side.
pub(crate) fn key_string(key: &Key) -> String {
    match key {
        Key::Int(i) => i.to_string(),
        Key::Float(f) => format!("{f:?}"),
        Key::Str(s) => s.clone(),
    }
}
