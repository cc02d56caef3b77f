//! Canonical serializer — walks a value tree and emits table-literal text.
//!
//! The output form is fixed regardless of how the input was written:
//!
//! - Sequence tables on one line: `{ 1, 2, 3 }`; empty tables as `{}`.
//! - Mapping tables one entry per line as `[key] = value`, indented four
//!   spaces per nesting level.
//! - Strings always single-quoted, re-escaped with the canonical table;
//!   characters outside printable ASCII become `\ddd` decimal escapes.

use crate::value::{Key, Map, Number, Table, Value};

const INDENT_STEP: usize = 4;

/// Render a value tree as canonical literal text. Pure; idempotent for any
/// tree that came out of [`decode`](crate::decode).
pub fn encode(value: &Value) -> String {
    let mut out = String::new();
    encode_value(value, 0, &mut out);
    out
}

fn encode_value(value: &Value, indent: usize, out: &mut String) {
    match value {
        Value::Nil => out.push_str("nil"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => out.push_str(&format_number(*n)),
        Value::Str(s) => encode_string(s, out),
        Value::Table(Table::Seq(items)) => encode_seq(items, indent, out),
        Value::Table(Table::Map(map)) => encode_map(map, indent, out),
    }
}

/// `{ v1, v2, vn }` on one line, single space padding inside the braces.
fn encode_seq(items: &[Value], indent: usize, out: &mut String) {
    if items.is_empty() {
        out.push_str("{}");
        return;
    }
    out.push_str("{ ");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        encode_value(item, indent, out);
    }
    out.push_str(" }");
}

/// One `[key] = value` entry per line; the closing brace lines up with the
/// opening one. An empty mapping (reachable only through the bridge)
/// renders `{}`.
fn encode_map(map: &Map, indent: usize, out: &mut String) {
    if map.is_empty() {
        out.push_str("{}");
        return;
    }
    let inner = indent + INDENT_STEP;
    out.push_str("{\n");
    let last = map.len() - 1;
    for (i, (key, value)) in map.iter().enumerate() {
        for _ in 0..inner {
            out.push(' ');
        }
        out.push('[');
        encode_key(key, out);
        out.push_str("] = ");
        encode_value(value, inner, out);
        if i < last {
            out.push(',');
        }
        out.push('\n');
    }
    for _ in 0..indent {
        out.push(' ');
    }
    out.push('}');
}

fn encode_key(key: &Key, out: &mut String) {
    match key {
        Key::Int(i) => out.push_str(&i.to_string()),
        Key::Float(f) => out.push_str(&format_number(Number::Float(*f))),
        Key::Str(s) => encode_string(s, out),
    }
}

/// Integers via plain display; floats via `{:?}` so a fractional marker is
/// kept (`1.0`, not `1`) and the literal re-parses as a float.
fn format_number(n: Number) -> String {
    match n {
        Number::Int(i) => i.to_string(),
        Number::Float(f) => format!("{f:?}"),
    }
}

/// Always single-quoted. The escape table is the reverse of the decoder's;
/// anything outside printable ASCII is emitted as a decimal `\ddd` escape
/// with no fixed width.
fn encode_string(s: &str, out: &mut String) {
    out.push('\'');
    for c in s.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\u{7}' => out.push_str("\\a"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{b}' => out.push_str("\\v"),
            c if (' '..='~').contains(&c) => out.push(c),
            c => {
                out.push('\\');
                out.push_str(&(c as u32).to_string());
            }
        }
    }
    out.push('\'');
}
