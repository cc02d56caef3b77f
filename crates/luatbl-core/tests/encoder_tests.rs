use luatbl_core::{decode, encode, Key, Number, Table, Value};

fn int(i: i64) -> Value {
    Value::Number(Number::Int(i))
}

fn float(f: f64) -> Value {
    Value::Number(Number::Float(f))
}

fn text(s: &str) -> Value {
    Value::Str(s.to_string())
}

fn seq(items: Vec<Value>) -> Value {
    Value::Table(Table::Seq(items))
}

fn map(entries: Vec<(Key, Value)>) -> Value {
    Value::Table(Table::Map(entries.into_iter().collect()))
}

fn skey(s: &str) -> Key {
    Key::Str(s.to_string())
}

// ============================================================================
// Sequences
// ============================================================================

#[test]
fn encode_empty_table() {
    assert_eq!(encode(&seq(vec![])), "{}");
}

#[test]
fn encode_sequence_on_one_line() {
    assert_eq!(encode(&seq(vec![int(1), int(2), int(3)])), "{ 1, 2, 3 }");
}

#[test]
fn encode_sequence_of_scalars() {
    assert_eq!(
        encode(&seq(vec![Value::Bool(true), Value::Bool(false), Value::Nil])),
        "{ true, false, nil }"
    );
}

#[test]
fn encode_nested_sequences() {
    assert_eq!(
        encode(&seq(vec![int(1), seq(vec![int(2), int(3)])])),
        "{ 1, { 2, 3 } }"
    );
}

// ============================================================================
// Mappings and indentation
// ============================================================================

#[test]
fn encode_flat_mapping() {
    assert_eq!(
        encode(&map(vec![(skey("a"), int(1)), (skey("b"), int(2))])),
        "{\n    ['a'] = 1,\n    ['b'] = 2\n}"
    );
}

#[test]
fn encode_integer_key() {
    assert_eq!(encode(&map(vec![(Key::Int(1), int(5))])), "{\n    [1] = 5\n}");
}

#[test]
fn encode_nested_mapping_indents_four_spaces() {
    let value = map(vec![(skey("a"), map(vec![(skey("b"), int(2))]))]);
    assert_eq!(
        encode(&value),
        "{\n    ['a'] = {\n        ['b'] = 2\n    }\n}"
    );
}

#[test]
fn encode_sequence_inside_mapping() {
    assert_eq!(
        encode(&map(vec![(skey("a"), seq(vec![int(1), int(2)]))])),
        "{\n    ['a'] = { 1, 2 }\n}"
    );
}

#[test]
fn encode_mapping_inside_sequence() {
    assert_eq!(
        encode(&seq(vec![map(vec![(skey("a"), int(1))])])),
        "{ {\n    ['a'] = 1\n} }"
    );
}

#[test]
fn encode_empty_mapping_as_braces() {
    // An empty mapping (only reachable through the bridge) renders the
    // same as an empty sequence.
    let empty = luatbl_core::from_json(&serde_json::json!({}));
    assert_eq!(encode(&empty), "{}");
}

#[test]
fn encode_mapping_after_nil_drop() {
    assert_eq!(
        encode(&decode("{x=nil, [1]=1}").unwrap()),
        "{\n    [1] = 1\n}"
    );
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn encode_plain_string_single_quoted() {
    assert_eq!(encode(&text("hello")), "'hello'");
}

#[test]
fn encode_double_quoted_input_reencodes_single_quoted() {
    assert_eq!(encode(&decode("{\"hi\"}").unwrap()), "{ 'hi' }");
}

#[test]
fn encode_newline_escape() {
    assert_eq!(encode(&text("a\nb")), r"'a\nb'");
}

#[test]
fn encode_full_escape_table() {
    assert_eq!(
        encode(&text("\u{7}\u{8}\u{c}\r\t\u{b}\\")),
        r"'\a\b\f\r\t\v\\'"
    );
}

#[test]
fn encode_apostrophe_escaped() {
    assert_eq!(encode(&text("it's")), r"'it\'s'");
}

#[test]
fn encode_double_quote_unescaped() {
    assert_eq!(encode(&text(r#"say "hi""#)), r#"'say "hi"'"#);
}

#[test]
fn encode_control_char_as_decimal() {
    assert_eq!(encode(&text("\u{1}")), r"'\1'");
}

#[test]
fn encode_non_ascii_as_decimal() {
    // U+00E9, decimal 233
    assert_eq!(encode(&text("café")), r"'caf\233'");
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn encode_integers() {
    assert_eq!(encode(&int(42)), "42");
    assert_eq!(encode(&int(-7)), "-7");
}

#[test]
fn encode_floats_keep_fraction_marker() {
    assert_eq!(encode(&float(3.14)), "3.14");
    assert_eq!(encode(&float(1.0)), "1.0");
}

#[test]
fn encode_hex_input_as_decimal() {
    assert_eq!(encode(&decode("{0x1F}").unwrap()), "{ 31 }");
}

// ============================================================================
// Idempotence and canonical form
// ============================================================================

#[test]
fn encode_is_idempotent_over_decode() {
    let inputs = [
        "{ 1, 2, 3 }",
        "{\n    ['a'] = 1,\n    ['b'] = { 1, 2 }\n}",
        "{ 'a\\nb', nil, true }",
    ];
    for input in inputs {
        let once = encode(&decode(input).unwrap());
        let twice = encode(&decode(&once).unwrap());
        assert_eq!(once, twice, "non-canonical output for {input}");
    }
}

#[test]
fn encode_normalizes_layout() {
    assert_eq!(encode(&decode("{1 ,  2,3 ,}").unwrap()), "{ 1, 2, 3 }");
    assert_eq!(
        encode(&decode("{b='x';a=1}").unwrap()),
        "{\n    ['b'] = 'x',\n    ['a'] = 1\n}"
    );
}
