//! Recursive-descent parser for table literals.
//!
//! Grammar:
//!
//! ```text
//! table    := '{' [ fieldlist ] '}'
//! fieldlist:= field { fieldsep field } [ fieldsep ]
//! fieldsep := ',' | ';'
//! field    := '[' exp ']' '=' exp | Name '=' exp | exp
//! exp      := nil | true | false | Number | String | table
//! ```
//!
//! # Key design decisions
//!
//! - **Seq vs Map**: a table with no surviving explicit key decodes to a
//!   sequence; one explicit key makes it a mapping, even if other fields
//!   were positional.
//! - **Shadow omission**: an explicit integer key strictly less than the
//!   current positional counter drops the field silently instead of
//!   overwriting. Kept for compatibility with existing data.
//! - **Depth bound**: nesting is limited by an explicit counter so
//!   adversarial input cannot exhaust the thread stack.
//! - **Whole-input consumption**: trailing text after the closing brace is
//!   an error; the caller installs the result only on full success.

use crate::cursor::Cursor;
use crate::error::{ParseError, Result};
use crate::token::{classify, Token};
use crate::value::{Key, Map, Number, Table, Value};

/// Maximum table nesting depth before a parse fails with `TooDeep`.
pub const MAX_DEPTH: usize = 256;

/// Parse exactly one top-level table literal. Leading and trailing
/// whitespace is trimmed first; an empty input decodes to an empty table.
pub fn decode(text: &str) -> Result<Value> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Value::empty_table());
    }
    let mut cur = Cursor::new(trimmed);
    let table = parse_table(&mut cur, 0)?;
    cur.skip_insignificant()?;
    if cur.peek().is_some() {
        return Err(ParseError::UnrecognizedToken(
            cur.read_raw_lexeme().to_string(),
        ));
    }
    Ok(table)
}

/// One parsed field, before positional keys are assigned.
enum Field {
    Positional(Value),
    Keyed(Key, Value),
}

fn parse_table(cur: &mut Cursor, depth: usize) -> Result<Value> {
    if depth >= MAX_DEPTH {
        return Err(ParseError::TooDeep);
    }
    cur.skip_insignificant()?;
    match cur.peek() {
        Some('{') => cur.advance()?,
        Some(_) => {
            return Err(ParseError::MissingOpenBrace(
                cur.read_raw_lexeme().to_string(),
            ))
        }
        None => return Err(ParseError::UnexpectedEnd),
    }
    cur.skip_insignificant()?;
    if cur.peek() == Some('}') {
        cur.advance()?;
        return Ok(Value::empty_table());
    }

    let table = parse_field_list(cur, depth)?;

    cur.skip_insignificant()?;
    match cur.peek() {
        Some('}') => cur.advance()?,
        Some(_) => {
            return Err(ParseError::MissingCloseBrace(
                cur.read_raw_lexeme().to_string(),
            ))
        }
        None => return Err(ParseError::UnexpectedEnd),
    }
    Ok(table)
}

/// Parse fields until the closing brace, assigning positional keys from 1
/// and applying the shadow-omission and nil-drop rules.
fn parse_field_list(cur: &mut Cursor, depth: usize) -> Result<Value> {
    let mut map = Map::new();
    let mut next_index: i64 = 1;
    let mut has_explicit_key = false;

    loop {
        match parse_field(cur, depth)? {
            Field::Positional(value) => {
                map.insert(Key::Int(next_index), value);
                next_index += 1;
            }
            Field::Keyed(key, value) => {
                // A stale integer key or a nil value drops the field
                // entirely; it neither overwrites nor errors.
                let stale = matches!(key, Key::Int(i) if i < next_index);
                if !stale && !value.is_nil() {
                    has_explicit_key = true;
                    map.insert(key, value);
                }
            }
        }
        if !has_next_field(cur)? {
            break;
        }
    }

    if has_explicit_key {
        map.purge_nil();
        Ok(Value::Table(Table::Map(map)))
    } else {
        // Positional nils survive in sequences; the purge is mapping-only.
        Ok(Value::Table(Table::Seq(map.into_values())))
    }
}

/// Consume a field separator if present. `true` means another field
/// follows; `false` means the list is done (closing brace next, possibly
/// after a trailing separator).
fn has_next_field(cur: &mut Cursor) -> Result<bool> {
    cur.skip_insignificant()?;
    match cur.peek() {
        Some(',') | Some(';') => {
            cur.advance()?;
            cur.skip_insignificant()?;
            match cur.peek() {
                Some('}') | None => Ok(false),
                Some(_) => Ok(true),
            }
        }
        Some('}') => Ok(false),
        Some(_) => Err(ParseError::MissingSeparator(
            cur.read_raw_lexeme().to_string(),
        )),
        None => Err(ParseError::UnexpectedEnd),
    }
}

fn parse_field(cur: &mut Cursor, depth: usize) -> Result<Field> {
    cur.skip_insignificant()?;
    match cur.peek() {
        None => Err(ParseError::UnexpectedEnd),
        Some('[') => {
            // A long-bracket opener here is a string literal, not an index.
            if let Some(raw) = cur.try_read_long_bracketed_string()? {
                cur.skip_insignificant()?;
                if cur.peek() == Some('=') {
                    return Err(ParseError::InvalidKeyType("string"));
                }
                return Ok(Field::Positional(Value::Str(raw.to_string())));
            }
            cur.advance()?;
            let key = parse_index(cur, depth)?;
            cur.skip_insignificant()?;
            match cur.peek() {
                Some('=') => cur.advance()?,
                Some(_) => {
                    return Err(ParseError::MissingEquals(
                        cur.read_raw_lexeme().to_string(),
                    ))
                }
                None => return Err(ParseError::UnexpectedEnd),
            }
            let value = parse_value(cur, depth)?;
            Ok(Field::Keyed(key, value))
        }
        Some('{') => Ok(Field::Positional(parse_table(cur, depth + 1)?)),
        Some('\'') | Some('"') => {
            let s = cur.read_quoted_string()?;
            cur.skip_insignificant()?;
            if cur.peek() == Some('=') {
                return Err(ParseError::InvalidKeyType("string"));
            }
            Ok(Field::Positional(Value::Str(s)))
        }
        Some(_) => {
            let lexeme = cur.read_delimited_lexeme(&['=', ',', ';', '}'])?;
            if lexeme.is_empty() {
                return Err(ParseError::UnrecognizedToken(
                    cur.read_raw_lexeme().to_string(),
                ));
            }
            cur.skip_insignificant()?;
            if cur.peek() == Some('=') {
                let name = match classify(lexeme)? {
                    Token::Name(name) => name,
                    Token::Number(_) => return Err(ParseError::InvalidKeyType("number")),
                    Token::Str(_) => return Err(ParseError::InvalidKeyType("string")),
                    Token::Bool(_) => return Err(ParseError::InvalidKeyType("boolean")),
                    Token::Nil => return Err(ParseError::InvalidKeyType("nil")),
                };
                cur.advance()?;
                let value = parse_value(cur, depth)?;
                Ok(Field::Keyed(Key::Str(name), value))
            } else {
                Ok(Field::Positional(token_value(classify(lexeme)?)?))
            }
        }
    }
}

/// Parse the expression inside `[` ... `]`. Only numbers and strings are
/// valid keys; everything else names its kind in the error.
fn parse_index(cur: &mut Cursor, depth: usize) -> Result<Key> {
    cur.skip_insignificant()?;
    match cur.peek() {
        None => Err(ParseError::UnexpectedEnd),
        Some('{') => {
            parse_table(cur, depth + 1)?;
            Err(ParseError::InvalidKeyType("table"))
        }
        Some('\'') | Some('"') => {
            let s = cur.read_quoted_string()?;
            expect_close_bracket(cur)?;
            Ok(Key::Str(s))
        }
        Some(_) => {
            if cur.peek() == Some('[') {
                if let Some(raw) = cur.try_read_long_bracketed_string()? {
                    expect_close_bracket(cur)?;
                    return Ok(Key::Str(raw.to_string()));
                }
            }
            let lexeme = cur.read_delimited_lexeme(&[']'])?;
            if lexeme.is_empty() {
                return Err(ParseError::UnrecognizedToken(
                    cur.read_raw_lexeme().to_string(),
                ));
            }
            let token = classify(lexeme)?;
            expect_close_bracket(cur)?;
            match token {
                Token::Number(Number::Int(i)) => Ok(Key::Int(i)),
                Token::Number(Number::Float(f)) => Ok(Key::Float(f)),
                Token::Str(s) => Ok(Key::Str(s)),
                Token::Nil => Err(ParseError::InvalidKeyType("nil")),
                Token::Bool(_) => Err(ParseError::InvalidKeyType("boolean")),
                Token::Name(_) => Err(ParseError::InvalidKeyType("name")),
            }
        }
    }
}

fn expect_close_bracket(cur: &mut Cursor) -> Result<()> {
    cur.skip_insignificant()?;
    match cur.peek() {
        Some(']') => {
            cur.advance()?;
            Ok(())
        }
        Some(_) => Err(ParseError::MissingCloseBracket(
            cur.read_raw_lexeme().to_string(),
        )),
        None => Err(ParseError::UnexpectedEnd),
    }
}

/// Parse a value expression: nested table, string, or classified lexeme.
fn parse_value(cur: &mut Cursor, depth: usize) -> Result<Value> {
    cur.skip_insignificant()?;
    match cur.peek() {
        None => Err(ParseError::UnexpectedEnd),
        Some('{') => parse_table(cur, depth + 1),
        Some('\'') | Some('"') => Ok(Value::Str(cur.read_quoted_string()?)),
        Some(_) => {
            if cur.peek() == Some('[') {
                if let Some(raw) = cur.try_read_long_bracketed_string()? {
                    return Ok(Value::Str(raw.to_string()));
                }
            }
            let lexeme = cur.read_delimited_lexeme(&[',', ';', '}'])?;
            if lexeme.is_empty() {
                return Err(ParseError::UnrecognizedToken(
                    cur.read_raw_lexeme().to_string(),
                ));
            }
            token_value(classify(lexeme)?)
        }
    }
}

/// A classified lexeme in value position. Bare names are not values; only
/// the keyword literals are (and those classify as their own tokens).
fn token_value(token: Token) -> Result<Value> {
    match token {
        Token::Name(name) => Err(ParseError::NameAsValue(name)),
        Token::Number(n) => Ok(Value::Number(n)),
        Token::Str(s) => Ok(Value::Str(s)),
        Token::Bool(b) => Ok(Value::Bool(b)),
        Token::Nil => Ok(Value::Nil),
    }
}
