//! Lexeme classification.
//!
//! A trimmed lexeme becomes exactly one of: the keyword literals `nil`,
//! `true`, `false`; a number; or a name. Anything else is an error. Tables
//! are never tokenized; the parser builds them recursively.

use crate::error::{ParseError, Result};
use crate::value::Number;

/// A classified lexeme. Transient; only the parser sees these.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Name(String),
    Number(Number),
    Str(String),
    Bool(bool),
    Nil,
}

/// The reserved words of the source language. None of them is a valid name.
const RESERVED: [&str; 21] = [
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "if", "in", "local",
    "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
];

/// Classify a trimmed lexeme into a token.
pub fn classify(lexeme: &str) -> Result<Token> {
    match lexeme {
        "nil" => return Ok(Token::Nil),
        "true" => return Ok(Token::Bool(true)),
        "false" => return Ok(Token::Bool(false)),
        _ => {}
    }
    if let Some(number) = try_parse_number(lexeme) {
        return Ok(Token::Number(number));
    }
    if is_name(lexeme) {
        return Ok(Token::Name(lexeme.to_string()));
    }
    Err(ParseError::UnrecognizedToken(lexeme.to_string()))
}

/// Numeric recognition: `0x`/`0X` lexemes of length >= 3 try hexadecimal
/// integer then hexadecimal float; everything falls through to decimal
/// integer then decimal float.
fn try_parse_number(s: &str) -> Option<Number> {
    if s.len() >= 3 && (s.starts_with("0x") || s.starts_with("0X")) {
        if let Ok(i) = i64::from_str_radix(&s[2..], 16) {
            return Some(Number::Int(i));
        }
        if let Some(f) = parse_hex_float(&s[2..]) {
            return Some(Number::Float(f));
        }
    }
    if let Ok(i) = s.parse::<i64>() {
        return Some(Number::Int(i));
    }
    if let Ok(f) = s.parse::<f64>() {
        return Some(Number::Float(f));
    }
    None
}

/// Hexadecimal float: hex digits with an optional fraction and an optional
/// binary exponent (`p`/`P`, signed decimal). The `0x` prefix is already
/// stripped by the caller.
fn parse_hex_float(s: &str) -> Option<f64> {
    let mut chars = s.chars().peekable();
    let mut mantissa = 0.0f64;
    let mut any_digit = false;

    while let Some(d) = chars.peek().and_then(|c| c.to_digit(16)) {
        mantissa = mantissa * 16.0 + d as f64;
        any_digit = true;
        chars.next();
    }
    if chars.peek() == Some(&'.') {
        chars.next();
        let mut scale = 1.0 / 16.0;
        while let Some(d) = chars.peek().and_then(|c| c.to_digit(16)) {
            mantissa += d as f64 * scale;
            scale /= 16.0;
            any_digit = true;
            chars.next();
        }
    }
    if !any_digit {
        return None;
    }

    let mut exponent = 0i32;
    match chars.next() {
        None => {}
        Some('p') | Some('P') => {
            let mut sign = 1i32;
            match chars.peek() {
                Some('+') => {
                    chars.next();
                }
                Some('-') => {
                    sign = -1;
                    chars.next();
                }
                _ => {}
            }
            let mut any_exp_digit = false;
            let mut exp = 0i32;
            while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
                exp = exp.saturating_mul(10).saturating_add(d as i32);
                any_exp_digit = true;
                chars.next();
            }
            if !any_exp_digit || chars.next().is_some() {
                return None;
            }
            exponent = sign * exp;
        }
        Some(_) => return None,
    }

    Some(mantissa * 2f64.powi(exponent))
}

/// A valid name starts with a letter or underscore, contains only letters
/// and underscores (no digits), and is not a reserved word.
fn is_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    if !s.chars().all(|c| c.is_alphabetic() || c == '_') {
        return false;
    }
    !RESERVED.contains(&s)
}
