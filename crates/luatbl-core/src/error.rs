//! Error types for Lua table-literal parsing and document operations.

use thiserror::Error;

/// Errors detected while parsing a table literal.
///
/// Each grammar or lexical failure gets its own variant so callers (and
/// tests) can match on the condition rather than scraping messages.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A quoted string ran past the end of the input without a closing quote.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// A `[==[ ... ]==]` long-bracket string or comment has no matching
    /// closer at the same level.
    #[error("unterminated long-bracket string")]
    UnterminatedLongString,

    /// A `\xHH` escape with fewer than two hex digits, or an otherwise
    /// undecodable escape sequence.
    #[error("invalid escape sequence: {0}")]
    InvalidEscape(String),

    /// The input did not start with `{` where a table was required.
    #[error("expected '{{' when parsing table, got '{0}'")]
    MissingOpenBrace(String),

    /// The table's fields ended without a closing `}`.
    #[error("expected '}}' when parsing table, got '{0}'")]
    MissingCloseBrace(String),

    /// A bracketed key `[exp]` was not closed with `]`.
    #[error("expected ']' after table key, got '{0}'")]
    MissingCloseBracket(String),

    /// Two fields were not separated by `,` or `;`.
    #[error("expected ',' or ';' between fields, got '{0}'")]
    MissingSeparator(String),

    /// A bracketed key was not followed by `=`.
    #[error("expected '=' after table key, got '{0}'")]
    MissingEquals(String),

    /// A value of a kind that cannot be a table key appeared in key
    /// position (nil, boolean, table, or a string/number via name syntax).
    #[error("table key cannot be {0}")]
    InvalidKeyType(&'static str),

    /// A bare name appeared where a value was expected.
    #[error("name '{0}' cannot appear as a value")]
    NameAsValue(String),

    /// A lexeme that is not a keyword, number, or valid name.
    #[error("unrecognized token '{0}'")]
    UnrecognizedToken(String),

    /// The input ended in the middle of a construct.
    #[error("unexpected end of input")]
    UnexpectedEnd,

    /// The cursor was advanced past the end of its buffer. This indicates a
    /// bug in the parser, not malformed input.
    #[error("cursor advanced out of bounds")]
    OutOfBounds,

    /// Table nesting exceeded the recursion limit.
    #[error("table nesting exceeds maximum depth")]
    TooDeep,
}

/// Errors surfaced by the [`LuaTable`](crate::LuaTable) document type.
#[derive(Error, Debug)]
pub enum LuaError {
    /// The input text was not a valid table literal.
    #[error("lua table parse error: {0}")]
    Parse(#[from] ParseError),

    /// A file could not be read or written. Passed through untranslated.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// An indexed get for a key that is not present.
    #[error("key not found: {0}")]
    KeyNotFound(String),
}

/// Convenience alias used throughout the parsing core.
pub type Result<T> = std::result::Result<T, ParseError>;
