//! # luatbl-core
//!
//! Parser and serializer for **Lua table literals** — the nested constant
//! `{ ... }` syntax widely used for configuration and save data. Text is
//! decoded into a generic value tree and re-encoded in a fixed canonical
//! form, preserving round-trip fidelity. Only the literal subset is
//! handled: no expressions, functions, or metatables, and the data is
//! always a finite tree.
//!
//! ## Quick start
//!
//! ```rust
//! use luatbl_core::{decode, encode};
//!
//! // Mapping tables re-encode one entry per line, 4-space indented.
//! let value = decode("{ coins = 42, name = 'Slugger' }").unwrap();
//! assert_eq!(encode(&value), "{\n    ['coins'] = 42,\n    ['name'] = 'Slugger'\n}");
//!
//! // Sequence tables stay on one line.
//! let seq = decode("{1, 2, 3}").unwrap();
//! assert_eq!(encode(&seq), "{ 1, 2, 3 }");
//! ```
//!
//! ## Modules
//!
//! - [`cursor`] — scan position, lexeme extraction, string/comment lexing
//! - [`token`] — lexeme classification (keywords, numbers, names)
//! - [`decoder`] — recursive-descent parser, text → [`Value`]
//! - [`encoder`] — canonical serializer, [`Value`] → text
//! - [`bridge`] — [`Value`] ⇄ `serde_json::Value` conversion
//! - [`table`] — the [`LuaTable`] document type (load/dump, files, get/set)
//! - [`error`] — parse and document error types

pub mod bridge;
pub mod cursor;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod table;
pub mod token;
pub mod value;

pub use bridge::{from_json, to_json};
pub use decoder::decode;
pub use encoder::encode;
pub use error::{LuaError, ParseError};
pub use table::LuaTable;
pub use value::{Key, Map, Number, Table, Value};
