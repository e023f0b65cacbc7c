//! snbtlite parses SNBT, the stringified form of *Minecraft: Java
//! Edition*'s NBT format, into an owned [`Value`] tree. SNBT turns up in
//! community-sourced item data: player-head textures, model identifiers,
//! attribute compounds. Such strings are frequently hand-edited and
//! occasionally malformed, so the parser either fully succeeds or fails
//! with a structured, position-carrying error; it never panics on bad
//! input and never returns a partial tree.
//!
//! * For the tagged value model see [`Value`].
//! * For NBT array types see [`ByteArray`], [`IntArray`], and [`LongArray`].
//! * For parse failures see [`error::Error`] and [`error::ErrorKind`].
//!
//! ```toml
//! [dependencies]
//! snbtlite = "0.1"
//! ```
//!
//! # Quick example
//!
//! ```
//! use snbtlite::Value;
//!
//! let item = snbtlite::parse(r#"{id:"minecraft:player_head",Count:1B}"#).unwrap();
//!
//! assert_eq!(item.get("id").and_then(Value::as_str), Some("minecraft:player_head"));
//! assert_eq!(item.get("Count").and_then(Value::as_f64), Some(1.0));
//! ```
//!
//! # Fallible callers
//!
//! Code that ingests untrusted strings usually wants [`safe_parse`] or
//! [`is_valid`] rather than matching on the error:
//!
//! ```
//! assert!(snbtlite::safe_parse("{broken").is_none());
//! assert!(snbtlite::is_valid("[1,2,3]"));
//! ```
//!
//! # Depth limiting
//!
//! Nesting is bounded (default 100 levels) so that pathological input fails
//! with an error instead of exhausting the call stack. The bound counts
//! every parsed value, not just containers, and can be adjusted through
//! [`ParseOpts`].

pub mod error;

mod arrays;
mod parser;
mod value;

pub use arrays::{ByteArray, IntArray, LongArray};
pub use parser::{ParseOpts, Parser};
pub use value::Value;

use error::Result;

#[cfg(test)]
mod tests;

/// Parse SNBT text into a [`Value`] using default options.
///
/// Fails with a structured [`error::Error`] on any grammar violation, on
/// nesting past the depth limit, and on trailing non-whitespace content.
///
/// ```
/// let list = snbtlite::parse("[0:\"first\",1:\"second\"]").unwrap();
/// assert_eq!(list.get_index(1).unwrap(), "second");
///
/// let err = snbtlite::parse("{name:").unwrap_err();
/// assert!(err.position() > 0);
/// ```
pub fn parse(input: &str) -> Result<Value> {
    Parser::new(input).parse()
}

/// Like [`parse`], with explicit [`ParseOpts`].
pub fn parse_with_opts(input: &str, opts: ParseOpts) -> Result<Value> {
    Parser::with_opts(input, opts).parse()
}

/// Parse SNBT text, absorbing parse failures into `None`.
///
/// The error type carries exactly the grammar and depth failures, so this
/// absorbs nothing else; defects in the caller's own code still surface
/// normally.
pub fn safe_parse(input: &str) -> Option<Value> {
    parse(input).ok()
}

/// Like [`safe_parse`], with explicit [`ParseOpts`].
pub fn safe_parse_with_opts(input: &str, opts: ParseOpts) -> Option<Value> {
    parse_with_opts(input, opts).ok()
}

/// True iff the input parses as SNBT.
pub fn is_valid(input: &str) -> bool {
    parse(input).is_ok()
}

/// Like [`is_valid`], with explicit [`ParseOpts`].
pub fn is_valid_with_opts(input: &str, opts: ParseOpts) -> bool {
    parse_with_opts(input, opts).is_ok()
}
