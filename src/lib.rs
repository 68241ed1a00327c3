//! A lenient parser for JSON-like text.  Input is a contiguous slice of bytes and the output is a
//! [JsonValue] tree which borrows string content directly from the input.
//!
//! The accepted language differs from strict JSON in a few deliberate ways:
//! - strings are taken verbatim between two quotes, escape sequences are not translated
//! - commas and whitespace are interchangeable between array elements and object members
//! - numbers have no exponent form
//! - anything after the first complete value is ignored (unless
//!   [dom::ParserOptions::require_full_input] is set)
//! - an empty input parses to an empty string, and input holding only whitespace parses to null
use std::borrow::Cow;
use std::collections::HashMap;

pub mod coords;
pub mod dom;
pub mod errors;
pub mod lexer;
pub mod lexer_input;
pub mod scanner;

pub use dom::{Parser, ParserOptions};
pub use errors::{ParserError, ParserErrorDetails, ParserErrorKind, ParserResult};

/// Map type used for parsed objects. Keys are the raw key bytes
pub type JsonObject<'a> = HashMap<Cow<'a, [u8]>, JsonValue<'a>>;

/// Basic enumeration of different Json values
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue<'a> {
    /// Map of values. A repeated key overwrites the earlier value
    Object(JsonObject<'a>),
    /// Array of values
    Array(Vec<JsonValue<'a>>),
    /// Raw string bytes, exactly as they appear between the quotes
    String(Cow<'a, [u8]>),
    /// Floating point numeric value
    Float(f64),
    /// Integer numeric value
    Integer(i64),
    /// Canonical boolean value
    Boolean(bool),
    /// Canonical null value
    Null,
}

/// Fieldless discriminant of a [JsonValue]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum JsonKind {
    Object,
    Array,
    String,
    Float,
    Integer,
    Boolean,
    Null,
}

impl<'a> JsonValue<'a> {
    /// The empty string, produced for empty input
    pub fn empty_string() -> Self {
        JsonValue::String(Cow::Borrowed(&[]))
    }

    pub fn kind(&self) -> JsonKind {
        match self {
            JsonValue::Object(_) => JsonKind::Object,
            JsonValue::Array(_) => JsonKind::Array,
            JsonValue::String(_) => JsonKind::String,
            JsonValue::Float(_) => JsonKind::Float,
            JsonValue::Integer(_) => JsonKind::Integer,
            JsonValue::Boolean(_) => JsonKind::Boolean,
            JsonValue::Null => JsonKind::Null,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JsonValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// The raw bytes of a string value
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            JsonValue::String(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// A string value viewed as UTF-8. `None` for non-strings and for strings whose raw bytes
    /// aren't valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|b| std::str::from_utf8(b).ok())
    }

    pub fn as_array(&self) -> Option<&[JsonValue<'a>]> {
        match self {
            JsonValue::Array(values) => Some(values.as_slice()),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&JsonObject<'a>> {
        match self {
            JsonValue::Object(pairs) => Some(pairs),
            _ => None,
        }
    }

    /// Look up a member of an object value by key
    pub fn get<K: AsRef<[u8]>>(&self, key: K) -> Option<&JsonValue<'a>> {
        self.as_object().and_then(|pairs| pairs.get(key.as_ref()))
    }

    /// Detach the value from the lifetime of the input by copying any borrowed string bytes
    pub fn into_owned(self) -> JsonValue<'static> {
        match self {
            JsonValue::Object(pairs) => JsonValue::Object(
                pairs
                    .into_iter()
                    .map(|(k, v)| (Cow::Owned(k.into_owned()), v.into_owned()))
                    .collect(),
            ),
            JsonValue::Array(values) => {
                JsonValue::Array(values.into_iter().map(JsonValue::into_owned).collect())
            }
            JsonValue::String(s) => JsonValue::String(Cow::Owned(s.into_owned())),
            JsonValue::Float(f) => JsonValue::Float(f),
            JsonValue::Integer(i) => JsonValue::Integer(i),
            JsonValue::Boolean(b) => JsonValue::Boolean(b),
            JsonValue::Null => JsonValue::Null,
        }
    }
}

/// Parse a slice of bytes with a default [Parser]
pub fn parse_bytes(bytes: &[u8]) -> ParserResult<JsonValue<'_>> {
    Parser::default().parse_bytes(bytes)
}

/// Parse a string slice with a default [Parser]
pub fn parse_str(str: &str) -> ParserResult<JsonValue<'_>> {
    Parser::default().parse_str(str)
}

#[cfg(test)]
mod tests {
    use crate::{parse_bytes, JsonKind, JsonValue};
    use std::borrow::Cow;

    #[test]
    fn should_expose_typed_accessors() {
        let parsed = parse_bytes(br#"{"a": [1, 2.5, "x", true, null]}"#).unwrap();
        assert_eq!(parsed.kind(), JsonKind::Object);
        let values = parsed.get("a").and_then(JsonValue::as_array).unwrap();
        assert_eq!(values[0].as_i64(), Some(1));
        assert_eq!(values[1].as_f64(), Some(2.5));
        assert_eq!(values[2].as_str(), Some("x"));
        assert_eq!(values[3].as_bool(), Some(true));
        assert!(values[4].is_null());
        assert_eq!(values[0].as_f64(), None);
        assert!(parsed.get("missing").is_none());
    }

    #[test]
    fn should_not_view_invalid_utf8_as_str() {
        let parsed = parse_bytes(b"\"\xc3\x28\"").unwrap();
        assert_eq!(parsed.as_bytes(), Some(&b"\xc3\x28"[..]));
        assert_eq!(parsed.as_str(), None);
    }

    #[test]
    fn should_detach_from_the_input() {
        let owned = {
            let source = String::from(r#"["abc", {"k": "v"}]"#);
            parse_bytes(source.as_bytes()).unwrap().into_owned()
        };
        match &owned {
            JsonValue::Array(values) => {
                assert!(matches!(&values[0], JsonValue::String(Cow::Owned(_))));
                assert_eq!(values[1].get("k").and_then(JsonValue::as_str), Some("v"));
            }
            other => panic!("expected an array, found {:?}", other),
        }
    }

    #[test]
    fn should_report_kinds() {
        assert_eq!(JsonValue::Null.kind(), JsonKind::Null);
        assert_eq!(JsonValue::empty_string().kind(), JsonKind::String);
    }
}
