//! The DOM parser
//!
//! Recursive descent over a [Lexer], producing a complete [JsonValue] tree.  Arrays and objects
//! recurse back into [Parser::parse_value] for each of their elements, and the first failure
//! anywhere below aborts the whole parse.
use crate::errors::{ParserErrorDetails, ParserResult};
use crate::lexer::{Lexer, Number};
use crate::parser_error;
use crate::scanner::{is_separator, Lexeme};
use crate::{JsonObject, JsonValue};

/// Configuration for a [Parser]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum nesting depth of arrays and objects.  `None` leaves nesting unbounded, in which
    /// case pathologically deep input can exhaust the stack
    pub max_depth: Option<usize>,
    /// Reject anything other than whitespace after the first complete value
    pub require_full_input: bool,
}

/// Main JSON parser struct
#[derive(Debug, Default, Clone)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    /// Create a new instance of the parser using a specific set of [ParserOptions]
    pub fn with_options(options: ParserOptions) -> Self {
        Self { options }
    }

    /// Create a new instance of the parser which limits nesting to `max_depth` levels
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self::with_options(ParserOptions {
            max_depth: Some(max_depth),
            ..Default::default()
        })
    }

    /// Parse a single value from the start of `bytes`, after any leading whitespace.  Empty input
    /// produces an empty string rather than an error, and input holding nothing but whitespace
    /// produces null.  Unless the parser is configured otherwise, whatever follows the first value
    /// is ignored
    pub fn parse_bytes<'a>(&self, bytes: &'a [u8]) -> ParserResult<JsonValue<'a>> {
        if bytes.is_empty() {
            return Ok(JsonValue::empty_string());
        }
        let mut lexer = Lexer::new(bytes);
        lexer.input_mut().skip_whitespace();
        if lexer.input().is_exhausted() {
            return Ok(JsonValue::Null);
        }
        let value = self.parse_value(&mut lexer, 0)?;
        if self.options.require_full_input {
            lexer.input_mut().skip_whitespace();
            if !lexer.input().is_exhausted() {
                return parser_error!(
                    ParserErrorDetails::TrailingCharacters,
                    lexer.input().coords()
                );
            }
        }
        Ok(value)
    }

    pub fn parse_str<'a>(&self, str: &'a str) -> ParserResult<JsonValue<'a>> {
        self.parse_bytes(str.as_bytes())
    }

    /// Dispatch on the next byte to the matching routine for the value starting there
    fn parse_value<'a>(&self, lexer: &mut Lexer<'a>, depth: usize) -> ParserResult<JsonValue<'a>> {
        let coords = lexer.input().coords();
        let byte = match lexer.input().peek() {
            Some(b) => b,
            None => return parser_error!(ParserErrorDetails::EndOfInput, coords),
        };
        match Lexeme::classify(byte) {
            Lexeme::LeftBrace => self.parse_object(lexer, depth + 1),
            Lexeme::LeftBracket => self.parse_array(lexer, depth + 1),
            Lexeme::DoubleQuote => lexer.match_string().map(JsonValue::String),
            Lexeme::Numeric(_) => match lexer.match_number()? {
                Number::Integer(value) => Ok(JsonValue::Integer(value)),
                Number::Float(value) => Ok(JsonValue::Float(value)),
            },
            Lexeme::Null => lexer.match_null().map(|_| JsonValue::Null),
            Lexeme::True => lexer.match_true().map(JsonValue::Boolean),
            Lexeme::False => lexer.match_false().map(JsonValue::Boolean),
            Lexeme::NotRecognised(found) => parser_error!(
                ParserErrorDetails::UnrecognizedCharacter {
                    found,
                    context: lexer.input().context()
                },
                coords
            ),
        }
    }

    fn check_depth(&self, lexer: &Lexer, depth: usize) -> ParserResult<()> {
        match self.options.max_depth {
            Some(max) if depth > max => parser_error!(
                ParserErrorDetails::DepthLimitExceeded(max),
                lexer.input().coords()
            ),
            _ => Ok(()),
        }
    }

    /// An array is a list of values.  Commas and whitespace are both just skipped, so neither a
    /// missing nor a repeated comma is an error
    fn parse_array<'a>(&self, lexer: &mut Lexer<'a>, depth: usize) -> ParserResult<JsonValue<'a>> {
        self.check_depth(lexer, depth)?;
        let start = lexer.input().coords();
        lexer.input_mut().advance(1);
        lexer.input_mut().skip_whitespace();
        let mut values: Vec<JsonValue> = vec![];
        loop {
            match lexer.input().peek() {
                Some(b']') => {
                    lexer.input_mut().advance(1);
                    return Ok(JsonValue::Array(values));
                }
                Some(b) if is_separator(b) => lexer.input_mut().advance(1),
                Some(_) => values.push(self.parse_value(lexer, depth)?),
                None => return parser_error!(ParserErrorDetails::UnterminatedArray, start),
            }
        }
    }

    /// An object is a list of `"key": value` pairs, separated in the same lenient manner as array
    /// elements.  Later duplicates of a key replace earlier ones
    fn parse_object<'a>(&self, lexer: &mut Lexer<'a>, depth: usize) -> ParserResult<JsonValue<'a>> {
        self.check_depth(lexer, depth)?;
        let start = lexer.input().coords();
        lexer.input_mut().advance(1);
        lexer.input_mut().skip_whitespace();
        match lexer.input().peek() {
            Some(b'"') | Some(b'}') | None => (),
            Some(b) => {
                return parser_error!(
                    ParserErrorDetails::MalformedObjectKey(b),
                    lexer.input().coords()
                )
            }
        }
        let mut pairs = JsonObject::new();
        loop {
            let coords = lexer.input().coords();
            match lexer.input().peek() {
                Some(b'}') => {
                    lexer.input_mut().advance(1);
                    return Ok(JsonValue::Object(pairs));
                }
                Some(b) if is_separator(b) => lexer.input_mut().advance(1),
                Some(b'"') => {
                    let key = lexer.match_string()?;
                    lexer.input_mut().skip_whitespace();
                    match lexer.input().peek() {
                        Some(b':') => lexer.input_mut().advance(1),
                        found => {
                            return parser_error!(
                                ParserErrorDetails::MissingColon(found),
                                lexer.input().coords()
                            )
                        }
                    }
                    lexer.input_mut().skip_whitespace();
                    if lexer.input().is_exhausted() {
                        return parser_error!(ParserErrorDetails::UnterminatedObject, start);
                    }
                    let value = self.parse_value(lexer, depth)?;
                    pairs.insert(key, value);
                }
                Some(b) => return parser_error!(ParserErrorDetails::MalformedObjectKey(b), coords),
                None => return parser_error!(ParserErrorDetails::UnterminatedObject, start),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use crate::dom::{Parser, ParserOptions};
    use crate::errors::{ParserErrorDetails, ParserErrorKind};
    use crate::JsonValue;

    fn string(s: &str) -> JsonValue {
        JsonValue::String(Cow::Borrowed(s.as_bytes()))
    }

    #[test]
    fn should_parse_char_slices_directly() {
        let source = r#"{
            "test" : 1232.0,
            "some other" : "thasdasd",
            "a bool" : true,
            "an array" : [1,2,3,4,5.8,6,7.2,7,8,10]
        }"#;
        let parser = Parser::default();
        let parsed = parser.parse_str(source).unwrap();
        assert_eq!(parsed.get("test"), Some(&JsonValue::Float(1232.0)));
        assert_eq!(parsed.get("some other"), Some(&string("thasdasd")));
        assert_eq!(parsed.get("a bool"), Some(&JsonValue::Boolean(true)));
        let values = parsed.get("an array").and_then(JsonValue::as_array).unwrap();
        assert_eq!(values.len(), 10);
        assert_eq!(values[4], JsonValue::Float(5.8));
        assert_eq!(values[9], JsonValue::Integer(10));
    }

    #[test]
    fn should_treat_empty_input_as_empty_string() {
        let parser = Parser::default();
        assert_eq!(parser.parse_bytes(b"").unwrap(), string(""));
    }

    #[test]
    fn should_treat_whitespace_only_input_as_null() {
        let parser = Parser::default();
        assert_eq!(parser.parse_bytes(b"   ").unwrap(), JsonValue::Null);
        assert_eq!(parser.parse_bytes(b" \n\t ").unwrap(), JsonValue::Null);
    }

    #[test]
    fn should_absorb_repeated_and_missing_commas() {
        let parsed = Parser::default().parse_str("[1,,, 2 3,]").unwrap();
        assert_eq!(
            parsed,
            JsonValue::Array(vec![
                JsonValue::Integer(1),
                JsonValue::Integer(2),
                JsonValue::Integer(3)
            ])
        );
    }

    #[test]
    fn should_overwrite_duplicate_keys() {
        let parsed = Parser::default().parse_str(r#"{"a": 1, "a": 2}"#).unwrap();
        assert_eq!(parsed.as_object().unwrap().len(), 1);
        assert_eq!(parsed.get("a"), Some(&JsonValue::Integer(2)));
    }

    #[test]
    fn should_ignore_trailing_input_by_default() {
        let parsed = Parser::default().parse_str("[1] trailing").unwrap();
        assert_eq!(parsed, JsonValue::Array(vec![JsonValue::Integer(1)]));
        assert_eq!(Parser::default().parse_str("1.5e3").unwrap(), JsonValue::Float(1.5));
    }

    #[test]
    fn should_reject_trailing_input_when_configured() {
        let parser = Parser::with_options(ParserOptions {
            require_full_input: true,
            ..Default::default()
        });
        assert!(parser.parse_str("[1]  \n").is_ok());
        let err = parser.parse_str("[1] 2").unwrap_err();
        assert_eq!(err.kind(), ParserErrorKind::TrailingCharacters);
        assert_eq!(err.coords.unwrap().absolute, 4);
    }

    #[test]
    fn should_enforce_a_maximum_depth() {
        let parser = Parser::with_max_depth(2);
        assert!(parser.parse_str("[[1]]").is_ok());
        assert!(parser.parse_str(r#"{"a": [1]}"#).is_ok());
        let err = parser.parse_str("[[[1]]]").unwrap_err();
        assert_eq!(err.details, ParserErrorDetails::DepthLimitExceeded(2));
        assert_eq!(err.coords.unwrap().absolute, 2);
    }

    #[test]
    fn should_report_unrecognised_characters_with_context() {
        let err = Parser::default().parse_str("[1, x]").unwrap_err();
        match err.details {
            ParserErrorDetails::UnrecognizedCharacter { found, context } => {
                assert_eq!(found, b'x');
                assert_eq!(context, "[1, x]");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(err.coords.unwrap().absolute, 4);
    }

    #[test]
    fn should_reject_bad_object_keys() {
        let parser = Parser::default();
        let err = parser.parse_str("{1: 2}").unwrap_err();
        assert_eq!(err.details, ParserErrorDetails::MalformedObjectKey(b'1'));
        let err = parser.parse_str("{,}").unwrap_err();
        assert_eq!(err.details, ParserErrorDetails::MalformedObjectKey(b','));
        assert_eq!(err.coords.unwrap().absolute, 1);
        let err = parser.parse_str(r#"{"a": 1, b: 2}"#).unwrap_err();
        assert_eq!(err.details, ParserErrorDetails::MalformedObjectKey(b'b'));
    }

    #[test]
    fn should_reject_missing_colons() {
        let parser = Parser::default();
        let err = parser.parse_str(r#"{"a" 1}"#).unwrap_err();
        assert_eq!(err.details, ParserErrorDetails::MissingColon(Some(b'1')));
        let err = parser.parse_str(r#"{"a""#).unwrap_err();
        assert_eq!(err.details, ParserErrorDetails::MissingColon(None));
    }

    #[test]
    fn should_reject_unterminated_composites() {
        let parser = Parser::default();
        for (source, kind) in [
            ("[1, 2", ParserErrorKind::UnterminatedArray),
            ("[", ParserErrorKind::UnterminatedArray),
            ("{", ParserErrorKind::UnterminatedObject),
            (r#"{"a": 1"#, ParserErrorKind::UnterminatedObject),
            (r#"{"a": "#, ParserErrorKind::UnterminatedObject),
            (r#"[{"a": [1]"#, ParserErrorKind::UnterminatedObject),
        ] {
            assert_eq!(parser.parse_str(source).unwrap_err().kind(), kind, "{}", source);
        }
    }

    #[test]
    fn should_surface_the_first_nested_failure() {
        let err = Parser::default()
            .parse_str(r#"{"a": [1, {"b": tru}]}"#)
            .unwrap_err();
        assert_eq!(err.details, ParserErrorDetails::MalformedLiteral("true"));
        assert_eq!(err.coords.unwrap().absolute, 16);
    }
}
