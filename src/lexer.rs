//! Matching of the primitive values: the `null`, `true` and `false` literals, numbers and strings.
//! Every match routine expects the cursor to sit on the first byte of the value (as decided by
//! [crate::scanner::Lexeme::classify]) and leaves it just past the end of the value on success.
use std::borrow::Cow;

use crate::coords::Coords;
use crate::errors::{ParserError, ParserErrorDetails, ParserResult};
use crate::lexer_input::LexerInput;
use crate::parser_error;
use crate::scanner::{is_float_part, is_numeric};

/// Byte sequence forming a 'null' literal
const NULL_SEQUENCE: &[u8] = b"null";
/// Byte sequence forming a 'true' literal
const TRUE_SEQUENCE: &[u8] = b"true";
/// Byte sequence forming a 'false' literal
const FALSE_SEQUENCE: &[u8] = b"false";

/// A lexer over a contiguous, fully addressable byte input
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: LexerInput<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Lexer {
            input: LexerInput::new(bytes),
        }
    }

    /// The underlying [LexerInput]
    pub fn input(&self) -> &LexerInput<'a> {
        &self.input
    }

    /// The underlying [LexerInput], mutably
    pub fn input_mut(&mut self) -> &mut LexerInput<'a> {
        &mut self.input
    }

    /// Consume and match (exactly) a fixed sequence of bytes.  Nothing is consumed on a mismatch,
    /// which includes there not being enough input left to hold the whole sequence
    fn match_exact(&mut self, seq: &[u8], name: &'static str) -> ParserResult<()> {
        if self.input.remaining().starts_with(seq) {
            self.input.advance(seq.len());
            Ok(())
        } else {
            parser_error!(
                ParserErrorDetails::MalformedLiteral(name),
                self.input.coords()
            )
        }
    }

    /// Match a `null` literal
    pub fn match_null(&mut self) -> ParserResult<()> {
        self.match_exact(NULL_SEQUENCE, "null")
    }

    /// Match a `true` literal
    pub fn match_true(&mut self) -> ParserResult<bool> {
        self.match_exact(TRUE_SEQUENCE, "true").map(|_| true)
    }

    /// Match a `false` literal
    pub fn match_false(&mut self) -> ParserResult<bool> {
        self.match_exact(FALSE_SEQUENCE, "false").map(|_| false)
    }

    /// Attempts to match a string.  Everything between the opening quote and the next quote is
    /// taken verbatim: a backslash is an ordinary byte and no escape sequences are translated.
    /// The returned bytes borrow from the input
    pub fn match_string(&mut self) -> ParserResult<Cow<'a, [u8]>> {
        let start = self.input.coords();
        self.input.advance(1);
        let body = self.input.position();
        self.input.advance_while(|b| b != b'"');
        if self.input.is_exhausted() {
            self.input.reset(start);
            return parser_error!(ParserErrorDetails::UnterminatedString, start);
        }
        let value = self.input.slice_from(body);
        self.input.advance(1);
        Ok(Cow::Borrowed(value))
    }

    /// Attempt to match a number.  The float form is tried first and if that fails the cursor is
    /// rewound and the integer form is tried instead
    pub fn match_number(&mut self) -> ParserResult<Number> {
        let start = self.input.coords();
        match self.match_float() {
            Ok(value) => Ok(Number::Float(value)),
            Err(_) => {
                self.input.reset(start);
                self.match_integer().map(Number::Integer)
            }
        }
    }

    /// Match the maximal run of sign, digit and dot bytes as a float.  There has to be a dot with
    /// at least one digit straight after it.  Uses fast_float to carry out the conversion
    fn match_float(&mut self) -> ParserResult<f64> {
        let start = self.input.coords();
        self.input.advance_while(is_float_part);
        let lexeme = self.input.slice_from(start.absolute);
        let has_fraction = match lexeme.iter().position(|b| *b == b'.') {
            Some(dot) => lexeme.get(dot + 1).map_or(false, u8::is_ascii_digit),
            None => false,
        };
        if !has_fraction {
            return parser_error!(
                ParserErrorDetails::MalformedNumber("expected a fraction part".to_string()),
                start
            );
        }
        match fast_float::parse::<f64, _>(lexeme) {
            Ok(value) if value.is_finite() => Ok(value),
            Ok(_) => number_error(lexeme, "is out of range", start),
            Err(_) => number_error(lexeme, "is not a valid float", start),
        }
    }

    /// Match the maximal run of sign and digit bytes as a 64-bit signed integer, using lexical to
    /// carry out the conversion.  Overflow is reported as lexical reports it
    fn match_integer(&mut self) -> ParserResult<i64> {
        let start = self.input.coords();
        self.input.advance_while(is_numeric);
        let lexeme = self.input.slice_from(start.absolute);
        match lexical::parse::<i64, _>(lexeme) {
            Ok(value) => Ok(value),
            Err(err) => {
                self.input.reset(start);
                parser_error!(
                    ParserErrorDetails::MalformedNumber(format!(
                        "`{}`: {}",
                        String::from_utf8_lossy(lexeme),
                        err
                    )),
                    start
                )
            }
        }
    }
}

/// The two flavours of numeric value the lexer can produce
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

fn number_error<T>(lexeme: &[u8], reason: &str, coords: Coords) -> ParserResult<T> {
    Err(ParserError {
        details: ParserErrorDetails::MalformedNumber(format!(
            "`{}` {}",
            String::from_utf8_lossy(lexeme),
            reason
        )),
        coords: Some(coords),
    })
}
